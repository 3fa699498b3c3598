// ABOUTME: Configuration module for application-level settings
// ABOUTME: Engine thresholds live in vitality-intelligence; this covers storage and logging
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Vitality Health Tracker

/// Environment-based application configuration
pub mod environment;

pub use environment::AppConfig;
pub use vitality_intelligence::config::IntelligenceConfig;
