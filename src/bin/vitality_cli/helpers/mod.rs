// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Vitality Health Tracker
// ABOUTME: Helper modules for vitality-cli
// ABOUTME: Provides display formatting utilities

pub mod display;
