// ABOUTME: Nutritionist contact records with recommendations and attached files
// ABOUTME: Identified by UUID; attachments reference files by URI only
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Vitality Health Tracker

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::{AppError, AppResult};

/// File attached to a nutritionist record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attachment {
    /// Location of the file
    pub uri: String,
    /// Display name
    pub name: String,
    /// MIME type
    #[serde(alias = "type")]
    pub mime_type: String,
}

/// A nutritionist the user follows
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Nutritionist {
    /// Record identifier
    pub id: Uuid,
    /// Full name
    #[serde(alias = "nome")]
    pub name: String,
    /// Contact e-mail
    #[serde(default)]
    pub email: String,
    /// Contact phone
    #[serde(default, alias = "telefone")]
    pub phone: String,
    /// Recommendations in the order they were received
    #[serde(default, alias = "recomendacoes")]
    pub recommendations: Vec<String>,
    /// Attached files
    #[serde(default, alias = "anexos")]
    pub attachments: Vec<Attachment>,
}

impl Nutritionist {
    /// Create a new record with a fresh identifier
    ///
    /// # Errors
    ///
    /// Returns `MissingRequiredField` if the name is blank.
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        phone: impl Into<String>,
    ) -> AppResult<Self> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(AppError::missing_field("name"));
        }
        Ok(Self {
            id: Uuid::new_v4(),
            name: name.trim().to_owned(),
            email: email.into(),
            phone: phone.into(),
            recommendations: Vec::new(),
            attachments: Vec::new(),
        })
    }
}
