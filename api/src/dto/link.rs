use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sl_core::domain::entities::short_link::ShortLink;

/// Body of `POST /urls`
///
/// `longURL` is accepted as an alias, as sent by plain HTML forms. A blank
/// destination is rejected by the link service after the session check.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CreateLinkRequest {
    #[serde(alias = "longURL")]
    pub destination_url: String,
}

/// Body of `POST /urls/{code}`
///
/// Left unvalidated so ownership is checked before the payload.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct UpdateLinkRequest {
    #[serde(alias = "longURL")]
    pub destination_url: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LinkResponse {
    pub code: String,
    pub destination_url: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<ShortLink> for LinkResponse {
    fn from(link: ShortLink) -> Self {
        Self {
            code: link.code,
            destination_url: link.destination_url,
            created_at: link.created_at,
            updated_at: link.updated_at,
        }
    }
}

/// Body of `GET /urls`: code to destination
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LinkListResponse {
    pub links: HashMap<String, String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}
