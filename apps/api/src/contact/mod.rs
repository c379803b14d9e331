//! Contact form — field validation only. Submissions are acknowledged and
//! logged, never delivered or stored.

pub mod handlers;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ContactRequest {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub message: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct ContactAck {
    pub status: String,
    pub reference: Uuid,
    pub received_at: DateTime<Utc>,
}

/// Names of the fields that are blank after trimming, in form order.
pub fn missing_fields(req: &ContactRequest) -> Vec<&'static str> {
    [
        ("name", &req.name),
        ("email", &req.email),
        ("message", &req.message),
    ]
    .into_iter()
    .filter(|(_, value)| value.trim().is_empty())
    .map(|(field, _)| field)
    .collect()
}

pub fn acknowledge() -> ContactAck {
    ContactAck {
        status: "received".to_string(),
        reference: Uuid::new_v4(),
        received_at: Utc::now(),
    }
}
