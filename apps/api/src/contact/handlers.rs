use axum::Json;
use tracing::info;

use crate::contact::{acknowledge, missing_fields, ContactAck, ContactRequest};
use crate::errors::AppError;

/// POST /api/v1/contact
pub async fn handle_contact(Json(req): Json<ContactRequest>) -> Result<Json<ContactAck>, AppError> {
    let missing = missing_fields(&req);
    if !missing.is_empty() {
        return Err(AppError::Validation(format!(
            "Required fields are empty: {}",
            missing.join(", ")
        )));
    }

    let ack = acknowledge();
    info!(
        reference = %ack.reference,
        name_len = req.name.trim().len(),
        message_len = req.message.trim().len(),
        "Contact form received"
    );
    Ok(Json(ack))
}
