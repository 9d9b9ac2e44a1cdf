use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;

use crate::{
    application::usecases::invoices::InvoiceError,
    domain::value_objects::invoices::InvoiceFormErrors,
};

/// Error payload rendered inline by the form UI: optional field-keyed
/// messages plus a general message.
#[derive(Debug, Serialize)]
pub struct FormErrorResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub errors: Option<InvoiceFormErrors>,
    pub message: String,
}

impl IntoResponse for InvoiceError {
    fn into_response(self) -> Response {
        let (status, errors, message) = match self {
            InvoiceError::Validation { errors, message } => {
                (StatusCode::UNPROCESSABLE_ENTITY, Some(errors), message)
            }
            InvoiceError::Database(message) => {
                (StatusCode::INTERNAL_SERVER_ERROR, None, message)
            }
            InvoiceError::DeletesDisabled => (
                StatusCode::INTERNAL_SERVER_ERROR,
                None,
                "Failed to Delete Invoice".to_string(),
            ),
        };

        let body = Json(FormErrorResponse { errors, message });

        (status, body).into_response()
    }
}
