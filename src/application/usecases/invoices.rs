use std::sync::Arc;

use chrono::Utc;
use thiserror::Error;
use tracing::{error, info, warn};

use crate::domain::{
    entities::invoices::{InsertInvoiceEntity, UpdateInvoiceEntity},
    repositories::{invoices::InvoiceRepository, view_cache::ViewCache},
    value_objects::invoices::{InvoiceForm, InvoiceFormErrors, InvoiceModel},
};

/// Path of the cached invoice-list view. Mutations invalidate it and the
/// HTTP layer redirects back to it.
pub const INVOICES_VIEW_PATH: &str = "/dashboard/invoices";

pub const CREATE_MISSING_FIELDS: &str = "Missing Fields. Failed to Create Invoice.";
pub const UPDATE_MISSING_FIELDS: &str = "Missing Fields. Failed to Update Invoice.";
pub const CREATE_DB_ERROR: &str = "Database Error: Failed to Create Invoice.";
pub const UPDATE_DB_ERROR: &str = "Database Error: Failed to Update Invoice.";
pub const DELETE_DB_ERROR: &str = "Database Error: Failed to Delete Invoice.";
pub const LIST_DB_ERROR: &str = "Database Error: Failed to Fetch Invoices.";

#[derive(Debug, Error)]
pub enum InvoiceError {
    #[error("{message}")]
    Validation {
        errors: InvoiceFormErrors,
        message: String,
    },

    #[error("{0}")]
    Database(String),

    #[error("Failed to Delete Invoice")]
    DeletesDisabled,
}

pub struct InvoiceUseCase<R, C>
where
    R: InvoiceRepository + Send + Sync,
    C: ViewCache + Send + Sync,
{
    invoice_repository: Arc<R>,
    view_cache: Arc<C>,
    deletes_disabled: bool,
}

impl<R, C> InvoiceUseCase<R, C>
where
    R: InvoiceRepository + Send + Sync,
    C: ViewCache + Send + Sync,
{
    pub fn new(invoice_repository: Arc<R>, view_cache: Arc<C>, deletes_disabled: bool) -> Self {
        Self {
            invoice_repository,
            view_cache,
            deletes_disabled,
        }
    }

    pub async fn create_invoice(&self, form: InvoiceForm) -> Result<i64, InvoiceError> {
        let validated = form.validate().map_err(|errors| {
            warn!(?errors, "invoices: create rejected by validation");
            InvoiceError::Validation {
                errors,
                message: CREATE_MISSING_FIELDS.to_string(),
            }
        })?;

        let insert_invoice_entity = InsertInvoiceEntity {
            customer_id: validated.customer_id.clone(),
            amount_minor: validated.amount_minor(),
            status: validated.status.to_string(),
            date: Utc::now().date_naive(),
        };

        let invoice_id = self
            .invoice_repository
            .create(insert_invoice_entity)
            .await
            .map_err(|err| {
                error!(db_error = ?err, "invoices: failed to insert invoice");
                InvoiceError::Database(CREATE_DB_ERROR.to_string())
            })?;

        info!(
            invoice_id,
            customer_id = validated.customer_id,
            "invoices: invoice created"
        );
        self.invalidate_list_view().await;

        Ok(invoice_id)
    }

    pub async fn update_invoice(&self, invoice_id: i64, form: InvoiceForm) -> Result<(), InvoiceError> {
        let validated = form.validate().map_err(|errors| {
            warn!(invoice_id, ?errors, "invoices: update rejected by validation");
            InvoiceError::Validation {
                errors,
                message: UPDATE_MISSING_FIELDS.to_string(),
            }
        })?;

        let update_invoice_entity = UpdateInvoiceEntity {
            customer_id: validated.customer_id.clone(),
            amount_minor: validated.amount_minor(),
            status: validated.status.to_string(),
        };

        self.invoice_repository
            .update(invoice_id, update_invoice_entity)
            .await
            .map_err(|err| {
                error!(invoice_id, db_error = ?err, "invoices: failed to update invoice");
                InvoiceError::Database(UPDATE_DB_ERROR.to_string())
            })?;

        info!(invoice_id, "invoices: invoice updated");
        self.invalidate_list_view().await;

        Ok(())
    }

    pub async fn delete_invoice(&self, invoice_id: i64) -> Result<(), InvoiceError> {
        if self.deletes_disabled {
            warn!(invoice_id, "invoices: delete refused, deletions are disabled");
            return Err(InvoiceError::DeletesDisabled);
        }

        self.invoice_repository
            .delete(invoice_id)
            .await
            .map_err(|err| {
                error!(invoice_id, db_error = ?err, "invoices: failed to delete invoice");
                InvoiceError::Database(DELETE_DB_ERROR.to_string())
            })?;

        info!(invoice_id, "invoices: invoice deleted");
        self.invalidate_list_view().await;

        Ok(())
    }

    pub async fn list_invoices(&self) -> Result<Vec<InvoiceModel>, InvoiceError> {
        match self.view_cache.read(INVOICES_VIEW_PATH).await {
            Ok(Some(body)) => match serde_json::from_str::<Vec<InvoiceModel>>(&body) {
                Ok(invoices) => return Ok(invoices),
                Err(err) => {
                    warn!(parse_error = ?err, "invoices: cached list view is unreadable, refetching");
                }
            },
            Ok(None) => {}
            Err(err) => {
                warn!(cache_error = ?err, "invoices: list view cache read failed, refetching");
            }
        }

        let invoices = self
            .invoice_repository
            .list()
            .await
            .map_err(|err| {
                error!(db_error = ?err, "invoices: failed to load invoice list");
                InvoiceError::Database(LIST_DB_ERROR.to_string())
            })?
            .into_iter()
            .map(InvoiceModel::from)
            .collect::<Vec<_>>();

        match serde_json::to_string(&invoices) {
            Ok(body) => {
                if let Err(err) = self.view_cache.write(INVOICES_VIEW_PATH, body).await {
                    warn!(cache_error = ?err, "invoices: failed to populate list view cache");
                }
            }
            Err(err) => {
                warn!(serialize_error = ?err, "invoices: failed to render list view for cache");
            }
        }

        Ok(invoices)
    }

    // The mutation already committed when this runs, so a cache failure only
    // leaves the view stale until the next write. Log and move on.
    async fn invalidate_list_view(&self) {
        if let Err(err) = self.view_cache.invalidate(INVOICES_VIEW_PATH).await {
            warn!(
                cache_error = ?err,
                path = INVOICES_VIEW_PATH,
                "invoices: failed to invalidate list view"
            );
        }
    }
}
