use std::sync::Arc;

use axum::{
    Form, Json, Router,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Redirect, Response},
    routing::{get, put},
};

use crate::{
    application::usecases::invoices::{INVOICES_VIEW_PATH, InvoiceUseCase},
    domain::{
        repositories::{invoices::InvoiceRepository, view_cache::ViewCache},
        value_objects::invoices::InvoiceForm,
    },
    infrastructure::{
        postgres::{postgres_connection::PgPoolSquad, repositories::invoices::InvoicePostgres},
        view_cache::InMemoryViewCache,
    },
};

pub fn routes(
    db_pool: Arc<PgPoolSquad>,
    view_cache: Arc<InMemoryViewCache>,
    deletes_disabled: bool,
) -> Router {
    let invoice_repository = InvoicePostgres::new(Arc::clone(&db_pool));
    let invoice_usecase = InvoiceUseCase::new(
        Arc::new(invoice_repository),
        view_cache,
        deletes_disabled,
    );

    Router::new()
        .route("/", get(list_invoices).post(create_invoice))
        .route("/:invoice_id", put(update_invoice).delete(delete_invoice))
        .with_state(Arc::new(invoice_usecase))
}

pub async fn list_invoices<R, C>(
    State(invoice_usecase): State<Arc<InvoiceUseCase<R, C>>>,
) -> Response
where
    R: InvoiceRepository + Send + Sync + 'static,
    C: ViewCache + Send + Sync + 'static,
{
    match invoice_usecase.list_invoices().await {
        Ok(invoices) => Json(invoices).into_response(),
        Err(err) => err.into_response(),
    }
}

pub async fn create_invoice<R, C>(
    State(invoice_usecase): State<Arc<InvoiceUseCase<R, C>>>,
    Form(invoice_form): Form<InvoiceForm>,
) -> Response
where
    R: InvoiceRepository + Send + Sync + 'static,
    C: ViewCache + Send + Sync + 'static,
{
    match invoice_usecase.create_invoice(invoice_form).await {
        // Navigation is the presentation layer's call: back to the list view
        // the mutation just invalidated.
        Ok(_) => Redirect::to(INVOICES_VIEW_PATH).into_response(),
        Err(err) => err.into_response(),
    }
}

pub async fn update_invoice<R, C>(
    State(invoice_usecase): State<Arc<InvoiceUseCase<R, C>>>,
    Path(invoice_id): Path<i64>,
    Form(invoice_form): Form<InvoiceForm>,
) -> Response
where
    R: InvoiceRepository + Send + Sync + 'static,
    C: ViewCache + Send + Sync + 'static,
{
    match invoice_usecase.update_invoice(invoice_id, invoice_form).await {
        Ok(()) => Redirect::to(INVOICES_VIEW_PATH).into_response(),
        Err(err) => err.into_response(),
    }
}

pub async fn delete_invoice<R, C>(
    State(invoice_usecase): State<Arc<InvoiceUseCase<R, C>>>,
    Path(invoice_id): Path<i64>,
) -> Response
where
    R: InvoiceRepository + Send + Sync + 'static,
    C: ViewCache + Send + Sync + 'static,
{
    match invoice_usecase.delete_invoice(invoice_id).await {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(err) => err.into_response(),
    }
}
