use anyhow::Result;
use async_trait::async_trait;
use mockall::automock;

use crate::domain::entities::invoices::{InsertInvoiceEntity, InvoiceEntity, UpdateInvoiceEntity};

#[async_trait]
#[automock]
pub trait InvoiceRepository {
    async fn create(&self, invoice: InsertInvoiceEntity) -> Result<i64>;
    async fn update(&self, invoice_id: i64, invoice: UpdateInvoiceEntity) -> Result<()>;
    async fn delete(&self, invoice_id: i64) -> Result<()>;
    async fn list(&self) -> Result<Vec<InvoiceEntity>>;
}
