use std::sync::Arc;

use anyhow::Result;
use async_trait::async_trait;
use diesel::{RunQueryDsl, delete, insert_into, prelude::*, update};

use crate::{
    domain::{
        entities::invoices::{InsertInvoiceEntity, InvoiceEntity, UpdateInvoiceEntity},
        repositories::invoices::InvoiceRepository,
    },
    infrastructure::postgres::{postgres_connection::PgPoolSquad, schema::invoices},
};

pub struct InvoicePostgres {
    db_pool: Arc<PgPoolSquad>,
}

impl InvoicePostgres {
    pub fn new(db_pool: Arc<PgPoolSquad>) -> Self {
        Self { db_pool }
    }
}

#[async_trait]
impl InvoiceRepository for InvoicePostgres {
    async fn create(&self, invoice: InsertInvoiceEntity) -> Result<i64> {
        let mut conn = Arc::clone(&self.db_pool).get()?;

        let invoice_id = insert_into(invoices::table)
            .values(&invoice)
            .returning(invoices::id)
            .get_result::<i64>(&mut conn)?;

        Ok(invoice_id)
    }

    async fn update(&self, invoice_id: i64, invoice: UpdateInvoiceEntity) -> Result<()> {
        let mut conn = Arc::clone(&self.db_pool).get()?;

        update(invoices::table.find(invoice_id))
            .set(&invoice)
            .execute(&mut conn)?;

        Ok(())
    }

    async fn delete(&self, invoice_id: i64) -> Result<()> {
        let mut conn = Arc::clone(&self.db_pool).get()?;

        delete(invoices::table.find(invoice_id)).execute(&mut conn)?;

        Ok(())
    }

    async fn list(&self) -> Result<Vec<InvoiceEntity>> {
        let mut conn = Arc::clone(&self.db_pool).get()?;

        let invoices = invoices::table
            .order(invoices::date.desc())
            .load::<InvoiceEntity>(&mut conn)?;

        Ok(invoices)
    }
}
