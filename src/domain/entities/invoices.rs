use chrono::NaiveDate;
use diesel::prelude::*;

use crate::infrastructure::postgres::schema::invoices;

#[derive(Debug, Clone, Identifiable, Selectable, Queryable)]
#[diesel(table_name = invoices)]
pub struct InvoiceEntity {
    pub id: i64,
    pub customer_id: String,
    #[diesel(column_name = amount)]
    pub amount_minor: i32,
    pub status: String,
    pub date: NaiveDate,
}

#[derive(Debug, Clone, PartialEq, Insertable)]
#[diesel(table_name = invoices)]
pub struct InsertInvoiceEntity {
    pub customer_id: String,
    #[diesel(column_name = amount)]
    pub amount_minor: i32,
    pub status: String,
    pub date: NaiveDate,
}

/// Mutable columns only. `id` and `date` are immutable after creation.
#[derive(Debug, Clone, PartialEq, AsChangeset)]
#[diesel(table_name = invoices)]
pub struct UpdateInvoiceEntity {
    pub customer_id: String,
    #[diesel(column_name = amount)]
    pub amount_minor: i32,
    pub status: String,
}
