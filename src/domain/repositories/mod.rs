pub mod invoices;
pub mod view_cache;
