use std::fmt::Display;

use anyhow::anyhow;
use serde::{Deserialize, Serialize};

#[derive(Default, Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum InvoiceStatus {
    #[default]
    Pending,
    Paid,
}

impl Display for InvoiceStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let invoice_status = match self {
            InvoiceStatus::Pending => "pending",
            InvoiceStatus::Paid => "paid",
        };
        write!(f, "{}", invoice_status)
    }
}

impl TryFrom<&str> for InvoiceStatus {
    type Error = anyhow::Error;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value {
            "pending" => Ok(InvoiceStatus::Pending),
            "paid" => Ok(InvoiceStatus::Paid),
            unknown => Err(anyhow!("Unknown invoice status: {}", unknown)),
        }
    }
}
