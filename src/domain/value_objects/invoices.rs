use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::entities::invoices::InvoiceEntity;
use crate::domain::value_objects::enums::invoice_statuses::InvoiceStatus;

pub const CUSTOMER_ID_REQUIRED: &str = "Please select a customer.";
pub const AMOUNT_NOT_POSITIVE: &str = "Please enter an amount greater than $0.";
pub const STATUS_REQUIRED: &str = "Please select an invoice status.";

/// Raw invoice form submission, field names as the form posts them.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InvoiceForm {
    pub customer_id: Option<String>,
    pub amount: Option<String>,
    pub status: Option<String>,
}

/// Field-keyed validation messages for inline form display. A field may
/// accumulate more than one violated rule.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InvoiceFormErrors {
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub customer_id: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub amount: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub status: Vec<String>,
}

impl InvoiceFormErrors {
    pub fn is_empty(&self) -> bool {
        self.customer_id.is_empty() && self.amount.is_empty() && self.status.is_empty()
    }
}

/// Narrowed form data once every rule has passed. The amount is still in
/// major units here; persistence stores minor units.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidatedInvoice {
    pub customer_id: String,
    pub amount: f64,
    pub status: InvoiceStatus,
}

impl ValidatedInvoice {
    /// Minor-unit (cents) representation, rounded to the nearest cent.
    pub fn amount_minor(&self) -> i32 {
        (self.amount * 100.0).round() as i32
    }
}

impl InvoiceForm {
    pub fn validate(&self) -> Result<ValidatedInvoice, InvoiceFormErrors> {
        let mut errors = InvoiceFormErrors::default();

        let customer_id = match self.customer_id.as_deref() {
            Some(customer_id) if !customer_id.trim().is_empty() => customer_id.to_string(),
            _ => {
                errors.customer_id.push(CUSTOMER_ID_REQUIRED.to_string());
                String::new()
            }
        };

        let amount = match self
            .amount
            .as_deref()
            .and_then(|raw| raw.trim().parse::<f64>().ok())
        {
            Some(amount) if amount > 0.0 => amount,
            _ => {
                errors.amount.push(AMOUNT_NOT_POSITIVE.to_string());
                0.0
            }
        };

        let status = match self
            .status
            .as_deref()
            .and_then(|raw| InvoiceStatus::try_from(raw).ok())
        {
            Some(status) => status,
            None => {
                errors.status.push(STATUS_REQUIRED.to_string());
                InvoiceStatus::default()
            }
        };

        if !errors.is_empty() {
            return Err(errors);
        }

        Ok(ValidatedInvoice {
            customer_id,
            amount,
            status,
        })
    }
}

/// Invoice as served by the list view.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InvoiceModel {
    pub id: i64,
    pub customer_id: String,
    pub amount_minor: i32,
    pub status: String,
    pub date: NaiveDate,
}

impl From<InvoiceEntity> for InvoiceModel {
    fn from(entity: InvoiceEntity) -> Self {
        Self {
            id: entity.id,
            customer_id: entity.customer_id,
            amount_minor: entity.amount_minor,
            status: entity.status,
            date: entity.date,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form(customer_id: &str, amount: &str, status: &str) -> InvoiceForm {
        InvoiceForm {
            customer_id: Some(customer_id.to_string()),
            amount: Some(amount.to_string()),
            status: Some(status.to_string()),
        }
    }

    #[test]
    fn accepts_a_fully_valid_submission() {
        let validated = form("c1", "25", "pending").validate().unwrap();

        assert_eq!(validated.customer_id, "c1");
        assert_eq!(validated.amount, 25.0);
        assert_eq!(validated.status, InvoiceStatus::Pending);
        assert_eq!(validated.amount_minor(), 2500);
    }

    #[test]
    fn converts_major_units_to_cents() {
        assert_eq!(form("c1", "10.00", "paid").validate().unwrap().amount_minor(), 1000);
        assert_eq!(form("c1", "5.50", "paid").validate().unwrap().amount_minor(), 550);
        assert_eq!(form("c1", "19.99", "paid").validate().unwrap().amount_minor(), 1999);
    }

    #[test]
    fn rejects_empty_customer_id() {
        let errors = form("", "25", "pending").validate().unwrap_err();

        assert_eq!(errors.customer_id, vec![CUSTOMER_ID_REQUIRED.to_string()]);
        assert!(errors.amount.is_empty());
        assert!(errors.status.is_empty());
    }

    #[test]
    fn rejects_missing_customer_id() {
        let submission = InvoiceForm {
            customer_id: None,
            amount: Some("25".to_string()),
            status: Some("pending".to_string()),
        };

        let errors = submission.validate().unwrap_err();
        assert_eq!(errors.customer_id, vec![CUSTOMER_ID_REQUIRED.to_string()]);
    }

    #[test]
    fn rejects_non_numeric_amount() {
        let errors = form("c1", "twenty", "pending").validate().unwrap_err();
        assert_eq!(errors.amount, vec![AMOUNT_NOT_POSITIVE.to_string()]);
    }

    #[test]
    fn rejects_zero_and_negative_amounts() {
        let errors = form("c1", "0", "pending").validate().unwrap_err();
        assert_eq!(errors.amount, vec![AMOUNT_NOT_POSITIVE.to_string()]);

        let errors = form("c1", "-3.50", "pending").validate().unwrap_err();
        assert_eq!(errors.amount, vec![AMOUNT_NOT_POSITIVE.to_string()]);
    }

    #[test]
    fn rejects_unknown_status() {
        let errors = form("c1", "25", "overdue").validate().unwrap_err();
        assert_eq!(errors.status, vec![STATUS_REQUIRED.to_string()]);
    }

    #[test]
    fn accumulates_errors_across_fields() {
        let errors = InvoiceForm::default().validate().unwrap_err();

        assert_eq!(errors.customer_id, vec![CUSTOMER_ID_REQUIRED.to_string()]);
        assert_eq!(errors.amount, vec![AMOUNT_NOT_POSITIVE.to_string()]);
        assert_eq!(errors.status, vec![STATUS_REQUIRED.to_string()]);
    }

    #[test]
    fn serializes_errors_keyed_by_form_field() {
        let errors = form("", "0", "pending").validate().unwrap_err();
        let json = serde_json::to_value(&errors).unwrap();

        assert_eq!(json["customerId"][0], CUSTOMER_ID_REQUIRED);
        assert_eq!(json["amount"][0], AMOUNT_NOT_POSITIVE);
        assert!(json.get("status").is_none());
    }
}
