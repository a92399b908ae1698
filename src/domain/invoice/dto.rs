use chrono::{DateTime, Utc};
use rust_decimal::Decimal;

use super::{InvoiceLineItem, InvoiceStatus};

#[derive(Debug, Clone)]
pub struct CreateInvoiceDto {
    pub website_id: String,
    pub items: Vec<InvoiceLineItem>,
    pub due_date: String,
}

/// Admin patch. Totals are taken as given and never recomputed from `items`.
#[derive(Debug, Clone, Default)]
pub struct UpdateInvoiceDto {
    pub items: Option<Vec<InvoiceLineItem>>,
    pub subtotal: Option<Decimal>,
    pub total: Option<Decimal>,
    pub status: Option<InvoiceStatus>,
    pub due_date: Option<String>,
    pub paid_at: Option<DateTime<Utc>>,
}
