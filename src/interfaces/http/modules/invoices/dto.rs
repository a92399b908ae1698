use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::Deserialize;
use utoipa::ToSchema;
use validator::Validate;

use crate::domain::{CreateInvoiceDto, InvoiceLineItem, InvoiceStatus, UpdateInvoiceDto};

pub use crate::interfaces::http::modules::change_requests::WebsiteFilter;

/// Line items are validated after the admin gate
#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateInvoiceRequest {
    #[serde(default)]
    pub website_id: String,
    #[serde(default)]
    pub items: Vec<InvoiceLineItem>,
    /// Calendar date, e.g. `2026-12-01`
    #[serde(default)]
    pub due_date: String,
}

impl From<CreateInvoiceRequest> for CreateInvoiceDto {
    fn from(r: CreateInvoiceRequest) -> Self {
        Self {
            website_id: r.website_id,
            items: r.items,
            due_date: r.due_date,
        }
    }
}

/// Totals are stored as sent; they are not recomputed from `items`
#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateInvoiceRequest {
    pub items: Option<Vec<InvoiceLineItem>>,
    #[schema(value_type = Option<f64>)]
    pub subtotal: Option<Decimal>,
    #[schema(value_type = Option<f64>)]
    pub total: Option<Decimal>,
    pub status: Option<InvoiceStatus>,
    pub due_date: Option<String>,
    pub paid_at: Option<DateTime<Utc>>,
}

impl From<UpdateInvoiceRequest> for UpdateInvoiceDto {
    fn from(r: UpdateInvoiceRequest) -> Self {
        Self {
            items: r.items,
            subtotal: r.subtotal,
            total: r.total,
            status: r.status,
            due_date: r.due_date,
            paid_at: r.paid_at,
        }
    }
}
