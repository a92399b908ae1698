use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::domain::{Collection, Document, Lifecycle, Owned};

/// Invoice status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum InvoiceStatus {
    Draft,
    Sent,
    Paid,
    Overdue,
}

impl Lifecycle for InvoiceStatus {
    fn allowed_next(&self) -> &'static [Self] {
        &[Self::Draft, Self::Sent, Self::Paid, Self::Overdue]
    }

    fn is_terminal(&self) -> bool {
        matches!(self, Self::Paid)
    }

    fn label(&self) -> &'static str {
        match self {
            Self::Draft => "Draft",
            Self::Sent => "Sent",
            Self::Paid => "Paid",
            Self::Overdue => "Overdue",
        }
    }
}

/// One billed line
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct InvoiceLineItem {
    #[validate(length(min = 1, message = "item description is required"))]
    pub description: String,
    #[validate(range(min = 1, message = "item quantity must be at least 1"))]
    pub quantity: u32,
    #[schema(value_type = f64)]
    pub unit_price: Decimal,
}

/// Largest absolute amount a line, subtotal or total may carry
pub const MAX_INVOICE_AMOUNT: i64 = 1_000_000_000_000;

pub fn within_amount_bounds(amount: Decimal) -> bool {
    amount.abs() <= Decimal::from(MAX_INVOICE_AMOUNT)
}

impl InvoiceLineItem {
    /// `quantity * unit_price`, `None` when it leaves the amount bounds
    pub fn amount(&self) -> Option<Decimal> {
        Decimal::from(self.quantity)
            .checked_mul(self.unit_price)
            .filter(|a| within_amount_bounds(*a))
    }
}

/// Sum of `quantity * unit_price` over all lines, `None` when any line
/// or the sum leaves the amount bounds
pub fn subtotal(items: &[InvoiceLineItem]) -> Option<Decimal> {
    items
        .iter()
        .try_fold(Decimal::ZERO, |sum, item| sum.checked_add(item.amount()?))
        .filter(|a| within_amount_bounds(*a))
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Invoice {
    pub id: String,
    pub website_id: String,
    /// Copied from the website owner when the invoice is issued
    pub owner_id: String,
    pub items: Vec<InvoiceLineItem>,
    #[schema(value_type = f64)]
    pub subtotal: Decimal,
    /// Equal to `subtotal`; there is no tax or discount model
    #[schema(value_type = f64)]
    pub total: Decimal,
    pub status: InvoiceStatus,
    pub due_date: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub paid_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Invoice {
    pub fn is_paid(&self) -> bool {
        self.status == InvoiceStatus::Paid
    }
}

impl Document for Invoice {
    const COLLECTION: Collection = Collection::Invoices;
    const ENTITY: &'static str = "Invoice";

    fn id(&self) -> &str {
        &self.id
    }
}

impl Owned for Invoice {
    fn owner_id(&self) -> &str {
        &self.owner_id
    }
}
