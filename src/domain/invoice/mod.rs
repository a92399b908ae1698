//! Invoice aggregate

pub mod dto;
pub mod model;

pub use dto::{CreateInvoiceDto, UpdateInvoiceDto};
pub use model::{
    subtotal, within_amount_bounds, Invoice, InvoiceLineItem, InvoiceStatus, MAX_INVOICE_AMOUNT,
};
