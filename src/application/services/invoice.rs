//! Invoicing and payment

use chrono::Utc;
use rust_decimal::Decimal;
use tracing::{info, warn};
use uuid::Uuid;
use validator::Validate;

use crate::application::input::required;
use crate::application::{AccessPolicy, Documents, Journal};
use crate::domain::invoice::{subtotal, within_amount_bounds};
use crate::domain::{
    ActivityAction, CreateInvoiceDto, DomainError, DomainResult, Identity, Invoice,
    InvoiceLineItem, InvoiceStatus, Lifecycle, NotificationKind, Role, UpdateInvoiceDto, Website,
};

#[derive(Clone)]
pub struct InvoiceService {
    docs: Documents,
    journal: Journal,
    policy: AccessPolicy,
}

impl InvoiceService {
    pub fn new(docs: Documents, journal: Journal) -> Self {
        Self {
            docs,
            journal,
            policy: AccessPolicy::new(),
        }
    }

    pub async fn list(
        &self,
        identity: &Identity,
        website_id: Option<&str>,
    ) -> DomainResult<Vec<Invoice>> {
        let mut invoices = self.docs.all::<Invoice>().await?;
        if let Some(website_id) = website_id {
            invoices.retain(|i| i.website_id == website_id);
        }
        Ok(self.policy.filter_collection(identity, invoices))
    }

    pub async fn get(&self, identity: &Identity, id: &str) -> DomainResult<Invoice> {
        let invoice = self.docs.get::<Invoice>(id).await?;
        self.policy.authorize_read(identity, &invoice)?;
        Ok(invoice)
    }

    /// Admin only. Issued as `Sent`, billed to the website owner.
    pub async fn create(&self, identity: &Identity, dto: CreateInvoiceDto) -> DomainResult<Invoice> {
        self.policy.require_role(identity, Role::Admin)?;
        required(&dto.website_id, "websiteId")?;
        required(&dto.due_date, "dueDate")?;
        let amount = validate_items(&dto.items)?;

        let website = self.docs.get::<Website>(&dto.website_id).await?;

        let now = Utc::now();
        let invoice = Invoice {
            id: Uuid::new_v4().to_string(),
            website_id: website.id,
            owner_id: website.owner_id,
            items: dto.items,
            subtotal: amount,
            total: amount,
            status: InvoiceStatus::Sent,
            due_date: dto.due_date,
            paid_at: None,
            created_at: now,
            updated_at: None,
        };
        let invoice = self.docs.insert(invoice).await?;
        info!(invoice_id = %invoice.id, total = %invoice.total, "Invoice issued");

        self.journal
            .record(
                identity,
                ActivityAction::InvoiceCreated,
                Some(&invoice.website_id),
                format!("Issued invoice for {}", invoice.total),
            )
            .await;
        self.journal
            .notify(
                &invoice.owner_id,
                NotificationKind::InvoiceIssued,
                "New invoice",
                format!("An invoice of {} is due on {}", invoice.total, invoice.due_date),
                Some(&invoice.id),
            )
            .await;
        Ok(invoice)
    }

    /// Admin only. Provided fields overwrite the stored ones as given.
    pub async fn update(
        &self,
        identity: &Identity,
        id: &str,
        dto: UpdateInvoiceDto,
    ) -> DomainResult<Invoice> {
        self.policy.require_role(identity, Role::Admin)?;
        if let Some(items) = &dto.items {
            validate_items(items)?;
        }
        for amount in [dto.subtotal, dto.total].into_iter().flatten() {
            if !within_amount_bounds(amount) {
                return Err(amount_out_of_range());
            }
        }

        let mut reopened = false;
        let invoice = self
            .docs
            .update::<Invoice, _>(id, |i| {
                if let Some(status) = dto.status {
                    reopened = i.status.reopens(status);
                    i.status = i.status.transition(status)?;
                }
                if let Some(items) = dto.items {
                    i.items = items;
                }
                if let Some(subtotal) = dto.subtotal {
                    i.subtotal = subtotal;
                }
                if let Some(total) = dto.total {
                    i.total = total;
                }
                if let Some(due_date) = dto.due_date {
                    i.due_date = due_date;
                }
                if dto.paid_at.is_some() {
                    i.paid_at = dto.paid_at;
                }
                i.updated_at = Some(Utc::now());
                Ok(())
            })
            .await?;
        if reopened {
            warn!(
                invoice_id = %invoice.id,
                status = invoice.status.label(),
                "Paid invoice reopened"
            );
        }

        self.journal
            .record(
                identity,
                ActivityAction::InvoiceUpdated,
                Some(&invoice.website_id),
                format!("Updated invoice {}", invoice.id),
            )
            .await;
        Ok(invoice)
    }

    /// Owner or admin. Paying again re-stamps `paidAt`.
    pub async fn pay(&self, identity: &Identity, id: &str) -> DomainResult<Invoice> {
        let policy = self.policy;
        let invoice = self
            .docs
            .update::<Invoice, _>(id, |i| {
                policy.authorize_write(identity, i, None)?;
                let now = Utc::now();
                i.status = i.status.transition(InvoiceStatus::Paid)?;
                i.paid_at = Some(now);
                i.updated_at = Some(now);
                Ok(())
            })
            .await?;
        info!(invoice_id = %invoice.id, user_id = %identity.id, "Invoice paid");

        self.journal
            .record(
                identity,
                ActivityAction::InvoicePaid,
                Some(&invoice.website_id),
                format!("Paid invoice of {}", invoice.total),
            )
            .await;
        self.journal
            .notify(
                &invoice.owner_id,
                NotificationKind::InvoicePaid,
                "Payment received",
                format!("Thank you, your payment of {} was received", invoice.total),
                Some(&invoice.id),
            )
            .await;
        Ok(invoice)
    }
}

fn amount_out_of_range() -> DomainError {
    DomainError::validation("invoice amount out of range")
}

/// Validate every line and return their subtotal
fn validate_items(items: &[InvoiceLineItem]) -> DomainResult<Decimal> {
    if items.is_empty() {
        return Err(DomainError::validation("items is required"));
    }
    for item in items {
        item.validate()?;
    }
    subtotal(items).ok_or_else(amount_out_of_range)
}
