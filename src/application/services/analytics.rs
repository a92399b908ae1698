//! Dashboard figures

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::{AccessPolicy, Documents};
use crate::domain::{
    ChangeRequest, DomainError, DomainResult, Identity, Invoice, Notification, RequestStatus,
    Website, WebsiteStatus,
};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    pub total_websites: usize,
    pub active_websites: usize,
    pub pending_requests: usize,
    /// Invoices in any status but `Paid`
    pub unpaid_invoices: usize,
    pub unread_notifications: usize,
    /// Sum of `total` over paid invoices
    #[schema(value_type = f64)]
    pub total_revenue: Decimal,
}

#[derive(Clone)]
pub struct AnalyticsService {
    docs: Documents,
    policy: AccessPolicy,
}

impl AnalyticsService {
    pub fn new(docs: Documents) -> Self {
        Self {
            docs,
            policy: AccessPolicy::new(),
        }
    }

    /// Global for admins, scoped to the caller's records otherwise
    pub async fn dashboard(&self, identity: &Identity) -> DomainResult<DashboardStats> {
        let websites = self
            .policy
            .filter_collection(identity, self.docs.all::<Website>().await?);
        let requests = self
            .policy
            .filter_collection(identity, self.docs.all::<ChangeRequest>().await?);
        let invoices = self
            .policy
            .filter_collection(identity, self.docs.all::<Invoice>().await?);
        let notifications = self
            .policy
            .filter_collection(identity, self.docs.all::<Notification>().await?);

        let total_revenue = invoices
            .iter()
            .filter(|i| i.is_paid())
            .try_fold(Decimal::ZERO, |sum, i| sum.checked_add(i.total))
            .ok_or_else(|| DomainError::Unexpected("Revenue total out of range".into()))?;

        Ok(DashboardStats {
            total_websites: websites.len(),
            active_websites: websites
                .iter()
                .filter(|w| w.status == WebsiteStatus::Active)
                .count(),
            pending_requests: requests
                .iter()
                .filter(|r| r.status == RequestStatus::Pending)
                .count(),
            unpaid_invoices: invoices.iter().filter(|i| !i.is_paid()).count(),
            unread_notifications: notifications.iter().filter(|n| !n.read).count(),
            total_revenue,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::services::{fixtures, InvoiceService};
    use crate::application::Journal;
    use crate::domain::{CreateInvoiceDto, InvoiceLineItem, InvoiceStatus};

    fn invoice(website_id: &str, price: i64) -> CreateInvoiceDto {
        CreateInvoiceDto {
            website_id: website_id.into(),
            items: vec![InvoiceLineItem {
                description: "Plan".into(),
                quantity: 1,
                unit_price: Decimal::from(price),
            }],
            due_date: "2026-12-01".into(),
        }
    }

    #[tokio::test]
    async fn figures_are_scoped_per_identity() {
        let docs = fixtures::docs();
        fixtures::seed_website(&docs, "w1", "u1").await;
        fixtures::seed_website(&docs, "w2", "u2").await;
        let invoices = InvoiceService::new(docs.clone(), Journal::new(docs.clone()));
        let admin = Identity::admin("admin-1");

        let first = invoices.create(&admin, invoice("w1", 100)).await.unwrap();
        invoices.create(&admin, invoice("w1", 50)).await.unwrap();
        let other = invoices.create(&admin, invoice("w2", 70)).await.unwrap();
        invoices.pay(&Identity::client("u1"), &first.id).await.unwrap();
        invoices.pay(&Identity::client("u2"), &other.id).await.unwrap();

        let svc = AnalyticsService::new(docs);

        let mine = svc.dashboard(&Identity::client("u1")).await.unwrap();
        assert_eq!(mine.total_websites, 1);
        assert_eq!(mine.unpaid_invoices, 1);
        assert_eq!(mine.total_revenue, Decimal::from(100));
        // two issued, one paid
        assert_eq!(mine.unread_notifications, 3);

        let all = svc.dashboard(&admin).await.unwrap();
        assert_eq!(all.total_websites, 2);
        assert_eq!(all.unpaid_invoices, 1);
        assert_eq!(all.total_revenue, Decimal::from(170));
    }

    #[tokio::test]
    async fn empty_store_yields_zeroes() {
        let svc = AnalyticsService::new(fixtures::docs());
        let stats = svc.dashboard(&Identity::client("u1")).await.unwrap();
        assert_eq!(stats.total_websites, 0);
        assert_eq!(stats.total_revenue, Decimal::ZERO);
    }

    #[tokio::test]
    async fn overflowing_revenue_is_an_error_not_a_crash() {
        let docs = fixtures::docs();
        for id in ["i1", "i2"] {
            docs.insert(Invoice {
                id: id.into(),
                website_id: "w1".into(),
                owner_id: "u1".into(),
                items: vec![],
                subtotal: Decimal::MAX,
                total: Decimal::MAX,
                status: InvoiceStatus::Paid,
                due_date: "2026-12-01".into(),
                paid_at: Some(chrono::Utc::now()),
                created_at: chrono::Utc::now(),
                updated_at: None,
            })
            .await
            .unwrap();
        }

        let err = AnalyticsService::new(docs)
            .dashboard(&Identity::admin("admin-1"))
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::Unexpected(_)));
    }
}
