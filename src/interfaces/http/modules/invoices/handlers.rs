//! Invoice handlers

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Extension, Json,
};

use super::dto::{CreateInvoiceRequest, UpdateInvoiceRequest, WebsiteFilter};
use crate::application::InvoiceService;
use crate::domain::{Identity, Invoice};
use crate::interfaces::http::common::{ApiQuery, ValidatedJson};
use crate::interfaces::http::error::{ApiResult, ErrorBody};

#[utoipa::path(
    get,
    path = "/api/invoices",
    tag = "Invoices",
    security(("bearer_auth" = [])),
    params(WebsiteFilter),
    responses(
        (status = 200, description = "Visible invoices", body = [Invoice])
    )
)]
pub async fn list_invoices(
    State(invoices): State<Arc<InvoiceService>>,
    Extension(identity): Extension<Identity>,
    ApiQuery(filter): ApiQuery<WebsiteFilter>,
) -> ApiResult<Json<Vec<Invoice>>> {
    Ok(Json(
        invoices
            .list(&identity, filter.website_id.as_deref())
            .await?,
    ))
}

#[utoipa::path(
    get,
    path = "/api/invoices/{id}",
    tag = "Invoices",
    security(("bearer_auth" = [])),
    params(("id" = String, Path, description = "Invoice ID")),
    responses(
        (status = 200, description = "Invoice", body = Invoice),
        (status = 403, description = "Not the owner", body = ErrorBody),
        (status = 404, description = "Not found", body = ErrorBody)
    )
)]
pub async fn get_invoice(
    State(invoices): State<Arc<InvoiceService>>,
    Extension(identity): Extension<Identity>,
    Path(id): Path<String>,
) -> ApiResult<Json<Invoice>> {
    Ok(Json(invoices.get(&identity, &id).await?))
}

#[utoipa::path(
    post,
    path = "/api/invoices",
    tag = "Invoices",
    security(("bearer_auth" = [])),
    request_body = CreateInvoiceRequest,
    responses(
        (status = 201, description = "Invoice issued", body = Invoice),
        (status = 400, description = "Missing or invalid fields", body = ErrorBody),
        (status = 403, description = "Admin role required", body = ErrorBody),
        (status = 404, description = "Website not found", body = ErrorBody)
    )
)]
pub async fn create_invoice(
    State(invoices): State<Arc<InvoiceService>>,
    Extension(identity): Extension<Identity>,
    ValidatedJson(request): ValidatedJson<CreateInvoiceRequest>,
) -> ApiResult<(StatusCode, Json<Invoice>)> {
    let invoice = invoices.create(&identity, request.into()).await?;
    Ok((StatusCode::CREATED, Json(invoice)))
}

#[utoipa::path(
    patch,
    path = "/api/invoices/{id}",
    tag = "Invoices",
    security(("bearer_auth" = [])),
    params(("id" = String, Path, description = "Invoice ID")),
    request_body = UpdateInvoiceRequest,
    responses(
        (status = 200, description = "Invoice updated", body = Invoice),
        (status = 403, description = "Admin role required", body = ErrorBody),
        (status = 404, description = "Not found", body = ErrorBody)
    )
)]
pub async fn update_invoice(
    State(invoices): State<Arc<InvoiceService>>,
    Extension(identity): Extension<Identity>,
    Path(id): Path<String>,
    ValidatedJson(request): ValidatedJson<UpdateInvoiceRequest>,
) -> ApiResult<Json<Invoice>> {
    Ok(Json(invoices.update(&identity, &id, request.into()).await?))
}

#[utoipa::path(
    post,
    path = "/api/invoices/{id}/pay",
    tag = "Invoices",
    security(("bearer_auth" = [])),
    params(("id" = String, Path, description = "Invoice ID")),
    responses(
        (status = 200, description = "Invoice paid", body = Invoice),
        (status = 403, description = "Not the owner", body = ErrorBody),
        (status = 404, description = "Not found", body = ErrorBody)
    )
)]
pub async fn pay_invoice(
    State(invoices): State<Arc<InvoiceService>>,
    Extension(identity): Extension<Identity>,
    Path(id): Path<String>,
) -> ApiResult<Json<Invoice>> {
    Ok(Json(invoices.pay(&identity, &id).await?))
}
