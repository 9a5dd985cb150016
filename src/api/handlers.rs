use crate::error::DalError;
use crate::models::{
    CardData, CustomerField, FormattedCustomer, InvoiceForm, InvoiceFormData, InvoicesTableRow,
    LatestInvoice, Revenue, WriteEffects,
};
use crate::service::{DashboardService, InvoiceActions};
use axum::{
    extract::{Form, Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use uuid::Uuid;

/// 列表查询参数 (query 缺省为空串, page 缺省为 1)
#[derive(Debug, Deserialize)]
pub struct ListParams {
    #[serde(default)]
    pub query: String,
    #[serde(default = "default_page")]
    pub page: i64,
}

fn default_page() -> i64 {
    1
}

/// 写操作响应体
#[derive(Debug, Serialize)]
pub struct ActionResponse {
    pub success: bool,
    pub message: String,
    pub effects: WriteEffects,
}

/// 健康检查
pub async fn health_check() -> &'static str {
    "OK"
}

/// 月度收入
pub async fn revenue(
    State(service): State<Arc<DashboardService>>,
) -> Result<Json<Vec<Revenue>>, DalError> {
    Ok(Json(service.fetch_revenue().await?))
}

/// 最新 5 张发票
pub async fn latest_invoices(
    State(service): State<Arc<DashboardService>>,
) -> Result<Json<Vec<LatestInvoice>>, DalError> {
    Ok(Json(service.fetch_latest_invoices().await?))
}

/// 仪表盘卡片数据
pub async fn card_data(
    State(service): State<Arc<DashboardService>>,
) -> Result<Json<CardData>, DalError> {
    Ok(Json(service.fetch_card_data().await?))
}

/// 发票列表 (分页 + 搜索)
pub async fn filtered_invoices(
    State(service): State<Arc<DashboardService>>,
    Query(params): Query<ListParams>,
) -> Result<Json<Vec<InvoicesTableRow>>, DalError> {
    Ok(Json(
        service
            .fetch_filtered_invoices(&params.query, params.page)
            .await?,
    ))
}

/// 发票总页数
pub async fn invoices_pages(
    State(service): State<Arc<DashboardService>>,
    Query(params): Query<ListParams>,
) -> Result<Json<i64>, DalError> {
    Ok(Json(service.fetch_invoices_pages(&params.query).await?))
}

/// 按主键查询发票 (不存在返回 null)
pub async fn invoice_by_id(
    State(service): State<Arc<DashboardService>>,
    Path(id): Path<Uuid>,
) -> Result<Json<Option<InvoiceForm>>, DalError> {
    Ok(Json(service.fetch_invoice_by_id(id).await?))
}

/// 全部客户 (下拉选项)
pub async fn customers(
    State(service): State<Arc<DashboardService>>,
) -> Result<Json<Vec<CustomerField>>, DalError> {
    Ok(Json(service.fetch_customers().await?))
}

/// 客户列表 (含发票聚合)
pub async fn filtered_customers(
    State(service): State<Arc<DashboardService>>,
    Query(params): Query<ListParams>,
) -> Result<Json<Vec<FormattedCustomer>>, DalError> {
    Ok(Json(service.fetch_filtered_customers(&params.query).await?))
}

/// 创建发票
pub async fn create_invoice(
    State(actions): State<Arc<InvoiceActions>>,
    Form(form): Form<InvoiceFormData>,
) -> Result<Response, DalError> {
    let effects = actions.create_invoice(&form).await?;
    let response = ActionResponse {
        success: true,
        message: "Invoice created".to_string(),
        effects,
    };
    Ok((StatusCode::CREATED, Json(response)).into_response())
}

/// 更新发票
pub async fn update_invoice(
    State(actions): State<Arc<InvoiceActions>>,
    Path(id): Path<Uuid>,
    Form(form): Form<InvoiceFormData>,
) -> Result<Json<ActionResponse>, DalError> {
    let effects = actions.update_invoice(id, &form).await?;
    Ok(Json(ActionResponse {
        success: true,
        message: "Invoice updated".to_string(),
        effects,
    }))
}

/// 删除发票
pub async fn delete_invoice(
    State(actions): State<Arc<InvoiceActions>>,
    Path(id): Path<Uuid>,
) -> Result<Json<ActionResponse>, DalError> {
    let effects = actions.delete_invoice(id).await?;
    Ok(Json(ActionResponse {
        success: true,
        message: "Invoice deleted".to_string(),
        effects,
    }))
}
