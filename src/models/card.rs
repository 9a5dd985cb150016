use serde::Serialize;
use sqlx::FromRow;

/// 发票金额按状态汇总 (单位: 分)
#[derive(Debug, Clone, FromRow)]
pub struct InvoiceStatusTotals {
    pub paid: i64,
    pub pending: i64,
}

/// 仪表盘卡片数据 (计数 + 已格式化的金额汇总)
#[derive(Debug, Clone, Serialize)]
pub struct CardData {
    pub number_of_invoices: i64,
    pub number_of_customers: i64,
    pub total_paid_invoices: String,
    pub total_pending_invoices: String,
}
