use bigdecimal::BigDecimal;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;
use uuid::Uuid;

use crate::util::{cents_to_dollars, format_currency};

/// 发票状态 (仅 pending / paid 两种)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InvoiceStatus {
    Pending,
    Paid,
}

impl InvoiceStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            InvoiceStatus::Pending => "pending",
            InvoiceStatus::Paid => "paid",
        }
    }
}

impl fmt::Display for InvoiceStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid invoice status")]
pub struct ParseStatusError;

impl FromStr for InvoiceStatus {
    type Err = ParseStatusError;

    /// 精确匹配 (区分大小写), 与存储层的状态取值一致
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(InvoiceStatus::Pending),
            "paid" => Ok(InvoiceStatus::Paid),
            _ => Err(ParseStatusError),
        }
    }
}

/// 最新发票行 (金额单位: 分)
#[derive(Debug, Clone, FromRow)]
pub struct LatestInvoiceRow {
    pub id: Uuid,
    pub name: String,
    pub image_url: String,
    pub email: String,
    pub amount: i32,
}

/// 最新发票 (金额已格式化为美元字符串)
#[derive(Debug, Clone, Serialize)]
pub struct LatestInvoice {
    pub id: Uuid,
    pub name: String,
    pub image_url: String,
    pub email: String,
    pub amount: String,
}

impl From<LatestInvoiceRow> for LatestInvoice {
    fn from(row: LatestInvoiceRow) -> Self {
        Self {
            id: row.id,
            name: row.name,
            image_url: row.image_url,
            email: row.email,
            amount: format_currency(row.amount as i64),
        }
    }
}

/// 发票列表行 (InvoicesTable, 金额单位: 分)
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct InvoicesTableRow {
    pub id: Uuid,
    pub amount: i32,
    pub date: NaiveDate,
    pub status: String,
    pub name: String,
    pub email: String,
    pub image_url: String,
}

/// 发票编辑表单行 (金额单位: 分)
#[derive(Debug, Clone, FromRow)]
pub struct InvoiceFormRow {
    pub id: Uuid,
    pub customer_id: Uuid,
    pub amount: i32,
    pub status: String,
}

/// 发票编辑表单 (金额已转换为美元)
#[derive(Debug, Clone, Serialize)]
pub struct InvoiceForm {
    pub id: Uuid,
    pub customer_id: Uuid,
    pub amount: BigDecimal,
    pub status: String,
}

impl From<InvoiceFormRow> for InvoiceForm {
    fn from(row: InvoiceFormRow) -> Self {
        Self {
            id: row.id,
            customer_id: row.customer_id,
            amount: cents_to_dollars(row.amount),
            status: row.status,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_parse_is_case_sensitive() {
        assert_eq!("pending".parse::<InvoiceStatus>(), Ok(InvoiceStatus::Pending));
        assert_eq!("paid".parse::<InvoiceStatus>(), Ok(InvoiceStatus::Paid));
        assert_eq!("PAID".parse::<InvoiceStatus>(), Err(ParseStatusError));
        assert_eq!("open".parse::<InvoiceStatus>(), Err(ParseStatusError));
        assert_eq!("".parse::<InvoiceStatus>(), Err(ParseStatusError));
    }

    #[test]
    fn latest_invoice_formats_amount() {
        let row = LatestInvoiceRow {
            id: Uuid::nil(),
            name: "Delba de Oliveira".to_string(),
            image_url: "/customers/delba.png".to_string(),
            email: "delba@oliveira.com".to_string(),
            amount: 345077,
        };

        let latest = LatestInvoice::from(row);
        assert_eq!(latest.amount, "$3,450.77");
    }

    #[test]
    fn form_row_converts_cents_to_dollars() {
        let row = InvoiceFormRow {
            id: Uuid::nil(),
            customer_id: Uuid::nil(),
            amount: 2505,
            status: "pending".to_string(),
        };

        let form = InvoiceForm::from(row);
        assert_eq!(form.amount, cents_to_dollars(2505));
        assert_eq!(form.status, "pending");
    }
}
