use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use crate::util::format_currency;

/// 客户下拉选项 (仅 id + 名称)
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct CustomerField {
    pub id: Uuid,
    pub name: String,
}

/// 客户列表行 (含发票聚合, 金额单位: 分)
#[derive(Debug, Clone, FromRow)]
pub struct CustomersTableRow {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub image_url: String,
    pub total_invoices: i64,
    pub total_pending: i64,
    pub total_paid: i64,
}

/// 客户列表行 (金额已格式化为美元字符串)
#[derive(Debug, Clone, Serialize)]
pub struct FormattedCustomer {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub image_url: String,
    pub total_invoices: i64,
    pub total_pending: String,
    pub total_paid: String,
}

impl From<CustomersTableRow> for FormattedCustomer {
    fn from(row: CustomersTableRow) -> Self {
        Self {
            id: row.id,
            name: row.name,
            email: row.email,
            image_url: row.image_url,
            total_invoices: row.total_invoices,
            total_pending: format_currency(row.total_pending),
            total_paid: format_currency(row.total_paid),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_aggregated_totals() {
        let row = CustomersTableRow {
            id: Uuid::nil(),
            name: "Amy Burns".to_string(),
            email: "amy@burns.com".to_string(),
            image_url: "/customers/amy-burns.png".to_string(),
            total_invoices: 2,
            total_pending: 0,
            total_paid: 154277,
        };

        let formatted = FormattedCustomer::from(row);
        assert_eq!(formatted.total_pending, "$0.00");
        assert_eq!(formatted.total_paid, "$1,542.77");
        assert_eq!(formatted.total_invoices, 2);
    }
}
