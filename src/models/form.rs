use bigdecimal::{BigDecimal, Zero};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

use super::invoice::InvoiceStatus;

/// 发票表单原始输入 (字段均可缺失, 对应前端 FormData)
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InvoiceFormData {
    pub customer_id: Option<String>,
    pub amount: Option<String>,
    pub status: Option<String>,
}

/// 逐字段校验错误 (字段 -> 消息列表)
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldErrors {
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub customer_id: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub amount: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub status: Vec<String>,
}

/// 校验通过的发票输入
#[derive(Debug, Clone)]
pub struct ValidatedInvoice {
    pub customer_id: String,
    pub amount: BigDecimal,
    pub status: InvoiceStatus,
}

/// 写操作的后续动作信号, 由调用方执行 (缓存失效 + 跳转)
#[derive(Debug, Clone, Serialize)]
pub struct WriteEffects {
    pub revalidate: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub redirect: Option<&'static str>,
}

impl InvoiceFormData {
    /// 按表单模式校验一次, 产出带标签的结果:
    /// 全部通过得到类型化值, 否则得到逐字段错误 (不访问数据库)
    pub fn validate(&self) -> Result<ValidatedInvoice, FieldErrors> {
        let mut errors = FieldErrors::default();

        let customer_id = match self.customer_id.as_deref().map(str::trim) {
            Some(id) if !id.is_empty() => Some(id.to_string()),
            _ => {
                errors
                    .customer_id
                    .push("Please select a customer.".to_string());
                None
            }
        };

        let amount = match self
            .amount
            .as_deref()
            .and_then(|raw| BigDecimal::from_str(raw.trim()).ok())
        {
            Some(value) if value > BigDecimal::zero() => Some(value),
            _ => {
                errors
                    .amount
                    .push("Please enter an amount greater than $0.".to_string());
                None
            }
        };

        let status = match self.status.as_deref().map(str::parse::<InvoiceStatus>) {
            Some(Ok(status)) => Some(status),
            _ => {
                errors
                    .status
                    .push("Please select an invoice status.".to_string());
                None
            }
        };

        match (customer_id, amount, status) {
            (Some(customer_id), Some(amount), Some(status)) => Ok(ValidatedInvoice {
                customer_id,
                amount,
                status,
            }),
            _ => Err(errors),
        }
    }
}
