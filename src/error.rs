use crate::models::FieldErrors;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use thiserror::Error;

/// 数据访问层错误
///
/// 对外展示统一短消息, 原始数据库错误通过 source() 保留
#[derive(Debug, Error)]
pub enum DalError {
    /// 数据库连接配置无效 (仅在创建连接池时出现)
    #[error("invalid database configuration: {0}")]
    Config(String),

    /// 读取失败 (连接获取或查询执行)
    #[error("Failed to fetch {resource}.")]
    Fetch {
        resource: &'static str,
        #[source]
        source: sqlx::Error,
    },

    #[error("Database Error: Failed to Create Invoice.")]
    Create(#[source] sqlx::Error),

    #[error("Database Error: Failed to Update Invoice.")]
    Update(#[source] sqlx::Error),

    #[error("Database Error: Failed to Delete Invoice.")]
    Delete(#[source] sqlx::Error),

    /// 表单校验失败 (携带逐字段错误信息)
    #[error("Missing Fields. Failed to Create Invoice.")]
    Validation(FieldErrors),
}

pub type DalResult<T> = Result<T, DalError>;

/// 错误响应体
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub success: bool,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub errors: Option<FieldErrors>,
}

impl DalError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            DalError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for DalError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let message = self.to_string();
        let errors = match self {
            DalError::Validation(fields) => Some(fields),
            _ => None,
        };
        let body = ErrorResponse {
            success: false,
            message,
            errors,
        };
        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    #[test]
    fn fetch_error_uses_short_message() {
        let err = DalError::Fetch {
            resource: "revenue data",
            source: sqlx::Error::PoolTimedOut,
        };
        assert_eq!(err.to_string(), "Failed to fetch revenue data.");
        assert!(err.source().is_some());
    }

    #[test]
    fn mutation_errors_keep_fixed_messages() {
        assert_eq!(
            DalError::Create(sqlx::Error::PoolTimedOut).to_string(),
            "Database Error: Failed to Create Invoice."
        );
        assert_eq!(
            DalError::Update(sqlx::Error::PoolTimedOut).to_string(),
            "Database Error: Failed to Update Invoice."
        );
        assert_eq!(
            DalError::Delete(sqlx::Error::PoolTimedOut).to_string(),
            "Database Error: Failed to Delete Invoice."
        );
    }

    #[test]
    fn status_codes_by_variant() {
        let validation = DalError::Validation(FieldErrors::default());
        assert_eq!(validation.status_code(), StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(
            validation.to_string(),
            "Missing Fields. Failed to Create Invoice."
        );

        let config = DalError::Config("empty connection string".to_string());
        assert_eq!(config.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
