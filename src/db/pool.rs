use crate::config::{DatabaseConfig, Environment};
use crate::error::DalError;
use sqlx::postgres::{PgConnectOptions, PgPoolOptions, PgSslMode};
use sqlx::{ConnectOptions, PgPool};
use std::str::FromStr;
use std::time::Duration;

/// 生产环境强制加密 (放宽证书校验), 本地加密可选
fn ssl_mode(environment: Environment) -> PgSslMode {
    if environment.is_production() {
        PgSslMode::Require
    } else {
        PgSslMode::Prefer
    }
}

/// 创建数据库连接池 (惰性建连: 首次 acquire 时才真正拨号)
pub fn create_pool(database: &DatabaseConfig) -> Result<PgPool, DalError> {
    let url = database.effective_url();
    if url.is_empty() {
        return Err(DalError::Config(
            "database connection string is empty".to_string(),
        ));
    }

    let mut connect_options =
        PgConnectOptions::from_str(url).map_err(|e| DalError::Config(e.to_string()))?;
    connect_options = connect_options.ssl_mode(ssl_mode(database.environment));

    // 设置慢查询日志阈值为 5秒
    connect_options = connect_options
        .log_slow_statements(tracing::log::LevelFilter::Warn, Duration::from_secs(5));

    let variant = if database.environment.is_production() && database.non_pooling_url.is_some() {
        "DATABASE_URL_NON_POOLING"
    } else {
        "DATABASE_URL"
    };
    tracing::info!("环境: {:?}, 使用连接串: {}", database.environment, variant);

    Ok(PgPoolOptions::new()
        .max_connections(20)
        .acquire_timeout(Duration::from_secs(10))
        .connect_lazy_with(connect_options))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn local_config(url: &str) -> DatabaseConfig {
        DatabaseConfig {
            environment: Environment::Local,
            url: url.to_string(),
            non_pooling_url: None,
        }
    }

    #[test]
    fn rejects_empty_connection_string() {
        let err = create_pool(&local_config("")).unwrap_err();
        assert!(matches!(err, DalError::Config(_)));
    }

    #[test]
    fn ssl_mode_follows_environment() {
        assert!(matches!(ssl_mode(Environment::Production), PgSslMode::Require));
        assert!(matches!(ssl_mode(Environment::Local), PgSslMode::Prefer));
    }

    #[test]
    fn rejects_malformed_connection_string() {
        let err = create_pool(&local_config("not a connection string")).unwrap_err();
        assert!(matches!(err, DalError::Config(_)));
    }

    #[tokio::test]
    async fn builds_a_lazy_pool_without_dialing() {
        // 惰性池: 创建成功不代表可达, 拨号发生在首次 acquire
        let pool = create_pool(&local_config("postgres://127.0.0.1:1/unreachable")).unwrap();
        assert_eq!(pool.size(), 0);
    }

    #[tokio::test]
    #[ignore = "requires database"]
    async fn connects_to_a_live_database() {
        // 运行方式: DATABASE_URL=postgres://... cargo test -- --ignored
        let url = std::env::var("DATABASE_URL").expect("DATABASE_URL must be set");
        let pool = create_pool(&local_config(&url)).unwrap();

        let one: i32 = sqlx::query_scalar("SELECT 1")
            .fetch_one(&pool)
            .await
            .unwrap();
        assert_eq!(one, 1);
    }
}
