use serde::{Deserialize, Serialize};

/// 运行环境
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    Local,
    Production,
}

impl Environment {
    /// 解析环境标识 (仅 "production" 视为生产环境, 其余一律本地)
    pub fn from_flag(flag: &str) -> Self {
        if flag == "production" {
            Environment::Production
        } else {
            Environment::Local
        }
    }

    pub fn is_production(&self) -> bool {
        matches!(self, Environment::Production)
    }
}

/// 应用配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatabaseConfig {
    pub environment: Environment,
    /// 主连接串 (DATABASE_URL)
    pub url: String,
    /// 直连连接串 (DATABASE_URL_NON_POOLING, 可选)
    pub non_pooling_url: Option<String>,
}

impl DatabaseConfig {
    /// 选择实际使用的连接串: 生产环境优先直连串, 缺失时回退主串
    pub fn effective_url(&self) -> &str {
        if self.environment.is_production() {
            if let Some(url) = &self.non_pooling_url {
                return url;
            }
        }
        &self.url
    }
}

impl AppConfig {
    /// 从环境变量加载配置
    pub fn from_env() -> Self {
        Self {
            server: ServerConfig {
                host: std::env::var("SERVER_HOST").unwrap_or_else(|_| "127.0.0.1".to_string()),
                port: std::env::var("SERVER_PORT")
                    .ok()
                    .and_then(|p| p.parse().ok())
                    .unwrap_or(8080),
            },
            database: DatabaseConfig {
                environment: Environment::from_flag(
                    &std::env::var("APP_ENV").unwrap_or_default(),
                ),
                url: std::env::var("DATABASE_URL").unwrap_or_default(),
                non_pooling_url: std::env::var("DATABASE_URL_NON_POOLING").ok(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn environment_flag_is_exact_match() {
        assert_eq!(Environment::from_flag("production"), Environment::Production);
        assert_eq!(Environment::from_flag("Production"), Environment::Local);
        assert_eq!(Environment::from_flag("development"), Environment::Local);
        assert_eq!(Environment::from_flag(""), Environment::Local);
    }

    #[test]
    fn production_prefers_non_pooling_url() {
        let db = DatabaseConfig {
            environment: Environment::Production,
            url: "postgres://pooled.example/db".to_string(),
            non_pooling_url: Some("postgres://direct.example/db".to_string()),
        };
        assert_eq!(db.effective_url(), "postgres://direct.example/db");
    }

    #[test]
    fn falls_back_to_primary_url() {
        let without_direct = DatabaseConfig {
            environment: Environment::Production,
            url: "postgres://pooled.example/db".to_string(),
            non_pooling_url: None,
        };
        assert_eq!(without_direct.effective_url(), "postgres://pooled.example/db");

        let local = DatabaseConfig {
            environment: Environment::Local,
            url: "postgres://pooled.example/db".to_string(),
            non_pooling_url: Some("postgres://direct.example/db".to_string()),
        };
        assert_eq!(local.effective_url(), "postgres://pooled.example/db");
    }
}
