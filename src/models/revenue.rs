use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// 月度收入 (月份缩写 + 当月总额)
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct Revenue {
    pub month: String,
    pub revenue: i32,
}
