use sqlx::FromRow;
use uuid::Uuid;

/// 用户账号
///
/// 携带密码哈希, 仅供认证层按邮箱查询, 不对外序列化
#[derive(Debug, Clone, FromRow)]
pub struct User {
    pub id: Uuid,
    pub email: String,
    pub password: String,
}
