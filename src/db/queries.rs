use crate::models::{
    CustomerField, CustomersTableRow, InvoiceFormRow, InvoiceStatusTotals, InvoicesTableRow,
    LatestInvoiceRow, Revenue, User,
};
use sqlx::PgConnection;
use uuid::Uuid;

/// 构造多列共享的模糊匹配模式 (%query%, % 与 _ 不转义)
pub fn like_pattern(query: &str) -> String {
    format!("%{}%", query)
}

/// 查询全部月度收入
pub async fn revenue(conn: &mut PgConnection) -> Result<Vec<Revenue>, sqlx::Error> {
    sqlx::query_as::<_, Revenue>(
        r#"
        SELECT month, revenue
        FROM revenue
        "#,
    )
    .fetch_all(conn)
    .await
}

/// 查询最新 5 张发票 (按日期降序)
pub async fn latest_invoices(
    conn: &mut PgConnection,
) -> Result<Vec<LatestInvoiceRow>, sqlx::Error> {
    sqlx::query_as::<_, LatestInvoiceRow>(
        r#"
        SELECT i.id, c.name, c.image_url, c.email, i.amount
        FROM invoices i
        JOIN customers c ON i.customer_id = c.id
        ORDER BY i.date DESC
        LIMIT 5
        "#,
    )
    .fetch_all(conn)
    .await
}

/// 统计发票总数
pub async fn count_invoices(conn: &mut PgConnection) -> Result<i64, sqlx::Error> {
    sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM invoices")
        .fetch_one(conn)
        .await
}

/// 统计客户总数
pub async fn count_customers(conn: &mut PgConnection) -> Result<i64, sqlx::Error> {
    sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM customers")
        .fetch_one(conn)
        .await
}

/// 按状态汇总发票金额 (单位: 分)
pub async fn invoice_status_totals(
    conn: &mut PgConnection,
) -> Result<InvoiceStatusTotals, sqlx::Error> {
    sqlx::query_as::<_, InvoiceStatusTotals>(
        r#"
        SELECT COALESCE(SUM(CASE WHEN status = 'paid' THEN amount ELSE 0 END), 0) AS paid,
               COALESCE(SUM(CASE WHEN status = 'pending' THEN amount ELSE 0 END), 0) AS pending
        FROM invoices
        "#,
    )
    .fetch_one(conn)
    .await
}

/// 分页查询发票列表 (多列模糊匹配, 按日期降序)
pub async fn filtered_invoices(
    conn: &mut PgConnection,
    pattern: &str,
    limit: i64,
    offset: i64,
) -> Result<Vec<InvoicesTableRow>, sqlx::Error> {
    sqlx::query_as::<_, InvoicesTableRow>(
        r#"
        SELECT i.id, i.amount, i.date, i.status,
               c.name, c.email, c.image_url
        FROM invoices i
        JOIN customers c ON i.customer_id = c.id
        WHERE c.name ILIKE $1
           OR c.email ILIKE $1
           OR i.amount::text ILIKE $1
           OR i.date::text ILIKE $1
           OR i.status ILIKE $1
        ORDER BY i.date DESC
        LIMIT $2 OFFSET $3
        "#,
    )
    .bind(pattern)
    .bind(limit)
    .bind(offset)
    .fetch_all(conn)
    .await
}

/// 统计匹配条件的发票总数 (与 filtered_invoices 同一过滤条件)
pub async fn count_filtered_invoices(
    conn: &mut PgConnection,
    pattern: &str,
) -> Result<i64, sqlx::Error> {
    sqlx::query_scalar::<_, i64>(
        r#"
        SELECT COUNT(*)
        FROM invoices i
        JOIN customers c ON i.customer_id = c.id
        WHERE c.name ILIKE $1
           OR c.email ILIKE $1
           OR i.amount::text ILIKE $1
           OR i.date::text ILIKE $1
           OR i.status ILIKE $1
        "#,
    )
    .bind(pattern)
    .fetch_one(conn)
    .await
}

/// 按主键查询发票 (编辑表单用)
pub async fn invoice_by_id(
    conn: &mut PgConnection,
    id: Uuid,
) -> Result<Option<InvoiceFormRow>, sqlx::Error> {
    sqlx::query_as::<_, InvoiceFormRow>(
        r#"
        SELECT i.id, i.customer_id, i.amount, i.status
        FROM invoices i
        WHERE i.id = $1
        "#,
    )
    .bind(id)
    .fetch_optional(conn)
    .await
}

/// 查询全部客户 (按姓名升序)
pub async fn customers(conn: &mut PgConnection) -> Result<Vec<CustomerField>, sqlx::Error> {
    sqlx::query_as::<_, CustomerField>(
        r#"
        SELECT id, name
        FROM customers
        ORDER BY name ASC
        "#,
    )
    .fetch_all(conn)
    .await
}

/// 客户列表查询 (左连接聚合发票数量与金额, 无发票客户合计为 0)
pub async fn filtered_customers(
    conn: &mut PgConnection,
    pattern: &str,
) -> Result<Vec<CustomersTableRow>, sqlx::Error> {
    sqlx::query_as::<_, CustomersTableRow>(
        r#"
        SELECT c.id, c.name, c.email, c.image_url,
               COUNT(i.id) AS total_invoices,
               COALESCE(SUM(CASE WHEN i.status = 'pending' THEN i.amount ELSE 0 END), 0) AS total_pending,
               COALESCE(SUM(CASE WHEN i.status = 'paid' THEN i.amount ELSE 0 END), 0) AS total_paid
        FROM customers c
        LEFT JOIN invoices i ON c.id = i.customer_id
        WHERE c.name ILIKE $1
           OR c.email ILIKE $1
        GROUP BY c.id, c.name, c.email, c.image_url
        ORDER BY c.name ASC
        "#,
    )
    .bind(pattern)
    .fetch_all(conn)
    .await
}

/// 按邮箱查询用户
pub async fn user_by_email(
    conn: &mut PgConnection,
    email: &str,
) -> Result<Option<User>, sqlx::Error> {
    sqlx::query_as::<_, User>(
        r#"
        SELECT id, email, password
        FROM users
        WHERE email = $1
        "#,
    )
    .bind(email)
    .fetch_optional(conn)
    .await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn like_pattern_wraps_query() {
        assert_eq!(like_pattern("lee"), "%lee%");
        assert_eq!(like_pattern(""), "%%");
        assert_eq!(like_pattern("100%"), "%100%%");
    }
}
