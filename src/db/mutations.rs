use crate::models::InvoiceStatus;
use chrono::NaiveDate;
use sqlx::PgConnection;
use uuid::Uuid;

/// 插入发票 (id 由列默认值生成, customer_id 文本由存储层转换为 uuid)
pub async fn insert_invoice(
    conn: &mut PgConnection,
    customer_id: &str,
    amount_cents: i64,
    status: InvoiceStatus,
    date: NaiveDate,
) -> Result<(), sqlx::Error> {
    sqlx::query(
        r#"
        INSERT INTO invoices (customer_id, amount, status, date)
        VALUES ($1::uuid, $2, $3, $4)
        "#,
    )
    .bind(customer_id)
    .bind(amount_cents)
    .bind(status.as_str())
    .bind(date)
    .execute(conn)
    .await?;

    Ok(())
}

/// 按主键更新发票
pub async fn update_invoice(
    conn: &mut PgConnection,
    id: Uuid,
    customer_id: &str,
    amount_cents: i64,
    status: InvoiceStatus,
) -> Result<(), sqlx::Error> {
    sqlx::query(
        r#"
        UPDATE invoices
        SET customer_id = $1::uuid, amount = $2, status = $3
        WHERE id = $4
        "#,
    )
    .bind(customer_id)
    .bind(amount_cents)
    .bind(status.as_str())
    .bind(id)
    .execute(conn)
    .await?;

    Ok(())
}

/// 按主键删除发票, 返回受影响行数
pub async fn delete_invoice(conn: &mut PgConnection, id: Uuid) -> Result<u64, sqlx::Error> {
    let result = sqlx::query("DELETE FROM invoices WHERE id = $1")
        .bind(id)
        .execute(conn)
        .await?;

    Ok(result.rows_affected())
}
