use bigdecimal::{BigDecimal, ToPrimitive, Zero};

/// 将分转换为美元格式字符串 (en-US, 如 "$1,234.56")
pub fn format_currency(cents: i64) -> String {
    let sign = if cents < 0 { "-" } else { "" };
    let abs = cents.unsigned_abs();
    format!("{}${}.{:02}", sign, group_thousands(abs / 100), abs % 100)
}

/// 将分 (数据库存储值) 转换为美元金额
pub fn cents_to_dollars(cents: i32) -> BigDecimal {
    BigDecimal::from(cents) / BigDecimal::from(100)
}

/// 将美元金额转换为分 (写入数据库前调用)
///
/// 亚分部分四舍五入 (远离零), 与存储层 numeric -> int 赋值转换一致;
/// 超出 i64 范围时返回 i64::MAX, 由数据库拒绝越界值
pub fn dollars_to_cents(amount: &BigDecimal) -> i64 {
    let cents = amount * BigDecimal::from(100);
    let half = BigDecimal::from(1) / BigDecimal::from(2);
    let adjusted = if cents >= BigDecimal::zero() {
        cents + half
    } else {
        cents - half
    };
    adjusted.with_scale(0).to_i64().unwrap_or(i64::MAX)
}

/// 千分位分组 (1234567 -> "1,234,567")
fn group_thousands(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}
