use bigdecimal::BigDecimal;
use chrono::{DateTime, Local, NaiveDate};

use crate::service::calculator::round2;

/// 默认货币符号 (印度卢比)
pub const DEFAULT_CURRENCY_SYMBOL: &str = "₹";

/// 日期格式化: yyyy-mm-dd, 取本地日历字段; 空值返回空串
pub fn format_date(date: Option<NaiveDate>) -> String {
    match date {
        Some(d) => d.format("%Y-%m-%d").to_string(),
        None => String::new(),
    }
}

/// 日期时间格式化, 与应用日志时间格式保持一致; 空值返回空串
pub fn format_date_time(at: Option<DateTime<Local>>) -> String {
    match at {
        Some(t) => t.format("%Y-%m-%d %H:%M:%S").to_string(),
        None => String::new(),
    }
}

/// 货币格式化: 符号 + 两位小数金额; 空值返回空串
pub fn format_currency(amount: Option<&BigDecimal>, symbol: &str) -> String {
    match amount {
        Some(value) => format!("{}{}", symbol, round2(value)),
        None => String::new(),
    }
}
