use bigdecimal::{BigDecimal, RoundingMode, Zero};

use crate::models::{InvoiceTotals, LineItemDraft};

/// 金额统一保留两位小数 (四舍五入)
pub fn round2(value: &BigDecimal) -> BigDecimal {
    value.with_scale_round(2, RoundingMode::HalfUp)
}

/// 宽容解析: 表单字段可能为空或含非法字符, 解析失败一律按 0 处理
pub fn parse_or_zero(raw: &str) -> BigDecimal {
    raw.trim().parse().unwrap_or_else(|_| BigDecimal::zero())
}

/// 行金额 = 数量 * 单价
pub fn line_amount(quantity: &str, rate: &str) -> BigDecimal {
    round2(&(parse_or_zero(quantity) * parse_or_zero(rate)))
}

/// 行税额 = 金额 * 税率 / 100
pub fn line_tax(amount: &str, tax_percentage: &str) -> BigDecimal {
    round2(&(parse_or_zero(amount) * parse_or_zero(tax_percentage) / BigDecimal::from(100)))
}

/// 重算一行: 金额与税额写回显示字段
/// 税额从已写回 (已舍入) 的金额字段算出, 与页面上逐字段回读的行为一致
pub fn recalculate_line(item: &mut LineItemDraft) {
    item.amount = line_amount(&item.quantity, &item.rate).to_string();
    item.tax_amount = line_tax(&item.amount, &item.tax_percentage).to_string();
}

/// 发票合计: 逐行累加已显示 (已舍入) 的金额与税额
/// total = subtotal - discount + tax_total; 折扣不做符号校验
pub fn invoice_totals(items: &[LineItemDraft], discount: &str) -> InvoiceTotals {
    let mut subtotal = BigDecimal::zero();
    let mut tax_total = BigDecimal::zero();

    for item in items {
        subtotal += parse_or_zero(&item.amount);
        tax_total += parse_or_zero(&item.tax_amount);
    }

    let discount = parse_or_zero(discount);
    let total = &subtotal - &discount + &tax_total;

    InvoiceTotals {
        subtotal: round2(&subtotal),
        tax_total: round2(&tax_total),
        discount: round2(&discount),
        total: round2(&total),
    }
}
