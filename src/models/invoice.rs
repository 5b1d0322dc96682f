use bigdecimal::BigDecimal;
use serde::{Deserialize, Serialize};

use crate::models::form::FieldRecord;

/// 发票行项目的表单字段 (均为显示字符串)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LineItemDraft {
    pub description: String,
    pub hsn_sac: String,        // HSN/SAC 商品分类码, 不参与计算
    pub quantity: String,
    pub rate: String,
    pub tax_percentage: String,
    pub amount: String,         // 显示值 = round2(quantity * rate)
    pub tax_amount: String,     // 显示值 = round2(amount * tax_percentage / 100)
}

impl LineItemDraft {
    /// 从解码后的表单记录构建, 缺失字段按空串处理
    pub fn from_record(record: &FieldRecord) -> Self {
        let field = |name: &str| record.get(name).cloned().unwrap_or_default();
        Self {
            description: field("description"),
            hsn_sac: field("hsn_sac"),
            quantity: field("quantity"),
            rate: field("rate"),
            tax_percentage: field("tax_percentage"),
            amount: field("amount"),
            tax_amount: field("tax_amount"),
        }
    }
}

/// 发票合计结果, 金额均保留两位小数
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InvoiceTotals {
    pub subtotal: BigDecimal,
    pub tax_total: BigDecimal,
    pub discount: BigDecimal,
    pub total: BigDecimal,      // subtotal - discount + tax_total
}
