use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// 嵌套字段记录 (如 vendor[name] 解码为 { name: ... })
pub type FieldRecord = IndexMap<String, String>;

/// 解码后的表单值
/// untagged: 序列化结果与浏览器端 JSON 结构一致
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FormValue {
    /// 扁平字段, 如 invoice_number=INV-001
    Text(String),
    /// 单层嵌套对象, 如 vendor[name]
    Record(FieldRecord),
    /// 行项目数组, 按键中的显式下标排序
    Items(Vec<FieldRecord>),
}

impl FormValue {
    pub fn as_text(&self) -> Option<&str> {
        match self {
            FormValue::Text(value) => Some(value),
            _ => None,
        }
    }

    pub fn as_record(&self) -> Option<&FieldRecord> {
        match self {
            FormValue::Record(record) => Some(record),
            _ => None,
        }
    }

    pub fn as_items(&self) -> Option<&[FieldRecord]> {
        match self {
            FormValue::Items(items) => Some(items),
            _ => None,
        }
    }
}

/// 解码后的整张表单: 顶层键 -> 值, 保持字段出现顺序
pub type DecodedForm = IndexMap<String, FormValue>;
