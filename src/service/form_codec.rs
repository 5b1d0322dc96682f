use indexmap::IndexMap;

use crate::models::{DecodedForm, FormValue};

/// 行项目数组使用的字面顶层键
pub const LINE_ITEMS_KEY: &str = "line_items";

/// 将扁平的 (键, 值) 序列解码为嵌套结构
///
/// 键语法最多两层: 顶层键, 其后要么是单个嵌套键 (对象字段),
/// 要么是数字下标 + 字段名 (line_items 行项目)。
/// 括号语法不合法的键直接丢弃, 不报错。
pub fn decode<I>(pairs: I) -> DecodedForm
where
    I: IntoIterator<Item = (String, String)>,
{
    let mut form = DecodedForm::new();

    for (key, value) in pairs {
        match key.find('[') {
            // 1. 扁平键: 直接存入, 重复键后写覆盖
            None => {
                form.insert(key, FormValue::Text(value));
            }
            // 顶层键为空 ("[x]") -> 丢弃
            Some(0) => continue,
            Some(split) => {
                let main_key = &key[..split];
                let rest = &key[split..];

                if main_key == LINE_ITEMS_KEY {
                    // 2. 行项目: line_items[<下标>][<字段>]
                    let Some((index, field)) = parse_item_key(rest) else {
                        tracing::debug!("丢弃无法解析的行项目键: {}", key);
                        continue;
                    };

                    if !matches!(form.get(main_key), Some(FormValue::Items(_))) {
                        form.insert(main_key.to_string(), FormValue::Items(Vec::new()));
                    }
                    let Some(FormValue::Items(items)) = form.get_mut(main_key) else {
                        continue;
                    };

                    // 补齐跳过的下标, 空记录占位
                    while items.len() <= index {
                        items.push(IndexMap::new());
                    }
                    items[index].insert(field.to_string(), value);
                } else {
                    // 3. 单层嵌套: 取第一个完整的 [段]
                    let Some(nested_key) = first_segment(rest) else {
                        tracing::debug!("丢弃无法解析的字段键: {}", key);
                        continue;
                    };

                    if !matches!(form.get(main_key), Some(FormValue::Record(_))) {
                        form.insert(main_key.to_string(), FormValue::Record(IndexMap::new()));
                    }
                    let Some(FormValue::Record(record)) = form.get_mut(main_key) else {
                        continue;
                    };
                    record.insert(nested_key.to_string(), value);
                }
            }
        }
    }

    form
}

/// 取第一个完整且非空的 [xxx] 段内容
fn first_segment(rest: &str) -> Option<&str> {
    let inner = rest.strip_prefix('[')?;
    let end = inner.find(']')?;
    if end == 0 {
        return None;
    }
    Some(&inner[..end])
}

/// 解析 [<下标>][<字段>]; 下标必须是十进制数字, 字段取到最近的 ']'
fn parse_item_key(rest: &str) -> Option<(usize, &str)> {
    let inner = rest.strip_prefix('[')?;
    let close = inner.find(']')?;
    let index_part = &inner[..close];
    if index_part.is_empty() || !index_part.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    let index: usize = index_part.parse().ok()?;

    let field_rest = inner[close + 1..].strip_prefix('[')?;
    let field_end = field_rest.find(']')?;
    Some((index, &field_rest[..field_end]))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pairs(input: &[(&str, &str)]) -> Vec<(String, String)> {
        input
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn flat_keys_pass_through() {
        let form = decode(pairs(&[("x", "5")]));
        assert_eq!(form.get("x"), Some(&FormValue::Text("5".to_string())));
    }

    #[test]
    fn duplicate_flat_keys_overwrite() {
        let form = decode(pairs(&[("x", "1"), ("x", "2")]));
        assert_eq!(form.get("x"), Some(&FormValue::Text("2".to_string())));
    }

    #[test]
    fn nested_keys_merge_into_one_record() {
        let form = decode(pairs(&[("a[b]", "1"), ("a[c]", "2")]));
        let record = form.get("a").and_then(FormValue::as_record).unwrap();
        assert_eq!(record.get("b").unwrap(), "1");
        assert_eq!(record.get("c").unwrap(), "2");
        assert_eq!(record.len(), 2);
    }

    #[test]
    fn line_items_ordered_by_index_not_arrival() {
        let form = decode(pairs(&[
            ("line_items[1][qty]", "2"),
            ("line_items[0][qty]", "3"),
        ]));
        let items = form.get("line_items").and_then(FormValue::as_items).unwrap();
        assert_eq!(items.len(), 2);
        assert_eq!(items[0].get("qty").unwrap(), "3");
        assert_eq!(items[1].get("qty").unwrap(), "2");
    }

    #[test]
    fn skipped_indices_padded_with_empty_records() {
        let form = decode(pairs(&[("line_items[2][qty]", "7")]));
        let items = form.get("line_items").and_then(FormValue::as_items).unwrap();
        assert_eq!(items.len(), 3);
        assert!(items[0].is_empty());
        assert!(items[1].is_empty());
        assert_eq!(items[2].get("qty").unwrap(), "7");
    }

    #[test]
    fn duplicate_item_index_overwrites_same_record() {
        let form = decode(pairs(&[
            ("line_items[0][qty]", "1"),
            ("line_items[0][qty]", "4"),
            ("line_items[0][rate]", "9"),
        ]));
        let items = form.get("line_items").and_then(FormValue::as_items).unwrap();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].get("qty").unwrap(), "4");
        assert_eq!(items[0].get("rate").unwrap(), "9");
    }

    #[test]
    fn unbalanced_bracket_is_dropped() {
        // 回归保护: 残缺键不得产生条目, 也不得报错
        let form = decode(pairs(&[("a[b", "1")]));
        assert!(form.is_empty());
    }

    #[test]
    fn malformed_keys_are_dropped() {
        let form = decode(pairs(&[
            ("a[]", "1"),                  // 空嵌套段
            ("[b]", "2"),                  // 顶层键为空
            ("line_items[x][qty]", "3"),   // 下标非数字
            ("line_items[0]", "4"),        // 缺字段段
            ("line_items[0]x[qty]", "5"),  // 两段不相邻
        ]));
        assert!(form.is_empty());
    }

    #[test]
    fn trailing_segments_beyond_first_are_ignored() {
        let form = decode(pairs(&[("vendor[name][extra]", "Acme")]));
        let record = form.get("vendor").and_then(FormValue::as_record).unwrap();
        assert_eq!(record.get("name").unwrap(), "Acme");
        assert_eq!(record.len(), 1);
    }

    #[test]
    fn conflicting_shape_is_replaced() {
        // 先扁平后嵌套: 后写建立新形态
        let form = decode(pairs(&[("vendor", "raw"), ("vendor[name]", "Acme")]));
        let record = form.get("vendor").and_then(FormValue::as_record).unwrap();
        assert_eq!(record.get("name").unwrap(), "Acme");

        // 先嵌套后扁平: 同样后写覆盖
        let form = decode(pairs(&[("vendor[name]", "Acme"), ("vendor", "raw")]));
        assert_eq!(form.get("vendor"), Some(&FormValue::Text("raw".to_string())));
    }

    #[test]
    fn decoded_form_serializes_to_browser_shape() {
        let form = decode(pairs(&[
            ("invoice_number", "INV-001"),
            ("vendor[name]", "Acme"),
            ("line_items[0][qty]", "3"),
        ]));
        let json = serde_json::to_value(&form).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "invoice_number": "INV-001",
                "vendor": { "name": "Acme" },
                "line_items": [{ "qty": "3" }],
            })
        );
    }
}
