use invoice_form_rust::models::{DecodedForm, FormValue, InvoiceTotals, LineItemDraft};
use invoice_form_rust::service::calculator::{invoice_totals, recalculate_line};
use invoice_form_rust::service::form_codec::{decode, LINE_ITEMS_KEY};
use invoice_form_rust::service::formatter::format_currency;
use invoice_form_rust::AppConfig;
use serde::Serialize;
use std::io::Read;
use tracing::info;
use tracing_subscriber::fmt::time::ChronoLocal;

/// 处理结果: 解码后的表单 + 重算后的明细与合计
#[derive(Debug, Serialize)]
pub struct ProcessOutput {
    pub form: DecodedForm,
    pub line_items: Vec<LineItemDraft>,
    pub totals: InvoiceTotals,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // 初始化日志 - 使用本地时间格式
    tracing_subscriber::fmt()
        .with_timer(ChronoLocal::new("%Y-%m-%d %H:%M:%S".to_string()))
        .with_target(true)
        .with_level(true)
        .init();

    // 加载配置
    let config = AppConfig::from_env();
    info!("Starting invoice form processor with config: {:?}", config);

    // 读取表单字段对: 参数为文件路径, 否则读标准输入
    // 输入为 JSON 数组 [["key","value"], ...], 即浏览器表单字段的提交顺序
    let raw = match std::env::args().nth(1) {
        Some(path) => std::fs::read_to_string(path)?,
        None => {
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf)?;
            buf
        }
    };
    let pairs: Vec<(String, String)> = serde_json::from_str(&raw)?;
    info!("读取 {} 个表单字段", pairs.len());

    // 1. 解码嵌套键
    let form = decode(pairs);

    // 2. 重建行项目并逐行重算金额与税额
    let mut line_items: Vec<LineItemDraft> = form
        .get(LINE_ITEMS_KEY)
        .and_then(FormValue::as_items)
        .map(|items| items.iter().map(LineItemDraft::from_record).collect())
        .unwrap_or_default();
    for item in &mut line_items {
        recalculate_line(item);
    }

    // 3. 合计
    let discount = form
        .get("discount")
        .and_then(FormValue::as_text)
        .unwrap_or("0");
    let totals = invoice_totals(&line_items, discount);
    info!(
        "明细 {} 行, 合计 {} (折扣 {})",
        line_items.len(),
        format_currency(Some(&totals.total), &config.ui.currency_symbol),
        totals.discount
    );

    let output = ProcessOutput {
        form,
        line_items,
        totals,
    };
    println!("{}", serde_json::to_string_pretty(&output)?);

    Ok(())
}
