use std::time::Duration;

use tokio::task::JoinHandle;

use crate::models::Document;
use crate::ui::capabilities::UiCapabilities;

/// 打印按钮的标记属性, 值为目标元素 id
pub const PRINT_TARGET_ATTR: &str = "data-print-target";

/// 打印模式的查询串标记
pub const PRINT_QUERY_FLAG: &str = "print=true";

/// 打印指定元素: 目标内容替换 body -> 调起打印 -> 还原 -> 重新渲染图标
///
/// 非重入: 还原前再次触发会破坏文档内容, 属已知限制, 不在此修复。
/// 目标元素不存在时不做任何事。
pub fn print_element(doc: &mut Document, target_id: &str, caps: &UiCapabilities) {
    let Some(target) = doc.element_by_id(target_id) else {
        tracing::warn!("打印目标 {} 不存在, 忽略", target_id);
        return;
    };
    let print_contents = target.html.clone();

    // 1. 换入目标内容
    let original = std::mem::replace(&mut doc.body, print_contents);

    // 2. 调起打印
    if let Some(dialog) = &caps.print {
        dialog.open(&doc.body);
    }

    // 3. 还原并重新渲染被换掉的图标
    doc.body = original;
    if let Some(icons) = &caps.icons {
        icons.replace(doc);
    }
}

/// 打印按钮入口: 按钮的 data-print-target 属性指向目标元素
pub fn click_print_button(doc: &mut Document, button_id: &str, caps: &UiCapabilities) {
    let Some(target_id) = doc
        .element_by_id(button_id)
        .and_then(|button| button.attr(PRINT_TARGET_ATTR))
        .map(str::to_string)
    else {
        return;
    };
    print_element(doc, &target_id, caps);
}

/// 页面加载的打印模式: 查询串带 print=true 时延迟调起打印
/// 等待让页面渲染完成; 任务即发即弃, 不可取消
pub fn print_on_load(
    doc: &Document,
    caps: &UiCapabilities,
    delay: Duration,
) -> Option<JoinHandle<()>> {
    if !doc.has_query_flag(PRINT_QUERY_FLAG) {
        return None;
    }
    let dialog = caps.print.clone()?;
    let body = doc.body.clone();

    Some(tokio::spawn(async move {
        tokio::time::sleep(delay).await;
        dialog.open(&body);
    }))
}
