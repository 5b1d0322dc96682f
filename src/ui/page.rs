use std::time::Duration;

use tokio::task::JoinHandle;

use crate::config::UiConfig;
use crate::models::Document;
use crate::ui::capabilities::UiCapabilities;
use crate::ui::print;

/// 工具提示的标记属性与值 (data-bs-toggle="tooltip")
pub const TOOLTIP_ATTR: &str = "data-bs-toggle";
pub const TOOLTIP_VALUE: &str = "tooltip";

/// 页面: 文档 + 启动时装配好的外部能力
pub struct Page {
    pub doc: Document,
    caps: UiCapabilities,
    config: UiConfig,
}

impl Page {
    pub fn new(doc: Document, caps: UiCapabilities, config: UiConfig) -> Self {
        Self { doc, caps, config }
    }

    /// 页面加载初始化
    ///
    /// 返回打印模式的延迟任务句柄 (非打印模式为 None)。
    pub fn initialize(&mut self) -> Option<JoinHandle<()>> {
        // 1. 渲染图标
        if let Some(icons) = &self.caps.icons {
            icons.replace(&mut self.doc);
        }

        // 2. 给标记元素安装工具提示
        if let Some(tooltips) = &self.caps.tooltips {
            for element in self.doc.elements_with_attr(TOOLTIP_ATTR) {
                if element.attr(TOOLTIP_ATTR) == Some(TOOLTIP_VALUE) {
                    tooltips.attach(element);
                }
            }
        }

        // 3. 打印模式: print=true 时延迟调起打印
        print::print_on_load(
            &self.doc,
            &self.caps,
            Duration::from_millis(self.config.print_delay_ms),
        )
    }

    /// 打印按钮点击入口
    pub fn click_print_button(&mut self, button_id: &str) {
        print::click_print_button(&mut self.doc, button_id, &self.caps);
    }
}
