use std::sync::Arc;

use crate::models::{Document, Element};
use crate::ui::toast::ToastLibrary;

/// 图标渲染库 (feather 风格) - 黑盒协作者
pub trait IconLibrary: Send + Sync {
    /// 扫描文档并 (重新) 渲染图标标记
    fn replace(&self, doc: &mut Document);
}

/// 工具提示组件库 - 黑盒协作者
pub trait TooltipLibrary: Send + Sync {
    fn attach(&self, element: &Element);
}

/// 平台打印对话框
pub trait PrintDialog: Send + Sync {
    fn open(&self, body: &str);
}

/// 页面启动时装配一次的外部能力
/// 缺失的能力走降级路径 (无操作或定时器兜底), 不在调用点反复探测
#[derive(Clone, Default)]
pub struct UiCapabilities {
    pub icons: Option<Arc<dyn IconLibrary>>,
    pub tooltips: Option<Arc<dyn TooltipLibrary>>,
    pub print: Option<Arc<dyn PrintDialog>>,
    pub toasts: Option<Arc<dyn ToastLibrary>>,
}
