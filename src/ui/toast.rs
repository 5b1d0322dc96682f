use dashmap::DashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;

/// 通知级别 (对应 bootstrap 上下文色)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastLevel {
    Info,
    Success,
    Warning,
    Danger,
}

impl ToastLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            ToastLevel::Info => "info",
            ToastLevel::Success => "success",
            ToastLevel::Warning => "warning",
            ToastLevel::Danger => "danger",
        }
    }
}

/// 单条通知
#[derive(Debug, Clone)]
pub struct Toast {
    pub id: u64,
    pub level: ToastLevel,
    pub message: String,
}

impl Toast {
    /// 通知标记: 头部 (标题 + 关闭按钮) 与正文
    pub fn markup(&self) -> String {
        let level = self.level.as_str();
        format!(
            concat!(
                "<div id=\"toast-{id}\" class=\"toast bg-{level} text-white\" ",
                "role=\"alert\" aria-live=\"assertive\" aria-atomic=\"true\">",
                "<div class=\"toast-header bg-{level} text-white\">",
                "<strong class=\"me-auto\">Notification</strong>",
                "<button type=\"button\" class=\"btn-close btn-close-white\" ",
                "data-bs-dismiss=\"toast\" aria-label=\"Close\"></button>",
                "</div>",
                "<div class=\"toast-body\">{message}</div>",
                "</div>",
            ),
            id = self.id,
            level = level,
            message = self.message,
        )
    }
}

/// 通知组件库 - 黑盒协作者
/// 负责展示通知并在自身的隐藏事件后调用移除句柄
pub trait ToastLibrary: Send + Sync {
    fn show(&self, toast: &Toast, dismiss: DismissHandle);
}

/// 移除句柄: 组件库隐藏事件或降级定时器触发时调用
pub struct DismissHandle {
    id: u64,
    container: Arc<DashMap<u64, Toast>>,
}

impl DismissHandle {
    pub fn dismiss(self) {
        self.container.remove(&self.id);
    }
}

/// 通知中心: 固定容器只挂载一次, 通知元素即来即走
pub struct ToastCenter {
    container: Arc<DashMap<u64, Toast>>,
    next_id: AtomicU64,
    library: Option<Arc<dyn ToastLibrary>>,
    timeout: Duration,          // 无组件库时的自动移除时限
}

impl ToastCenter {
    pub fn new(library: Option<Arc<dyn ToastLibrary>>, timeout: Duration) -> Self {
        Self {
            container: Arc::new(DashMap::new()),
            next_id: AtomicU64::new(1),
            library,
            timeout,
        }
    }

    /// 展示一条通知, 返回通知 id
    ///
    /// 有组件库时由组件库驱动关闭生命周期;
    /// 否则起一个不可取消的定时任务到时移除。
    pub fn show(&self, message: &str, level: ToastLevel) -> u64 {
        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        let toast = Toast {
            id,
            level,
            message: message.to_string(),
        };
        self.container.insert(id, toast.clone());

        let dismiss = DismissHandle {
            id,
            container: Arc::clone(&self.container),
        };
        match &self.library {
            Some(library) => library.show(&toast, dismiss),
            None => {
                let timeout = self.timeout;
                tokio::spawn(async move {
                    tokio::time::sleep(timeout).await;
                    dismiss.dismiss();
                });
            }
        }

        id
    }

    /// 当前在显的通知数
    pub fn active_count(&self) -> usize {
        self.container.len()
    }

    pub fn is_active(&self, id: u64) -> bool {
        self.container.contains_key(&id)
    }
}
