use serde::{Deserialize, Serialize};

use crate::service::formatter::DEFAULT_CURRENCY_SYMBOL;

/// 应用配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub ui: UiConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    pub currency_symbol: String,
    pub print_delay_ms: u64,    // 打印前等待渲染完成的时间
    pub toast_timeout_ms: u64,  // 无组件库时通知自动移除时限
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            currency_symbol: DEFAULT_CURRENCY_SYMBOL.to_string(),
            print_delay_ms: 500,
            toast_timeout_ms: 5000,
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            ui: UiConfig::default(),
        }
    }
}

impl AppConfig {
    /// 从环境变量加载配置, 无法解析的值回落默认
    pub fn from_env() -> Self {
        Self {
            ui: UiConfig {
                currency_symbol: std::env::var("UI_CURRENCY_SYMBOL")
                    .unwrap_or_else(|_| DEFAULT_CURRENCY_SYMBOL.to_string()),
                print_delay_ms: std::env::var("UI_PRINT_DELAY_MS")
                    .ok()
                    .and_then(|p| p.parse().ok())
                    .unwrap_or(500),
                toast_timeout_ms: std::env::var("UI_TOAST_TIMEOUT_MS")
                    .ok()
                    .and_then(|p| p.parse().ok())
                    .unwrap_or(5000),
            },
        }
    }
}
