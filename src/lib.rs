pub mod config;
pub mod models;
pub mod service;
pub mod ui;

pub use config::AppConfig;
pub use models::{DecodedForm, FormValue, InvoiceTotals, LineItemDraft};
pub use service::form_codec::decode;
pub use ui::{Page, ToastCenter};
