pub mod calculator;
pub mod form_codec;
pub mod formatter;

pub use calculator::{invoice_totals, line_amount, line_tax, recalculate_line};
pub use form_codec::decode;
pub use formatter::{format_currency, format_date, format_date_time};
