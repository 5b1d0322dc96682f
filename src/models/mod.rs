pub mod document;
pub mod form;
pub mod invoice;

pub use document::{Document, Element};
pub use form::{DecodedForm, FieldRecord, FormValue};
pub use invoice::{InvoiceTotals, LineItemDraft};
