pub mod card;
pub mod customer;
pub mod form;
pub mod invoice;
pub mod revenue;
pub mod user;

pub use card::{CardData, InvoiceStatusTotals};
pub use customer::{CustomerField, CustomersTableRow, FormattedCustomer};
pub use form::{FieldErrors, InvoiceFormData, ValidatedInvoice, WriteEffects};
pub use invoice::{
    InvoiceForm, InvoiceFormRow, InvoiceStatus, InvoicesTableRow, LatestInvoice, LatestInvoiceRow,
    ParseStatusError,
};
pub use revenue::Revenue;
pub use user::User;
