pub mod dashboard;
pub mod invoice_actions;

pub use dashboard::{DashboardService, ITEMS_PER_PAGE};
pub use invoice_actions::InvoiceActions;
