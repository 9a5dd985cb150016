pub mod api;
pub mod config;
pub mod db;
pub mod error;
pub mod models;
pub mod service;
pub mod util;

pub use config::AppConfig;
pub use db::create_pool;
pub use error::{DalError, DalResult};
pub use service::{DashboardService, InvoiceActions};
