pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::cli::CliConfig;

pub use crate::config::TicketConfig;
pub use crate::core::service::TicketService;
pub use crate::domain::model::{PurchaseSummary, TicketType, TicketTypeRequest};
pub use crate::utils::error::{Result, TicketError};
