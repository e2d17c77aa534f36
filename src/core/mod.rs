pub mod rules;
pub mod service;

pub use crate::domain::model::{PurchaseRequest, PurchaseSummary, TicketType, TicketTypeRequest};
pub use crate::domain::ports::{PaymentGateway, SeatReservation};
pub use crate::utils::error::Result;
