use thiserror::Error;

use crate::domain::model::TicketType;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TicketError {
    #[error("account id must be a positive integer, got {account_id}")]
    InvalidAccount { account_id: i64 },

    #[error("at least one ticket request must be provided")]
    EmptyRequest,

    #[error("more than one {ticket_type} request in a single purchase")]
    DuplicateCategory { ticket_type: TicketType },

    #[error("no tickets requested")]
    NoTicketsRequested,

    #[error("a maximum of {max} tickets can be purchased at once, got {requested}")]
    TooManyTickets { max: u32, requested: u32 },

    #[error("child and infant tickets must be purchased with an adult ticket")]
    ChildOrInfantWithoutAdult,

    #[error("number of infant tickets ({infants}) cannot exceed the number of adult tickets ({adults})")]
    InfantExceedsAdultCapacity { adults: u32, infants: u32 },

    #[error("ticket type must be ADULT, CHILD, or INFANT, got {value}")]
    InvalidCategory { value: String },

    #[error("number of tickets must be a positive integer")]
    InvalidCount,

    #[error("invalid value for {field}: {value} ({reason})")]
    InvalidConfigValue {
        field: String,
        value: String,
        reason: String,
    },

    #[error("configuration error: {message}")]
    ConfigError { message: String },

    #[error("payment gateway failure: {message}")]
    PaymentFailed { message: String },

    #[error("seat reservation failure: {message}")]
    ReservationFailed { message: String },
}

pub type Result<T> = std::result::Result<T, TicketError>;
