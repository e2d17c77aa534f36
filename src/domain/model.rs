use serde::Serialize;
use std::fmt;
use std::str::FromStr;

use crate::utils::error::{Result, TicketError};

/// The three ticket categories sold at the box office. Closed set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TicketType {
    Adult,
    Child,
    Infant,
}

impl TicketType {
    pub const ALL: [TicketType; 3] = [TicketType::Adult, TicketType::Child, TicketType::Infant];

    pub fn as_str(&self) -> &'static str {
        match self {
            TicketType::Adult => "ADULT",
            TicketType::Child => "CHILD",
            TicketType::Infant => "INFANT",
        }
    }
}

impl fmt::Display for TicketType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TicketType {
    type Err = TicketError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_uppercase().as_str() {
            "ADULT" => Ok(TicketType::Adult),
            "CHILD" => Ok(TicketType::Child),
            "INFANT" => Ok(TicketType::Infant),
            _ => Err(TicketError::InvalidCategory {
                value: s.to_string(),
            }),
        }
    }
}

/// An immutable request for a number of tickets of one category.
///
/// Both fields are validated at construction and private afterwards; a zero
/// count never makes it into a constructed value. Negative, fractional and
/// non-numeric counts are unrepresentable by the `u32` parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TicketTypeRequest {
    ticket_type: TicketType,
    count: u32,
}

impl TicketTypeRequest {
    pub fn new(ticket_type: TicketType, count: u32) -> Result<Self> {
        if count == 0 {
            return Err(TicketError::InvalidCount);
        }
        Ok(Self { ticket_type, count })
    }

    pub fn ticket_type(&self) -> TicketType {
        self.ticket_type
    }

    pub fn count(&self) -> u32 {
        self.count
    }
}

/// One purchase attempt: an account plus its ticket requests.
///
/// Built fresh for every call and discarded afterwards. All derived
/// quantities are recomputed from the underlying requests on each call, so
/// they cannot drift from the source data.
#[derive(Debug, Clone, Copy)]
pub struct PurchaseRequest<'a> {
    account_id: i64,
    requests: &'a [TicketTypeRequest],
}

impl<'a> PurchaseRequest<'a> {
    pub fn new(account_id: i64, requests: &'a [TicketTypeRequest]) -> Self {
        Self {
            account_id,
            requests,
        }
    }

    pub fn account_id(&self) -> i64 {
        self.account_id
    }

    pub fn requests(&self) -> &[TicketTypeRequest] {
        self.requests
    }

    pub fn total_tickets(&self) -> u32 {
        self.requests
            .iter()
            .fold(0u32, |total, request| total.saturating_add(request.count()))
    }

    pub fn count_of(&self, ticket_type: TicketType) -> u32 {
        self.requests
            .iter()
            .filter(|request| request.ticket_type() == ticket_type)
            .fold(0u32, |total, request| total.saturating_add(request.count()))
    }

    /// First category appearing more than once, in request order.
    pub fn duplicate_category(&self) -> Option<TicketType> {
        let mut seen = [false; TicketType::ALL.len()];
        for request in self.requests {
            let index = request.ticket_type() as usize;
            if seen[index] {
                return Some(request.ticket_type());
            }
            seen[index] = true;
        }
        None
    }
}

/// Informational record of a completed purchase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PurchaseSummary {
    pub total_tickets: u32,
    pub total_seats: u32,
    pub total_amount: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ticket_type_parsing() {
        assert_eq!("ADULT".parse::<TicketType>().unwrap(), TicketType::Adult);
        assert_eq!("child".parse::<TicketType>().unwrap(), TicketType::Child);
        assert_eq!("Infant".parse::<TicketType>().unwrap(), TicketType::Infant);

        let err = "SENIOR".parse::<TicketType>().unwrap_err();
        assert_eq!(
            err,
            TicketError::InvalidCategory {
                value: "SENIOR".to_string()
            }
        );
    }

    #[test]
    fn test_ticket_type_display() {
        assert_eq!(TicketType::Adult.to_string(), "ADULT");
        assert_eq!(TicketType::Infant.as_str(), "INFANT");
    }

    #[test]
    fn test_request_construction() {
        let request = TicketTypeRequest::new(TicketType::Adult, 3).unwrap();
        assert_eq!(request.ticket_type(), TicketType::Adult);
        assert_eq!(request.count(), 3);

        assert_eq!(
            TicketTypeRequest::new(TicketType::Child, 0).unwrap_err(),
            TicketError::InvalidCount
        );
    }

    #[test]
    fn test_purchase_request_totals() {
        let requests = vec![
            TicketTypeRequest::new(TicketType::Adult, 2).unwrap(),
            TicketTypeRequest::new(TicketType::Child, 3).unwrap(),
            TicketTypeRequest::new(TicketType::Infant, 1).unwrap(),
        ];
        let purchase = PurchaseRequest::new(1, &requests);

        assert_eq!(purchase.total_tickets(), 6);
        assert_eq!(purchase.count_of(TicketType::Adult), 2);
        assert_eq!(purchase.count_of(TicketType::Child), 3);
        assert_eq!(purchase.count_of(TicketType::Infant), 1);
        assert_eq!(purchase.duplicate_category(), None);
    }

    #[test]
    fn test_duplicate_category_detection() {
        let requests = vec![
            TicketTypeRequest::new(TicketType::Adult, 1).unwrap(),
            TicketTypeRequest::new(TicketType::Child, 1).unwrap(),
            TicketTypeRequest::new(TicketType::Adult, 2).unwrap(),
        ];
        let purchase = PurchaseRequest::new(1, &requests);

        assert_eq!(purchase.duplicate_category(), Some(TicketType::Adult));
    }

    #[test]
    fn test_empty_purchase_request() {
        let purchase = PurchaseRequest::new(1, &[]);
        assert!(purchase.requests().is_empty());
        assert_eq!(purchase.total_tickets(), 0);
    }
}
