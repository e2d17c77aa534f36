use crate::config::TicketConfig;
use crate::core::{PurchaseRequest, TicketType};
use crate::utils::error::{Result, TicketError};

/// A single validation stage. Stages are pure: same input, same outcome.
pub type Rule = fn(&PurchaseRequest, &TicketConfig) -> Result<()>;

/// Stages in evaluation order; the first failure aborts the purchase.
pub const PIPELINE: [Rule; 4] = [
    account_is_valid,
    requests_are_well_formed,
    within_purchase_limit,
    adults_accompany_minors,
];

pub fn account_is_valid(purchase: &PurchaseRequest, _config: &TicketConfig) -> Result<()> {
    if purchase.account_id() <= 0 {
        return Err(TicketError::InvalidAccount {
            account_id: purchase.account_id(),
        });
    }
    Ok(())
}

pub fn requests_are_well_formed(purchase: &PurchaseRequest, _config: &TicketConfig) -> Result<()> {
    if purchase.requests().is_empty() {
        return Err(TicketError::EmptyRequest);
    }
    if let Some(ticket_type) = purchase.duplicate_category() {
        return Err(TicketError::DuplicateCategory { ticket_type });
    }
    Ok(())
}

pub fn within_purchase_limit(purchase: &PurchaseRequest, config: &TicketConfig) -> Result<()> {
    let total = purchase.total_tickets();
    if total == 0 {
        return Err(TicketError::NoTicketsRequested);
    }
    if total > config.max_tickets_per_purchase {
        return Err(TicketError::TooManyTickets {
            max: config.max_tickets_per_purchase,
            requested: total,
        });
    }
    Ok(())
}

// Children and infants need an adult present, and every infant rides on an
// adult's lap, capped one per adult.
pub fn adults_accompany_minors(purchase: &PurchaseRequest, _config: &TicketConfig) -> Result<()> {
    let adults = purchase.count_of(TicketType::Adult);
    let children = purchase.count_of(TicketType::Child);
    let infants = purchase.count_of(TicketType::Infant);

    if (children > 0 || infants > 0) && adults == 0 {
        return Err(TicketError::ChildOrInfantWithoutAdult);
    }
    if infants > adults {
        return Err(TicketError::InfantExceedsAdultCapacity { adults, infants });
    }
    Ok(())
}
