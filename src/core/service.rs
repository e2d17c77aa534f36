use crate::config::TicketConfig;
use crate::core::rules;
use crate::core::{
    PaymentGateway, PurchaseRequest, PurchaseSummary, SeatReservation, TicketType,
    TicketTypeRequest,
};
use crate::utils::error::Result;

/// The purchase engine: runs the validation pipeline, computes the amount
/// payable and seats required, then drives the two injected collaborators.
pub struct TicketService<P: PaymentGateway, S: SeatReservation> {
    payment: P,
    seats: S,
    config: TicketConfig,
}

impl<P: PaymentGateway, S: SeatReservation> TicketService<P, S> {
    pub fn new(payment: P, seats: S) -> Self {
        Self::with_config(payment, seats, TicketConfig::default())
    }

    pub fn with_config(payment: P, seats: S, config: TicketConfig) -> Self {
        Self {
            payment,
            seats,
            config,
        }
    }

    pub fn config(&self) -> &TicketConfig {
        &self.config
    }

    /// Validates the purchase, charges the account, then reserves the seats.
    ///
    /// Validation short-circuits on the first failed stage; neither
    /// collaborator is called unless every stage passes. Payment always runs
    /// before seat reservation, and a reservation failure after a successful
    /// payment is not compensated here.
    pub fn purchase_tickets(
        &self,
        account_id: i64,
        requests: &[TicketTypeRequest],
    ) -> Result<PurchaseSummary> {
        let purchase = PurchaseRequest::new(account_id, requests);

        for rule in rules::PIPELINE {
            rule(&purchase, &self.config)?;
        }

        let summary = self.summarize(&purchase);
        tracing::debug!(
            account_id,
            total_tickets = summary.total_tickets,
            total_seats = summary.total_seats,
            total_amount = summary.total_amount,
            "Purchase validated"
        );

        self.payment.make_payment(account_id, summary.total_amount)?;
        self.seats.reserve_seat(account_id, summary.total_seats)?;

        tracing::info!(
            account_id,
            total_seats = summary.total_seats,
            "Purchase completed"
        );
        Ok(summary)
    }

    fn summarize(&self, purchase: &PurchaseRequest) -> PurchaseSummary {
        let mut total_seats = 0u32;
        let mut total_amount = 0u64;
        for ticket_type in TicketType::ALL {
            let count = purchase.count_of(ticket_type);
            total_amount += u64::from(count) * u64::from(self.config.price_of(ticket_type));
            if self.config.seat_required(ticket_type) {
                total_seats = total_seats.saturating_add(count);
            }
        }
        PurchaseSummary {
            total_tickets: purchase.total_tickets(),
            total_seats,
            total_amount,
        }
    }
}
