// Adapters layer: stand-ins for the external payment gateway and seat
// booking system. Both log the call and report success.

use crate::domain::ports::{PaymentGateway, SeatReservation};
use crate::utils::error::Result;

#[derive(Debug, Clone, Copy, Default)]
pub struct TicketPaymentService;

impl TicketPaymentService {
    pub fn new() -> Self {
        Self
    }
}

impl PaymentGateway for TicketPaymentService {
    fn make_payment(&self, account_id: i64, amount: u64) -> Result<()> {
        tracing::info!(account_id, amount, "Payment taken");
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SeatReservationService;

impl SeatReservationService {
    pub fn new() -> Self {
        Self
    }
}

impl SeatReservation for SeatReservationService {
    fn reserve_seat(&self, account_id: i64, seat_count: u32) -> Result<()> {
        tracing::info!(account_id, seat_count, "Seats reserved");
        Ok(())
    }
}
