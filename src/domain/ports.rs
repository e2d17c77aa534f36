use crate::utils::error::Result;

// Collaborator contracts. Both services are fire-and-forget from the core's
// perspective: a returned error propagates to the caller unmodified, with no
// retry and no compensation of a payment already taken.

pub trait PaymentGateway: Send + Sync {
    fn make_payment(&self, account_id: i64, amount: u64) -> Result<()>;
}

pub trait SeatReservation: Send + Sync {
    fn reserve_seat(&self, account_id: i64, seat_count: u32) -> Result<()>;
}
