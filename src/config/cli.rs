use clap::Parser;

use crate::domain::model::{TicketType, TicketTypeRequest};
use crate::utils::error::Result;

#[derive(Debug, Clone, Parser)]
#[command(name = "cinema-tickets")]
#[command(about = "Purchase cinema tickets with business rule validation")]
pub struct CliConfig {
    #[arg(long)]
    pub account_id: i64,

    #[arg(long, default_value = "0", help = "Number of adult tickets")]
    pub adult: u32,

    #[arg(long, default_value = "0", help = "Number of child tickets")]
    pub child: u32,

    #[arg(long, default_value = "0", help = "Number of infant tickets")]
    pub infant: u32,

    #[arg(long, help = "Path to a TOML pricing configuration file")]
    pub config: Option<String>,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Print the purchase summary as JSON")]
    pub json: bool,
}

impl CliConfig {
    /// One request per category with a non-zero count.
    pub fn ticket_requests(&self) -> Result<Vec<TicketTypeRequest>> {
        [
            (TicketType::Adult, self.adult),
            (TicketType::Child, self.child),
            (TicketType::Infant, self.infant),
        ]
        .into_iter()
        .filter(|(_, count)| *count > 0)
        .map(|(ticket_type, count)| TicketTypeRequest::new(ticket_type, count))
        .collect()
    }
}
