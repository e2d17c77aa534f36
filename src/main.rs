use clap::Parser;

use cinema_tickets::adapters::{SeatReservationService, TicketPaymentService};
use cinema_tickets::utils::{logger, validation::Validate};
use cinema_tickets::{CliConfig, TicketConfig, TicketService};

fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    logger::init_cli_logger(cli.verbose);

    tracing::info!("Starting cinema-tickets CLI");
    if cli.verbose {
        tracing::debug!("CLI config: {:?}", cli);
    }

    let config = match &cli.config {
        Some(path) => match TicketConfig::from_toml_file(path) {
            Ok(config) => config,
            Err(e) => {
                tracing::error!("❌ Failed to load configuration: {}", e);
                eprintln!("❌ {}", e);
                std::process::exit(1);
            }
        },
        None => TicketConfig::from_env(),
    };

    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        eprintln!("❌ {}", e);
        std::process::exit(1);
    }

    let requests = cli.ticket_requests()?;
    let service = TicketService::with_config(
        TicketPaymentService::new(),
        SeatReservationService::new(),
        config,
    );
    if cli.verbose {
        tracing::debug!("Pricing config: {:?}", service.config());
    }

    match service.purchase_tickets(cli.account_id, &requests) {
        Ok(summary) => {
            if cli.json {
                println!("{}", serde_json::to_string_pretty(&summary)?);
            } else {
                println!(
                    "✅ Purchased {} tickets: {} seats reserved, £{} paid",
                    summary.total_tickets, summary.total_seats, summary.total_amount
                );
            }
        }
        Err(e) => {
            tracing::error!("❌ Purchase failed: {}", e);
            eprintln!("❌ {}", e);
            std::process::exit(2);
        }
    }

    Ok(())
}
