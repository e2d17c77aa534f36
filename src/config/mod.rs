#[cfg(feature = "cli")]
pub mod cli;

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::domain::model::TicketType;
use crate::utils::error::{Result, TicketError};
use crate::utils::validation::{validate_positive_number, Validate};

/// Per-category unit prices.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(default)]
pub struct PriceTable {
    pub adult: u32,
    pub child: u32,
    pub infant: u32,
}

impl Default for PriceTable {
    fn default() -> Self {
        Self {
            adult: 25,
            child: 15,
            infant: 0,
        }
    }
}

/// Which categories occupy a physical seat. Infants sit on an adult's lap.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(default)]
pub struct SeatTable {
    pub adult: bool,
    pub child: bool,
    pub infant: bool,
}

impl Default for SeatTable {
    fn default() -> Self {
        Self {
            adult: true,
            child: true,
            infant: false,
        }
    }
}

/// Pricing and business-rule configuration. Read-only after construction.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TicketConfig {
    pub prices: PriceTable,
    pub seats: SeatTable,
    pub max_tickets_per_purchase: u32,
}

impl Default for TicketConfig {
    fn default() -> Self {
        Self {
            prices: PriceTable::default(),
            seats: SeatTable::default(),
            max_tickets_per_purchase: 25,
        }
    }
}

impl TicketConfig {
    pub fn price_of(&self, ticket_type: TicketType) -> u32 {
        match ticket_type {
            TicketType::Adult => self.prices.adult,
            TicketType::Child => self.prices.child,
            TicketType::Infant => self.prices.infant,
        }
    }

    pub fn seat_required(&self, ticket_type: TicketType) -> bool {
        match ticket_type {
            TicketType::Adult => self.seats.adult,
            TicketType::Child => self.seats.child,
            TicketType::Infant => self.seats.infant,
        }
    }

    /// Environment overrides layered on the defaults. Unparsable values fall
    /// back to the default with a warning.
    pub fn from_env() -> Self {
        let mut config = Self::default();
        if let Some(price) = read_env_u32("ADULT_TICKET_PRICE") {
            config.prices.adult = price;
        }
        if let Some(price) = read_env_u32("CHILD_TICKET_PRICE") {
            config.prices.child = price;
        }
        if let Some(max) = read_env_u32("MAX_TICKETS_PER_PURCHASE") {
            config.max_tickets_per_purchase = max;
        }
        config
    }

    /// Loads configuration from a TOML file. Missing keys take their
    /// defaults, so a file may override only the values it cares about.
    pub fn from_toml_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| TicketError::ConfigError {
            message: format!("Failed to read {}: {}", path.display(), e),
        })?;
        let config: Self = toml::from_str(&content).map_err(|e| TicketError::ConfigError {
            message: format!("Failed to parse {}: {}", path.display(), e),
        })?;
        config.validate()?;
        Ok(config)
    }
}

impl Validate for TicketConfig {
    fn validate(&self) -> Result<()> {
        validate_positive_number(
            "max_tickets_per_purchase",
            self.max_tickets_per_purchase,
            1,
        )
    }
}

fn read_env_u32(name: &str) -> Option<u32> {
    let raw = std::env::var(name).ok()?;
    match raw.parse() {
        Ok(value) => Some(value),
        Err(_) => {
            tracing::warn!("Ignoring {}: not a non-negative integer: {}", name, raw);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_price_table() {
        let config = TicketConfig::default();
        assert_eq!(config.price_of(TicketType::Adult), 25);
        assert_eq!(config.price_of(TicketType::Child), 15);
        assert_eq!(config.price_of(TicketType::Infant), 0);
        assert_eq!(config.max_tickets_per_purchase, 25);
    }

    #[test]
    fn test_default_seat_table() {
        let config = TicketConfig::default();
        assert!(config.seat_required(TicketType::Adult));
        assert!(config.seat_required(TicketType::Child));
        assert!(!config.seat_required(TicketType::Infant));
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config: TicketConfig = toml::from_str(
            r#"
            max_tickets_per_purchase = 10

            [prices]
            adult = 30
            "#,
        )
        .unwrap();

        assert_eq!(config.prices.adult, 30);
        assert_eq!(config.prices.child, 15);
        assert_eq!(config.max_tickets_per_purchase, 10);
        assert!(!config.seat_required(TicketType::Infant));
    }

    #[test]
    fn test_validate_rejects_zero_max() {
        let config = TicketConfig {
            max_tickets_per_purchase: 0,
            ..TicketConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(TicketError::InvalidConfigValue { .. })
        ));
    }
}
