//! Rounding policies for mapping amounts onto a currency's minor-unit grid.

use rust_decimal::RoundingStrategy;
use serde::{Deserialize, Serialize};

/// Rounding policy applied when an exact amount is cut to currency precision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RoundingMode {
    /// Away from zero whenever the value is not already on the grid.
    Up,
    /// Toward zero (truncation).
    Down,
    /// Nearest neighbor; exact halves go away from zero.
    #[default]
    HalfUp,
    /// Nearest neighbor; exact halves go toward zero.
    HalfDown,
    /// Nearest neighbor; exact halves go to the even neighbor (banker's rounding).
    HalfEven,
}

impl RoundingMode {
    /// All modes, in declaration order.
    pub const ALL: [Self; 5] = [
        Self::Up,
        Self::Down,
        Self::HalfUp,
        Self::HalfDown,
        Self::HalfEven,
    ];

    /// The matching `rust_decimal` strategy.
    #[must_use]
    pub const fn strategy(self) -> RoundingStrategy {
        match self {
            Self::Up => RoundingStrategy::AwayFromZero,
            Self::Down => RoundingStrategy::ToZero,
            Self::HalfUp => RoundingStrategy::MidpointAwayFromZero,
            Self::HalfDown => RoundingStrategy::MidpointTowardZero,
            Self::HalfEven => RoundingStrategy::MidpointNearestEven,
        }
    }

    /// Snake-case name, as used in configuration.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Up => "up",
            Self::Down => "down",
            Self::HalfUp => "half_up",
            Self::HalfDown => "half_down",
            Self::HalfEven => "half_even",
        }
    }
}

impl std::fmt::Display for RoundingMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for RoundingMode {
    type Err = String;

    /// Accepts `half_even`, `half-even`, `HALF_EVEN` and `ROUND_HALF_EVEN` spellings.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase().replace('-', "_");
        let name = normalized.strip_prefix("round_").unwrap_or(&normalized);
        match name {
            "up" => Ok(Self::Up),
            "down" => Ok(Self::Down),
            "half_up" => Ok(Self::HalfUp),
            "half_down" => Ok(Self::HalfDown),
            "half_even" => Ok(Self::HalfEven),
            _ => Err(format!("Unknown rounding mode: {s}")),
        }
    }
}
