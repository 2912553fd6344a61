//! Command parsing and execution.

use std::str::FromStr;
use std::sync::Arc;

use anyhow::{Context, Result, anyhow, bail};
use rust_decimal::Decimal;
use tally_core::{Money, RateTable, allocate, convert, maximum, minimum, round, sum};
use tally_shared::{AppConfig, Currency, RoundingMode};

/// Usage text printed by `tally help`.
pub const USAGE: &str = "\
Usage:
  tally round <amount> <code> [mode]     - Round to currency precision
  tally allocate <amount> <code> <ratio>... - Split by ratios
  tally convert <amount> <from> <to>     - Convert with configured rates
  tally sum <code> <amount>...           - Sum amounts
  tally min <code> <amount>...           - Smallest amount
  tally max <code> <amount>...           - Largest amount
  tally help                             - Show this message

Modes: up, down, half_up, half_down, half_even";

/// Fold applied by the collection commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Fold {
    Sum,
    Min,
    Max,
}

/// A parsed command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Round {
        amount: Decimal,
        code: String,
        mode: Option<RoundingMode>,
    },
    Allocate {
        amount: Decimal,
        code: String,
        ratios: Vec<Decimal>,
    },
    Convert {
        amount: Decimal,
        from: String,
        to: String,
    },
    Fold {
        fold: Fold,
        code: String,
        amounts: Vec<Decimal>,
    },
    Help,
}

impl Command {
    /// Parses arguments, excluding the program name.
    ///
    /// # Errors
    ///
    /// Returns an error for an unknown command, a missing argument or a
    /// malformed number or mode.
    pub fn parse<S: AsRef<str>>(args: &[S]) -> Result<Self> {
        let args: Vec<&str> = args.iter().map(AsRef::as_ref).collect();
        let Some((name, rest)) = args.split_first() else {
            bail!("missing command\n\n{USAGE}");
        };

        match *name {
            "round" => match rest {
                [amount, code] => Ok(Self::Round {
                    amount: parse_decimal(amount)?,
                    code: (*code).to_string(),
                    mode: None,
                }),
                [amount, code, mode] => Ok(Self::Round {
                    amount: parse_decimal(amount)?,
                    code: (*code).to_string(),
                    mode: Some(RoundingMode::from_str(mode).map_err(|e| anyhow!(e))?),
                }),
                _ => bail!("usage: tally round <amount> <code> [mode]"),
            },
            "allocate" => match rest {
                [amount, code, ratios @ ..] if !ratios.is_empty() => Ok(Self::Allocate {
                    amount: parse_decimal(amount)?,
                    code: (*code).to_string(),
                    ratios: ratios.iter().map(|r| parse_decimal(r)).collect::<Result<_>>()?,
                }),
                _ => bail!("usage: tally allocate <amount> <code> <ratio>..."),
            },
            "convert" => match rest {
                [amount, from, to] => Ok(Self::Convert {
                    amount: parse_decimal(amount)?,
                    from: (*from).to_string(),
                    to: (*to).to_string(),
                }),
                _ => bail!("usage: tally convert <amount> <from> <to>"),
            },
            "sum" | "min" | "max" => {
                let fold = match *name {
                    "sum" => Fold::Sum,
                    "min" => Fold::Min,
                    _ => Fold::Max,
                };
                let Some((code, amounts)) = rest.split_first() else {
                    bail!("usage: tally {name} <code> <amount>...");
                };
                Ok(Self::Fold {
                    fold,
                    code: (*code).to_string(),
                    amounts: amounts.iter().map(|a| parse_decimal(a)).collect::<Result<_>>()?,
                })
            }
            "help" | "--help" | "-h" => Ok(Self::Help),
            other => bail!("unknown command '{other}'\n\n{USAGE}"),
        }
    }

    /// Runs the command against `config`, returning the lines to print.
    ///
    /// # Errors
    ///
    /// Returns an error for unknown currency codes and for any money error
    /// raised by the operation.
    pub fn run(&self, config: &AppConfig) -> Result<Vec<String>> {
        match self {
            Self::Round { amount, code, mode } => {
                let money = Money::new(*amount, resolve(config, code)?)?;
                let mode = mode.unwrap_or(config.rounding.mode);
                tracing::debug!(%mode, "Rounding");
                Ok(vec![round(&money, mode).to_string()])
            }
            Self::Allocate {
                amount,
                code,
                ratios,
            } => {
                let money = Money::new(*amount, resolve(config, code)?)?;
                let shares = allocate(&money, ratios)?;
                tracing::debug!(shares = shares.len(), "Allocated");
                Ok(shares.iter().map(exact).collect())
            }
            Self::Convert { amount, from, to } => {
                let money = Money::new(*amount, resolve(config, from)?)?;
                let rates: RateTable = config.rate_entries().collect();
                let converted = convert(&money, resolve(config, to)?, &rates)?;
                Ok(vec![exact(&converted)])
            }
            Self::Fold {
                fold,
                code,
                amounts,
            } => {
                let currency = resolve(config, code)?;
                let values = amounts
                    .iter()
                    .map(|a| Money::new(*a, Arc::clone(&currency)))
                    .collect::<Result<Vec<_>, _>>()?;
                let line = match fold {
                    Fold::Sum => exact(&sum(&values)?),
                    Fold::Min => minimum(&values)?.to_string(),
                    Fold::Max => maximum(&values)?.to_string(),
                };
                Ok(vec![line])
            }
            Self::Help => Ok(vec![USAGE.to_string()]),
        }
    }
}

fn parse_decimal(raw: &str) -> Result<Decimal> {
    Decimal::from_str(raw).with_context(|| format!("invalid number '{raw}'"))
}

fn resolve(config: &AppConfig, code: &str) -> Result<Arc<Currency>> {
    config
        .currency(code)
        .cloned()
        .map(Arc::new)
        .ok_or_else(|| anyhow!("unknown currency code '{code}'"))
}

/// Exact amount followed by the currency code, without rounding.
fn exact(money: &Money) -> String {
    format!("{} {}", money.amount(), money.currency().code())
}
