use crate::error::ObraError;
use std::{fmt, str::FromStr};

/// A parsed inventory or requirement quantity: `<number> [<unit>]`.
///
/// Ledger records keep the raw string; this type is only used to check
/// input when strict quantities are enabled.
#[derive(Debug, Clone, PartialEq)]
pub struct Quantity {
    pub amount: f64,
    pub unit: Option<String>,
}

impl Quantity {
    pub fn parse(text: &str) -> Result<Self, ObraError> {
        let invalid = || ObraError::InvalidQuantity(text.to_string());
        let trimmed = text.trim();

        let split = trimmed
            .char_indices()
            .find(|(_, c)| !(c.is_ascii_digit() || *c == '.' || *c == ','))
            .map_or(trimmed.len(), |(i, _)| i);
        let (number, rest) = trimmed.split_at(split);

        let separators = number.chars().filter(|c| *c == '.' || *c == ',').count();
        let well_formed = number.starts_with(|c: char| c.is_ascii_digit())
            && number.ends_with(|c: char| c.is_ascii_digit())
            && separators <= 1;
        if !well_formed {
            return Err(invalid());
        }

        let amount = number.replace(',', ".").parse::<f64>().map_err(|_| invalid())?;
        let unit = rest.trim();
        Ok(Self {
            amount,
            unit: (!unit.is_empty()).then(|| unit.to_string()),
        })
    }
}

impl FromStr for Quantity {
    type Err = ObraError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.unit {
            Some(unit) => write!(f, "{} {}", self.amount, unit),
            None => write!(f, "{}", self.amount),
        }
    }
}
