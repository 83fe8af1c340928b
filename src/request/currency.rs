use crate::error::ParameterError;
use std::fmt;
use std::str::FromStr;
use serde::{Serialize, Serializer};

/// The code used when the operator leaves the currency prompt empty.
pub const DEFAULT_CURRENCY: &str = "INR";

/// A 3-character currency code, upper-cased. The code is not checked against a list of real
/// currencies; the pricing service decides what it accepts.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Currency(String);

impl Currency {
    /// The currency code e.g. `"USD"`.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for Currency {
    fn default() -> Self {
        Self(DEFAULT_CURRENCY.into())
    }
}

impl FromStr for Currency {
    type Err = ParameterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.chars().count() != 3 {
            return Err(ParameterError::InvalidCurrency(s.into()));
        }

        Ok(Self(s.to_uppercase()))
    }
}

impl AsRef<str> for Currency {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Serialize for Currency {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn uppercases_currency() {
        assert_eq!(Currency::from_str("usd").unwrap().as_str(), "USD");
    }

    #[test]
    fn rejects_wrong_length() {
        assert_eq!(
            Currency::from_str("US"),
            Err(ParameterError::InvalidCurrency("US".into())),
        );
        assert!(Currency::from_str("EURO").is_err());
        assert!(Currency::from_str("").is_err());
    }

    #[test]
    fn accepts_any_three_characters() {
        assert_eq!(Currency::from_str("x1z").unwrap().as_str(), "X1Z");
    }

    #[test]
    fn defaults_to_inr() {
        assert_eq!(Currency::default().as_str(), "INR");
    }
}
