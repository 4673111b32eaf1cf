use {
    super::error::GatewayError,
    serde::{Deserialize, Serialize},
    std::fmt,
};

/// Amount in minor currency units (cents).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "i64")]
pub struct MoneyAmount(i64);

impl MoneyAmount {
    pub fn new(cents: i64) -> Result<Self, GatewayError> {
        if cents < 0 {
            return Err(GatewayError::Validation(format!(
                "MoneyAmount cannot be negative, got: {cents}"
            )));
        }
        Ok(Self(cents))
    }

    pub fn cents(&self) -> i64 {
        self.0
    }

    /// Major units with exactly two fractional digits, e.g. `1050` → `"10.50"`.
    /// Exact for every value and independent of locale.
    pub fn to_decimal_string(&self) -> String {
        format!("{}.{:02}", self.0 / 100, self.0 % 100)
    }
}

impl TryFrom<i64> for MoneyAmount {
    type Error = GatewayError;

    fn try_from(cents: i64) -> Result<Self, Self::Error> {
        Self::new(cents)
    }
}

impl From<MoneyAmount> for i64 {
    fn from(amount: MoneyAmount) -> i64 {
        amount.0
    }
}

impl fmt::Display for MoneyAmount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
