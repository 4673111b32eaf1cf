use {
    super::error::GatewayError,
    secrecy::{ExposeSecret, SecretString},
    serde::{Deserialize, Serialize},
    std::fmt,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CardBrand {
    Visa,
    Master,
    AmericanExpress,
    Discover,
    DinersClub,
    Jcb,
}

impl CardBrand {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Visa => "visa",
            Self::Master => "master",
            Self::AmericanExpress => "american_express",
            Self::Discover => "discover",
            Self::DinersClub => "diners_club",
            Self::Jcb => "jcb",
        }
    }
}

impl fmt::Display for CardBrand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl TryFrom<&str> for CardBrand {
    type Error = GatewayError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        match s {
            "visa" => Ok(Self::Visa),
            "master" => Ok(Self::Master),
            "american_express" => Ok(Self::AmericanExpress),
            "discover" => Ok(Self::Discover),
            "diners_club" => Ok(Self::DinersClub),
            "jcb" => Ok(Self::Jcb),
            other => Err(GatewayError::Validation(format!(
                "unknown card brand: {other}"
            ))),
        }
    }
}

/// Calendar month, `1..=12`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct MonthOfYear(u8);

impl MonthOfYear {
    pub fn new(month: u8) -> Result<Self, GatewayError> {
        if !(1..=12).contains(&month) {
            return Err(GatewayError::Validation(format!(
                "card month must be between 1 and 12, got {month}"
            )));
        }
        Ok(Self(month))
    }

    pub fn get(&self) -> u8 {
        self.0
    }
}

impl TryFrom<u8> for MonthOfYear {
    type Error = GatewayError;

    fn try_from(month: u8) -> Result<Self, Self::Error> {
        Self::new(month)
    }
}

impl From<MonthOfYear> for u8 {
    fn from(month: MonthOfYear) -> Self {
        month.0
    }
}

impl fmt::Display for MonthOfYear {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}", self.0)
    }
}

/// Card number and verification value are held as [`SecretString`].
#[derive(Debug, Clone, Deserialize)]
pub struct CreditCard {
    pub number: SecretString,
    pub month: MonthOfYear,
    pub year: u16,
    #[serde(default)]
    pub verification_value: Option<SecretString>,
    pub brand: CardBrand,
}

impl CreditCard {
    /// Last four digits, the only part of the number safe to log.
    pub fn last_digits(&self) -> String {
        let number = self.number.expose_secret();
        let start = number.len().saturating_sub(4);
        number.get(start..).unwrap_or_default().to_string()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AccountType {
    #[default]
    Checking,
    Savings,
    BusinessChecking,
}

impl AccountType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Checking => "checking",
            Self::Savings => "savings",
            Self::BusinessChecking => "business_checking",
        }
    }
}

impl fmt::Display for AccountType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct Check {
    pub routing_number: String,
    pub account_number: SecretString,
    pub bank_name: String,
    pub account_holder_name: String,
    #[serde(default)]
    pub number: Option<String>,
    #[serde(default)]
    pub account_type: AccountType,
}

/// Instrument a purchase is charged against.
///
/// Tagged by `"type"` on the wire. Tags other than `credit_card` and `check`
/// land in [`PaymentMethod::Unsupported`] and are rejected by gateways.
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum PaymentMethod {
    CreditCard(CreditCard),
    Check(Check),
    #[serde(other)]
    Unsupported,
}

impl PaymentMethod {
    pub fn kind(&self) -> &'static str {
        match self {
            Self::CreditCard(_) => "credit_card",
            Self::Check(_) => "check",
            Self::Unsupported => "unsupported",
        }
    }
}

impl From<CreditCard> for PaymentMethod {
    fn from(card: CreditCard) -> Self {
        Self::CreditCard(card)
    }
}

impl From<Check> for PaymentMethod {
    fn from(check: Check) -> Self {
        Self::Check(check)
    }
}
