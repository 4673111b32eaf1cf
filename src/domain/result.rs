//! Address-verification and card-code results with the standard message
//! tables shared by every gateway.

use {
    derive_more::Display,
    serde::{Deserialize, Serialize},
};

const CVV_MESSAGES: &[(&str, &str)] = &[
    ("D", "CVV check flagged transaction as suspicious"),
    ("I", "CVV failed data validation check"),
    ("M", "CVV matches"),
    ("N", "CVV does not match"),
    ("P", "CVV not processed"),
    ("S", "CVV should have been present"),
    ("U", "CVV request unable to be processed by issuer"),
    ("X", "Card does not support verification"),
];

const AVS_MESSAGES: &[(&str, &str)] = &[
    ("A", "Street address matches, but postal code does not match."),
    ("B", "Street address matches, but postal code not verified."),
    ("C", "Street address and postal code do not match."),
    ("D", "Street address and postal code match."),
    ("E", "AVS data is invalid or AVS is not allowed for this card type."),
    ("F", "Card member's name does not match, but billing postal code matches."),
    ("G", "Non-U.S. issuing bank does not support AVS."),
    ("H", "Card member's name does not match. Street address and postal code match."),
    ("I", "Address not verified."),
    (
        "J",
        "Card member's name, billing address, and postal code match. Shipping information verified and chargeback protection guaranteed through the Fraud Protection Program.",
    ),
    ("K", "Card member's name matches but billing address and billing postal code do not match."),
    ("L", "Card member's name and billing postal code match, but billing address does not match."),
    ("M", "Street address and postal code match."),
    ("N", "Street address and postal code do not match."),
    ("O", "Card member's name and billing address match, but billing postal code does not match."),
    ("P", "Postal code matches, but street address not verified."),
    (
        "Q",
        "Card member's name, billing address, and postal code match. Shipping information verified but chargeback protection not guaranteed.",
    ),
    ("R", "System unavailable."),
    ("S", "U.S.-issuing bank does not support AVS."),
    ("T", "Card member's name does not match, but street address matches."),
    ("U", "Address information unavailable."),
    ("V", "Card member's name, billing address, and billing postal code match."),
    ("W", "Street address does not match, but 9-digit postal code matches."),
    ("X", "Street address and 9-digit postal code match."),
    ("Y", "Street address and 5-digit postal code match."),
    ("Z", "Street address does not match, but 5-digit postal code matches."),
];

// Codes absent from both the street and postal groups leave the match unknown.
const STREET_MATCH_YES: &str = "ABDHJMOQTVXY";
const STREET_MATCH_NO: &str = "CKLNWZ";
const POSTAL_MATCH_YES: &str = "DHFJLMPQVWXYZ";
const POSTAL_MATCH_NO: &str = "ACKNO";
const MATCH_UNSUPPORTED: &str = "GS";

fn lookup(table: &[(&str, &'static str)], code: &str) -> Option<&'static str> {
    table
        .iter()
        .find(|(key, _)| *key == code)
        .map(|(_, message)| *message)
}

/// Standard text for a CVV result code.
pub fn cvv_message(code: &str) -> Option<&'static str> {
    lookup(CVV_MESSAGES, code)
}

/// Standard text for an AVS result code.
pub fn avs_message(code: &str) -> Option<&'static str> {
    lookup(AVS_MESSAGES, code)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Serialize, Deserialize)]
pub enum MatchCode {
    #[display("Y")]
    #[serde(rename = "Y")]
    Yes,
    #[display("N")]
    #[serde(rename = "N")]
    No,
    #[display("X")]
    #[serde(rename = "X")]
    Unsupported,
}

fn match_code(code: &str, yes: &str, no: &str) -> Option<MatchCode> {
    let mut chars = code.chars();
    let c = match (chars.next(), chars.next()) {
        (Some(c), None) => c,
        _ => return None,
    };
    if yes.contains(c) {
        Some(MatchCode::Yes)
    } else if no.contains(c) {
        Some(MatchCode::No)
    } else if MATCH_UNSUPPORTED.contains(c) {
        Some(MatchCode::Unsupported)
    } else {
        None
    }
}

/// `code` is the vendor's field verbatim; lookups are exact.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CvvResult {
    pub code: Option<String>,
    pub message: Option<String>,
}

impl CvvResult {
    pub fn new(code: Option<&str>) -> Self {
        let code = code.filter(|c| !c.is_empty()).map(str::to_string);
        let message = code.as_deref().and_then(cvv_message).map(str::to_string);
        Self { code, message }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AvsResult {
    pub code: Option<String>,
    pub message: Option<String>,
    pub street_match: Option<MatchCode>,
    pub postal_match: Option<MatchCode>,
}

impl AvsResult {
    pub fn new(code: Option<&str>) -> Self {
        let code = code.filter(|c| !c.is_empty()).map(str::to_string);
        let Some(c) = code.as_deref() else {
            return Self::default();
        };

        Self {
            message: avs_message(c).map(str::to_string),
            street_match: match_code(c, STREET_MATCH_YES, STREET_MATCH_NO),
            postal_match: match_code(c, POSTAL_MATCH_YES, POSTAL_MATCH_NO),
            code,
        }
    }
}
