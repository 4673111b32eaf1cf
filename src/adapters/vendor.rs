//! Boundary with the Authorize.Net AIM client library.
//!
//! The client owns the wire protocol, authentication and transport; this
//! module only describes the shapes exchanged with it. A binding to the real
//! client implements [`TransactionFactory`] and [`VendorTransaction`].

use {
    crate::{config::Credentials, domain::error::VendorError},
    derive_more::Display,
    std::{collections::BTreeMap, future::Future, pin::Pin},
};

pub type VendorFuture<'a> =
    Pin<Box<dyn Future<Output = Result<VendorResponse, VendorError>> + Send + 'a>>;

pub const TRANSACTION_ID: &str = "transaction_id";
pub const AVS_RESPONSE: &str = "avs_response";
pub const CARD_CODE_RESPONSE: &str = "card_code_response";
pub const RESPONSE_CODE: &str = "response_code";
pub const RESPONSE_REASON_CODE: &str = "response_reason_code";
pub const RESPONSE_REASON_TEXT: &str = "response_reason_text";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VendorCreditCardOptions {
    pub card_code: Option<String>,
    pub card_type: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VendorCreditCard {
    pub card_number: String,
    /// `MMYY`.
    pub expiration: String,
    pub card_code: Option<String>,
    pub card_type: Option<String>,
}

impl VendorCreditCard {
    pub fn new(
        card_number: impl Into<String>,
        expiration: impl Into<String>,
        options: VendorCreditCardOptions,
    ) -> Self {
        Self {
            card_number: card_number.into(),
            expiration: expiration.into(),
            card_code: options.card_code,
            card_type: options.card_type,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VendorECheckOptions {
    pub check_number: Option<String>,
    pub account_type: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VendorECheck {
    pub routing_number: String,
    pub account_number: String,
    pub bank_name: String,
    pub account_holder_name: String,
    pub check_number: Option<String>,
    pub account_type: Option<String>,
}

impl VendorECheck {
    pub fn new(
        routing_number: impl Into<String>,
        account_number: impl Into<String>,
        bank_name: impl Into<String>,
        account_holder_name: impl Into<String>,
        options: VendorECheckOptions,
    ) -> Self {
        Self {
            routing_number: routing_number.into(),
            account_number: account_number.into(),
            bank_name: bank_name.into(),
            account_holder_name: account_holder_name.into(),
            check_number: options.check_number,
            account_type: options.account_type,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VendorPaymentMethod {
    CreditCard(VendorCreditCard),
    ECheck(VendorECheck),
}

/// AIM `response_code` values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum ResponseCode {
    #[display("1")]
    Approved,
    #[display("2")]
    Declined,
    #[display("3")]
    Error,
    #[display("4")]
    HeldForReview,
}

impl ResponseCode {
    /// Anything unrecognised counts as an error.
    pub fn parse(raw: &str) -> Self {
        match raw.trim() {
            "1" => Self::Approved,
            "2" => Self::Declined,
            "4" => Self::HeldForReview,
            _ => Self::Error,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VendorResponse {
    code: ResponseCode,
    fields: BTreeMap<String, String>,
}

impl VendorResponse {
    pub fn new(code: ResponseCode, fields: BTreeMap<String, String>) -> Self {
        Self { code, fields }
    }

    /// Builds a response from the raw field map, reading `response_code`.
    pub fn from_fields(fields: BTreeMap<String, String>) -> Self {
        let code = fields
            .get(RESPONSE_CODE)
            .map(|raw| ResponseCode::parse(raw))
            .unwrap_or(ResponseCode::Error);
        Self { code, fields }
    }

    pub fn code(&self) -> ResponseCode {
        self.code
    }

    pub fn approved(&self) -> bool {
        self.code == ResponseCode::Approved
    }

    pub fn declined(&self) -> bool {
        self.code == ResponseCode::Declined
    }

    pub fn held(&self) -> bool {
        self.code == ResponseCode::HeldForReview
    }

    pub fn field(&self, name: &str) -> Option<&str> {
        self.fields.get(name).map(String::as_str)
    }

    pub fn fields(&self) -> &BTreeMap<String, String> {
        &self.fields
    }

    pub fn into_fields(self) -> BTreeMap<String, String> {
        self.fields
    }
}

/// One vendor transaction handle, opened per operation.
pub trait VendorTransaction: Send + Sync {
    fn authorize<'a>(
        &'a self,
        amount: &'a str,
        method: &'a VendorPaymentMethod,
    ) -> VendorFuture<'a>;

    fn purchase<'a>(
        &'a self,
        amount: &'a str,
        method: &'a VendorPaymentMethod,
    ) -> VendorFuture<'a>;

    fn prior_auth_capture<'a>(
        &'a self,
        authorization: &'a str,
        amount: &'a str,
    ) -> VendorFuture<'a>;

    fn void<'a>(&'a self, authorization: &'a str) -> VendorFuture<'a>;

    fn refund<'a>(
        &'a self,
        amount: &'a str,
        authorization: &'a str,
        method: &'a VendorPaymentMethod,
    ) -> VendorFuture<'a>;
}

/// Opens vendor transaction handles from merchant credentials.
pub trait TransactionFactory: Send + Sync {
    type Transaction: VendorTransaction;

    fn open(&self, credentials: &Credentials) -> Self::Transaction;
}
