use {
    super::error::GatewayError,
    super::money::MoneyAmount,
    super::payment_method::{CardBrand, Check, CreditCard, PaymentMethod},
    super::response::Response,
    serde::{Deserialize, Serialize},
    std::{future::Future, pin::Pin},
};

pub type GatewayFuture<'a> =
    Pin<Box<dyn Future<Output = Result<Response, GatewayError>> + Send + 'a>>;

/// Options accepted by authorize, purchase, capture and void.
///
/// Only used to tag the operation's log span; nothing here reaches the vendor.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransactionOptions {
    #[serde(default)]
    pub order_id: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}

/// Refunds re-present the original instrument. A check wins over a card
/// when both are set.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RefundOptions {
    #[serde(default)]
    pub check: Option<Check>,
    #[serde(default)]
    pub credit_card: Option<CreditCard>,
}

impl RefundOptions {
    pub fn payment_method(&self) -> Option<PaymentMethod> {
        match (&self.check, &self.credit_card) {
            (Some(check), _) => Some(PaymentMethod::Check(check.clone())),
            (None, Some(card)) => Some(PaymentMethod::CreditCard(card.clone())),
            (None, None) => None,
        }
    }
}

/// Capability shared by every payment gateway.
pub trait PaymentGateway: Send + Sync {
    fn authorize<'a>(
        &'a self,
        amount: MoneyAmount,
        card: &'a CreditCard,
        options: &'a TransactionOptions,
    ) -> GatewayFuture<'a>;

    fn purchase<'a>(
        &'a self,
        amount: MoneyAmount,
        payment_method: &'a PaymentMethod,
        options: &'a TransactionOptions,
    ) -> GatewayFuture<'a>;

    fn capture<'a>(
        &'a self,
        amount: MoneyAmount,
        authorization: &'a str,
        options: &'a TransactionOptions,
    ) -> GatewayFuture<'a>;

    fn void<'a>(
        &'a self,
        authorization: &'a str,
        options: &'a TransactionOptions,
    ) -> GatewayFuture<'a>;

    fn refund<'a>(
        &'a self,
        amount: MoneyAmount,
        authorization: &'a str,
        options: &'a RefundOptions,
    ) -> GatewayFuture<'a>;

    fn display_name(&self) -> &'static str;

    fn homepage_url(&self) -> &'static str;

    fn supported_countries(&self) -> &'static [&'static str];

    fn supported_card_brands(&self) -> &'static [CardBrand];

    fn supports_card_brand(&self, brand: CardBrand) -> bool {
        self.supported_card_brands().contains(&brand)
    }
}
