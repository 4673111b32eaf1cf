use {
    super::vendor::{
        AVS_RESPONSE, CARD_CODE_RESPONSE, RESPONSE_REASON_CODE, RESPONSE_REASON_TEXT,
        TRANSACTION_ID, TransactionFactory, VendorCreditCard, VendorCreditCardOptions,
        VendorECheck, VendorECheckOptions, VendorPaymentMethod, VendorResponse,
        VendorTransaction,
    },
    crate::{
        config::{Credentials, GatewayConfig},
        domain::{
            error::{GatewayError, VendorError},
            gateway::{GatewayFuture, PaymentGateway, RefundOptions, TransactionOptions},
            money::MoneyAmount,
            payment_method::{AccountType, CardBrand, Check, CreditCard, PaymentMethod},
            response::Response,
            result::{AvsResult, CvvResult},
        },
    },
    secrecy::ExposeSecret,
};

/// Card-code results that override any other decline message.
const CVV_MESSAGE_CODES: &[&str] = &["N", "S"];
/// Reason codes the gateway uses for AVS mismatches.
const AVS_REASON_CODES: &[&str] = &["27", "45"];
const AVS_MESSAGE_CODES: &[&str] = &["A", "E", "N", "R", "W", "Z"];

const SUPPORTED_CARD_BRANDS: &[CardBrand] = &[
    CardBrand::Visa,
    CardBrand::Master,
    CardBrand::AmericanExpress,
    CardBrand::Discover,
    CardBrand::DinersClub,
    CardBrand::Jcb,
];

pub struct AuthorizeNetGateway<F> {
    credentials: Credentials,
    factory: F,
}

impl<F: TransactionFactory> AuthorizeNetGateway<F> {
    /// Fails when login or password is missing; the vendor is not contacted.
    pub fn new(config: GatewayConfig, factory: F) -> Result<Self, GatewayError> {
        let credentials = config.into_credentials()?;
        Ok(Self::with_credentials(credentials, factory))
    }

    pub fn with_credentials(credentials: Credentials, factory: F) -> Self {
        tracing::debug!(
            login = %credentials.login(),
            environment = %credentials.environment(),
            "authorize.net gateway configured"
        );
        Self {
            credentials,
            factory,
        }
    }

    pub fn credentials(&self) -> &Credentials {
        &self.credentials
    }

    pub fn is_test(&self) -> bool {
        self.credentials.environment().is_test()
    }

    fn transaction(&self) -> F::Transaction {
        self.factory.open(&self.credentials)
    }

    #[tracing::instrument(
        name = "authorize",
        skip_all,
        fields(amount = %amount, card = %card.last_digits(), order_id = ?options.order_id)
    )]
    async fn authorize_inner(
        &self,
        amount: MoneyAmount,
        card: &CreditCard,
        options: &TransactionOptions,
    ) -> Result<Response, GatewayError> {
        let method = VendorPaymentMethod::CreditCard(vendor_credit_card(card));
        let amount = amount.to_decimal_string();
        let vendor = self
            .transaction()
            .authorize(&amount, &method)
            .await
            .map_err(vendor_failed)?;
        Ok(self.convert(vendor))
    }

    #[tracing::instrument(
        name = "purchase",
        skip_all,
        fields(amount = %amount, method = payment_method.kind(), order_id = ?options.order_id)
    )]
    async fn purchase_inner(
        &self,
        amount: MoneyAmount,
        payment_method: &PaymentMethod,
        options: &TransactionOptions,
    ) -> Result<Response, GatewayError> {
        let method = vendor_payment_method(payment_method)?;
        let amount = amount.to_decimal_string();
        let vendor = self
            .transaction()
            .purchase(&amount, &method)
            .await
            .map_err(vendor_failed)?;
        Ok(self.convert(vendor))
    }

    #[tracing::instrument(
        name = "capture",
        skip_all,
        fields(amount = %amount, authorization = %authorization, order_id = ?options.order_id)
    )]
    async fn capture_inner(
        &self,
        amount: MoneyAmount,
        authorization: &str,
        options: &TransactionOptions,
    ) -> Result<Response, GatewayError> {
        let amount = amount.to_decimal_string();
        let vendor = self
            .transaction()
            .prior_auth_capture(authorization, &amount)
            .await
            .map_err(vendor_failed)?;
        Ok(self.convert(vendor))
    }

    #[tracing::instrument(
        name = "void",
        skip_all,
        fields(authorization = %authorization, order_id = ?options.order_id)
    )]
    async fn void_inner(
        &self,
        authorization: &str,
        options: &TransactionOptions,
    ) -> Result<Response, GatewayError> {
        let vendor = self
            .transaction()
            .void(authorization)
            .await
            .map_err(vendor_failed)?;
        Ok(self.convert(vendor))
    }

    #[tracing::instrument(
        name = "refund",
        skip_all,
        fields(amount = %amount, authorization = %authorization)
    )]
    async fn refund_inner(
        &self,
        amount: MoneyAmount,
        authorization: &str,
        options: &RefundOptions,
    ) -> Result<Response, GatewayError> {
        let payment_method = options.payment_method().ok_or_else(|| {
            GatewayError::MissingPaymentMethod(
                "refund requires check or credit_card details".into(),
            )
        })?;
        let method = vendor_payment_method(&payment_method)?;
        let amount = amount.to_decimal_string();
        let vendor = self
            .transaction()
            .refund(&amount, authorization, &method)
            .await
            .map_err(vendor_failed)?;
        Ok(self.convert(vendor))
    }

    fn convert(&self, vendor: VendorResponse) -> Response {
        let response = convert_response(vendor, self.is_test());
        if response.success {
            tracing::info!(authorization = ?response.authorization, "transaction approved");
        } else {
            tracing::info!(
                reason_code = ?response.param(RESPONSE_REASON_CODE),
                fraud_review = response.fraud_review,
                message = %response.message,
                "transaction not approved"
            );
        }
        response
    }
}

impl<F: TransactionFactory> PaymentGateway for AuthorizeNetGateway<F> {
    fn authorize<'a>(
        &'a self,
        amount: MoneyAmount,
        card: &'a CreditCard,
        options: &'a TransactionOptions,
    ) -> GatewayFuture<'a> {
        Box::pin(self.authorize_inner(amount, card, options))
    }

    fn purchase<'a>(
        &'a self,
        amount: MoneyAmount,
        payment_method: &'a PaymentMethod,
        options: &'a TransactionOptions,
    ) -> GatewayFuture<'a> {
        Box::pin(self.purchase_inner(amount, payment_method, options))
    }

    fn capture<'a>(
        &'a self,
        amount: MoneyAmount,
        authorization: &'a str,
        options: &'a TransactionOptions,
    ) -> GatewayFuture<'a> {
        Box::pin(self.capture_inner(amount, authorization, options))
    }

    fn void<'a>(
        &'a self,
        authorization: &'a str,
        options: &'a TransactionOptions,
    ) -> GatewayFuture<'a> {
        Box::pin(self.void_inner(authorization, options))
    }

    fn refund<'a>(
        &'a self,
        amount: MoneyAmount,
        authorization: &'a str,
        options: &'a RefundOptions,
    ) -> GatewayFuture<'a> {
        Box::pin(self.refund_inner(amount, authorization, options))
    }

    fn display_name(&self) -> &'static str {
        "Authorize.Net"
    }

    fn homepage_url(&self) -> &'static str {
        "https://www.authorize.net/"
    }

    fn supported_countries(&self) -> &'static [&'static str] {
        &["US"]
    }

    fn supported_card_brands(&self) -> &'static [CardBrand] {
        SUPPORTED_CARD_BRANDS
    }
}

fn vendor_failed(err: VendorError) -> GatewayError {
    tracing::warn!(error = %err, "vendor call failed");
    GatewayError::Vendor(err)
}

// ── Conversion helpers ──────────────────────────────────────────────────────

pub fn vendor_card_type(brand: CardBrand) -> &'static str {
    match brand {
        CardBrand::Visa => "V",
        CardBrand::Master => "M",
        CardBrand::AmericanExpress => "A",
        CardBrand::Discover => "D",
        CardBrand::DinersClub => "C",
        CardBrand::Jcb => "J",
    }
}

pub fn vendor_account_type(account_type: AccountType) -> &'static str {
    match account_type {
        AccountType::Checking => "CHECKING",
        AccountType::Savings => "SAVINGS",
        AccountType::BusinessChecking => "BUSINESSCHECKING",
    }
}

/// `MMYY`, e.g. month 3 of 2027 → `"0327"`.
pub fn expiration(card: &CreditCard) -> String {
    format!("{}{:02}", card.month, card.year % 100)
}

pub fn vendor_credit_card(card: &CreditCard) -> VendorCreditCard {
    VendorCreditCard::new(
        card.number.expose_secret(),
        expiration(card),
        VendorCreditCardOptions {
            card_code: card
                .verification_value
                .as_ref()
                .map(|code| code.expose_secret().to_string()),
            card_type: Some(vendor_card_type(card.brand).to_string()),
        },
    )
}

pub fn vendor_echeck(check: &Check) -> VendorECheck {
    VendorECheck::new(
        check.routing_number.clone(),
        check.account_number.expose_secret(),
        check.bank_name.clone(),
        check.account_holder_name.clone(),
        VendorECheckOptions {
            check_number: check.number.clone(),
            account_type: Some(vendor_account_type(check.account_type).to_string()),
        },
    )
}

pub fn vendor_payment_method(
    payment_method: &PaymentMethod,
) -> Result<VendorPaymentMethod, GatewayError> {
    match payment_method {
        PaymentMethod::CreditCard(card) => Ok(VendorPaymentMethod::CreditCard(
            vendor_credit_card(card),
        )),
        PaymentMethod::Check(check) => Ok(VendorPaymentMethod::ECheck(vendor_echeck(check))),
        PaymentMethod::Unsupported => Err(GatewayError::UnsupportedPaymentMethod(
            "only credit_card and check are accepted".into(),
        )),
    }
}

/// Message for a vendor response.
///
/// Declines are explained by the card-code result first, then by the AVS
/// result for AVS reason codes, and otherwise by the vendor's reason text.
pub fn response_message(vendor: &VendorResponse, avs: &AvsResult, cvv: &CvvResult) -> String {
    if vendor.declined() {
        let cvv_message = cvv
            .code
            .as_deref()
            .filter(|code| CVV_MESSAGE_CODES.contains(code))
            .and(cvv.message.as_deref());
        if let Some(message) = cvv_message {
            return message.to_string();
        }

        let avs_reason = vendor
            .field(RESPONSE_REASON_CODE)
            .map(str::trim)
            .is_some_and(|code| AVS_REASON_CODES.contains(&code));
        let avs_message = avs
            .code
            .as_deref()
            .filter(|code| avs_reason && AVS_MESSAGE_CODES.contains(code))
            .and(avs.message.as_deref());
        if let Some(message) = avs_message {
            return message.to_string();
        }
    }

    let text = vendor.field(RESPONSE_REASON_TEXT).unwrap_or_default();
    text.strip_suffix('.').unwrap_or(text).to_string()
}

pub fn convert_response(vendor: VendorResponse, test: bool) -> Response {
    let avs_result = AvsResult::new(vendor.field(AVS_RESPONSE));
    let cvv_result = CvvResult::new(vendor.field(CARD_CODE_RESPONSE));
    let message = response_message(&vendor, &avs_result, &cvv_result);
    let authorization = vendor
        .field(TRANSACTION_ID)
        .map(str::trim)
        .filter(|id| !id.is_empty())
        .map(str::to_string);

    Response {
        success: vendor.approved(),
        message,
        test,
        authorization,
        fraud_review: vendor.held(),
        avs_result,
        cvv_result,
        params: vendor.into_fields(),
    }
}
