#![allow(dead_code)]

use aim_gateway::adapters::vendor::{
    ResponseCode, TransactionFactory, VendorFuture, VendorPaymentMethod, VendorResponse,
    VendorTransaction,
};
use aim_gateway::config::{Credentials, Environment, GatewayConfig};
use aim_gateway::domain::error::VendorError;
use aim_gateway::domain::payment_method::{
    AccountType, CardBrand, Check, CreditCard, MonthOfYear,
};
use aim_gateway::AuthorizeNetGateway;
use secrecy::SecretString;
use std::collections::{BTreeMap, VecDeque};
use std::sync::{Arc, Mutex};

pub fn init_tracing() {
    let _ = tracing_subscriber::fmt().with_test_writer().try_init();
}

// ── Mock vendor client ─────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VendorCall {
    Authorize {
        amount: String,
        method: VendorPaymentMethod,
    },
    Purchase {
        amount: String,
        method: VendorPaymentMethod,
    },
    PriorAuthCapture {
        authorization: String,
        amount: String,
    },
    Void {
        authorization: String,
    },
    Refund {
        amount: String,
        authorization: String,
        method: VendorPaymentMethod,
    },
}

/// Transport failure the mock can be told to raise.
#[derive(Debug, thiserror::Error)]
#[error("connection reset by gateway")]
pub struct TransportError;

enum Scripted {
    Respond(VendorResponse),
    Fail,
}

#[derive(Default)]
struct MockState {
    calls: Vec<VendorCall>,
    opened: Vec<(String, Environment)>,
    script: VecDeque<Scripted>,
}

/// Records every handle opened and every call made; replays scripted
/// responses in order, approving with `T0` once the script runs out.
#[derive(Clone, Default)]
pub struct MockVendor {
    state: Arc<Mutex<MockState>>,
}

impl MockVendor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn respond_with(&self, response: VendorResponse) -> &Self {
        self.state
            .lock()
            .unwrap()
            .script
            .push_back(Scripted::Respond(response));
        self
    }

    pub fn fail_next(&self) -> &Self {
        self.state.lock().unwrap().script.push_back(Scripted::Fail);
        self
    }

    pub fn calls(&self) -> Vec<VendorCall> {
        self.state.lock().unwrap().calls.clone()
    }

    pub fn last_call(&self) -> VendorCall {
        self.calls().pop().expect("no vendor call recorded")
    }

    pub fn opened(&self) -> Vec<(String, Environment)> {
        self.state.lock().unwrap().opened.clone()
    }

    fn record(&self, call: VendorCall) -> Result<VendorResponse, VendorError> {
        let mut state = self.state.lock().unwrap();
        state.calls.push(call);
        match state.script.pop_front() {
            Some(Scripted::Respond(response)) => Ok(response),
            Some(Scripted::Fail) => Err(TransportError.into()),
            None => Ok(approved("T0")),
        }
    }
}

pub struct MockTransaction {
    vendor: MockVendor,
}

impl VendorTransaction for MockTransaction {
    fn authorize<'a>(
        &'a self,
        amount: &'a str,
        method: &'a VendorPaymentMethod,
    ) -> VendorFuture<'a> {
        let result = self.vendor.record(VendorCall::Authorize {
            amount: amount.to_string(),
            method: method.clone(),
        });
        Box::pin(async move { result })
    }

    fn purchase<'a>(
        &'a self,
        amount: &'a str,
        method: &'a VendorPaymentMethod,
    ) -> VendorFuture<'a> {
        let result = self.vendor.record(VendorCall::Purchase {
            amount: amount.to_string(),
            method: method.clone(),
        });
        Box::pin(async move { result })
    }

    fn prior_auth_capture<'a>(
        &'a self,
        authorization: &'a str,
        amount: &'a str,
    ) -> VendorFuture<'a> {
        let result = self.vendor.record(VendorCall::PriorAuthCapture {
            authorization: authorization.to_string(),
            amount: amount.to_string(),
        });
        Box::pin(async move { result })
    }

    fn void<'a>(&'a self, authorization: &'a str) -> VendorFuture<'a> {
        let result = self.vendor.record(VendorCall::Void {
            authorization: authorization.to_string(),
        });
        Box::pin(async move { result })
    }

    fn refund<'a>(
        &'a self,
        amount: &'a str,
        authorization: &'a str,
        method: &'a VendorPaymentMethod,
    ) -> VendorFuture<'a> {
        let result = self.vendor.record(VendorCall::Refund {
            amount: amount.to_string(),
            authorization: authorization.to_string(),
            method: method.clone(),
        });
        Box::pin(async move { result })
    }
}

impl TransactionFactory for MockVendor {
    type Transaction = MockTransaction;

    fn open(&self, credentials: &Credentials) -> MockTransaction {
        self.state
            .lock()
            .unwrap()
            .opened
            .push((credentials.login().to_string(), credentials.environment()));
        MockTransaction {
            vendor: self.clone(),
        }
    }
}

// ── Builders ───────────────────────────────────────────────────────────────

pub fn secret(value: &str) -> SecretString {
    SecretString::from(value.to_string())
}

pub fn config(test: bool) -> GatewayConfig {
    GatewayConfig {
        login: Some("merchant-login".into()),
        password: Some(secret("tx-key-123")),
        test,
    }
}

pub fn gateway(vendor: &MockVendor) -> AuthorizeNetGateway<MockVendor> {
    init_tracing();
    AuthorizeNetGateway::new(config(false), vendor.clone()).unwrap()
}

pub fn visa() -> CreditCard {
    CreditCard {
        number: secret("4111111111111111"),
        month: MonthOfYear::new(9).unwrap(),
        year: 2027,
        verification_value: Some(secret("123")),
        brand: CardBrand::Visa,
    }
}

pub fn check() -> Check {
    Check {
        routing_number: "244183602".into(),
        account_number: secret("15378535"),
        bank_name: "Bank of Elbonia".into(),
        account_holder_name: "Jim Smith".into(),
        number: Some("1001".into()),
        account_type: AccountType::Savings,
    }
}

pub fn fields(pairs: &[(&str, &str)]) -> BTreeMap<String, String> {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

pub fn approved(transaction_id: &str) -> VendorResponse {
    VendorResponse::new(
        ResponseCode::Approved,
        fields(&[
            ("response_code", "1"),
            ("transaction_id", transaction_id),
            ("response_reason_code", "1"),
            ("response_reason_text", "This transaction has been approved."),
            ("avs_response", "Y"),
            ("card_code_response", "M"),
        ]),
    )
}

pub fn declined(pairs: &[(&str, &str)]) -> VendorResponse {
    let mut all = fields(&[("response_code", "2")]);
    all.extend(fields(pairs));
    VendorResponse::new(ResponseCode::Declined, all)
}
