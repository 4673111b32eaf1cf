use {
    crate::domain::error::GatewayError,
    derive_more::Display,
    secrecy::{ExposeSecret, SecretString},
    serde::{Deserialize, Serialize},
    std::env,
};

pub const LOGIN_VAR: &str = "AUTHORIZE_NET_LOGIN";
pub const PASSWORD_VAR: &str = "AUTHORIZE_NET_PASSWORD";
pub const TEST_VAR: &str = "AUTHORIZE_NET_TEST";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Display, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    #[display("test")]
    Test,
    #[default]
    #[display("production")]
    Production,
}

impl Environment {
    pub fn is_test(&self) -> bool {
        matches!(self, Self::Test)
    }
}

/// Merchant credentials, validated once and immutable afterwards.
#[derive(Debug, Clone)]
pub struct Credentials {
    login: String,
    transaction_key: SecretString,
    environment: Environment,
}

impl Credentials {
    pub fn new(
        login: impl Into<String>,
        transaction_key: SecretString,
        environment: Environment,
    ) -> Result<Self, GatewayError> {
        let login = login.into();
        if login.trim().is_empty() {
            return Err(GatewayError::Configuration("login is required".into()));
        }
        if transaction_key.expose_secret().trim().is_empty() {
            return Err(GatewayError::Configuration(
                "password (transaction key) is required".into(),
            ));
        }
        Ok(Self {
            login,
            transaction_key,
            environment,
        })
    }

    pub fn login(&self) -> &str {
        &self.login
    }

    pub fn transaction_key(&self) -> &SecretString {
        &self.transaction_key
    }

    pub fn environment(&self) -> Environment {
        self.environment
    }
}

/// Options recognised at gateway construction.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct GatewayConfig {
    #[serde(default)]
    pub login: Option<String>,
    /// API transaction key.
    #[serde(default)]
    pub password: Option<SecretString>,
    #[serde(default)]
    pub test: bool,
}

impl GatewayConfig {
    /// Reads `AUTHORIZE_NET_*` from the process environment, loading `.env` first.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let test = lookup(TEST_VAR)
            .map(|v| matches!(v.trim().to_ascii_lowercase().as_str(), "1" | "true" | "yes"))
            .unwrap_or(false);
        Self {
            login: lookup(LOGIN_VAR),
            password: lookup(PASSWORD_VAR).map(SecretString::from),
            test,
        }
    }

    pub fn into_credentials(self) -> Result<Credentials, GatewayError> {
        let environment = if self.test {
            Environment::Test
        } else {
            Environment::Production
        };
        Credentials::new(
            self.login.unwrap_or_default(),
            self.password
                .unwrap_or_else(|| SecretString::from(String::new())),
            environment,
        )
    }
}
