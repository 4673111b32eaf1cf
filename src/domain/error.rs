use thiserror::Error;

/// Error raised by the vendor client, carried through untouched.
pub type VendorError = Box<dyn std::error::Error + Send + Sync + 'static>;

#[derive(Debug, Error)]
pub enum GatewayError {
    #[error("configuration: {0}")]
    Configuration(String),

    #[error("validation: {0}")]
    Validation(String),

    #[error("unsupported payment method: {0}")]
    UnsupportedPaymentMethod(String),

    #[error("missing payment method: {0}")]
    MissingPaymentMethod(String),

    #[error("vendor: {0}")]
    Vendor(#[from] VendorError),
}
