pub mod error;
pub mod gateway;
pub mod money;
pub mod payment_method;
pub mod response;
pub mod result;
