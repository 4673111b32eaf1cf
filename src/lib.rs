pub mod adapters;
pub mod config;
pub mod domain;

pub use {
    adapters::authorize_net::AuthorizeNetGateway,
    config::{Credentials, Environment, GatewayConfig},
    domain::{error::GatewayError, gateway::PaymentGateway, response::Response},
};
