pub mod authorize_net;
pub mod vendor;
