pub mod auth;
pub mod errors;
pub mod gateway;
pub mod order;
