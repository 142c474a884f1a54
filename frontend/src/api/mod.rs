mod auth;
pub mod client;
pub mod errors;
mod resources;
pub mod types;

pub use auth::{CURRENT_USER_ENDPOINT, LOGIN_ENDPOINT, REFRESH_ENDPOINT, REGISTER_ENDPOINT};
pub use client::*;
pub use errors::GatewayError;
pub use resources::{CURRENT_CUSTOMER, CUSTOMERS, INVOICES, VEHICLES, WEBSITE_BLOGS, WEBSITE_HERO};
pub use types::*;
