/*
 * A rust library for interacting with the Lightspeed Retail
 * (MerchantOS) cloud API.
 *
 * For more information, you can check out their documentation at:
 * https://developers.lightspeedhq.com/retail/
 *
 */
#![warn(clippy::pedantic)]

pub mod client;
pub use client::{LsContext, TokenTransport};
pub mod error;
pub use error::{APIError, APIResult};

pub mod oauth {
    pub use lightspeed_oauth::*;
}

pub mod functions;
pub(crate) mod limiter;
pub mod response;
