//! Values supplied by the operator.

mod currency;
mod user_request;

pub use currency::{Currency, DEFAULT_CURRENCY};
pub use user_request::{UserInput, UserRequest, parse_ids};
