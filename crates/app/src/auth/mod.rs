//! Authentication

mod data;
mod errors;
mod password;
mod service;
mod token;

pub use data::*;
pub use errors::*;
pub use password::*;
pub use service::*;
pub use token::*;
