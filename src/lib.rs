#![no_std]

pub mod events;
pub mod storage;
pub mod token;
pub mod types;
pub mod validation;

pub use token::{SkcToken, SkcTokenClient};
pub use types::*;
