pub mod cmd;
pub mod config;
pub mod error;
pub mod schedule;
pub mod totp;
pub mod utils;
pub mod writer;

#[cfg(test)]
mod tests;

pub use error::{Error, Result};
pub use totp::{CodeGenerator, CodeOptions, GetTime, ALPHABET};
