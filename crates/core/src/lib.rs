//! Symbol validation and delegation of HD-wallet generation to an external tool.
//!
//! The derivation itself happens inside the tool; this crate only decides
//! whether a request may reach it and interprets what it prints.

pub mod config;
pub mod delegate;
pub mod error;
pub mod executor;
pub mod registry;

pub use config::*;
pub use delegate::*;
pub use error::*;
pub use executor::*;
pub use registry::*;
