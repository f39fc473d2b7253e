//! Resume fit analyzer library

pub mod analysis;
pub mod cli;
pub mod config;
pub mod error;
pub mod input;
pub mod output;
pub mod payment;
pub mod profile;
pub mod session;

pub use config::Config;
pub use error::{Result, ResumeFitError};
