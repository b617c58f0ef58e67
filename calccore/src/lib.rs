//! calccore — expression building and evaluation for Smart Calculator
//!
//! Headless: nothing here depends on a rendering toolkit. The UI turns
//! each click or key into a [`Command`] and hands it to a [`Session`].

pub mod builder;
pub mod command;
pub mod config;
pub mod error;
pub mod eval;
pub mod session;

pub use builder::{apply, format_result, Outcome, Transition};
pub use command::{Command, Operator};
pub use config::CalcConfig;
pub use error::{CalcError, ConfigError};
pub use eval::{evaluate, tokenize, Token};
pub use session::Session;
