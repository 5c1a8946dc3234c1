//! Calendar engine and input validation for the SAS deliveries app.

pub mod calendar;
pub mod cmds;
pub mod config;
pub mod control;
pub mod delivery;
pub mod error;
pub mod input;
pub mod ui;

pub use error::{Error, ErrorKind, Result};
