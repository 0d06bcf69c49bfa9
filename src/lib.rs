// src/lib.rs

#[macro_use]
pub mod macros;

#[cfg(feature = "cli")]
pub mod cli;
pub mod config;
pub mod error;
pub mod gui;
pub mod log;

pub mod csv;
pub mod fetch;
pub mod file;
pub mod net;
pub mod pager;
pub mod record;
pub mod source;
