//! Reusable operations behind the commands
//!
//! Commands resolve flags and config into plain options; the file work lives here.

pub mod generate;
