//! locale-template - translator template generator
//!
//! Scans the entity configuration files of a game project (items, creatures)
//! for names and descriptions and writes a `key=` template that translators
//! fill in for their language.
//!
//! ## Module Structure
//!
//! - `cli`: Command-line interface layer (arguments, console output, exit codes)
//! - `config`: Entity-type registry and project layout
//! - `core`: Discovery, parsing, aggregation and export pipeline
//! - `error`: Fatal error types
//! - `report`: Progress and warning notices

pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod report;
