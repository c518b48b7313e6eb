//! bigchunk library — application logic for the `bigchunk` command.

pub mod app;
pub mod config;
pub mod errors;
