// server/src/lib.rs

//! Library half of the server: everything the binary wires together,
//! exposed so the route tests can build the same actix `App`.

pub mod config;
pub mod errors;
pub mod state;
pub mod web;
