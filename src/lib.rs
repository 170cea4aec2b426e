// src/lib.rs

//! MET Collection Explorer Library

pub mod client;
pub mod error;
pub mod models;
pub mod pager;
pub mod query;
pub mod resolver;
