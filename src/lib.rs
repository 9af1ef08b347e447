//! Labour Engine
//!
//! This crate compares hourly labour cost against hourly revenue. It reads
//! loosely typed work shifts and sales transactions, spreads each shift's
//! pay across the clock hours it covers, and ranks hours by labour cost as a
//! percentage of revenue.

#![warn(missing_docs)]

pub mod analysis;
pub mod calculation;
pub mod config;
pub mod error;
pub mod input;
pub mod models;
