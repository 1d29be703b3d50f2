//! Payroll Engine
//!
//! This crate turns raw attendance punches into worked-hour facts, aggregates
//! them over a pay period, applies the statutory contribution and withholding
//! tax tables, and composes the gross-to-net payroll breakdown.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod error;
pub mod models;
