//! Vacation Allocation Engine for hospital back-office staff.
//!
//! This crate computes and validates yearly vacation allocations for
//! employees: business-day counting over calendar date ranges, non-overlap
//! and quota-matching checks across an employee's allocation group, and an
//! automatic forward search that places a quota-sized block of working days
//! in December or, failing that, January of the next year.

#![warn(missing_docs)]

pub mod allocation;
pub mod api;
pub mod calendar;
pub mod clock;
pub mod config;
pub mod error;
pub mod models;
pub mod store;
