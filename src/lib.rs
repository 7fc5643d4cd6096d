//! Annual Leave Entitlement and Settlement Engine
//!
//! This crate computes anniversary-based leave entitlements, the current leave
//! period and its expiry status, and the cash value of unused days. It also
//! aggregates snapshots per department and across the whole roster, and serves
//! all of it over a small JSON API.
//!
//! Every calculation takes an explicit reference date and a [`config::LeavePolicy`],
//! so the same inputs always produce the same snapshot.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod error;
pub mod models;
pub mod roster;
pub mod telemetry;
