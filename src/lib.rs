//! Performer Settlement Engine
//!
//! This crate splits the gross paid for a performer's multi-day engagement
//! into wage, mileage, per-diem, justified-expense and equipment-rental
//! components, applies commission and statutory withholdings, and solves the
//! inverse problem of finding the gross that yields a target net.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod error;
pub mod models;
