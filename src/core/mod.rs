//! Core domain logic for depex
//!
//! This module contains pure business logic with no I/O dependencies.
//!
//! ## Architecture
//!
//! - `models/` - Domain types (Exclusion, Exclusions)
//! - `services/` - Matching logic over those types

pub mod models;
pub mod services;
