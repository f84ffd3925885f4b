//! Route handlers
//!
//! All HTTP request handlers organized by domain.

pub mod activity;
pub mod health;
pub mod reaction_data;
