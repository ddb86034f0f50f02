//! Execute handlers for the multi-signature bridge contract.
//!
//! This module contains all execute message handlers, organized by category:
//! - `deposit` - the user-initiated burn on the deposit path
//! - `release` - the attestation-verified mint on the execute path
//! - `roles` - role grant/revoke
//! - `config` - fee, limit, threshold, destination, and pause management

mod config;
mod deposit;
mod release;
mod roles;

pub use config::*;
pub use deposit::*;
pub use release::*;
pub use roles::*;
