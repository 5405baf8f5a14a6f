//! Shared test utilities for the modkit workspace.
//!
//! This crate provides standardised fixtures to eliminate duplication
//! across crate test suites. It is a dev-dependency only and is never published.
//!
//! # Modules
//!
//! - [`module`]: [`TestMod`] builder for a mod checkout with a descriptor

pub mod module;

pub use module::TestMod;
