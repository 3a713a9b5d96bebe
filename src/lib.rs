//! HashLedger - a minimal append-only, hash-linked ledger
//!
//! # Architecture
//!
//! ## Core Ledger
//! - [`blockchain`] - Blocks, content hashing, chain append and back-reference reconstruction
//! - [`transaction`] - Opaque transaction records and injected record sources
//!
//! ## Presentation
//! - [`render`] - Console tables for chains and reconstructed paths
//! - [`cli`] - Argument parsing and the demonstration run
//!
//! ## Configuration & Utilities
//! - [`config`] - Configuration management
//! - [`logging`] - Tracing subscriber setup
//! - [`error`] - Error types

#![forbid(unsafe_code)]

// ============================================================================
// Core Ledger
// ============================================================================
pub mod blockchain;
pub mod transaction;

// ============================================================================
// Presentation
// ============================================================================
pub mod cli;
pub mod render;

// ============================================================================
// Configuration & Utilities
// ============================================================================
pub mod config;
pub mod error;
pub mod logging;
