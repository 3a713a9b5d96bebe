// Thin re-export module: implementation lives under `blockchain/core/` so the
// block entity, chain management and linkage validation stay separate.

pub mod core;
pub use core::*;
