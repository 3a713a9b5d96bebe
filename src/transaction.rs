//! Transaction records and the sources that produce them.
//!
//! The ledger core treats a record as an opaque string; `Trade` and
//! `RandomTransactionSource` only exist to feed it realistic-looking batches.

pub mod source;
pub mod types;

pub use source::*;
pub use types::*;
