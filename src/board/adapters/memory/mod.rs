//! In-memory adapter implementations.
//!
//! The dashboard keeps its table in process memory only; these adapters are
//! also what the tests run against.

mod table;

pub use table::InMemoryTaskTable;
