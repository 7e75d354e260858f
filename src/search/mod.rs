//! Query compilation and execution.
//!
//! - [`query`]: classify a raw query string and compile it to a matcher.
//! - [`executor`]: run a compiled matcher over a corpus, in order.

pub mod executor;
pub mod query;

pub use executor::{Hit, SearchResults, execute};
pub use query::{CompiledQuery, QueryError, QueryKind, compile};
