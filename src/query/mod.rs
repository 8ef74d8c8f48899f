//! Query filtering subsystem.
//!
//! # Data Flow
//! ```text
//! query string (tc, ad, soyad, okulno, durum)
//!     → search.rs (SearchQuery, skip absent/empty parameters)
//!     → matcher.rs (one ContainsMatcher per parameter, AND-combined)
//!     → matching records, in table order
//! ```

pub mod matcher;
pub mod search;

pub use matcher::{AndMatcher, ContainsMatcher, Field, Matcher};
pub use search::SearchQuery;
