//! Record storage subsystem.
//!
//! # Data Flow
//! ```text
//! data directory
//!     → loader.rs (glob okulno*.csv, sort, parse headerless CSV)
//!     → record.rs (positional columns → Record, rows → Table)
//!     → cache.rs (optional: reuse while file stamps are unchanged)
//!     → source.rs (what handlers call, once per request)
//! ```
//!
//! # Design Decisions
//! - No source files and unreadable source files are different errors
//! - Tables are immutable once built and handed out as `Arc<Table>`

pub mod cache;
pub mod error;
pub mod loader;
pub mod record;
pub mod source;

pub use error::LoadError;
pub use loader::{discover_sources, load_table, read_source};
pub use record::{Record, Table, COLUMN_COUNT};
pub use source::RecordSource;
