//! # Vellum Core
//!
//! Edit session composition root and its collaborators.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌───────────────────────────────────────────────┐
//! │                 EditSession                   │
//! │  ┌────────────┐  ┌────────┐                   │
//! │  │ TextBuffer │  │ Cursor │   name (metadata) │
//! │  └────────────┘  └────────┘                   │
//! └───────┬───────────────────────────────────────┘
//!         │ save(raw text)
//!         ▼
//!   PersistenceSink (FileSink, MemorySink, ...)
//! ```
//!
//! The session delegates sequence mutation to the buffer and position
//! updates to the cursor, and is the only place the invariant "the cursor is
//! a valid insertion point" is enforced.

pub mod config;
pub mod session;
pub mod sink;

pub use config::{Config, ConfigError};
pub use session::{EditSession, SessionId};
pub use sink::{FileSink, MemorySink, PersistenceSink};

/// Result type for session operations
pub type SessionResult<T> = Result<T, SessionError>;

/// Errors that can occur driving an edit session
#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    #[error("Buffer error: {0}")]
    Buffer(#[from] vellum_buffer::BufferError),

    #[error("Persistence failed: {0}")]
    Persistence(#[source] std::io::Error),
}
