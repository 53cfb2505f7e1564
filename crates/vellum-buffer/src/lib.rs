//! # Vellum Buffer
//!
//! Styled character storage and cursor primitives.
//!
//! ## Key Concepts for Learning Rust
//!
//! ### Ownership & Borrowing
//! - `TextBuffer` owns every [`StyledChar`] it stores
//! - The cursor holds no reference to the buffer; operations that need to
//!   inspect it borrow `&TextBuffer` for the duration of the call
//! - Mutations require `&mut self` (exclusive access)
//!
//! ### Memory Safety
//! - Indices are validated before every buffer operation
//! - Out-of-range access is an error, never a silent clamp

mod buffer;
mod character;
mod cursor;

pub use buffer::TextBuffer;
pub use character::{BOLD_MARKER, CharInput, ITALIC_MARKER, StyledChar, UNDERLINE_MARKER};
pub use cursor::Cursor;

/// The character value that ends a line inside the buffer.
///
/// Line breaks are ordinary buffer elements with no special storage; only
/// cursor navigation gives this value meaning.
pub const LINE_BREAK: char = '\n';

/// Result type for buffer operations
pub type BufferResult<T> = Result<T, BufferError>;

/// Errors that can occur during buffer operations
#[derive(Debug, thiserror::Error)]
pub enum BufferError {
    #[error("Character value must be exactly one character, got {actual}")]
    InvalidLength { actual: usize },

    #[error("Index {index} is out of bounds for a buffer of length {len}")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("Cursor cannot retreat past the start of the buffer")]
    CursorUnderflow,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_buffer_creation() {
        let buffer = TextBuffer::new();
        assert!(buffer.is_empty());
        assert_eq!(buffer.len(), 0);
    }

    #[test]
    fn test_buffer_from_string() {
        let buffer = TextBuffer::from("Hello, World!");
        assert_eq!(buffer.len(), 13);
        assert_eq!(buffer.raw_text(), "Hello, World!");
    }

    #[test]
    fn test_unstyled_render_matches_raw_text() {
        let buffer = TextBuffer::from("plain\ntext");
        assert_eq!(buffer.render(), buffer.raw_text());
    }
}
