//! Cursor type for buffer navigation.
//!
//! ## Learning: No Back-References
//!
//! A cursor that held a reference into its buffer would freeze the buffer
//! for as long as the cursor lives, so the cursor here is plain position
//! state and the operations that need to inspect the buffer borrow it per
//! call. The session owning both keeps the positional invariant:
//! `0 <= position <= buffer.len()`.

use serde::{Deserialize, Serialize};

use crate::buffer::TextBuffer;
use crate::{BufferError, BufferResult, LINE_BREAK};

/// An insertion-point offset into a text buffer.
///
/// Position `i` means "before element `i`"; `buffer.len()` means "at end".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Cursor {
    position: usize,
}

impl Cursor {
    /// Creates a cursor at the start of the buffer.
    pub fn new() -> Self {
        Self { position: 0 }
    }

    /// Returns the current insertion-point offset.
    #[inline]
    pub fn position(&self) -> usize {
        self.position
    }

    /// Steps forward one position, unchecked.
    ///
    /// The caller keeps this in sync with buffer growth: stepping past
    /// `buffer.len()` is valid only transiently, immediately after an
    /// insertion that extended the buffer to match.
    pub fn advance(&mut self) {
        self.position += 1;
    }

    /// Steps backward one position.
    ///
    /// Errors at position 0 instead of wrapping.
    pub fn retreat(&mut self) -> BufferResult<()> {
        if self.position == 0 {
            return Err(BufferError::CursorUnderflow);
        }
        self.position -= 1;
        Ok(())
    }

    /// Moves to the start of the current line.
    ///
    /// Line start is one past the nearest preceding line break, or the
    /// buffer start if there is none. A cursor already at a line start does
    /// not cross onto the previous line.
    pub fn move_to_line_start(&mut self, buffer: &TextBuffer) {
        while self.position > 0 {
            match buffer.get(self.position - 1) {
                Ok(ch) if ch.value() == LINE_BREAK => break,
                Ok(_) => self.position -= 1,
                // Out-of-sync cursor; stop rather than scan garbage.
                Err(_) => break,
            }
        }
    }

    /// Moves to the end of the current line.
    ///
    /// Line end is the index of the next line break, or `buffer.len()` if
    /// there is none.
    pub fn move_to_line_end(&mut self, buffer: &TextBuffer) {
        while self.position < buffer.len() {
            match buffer.get(self.position) {
                Ok(ch) if ch.value() == LINE_BREAK => break,
                Ok(_) => self.position += 1,
                Err(_) => break,
            }
        }
    }
}
