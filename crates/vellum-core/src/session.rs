//! The edit session: one buffer, one cursor, one owner.
//!
//! ## Learning: Composition over Inheritance
//!
//! `EditSession` composes a `TextBuffer` and a `Cursor` and adds the
//! coupling logic between them. Neither component knows the other exists;
//! every operation that touches both goes through the session, which is what
//! keeps the cursor a valid insertion point at every observable moment.

use serde::{Deserialize, Serialize};
use tracing::{info, trace};
use uuid::Uuid;

use vellum_buffer::{CharInput, Cursor, StyledChar, TextBuffer};

use crate::sink::PersistenceSink;
use crate::{SessionError, SessionResult};

/// Unique identifier for an edit session.
///
/// Appears in log events only; no operation interprets it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SessionId(Uuid);

impl SessionId {
    /// Creates a new unique session ID.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for SessionId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for SessionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A single-owner editing session over one text buffer.
///
/// The session's only states are "buffer empty" and "buffer non-empty";
/// those affect nothing but whether deletion and backward navigation can
/// succeed. Not safe for concurrent mutation: exactly one logical editor
/// thread owns a session at a time.
pub struct EditSession {
    /// Unique identifier
    id: SessionId,

    /// The characters being edited
    buffer: TextBuffer,

    /// Insertion point into the buffer
    cursor: Cursor,

    /// Optional target name, passed through to the sink uninterpreted
    name: Option<String>,
}

impl EditSession {
    /// Creates an empty, anonymous session.
    pub fn new() -> Self {
        Self {
            id: SessionId::new(),
            buffer: TextBuffer::new(),
            cursor: Cursor::new(),
            name: None,
        }
    }

    /// Creates an empty session with a target name.
    ///
    /// The name is metadata for the persistence sink; the session itself
    /// never interprets it.
    pub fn with_name(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..Self::new()
        }
    }

    // ==================== Getters ====================

    /// Returns the session ID.
    pub fn id(&self) -> SessionId {
        self.id
    }

    /// Returns the target name, if any.
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Returns the underlying buffer.
    pub fn buffer(&self) -> &TextBuffer {
        &self.buffer
    }

    /// Returns mutable access to the buffer.
    ///
    /// This is the path for restyling stored characters in place. Inserting
    /// or deleting through this handle bypasses cursor bookkeeping; prefer
    /// the session operations for edits.
    pub fn buffer_mut(&mut self) -> &mut TextBuffer {
        &mut self.buffer
    }

    /// Returns the cursor.
    pub fn cursor(&self) -> &Cursor {
        &self.cursor
    }

    /// Returns the cursor's insertion-point offset.
    pub fn cursor_position(&self) -> usize {
        self.cursor.position()
    }

    // ==================== Editing ====================

    /// Inserts one character at the cursor.
    ///
    /// Accepts a bare `char` or a pre-styled [`StyledChar`]; raw input is
    /// normalized to an unstyled character. On success the buffer has grown
    /// by one and the cursor sits immediately after the inserted character.
    pub fn insert(&mut self, input: impl Into<CharInput>) -> SessionResult<()> {
        let ch = input.into().into_styled();
        self.buffer.insert_at(self.cursor.position(), ch)?;
        self.cursor.advance();
        trace!(session = %self.id, position = self.cursor.position(), "inserted character");
        Ok(())
    }

    /// Inserts every character of `text` in order at the cursor.
    pub fn insert_str(&mut self, text: &str) -> SessionResult<()> {
        for ch in text.chars() {
            self.insert(ch)?;
        }
        Ok(())
    }

    /// Deletes the character at the cursor and returns it.
    ///
    /// The cursor does not move; it now addresses what was the following
    /// character, or the end of the buffer.
    pub fn delete(&mut self) -> SessionResult<StyledChar> {
        let removed = self.buffer.delete_at(self.cursor.position())?;
        trace!(session = %self.id, position = self.cursor.position(), "deleted character");
        Ok(removed)
    }

    // ==================== Navigation ====================

    /// Steps the cursor forward one character, stopping at the buffer end.
    pub fn advance(&mut self) {
        if self.cursor.position() < self.buffer.len() {
            self.cursor.advance();
        }
    }

    /// Steps the cursor backward one character.
    ///
    /// Errors with [`CursorUnderflow`](vellum_buffer::BufferError::CursorUnderflow)
    /// at the buffer start.
    pub fn retreat(&mut self) -> SessionResult<()> {
        self.cursor.retreat()?;
        Ok(())
    }

    /// Moves the cursor to the start of the current line.
    pub fn move_to_line_start(&mut self) {
        self.cursor.move_to_line_start(&self.buffer);
    }

    /// Moves the cursor to the end of the current line.
    pub fn move_to_line_end(&mut self) {
        self.cursor.move_to_line_end(&self.buffer);
    }

    // ==================== Rendering & Persistence ====================

    /// Renders the buffer with style markers.
    pub fn rendered_text(&self) -> String {
        self.buffer.render()
    }

    /// Returns the plain text, styles ignored.
    pub fn raw_text(&self) -> String {
        self.buffer.raw_text()
    }

    /// Writes the raw text to `sink`, tagged with the session name.
    ///
    /// Styling is not persisted. Any sink failure surfaces unchanged as
    /// [`SessionError::Persistence`]; nothing is retried.
    pub fn save<S: PersistenceSink>(&mut self, sink: &mut S) -> SessionResult<()> {
        let text = self.buffer.raw_text();
        sink.persist(self.name.as_deref(), &text)
            .map_err(SessionError::Persistence)?;
        info!(session = %self.id, chars = self.buffer.len(), "session saved");
        Ok(())
    }
}

impl Default for EditSession {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sink::MemorySink;
    use vellum_buffer::BufferError;

    #[test]
    fn test_insert_then_render_round_trip() {
        let mut session = EditSession::new();
        for ch in "hello".chars() {
            session.insert(ch).unwrap();
        }
        assert_eq!(session.rendered_text(), "hello");
        assert_eq!(session.cursor_position(), 5);
    }

    #[test]
    fn test_styled_insert_renders_marker() {
        let mut session = EditSession::new();
        session.insert('h').unwrap();
        session.insert('e').unwrap();
        session.insert(StyledChar::new('l').with_bold(true)).unwrap();
        assert_eq!(session.rendered_text(), "he*l");
    }

    #[test]
    fn test_delete_after_insert_restores_text() {
        let mut session = EditSession::new();
        session.insert_str("ab").unwrap();

        session.insert('x').unwrap();
        session.retreat().unwrap();
        session.delete().unwrap();

        assert_eq!(session.raw_text(), "ab");
        assert_eq!(session.cursor_position(), 2);
    }

    #[test]
    fn test_delete_at_end_is_error() {
        let mut session = EditSession::new();
        session.insert('a').unwrap();
        assert!(matches!(
            session.delete(),
            Err(SessionError::Buffer(BufferError::IndexOutOfRange { .. }))
        ));
        // Failed delete leaves buffer and cursor untouched.
        assert_eq!(session.raw_text(), "a");
        assert_eq!(session.cursor_position(), 1);
    }

    #[test]
    fn test_retreat_at_start_is_error() {
        let mut session = EditSession::new();
        assert!(matches!(
            session.retreat(),
            Err(SessionError::Buffer(BufferError::CursorUnderflow))
        ));
    }

    #[test]
    fn test_advance_stops_at_end() {
        let mut session = EditSession::new();
        session.insert('a').unwrap();
        session.advance();
        session.advance();
        assert_eq!(session.cursor_position(), 1);
    }

    #[test]
    fn test_line_edit_scenario() {
        // insert "hello\nworld", home, delete, insert 'W'
        let mut session = EditSession::new();
        session.insert_str("hello\nworld").unwrap();
        assert_eq!(session.cursor_position(), 11);

        session.move_to_line_start();
        assert_eq!(session.cursor_position(), 6);

        let removed = session.delete().unwrap();
        assert_eq!(removed.value(), 'w');

        session.insert('W').unwrap();
        assert_eq!(session.raw_text(), "hello\nWorld");
    }

    #[test]
    fn test_restyle_through_buffer_mut() {
        let mut session = EditSession::new();
        session.insert_str("hello").unwrap();

        session.buffer_mut().get_mut(0).unwrap().underline = true;
        assert_eq!(session.rendered_text(), "_hello");
        assert_eq!(session.raw_text(), "hello");
    }

    #[test]
    fn test_save_writes_raw_text_and_name() {
        let mut session = EditSession::with_name("greeting.txt");
        session.insert_str("hi").unwrap();
        session.buffer_mut().get_mut(0).unwrap().bold = true;

        let mut sink = MemorySink::new();
        session.save(&mut sink).unwrap();

        let (name, text) = sink.last().unwrap();
        assert_eq!(name.as_deref(), Some("greeting.txt"));
        // Styles never reach the sink.
        assert_eq!(text, "hi");
    }

    #[test]
    fn test_cursor_stays_valid_across_edits() {
        let mut session = EditSession::new();
        session.insert_str("one\ntwo\nthree").unwrap();

        session.move_to_line_start();
        session.retreat().unwrap();
        session.move_to_line_start();
        session.move_to_line_end();
        session.advance();
        session.delete().unwrap();

        assert!(session.cursor_position() <= session.buffer().len());
    }
}
