//! Styled character units.
//!
//! ## Learning: Fallible Construction
//!
//! Building a `StyledChar` from a `&str` can fail (the string may hold zero
//! or many characters), so that path goes through `TryFrom`/`FromStr` and
//! returns a `Result`. Building from a `char` cannot fail, so `new` takes a
//! `char` directly and returns `Self`. The signature tells you which is
//! which; no runtime assertion needed.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::{BufferError, BufferResult};

/// Marker emitted before a bold character.
pub const BOLD_MARKER: char = '*';
/// Marker emitted before an italic character.
pub const ITALIC_MARKER: char = '/';
/// Marker emitted before an underlined character.
pub const UNDERLINE_MARKER: char = '_';

/// A single character with its style flags.
///
/// The character value is fixed at construction; the style flags are plain
/// public fields and stay mutable after the character has been stored in a
/// buffer. Rendering prefixes the value with the markers of its active
/// styles, always in the order bold, italic, underline.
///
/// Markers are a display convention, not a parse format. Nothing escapes
/// marker glyphs appearing in the text itself, so rendering is lossy for
/// text that contains `*`, `/`, or `_`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StyledChar {
    /// The character value (immutable after construction)
    value: char,

    /// Render with the bold marker
    pub bold: bool,

    /// Render with the italic marker
    pub italic: bool,

    /// Render with the underline marker
    pub underline: bool,
}

impl StyledChar {
    /// Creates an unstyled character.
    ///
    /// # Example
    /// ```
    /// use vellum_buffer::StyledChar;
    ///
    /// let ch = StyledChar::new('a');
    /// assert_eq!(ch.render(), "a");
    /// ```
    pub fn new(value: char) -> Self {
        Self {
            value,
            bold: false,
            italic: false,
            underline: false,
        }
    }

    /// Returns the character value.
    #[inline]
    pub fn value(&self) -> char {
        self.value
    }

    /// Sets the bold flag, builder style.
    pub fn with_bold(mut self, bold: bool) -> Self {
        self.bold = bold;
        self
    }

    /// Sets the italic flag, builder style.
    pub fn with_italic(mut self, italic: bool) -> Self {
        self.italic = italic;
        self
    }

    /// Sets the underline flag, builder style.
    pub fn with_underline(mut self, underline: bool) -> Self {
        self.underline = underline;
        self
    }

    /// Overwrites all three style flags in place.
    ///
    /// This is the supported path for restyling a character that already
    /// lives in a buffer; the flags are also public fields for callers that
    /// only want to flip one of them.
    pub fn set_style(&mut self, bold: bool, italic: bool, underline: bool) {
        self.bold = bold;
        self.italic = italic;
        self.underline = underline;
    }

    /// Returns true if no style flag is set.
    pub fn is_plain(&self) -> bool {
        !self.bold && !self.italic && !self.underline
    }

    /// Renders the character with its style markers.
    pub fn render(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for StyledChar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use fmt::Write;
        if self.bold {
            f.write_char(BOLD_MARKER)?;
        }
        if self.italic {
            f.write_char(ITALIC_MARKER)?;
        }
        if self.underline {
            f.write_char(UNDERLINE_MARKER)?;
        }
        f.write_char(self.value)
    }
}

impl From<char> for StyledChar {
    fn from(value: char) -> Self {
        Self::new(value)
    }
}

impl TryFrom<&str> for StyledChar {
    type Error = BufferError;

    /// Fails unless the string is exactly one character long.
    fn try_from(s: &str) -> BufferResult<Self> {
        let mut chars = s.chars();
        match (chars.next(), chars.next()) {
            (Some(value), None) => Ok(Self::new(value)),
            _ => Err(BufferError::InvalidLength {
                actual: s.chars().count(),
            }),
        }
    }
}

impl FromStr for StyledChar {
    type Err = BufferError;

    fn from_str(s: &str) -> BufferResult<Self> {
        Self::try_from(s)
    }
}

/// Insert argument accepted by an edit session: either a bare character or
/// an already styled one.
///
/// ## Learning: Enums over Duck Typing
///
/// "A bare character or a styled one" is a closed choice, so it is a tagged
/// union rather than a runtime probe of the argument. The session normalizes
/// it once at its boundary; everything past that point deals in `StyledChar`
/// only.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CharInput {
    /// A raw character, styled with all flags off on insertion
    Raw(char),
    /// A character carrying explicit style flags
    Styled(StyledChar),
}

impl CharInput {
    /// Normalizes to a `StyledChar`.
    pub fn into_styled(self) -> StyledChar {
        match self {
            CharInput::Raw(value) => StyledChar::new(value),
            CharInput::Styled(ch) => ch,
        }
    }
}

impl From<char> for CharInput {
    fn from(value: char) -> Self {
        CharInput::Raw(value)
    }
}

impl From<StyledChar> for CharInput {
    fn from(ch: StyledChar) -> Self {
        CharInput::Styled(ch)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_render_is_value_only() {
        for value in ['a', 'Z', '\n', '7'] {
            assert_eq!(StyledChar::new(value).render(), value.to_string());
        }
    }

    #[test]
    fn test_marker_order_is_fixed() {
        // Bold, then italic, then underline, regardless of how the flags
        // were set.
        let all = StyledChar::new('x')
            .with_underline(true)
            .with_italic(true)
            .with_bold(true);
        assert_eq!(all.render(), "*/_x");

        let bold_underline = StyledChar::new('x').with_underline(true).with_bold(true);
        assert_eq!(bold_underline.render(), "*_x");

        let italic = StyledChar::new('x').with_italic(true);
        assert_eq!(italic.render(), "/x");
    }

    #[test]
    fn test_try_from_rejects_wrong_length() {
        assert!(matches!(
            StyledChar::try_from(""),
            Err(BufferError::InvalidLength { actual: 0 })
        ));
        assert!(matches!(
            StyledChar::try_from("ab"),
            Err(BufferError::InvalidLength { actual: 2 })
        ));

        let ch = StyledChar::try_from("q").unwrap();
        assert_eq!(ch.value(), 'q');
        assert!(ch.is_plain());
    }

    #[test]
    fn test_from_str_accepts_multibyte_char() {
        let ch: StyledChar = "é".parse().unwrap();
        assert_eq!(ch.value(), 'é');
    }

    #[test]
    fn test_set_style_in_place() {
        let mut ch = StyledChar::new('a');
        ch.set_style(false, true, true);
        assert_eq!(ch.render(), "/_a");

        ch.underline = false;
        assert_eq!(ch.render(), "/a");
    }

    #[test]
    fn test_char_input_normalization() {
        let raw = CharInput::from('h').into_styled();
        assert!(raw.is_plain());
        assert_eq!(raw.value(), 'h');

        let styled = CharInput::from(StyledChar::new('h').with_bold(true)).into_styled();
        assert!(styled.bold);
    }
}
