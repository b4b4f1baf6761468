//! Numeric channel fields
//!
//! Each field keeps a committed channel value (the truth) and the text being
//! typed (UI only). The two meet only at commit points.

use crate::color::{Channel, CHANNEL_MAX};
use thiserror::Error;
use tracing::debug;

/// Why a keystroke was rejected
///
/// These never reach the user beyond the character not appearing.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FieldInputError {
    /// Appending the digit would exceed 255
    #[error("'{0}' is out of range 0-255")]
    OutOfRange(String),

    /// Only ASCII digits are accepted
    #[error("'{0}' is not a digit")]
    NotADigit(char),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NumericField {
    channel: Channel,
    committed: u8,
    text: String,
}

impl NumericField {
    pub fn new(channel: Channel, value: u8) -> Self {
        Self {
            channel,
            committed: value,
            text: value.to_string(),
        }
    }

    pub fn channel(&self) -> Channel {
        self.channel
    }

    /// Last committed value
    pub fn committed(&self) -> u8 {
        self.committed
    }

    /// Text currently shown, possibly uncommitted and possibly empty
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Whether the shown text differs from the committed value
    pub fn is_dirty(&self) -> bool {
        self.text != self.committed.to_string()
    }

    /// Append a digit, collapsing leading zeros
    ///
    /// The text is left untouched when the result would exceed 255.
    pub fn push_digit(&mut self, c: char) -> Result<(), FieldInputError> {
        if !c.is_ascii_digit() {
            return Err(FieldInputError::NotADigit(c));
        }

        let mut candidate = self.text.clone();
        candidate.push(c);
        let collapsed = match candidate.trim_start_matches('0') {
            "" => "0".to_string(),
            digits => digits.to_string(),
        };

        // At most four digits reach here, so u16 cannot overflow
        let value: u16 = collapsed
            .parse()
            .map_err(|_| FieldInputError::OutOfRange(collapsed.clone()))?;
        if value > CHANNEL_MAX as u16 {
            return Err(FieldInputError::OutOfRange(collapsed));
        }

        self.text = collapsed;
        Ok(())
    }

    /// Remove the last character
    pub fn backspace(&mut self) {
        self.text.pop();
    }

    /// Finalize the text into the committed value
    ///
    /// Empty text commits as 0. The text is normalized to the committed
    /// value's decimal form.
    pub fn commit(&mut self) -> u8 {
        let value = if self.text.is_empty() {
            debug!(channel = %self.channel, "Empty field commits as 0");
            0
        } else {
            self.text
                .parse::<u16>()
                .map(|v| v.min(CHANNEL_MAX as u16) as u8)
                .unwrap_or(0)
        };

        self.committed = value;
        self.text = value.to_string();
        value
    }

    /// Throw away in-progress text
    pub fn revert(&mut self) {
        self.text = self.committed.to_string();
    }

    /// Re-derive from the authoritative color
    pub fn sync(&mut self, value: u8) {
        self.committed = value;
        self.text = value.to_string();
    }
}
