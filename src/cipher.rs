//! CaesarTransform: arithmetic letter shifting.
//!
//! Each ASCII letter is moved `shift` places along its own case's alphabet,
//! wrapping at the end. Everything else, including non-ASCII code points,
//! passes through untouched. Decoding is encoding with the shift negated.
//!
//! Offsets are reduced with [`i64::rem_euclid`]; a negative decode offset
//! lands in [0, 26) instead of going below the alphabet.

use serde::{Deserialize, Serialize};

use crate::shift::{ShiftAmount, ALPHABET_LEN};

/// Transform direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    /// Shift letters forward.
    Encode,
    /// Shift letters backward.
    Decode,
}

impl Direction {
    /// Signed offset this direction applies for `shift`.
    pub fn effective_shift(self, shift: i64) -> i64 {
        match self {
            Direction::Encode => shift,
            Direction::Decode => -shift,
        }
    }
}

/// Classification of a single input character.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CharacterClass {
    UppercaseLetter,
    LowercaseLetter,
    Other,
}

impl CharacterClass {
    /// Classifies `c`. Only ASCII letters count as letters.
    pub fn of(c: char) -> Self {
        if c.is_ascii_uppercase() {
            CharacterClass::UppercaseLetter
        } else if c.is_ascii_lowercase() {
            CharacterClass::LowercaseLetter
        } else {
            CharacterClass::Other
        }
    }

    fn base(self) -> Option<u8> {
        match self {
            CharacterClass::UppercaseLetter => Some(b'A'),
            CharacterClass::LowercaseLetter => Some(b'a'),
            CharacterClass::Other => None,
        }
    }
}

/// Shifts a single character by a signed offset.
///
/// Accepts any integer offset; values outside [1, 25] wrap modulo 26.
///
/// # Examples
///
/// ```
/// use caesarcrypt::cipher::shift_char;
///
/// assert_eq!(shift_char('z', 1), 'a');
/// assert_eq!(shift_char('A', -1), 'Z');
/// assert_eq!(shift_char('!', 7), '!');
/// ```
pub fn shift_char(c: char, offset: i64) -> char {
    match CharacterClass::of(c).base() {
        Some(base) => {
            let index = i64::from(c as u8 - base);
            let shifted = (index + offset.rem_euclid(ALPHABET_LEN)) % ALPHABET_LEN;
            char::from(base + shifted as u8)
        }
        None => c,
    }
}

/// Transforms `text` with an unchecked integer shift.
///
/// Correct for any integer, including negative values and values above
/// 25. Callers receiving untrusted input should go through
/// [`validate`](crate::validation::validate) and [`transform`] instead.
pub fn transform_raw(text: &str, shift: i64, direction: Direction) -> String {
    let offset = direction.effective_shift(shift.rem_euclid(ALPHABET_LEN));
    text.chars().map(|c| shift_char(c, offset)).collect()
}

/// Encodes or decodes `text` with a validated shift.
///
/// The output has the same number of characters as the input and every
/// position keeps its [`CharacterClass`].
///
/// # Examples
///
/// ```
/// use caesarcrypt::{transform, Direction, ShiftAmount};
///
/// let shift = ShiftAmount::new(3).unwrap();
/// assert_eq!(transform("HELLO", shift, Direction::Encode), "KHOOR");
/// assert_eq!(transform("KHOOR", shift, Direction::Decode), "HELLO");
/// ```
pub fn transform(text: &str, shift: ShiftAmount, direction: Direction) -> String {
    transform_raw(text, shift.get(), direction)
}
