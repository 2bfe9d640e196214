//! ShiftAmount: the validated offset applied to every letter.
//!
//! A shift is an integer in the closed range [1, 25]. Zero and 26 are
//! full-cycle no-ops and are rejected along with everything else outside
//! the range.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CaesarError;

/// Number of letters in the Latin alphabet.
pub const ALPHABET_LEN: i64 = 26;

/// Fixed letter offset in the range [1, 25].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "i64")]
pub struct ShiftAmount(u8);

impl ShiftAmount {
    /// Smallest accepted shift.
    pub const MIN: ShiftAmount = ShiftAmount(1);

    /// Largest accepted shift.
    pub const MAX: ShiftAmount = ShiftAmount(25);

    /// Shift offered when no other value is known.
    pub const DEFAULT: ShiftAmount = ShiftAmount(5);

    /// Creates a shift, rejecting values outside [1, 25].
    ///
    /// # Errors
    /// Returns [`CaesarError::ShiftOutOfRange`] carrying the rejected value.
    ///
    /// # Examples
    ///
    /// ```
    /// use caesarcrypt::ShiftAmount;
    ///
    /// assert_eq!(ShiftAmount::new(3).unwrap().get(), 3);
    /// assert!(ShiftAmount::new(26).is_err());
    /// ```
    pub fn new(value: i64) -> Result<Self, CaesarError> {
        if (Self::MIN.get()..=Self::MAX.get()).contains(&value) {
            Ok(ShiftAmount(value as u8))
        } else {
            Err(CaesarError::ShiftOutOfRange(value))
        }
    }

    /// Returns the shift as a plain integer.
    pub fn get(self) -> i64 {
        i64::from(self.0)
    }
}

impl Default for ShiftAmount {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl TryFrom<i64> for ShiftAmount {
    type Error = CaesarError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        ShiftAmount::new(value)
    }
}

impl From<ShiftAmount> for i64 {
    fn from(shift: ShiftAmount) -> Self {
        shift.get()
    }
}

impl FromStr for ShiftAmount {
    type Err = CaesarError;

    /// Parses then range-checks. A non-integer yields
    /// [`CaesarError::InvalidShift`]; an integer outside [1, 25] yields
    /// [`CaesarError::ShiftOutOfRange`].
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value: i64 = s
            .trim()
            .parse()
            .map_err(|_| CaesarError::InvalidShift(s.to_string()))?;
        ShiftAmount::new(value)
    }
}

impl fmt::Display for ShiftAmount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
