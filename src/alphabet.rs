//! AlphabetMapper: the identity alphabet next to its shifted counterpart.
//!
//! Used only for display. The cipher never consults these tables; it
//! shifts arithmetically.

use serde::Serialize;

use crate::shift::{ShiftAmount, ALPHABET_LEN};

/// Identity alphabet `A..=Z`.
pub const UPPERCASE: [char; 26] = [
    'A', 'B', 'C', 'D', 'E', 'F', 'G', 'H', 'I', 'J', 'K', 'L', 'M', 'N', 'O', 'P', 'Q', 'R',
    'S', 'T', 'U', 'V', 'W', 'X', 'Y', 'Z',
];

/// Identity alphabet and the alphabet shifted forward by some amount.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AlphabetPair {
    pub original: [char; 26],
    pub shifted: [char; 26],
}

/// Builds the alphabet pair for `shift`.
///
/// `shifted[i] == original[(i + shift) % 26]`, always in the forward
/// direction regardless of encode/decode mode.
///
/// # Examples
///
/// ```
/// use caesarcrypt::{map_alphabet, ShiftAmount};
///
/// let pair = map_alphabet(ShiftAmount::new(1).unwrap());
/// assert_eq!(pair.shifted[0], 'B');
/// assert_eq!(pair.shifted[25], 'A');
/// ```
pub fn map_alphabet(shift: ShiftAmount) -> AlphabetPair {
    let offset = shift.get() as usize;
    let shifted = std::array::from_fn(|i| UPPERCASE[(i + offset) % ALPHABET_LEN as usize]);
    AlphabetPair {
        original: UPPERCASE,
        shifted,
    }
}

impl AlphabetPair {
    /// Returns the `(original, shifted)` rows as strings.
    pub fn rows(&self) -> (String, String) {
        (
            self.original.iter().collect(),
            self.shifted.iter().collect(),
        )
    }
}
