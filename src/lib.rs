//! Caesar shift cipher over the 26-letter Latin alphabet.
//!
//! Each ASCII letter moves a fixed number of places along its alphabet,
//! keeping its case; every other character passes through unchanged.
//! The crate also builds the shifted alphabet used to visualize a shift
//! and provides the validation boundary and HTTP front end around them.
//!
//! # Architecture
//!
//! ```text
//! ShiftAmount  (validated offset in [1, 25])
//!     ↓
//! validate     (parse → range → empty text)
//!     ↓
//! transform    (arithmetic shift, floored modulo)      map_alphabet (display only)
//!     ↓
//! server       (axum routes, index page, LastShift)
//! ```
//!
//! # Examples
//!
//! Encode and decode a message:
//!
//! ```
//! use caesarcrypt::{transform, Direction, ShiftAmount};
//!
//! let shift = ShiftAmount::new(5).unwrap();
//! let secret = transform("Attack at Dawn!", shift, Direction::Encode);
//! assert_eq!(secret, "Fyyfhp fy Ifbs!");
//! assert_eq!(transform(&secret, shift, Direction::Decode), "Attack at Dawn!");
//! ```
//!
//! Validate untrusted input first:
//!
//! ```
//! use caesarcrypt::{validate, CaesarError, ShiftAmount, ShiftParam};
//!
//! let err = validate("hi", Some(&ShiftParam::from("26")), ShiftAmount::DEFAULT).unwrap_err();
//! assert_eq!(err, CaesarError::ShiftOutOfRange(26));
//! ```

#![deny(clippy::all)]

pub mod alphabet;
pub mod cipher;
pub mod error;
pub mod server;
pub mod session;
pub mod shift;
pub mod validation;

pub use alphabet::{map_alphabet, AlphabetPair};
pub use cipher::{transform, CharacterClass, Direction};
pub use error::CaesarError;
pub use session::LastShift;
pub use shift::ShiftAmount;
pub use validation::{validate, CipherRequest, ShiftParam};
