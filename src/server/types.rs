//! JSON request and response shapes for the HTTP surface.

use serde::{Deserialize, Deserializer, Serialize};

use crate::alphabet::AlphabetPair;
use crate::cipher::Direction;
use crate::shift::ShiftAmount;
use crate::validation::ShiftParam;

/// Body of `POST /encrypt` and `POST /decrypt`.
///
/// `shift` is `None` only when the field is absent; an explicit `null`
/// is a present value and fails to parse.
#[derive(Debug, Default, Deserialize)]
pub struct CipherBody {
    #[serde(default)]
    pub text: String,
    #[serde(default, deserialize_with = "present_shift")]
    pub shift: Option<ShiftParam>,
}

fn present_shift<'de, D>(deserializer: D) -> Result<Option<ShiftParam>, D::Error>
where
    D: Deserializer<'de>,
{
    ShiftParam::deserialize(deserializer).map(Some)
}

/// Query string of `GET /api/encrypt` and `GET /api/decrypt`.
#[derive(Debug, Default, Deserialize)]
pub struct CipherQuery {
    #[serde(default)]
    pub text: String,
    pub shift: Option<String>,
}

impl CipherQuery {
    pub fn shift_param(&self) -> Option<ShiftParam> {
        self.shift.as_deref().map(ShiftParam::from)
    }
}

/// Input and output text, named after which side is ciphertext.
#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum CipherTexts {
    Encrypted {
        original_text: String,
        encrypted_text: String,
    },
    Decrypted {
        encrypted_text: String,
        decrypted_text: String,
    },
}

impl CipherTexts {
    pub fn new(direction: Direction, input: String, output: String) -> Self {
        match direction {
            Direction::Encode => CipherTexts::Encrypted {
                original_text: input,
                encrypted_text: output,
            },
            Direction::Decode => CipherTexts::Decrypted {
                encrypted_text: input,
                decrypted_text: output,
            },
        }
    }
}

/// Alphabet rows as they appear in page responses.
#[derive(Debug, Serialize)]
pub struct AlphabetView {
    pub original_alphabet: [char; 26],
    pub shifted_alphabet: [char; 26],
}

impl From<AlphabetPair> for AlphabetView {
    fn from(pair: AlphabetPair) -> Self {
        Self {
            original_alphabet: pair.original,
            shifted_alphabet: pair.shifted,
        }
    }
}

/// Successful cipher response.
///
/// Page endpoints include the alphabet rows; the plain API endpoints
/// leave them out.
#[derive(Debug, Serialize)]
pub struct CipherResponse {
    #[serde(flatten)]
    pub texts: CipherTexts,
    pub shift: ShiftAmount,
    #[serde(flatten)]
    pub alphabet: Option<AlphabetView>,
}

/// Body of `GET /health`.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
}
