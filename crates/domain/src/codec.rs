//! Text codecs used by test scripts.
//!
//! Pure functions: structured-token payload extraction and slug generation.

use std::sync::LazyLock;

use base64::Engine;
use base64::alphabet;
use base64::engine::{DecodePaddingMode, GeneralPurpose, GeneralPurposeConfig};
use regex::Regex;
use unicode_normalization::UnicodeNormalization;

use crate::error::DecodeError;

/// URL-safe alphabet that accepts payloads with or without `=` padding.
const TOKEN_ENGINE: GeneralPurpose = GeneralPurpose::new(
    &alphabet::URL_SAFE,
    GeneralPurposeConfig::new().with_decode_padding_mode(DecodePaddingMode::Indifferent),
);

#[allow(clippy::expect_used)]
static WHITESPACE_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("valid regex"));

#[allow(clippy::expect_used)]
static NON_WORD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^A-Za-z0-9_\-]+").expect("valid regex"));

#[allow(clippy::expect_used)]
static HYPHEN_RUN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"-{2,}").expect("valid regex"));

/// Decodes the JSON payload of a structured token such as a JWT.
///
/// The token is split on `.`, the second segment is base64url-decoded and
/// parsed as JSON. The signature is not verified.
///
/// # Errors
///
/// Returns a [`DecodeError`] if the payload segment is absent, is not valid
/// base64, is not UTF-8 or is not JSON.
pub fn decode_structured_token(token: &str) -> Result<serde_json::Value, DecodeError> {
    let segment = token
        .split('.')
        .nth(1)
        .filter(|s| !s.is_empty())
        .ok_or(DecodeError::MissingPayload)?;

    let bytes = TOKEN_ENGINE
        .decode(segment)
        .map_err(|e| DecodeError::InvalidBase64(e.to_string()))?;

    let text = String::from_utf8(bytes).map_err(|e| DecodeError::InvalidUtf8(e.to_string()))?;

    serde_json::from_str(&text).map_err(|e| DecodeError::InvalidJson(e.to_string()))
}

/// Generates a key-safe slug from arbitrary text.
///
/// Accents are stripped after canonical decomposition, the text is
/// lowercased and trimmed, underscores and whitespace runs become hyphens,
/// anything outside `[a-z0-9_-]` is removed and hyphen runs are collapsed.
/// The result never starts or ends with a hyphen.
#[must_use]
pub fn slugify(text: &str) -> String {
    let stripped: String = text
        .nfd()
        .filter(|c| !('\u{0300}'..='\u{036f}').contains(c))
        .collect();

    let lowered = stripped.to_lowercase();
    let hyphenated = lowered.trim().replace('_', "-");
    let hyphenated = WHITESPACE_RUN.replace_all(&hyphenated, "-");
    let cleaned = NON_WORD.replace_all(&hyphenated, "");
    let collapsed = HYPHEN_RUN.replace_all(&cleaned, "-");

    collapsed.trim_matches('-').to_string()
}
