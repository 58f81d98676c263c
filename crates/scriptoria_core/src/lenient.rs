//! Serde helpers for fields generation models emit inconsistently.

use serde::{Deserialize, Deserializer};

#[derive(Deserialize)]
#[serde(untagged)]
enum Loose {
    Int(u64),
    Float(f64),
    Text(String),
    Other(serde::de::IgnoredAny),
}

/// Accept `"12"`, `12` or `12.0` as an optional string.
pub(crate) fn opt_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Loose>::deserialize(deserializer)?.and_then(|v| match v {
        Loose::Int(n) => Some(n.to_string()),
        Loose::Float(f) => Some(f.to_string()),
        Loose::Text(s) => Some(s),
        Loose::Other(_) => None,
    }))
}

/// First run of ASCII digits in `text`, e.g. 3 for `"Scene 3 of 10"`.
fn leading_number(text: &str) -> Option<u32> {
    let start = text.find(|c: char| c.is_ascii_digit())?;
    let digits = &text[start..];
    let end = digits
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(digits.len());
    digits[..end].parse().ok()
}

/// Accept `3`, `"3"` or `"Scene 3"` as a scene number.
///
/// Scene references are display-only, so anything without a usable number
/// (`null`, `"Climax"`, negative or out of range values) reads as 0 instead of
/// rejecting the document.
pub(crate) fn number<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    let parsed = match Option::<Loose>::deserialize(deserializer)? {
        Some(Loose::Int(n)) => u32::try_from(n).ok(),
        Some(Loose::Float(f)) if f >= 0.0 && f <= f64::from(u32::MAX) => Some(f as u32),
        Some(Loose::Text(s)) => leading_number(&s),
        Some(Loose::Float(_)) | Some(Loose::Other(_)) | None => None,
    };
    Ok(parsed.unwrap_or_default())
}

/// Sequence form of [`number`].
pub(crate) fn numbers<'de, D>(deserializer: D) -> Result<Vec<u32>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    struct Wrapped(#[serde(deserialize_with = "number")] u32);

    Ok(Vec::<Wrapped>::deserialize(deserializer)?
        .into_iter()
        .map(|w| w.0)
        .collect())
}
