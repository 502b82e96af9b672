//! Field-level coercion rules shared by both supplier integrations.
//!
//! Upstream catalogs are loose about types: prices arrive as strings or
//! numbers, ids as strings or numbers, image lists with gaps and repeats.
//! These helpers absorb that without ever failing a whole product over one
//! malformed field.

use rust_decimal::Decimal;
use serde_json::Value;

/// Gallery cap beyond the primary image.
pub(crate) const MAX_ADDITIONAL_IMAGES: usize = 4;

/// Tolerant price coercion: JSON numbers and numeric strings become a
/// `Decimal`; anything missing, unparsable, or negative yields zero. Never
/// errors — the documented exception to "no error is silently swallowed".
pub(crate) fn lenient_price(value: &Value) -> Decimal {
    let parsed = match value {
        Value::Number(n) => n.to_string().parse::<Decimal>().ok(),
        Value::String(s) => s.trim().parse::<Decimal>().ok(),
        _ => None,
    };
    parsed
        .filter(|d| !d.is_sign_negative())
        .unwrap_or(Decimal::ZERO)
}

/// Identifier coercion: numbers and non-blank strings become their string
/// form, everything else is absent.
pub(crate) fn lenient_id(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => {
            let trimmed = s.trim();
            (!trimmed.is_empty()).then(|| trimmed.to_owned())
        }
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

/// Builds the gallery that accompanies the primary image: keeps upstream
/// order, drops blank entries, deduplicates, never repeats the primary, and
/// caps at [`MAX_ADDITIONAL_IMAGES`]. Missing entries are dropped, not
/// replaced by placeholders.
pub(crate) fn additional_images(primary: Option<&str>, raw: &[String]) -> Vec<String> {
    let mut gallery: Vec<String> = Vec::new();
    for url in raw {
        let url = url.trim();
        if url.is_empty() {
            continue;
        }
        if primary == Some(url) {
            continue;
        }
        if gallery.iter().any(|kept| kept == url) {
            continue;
        }
        gallery.push(url.to_owned());
        if gallery.len() == MAX_ADDITIONAL_IMAGES {
            break;
        }
    }
    gallery
}

/// Treat empty or whitespace-only strings as absent.
pub(crate) fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|s| !s.trim().is_empty())
}
