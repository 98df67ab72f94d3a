//! YAML decoding backends.
//!
//! Every backend produces the same [`DocumentValue`] tree. [`default_decoder`]
//! picks the backend at build time: serde-saphyr with the `accelerated`
//! feature, serde_yaml otherwise.

use crate::error::DecodeError;

/// Generic value tree shared by the decode and encode steps. Mappings keep
/// document order and may be keyed by any YAML value.
pub type DocumentValue = serde_yaml::Value;

pub trait Decoder {
    /// Human readable backend name, used in diagnostics.
    fn name(&self) -> &'static str;

    /// Decodes exactly one YAML document. An empty document is null.
    fn decode(&self, text: &str) -> Result<DocumentValue, DecodeError>;
}

/// Portable backend built on serde_yaml.
#[derive(Debug, Default, Clone, Copy)]
pub struct PortableDecoder;

impl Decoder for PortableDecoder {
    fn name(&self) -> &'static str {
        "serde_yaml"
    }

    fn decode(&self, text: &str) -> Result<DocumentValue, DecodeError> {
        serde_yaml::from_str::<Option<DocumentValue>>(text)
            .map(Option::unwrap_or_default)
            .map_err(|e| {
                let location = e.location();
                DecodeError {
                    message: e.to_string(),
                    line: location.as_ref().map(|l| l.line() as u64),
                    column: location.as_ref().map(|l| l.column() as u64),
                }
            })
    }
}

/// Faster backend built on serde-saphyr.
///
/// Documents using forms that serde-saphyr types differently from serde_yaml
/// (see [`needs_portable`]) are handed to [`PortableDecoder`], so both
/// backends always produce the same tree.
#[cfg(feature = "accelerated")]
#[derive(Debug, Default, Clone, Copy)]
pub struct AcceleratedDecoder;

#[cfg(feature = "accelerated")]
impl Decoder for AcceleratedDecoder {
    fn name(&self) -> &'static str {
        "serde-saphyr"
    }

    fn decode(&self, text: &str) -> Result<DocumentValue, DecodeError> {
        if needs_portable(text) {
            tracing::debug!("document uses serde_yaml-specific scalars, decoding with serde_yaml");
            return PortableDecoder.decode(text);
        }
        let options = serde_saphyr::Options {
            strict_booleans: true,
            ..serde_saphyr::Options::default()
        };
        serde_saphyr::from_str_with_options::<Option<DocumentValue>>(text, options)
            .map(Option::unwrap_or_default)
            .map_err(|e| {
                let location = e.location();
                DecodeError {
                    message: e.to_string(),
                    line: location.as_ref().map(|l| l.line()),
                    column: location.as_ref().map(|l| l.column()),
                }
            })
    }
}

/// Conservative lexical screen for scalars serde-saphyr resolves differently:
/// digit separators (`1_000`), leading zeros (`007`), non-finite floats
/// (`.inf`, `.nan`) and tags (`!custom 5`). False positives only cost speed.
#[cfg(feature = "accelerated")]
fn needs_portable(text: &str) -> bool {
    let lower = text.to_ascii_lowercase();
    if lower.contains(".inf") || lower.contains(".nan") {
        return true;
    }
    let bytes = text.as_bytes();
    bytes.iter().enumerate().any(|(i, &b)| {
        let prev = i.checked_sub(1).map(|p| bytes[p]);
        let next = bytes.get(i + 1).copied();
        match b {
            b'_' => {
                prev.is_some_and(|p| p.is_ascii_digit()) && next.is_some_and(|n| n.is_ascii_digit())
            }
            b'0' => {
                !prev.is_some_and(|p| p.is_ascii_digit() || p == b'.')
                    && next.is_some_and(|n| n.is_ascii_digit())
            }
            b'!' => {
                prev.map_or(true, |p| matches!(p, b' ' | b'\t' | b'\n' | b'[' | b'{' | b','))
                    && next.is_some_and(|n| !n.is_ascii_whitespace())
            }
            _ => false,
        }
    })
}

#[cfg(feature = "accelerated")]
pub fn default_decoder() -> &'static dyn Decoder {
    &AcceleratedDecoder
}

#[cfg(not(feature = "accelerated"))]
pub fn default_decoder() -> &'static dyn Decoder {
    &PortableDecoder
}
