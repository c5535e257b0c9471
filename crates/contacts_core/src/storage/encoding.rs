//! Text encodings accepted when reading a contacts file.
//!
//! UTF-8 is primary. When it fails, `FALLBACK_ENCODINGS` are tried in order.

use encoding_rs::{Encoding, UTF_16BE, UTF_16LE, UTF_8, WINDOWS_1251};
use std::fmt::{Display, Formatter};

/// Encodings tried after UTF-8 fails, in order.
pub const FALLBACK_ENCODINGS: [TextEncoding; 3] = [
    TextEncoding::Utf16,
    TextEncoding::Windows1251,
    TextEncoding::Latin1,
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextEncoding {
    Utf8,
    /// BOM-detected byte order, little-endian without a BOM.
    ///
    /// BOM-less UTF-16LE holding only ASCII is also valid UTF-8 (NUL bytes
    /// included), so such a file never reaches this fallback.
    Utf16,
    Windows1251,
    Latin1,
}

impl TextEncoding {
    pub fn label(self) -> &'static str {
        match self {
            Self::Utf8 => "utf-8",
            Self::Utf16 => "utf-16",
            Self::Windows1251 => "windows-1251",
            Self::Latin1 => "latin-1",
        }
    }

    /// Decodes `bytes` strictly; malformed input returns `None`.
    pub fn decode(self, bytes: &[u8]) -> Option<String> {
        match self {
            Self::Utf8 => {
                let body = bytes.strip_prefix(b"\xEF\xBB\xBF").unwrap_or(bytes);
                strict_decode(UTF_8, body)
            }
            Self::Utf16 => {
                let (encoding, bom_len) = match Encoding::for_bom(bytes) {
                    Some((encoding, bom_len)) if encoding == UTF_16BE => (UTF_16BE, bom_len),
                    Some((encoding, bom_len)) if encoding == UTF_16LE => (UTF_16LE, bom_len),
                    _ => (UTF_16LE, 0),
                };
                strict_decode(encoding, &bytes[bom_len..])
            }
            Self::Windows1251 => strict_decode(WINDOWS_1251, bytes),
            // ISO-8859-1 maps every byte to the code point of the same value.
            Self::Latin1 => Some(bytes.iter().copied().map(char::from).collect()),
        }
    }
}

impl Display for TextEncoding {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

fn strict_decode(encoding: &'static Encoding, bytes: &[u8]) -> Option<String> {
    encoding
        .decode_without_bom_handling_and_without_replacement(bytes)
        .map(|text| text.into_owned())
}
