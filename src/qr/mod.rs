//! QR encoding module
//!
//! Turns a payload string (always a URL here) into PNG bytes. Encoding is
//! delegated to the `qrcode` crate; this module only fixes the rendering
//! parameters and the in-memory PNG write.

use std::io::Cursor;

use image::{ImageFormat, Luma};
use qrcode::{EcLevel, QrCode};

/// Pixels per QR module
const MODULE_SIZE: u32 = 10;

/// QR encoding failure
#[derive(Debug)]
pub enum QrError {
    /// Payload rejected by the encoder (too long for any version)
    Encode(qrcode::types::QrError),
    /// PNG serialization failed
    Png(image::ImageError),
}

impl std::fmt::Display for QrError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Encode(e) => write!(f, "QR encoding failed: {e:?}"),
            Self::Png(e) => write!(f, "PNG write failed: {e}"),
        }
    }
}

impl std::error::Error for QrError {}

/// Encode `payload` as a QR symbol and return PNG bytes
///
/// Error correction level L and fixed module/border sizing; output is
/// deterministic for a given payload. Every call re-encodes, there is no
/// caching.
pub fn encode(payload: &str) -> Result<Vec<u8>, QrError> {
    let code = QrCode::with_error_correction_level(payload.as_bytes(), EcLevel::L)
        .map_err(QrError::Encode)?;

    // Renderer adds the standard 4-module quiet zone around the symbol
    let img = code
        .render::<Luma<u8>>()
        .quiet_zone(true)
        .module_dimensions(MODULE_SIZE, MODULE_SIZE)
        .build();

    let mut bytes = Vec::new();
    img.write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)
        .map_err(QrError::Png)?;
    Ok(bytes)
}

#[cfg(test)]
mod tests {
    use super::*;

    const PNG_MAGIC: [u8; 8] = [0x89, b'P', b'N', b'G', b'\r', b'\n', 0x1a, b'\n'];

    #[test]
    fn encode_produces_png() {
        let bytes = encode("http://127.0.0.1:8080/").unwrap();
        assert!(bytes.len() > PNG_MAGIC.len());
        assert_eq!(&bytes[..8], &PNG_MAGIC);
    }

    #[test]
    fn encode_is_deterministic() {
        let a = encode("https://example.com/content").unwrap();
        let b = encode("https://example.com/content").unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn decoded_symbol_carries_the_payload() {
        let payload = "http://127.0.0.1:8080/";
        let png = encode(payload).unwrap();

        let gray = image::load_from_memory(&png).unwrap().to_luma8();
        let mut prepared = rqrr::PreparedImage::prepare(gray);
        let grids = prepared.detect_grids();
        assert_eq!(grids.len(), 1);

        let (_meta, decoded) = grids[0].decode().unwrap();
        assert_eq!(decoded, payload);
    }

    #[test]
    fn different_payloads_differ() {
        let a = encode("https://example.com/a").unwrap();
        let b = encode("https://example.com/b").unwrap();
        assert_ne!(a, b);
    }
}
