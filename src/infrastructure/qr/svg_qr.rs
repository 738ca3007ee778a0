//! SVG QR renderer backed by the `qirust` encoder.

use super::service::{QrError, QrService};
use base64::Engine as _;
use qirust::qrcode::{EncodeTextOptions, QrCode, QrCodeEcc, Version};

/// Quiet-zone width in modules around the symbol.
const BORDER: i32 = 4;

/// Renders short URLs as base64-encoded SVG QR codes.
///
/// Low error correction keeps the symbol small; short URLs carry no payload
/// worth the redundancy of higher levels.
pub struct SvgQrGenerator;

impl SvgQrGenerator {
    pub fn new() -> Self {
        Self
    }
}

impl Default for SvgQrGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl QrService for SvgQrGenerator {
    fn generate(&self, url: &str) -> Result<String, QrError> {
        let mut tempbuffer = vec![0u8; Version::MAX.buffer_len()];
        let mut outbuffer = vec![0u8; Version::MAX.buffer_len()];
        let qr = QrCode::encode_text(
            url,
            &mut tempbuffer,
            &mut outbuffer,
            EncodeTextOptions {
                ecl: QrCodeEcc::Low,
                minversion: Version::MIN,
                maxversion: Version::MAX,
                mask: None,
                boostecl: true,
            },
        )
        .map_err(|e| QrError::EncodeError(e.to_string()))?;

        let svg = to_svg(&qr, BORDER);

        Ok(base64::engine::general_purpose::STANDARD.encode(svg))
    }
}

/// Renders the QR symbol as a black-on-white SVG document.
///
/// One `h1v1h-1z` path segment per dark module; the viewBox includes the
/// quiet zone on all four sides.
fn to_svg(qr: &QrCode, border: i32) -> String {
    let size = qr.size();
    let dimension = size + border * 2;

    let mut path = String::new();
    for y in 0..size {
        for x in 0..size {
            if qr.get_module(x, y) {
                path.push_str(&format!("M{},{}h1v1h-1z", x + border, y + border));
            }
        }
    }

    format!(
        concat!(
            r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 {dim} {dim}" stroke="none">"#,
            r##"<rect width="100%" height="100%" fill="#ffffff"/>"##,
            r##"<path d="{path}" fill="#000000"/>"##,
            "</svg>"
        ),
        dim = dimension,
        path = path,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_returns_base64_svg() {
        let generator = SvgQrGenerator::new();

        let artifact = generator.generate("https://example.com/abc123").unwrap();

        let decoded = base64::engine::general_purpose::STANDARD
            .decode(artifact)
            .expect("artifact must be valid base64");
        let svg = String::from_utf8(decoded).expect("artifact must decode to UTF-8");

        assert!(svg.starts_with("<svg"));
        assert!(svg.ends_with("</svg>"));
        assert!(svg.contains("viewBox"));
    }

    #[test]
    fn test_generate_is_deterministic() {
        let generator = SvgQrGenerator::new();

        let a = generator.generate("https://example.com/abc123").unwrap();
        let b = generator.generate("https://example.com/abc123").unwrap();

        assert_eq!(a, b);
    }

    #[test]
    fn test_different_urls_produce_different_artifacts() {
        let generator = SvgQrGenerator::new();

        let a = generator.generate("https://example.com/aaa111").unwrap();
        let b = generator.generate("https://example.com/bbb222").unwrap();

        assert_ne!(a, b);
    }
}
