use crate::errors::AppError;
use image::{ImageFormat, Luma};
use qrcode::QrCode;
use std::io::Cursor;

/// Encodes `url` as a QR code and returns the PNG bytes.
pub fn encode_png(url: &str) -> Result<Vec<u8>, AppError> {
    let code = QrCode::new(url.as_bytes()).map_err(AppError::internal)?;
    let img = code.render::<Luma<u8>>().min_dimensions(240, 240).build();

    let mut buffer = Cursor::new(Vec::new());
    img.write_to(&mut buffer, ImageFormat::Png)
        .map_err(AppError::internal)?;
    Ok(buffer.into_inner())
}

#[cfg(test)]
mod tests {
    use super::*;

    const PNG_MAGIC: [u8; 8] = [0x89, b'P', b'N', b'G', b'\r', b'\n', 0x1a, b'\n'];

    #[test]
    fn produces_png_bytes() {
        let bytes = encode_png("https://example.com").expect("encode");
        assert!(bytes.len() > PNG_MAGIC.len());
        assert_eq!(&bytes[..8], &PNG_MAGIC);
    }

    #[test]
    fn rejects_payload_over_qr_capacity() {
        let too_long = "x".repeat(8000);
        assert!(encode_png(&too_long).is_err());
    }
}
