//! Check-in QR codes for bookings
//!
//! The code encodes `booking:<uuid>`; the front desk scanner resolves it to
//! the booking's folio.

use base64::{engine::general_purpose::STANDARD, Engine as _};
use image::{DynamicImage, ImageFormat, Luma};
use qrcode::QrCode;
use std::io::Cursor;
use uuid::Uuid;

use crate::error::{AppError, Result};

/// Payload encoded in a booking's QR code
pub fn booking_qr_payload(booking_id: Uuid) -> String {
    format!("booking:{}", booking_id)
}

/// Render a booking's QR code as PNG bytes
pub fn booking_qr_png(booking_id: Uuid) -> Result<Vec<u8>> {
    let code = QrCode::new(booking_qr_payload(booking_id).as_bytes())
        .map_err(|e| AppError::Internal(format!("QR encoding failed: {}", e)))?;

    let image = code
        .render::<Luma<u8>>()
        .min_dimensions(200, 200)
        .build();

    let mut png = Vec::new();
    DynamicImage::ImageLuma8(image)
        .write_to(&mut Cursor::new(&mut png), ImageFormat::Png)
        .map_err(|e| AppError::Internal(format!("QR image encoding failed: {}", e)))?;

    Ok(png)
}

/// Render a booking's QR code as a `data:` URI for embedding in HTML
pub fn booking_qr_data_uri(booking_id: Uuid) -> Result<String> {
    let png = booking_qr_png(booking_id)?;
    Ok(format!("data:image/png;base64,{}", STANDARD.encode(png)))
}
