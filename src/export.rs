//! Image export: grayscale conversion and BMP encoding.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use log::debug;

use crate::basics::round_half_up;
use crate::error::ExportError;
use crate::rendering_buffer::RenderingBuffer;

const FILE_HEADER_SIZE: u32 = 14;
const INFO_HEADER_SIZE: u32 = 40;

// ============================================================================
// Grayscale
// ============================================================================

/// Convert to opaque grayscale in place.
///
/// Each pixel is composited over white by its alpha, then reduced with the
/// Rec. 601 luma weights. Transparent pixels become white.
pub fn to_grayscale(buf: &mut RenderingBuffer) {
    for px in buf.data_mut().chunks_exact_mut(4) {
        let a = px[3] as f64 / 255.0;
        let over_white = |c: u8| c as f64 * a + 255.0 * (1.0 - a);
        let (r, g, b) = (over_white(px[0]), over_white(px[1]), over_white(px[2]));
        let gray = round_half_up(0.299 * r + 0.587 * g + 0.114 * b).clamp(0.0, 255.0) as u8;
        px[0] = gray;
        px[1] = gray;
        px[2] = gray;
        px[3] = 255;
    }
}

// ============================================================================
// BMP (32-bit BGRA, top-down)
// ============================================================================

/// Encode as a 32-bit top-down BMP with alpha.
pub fn encode_bmp(buf: &RenderingBuffer) -> Vec<u8> {
    let w = buf.width();
    let h = buf.height();
    let image_size = w * 4 * h;
    let offset = FILE_HEADER_SIZE + INFO_HEADER_SIZE;
    let file_size = offset + image_size;

    let mut out = Vec::with_capacity(file_size as usize);

    // File header
    out.extend_from_slice(b"BM");
    out.extend_from_slice(&file_size.to_le_bytes());
    out.extend_from_slice(&[0u8; 4]); // reserved
    out.extend_from_slice(&offset.to_le_bytes());

    // BITMAPINFOHEADER
    out.extend_from_slice(&INFO_HEADER_SIZE.to_le_bytes());
    out.extend_from_slice(&(w as i32).to_le_bytes());
    out.extend_from_slice(&(-(h as i32)).to_le_bytes()); // negative height = top-down
    out.extend_from_slice(&1u16.to_le_bytes()); // planes
    out.extend_from_slice(&32u16.to_le_bytes()); // bits per pixel
    out.extend_from_slice(&0u32.to_le_bytes()); // BI_RGB
    out.extend_from_slice(&image_size.to_le_bytes());
    out.extend_from_slice(&[0u8; 8]); // pixels per meter
    out.extend_from_slice(&0u32.to_le_bytes()); // colors used
    out.extend_from_slice(&0u32.to_le_bytes()); // important colors

    // RGBA -> BGRA
    for px in buf.data().chunks_exact(4) {
        out.extend_from_slice(&[px[2], px[1], px[0], px[3]]);
    }
    out
}

/// Write `buf` to `path` as a BMP file.
pub fn save_bmp(path: &Path, buf: &RenderingBuffer) -> Result<(), ExportError> {
    let bytes = encode_bmp(buf);
    let mut f = File::create(path)?;
    f.write_all(&bytes)?;
    debug!("wrote {} ({} bytes)", path.display(), bytes.len());
    Ok(())
}
