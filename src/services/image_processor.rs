// src/services/image_processor.rs
use crate::errors::StudioError;
use image::{GenericImageView, ImageFormat as ImgFormat};

/// Longest edge accepted for an uploaded override.
const MAX_UPLOAD_EDGE: u32 = 4096;
/// Longest edge of a stored override.
pub const OVERRIDE_EDGE: u32 = 2048;

pub struct ImageProcessor;

impl ImageProcessor {
    pub fn new() -> Self {
        Self
    }

    pub fn validate_image(&self, data: &[u8]) -> Result<(u32, u32), StudioError> {
        let img = image::load_from_memory(data)
            .map_err(|e| StudioError::ImageProcessing(format!("Invalid image format: {}", e)))?;

        let (width, height) = img.dimensions();

        if width > MAX_UPLOAD_EDGE || height > MAX_UPLOAD_EDGE {
            return Err(StudioError::ImageProcessing(format!(
                "Image dimensions exceed {0}x{0}",
                MAX_UPLOAD_EDGE
            )));
        }

        Ok((width, height))
    }

    /// Re-encodes as PNG, shrinking so the longest edge fits `max_edge`.
    pub fn prepare_override(&self, data: &[u8], max_edge: u32) -> Result<Vec<u8>, StudioError> {
        let img = image::load_from_memory(data)
            .map_err(|e| StudioError::ImageProcessing(format!("Failed to load image: {}", e)))?;

        let (width, height) = img.dimensions();
        let img = if width > max_edge || height > max_edge {
            let ratio = max_edge as f32 / width.max(height) as f32;
            let new_width = ((width as f32 * ratio) as u32).max(1);
            let new_height = ((height as f32 * ratio) as u32).max(1);
            img.resize(new_width, new_height, image::imageops::FilterType::Lanczos3)
        } else {
            img
        };

        let mut output = Vec::new();
        img.write_to(&mut std::io::Cursor::new(&mut output), ImgFormat::Png)
            .map_err(|e| {
                StudioError::ImageProcessing(format!("Failed to encode override image: {}", e))
            })?;

        Ok(output)
    }
}
