/// Decoded RGBA textures, one `u32` per texel (byte order R, G, B, A on
/// little-endian upload, which is what the backends expect).

use crate::error::{Error, Result};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RgbaTexture {
    width: u32,
    height: u32,
    pixels: Vec<u32>,
}

impl RgbaTexture {
    /// Wrap decoded pixel data, checking the dimensions against it.
    pub fn new(width: u32, height: u32, pixels: Vec<u32>) -> Result<Self> {
        let expected = width as usize * height as usize;
        if expected == 0 {
            return Err(Error::InvalidTexture(format!(
                "zero-area texture ({width}x{height})"
            )));
        }
        if pixels.len() != expected {
            return Err(Error::InvalidTexture(format!(
                "{width}x{height} texture needs {expected} texels, got {}",
                pixels.len()
            )));
        }
        Ok(Self {
            width,
            height,
            pixels,
        })
    }

    /// Procedural fallback texture: a two-color checkerboard.
    pub fn checkerboard(width: u32, height: u32, cell: u32, light: u32, dark: u32) -> Result<Self> {
        if cell == 0 {
            return Err(Error::InvalidTexture("zero checkerboard cell size".to_string()));
        }
        let mut pixels = Vec::with_capacity(width as usize * height as usize);
        for y in 0..height {
            for x in 0..width {
                let even = ((x / cell) + (y / cell)) % 2 == 0;
                pixels.push(if even { light } else { dark });
            }
        }
        Self::new(width, height, pixels)
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn pixels(&self) -> &[u32] {
        &self.pixels
    }

    /// The texel buffer as bytes for upload.
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.pixels)
    }
}

#[cfg(test)]
#[path = "texture_tests.rs"]
mod tests;
