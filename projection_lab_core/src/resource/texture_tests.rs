use crate::error::Error;

use super::*;

// ============================================================================
// Construction
// ============================================================================

#[test]
fn test_new_accepts_matching_dimensions() {
    let texture = RgbaTexture::new(2, 3, vec![0xff00ff00; 6]).unwrap();
    assert_eq!(texture.width(), 2);
    assert_eq!(texture.height(), 3);
    assert_eq!(texture.pixels().len(), 6);
}

#[test]
fn test_new_rejects_mismatched_pixel_count() {
    let result = RgbaTexture::new(4, 4, vec![0; 15]);
    assert!(matches!(result, Err(Error::InvalidTexture(_))));
}

#[test]
fn test_new_rejects_zero_area() {
    assert!(matches!(
        RgbaTexture::new(0, 8, Vec::new()),
        Err(Error::InvalidTexture(_))
    ));
}

// ============================================================================
// Checkerboard
// ============================================================================

#[test]
fn test_checkerboard_alternates_cells() {
    let light = 0xffffffff;
    let dark = 0xff202020;
    let texture = RgbaTexture::checkerboard(4, 4, 2, light, dark).unwrap();

    let at = |x: usize, y: usize| texture.pixels()[y * 4 + x];
    assert_eq!(at(0, 0), light);
    assert_eq!(at(1, 1), light);
    assert_eq!(at(2, 0), dark);
    assert_eq!(at(0, 2), dark);
    assert_eq!(at(2, 2), light);
}

#[test]
fn test_checkerboard_rejects_zero_cell() {
    assert!(matches!(
        RgbaTexture::checkerboard(4, 4, 0, 0, 0),
        Err(Error::InvalidTexture(_))
    ));
}

#[test]
fn test_as_bytes_is_four_bytes_per_texel() {
    let texture = RgbaTexture::new(2, 2, vec![0x01020304; 4]).unwrap();
    assert_eq!(texture.as_bytes().len(), 16);
    // Little-endian texel layout.
    assert_eq!(&texture.as_bytes()[0..4], &[0x04, 0x03, 0x02, 0x01]);
}
