// Ordered dithering: the only way anything reaches the screen.
// Visual: every pixel is pure black or pure white; brightness is the
// density of white pixels inside each 12x12 Bayer tile.

/// Side of the square block of pixels that shares one Bayer threshold.
pub const DITHER_SIZE: i32 = 3;

/// 4x4 Bayer threshold matrix, indexed `[by][bx]`.
pub const BAYER_MATRIX: [[u8; 4]; 4] = [
    [0, 8, 2, 10],
    [12, 4, 14, 6],
    [3, 11, 1, 9],
    [15, 7, 13, 5],
];

/// Packed window colors (0x00RRGGBB).
pub const WHITE: u32 = 0x00_FF_FF_FF;
pub const BLACK: u32 = 0x00_00_00_00;

/// Threshold in [0, 15/16] for the dither cell containing world pixel (x, y).
#[inline]
pub fn threshold(x: i32, y: i32) -> f64 {
    let bx = x.div_euclid(DITHER_SIZE).rem_euclid(4) as usize;
    let by = y.div_euclid(DITHER_SIZE).rem_euclid(4) as usize;
    BAYER_MATRIX[by][bx] as f64 / 16.0
}

/// 1 if the pixel is on, 0 if off.
/// Negative intensities are always off; intensities >= 1 are always on.
#[inline]
pub fn dither(x: i32, y: i32, intensity: f64) -> u8 {
    if intensity > threshold(x, y) { 1 } else { 0 }
}

/// Luminance byte for a world pixel: 0 or 255.
#[inline]
pub fn dither_luma(x: i32, y: i32, intensity: f64) -> u8 {
    dither(x, y, intensity) * 255
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spot_checks() {
        // (0,0) sits on the zero threshold, anything positive turns it on.
        assert_eq!(dither(0, 0, 0.05), 1);
        // (3,0) is cell bx=1 -> 8/16.
        assert_eq!(dither(3, 0, 0.4), 0);
        assert_eq!(dither(3, 0, 0.51), 1);
    }

    #[test]
    fn bayer_index_uses_cell_size() {
        // bx = floor(5/3) % 4 = 1, by = floor(7/3) % 4 = 2
        assert_eq!(threshold(5, 7), 11.0 / 16.0);
    }

    #[test]
    fn pattern_repeats_every_twelve_pixels() {
        for y in -24..24 {
            for x in -24..24 {
                for i in [0.1f64, 0.3, 0.55, 0.9] {
                    assert_eq!(dither(x, y, i), dither(x + 12, y, i));
                    assert_eq!(dither(x, y, i), dither(x, y + 12, i));
                }
            }
        }
    }

    #[test]
    fn monotonic_in_intensity() {
        for y in 0..12 {
            for x in 0..12 {
                let mut prev = 0;
                for step in -4..=20 {
                    let v = dither(x, y, step as f64 / 16.0);
                    assert!(v >= prev, "({x},{y}) dropped at step {step}");
                    prev = v;
                }
            }
        }
    }

    #[test]
    fn clamps_out_of_range_intensity() {
        for y in 0..12 {
            for x in 0..12 {
                assert_eq!(dither(x, y, -0.5), 0);
                assert_eq!(dither(x, y, 0.0), 0);
                assert_eq!(dither(x, y, 1.0), 1);
                assert_eq!(dither(x, y, 3.0), 1);
            }
        }
    }

    #[test]
    fn coverage_matches_threshold_level() {
        // i = k/16 + eps lights exactly k+1 of the 16 cells of a tile.
        for k in 0..16 {
            let i = k as f64 / 16.0 + 0.001;
            let mut on_cells = 0;
            for cy in 0..4 {
                for cx in 0..4 {
                    let (x, y) = (cx * DITHER_SIZE, cy * DITHER_SIZE);
                    // every pixel of a cell agrees
                    for dy in 0..DITHER_SIZE {
                        for dx in 0..DITHER_SIZE {
                            assert_eq!(dither(x + dx, y + dy, i), dither(x, y, i));
                        }
                    }
                    on_cells += dither(x, y, i) as u32;
                }
            }
            assert_eq!(on_cells, k + 1, "level {k}");
        }
    }

    #[test]
    fn luma_is_binary() {
        for x in 0..12 {
            let v = dither_luma(x, 4, 0.5);
            assert!(v == 0 || v == 255);
        }
    }
}
