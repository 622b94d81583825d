//! Per-pixel collision masks
//!
//! Sprites carry transparent padding, so bounding rectangles over-report hits
//! on near misses. A mask records which pixels are solid.

use crate::tuning::Tuning;

/// Alpha values strictly above this are solid
pub const ALPHA_THRESHOLD: u8 = 127;

/// Bit grid of solid pixels, row-major
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CollisionMask {
    width: u32,
    height: u32,
    bits: Vec<bool>,
}

impl CollisionMask {
    /// Every pixel solid (used for placeholder sprites)
    pub fn solid(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            bits: vec![true; (width * height) as usize],
        }
    }

    /// Build from a row-major list of solid flags
    pub fn from_bits(width: u32, height: u32, bits: Vec<bool>) -> Self {
        assert_eq!(bits.len(), (width * height) as usize, "mask size mismatch");
        Self {
            width,
            height,
            bits,
        }
    }

    /// Build from RGBA8 pixels, resampled (nearest neighbour) to `width` x `height`
    pub fn from_rgba(src_width: u32, src_height: u32, rgba: &[u8], width: u32, height: u32) -> Self {
        if src_width == 0 || src_height == 0 {
            return Self::from_bits(width, height, vec![false; (width * height) as usize]);
        }
        let mut bits = Vec::with_capacity((width * height) as usize);
        for y in 0..height {
            let sy = (y as u64 * src_height as u64 / height.max(1) as u64) as u32;
            for x in 0..width {
                let sx = (x as u64 * src_width as u64 / width.max(1) as u64) as u32;
                let idx = ((sy as u64 * src_width as u64 + sx as u64) * 4 + 3) as usize;
                bits.push(rgba.get(idx).is_some_and(|&a| a > ALPHA_THRESHOLD));
            }
        }
        Self {
            width,
            height,
            bits,
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Is the pixel at (x, y) solid? Out of range reads as empty.
    #[inline]
    pub fn get(&self, x: i32, y: i32) -> bool {
        if x < 0 || y < 0 || x >= self.width as i32 || y >= self.height as i32 {
            return false;
        }
        self.bits[(y as u32 * self.width + x as u32) as usize]
    }

    pub fn count(&self) -> usize {
        self.bits.iter().filter(|&&b| b).count()
    }

    /// Does `other`, placed at `offset` relative to this mask's origin,
    /// share any solid pixel with this mask?
    pub fn overlaps(&self, other: &CollisionMask, offset: (i32, i32)) -> bool {
        let (ox, oy) = offset;
        let x0 = ox.max(0);
        let y0 = oy.max(0);
        let x1 = (self.width as i32).min(ox + other.width as i32);
        let y1 = (self.height as i32).min(oy + other.height as i32);

        for y in y0..y1 {
            for x in x0..x1 {
                if self.get(x, y) && other.get(x - ox, y - oy) {
                    return true;
                }
            }
        }
        false
    }
}

/// The masks collision resolution needs, one per sprite kind
#[derive(Debug, Clone)]
pub struct CollisionMasks {
    pub player: CollisionMask,
    pub player_bullet: CollisionMask,
    pub enemy: CollisionMask,
    pub enemy_bullet: CollisionMask,
}

impl CollisionMasks {
    /// Fully solid masks sized from tuning (rectangle-accurate collisions)
    pub fn solid(tuning: &Tuning) -> Self {
        let px = |v: f32| v.round().max(0.0) as u32;
        Self {
            player: CollisionMask::solid(px(tuning.player_width), px(tuning.player_height)),
            player_bullet: CollisionMask::solid(px(tuning.bullet_width), px(tuning.bullet_height)),
            enemy: CollisionMask::solid(px(tuning.enemy_width), px(tuning.enemy_height)),
            enemy_bullet: CollisionMask::solid(
                px(tuning.enemy_bullet_width),
                px(tuning.enemy_bullet_height),
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// 4x4 mask with only the center 2x2 solid
    fn padded_core() -> CollisionMask {
        let mut bits = vec![false; 16];
        for (x, y) in [(1, 1), (2, 1), (1, 2), (2, 2)] {
            bits[y * 4 + x] = true;
        }
        CollisionMask::from_bits(4, 4, bits)
    }

    #[test]
    fn test_solid_overlap() {
        let a = CollisionMask::solid(4, 4);
        let b = CollisionMask::solid(2, 2);
        assert!(a.overlaps(&b, (3, 3)));
        assert!(a.overlaps(&b, (-1, -1)));
        assert!(!a.overlaps(&b, (4, 0)));
        assert!(!a.overlaps(&b, (-2, 0)));
    }

    #[test]
    fn test_padding_prevents_overlap() {
        let padded = padded_core();
        let dot = CollisionMask::solid(1, 1);
        // Inside the rectangle but on a transparent corner
        assert!(!padded.overlaps(&dot, (0, 0)));
        assert!(!padded.overlaps(&dot, (3, 3)));
        // On the solid core
        assert!(padded.overlaps(&dot, (1, 2)));
    }

    #[test]
    fn test_from_rgba_threshold_and_scale() {
        // 2x1 image: left pixel opaque, right pixel at the threshold (not solid)
        let rgba = [255, 0, 0, 255, 0, 255, 0, ALPHA_THRESHOLD];
        let mask = CollisionMask::from_rgba(2, 1, &rgba, 4, 2);
        assert_eq!(mask.width(), 4);
        assert_eq!(mask.height(), 2);
        assert!(mask.get(0, 0));
        assert!(mask.get(1, 1));
        assert!(!mask.get(2, 0));
        assert!(!mask.get(3, 1));
        assert_eq!(mask.count(), 4);
    }

    #[test]
    #[should_panic(expected = "mask size mismatch")]
    fn test_from_bits_rejects_wrong_length() {
        CollisionMask::from_bits(3, 3, vec![true; 8]);
    }

    #[test]
    fn test_out_of_range_reads_empty() {
        let mask = CollisionMask::solid(2, 2);
        assert!(!mask.get(-1, 0));
        assert!(!mask.get(0, 2));
    }
}
