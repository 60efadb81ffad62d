use riverseed_geom::Vec2i;

use crate::error::RiverError;

pub const QUADRANTS: usize = 4;

/// The four corner sub-squares of a padded tile.
///
/// Quadrants sit `3 * quad_size` apart rather than `quad_size`, so each
/// `quad_size`-wide sampling window hugs one corner of the tile interior.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QuadrantLayout {
    size: i32,
    padding: i32,
    quad_size: i32,
    quads: [Vec2i; QUADRANTS],
}

impl QuadrantLayout {
    pub fn new(size: i32, padding: i32) -> Result<Self, RiverError> {
        let quad_size = (size - padding * 2) / 4;
        if padding < 0 || quad_size <= 0 {
            return Err(RiverError::InvalidTile { size, padding });
        }
        let far = 3 * quad_size;
        let mut quads = [Vec2i::ZERO; QUADRANTS];
        quads[Self::index(0, 0)] = Vec2i::new(0, 0);
        quads[Self::index(1, 0)] = Vec2i::new(far, 0);
        quads[Self::index(0, 1)] = Vec2i::new(0, far);
        quads[Self::index(1, 1)] = Vec2i::new(far, far);
        Ok(Self {
            size,
            padding,
            quad_size,
            quads,
        })
    }

    #[inline]
    pub const fn index(qx: usize, qz: usize) -> usize {
        qz * 2 + qx
    }

    #[inline]
    pub fn size(&self) -> i32 {
        self.size
    }

    #[inline]
    pub fn padding(&self) -> i32 {
        self.padding
    }

    #[inline]
    pub fn quad_size(&self) -> i32 {
        self.quad_size
    }

    /// Quadrant origin, relative to the padded interior.
    #[inline]
    pub fn origin(&self, index: usize) -> Vec2i {
        self.quads[index & (QUADRANTS - 1)]
    }

    /// Index of the quadrant whose sampling window holds `offset`, if any.
    pub fn quadrant_of(&self, offset: Vec2i) -> Option<usize> {
        self.quads.iter().position(|q| {
            let lx = offset.x - self.padding - q.x;
            let lz = offset.z - self.padding - q.z;
            (0..self.quad_size).contains(&lx) && (0..self.quad_size).contains(&lz)
        })
    }
}
