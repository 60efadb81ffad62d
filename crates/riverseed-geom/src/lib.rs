//! Integer plane geometry for tile sampling (no noise or rng dependency).
#![forbid(unsafe_code)]

use core::ops::{Add, Sub};

use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(test, derive(proptest_derive::Arbitrary))]
pub struct Vec2i {
    pub x: i32,
    pub z: i32,
}

impl Vec2i {
    pub const ZERO: Vec2i = Vec2i { x: 0, z: 0 };

    #[inline]
    pub const fn new(x: i32, z: i32) -> Self {
        Self { x, z }
    }

    #[inline]
    pub fn dist2(self, other: Vec2i) -> f32 {
        dist2(self.x, self.z, other.x, other.z)
    }
}

#[inline]
pub fn dist2(x1: i32, z1: i32, x2: i32, z2: i32) -> f32 {
    let dx = x2.wrapping_sub(x1) as f32;
    let dz = z2.wrapping_sub(z1) as f32;
    dx * dx + dz * dz
}

impl Add for Vec2i {
    type Output = Vec2i;
    #[inline]
    fn add(self, rhs: Vec2i) -> Vec2i {
        Vec2i::new(self.x.wrapping_add(rhs.x), self.z.wrapping_add(rhs.z))
    }
}

impl Sub for Vec2i {
    type Output = Vec2i;
    #[inline]
    fn sub(self, rhs: Vec2i) -> Vec2i {
        Vec2i::new(self.x.wrapping_sub(rhs.x), self.z.wrapping_sub(rhs.z))
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Tile {
    pub x: i32,
    pub z: i32,
    pub size: i32,
}

impl Tile {
    #[inline]
    pub const fn new(x: i32, z: i32, size: i32) -> Self {
        Self { x, z, size }
    }

    #[inline]
    pub const fn at_grid(tx: i32, tz: i32, size: i32) -> Self {
        Self::new(tx.wrapping_mul(size), tz.wrapping_mul(size), size)
    }

    #[inline]
    pub fn origin(&self) -> Vec2i {
        Vec2i::new(self.x, self.z)
    }

    #[inline]
    pub fn to_world(&self, offset: Vec2i) -> Vec2i {
        self.origin() + offset
    }

    #[inline]
    pub fn contains(&self, p: Vec2i) -> bool {
        let local = p - self.origin();
        local.x >= 0 && local.z >= 0 && local.x < self.size && local.z < self.size
    }
}
