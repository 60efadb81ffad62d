use proptest::prelude::*;
use riverseed_geom::{Tile, Vec2i, dist2};

fn world_i32() -> impl Strategy<Value = i32> {
    -1_000_000i32..=1_000_000
}

fn arb_vec2i() -> impl Strategy<Value = Vec2i> {
    (world_i32(), world_i32()).prop_map(|(x, z)| Vec2i::new(x, z))
}

// Deltas small enough that the f32 square stays exact.
fn near_vec2i(base: Vec2i) -> impl Strategy<Value = Vec2i> {
    (-2_000i32..=2_000, -2_000i32..=2_000).prop_map(move |(dx, dz)| base + Vec2i::new(dx, dz))
}

proptest! {
    // dist2 is symmetric in its arguments
    #[test]
    fn dist2_symmetric(a in arb_vec2i(), b in arb_vec2i()) {
        prop_assert_eq!(a.dist2(b), b.dist2(a));
    }

    // dist2 is never negative and zero only for identical points
    #[test]
    fn dist2_non_negative(a in arb_vec2i(), b in arb_vec2i()) {
        let d = a.dist2(b);
        prop_assert!(d >= 0.0);
        prop_assert_eq!(d == 0.0, a == b);
    }

    // Within exact f32 range the float distance equals the integer one
    #[test]
    fn dist2_exact_for_small_deltas((a, b) in arb_vec2i().prop_flat_map(|a| (Just(a), near_vec2i(a)))) {
        let dx = i64::from(b.x - a.x);
        let dz = i64::from(b.z - a.z);
        prop_assert_eq!(a.dist2(b) as i64, dx * dx + dz * dz);
    }

    // Method and free function agree
    #[test]
    fn dist2_free_fn_agrees(a in arb_vec2i(), b in arb_vec2i()) {
        prop_assert_eq!(a.dist2(b), dist2(a.x, a.z, b.x, b.z));
    }

    // Every in-tile offset lands inside the tile in world space
    #[test]
    fn tile_offsets_stay_inside(tx in -64i32..64, tz in -64i32..64, size in 1i32..=512, ox in 0i32..512, oz in 0i32..512) {
        let tile = Tile::at_grid(tx, tz, size);
        let offset = Vec2i::new(ox % size, oz % size);
        let world = tile.to_world(offset);
        prop_assert!(tile.contains(world));
        prop_assert_eq!(world - tile.origin(), offset);
    }
}
