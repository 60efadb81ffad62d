use rayon::prelude::*;
use riverseed_geom::Tile;
use riverseed_world::rivermap::{make_rng, tile_seed};
use riverseed_world::{RiverError, RiverGenParams, RiverNode, noise_pos_generator};
use serde::Serialize;

/// Source and partner chosen for one tile.
#[derive(Clone, Debug, Serialize)]
pub struct TilePlan {
    pub tile_x: i32,
    pub tile_z: i32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<RiverNode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub partner: Option<RiverNode>,
}

#[derive(Debug, Serialize)]
pub struct PlanReport {
    pub seed: i64,
    pub tile_size: i32,
    pub tiles: Vec<TilePlan>,
}

impl PlanReport {
    pub fn placed(&self) -> (usize, usize) {
        let sources = self.tiles.iter().filter(|t| t.source.is_some()).count();
        let partners = self.tiles.iter().filter(|t| t.partner.is_some()).count();
        (sources, partners)
    }
}

/// Places a source, then a partner of the opposite type. Quadrant searches
/// fall back to relaxed ones; a tile with no classified source at all may
/// still seed one on high ground.
pub fn plan_tile(
    params: &RiverGenParams,
    tile_x: i32,
    tile_z: i32,
) -> Result<TilePlan, RiverError> {
    let tile = Tile::at_grid(tile_x, tile_z, params.tile_size);
    let mut pos = noise_pos_generator(params)?;
    let mut rng = make_rng(params.rng, tile_seed(params.seed, tile_x, tile_z));
    let rng = &mut *rng;

    let mut source = pos.next(tile.x, tile.z, rng, params.attempts)?;
    if source.is_none() {
        source = pos.next_relaxed(tile.x, tile.z, rng, params.relaxed_attempts)?;
    }
    if source.is_none() {
        source =
            pos.next_min_height(tile.x, tile.z, rng, params.attempts, params.min_height)?;
    }
    let partner = match source {
        Some(src) => match pos.next_from(
            tile.x,
            tile.z,
            rng,
            params.attempts,
            &src,
            params.min_dist2,
        )? {
            Some(node) => Some(node),
            None => pos.next_from_relaxed(
                tile.x,
                tile.z,
                rng,
                params.relaxed_attempts,
                &src,
                params.min_dist2,
            )?,
        },
        None => None,
    };
    if source.is_none() {
        log::debug!("tile ({}, {}): no source", tile_x, tile_z);
    }
    for node in source.iter().chain(partner.iter()) {
        if !tile.contains(node.pos()) {
            log::trace!(
                "tile ({}, {}): {:?} warped out to ({}, {})",
                tile_x,
                tile_z,
                node.kind,
                node.x,
                node.z
            );
        }
    }
    Ok(TilePlan {
        tile_x,
        tile_z,
        source,
        partner,
    })
}

/// Plans a `tiles_x` by `tiles_z` grid; each tile gets its own generator and rng.
pub fn plan_grid(
    params: &RiverGenParams,
    tiles_x: i32,
    tiles_z: i32,
) -> Result<PlanReport, RiverError> {
    let cells: Vec<(i32, i32)> = (0..tiles_z)
        .flat_map(|tz| (0..tiles_x).map(move |tx| (tx, tz)))
        .collect();
    let tiles = cells
        .into_par_iter()
        .map(|(tx, tz)| plan_tile(params, tx, tz))
        .collect::<Result<Vec<_>, _>>()?;
    Ok(PlanReport {
        seed: params.seed,
        tile_size: params.tile_size,
        tiles,
    })
}
