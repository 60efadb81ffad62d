use riverseed_geom::{Tile, Vec2i};

use crate::error::RiverError;
use crate::terrain::{Domain, Heightmap};

use super::node::{HeightSample, NodeType, RiverNode};
use super::quadrant::QuadrantLayout;
use super::random::RandomSource;
use super::sampler::{CandidateSampler, SampleMode};

/// One proposed position with both of its height samples.
#[derive(Clone, Copy, Debug)]
struct Candidate {
    pos: Vec2i,
    warped: Vec2i,
    primary: HeightSample,
    secondary: HeightSample,
}

impl Candidate {
    /// Type shared by the raw and warped positions, if they agree.
    #[inline]
    fn shared_type(&self) -> Option<NodeType> {
        (self.primary.kind == self.secondary.kind).then_some(self.primary.kind)
    }

    /// River ends snap to the warped position; everything else stays put.
    #[inline]
    fn place(&self, kind: NodeType) -> RiverNode {
        let at = if kind == NodeType::End {
            self.warped
        } else {
            self.pos
        };
        RiverNode::new(at.x, at.z, kind)
    }
}

/// Keeps candidates at least `sqrt(min_dist2)` away from an existing node.
#[derive(Clone, Copy, Debug)]
struct Exclusion {
    center: Vec2i,
    min_dist2: f32,
}

/// Places river nodes inside a tile by bounded rejection sampling.
///
/// Each search draws up to `attempts` candidates, evaluates the heightmap at
/// the candidate and at its domain-warped twin, and returns the first node the
/// strategy accepts. Running out of attempts yields `Ok(None)`.
pub struct PosGenerator<H, D> {
    layout: QuadrantLayout,
    heightmap: H,
    domain: D,
}

impl<H: Heightmap, D: Domain> PosGenerator<H, D> {
    pub fn new(heightmap: H, domain: D, size: i32, padding: i32) -> Result<Self, RiverError> {
        Ok(Self {
            layout: QuadrantLayout::new(size, padding)?,
            heightmap,
            domain,
        })
    }

    #[inline]
    pub fn layout(&self) -> &QuadrantLayout {
        &self.layout
    }

    #[inline]
    pub fn heightmap(&self) -> &H {
        &self.heightmap
    }

    #[inline]
    pub fn sample(&mut self, x: i32, z: i32) -> HeightSample {
        HeightSample::new(self.heightmap.height(x, z))
    }

    /// Any start or end, from a uniformly chosen quadrant each attempt.
    pub fn next<R>(
        &mut self,
        x: i32,
        z: i32,
        rng: &mut R,
        attempts: u32,
    ) -> Result<Option<RiverNode>, RiverError>
    where
        R: RandomSource + ?Sized,
    {
        self.search(x, z, rng, attempts, SampleMode::Seed, None, accept_any)
    }

    /// Partner for `point`: the opposite type, in a different quadrant from the
    /// previous attempt, no closer than `min_dist2` (squared).
    pub fn next_from<R>(
        &mut self,
        x: i32,
        z: i32,
        rng: &mut R,
        attempts: u32,
        point: &RiverNode,
        min_dist2: i32,
    ) -> Result<Option<RiverNode>, RiverError>
    where
        R: RandomSource + ?Sized,
    {
        let exclusion = Exclusion {
            center: point.pos(),
            min_dist2: min_dist2 as f32,
        };
        let want = point.kind.opposite();
        self.search(x, z, rng, attempts, SampleMode::Step, Some(exclusion), |c| {
            accept_kind(c, want)
        })
    }

    /// As [`Self::next`], sampling anywhere in the tile.
    pub fn next_relaxed<R>(
        &mut self,
        x: i32,
        z: i32,
        rng: &mut R,
        attempts: u32,
    ) -> Result<Option<RiverNode>, RiverError>
    where
        R: RandomSource + ?Sized,
    {
        self.search(x, z, rng, attempts, SampleMode::Relaxed, None, accept_any)
    }

    /// As [`Self::next_from`], sampling anywhere in the tile.
    pub fn next_from_relaxed<R>(
        &mut self,
        x: i32,
        z: i32,
        rng: &mut R,
        attempts: u32,
        point: &RiverNode,
        min_dist2: i32,
    ) -> Result<Option<RiverNode>, RiverError>
    where
        R: RandomSource + ?Sized,
    {
        let exclusion = Exclusion {
            center: point.pos(),
            min_dist2: min_dist2 as f32,
        };
        let want = point.kind.opposite();
        self.search(
            x,
            z,
            rng,
            attempts,
            SampleMode::Relaxed,
            Some(exclusion),
            |c| accept_kind(c, want),
        )
    }

    /// Exactly `kind`, always at the unwarped position (ends included).
    pub fn next_type<R>(
        &mut self,
        x: i32,
        z: i32,
        rng: &mut R,
        attempts: u32,
        kind: NodeType,
    ) -> Result<Option<RiverNode>, RiverError>
    where
        R: RandomSource + ?Sized,
    {
        self.search(x, z, rng, attempts, SampleMode::Seed, None, |c| {
            (c.shared_type() == Some(kind)).then(|| RiverNode::new(c.pos.x, c.pos.z, kind))
        })
    }

    /// A start wherever both samples rise strictly above `min_height`.
    pub fn next_min_height<R>(
        &mut self,
        x: i32,
        z: i32,
        rng: &mut R,
        attempts: u32,
        min_height: f32,
    ) -> Result<Option<RiverNode>, RiverError>
    where
        R: RandomSource + ?Sized,
    {
        self.search(x, z, rng, attempts, SampleMode::Step, None, |c| {
            (c.primary.value > min_height && c.secondary.value > min_height)
                .then(|| RiverNode::new(c.pos.x, c.pos.z, NodeType::Start))
        })
    }

    #[allow(clippy::too_many_arguments)]
    fn search<R, F>(
        &mut self,
        x: i32,
        z: i32,
        rng: &mut R,
        attempts: u32,
        mode: SampleMode,
        exclusion: Option<Exclusion>,
        mut accept: F,
    ) -> Result<Option<RiverNode>, RiverError>
    where
        R: RandomSource + ?Sized,
        F: FnMut(&Candidate) -> Option<RiverNode>,
    {
        if attempts == 0 {
            return Err(RiverError::InvalidAttempts);
        }
        let layout = self.layout.clone();
        let tile = Tile::new(x, z, layout.size());
        let mut sampler = CandidateSampler::new(&layout);
        for attempt in 0..attempts {
            let pos = tile.to_world(sampler.advance(mode, rng));
            // A rejected draw still spends its attempt.
            if let Some(ex) = exclusion {
                if pos.dist2(ex.center) < ex.min_dist2 {
                    continue;
                }
            }
            let warped = self.domain.warp(pos.x, pos.z);
            let primary = self.sample(pos.x, pos.z);
            let secondary = self.sample(warped.x, warped.z);
            let candidate = Candidate {
                pos,
                warped,
                primary,
                secondary,
            };
            if let Some(node) = accept(&candidate) {
                log::debug!(
                    target: "rivers",
                    "{:?} node at ({}, {}) after {} attempt(s), mode={:?}",
                    node.kind,
                    node.x,
                    node.z,
                    attempt + 1,
                    mode
                );
                return Ok(Some(node));
            }
        }
        log::trace!(
            target: "rivers",
            "no node in tile ({}, {}) after {} attempts, mode={:?}",
            x,
            z,
            attempts,
            mode
        );
        Ok(None)
    }
}

fn accept_any(c: &Candidate) -> Option<RiverNode> {
    match c.shared_type()? {
        NodeType::None => None,
        kind => Some(c.place(kind)),
    }
}

fn accept_kind(c: &Candidate, want: NodeType) -> Option<RiverNode> {
    (c.shared_type()? == want).then(|| c.place(want))
}
