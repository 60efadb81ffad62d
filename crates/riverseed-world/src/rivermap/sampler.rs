use riverseed_geom::Vec2i;

use super::quadrant::{QUADRANTS, QuadrantLayout};
use super::random::RandomSource;

/// How a search proposes its next candidate offset.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SampleMode {
    /// Any quadrant, chosen uniformly.
    Seed,
    /// One to three quadrants on from the previous candidate.
    Step,
    /// Anywhere in the tile, quadrants ignored.
    Relaxed,
}

/// Cursor over successive candidate offsets within one tile.
///
/// Every move draws from the random source in a fixed order: the quadrant
/// (or step) first, then the x offset, then the z offset.
#[derive(Debug)]
pub struct CandidateSampler<'a> {
    layout: &'a QuadrantLayout,
    quadrant: usize,
    dx: i32,
    dz: i32,
}

impl<'a> CandidateSampler<'a> {
    pub fn new(layout: &'a QuadrantLayout) -> Self {
        Self {
            layout,
            quadrant: 0,
            dx: 0,
            dz: 0,
        }
    }

    #[inline]
    pub fn quadrant(&self) -> usize {
        self.quadrant
    }

    #[inline]
    pub fn offset(&self) -> Vec2i {
        Vec2i::new(self.dx, self.dz)
    }

    pub fn advance<R>(&mut self, mode: SampleMode, rng: &mut R) -> Vec2i
    where
        R: RandomSource + ?Sized,
    {
        match mode {
            SampleMode::Seed => self.next_seed(rng),
            SampleMode::Step => self.next_step(rng),
            SampleMode::Relaxed => self.next_relaxed(rng),
        }
    }

    pub fn next_seed<R>(&mut self, rng: &mut R) -> Vec2i
    where
        R: RandomSource + ?Sized,
    {
        let index = rng.next_int(QUADRANTS as u32) as usize;
        self.jump(index, rng)
    }

    pub fn next_step<R>(&mut self, rng: &mut R) -> Vec2i
    where
        R: RandomSource + ?Sized,
    {
        let steps = 1 + rng.next_int(3) as usize;
        let index = (self.quadrant + steps) & (QUADRANTS - 1);
        self.jump(index, rng)
    }

    pub fn next_relaxed<R>(&mut self, rng: &mut R) -> Vec2i
    where
        R: RandomSource + ?Sized,
    {
        let size = self.layout.size() as u32;
        self.dx = rng.next_int(size) as i32;
        self.dz = rng.next_int(size) as i32;
        self.offset()
    }

    fn jump<R>(&mut self, index: usize, rng: &mut R) -> Vec2i
    where
        R: RandomSource + ?Sized,
    {
        let origin = self.layout.origin(index);
        let padding = self.layout.padding();
        let quad_size = self.layout.quad_size() as u32;
        self.quadrant = index;
        self.dx = padding + origin.x + rng.next_int(quad_size) as i32;
        self.dz = padding + origin.z + rng.next_int(quad_size) as i32;
        self.offset()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::VecDeque;

    /// Replays a fixed list of draws and records the bounds it was asked for.
    struct Scripted {
        draws: VecDeque<u32>,
        bounds: Vec<u32>,
    }

    impl Scripted {
        fn new(draws: &[u32]) -> Self {
            Self {
                draws: draws.iter().copied().collect(),
                bounds: Vec::new(),
            }
        }
    }

    impl RandomSource for Scripted {
        fn next_int(&mut self, bound: u32) -> u32 {
            self.bounds.push(bound);
            let v = self.draws.pop_front().expect("script exhausted");
            assert!(v < bound, "scripted draw {v} out of bound {bound}");
            v
        }
    }

    #[test]
    fn seed_jump_lands_in_drawn_quadrant() {
        let layout = QuadrantLayout::new(256, 16).unwrap();
        let mut sampler = CandidateSampler::new(&layout);
        let mut rng = Scripted::new(&[2, 10, 20]);
        assert_eq!(sampler.next_seed(&mut rng), Vec2i::new(26, 204));
        assert_eq!(sampler.quadrant(), 2);
        assert_eq!(rng.bounds, vec![4, 56, 56]);
    }

    #[test]
    fn step_jump_wraps_past_last_quadrant() {
        let layout = QuadrantLayout::new(256, 16).unwrap();
        let mut sampler = CandidateSampler::new(&layout);
        // 3 (seed) then step of 1 + 1 = 2 -> quadrant 1
        let mut rng = Scripted::new(&[3, 0, 0, 1, 5, 6]);
        assert_eq!(sampler.next_seed(&mut rng), Vec2i::new(184, 184));
        assert_eq!(sampler.next_step(&mut rng), Vec2i::new(16 + 168 + 5, 16 + 6));
        assert_eq!(sampler.quadrant(), 1);
        assert_eq!(rng.bounds, vec![4, 56, 56, 3, 56, 56]);
    }

    #[test]
    fn fresh_sampler_steps_from_quadrant_zero() {
        let layout = QuadrantLayout::new(256, 16).unwrap();
        let mut sampler = CandidateSampler::new(&layout);
        let mut rng = Scripted::new(&[2, 1, 1]);
        sampler.next_step(&mut rng);
        assert_eq!(sampler.quadrant(), 3);
    }

    #[test]
    fn relaxed_spans_whole_tile_and_keeps_quadrant() {
        let layout = QuadrantLayout::new(256, 16).unwrap();
        let mut sampler = CandidateSampler::new(&layout);
        let mut rng = Scripted::new(&[1, 0, 0, 255, 128]);
        sampler.next_seed(&mut rng);
        assert_eq!(sampler.next_relaxed(&mut rng), Vec2i::new(255, 128));
        assert_eq!(sampler.quadrant(), 1);
        assert_eq!(rng.bounds[3..], [256, 256]);
    }

    #[test]
    fn advance_dispatches_by_mode() {
        let layout = QuadrantLayout::new(256, 16).unwrap();
        let mut sampler = CandidateSampler::new(&layout);
        let mut rng = Scripted::new(&[2, 10, 20]);
        assert_eq!(
            sampler.advance(SampleMode::Seed, &mut rng),
            Vec2i::new(26, 204)
        );
    }
}
