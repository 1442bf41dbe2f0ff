//! Seeded generator for forklift segment pairs.
//!
//! Model
//! - Per body: angle ~ U[0, 2π), distance ~ U[0, max_distance]; the body is the
//!   segment `center ± half_length·(cos, sin)` with `center = distance·(cos, sin)`.
//! - Per pair: both angles first (body 1, body 2), then both distances. The order
//!   is fixed so a seed reproduces the same file byte for byte.
//! - The RNG is owned by the caller (free functions) or by `SegmentGenerator`;
//!   nothing is global.

use crate::cfg::GenCfg;
use crate::geom::{Pose, SegmentPair};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::f64::consts::TAU;
use std::fmt;

/// Error type for generator construction.
#[derive(Debug, Clone, PartialEq)]
pub enum GeneratorError {
    InvalidParams { reason: String },
}

impl GeneratorError {
    pub(crate) fn invalid(reason: impl Into<String>) -> Self {
        Self::InvalidParams {
            reason: reason.into(),
        }
    }
}

impl fmt::Display for GeneratorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidParams { reason } => write!(f, "invalid generator params: {reason}"),
        }
    }
}

impl std::error::Error for GeneratorError {}

#[inline]
fn sample_angle<R: Rng>(rng: &mut R) -> f64 {
    rng.gen_range(0.0..TAU)
}

/// `max_distance` must pass `GenCfg::validate`.
#[inline]
fn sample_distance<R: Rng>(rng: &mut R, max_distance: f64) -> f64 {
    rng.gen_range(0.0..=max_distance)
}

/// Draw one pose, angle then distance.
pub fn sample_pose<R: Rng>(rng: &mut R, max_distance: f64) -> Pose {
    let angle = sample_angle(rng);
    let distance = sample_distance(rng, max_distance);
    Pose { angle, distance }
}

/// Draw both bodies of one pair: angle 1, angle 2, distance 1, distance 2.
pub fn generate_pair<R: Rng>(rng: &mut R, cfg: &GenCfg) -> SegmentPair {
    let angle1 = sample_angle(rng);
    let angle2 = sample_angle(rng);
    let dist1 = sample_distance(rng, cfg.max_distance);
    let dist2 = sample_distance(rng, cfg.max_distance);
    SegmentPair::from_poses(
        Pose::new(angle1, dist1),
        Pose::new(angle2, dist2),
        cfg.half_length,
    )
}

/// Draw `cfg.count` pairs from `rng`.
pub fn generate<R: Rng>(
    cfg: &GenCfg,
    rng: &mut R,
) -> Result<Vec<SegmentPair>, GeneratorError> {
    cfg.validate()?;
    Ok((0..cfg.count).map(|_| generate_pair(rng, cfg)).collect())
}

/// Streaming generator: yields exactly `cfg.count` pairs from a seeded `StdRng`.
pub struct SegmentGenerator {
    cfg: GenCfg,
    seed: u64,
    rng: StdRng,
    emitted: usize,
}

impl SegmentGenerator {
    pub fn new(cfg: GenCfg, seed: u64) -> Result<Self, GeneratorError> {
        cfg.validate()?;
        Ok(Self {
            cfg,
            seed,
            rng: StdRng::seed_from_u64(seed),
            emitted: 0,
        })
    }

    /// Seed drawn from OS entropy. Read it back with `seed()` to replay the run.
    pub fn from_entropy(cfg: GenCfg) -> Result<Self, GeneratorError> {
        Self::new(cfg, rand::random())
    }

    pub fn cfg(&self) -> &GenCfg {
        &self.cfg
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }
}

impl Iterator for SegmentGenerator {
    type Item = SegmentPair;

    fn next(&mut self) -> Option<SegmentPair> {
        if self.emitted >= self.cfg.count {
            return None;
        }
        self.emitted += 1;
        Some(generate_pair(&mut self.rng, &self.cfg))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let left = self.cfg.count - self.emitted;
        (left, Some(left))
    }
}

impl ExactSizeIterator for SegmentGenerator {}

#[cfg(test)]
mod tests;
