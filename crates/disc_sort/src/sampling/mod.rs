//! Blue-noise point generation over a rectangular 2D region.
//!
//! The region spans `[0, width) × [0, height)`. [`PoissonDiscSampling`] fills it with
//! points that are at least `radius` apart, using a [`SpatialGrid`] for neighbor queries.
use rand::Rng;

pub mod events;
pub mod grid;
pub mod poisson_disc;

pub use events::{EventSink, FnSink, MultiSink, SamplingEvent, SamplingEventKind, VecSink};
pub use grid::SpatialGrid;
pub use poisson_disc::{
    generate, CandidateAngle, Point, PoissonDiscSampling, SamplingResult, DEFAULT_BOUNDS,
    DEFAULT_MAX_ATTEMPTS, DEFAULT_RADIUS,
};

/// Generate a random float in the half-open range [0, 1).
///
/// Uses the top 24 bits of a `u32` so every result is exactly representable.
#[inline]
pub(crate) fn rand01(rng: &mut dyn Rng) -> f32 {
    (rng.next_u32() >> 8) as f32 * (1.0 / (1u32 << 24) as f32)
}

/// Pick an index in `0..len` from a full 64-bit draw. `len` must be non-zero.
#[inline]
pub(crate) fn rand_index(rng: &mut dyn Rng, len: usize) -> usize {
    debug_assert!(len > 0);
    (rng.next_u64() % len as u64) as usize
}

/// Compute the next smaller representable float value.
///
/// Used to keep coordinates strictly below the far edge of the region.
#[inline]
pub(crate) fn next_down(val: f32) -> f32 {
    if val.is_nan() {
        return f32::NAN;
    }

    if val == f32::NEG_INFINITY {
        return f32::NEG_INFINITY;
    }

    if val == f32::INFINITY {
        return f32::MAX;
    }

    if val == 0.0 {
        return -f32::MIN_POSITIVE;
    }

    let bits = val.to_bits();
    if val > 0.0 {
        f32::from_bits(bits.saturating_sub(1))
    } else {
        f32::from_bits(bits.saturating_add(1))
    }
}
