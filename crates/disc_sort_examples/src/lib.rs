#![forbid(unsafe_code)]

mod preview;

pub use preview::{density_preview, role_strip};

use rand::{Rng, RngExt};
use tracing_subscriber::EnvFilter;

/// Angle range of the lines in the sorting demo, in degrees.
pub const LINE_ANGLE_RANGE: (f32, f32) = (60.0, 120.0);

/// Install a `tracing` subscriber honoring `RUST_LOG`, defaulting to `info`.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .try_init();
}

/// `count` line angles drawn uniformly from [`LINE_ANGLE_RANGE`].
pub fn random_line_angles<R: Rng + ?Sized>(count: usize, rng: &mut R) -> Vec<f32> {
    let (min, max) = LINE_ANGLE_RANGE;
    (0..count).map(|_| rng.random_range(min..max)).collect()
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;

    #[test]
    fn line_angles_stay_in_range_and_follow_the_seed() {
        let (min, max) = LINE_ANGLE_RANGE;
        let angles = random_line_angles(500, &mut StdRng::seed_from_u64(3));
        assert_eq!(angles.len(), 500);
        assert!(angles.iter().all(|a| (min..max).contains(a)));
        assert!(angles.iter().any(|&a| a < min + 10.0));
        assert!(angles.iter().any(|&a| a > max - 10.0));

        let again = random_line_angles(500, &mut StdRng::seed_from_u64(3));
        assert_eq!(angles, again);
    }
}
