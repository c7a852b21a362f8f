use disc_sort::prelude::*;
use disc_sort_examples::{density_preview, init_tracing};
use glam::Vec2;
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::info;

fn main() -> anyhow::Result<()> {
    init_tracing();
    let bounds = Vec2::new(400.0, 300.0);

    for mode in [CandidateAngle::Uniform, CandidateAngle::GoldenDistorted] {
        let mut rng = StdRng::seed_from_u64(7);
        let result = PoissonDiscSampling::new(4.0, 20)
            .with_angle_mode(mode)
            .generate_with_events(bounds.into(), &mut rng, &mut ())?;

        let acceptance = (result.points.len() - 1) as f32 / result.attempts.max(1) as f32;
        info!(
            "{:?}: {} points, {} attempts ({:.1}% accepted, {} out of bounds, {} too close).",
            mode,
            result.points.len(),
            result.attempts,
            acceptance * 100.0,
            result.rejected_out_of_bounds,
            result.rejected_too_close,
        );
        println!("{}", density_preview(&result.points, bounds, 60, 20));
    }

    Ok(())
}
