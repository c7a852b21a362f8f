use disc_sort::prelude::*;
use disc_sort_examples::init_tracing;
use glam::Vec2;
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::info;

/// Points revealed per simulated frame.
const POINTS_PER_TICK: usize = 250;

fn main() -> anyhow::Result<()> {
    init_tracing();
    let bounds = Vec2::new(800.0, 600.0);

    let mut revealed: Vec<Vec2> = Vec::new();
    let mut retired = 0usize;
    let mut sink = FnSink::new(|event| match event {
        SamplingEvent::Seeded { position, .. } | SamplingEvent::Accepted { position, .. } => {
            revealed.push(position);
        }
        SamplingEvent::Deactivated { .. } => retired += 1,
        _ => {}
    });

    let mut rng = StdRng::seed_from_u64(2024);
    let result = PoissonDiscSampling::default().generate_with_events(
        bounds.into(),
        &mut rng,
        &mut sink,
    )?;

    for (tick, batch) in revealed.chunks(POINTS_PER_TICK).enumerate() {
        let shown = (tick * POINTS_PER_TICK + batch.len()).min(revealed.len());
        let centroid = batch.iter().copied().sum::<Vec2>() / batch.len() as f32;
        info!(
            "tick {:>3}: {:>5}/{} points shown, batch centroid ({:.0}, {:.0}).",
            tick,
            shown,
            revealed.len(),
            centroid.x,
            centroid.y
        );
    }

    info!(
        "{} points accepted, {} frontier retirements, {} candidates tried.",
        result.points.len(),
        retired,
        result.attempts
    );
    Ok(())
}
