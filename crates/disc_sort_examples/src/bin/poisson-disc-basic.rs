use disc_sort::prelude::*;
use disc_sort::sampling::{DEFAULT_BOUNDS, DEFAULT_MAX_ATTEMPTS, DEFAULT_RADIUS};
use disc_sort_examples::{density_preview, init_tracing};
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::info;

fn main() -> anyhow::Result<()> {
    init_tracing();

    let mut rng = StdRng::seed_from_u64(42);
    let points = generate(
        DEFAULT_RADIUS,
        DEFAULT_MAX_ATTEMPTS,
        DEFAULT_BOUNDS.into(),
        &mut rng,
    )?;

    info!(
        "Generated {} points in {}x{} (r = {}).",
        points.len(),
        DEFAULT_BOUNDS.x,
        DEFAULT_BOUNDS.y,
        DEFAULT_RADIUS
    );
    println!("{}", density_preview(&points, DEFAULT_BOUNDS, 80, 30));
    Ok(())
}
