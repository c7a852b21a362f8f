use disc_sort::prelude::*;
use disc_sort_examples::{init_tracing, random_line_angles, role_strip};
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::info;

const NUM_LINES: usize = 50;

fn main() -> anyhow::Result<()> {
    init_tracing();
    let mut rng = StdRng::seed_from_u64(5);

    let lines: Vec<Keyed<f32, usize>> = random_line_angles(NUM_LINES, &mut rng)
        .into_iter()
        .enumerate()
        .map(|(id, angle)| Keyed::new(angle, id))
        .collect();

    let mut automaton = SortAutomaton::new(lines);
    automaton.start()?;

    // One step per tick; the caller owns pacing.
    let mut tick = 0usize;
    while automaton.is_sorting() {
        let snapshot = automaton.step();
        tick += 1;
        if let Some(action) = snapshot.action {
            if !matches!(action, SortAction::Scanned { .. }) {
                println!(
                    "{:>5} {} pending {:?} {:?}",
                    tick,
                    role_strip(&snapshot),
                    snapshot.pending,
                    action
                );
            }
        }
    }

    let stats = automaton.stats();
    info!(
        "Sorted {} lines in {} ticks ({} comparisons, {} exchanges, max pending depth {}).",
        NUM_LINES, stats.steps, stats.comparisons, stats.exchanges, stats.max_pending_depth
    );

    let angles: Vec<String> = automaton
        .items()
        .iter()
        .map(|line| format!("{:.1}", line.key))
        .collect();
    println!("{}", angles.join(" "));
    Ok(())
}
