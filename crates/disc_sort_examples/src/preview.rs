//! Plain-text previews so the demos stay headless.
use disc_sort::prelude::*;
use glam::Vec2;

const DENSITY_RAMP: &[u8] = b" .:-=+*#%@";

/// Character grid of `cols × rows` cells shading how many points fall in each cell.
pub fn density_preview(points: &[Point], bounds: Vec2, cols: usize, rows: usize) -> String {
    let cols = cols.max(1);
    let rows = rows.max(1);
    let mut counts = vec![0usize; cols * rows];
    for p in points {
        let cx = ((p.x / bounds.x * cols as f32) as usize).min(cols - 1);
        let cy = ((p.y / bounds.y * rows as f32) as usize).min(rows - 1);
        counts[cy * cols + cx] += 1;
    }

    let peak = counts.iter().copied().max().unwrap_or(0).max(1);
    let mut out = String::with_capacity((cols + 1) * rows);
    for row in counts.chunks(cols) {
        for &count in row {
            let level = count * (DENSITY_RAMP.len() - 1) / peak;
            out.push(DENSITY_RAMP[level] as char);
        }
        out.push('\n');
    }
    out
}

/// One character per element: `P` pivot, `^` scan cursor, `.` idle.
pub fn role_strip<T>(snapshot: &Snapshot<'_, T>) -> String {
    snapshot
        .roles()
        .map(|role| match role {
            ElementRole::Pivot => 'P',
            ElementRole::Scan => '^',
            ElementRole::Idle => '.',
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn density_preview_has_requested_shape() {
        let points = vec![Point::new(1.0, 1.0), Point::new(9.5, 9.5)];
        let preview = density_preview(&points, Vec2::new(10.0, 10.0), 4, 2);
        let lines: Vec<&str> = preview.lines().collect();
        assert_eq!(lines, vec!["@   ", "   @"]);
    }

    #[test]
    fn role_strip_marks_pivot_and_cursors() {
        let mut automaton = SortAutomaton::new(vec![3, 1, 2]);
        automaton.start().unwrap();
        assert_eq!(role_strip(&automaton.snapshot()), "^.P");
        assert_eq!(role_strip(&automaton.step()), ".^P");
    }
}
