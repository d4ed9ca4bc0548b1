//! Pull-based statistics for the UI and the headless CLI.

/// Snapshot of the simulation counters.
///
/// Produced on demand by [`Simulation::stats`](crate::Simulation::stats);
/// nothing is pushed or cached, the UI reads what it needs each frame.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Stats {
    /// Ticks performed since startup or the last reset
    pub steps: u64,
    /// Number of ants on the grid
    pub ants: usize,
    /// Materialized grid cells (visited at least once)
    pub cells: usize,
    /// Current speed in ticks per frame
    pub speed: f64,
}

impl Stats {
    /// Format the counters as a one-line summary for headless runs.
    pub fn summary(&self) -> String {
        format!(
            "Steps:{:8} | Ants:{:3} | Cells:{:8} | Speed: {:.1}x",
            self.steps, self.ants, self.cells, self.speed
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summary_formats_speed_to_one_decimal() {
        let stats = Stats {
            steps: 10_000,
            ants: 2,
            cells: 3456,
            speed: 1.0,
        };

        let line = stats.summary();
        assert!(line.contains("10000"));
        assert!(line.contains("Ants:  2"));
        assert!(line.contains("Speed: 1.0x"));
    }

    #[test]
    fn test_default_is_all_zero() {
        let stats = Stats::default();
        assert_eq!(stats.steps, 0);
        assert_eq!(stats.ants, 0);
        assert_eq!(stats.cells, 0);
    }
}
