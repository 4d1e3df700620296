// Bounded history of plotted transactions

use crate::types::PlotPoint;

// How many prior points stay on the landscape behind the current one
pub const HISTORY_CAPACITY: usize = 30;

// The only mutable state in the crate. Single calling context, no internal
// locking: a concurrent embedder must serialize push/clear/render itself.
#[derive(Debug, Default)]
pub struct PointStore {
    // The most recent point, drawn highlighted on top of the history
    pub current: Option<PlotPoint>,

    // Prior points, most-recent-first; oldest evicted past capacity
    pub history: Vec<PlotPoint>,
}

impl PointStore {
    pub fn new() -> Self {
        Self::default()
    }

    // Install a new current point, demoting the previous one into history.
    pub fn push(&mut self, point: PlotPoint) {
        if let Some(prev) = self.current.take() {
            self.history.insert(0, prev);
            self.history.truncate(HISTORY_CAPACITY);
        }
        self.current = Some(point);
    }

    pub fn clear(&mut self) {
        self.current = None;
        self.history.clear();
    }
}

// Opacity for the history point at `index` of `len` total: decays linearly
// with age down to a floor of 0.15 so the oldest dots stay faintly visible.
pub fn history_opacity(index: usize, len: usize) -> f64 {
    (1.0 - (index as f64 / len as f64) * 0.8).max(0.15)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::DecisionLabel;

    fn point(risk: f64) -> PlotPoint {
        PlotPoint::new(risk, 0.01, Some(DecisionLabel::Approve))
    }

    #[test]
    fn push_demotes_current_into_history_most_recent_first() {
        let mut store = PointStore::new();
        store.push(point(0.1));
        assert!(store.history.is_empty());

        store.push(point(0.2));
        store.push(point(0.3));
        assert_eq!(store.current.unwrap().risk, 0.3);
        assert_eq!(store.history[0].risk, 0.2);
        assert_eq!(store.history[1].risk, 0.1);
    }

    #[test]
    fn history_is_capacity_bounded_and_evicts_the_oldest() {
        let mut store = PointStore::new();
        // capacity + 1 pushes: one current, capacity in history
        for i in 0..=HISTORY_CAPACITY {
            store.push(point(i as f64 / 100.0));
        }
        assert_eq!(store.history.len(), HISTORY_CAPACITY);
        assert_eq!(store.current.unwrap().risk, HISTORY_CAPACITY as f64 / 100.0);

        // One more push: the earliest point (risk 0.0) falls off the tail
        store.push(point(0.99));
        assert_eq!(store.history.len(), HISTORY_CAPACITY);
        assert_eq!(store.history[0].risk, HISTORY_CAPACITY as f64 / 100.0);
        assert_eq!(store.history.last().unwrap().risk, 0.01);
        assert!(store.history.iter().all(|p| p.risk != 0.0));
    }

    #[test]
    fn clear_resets_to_the_initial_empty_state() {
        let mut store = PointStore::new();
        for i in 0..5 {
            store.push(point(i as f64 / 10.0));
        }
        store.clear();
        assert!(store.current.is_none());
        assert!(store.history.is_empty());
    }

    #[test]
    fn opacity_decays_linearly_to_the_floor() {
        let n = 30;
        let mut prev = f64::INFINITY;
        for i in 0..n {
            let alpha = history_opacity(i, n);
            assert!((0.15..=1.0).contains(&alpha));
            assert!(alpha <= prev, "opacity must not increase with age");
            prev = alpha;
        }
        // Exact rule from the display contract
        assert!((history_opacity(0, 30) - 1.0).abs() < 1e-12);
        assert!((history_opacity(15, 30) - 0.6).abs() < 1e-12);
        assert!((history_opacity(29, 30) - (1.0 - 29.0 / 30.0 * 0.8)).abs() < 1e-12);
    }
}
