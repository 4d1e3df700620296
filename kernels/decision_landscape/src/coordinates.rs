// Data-space ↔ pixel-space mapping

use crate::types::{
    MARGIN_BOTTOM, MARGIN_LEFT, MARGIN_RIGHT, MARGIN_TOP, RISK_MAX, RISK_MIN, UNC_MAX, UNC_MIN,
};

// The drawable interior of the canvas: display size minus the margins.
// Recomputed from the current canvas size on every repaint; never stored.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlotArea {
    pub origin_x: f64,
    pub origin_y: f64,
    pub width: f64,
    pub height: f64,
}

impl PlotArea {
    // Derive the plot area for a square canvas of `size` CSS pixels.
    // Geometry only; independent of any drawing-surface API so the maps
    // below stay natively testable.
    pub fn for_square_canvas(size: f64) -> Self {
        Self {
            origin_x: MARGIN_LEFT,
            origin_y: MARGIN_TOP,
            width: size - MARGIN_LEFT - MARGIN_RIGHT,
            height: size - MARGIN_TOP - MARGIN_BOTTOM,
        }
    }

    // Map a risk score to a pixel X. Linear and unclamped: callers that
    // must stay inside the plot clamp to [RISK_MIN, RISK_MAX] first.
    #[inline]
    pub fn risk_to_x(&self, risk: f64) -> f64 {
        self.origin_x + ((risk - RISK_MIN) / (RISK_MAX - RISK_MIN)) * self.width
    }

    // Map an uncertainty to a pixel Y, inverted: high uncertainty at the
    // top of the plot even though canvas Y grows downward, so data (0,0)
    // sits at the bottom-left like a conventional chart.
    #[inline]
    pub fn unc_to_y(&self, unc: f64) -> f64 {
        self.origin_y + self.height - ((unc - UNC_MIN) / (UNC_MAX - UNC_MIN)) * self.height
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn area() -> PlotArea {
        PlotArea::for_square_canvas(400.0)
    }

    #[test]
    fn plot_area_subtracts_margins_from_the_square() {
        let a = area();
        assert_eq!(a.origin_x, MARGIN_LEFT);
        assert_eq!(a.origin_y, MARGIN_TOP);
        assert_eq!(a.width, 400.0 - MARGIN_LEFT - MARGIN_RIGHT);
        assert_eq!(a.height, 400.0 - MARGIN_TOP - MARGIN_BOTTOM);
    }

    #[test]
    fn risk_endpoints_land_on_the_plot_edges() {
        let a = area();
        assert!((a.risk_to_x(RISK_MIN) - a.origin_x).abs() < 1e-12);
        assert!((a.risk_to_x(RISK_MAX) - (a.origin_x + a.width)).abs() < 1e-12);
    }

    #[test]
    fn uncertainty_is_inverted_vertically() {
        let a = area();
        // Zero uncertainty at the bottom, ceiling at the top
        assert!((a.unc_to_y(UNC_MIN) - (a.origin_y + a.height)).abs() < 1e-12);
        assert!((a.unc_to_y(UNC_MAX) - a.origin_y).abs() < 1e-12);
    }

    #[test]
    fn maps_are_monotonic_across_the_full_range() {
        let a = area();
        let mut prev_x = f64::NEG_INFINITY;
        let mut prev_y = f64::INFINITY;
        for i in 0..=100 {
            let t = i as f64 / 100.0;
            let x = a.risk_to_x(RISK_MIN + t * (RISK_MAX - RISK_MIN));
            let y = a.unc_to_y(UNC_MIN + t * (UNC_MAX - UNC_MIN));
            assert!(x > prev_x);
            assert!(y < prev_y); // inverted axis: Y strictly decreases
            prev_x = x;
            prev_y = y;
        }
    }
}
