// kernels/decision_landscape/src/lib.rs

// Decision Landscape Visualization Core
//
// Renders a 2D risk × uncertainty landscape: five colored decision regions
// derived from the fraud engine's routing thresholds, with a scrolling
// history of recently evaluated transactions plotted on top. This crate
// only displays (risk, uncertainty, decision) triples; the prediction
// engine behind the proxy computes them.

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

pub mod coordinates;
pub mod regions;
pub mod render;
pub mod store;
pub mod theme;
pub mod types;

use store::PointStore;
use theme::Theme;
use types::{DecisionLabel, PlotPoint};

// ============================================================================
// WASM SURFACE
// ============================================================================

// The landscape bound to one canvas. Owns the point store outright, so the
// page holds a single handle instead of the module carrying hidden global
// state. Synchronous throughout: every method runs a full repaint to
// completion before returning.
#[wasm_bindgen]
pub struct LandscapeView {
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
    store: PointStore,
}

#[wasm_bindgen]
impl LandscapeView {
    // Bind to a canvas and paint the empty landscape.
    #[wasm_bindgen(constructor)]
    pub fn new(canvas: HtmlCanvasElement) -> Result<LandscapeView, JsValue> {
        let ctx = canvas
            .get_context("2d")?
            .ok_or_else(|| JsValue::from_str("canvas has no 2d context"))?
            .dyn_into::<CanvasRenderingContext2d>()?;

        let view = LandscapeView {
            canvas,
            ctx,
            store: PointStore::new(),
        };
        view.render();
        Ok(view)
    }

    // Push a newly evaluated transaction and repaint. `decision` takes the
    // engine's wire spelling (e.g. "STEP_UP_AUTH"); an unrecognized label
    // still plots, in the fallback marker color.
    pub fn plot_point(&mut self, risk: f64, uncertainty: f64, decision: &str) {
        let point = PlotPoint::new(risk, uncertainty, DecisionLabel::parse(decision));
        self.store.push(point);
        self.render();
    }

    // Drop the current point and all history, then repaint the empty
    // landscape.
    pub fn clear_history(&mut self) {
        self.store.clear();
        self.render();
    }

    // Full repaint. Also the hook the page calls on theme toggles and
    // container resizes; the theme flag is re-read here every time so the
    // latest toggle wins.
    pub fn render(&self) {
        render::render(&self.canvas, &self.ctx, &self.store, Theme::resolve());
    }
}
