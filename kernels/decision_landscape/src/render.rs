// Full-canvas repaint of the decision landscape
//
// Layer order is fixed: regions, axes/grid, threshold guides, points.
// Every update repaints the whole canvas; with bounded regions and a
// bounded point history each pass is cheap enough that partial redraws
// would buy nothing.

use wasm_bindgen::JsValue;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use crate::coordinates::PlotArea;
use crate::regions::{region_model, RegionRect};
use crate::store::{history_opacity, PointStore};
use crate::theme::{dot_color, grid_color, region_colors, text_color, Theme};
use crate::types::{PlotPoint, T_AUTH, T_DECLINE, T_ESCALATE, UNC_MAX, U_THRESHOLD};

const TAU: f64 = std::f64::consts::TAU;

// Dot geometry (CSS px)
const HISTORY_DOT_RADIUS: f64 = 4.0;
const CURRENT_DOT_RADIUS: f64 = 5.0;
const HALO_RADIUS: f64 = 14.0;
const HISTORY_GLOW_BLUR: f64 = 4.0;
const CURRENT_GLOW_BLUR: f64 = 15.0;

const TICK_FONT: &str = "11px \"JetBrains Mono\", monospace";
const TITLE_FONT: &str = "12px \"Inter\", sans-serif";

// Repaint everything. Draw failures on individual canvas ops are
// best-effort; the canvas API only faults on malformed inputs we never
// produce.
pub fn render(
    canvas: &HtmlCanvasElement,
    ctx: &CanvasRenderingContext2d,
    store: &PointStore,
    theme: Theme,
) {
    let size = resize_to_square(canvas, ctx);
    ctx.clear_rect(0.0, 0.0, size, size);

    let area = PlotArea::for_square_canvas(size);
    draw_regions(ctx, &area, theme);
    draw_axes(ctx, &area, theme);
    draw_threshold_guides(ctx, &area, theme);
    draw_points(ctx, &area, store);
}

// ============================================================================
// CANVAS SIZING
// ============================================================================

// Force the canvas square at its displayed width, with the backing store
// scaled to physical pixels. Returns the square's side in CSS pixels.
//
// The inline style is dropped before measuring so the page's CSS can
// recompute a 100% width, then locked to the measured square afterwards.
fn resize_to_square(canvas: &HtmlCanvasElement, ctx: &CanvasRenderingContext2d) -> f64 {
    let dpr = device_pixel_ratio();

    let style = canvas.style();
    style.remove_property("width").ok();
    style.remove_property("height").ok();

    let size = canvas.get_bounding_client_rect().width();

    canvas.set_width((size * dpr) as u32);
    canvas.set_height((size * dpr) as u32);
    // Setting width/height reset the context transform; re-apply the DPR
    // scale so drawing ops below use CSS pixels
    ctx.set_transform(dpr, 0.0, 0.0, dpr, 0.0, 0.0).ok();

    style.set_property("width", &format!("{size}px")).ok();
    style.set_property("height", &format!("{size}px")).ok();

    size
}

fn device_pixel_ratio() -> f64 {
    web_sys::window().map(|w| w.device_pixel_ratio()).unwrap_or(1.0)
}

// ============================================================================
// LAYER 1: DECISION REGIONS
// ============================================================================

fn draw_regions(ctx: &CanvasRenderingContext2d, area: &PlotArea, theme: Theme) {
    ctx.set_line_width(1.0);
    for region in region_model() {
        let colors = region_colors(theme, region.label);
        ctx.set_fill_style_str(colors.fill);
        ctx.set_stroke_style_str(colors.border);
        for rect in &region.rects {
            trace_rect(ctx, area, rect);
            ctx.fill();
            ctx.stroke();
        }
    }
}

fn trace_rect(ctx: &CanvasRenderingContext2d, area: &PlotArea, rect: &RegionRect) {
    let x0 = area.risk_to_x(rect.risk_min);
    let x1 = area.risk_to_x(rect.risk_max);
    let y_bottom = area.unc_to_y(rect.unc_min);
    let y_top = area.unc_to_y(rect.unc_max);

    ctx.begin_path();
    ctx.move_to(x0, y_bottom);
    ctx.line_to(x1, y_bottom);
    ctx.line_to(x1, y_top);
    ctx.line_to(x0, y_top);
    ctx.close_path();
}

// ============================================================================
// LAYER 2: AXES AND GRID
// ============================================================================

fn draw_axes(ctx: &CanvasRenderingContext2d, area: &PlotArea, theme: Theme) {
    ctx.set_stroke_style_str(grid_color(theme));
    ctx.set_line_width(1.0);
    ctx.set_fill_style_str(text_color(theme));

    // Risk ticks every 0.2 with vertical grid lines
    ctx.set_font(TICK_FONT);
    ctx.set_text_align("center");
    ctx.set_text_baseline("top");
    for i in 0..=5 {
        let risk = i as f64 * 0.2;
        let px = area.risk_to_x(risk);
        ctx.fill_text(&format!("{risk:.1}"), px, area.origin_y + area.height + 6.0)
            .ok();

        ctx.begin_path();
        ctx.move_to(px, area.origin_y);
        ctx.line_to(px, area.origin_y + area.height);
        ctx.stroke();
    }

    ctx.set_font(TITLE_FONT);
    ctx.fill_text(
        "Risk Score →",
        area.origin_x + area.width / 2.0,
        area.origin_y + area.height + 24.0,
    )
    .ok();

    // Uncertainty ticks every 0.02 with horizontal grid lines
    ctx.set_font(TICK_FONT);
    ctx.set_text_align("right");
    ctx.set_text_baseline("middle");
    for i in 0..=5 {
        let unc = i as f64 * 0.02;
        let py = area.unc_to_y(unc);
        ctx.fill_text(&format!("{unc:.2}"), area.origin_x - 6.0, py).ok();

        ctx.begin_path();
        ctx.move_to(area.origin_x, py);
        ctx.line_to(area.origin_x + area.width, py);
        ctx.stroke();
    }

    // Rotated uncertainty title along the left edge
    ctx.save();
    ctx.translate(14.0, area.origin_y + area.height / 2.0).ok();
    ctx.rotate(-std::f64::consts::FRAC_PI_2).ok();
    ctx.set_text_align("center");
    ctx.set_font(TITLE_FONT);
    ctx.fill_text("Uncertainty ↑", 0.0, 0.0).ok();
    ctx.restore();
}

// ============================================================================
// LAYER 3: THRESHOLD GUIDES
// ============================================================================

fn draw_threshold_guides(ctx: &CanvasRenderingContext2d, area: &PlotArea, theme: Theme) {
    let dash = js_sys::Array::of2(&JsValue::from_f64(4.0), &JsValue::from_f64(4.0));
    ctx.set_line_dash(&dash).ok();
    ctx.set_stroke_style_str(grid_color(theme));
    ctx.set_line_width(1.0);

    // Vertical guides at the risk thresholds
    for t in [T_AUTH, T_ESCALATE, T_DECLINE] {
        let px = area.risk_to_x(t);
        ctx.begin_path();
        ctx.move_to(px, area.origin_y);
        ctx.line_to(px, area.origin_y + area.height);
        ctx.stroke();
    }

    // Horizontal guide at the uncertainty threshold
    let py = area.unc_to_y(U_THRESHOLD);
    ctx.begin_path();
    ctx.move_to(area.origin_x, py);
    ctx.line_to(area.origin_x + area.width, py);
    ctx.stroke();

    ctx.set_line_dash(&js_sys::Array::new()).ok();
}

// ============================================================================
// LAYER 4: POINTS
// ============================================================================

// Pixel position for a point. Uncertainty is clamped to the display
// ceiling here and only here: the stored value stays raw so a point still
// classifies by its true uncertainty even when it draws pinned to the top
// edge of the plot.
pub fn plot_position(area: &PlotArea, point: &PlotPoint) -> (f64, f64) {
    (
        area.risk_to_x(point.risk),
        area.unc_to_y(point.uncertainty.min(UNC_MAX)),
    )
}

fn draw_points(ctx: &CanvasRenderingContext2d, area: &PlotArea, store: &PointStore) {
    // History dots, newest first, fading with age
    let n = store.history.len();
    for (i, point) in store.history.iter().enumerate() {
        let color = dot_color(point.decision);
        let (px, py) = plot_position(area, point);

        ctx.begin_path();
        ctx.arc(px, py, HISTORY_DOT_RADIUS, 0.0, TAU).ok();
        ctx.set_fill_style_str(color);
        ctx.set_global_alpha(history_opacity(i, n));
        ctx.set_shadow_blur(HISTORY_GLOW_BLUR);
        ctx.set_shadow_color(color);
        ctx.fill();
        ctx.set_global_alpha(1.0);
        ctx.set_shadow_blur(0.0);
    }

    // Current point on top: halo, glow, white outline
    if let Some(point) = &store.current {
        let color = dot_color(point.decision);
        let (px, py) = plot_position(area, point);

        if let Ok(halo) = ctx.create_radial_gradient(px, py, 2.0, px, py, HALO_RADIUS) {
            halo.add_color_stop(0.0, color).ok();
            halo.add_color_stop(1.0, "transparent").ok();
            ctx.begin_path();
            ctx.arc(px, py, HALO_RADIUS, 0.0, TAU).ok();
            ctx.set_fill_style_canvas_gradient(&halo);
            ctx.fill();
        }

        ctx.begin_path();
        ctx.arc(px, py, CURRENT_DOT_RADIUS, 0.0, TAU).ok();
        ctx.set_fill_style_str(color);
        ctx.set_shadow_blur(CURRENT_GLOW_BLUR);
        ctx.set_shadow_color(color);
        ctx.fill();
        ctx.set_stroke_style_str("#fff");
        ctx.set_line_width(1.5);
        ctx.stroke();
        ctx.set_shadow_blur(0.0);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::regions::classify;
    use crate::types::DecisionLabel;

    #[test]
    fn plot_position_clamps_only_the_drawn_uncertainty() {
        let area = PlotArea::for_square_canvas(400.0);
        let point = PlotPoint::new(0.70, 0.14, Some(DecisionLabel::EscalateInvest));

        // Drawn pinned to the top edge of the plot
        let (_, py) = plot_position(&area, &point);
        assert!((py - area.origin_y).abs() < 1e-12);

        // Classification still sees the raw value
        assert_eq!(classify(point.risk, point.uncertainty), DecisionLabel::EscalateInvest);
    }

    #[test]
    fn in_range_points_land_inside_the_plot() {
        let area = PlotArea::for_square_canvas(400.0);
        let point = PlotPoint::new(0.10, 0.01, Some(DecisionLabel::Approve));
        let (px, py) = plot_position(&area, &point);
        assert!(px > area.origin_x && px < area.origin_x + area.width);
        assert!(py > area.origin_y && py < area.origin_y + area.height);
    }
}
