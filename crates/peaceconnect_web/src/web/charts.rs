//! Canvas rendering for the dashboard charts.

use std::f64::consts::PI;
use std::rc::Rc;

use peaceconnect::bootstrap::Wired;
use peaceconnect::charts::{
    control_points, dashboard_charts, doughnut_arcs, ChartKind, ChartSpec, Dataset, LegendPosition,
    PlotArea, GRID_COLOR,
};
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, Event, HtmlCanvasElement, HtmlSelectElement};

use super::dom;
use super::error::WebError;

const TEXT_COLOR: &str = "#6b7280";
const FONT: &str = "12px system-ui, sans-serif";
const Y_TICKS: usize = 5;

fn context_2d(canvas: &HtmlCanvasElement) -> Result<CanvasRenderingContext2d, WebError> {
    canvas
        .get_context("2d")
        .map_err(WebError::js("getContext"))?
        .ok_or(WebError::Missing("2d context"))?
        .dyn_into::<CanvasRenderingContext2d>()
        .map_err(|_| WebError::Cast("CanvasRenderingContext2d"))
}

/// Match the backing store to the laid-out size of the parent.
fn fit_to_parent(canvas: &HtmlCanvasElement) {
    if let Some(parent) = canvas.parent_element() {
        let (w, h) = (parent.client_width(), parent.client_height());
        if w > 0 && h > 0 {
            canvas.set_width(w as u32);
            canvas.set_height(h as u32);
        }
    }
}

fn draw_legend(
    ctx: &CanvasRenderingContext2d,
    spec: &ChartSpec,
    w: f64,
    h: f64,
) -> Result<(), WebError> {
    let items = spec.legend_items();
    if items.is_empty() {
        return Ok(());
    }
    let box_size = 12.0;
    let widths: Vec<f64> = items
        .iter()
        .map(|(label, _)| box_size + 6.0 + label.chars().count() as f64 * 7.0 + 16.0)
        .collect();
    let total: f64 = widths.iter().sum();
    let y = match spec.legend {
        LegendPosition::Top => 8.0 + PlotArea::LEGEND_HEIGHT / 2.0,
        LegendPosition::Bottom => h - 8.0 - PlotArea::LEGEND_HEIGHT / 2.0,
    };

    ctx.set_font(FONT);
    ctx.set_text_align("left");
    ctx.set_text_baseline("middle");
    let mut x = ((w - total) / 2.0).max(0.0);
    for ((label, color), width) in items.iter().zip(&widths) {
        ctx.set_fill_style_str(color);
        ctx.fill_rect(x, y - box_size / 2.0, box_size, box_size);
        ctx.set_fill_style_str(TEXT_COLOR);
        ctx.fill_text(label, x + box_size + 6.0, y)
            .map_err(WebError::js("fillText"))?;
        x += width;
    }
    Ok(())
}

/// Horizontal grid with y tick labels, and category labels under the axis.
fn draw_axes(
    ctx: &CanvasRenderingContext2d,
    area: &PlotArea,
    labels: &[&str],
    y_max: f64,
) -> Result<(), WebError> {
    ctx.set_stroke_style_str(GRID_COLOR);
    ctx.set_line_width(1.0);
    ctx.set_font(FONT);
    ctx.set_fill_style_str(TEXT_COLOR);
    ctx.set_text_align("right");
    ctx.set_text_baseline("middle");
    for i in 0..=Y_TICKS {
        let value = y_max * i as f64 / Y_TICKS as f64;
        let y = area.y_for(value, y_max);
        ctx.begin_path();
        ctx.move_to(area.left, y);
        ctx.line_to(area.right, y);
        ctx.stroke();
        ctx.fill_text(&(value.round() as i64).to_string(), area.left - 6.0, y)
            .map_err(WebError::js("fillText"))?;
    }

    ctx.set_text_align("center");
    ctx.set_text_baseline("top");
    for (i, label) in labels.iter().enumerate() {
        ctx.fill_text(label, area.x_for(i, labels.len()), area.bottom + 6.0)
            .map_err(WebError::js("fillText"))?;
    }
    Ok(())
}

/// Smoothed path through `points`; the caller strokes or fills it.
fn trace_curve(
    ctx: &CanvasRenderingContext2d,
    points: &[(f64, f64)],
    tension: f64,
    area: &PlotArea,
) {
    let clamp = |(x, y): (f64, f64)| (x, y.clamp(area.top, area.bottom));
    let handles: Vec<_> = (0..points.len())
        .map(|i| {
            let prev = points[i.saturating_sub(1)];
            let next = points[(i + 1).min(points.len() - 1)];
            let (before, after) = control_points(prev, points[i], next, tension);
            (clamp(before), clamp(after))
        })
        .collect();

    ctx.move_to(points[0].0, points[0].1);
    for i in 1..points.len() {
        let (_, c1) = handles[i - 1];
        let (c2, _) = handles[i];
        ctx.bezier_curve_to(c1.0, c1.1, c2.0, c2.1, points[i].0, points[i].1);
    }
}

fn draw_line(ctx: &CanvasRenderingContext2d, spec: &ChartSpec, area: &PlotArea, y_max: f64) {
    let n = spec.labels.len();
    for ds in &spec.datasets {
        let points: Vec<(f64, f64)> = ds
            .data
            .iter()
            .enumerate()
            .map(|(i, &v)| (area.x_for(i, n), area.y_for(v, y_max)))
            .collect();
        let (Some(first), Some(last)) = (points.first(), points.last()) else {
            continue;
        };

        if let Some(fill) = ds.fill {
            ctx.begin_path();
            trace_curve(ctx, &points, ds.tension, area);
            ctx.line_to(last.0, area.bottom);
            ctx.line_to(first.0, area.bottom);
            ctx.close_path();
            ctx.set_fill_style_str(fill);
            ctx.fill();
        }

        ctx.begin_path();
        trace_curve(ctx, &points, ds.tension, area);
        ctx.set_stroke_style_str(ds.color);
        ctx.set_line_width(2.0);
        ctx.stroke();

        ctx.set_fill_style_str(ds.color);
        for &(x, y) in &points {
            ctx.begin_path();
            let _ = ctx.arc(x, y, 3.0, 0.0, 2.0 * PI);
            ctx.fill();
        }
    }
}

fn draw_bars(ctx: &CanvasRenderingContext2d, spec: &ChartSpec, area: &PlotArea, y_max: f64) {
    let n = spec.labels.len().max(1);
    let m = spec.datasets.len().max(1);
    let slot = area.width() / n as f64;
    let group = slot * 0.8;
    let bar = group / m as f64;
    for (j, ds) in spec.datasets.iter().enumerate() {
        ctx.set_fill_style_str(ds.color);
        for (i, &v) in ds.data.iter().enumerate() {
            let x = area.left + slot * i as f64 + (slot - group) / 2.0 + bar * j as f64;
            let y = area.y_for(v, y_max);
            ctx.fill_rect(x + 1.0, y, (bar - 2.0).max(1.0), area.bottom - y);
        }
    }
}

fn draw_doughnut(
    ctx: &CanvasRenderingContext2d,
    ds: &Dataset,
    area: &PlotArea,
) -> Result<(), WebError> {
    let cx = (area.left + area.right) / 2.0;
    let cy = (area.top + area.bottom) / 2.0;
    let outer = (area.width().min(area.height()) / 2.0).max(1.0);
    let inner = outer * 0.5;
    for ((start, end), color) in doughnut_arcs(&ds.data).into_iter().zip(&ds.slice_colors) {
        ctx.begin_path();
        ctx.arc(cx, cy, outer, start, end).map_err(WebError::js("arc"))?;
        ctx.arc_with_anticlockwise(cx, cy, inner, end, start, true)
            .map_err(WebError::js("arc"))?;
        ctx.close_path();
        ctx.set_fill_style_str(color);
        ctx.fill();
        ctx.set_stroke_style_str("#ffffff");
        ctx.set_line_width(2.0);
        ctx.stroke();
    }
    Ok(())
}

pub(crate) fn draw_chart(canvas: &HtmlCanvasElement, spec: &ChartSpec) -> Result<(), WebError> {
    let ctx = context_2d(canvas)?;
    let (w, h) = (canvas.width() as f64, canvas.height() as f64);
    ctx.clear_rect(0.0, 0.0, w, h);

    let area = PlotArea::for_chart(spec.kind, spec.legend, w, h);
    draw_legend(&ctx, spec, w, h)?;
    match spec.kind {
        ChartKind::Line | ChartKind::Bar => {
            let y_max = spec.y_axis_max();
            draw_axes(&ctx, &area, &spec.labels, y_max)?;
            if spec.kind == ChartKind::Line {
                draw_line(&ctx, spec, &area, y_max);
            } else {
                draw_bars(&ctx, spec, &area, y_max);
            }
        }
        ChartKind::Doughnut => {
            if let Some(ds) = spec.datasets.first() {
                draw_doughnut(&ctx, ds, &area)?;
            }
        }
    }
    Ok(())
}

/// Charts present on the page, redrawn on resize.
struct ChartController {
    charts: Vec<(HtmlCanvasElement, ChartSpec)>,
}

impl ChartController {
    fn redraw(&self) {
        for (canvas, spec) in &self.charts {
            fit_to_parent(canvas);
            if let Err(e) = draw_chart(canvas, spec) {
                log::warn!("{}: {e}", spec.canvas_id);
            }
        }
    }
}

pub(crate) fn init_charts() -> Result<Wired, WebError> {
    let charts: Vec<_> = dashboard_charts()
        .into_iter()
        .filter_map(|spec| dom::by_id::<HtmlCanvasElement>(spec.canvas_id).map(|c| (c, spec)))
        .collect();
    if charts.is_empty() {
        return Ok(Wired::Skipped("projectsChart"));
    }
    let controller = Rc::new(ChartController { charts });
    controller.redraw();

    let on_resize = Rc::clone(&controller);
    dom::listen(&dom::window()?, "resize", move |_: Event| {
        on_resize.redraw();
    })?;

    if let Some(filter) = dom::by_id::<HtmlSelectElement>("projectsChartFilter") {
        let select = filter.clone();
        dom::listen(&filter, "change", move |_: Event| {
            log::info!("Filtre changé: {}", select.value());
        })?;
    }
    Ok(Wired::Attached)
}
