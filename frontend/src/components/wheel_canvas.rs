use std::f64::consts::PI;

use wasm_bindgen::JsCast;
use web_sys::{window, CanvasRenderingContext2d, HtmlCanvasElement};
use yew::prelude::*;
use wof_shared::shared_wheel_game::{SpinOutcome, WheelAssignment};

use crate::styles;

const SLICE_COLORS: [&str; 2] = ["#f97316", "#8b5cf6"];
const REVEALED_WIN_COLOR: &str = "#16a34a";
const REVEALED_MISS_COLOR: &str = "#6b7280";

#[derive(Properties, PartialEq)]
pub struct WheelCanvasProps {
    pub assignment: WheelAssignment,
    pub revealed: Option<(usize, SpinOutcome)>,
    pub rotation_deg: i32,
    pub is_spinning: bool,
}

fn is_dark_mode() -> bool {
    window()
        .and_then(|w| w.document())
        .and_then(|d| d.document_element())
        .map(|el| el.class_list().contains("dark"))
        .unwrap_or(false)
}

fn slice_label(slice: usize, revealed: Option<(usize, SpinOutcome)>) -> String {
    match revealed {
        Some((shown, outcome)) if shown == slice => outcome.label().to_string(),
        _ => (slice + 1).to_string(),
    }
}

/// Slice 0 is drawn centred at twelve o'clock; rotating by `slice * -30deg`
/// brings that slice under the pointer.
fn draw_wheel(canvas: &HtmlCanvasElement, props: &WheelCanvasProps) {
    let Some(context) = canvas
        .get_context("2d")
        .ok()
        .flatten()
        .and_then(|ctx| ctx.dyn_into::<CanvasRenderingContext2d>().ok())
    else {
        log::warn!("2d canvas context unavailable, wheel not drawn");
        return;
    };

    let width = canvas.width() as f64;
    let height = canvas.height() as f64;
    let center_x = width / 2.0;
    let center_y = height / 2.0;
    let radius = width.min(height) / 2.0 - 20.0;
    let dark = is_dark_mode();

    context.clear_rect(0.0, 0.0, width, height);

    // Outer glow, brighter while spinning
    let glow = if props.is_spinning { 0.25 } else { 0.15 };
    context.begin_path();
    context.set_fill_style_str(&format!("rgba(100, 130, 255, {})", glow));
    let _ = context.arc(center_x, center_y, radius + 15.0, 0.0, 2.0 * PI);
    context.fill();

    context.save();
    let _ = context.translate(center_x, center_y);
    let _ = context.rotate(props.rotation_deg as f64 * PI / 180.0);

    let slices = props.assignment.len();
    let sweep = 2.0 * PI / slices as f64;
    for slice in 0..slices {
        let middle = -PI / 2.0 + slice as f64 * sweep;
        let start = middle - sweep / 2.0;
        let end = middle + sweep / 2.0;

        let color = match props.revealed {
            Some((shown, SpinOutcome::Win)) if shown == slice => REVEALED_WIN_COLOR,
            Some((shown, SpinOutcome::TryAgain)) if shown == slice => REVEALED_MISS_COLOR,
            _ => SLICE_COLORS[slice % SLICE_COLORS.len()],
        };
        context.begin_path();
        context.set_fill_style_str(color);
        context.move_to(0.0, 0.0);
        let _ = context.arc(0.0, 0.0, radius, start, end);
        context.close_path();
        context.fill();

        context.set_stroke_style_str(if dark { "rgba(255, 255, 255, 0.7)" } else { "rgba(255, 255, 255, 0.9)" });
        context.set_line_width(2.0);
        context.stroke();

        context.save();
        let _ = context.rotate(middle);
        let _ = context.translate(radius * 0.68, 0.0);
        let _ = context.rotate(PI / 2.0);
        context.set_fill_style_str("#ffffff");
        context.set_font("bold 16px 'Segoe UI', Roboto, system-ui, sans-serif");
        context.set_text_align("center");
        context.set_text_baseline("middle");
        let _ = context.fill_text(&slice_label(slice, props.revealed), 0.0, 0.0);
        context.restore();
    }
    context.restore();

    // Hub
    context.begin_path();
    context.set_fill_style_str(if dark { "#2d3142" } else { "#ffffff" });
    let _ = context.arc(center_x, center_y, radius * 0.15, 0.0, 2.0 * PI);
    context.fill();
}

#[function_component(WheelCanvas)]
pub fn wheel_canvas(props: &WheelCanvasProps) -> Html {
    let canvas_ref = use_node_ref();

    {
        let canvas_ref = canvas_ref.clone();
        let snapshot = WheelCanvasProps {
            assignment: props.assignment.clone(),
            revealed: props.revealed,
            rotation_deg: props.rotation_deg,
            is_spinning: props.is_spinning,
        };
        use_effect_with(
            (props.assignment.clone(), props.revealed, props.rotation_deg, props.is_spinning),
            move |_| {
                if let Some(canvas) = canvas_ref.cast::<HtmlCanvasElement>() {
                    draw_wheel(&canvas, &snapshot);
                }
                || ()
            },
        );
    }

    html! {
        <div id="wof-wheel-wr" class={styles::WHEEL_WRAPPER}>
            <div id="wof-wheel-pointer" class={styles::WHEEL_POINTER}>{"\u{25BC}"}</div>
            <div class={classes!(props.is_spinning.then_some(styles::WHEEL_SPINNING))}>
                <canvas id="wof-wheel" ref={canvas_ref} width="400" height="400" class="w-full h-auto" />
            </div>
        </div>
    }
}
