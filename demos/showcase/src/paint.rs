//! Bridges theme style state into egui paint types.
//!
//! Widgets store [peniko::Color] values pushed by the theme applier;
//! everything here converts those into the egui equivalents right
//! before drawing.

use egui::{Color32, CornerRadius, Stroke};
use neontron_widgets::frame::FrameStyle;
use neontron_widgets::switch::Switch;
use peniko::Color;

/// Convert a theme color into an egui color.
pub fn color32(color: Color) -> Color32 {
    let rgba = color.to_rgba8();
    Color32::from_rgba_unmultiplied(rgba.r, rgba.g, rgba.b, rgba.a)
}

/// Convert an optional theme color, falling back when the theme never
/// supplied one.
pub fn color32_or(color: Option<Color>, fallback: Color32) -> Color32 {
    color.map(color32).unwrap_or(fallback)
}

/// Convert a corner radius dimension. Oversized radii (the theme uses
/// 1000 for "fully round") saturate.
pub fn corner_radius(radius: f32) -> CornerRadius {
    CornerRadius::same(radius.clamp(0.0, 255.0) as u8)
}

/// A border stroke, or none when the width is zero or unstyled.
pub fn stroke(width: f32, color: Option<Color>) -> Stroke {
    match color {
        Some(color) if width > 0.0 => Stroke::new(width, color32(color)),
        _ => Stroke::NONE,
    }
}

/// An egui frame carrying a [FrameStyle]'s fill, border and rounding.
pub fn styled_frame(style: &FrameStyle, fill: Option<Color>) -> egui::Frame {
    egui::Frame::default()
        .fill(color32_or(fill, Color32::TRANSPARENT))
        .stroke(stroke(style.border_width, style.border_color))
        .corner_radius(corner_radius(style.corner_radius))
        .inner_margin(egui::Margin::same(12))
}

/// Draw a toggle switch from the widget's themed style state.
///
/// Hand-painted because egui ships no switch; the geometry follows the
/// usual pill-track-plus-grab shape.
pub fn toggle_switch(ui: &mut egui::Ui, on: &mut bool, switch: &Switch) -> egui::Response {
    let style = switch.style();
    let desired_size = egui::vec2(44.0, 22.0);
    let (rect, mut response) =
        ui.allocate_exact_size(desired_size, egui::Sense::click());
    if response.clicked() && !switch.disabled() {
        *on = !*on;
        response.mark_changed();
    }

    if ui.is_rect_visible(rect) {
        let how_on = ui.ctx().animate_bool_responsive(response.id, *on);
        let track = if *on {
            color32_or(style.progress_color, ui.visuals().selection.bg_fill)
        } else {
            color32_or(style.fg_color, ui.visuals().widgets.inactive.bg_fill)
        };
        let radius = 0.5 * rect.height();
        ui.painter().rect_filled(rect, radius, track);

        let grab = if response.hovered() {
            style.button_hover_color.or(style.button_color)
        } else {
            style.button_color
        };
        let x = egui::lerp((rect.left() + radius)..=(rect.right() - radius), how_on);
        ui.painter().circle_filled(
            egui::pos2(x, rect.center().y),
            0.75 * radius,
            color32_or(grab, Color32::WHITE),
        );
    }

    response
}
