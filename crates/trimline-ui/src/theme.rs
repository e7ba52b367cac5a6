//! Trim timeline palette and styling.

use egui::{Color32, Rounding, Stroke};
use trimline_track::ItemColor;

use crate::geometry::Highlight;

/// Colors and metrics shared by the timeline view.
pub struct Theme;

impl Theme {
    // ── Metrics ────────────────────────────────────────────────
    pub const FONT_LABEL: f32 = 15.0;
    pub const HANDLE_RADIUS: f32 = 3.0;
    pub const BORDER_WIDTH: f32 = 1.0;
    pub const CENTER_LINE_WIDTH: f32 = 2.0;
    /// Vertical breathing room around the item row.
    pub const ROW_PADDING: f32 = 24.0;

    // ── Backgrounds ────────────────────────────────────────────
    pub const fn bg() -> Color32 {
        Color32::from_rgb(211, 211, 211)
    }
    pub const fn item_label() -> Color32 {
        Color32::WHITE
    }

    // ── Trim decorations ───────────────────────────────────────
    pub const fn handle_idle() -> Color32 {
        Color32::WHITE
    }
    pub const fn handle_active() -> Color32 {
        Color32::from_rgb(255, 204, 0)
    }
    pub const fn content_border() -> Color32 {
        Color32::BLACK
    }
    pub const fn center_line() -> Color32 {
        Color32::from_rgb(220, 40, 40)
    }
    /// Dim veil over the parts of the row outside the trim selection.
    pub const fn outside_veil() -> Color32 {
        Color32::from_rgba_premultiplied(0, 0, 0, 110)
    }
    pub const fn selected_item() -> Color32 {
        Color32::from_rgb(255, 255, 255)
    }

    // ── Color helpers ──────────────────────────────────────────

    /// Handle and boundary fill for a highlight state.
    pub const fn handle(highlight: Highlight) -> Color32 {
        match highlight {
            Highlight::Idle => Self::handle_idle(),
            Highlight::Active => Self::handle_active(),
        }
    }

    pub const fn item(color: ItemColor) -> Color32 {
        Color32::from_rgb(color.r, color.g, color.b)
    }

    pub fn border_stroke() -> Stroke {
        Stroke::new(Self::BORDER_WIDTH, Self::content_border())
    }

    pub fn handle_rounding() -> Rounding {
        Rounding::same(Self::HANDLE_RADIUS)
    }

    // ── Theme application ──────────────────────────────────────

    /// Light visuals with the timeline background as panel fill.
    pub fn apply(ctx: &egui::Context) {
        let mut style = (*ctx.style()).clone();
        style.visuals = egui::Visuals::light();
        style.visuals.panel_fill = Self::bg();
        style.visuals.extreme_bg_color = Self::bg();
        ctx.set_style(style);
    }
}
