//! egui rendering and input adapter for [`TimelineWidget`].

use std::time::Instant;

use egui::{pos2, vec2, Align2, FontId, Pos2, Response, Sense, Stroke, Ui};
use glam::Vec2;
use tracing::debug;
use trimline_core::{Rect, Result, Size, TrimEdge, TrimlineConfig};
use trimline_track::{PinchPhase, ScrollAnimation, TrackCollaborator, VirtualRow};

use crate::drag::DragPhase;
use crate::gesture::GestureTarget;
use crate::theme::Theme;
use crate::widget::TimelineWidget;

/// Seconds without zoom input after which a pinch counts as ended.
const PINCH_END_GRACE: f64 = 0.15;

/// Pointer drag currently owned by the view.
#[derive(Debug, Clone, Copy, PartialEq)]
enum ActiveDrag {
    Handle { edge: TrimEdge, translation: f32 },
    Scroll,
}

#[derive(Debug, Clone, Copy, PartialEq)]
struct PinchState {
    scale: f32,
    last_input: f64,
}

/// Screen placement of content coordinates for one frame.
#[derive(Debug, Clone, Copy)]
struct ContentFrame {
    origin: Pos2,
}

impl ContentFrame {
    fn to_content(self, p: Pos2) -> Vec2 {
        Vec2::new(p.x - self.origin.x, p.y - self.origin.y)
    }

    fn to_screen(self, r: Rect) -> egui::Rect {
        let (min, max) = (r.min(), r.max());
        egui::Rect::from_min_max(
            pos2(self.origin.x + min.x, self.origin.y + min.y),
            pos2(self.origin.x + max.x, self.origin.y + max.y),
        )
    }
}

/// Interactive timeline drawn with egui over a headless [`VirtualRow`].
pub struct TimelineView {
    widget: TimelineWidget<VirtualRow>,
    drag: Option<ActiveDrag>,
    pinch: Option<PinchState>,
}

impl TimelineView {
    pub fn new(config: TrimlineConfig) -> Result<Self> {
        let row = VirtualRow::new(
            Size::new(config.track.item_width, config.track.item_height),
            0.0,
            config.scroll.animation_speed,
        );
        Ok(Self {
            widget: TimelineWidget::new(config, row)?,
            drag: None,
            pinch: None,
        })
    }

    pub fn widget(&self) -> &TimelineWidget<VirtualRow> {
        &self.widget
    }

    pub fn widget_mut(&mut self) -> &mut TimelineWidget<VirtualRow> {
        &mut self.widget
    }

    /// Lay out, handle input and paint one frame.
    pub fn show(&mut self, ui: &mut Ui) -> Response {
        let item_height = self.widget.track().item_height();
        let desired = vec2(ui.available_width(), item_height + 2.0 * Theme::ROW_PADDING);
        let (response, painter) = ui.allocate_painter(desired, Sense::click_and_drag());
        let rect = response.rect;

        if self.widget.row_mut().set_viewport_width(rect.width()) {
            let size = self.widget.row().content_size();
            self.widget.content_size_changed(size);
            self.widget.recenter(ScrollAnimation::Immediate);
        }
        let dt = ui.input(|i| i.stable_dt).min(0.1);
        let animating = self.widget.row_mut().tick(dt);

        let frame = ContentFrame {
            origin: pos2(
                rect.left() - self.widget.row().content_offset(),
                rect.top() + Theme::ROW_PADDING,
            ),
        };

        let press_origin = ui.input(|i| i.pointer.press_origin());
        self.handle_pointer(&response, press_origin, frame);
        self.handle_zoom(ui, &response);

        let painter = painter.with_clip_rect(rect);
        painter.rect_filled(rect, 0.0, Theme::bg());
        self.paint_items(&painter, frame);
        self.paint_trim(&painter, frame);
        self.paint_center_indicator(&painter, rect, frame);

        if animating || self.drag.is_some() || self.pinch.is_some() {
            ui.ctx().request_repaint();
        }
        response
    }

    // ── Input ──────────────────────────────────────────────────

    /// A drag is only recognized once the pointer left the click radius, so
    /// the gesture is routed from where the press happened.
    fn handle_pointer(&mut self, response: &Response, press_origin: Option<Pos2>, frame: ContentFrame) {
        if response.drag_started() {
            if let Some(pos) = press_origin.or_else(|| response.interact_pointer_pos()) {
                self.drag = match self.widget.route_pointer(frame.to_content(pos)) {
                    GestureTarget::Handle(edge) => {
                        self.widget.handle_drag(edge, DragPhase::Began, 0.0);
                        Some(ActiveDrag::Handle {
                            edge,
                            translation: 0.0,
                        })
                    }
                    GestureTarget::Track => Some(ActiveDrag::Scroll),
                    GestureTarget::Pager => None,
                };
            }
        }

        if response.dragged() {
            let dx = response.drag_delta().x;
            match self.drag.as_mut() {
                Some(ActiveDrag::Handle { edge, translation }) => {
                    *translation += dx;
                    let (edge, translation) = (*edge, *translation);
                    self.widget.handle_drag(edge, DragPhase::Changed, translation);
                }
                Some(ActiveDrag::Scroll) => {
                    let row = self.widget.row_mut();
                    let offset = row.content_offset() - dx;
                    row.set_content_offset(offset, ScrollAnimation::Immediate);
                }
                None => {}
            }
        }

        if response.drag_stopped() {
            if let Some(ActiveDrag::Handle { edge, translation }) = self.drag {
                self.widget.handle_drag(edge, DragPhase::Ended, translation);
            }
            self.drag = None;
        }

        if response.clicked() {
            if let Some(pos) = response.interact_pointer_pos() {
                self.widget.tap(frame.to_content(pos));
            }
        }
    }

    /// egui reports zoom as a per-frame factor with no phases; integrate it
    /// into a cumulative scale and end the pinch after a short pause.
    fn handle_zoom(&mut self, ui: &Ui, response: &Response) {
        let (factor, time) = ui.input(|i| (i.zoom_delta(), i.time));
        let now = Instant::now();

        if response.hovered() && (factor - 1.0).abs() > f32::EPSILON {
            let state = match self.pinch {
                Some(state) => state,
                None => {
                    self.widget.handle_pinch(PinchPhase::Began, 1.0, now);
                    PinchState {
                        scale: 1.0,
                        last_input: time,
                    }
                }
            };
            let scale = state.scale * factor;
            self.widget.handle_pinch(PinchPhase::Changed, scale, now);
            self.pinch = Some(PinchState {
                scale,
                last_input: time,
            });
        } else if let Some(state) = self.pinch {
            if time - state.last_input > PINCH_END_GRACE {
                self.widget.handle_pinch(PinchPhase::Ended, state.scale, now);
                debug!(scale = state.scale, "Pinch released");
                self.pinch = None;
            }
        }
    }

    // ── Painting ───────────────────────────────────────────────

    fn paint_items(&self, painter: &egui::Painter, frame: ContentFrame) {
        let row = self.widget.row();
        let selection = self.widget.selection();
        for index in row.visible_range() {
            let item = frame.to_screen(row.item_frame(index));
            let appearance = self.widget.configure_item(index);
            painter.rect_filled(item, 0.0, Theme::item(appearance.color));
            painter.text(
                item.center(),
                Align2::CENTER_CENTER,
                &appearance.label,
                FontId::proportional(Theme::FONT_LABEL),
                Theme::item_label(),
            );
            if selection.is_selected(index) {
                painter.rect_stroke(item.shrink(1.5), 0.0, Stroke::new(3.0, Theme::selected_item()));
            }
        }
    }

    fn paint_trim(&self, painter: &egui::Painter, frame: ContentFrame) {
        let g = self.widget.geometry();
        if !g.is_laid_out() {
            return;
        }
        let border = frame.to_screen(g.content_border);
        let start = frame.to_screen(g.start_handle);
        let end = frame.to_screen(g.end_handle);

        let left_veil = egui::Rect::from_min_max(border.min, pos2(start.left(), border.bottom()));
        let right_veil = egui::Rect::from_min_max(pos2(end.right(), border.top()), border.max);
        for veil in [left_veil, right_veil] {
            if veil.width() > 0.0 {
                painter.rect_filled(veil, 0.0, Theme::outside_veil());
            }
        }

        painter.rect_stroke(border, 0.0, Theme::border_stroke());

        let fill = Theme::handle(g.highlight);
        painter.rect_filled(frame.to_screen(g.top_boundary), 0.0, fill);
        painter.rect_filled(frame.to_screen(g.bottom_boundary), 0.0, fill);
        painter.rect_filled(start, Theme::handle_rounding(), fill);
        painter.rect_filled(end, Theme::handle_rounding(), fill);
        painter.rect_stroke(start, Theme::handle_rounding(), Theme::border_stroke());
        painter.rect_stroke(end, Theme::handle_rounding(), Theme::border_stroke());
    }

    /// Vertical line at the viewport center with a marker tinted like the
    /// item under it, sized by the pinch overlay scale.
    fn paint_center_indicator(&self, painter: &egui::Painter, rect: egui::Rect, frame: ContentFrame) {
        let x = rect.center().x;
        painter.line_segment(
            [pos2(x, rect.top()), pos2(x, rect.bottom())],
            Stroke::new(Theme::CENTER_LINE_WIDTH, Theme::center_line()),
        );
        if let Some(index) = self.widget.centered_item() {
            let color = Theme::item(self.widget.configure_item(index).color);
            let radius = 6.0 * self.widget.zoom().overlay_scale();
            let center = pos2(x, frame.origin.y - Theme::ROW_PADDING / 2.0);
            painter.circle_filled(center, radius, color);
            painter.circle_stroke(center, radius, Theme::border_stroke());
        }
    }
}
