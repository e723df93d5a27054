//! Plotters-powered learning-curve panel widget for Ratatui.
//!
//! The panel is drawn with the same `plot::draw_panel` used for image files,
//! only with the compact `TERMINAL_STYLE`. Plotters output lands in the Ratatui
//! buffer through `plotters-ratatui-backend`.

use plotters_ratatui_backend::widget_fn;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style},
    widgets::Widget,
};

use crate::domain::Panel;
use crate::plot::{TERMINAL_STYLE, draw_panel};

/// Smallest area Plotters can lay a chart out in.
pub const MIN_WIDTH: u16 = 20;
pub const MIN_HEIGHT: u16 = 8;

/// Render-only view of one panel.
pub struct PanelChart<'a> {
    pub panel: &'a Panel,
}

impl<'a> Widget for PanelChart<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        // Plotters fails to build a chart in tiny areas; show a hint instead of panicking.
        if area.width < MIN_WIDTH || area.height < MIN_HEIGHT {
            buf.set_string(
                area.x,
                area.y,
                "Panel too small (resize terminal).",
                Style::default().fg(Color::Yellow),
            );
            return;
        }

        let panel = self.panel;
        let widget = widget_fn(move |root| {
            draw_panel(&root, panel, &TERMINAL_STYLE)?;
            Ok(())
        });

        widget.render(area, buf);
    }
}
