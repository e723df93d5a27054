//! Ratatui-based terminal viewer.
//!
//! Shows the same 2x2 figure the `render` command writes, one bordered block per
//! task, with the tier legend under each chart. The focused panel can be zoomed,
//! the noise reseeded, and the current figure saved to the configured image path.

use std::io::{self, IsTerminal};
use std::time::Duration;

use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{
    Terminal,
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
};
use tracing::debug;

use crate::domain::{Figure, Panel, RenderConfig, Rgb};
use crate::error::AppError;

mod plotters_chart;

use plotters_chart::PanelChart;

/// Start the viewer.
pub fn run(config: RenderConfig) -> Result<(), AppError> {
    if !io::stdout().is_terminal() {
        return Err(AppError::invalid(
            "The viewer needs an interactive terminal; use `rlc render` instead.",
        ));
    }

    let mut app = App::new(config)?;

    let _guard = TerminalGuard::new()?;
    let backend = CrosstermBackend::new(io::stdout());
    let mut terminal = Terminal::new(backend)
        .map_err(|e| AppError::runtime(format!("Failed to initialize terminal: {e}")))?;

    debug!(seed = app.figure.seed, "viewer started");
    // stderr shares the alternate screen; events would garble the view.
    crate::logging::without_logging(|| app.event_loop(&mut terminal))
}

/// Ensures the terminal is restored (raw mode, alternate screen) on exit.
struct TerminalGuard;

impl TerminalGuard {
    fn new() -> Result<Self, AppError> {
        enable_raw_mode().map_err(|e| AppError::runtime(format!("Failed to enable raw mode: {e}")))?;
        if let Err(e) = execute!(io::stdout(), EnterAlternateScreen) {
            let _ = disable_raw_mode();
            return Err(AppError::runtime(format!("Failed to enter alternate screen: {e}")));
        }
        Ok(Self)
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
    }
}

struct App {
    config: RenderConfig,
    figure: Figure,
    focus: usize,
    zoomed: bool,
    status: String,
}

impl App {
    fn new(config: RenderConfig) -> Result<Self, AppError> {
        let figure = crate::app::pipeline::build_figure(config.seed)?;
        Ok(Self {
            config,
            status: format!("seed {}", figure.seed),
            figure,
            focus: 0,
            zoomed: false,
        })
    }

    fn event_loop<B: ratatui::backend::Backend>(&mut self, terminal: &mut Terminal<B>) -> Result<(), AppError> {
        let mut needs_redraw = true;
        loop {
            if needs_redraw {
                terminal
                    .draw(|f| self.draw(f))
                    .map_err(|e| AppError::runtime(format!("Terminal draw error: {e}")))?;
                needs_redraw = false;
            }

            if !event::poll(Duration::from_millis(100))
                .map_err(|e| AppError::runtime(format!("Event poll error: {e}")))?
            {
                continue;
            }

            match event::read().map_err(|e| AppError::runtime(format!("Event read error: {e}")))? {
                Event::Key(key) => {
                    if key.kind != KeyEventKind::Press {
                        continue;
                    }
                    if self.handle_key(key.code)? {
                        break;
                    }
                    needs_redraw = true;
                }
                Event::Resize(_, _) => {
                    needs_redraw = true;
                }
                _ => {}
            }
        }
        Ok(())
    }

    fn handle_key(&mut self, code: KeyCode) -> Result<bool, AppError> {
        let n = self.figure.panels.len();
        match code {
            KeyCode::Char('q') | KeyCode::Esc => return Ok(true),
            KeyCode::Tab | KeyCode::Right => self.focus = cycle_focus(self.focus, n, 1),
            KeyCode::BackTab | KeyCode::Left => self.focus = cycle_focus(self.focus, n, -1),
            KeyCode::Down => self.focus = cycle_focus(self.focus, n, 2),
            KeyCode::Up => self.focus = cycle_focus(self.focus, n, -2),
            KeyCode::Enter => self.zoomed = !self.zoomed,
            KeyCode::Char('r') => {
                self.figure = crate::app::pipeline::build_figure(None)?;
                self.status = format!("reseeded: seed {}", self.figure.seed);
            }
            KeyCode::Char('s') => {
                let path = &self.config.output;
                self.status = match crate::plot::render_figure(
                    &self.figure,
                    path,
                    self.config.width,
                    self.config.height,
                ) {
                    Ok(()) => format!("saved {}", path.display()),
                    Err(err) => format!("save failed: {err}"),
                };
            }
            _ => {}
        }
        Ok(false)
    }

    fn draw(&self, frame: &mut ratatui::Frame<'_>) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(3)])
            .split(frame.area());

        self.draw_body(frame, chunks[0]);
        self.draw_footer(frame, chunks[1]);
    }

    fn draw_body(&self, frame: &mut ratatui::Frame<'_>, area: Rect) {
        if self.zoomed {
            if let Some(panel) = self.figure.panels.get(self.focus) {
                draw_panel_block(frame, area, panel, true);
            }
            return;
        }

        for (i, (panel, rect)) in self
            .figure
            .panels
            .iter()
            .zip(grid_areas(area, self.figure.panels.len()))
            .enumerate()
        {
            draw_panel_block(frame, rect, panel, i == self.focus);
        }
    }

    fn draw_footer(&self, frame: &mut ratatui::Frame<'_>, area: Rect) {
        let help = "Tab/arrows focus  Enter zoom  r reseed  s save  q quit";
        let line = Line::from(vec![
            Span::styled(help, Style::default().fg(Color::Gray)),
            Span::raw(" | "),
            Span::styled(&self.status, Style::default().fg(Color::Yellow)),
        ]);
        let p = Paragraph::new(line).block(Block::default().borders(Borders::ALL));
        frame.render_widget(p, area);
    }
}

fn draw_panel_block(frame: &mut ratatui::Frame<'_>, area: Rect, panel: &Panel, focused: bool) {
    let border = if focused {
        Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::Gray)
    };
    let block = Block::default()
        .title(format!(" {} : {} ", panel.title, panel.y_label))
        .borders(Borders::ALL)
        .border_style(border);
    let inner = block.inner(area);
    frame.render_widget(block, area);
    frame.render_widget(Clear, inner);

    let legend = legend_line(panel);
    let legend_rows = legend_height(&legend, inner.width);
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(legend_rows)])
        .split(inner);

    frame.render_widget(PanelChart { panel }, chunks[0]);
    frame.render_widget(Paragraph::new(legend).wrap(Wrap { trim: true }), chunks[1]);
}

/// Split `area` into a two-column grid with one cell per panel.
fn grid_areas(area: Rect, n: usize) -> Vec<Rect> {
    let rows = n.div_ceil(2).max(1);
    let row_constraints = vec![Constraint::Ratio(1, rows as u32); rows];
    let row_rects = Layout::default()
        .direction(Direction::Vertical)
        .constraints(row_constraints)
        .split(area);

    row_rects
        .iter()
        .flat_map(|row| {
            Layout::default()
                .direction(Direction::Horizontal)
                .constraints([Constraint::Ratio(1, 2), Constraint::Ratio(1, 2)])
                .split(*row)
                .to_vec()
        })
        .take(n)
        .collect()
}

/// Move focus by `delta` panels, wrapping around.
fn cycle_focus(focus: usize, n: usize, delta: isize) -> usize {
    if n == 0 {
        return 0;
    }
    (focus as isize + delta).rem_euclid(n as isize) as usize
}

/// `■ method` entries in tier colors.
fn legend_line(panel: &Panel) -> Line<'_> {
    let mut spans = Vec::with_capacity(panel.series.len() * 2);
    for (method, color) in panel.legend() {
        spans.push(Span::styled("■ ", Style::default().fg(terminal_color(color))));
        spans.push(Span::raw(format!("{method}  ")));
    }
    Line::from(spans)
}

/// Rows needed to show the legend at `width` columns (at least one).
fn legend_height(line: &Line<'_>, width: u16) -> u16 {
    let width = width.max(1) as usize;
    line.width().div_ceil(width).clamp(1, 3) as u16
}

fn terminal_color(c: Rgb) -> Color {
    Color::Rgb(c.r, c.g, c.b)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::pipeline::build_figure_with;
    use crate::data::ZeroNoise;

    #[test]
    fn focus_wraps_in_both_directions() {
        assert_eq!(cycle_focus(0, 4, 1), 1);
        assert_eq!(cycle_focus(3, 4, 1), 0);
        assert_eq!(cycle_focus(0, 4, -1), 3);
        assert_eq!(cycle_focus(1, 4, 2), 3);
        assert_eq!(cycle_focus(3, 4, 2), 1);
        assert_eq!(cycle_focus(0, 0, 1), 0);
    }

    #[test]
    fn grid_has_one_cell_per_panel() {
        let area = Rect::new(0, 0, 100, 40);
        let cells = grid_areas(area, 4);
        assert_eq!(cells.len(), 4);
        assert_eq!(cells[0], Rect::new(0, 0, 50, 20));
        assert_eq!(cells[3], Rect::new(50, 20, 50, 20));

        assert_eq!(grid_areas(area, 3).len(), 3);
    }

    #[test]
    fn legend_uses_tier_colors() {
        let fig = build_figure_with(0, &mut ZeroNoise).unwrap();
        let line = legend_line(&fig.panels[2]);
        assert_eq!(line.spans.len(), 8);
        assert_eq!(line.spans[0].style.fg, Some(Color::Rgb(0x1f, 0x77, 0xb4)));
        assert_eq!(line.spans[1].content, "Vine  ");
        assert_eq!(line.spans[7].content, "CEM  ");
    }

    #[test]
    fn legend_height_wraps() {
        let fig = build_figure_with(0, &mut ZeroNoise).unwrap();
        let line = legend_line(&fig.panels[0]);
        assert_eq!(legend_height(&line, 500), 1);
        assert!(legend_height(&line, 40) > 1);
        assert!(legend_height(&line, 1) <= 3);
    }
}
