use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
};

use super::{BoardCanvas, CellPaint};
use crate::game::Rgb;
use crate::metrics::GameMetrics;

/// Terminal presentation of a [`BoardCanvas`]. One cell is two columns wide.
pub struct Renderer;

impl Renderer {
    pub fn new() -> Self {
        Self
    }

    pub fn render(&self, frame: &mut Frame, canvas: &BoardCanvas, metrics: &GameMetrics) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1), // Header
                Constraint::Min(0),    // Board
                Constraint::Length(1), // Footer
            ])
            .split(frame.area());

        frame.render_widget(self.render_stats(metrics), chunks[0]);
        frame.render_widget(self.render_board(canvas), chunks[1]);
        frame.render_widget(self.render_controls(), chunks[2]);
    }

    fn render_board(&self, canvas: &BoardCanvas) -> Paragraph<'_> {
        let lines: Vec<Line> = canvas
            .rows()
            .map(|row| Line::from(row.iter().map(cell_span).collect::<Vec<_>>()))
            .collect();

        Paragraph::new(lines)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_type(BorderType::Double)
                    .border_style(Style::default().fg(Color::White))
                    .title(" Snake "),
            )
            .alignment(Alignment::Center)
    }

    fn render_stats(&self, metrics: &GameMetrics) -> Paragraph<'_> {
        let text = Line::from(vec![
            Span::styled("Length: ", Style::default().fg(Color::Yellow)),
            Span::styled(
                metrics.length.to_string(),
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw("    "),
            Span::styled("Best: ", Style::default().fg(Color::Yellow)),
            Span::styled(
                metrics.best_length.to_string(),
                Style::default().fg(Color::White),
            ),
            Span::raw("    "),
            Span::styled("Games: ", Style::default().fg(Color::Yellow)),
            Span::styled(
                metrics.games_played.to_string(),
                Style::default().fg(Color::White),
            ),
            Span::raw("    "),
            Span::styled("Time: ", Style::default().fg(Color::Yellow)),
            Span::styled(metrics.format_time(), Style::default().fg(Color::White)),
        ]);

        Paragraph::new(text).alignment(Alignment::Center)
    }

    fn render_controls(&self) -> Paragraph<'_> {
        let text = Line::from(vec![
            Span::styled("↑↓←→", Style::default().fg(Color::Cyan)),
            Span::raw(" or "),
            Span::styled("WASD", Style::default().fg(Color::Cyan)),
            Span::raw(" to move | "),
            Span::styled("Q", Style::default().fg(Color::Red)),
            Span::raw(" to quit"),
        ]);

        Paragraph::new(text).alignment(Alignment::Center)
    }
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new()
    }
}

fn color(rgb: Rgb) -> Color {
    Color::Rgb(rgb.0, rgb.1, rgb.2)
}

/// Fill as background, border as the bracket glyphs
fn cell_span(paint: &CellPaint) -> Span<'static> {
    Span::styled(
        "[]",
        Style::default().fg(color(paint.border)).bg(color(paint.fill)),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{Grid, Position};
    use crate::render::RenderSink;
    use ratatui::{Terminal, backend::TestBackend};

    fn screen_text(terminal: &Terminal<TestBackend>) -> String {
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[test]
    fn test_cell_span_colors() {
        let span = cell_span(&CellPaint {
            fill: Rgb(255, 0, 0),
            border: Rgb(93, 216, 228),
        });
        assert_eq!(span.content, "[]");
        assert_eq!(span.style.bg, Some(Color::Rgb(255, 0, 0)));
        assert_eq!(span.style.fg, Some(Color::Rgb(93, 216, 228)));
    }

    #[test]
    fn test_render_frame() {
        let mut canvas = BoardCanvas::new(Grid::new(100, 60, 20), Rgb(0, 0, 0));
        canvas.draw_cell(Position::new(20, 20), Rgb(0, 255, 0), Rgb(93, 216, 228));
        let mut metrics = GameMetrics::new();
        metrics.length = 4;

        let mut terminal = Terminal::new(TestBackend::new(80, 8)).unwrap();
        terminal
            .draw(|frame| Renderer::new().render(frame, &canvas, &metrics))
            .unwrap();

        let text = screen_text(&terminal);
        assert!(text.contains("Length: 4"));
        assert!(text.contains("Snake"));
        assert!(text.contains("[][][][][]"));
    }
}
