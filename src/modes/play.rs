use anyhow::{Context, Result};
use crossterm::{
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::{Stderr, stderr};
use tracing::info;

use crate::clock::IntervalClock;
use crate::game::{GameConfig, GameLoop, RunSummary};
use crate::input::TerminalInput;
use crate::metrics::GameMetrics;
use crate::render::{BoardCanvas, Renderer};

/// Keyboard play in the terminal
pub struct PlayMode {
    game: GameLoop,
    canvas: BoardCanvas,
    metrics: GameMetrics,
    renderer: Renderer,
}

impl PlayMode {
    pub fn new(config: GameConfig) -> Result<Self> {
        let game = GameLoop::new(config).context("Invalid game configuration")?;
        let canvas = BoardCanvas::new(*game.grid(), game.config().palette.background);

        Ok(Self {
            game,
            canvas,
            metrics: GameMetrics::new(),
            renderer: Renderer::new(),
        })
    }

    pub async fn run(&mut self) -> Result<RunSummary> {
        // Setup terminal
        enable_raw_mode().context("Failed to enable raw mode")?;
        let mut stderr = stderr();
        execute!(stderr, EnterAlternateScreen).context("Failed to enter alternate screen")?;
        let backend = CrosstermBackend::new(stderr);
        let mut terminal = Terminal::new(backend).context("Failed to create terminal")?;
        terminal.hide_cursor().context("Failed to hide cursor")?;
        terminal.clear().context("Failed to clear terminal")?;

        // Run game loop with cleanup
        let result = self.run_game_loop(&mut terminal).await;

        // Cleanup terminal
        let cleanup = cleanup_terminal(&mut terminal);
        let summary = result?;
        cleanup?;

        info!(
            ticks = summary.ticks,
            food_eaten = summary.food_eaten,
            resets = summary.resets,
            best_length = summary.best_length,
            "play session ended"
        );
        Ok(summary)
    }

    async fn run_game_loop(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<Stderr>>,
    ) -> Result<RunSummary> {
        let mut input = TerminalInput::new();
        let mut clock = IntervalClock::new(self.game.config().ticks_per_second);
        let metrics = &mut self.metrics;
        let renderer = &self.renderer;

        self.game
            .run(&mut self.canvas, &mut input, &mut clock, None, |canvas, _, outcome| {
                metrics.record(outcome);
                terminal
                    .draw(|frame| renderer.render(frame, canvas, metrics))
                    .context("Failed to draw frame")?;
                Ok(())
            })
            .await
    }
}

fn cleanup_terminal(terminal: &mut Terminal<CrosstermBackend<Stderr>>) -> Result<()> {
    disable_raw_mode().context("Failed to disable raw mode")?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)
        .context("Failed to leave alternate screen")?;
    terminal.show_cursor().context("Failed to show cursor")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::CellPaint;

    #[test]
    fn test_play_initialization() {
        let mode = PlayMode::new(GameConfig::default()).unwrap();
        assert_eq!(mode.game.snake().length(), 1);
        assert_eq!(mode.metrics.games_played, 0);

        let background = mode.game.config().palette.background;
        let blank = CellPaint {
            fill: background,
            border: background,
        };
        assert!(mode.canvas.rows().flatten().all(|paint| *paint == blank));
    }

    #[test]
    fn test_play_rejects_bad_config() {
        let config = GameConfig {
            ticks_per_second: 0,
            ..Default::default()
        };
        assert!(PlayMode::new(config).is_err());
    }
}
