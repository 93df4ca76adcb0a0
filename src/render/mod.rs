//! Drawing commands and their targets
//!
//! The simulation only ever issues two commands: paint a cell and clear the
//! board. Anything that accepts them is a [`RenderSink`].

pub mod canvas;
pub mod renderer;

pub use canvas::{BoardCanvas, CellPaint};
pub use renderer::Renderer;

use crate::game::{Palette, Position, Rgb, Snake};

/// Target for draw commands. The simulation never reads pixels back.
pub trait RenderSink {
    fn draw_cell(&mut self, position: Position, fill: Rgb, border: Rgb);

    /// Paint the whole board with the background color
    fn clear(&mut self);
}

pub fn draw_cell<S: RenderSink + ?Sized>(sink: &mut S, position: Position, fill: Rgb, border: Rgb) {
    sink.draw_cell(position, fill, border);
}

/// Paint a cell back to background, border included
pub fn erase_cell<S: RenderSink + ?Sized>(sink: &mut S, position: Position, palette: &Palette) {
    draw_cell(sink, position, palette.background, palette.background);
}

pub fn draw_food<S: RenderSink + ?Sized>(sink: &mut S, position: Position, palette: &Palette) {
    draw_cell(sink, position, palette.food, palette.border);
}

pub fn draw_snake<S: RenderSink + ?Sized>(sink: &mut S, snake: &Snake, palette: &Palette) {
    // Tail first so the head is painted last
    let body: Vec<Position> = snake.body().collect();
    for &segment in body.iter().skip(1).rev() {
        draw_cell(sink, segment, palette.snake, palette.border);
    }
    let head_fill = palette.head.unwrap_or(palette.snake);
    draw_cell(sink, snake.head(), head_fill, palette.border);
}


#[cfg(test)]
mod tests {
    use super::testing::{Command, RecordingSink};
    use super::*;
    use crate::game::Grid;

    #[test]
    fn test_draw_food_uses_border() {
        let palette = Palette::default();
        let mut sink = RecordingSink::default();
        draw_food(&mut sink, Position::new(20, 40), &palette);

        assert_eq!(
            sink.commands,
            vec![Command::Draw {
                position: Position::new(20, 40),
                fill: palette.food,
                border: palette.border,
            }]
        );
    }

    #[test]
    fn test_erase_cell_is_background_on_background() {
        let palette = Palette::default();
        let mut sink = RecordingSink::default();
        erase_cell(&mut sink, Position::new(0, 0), &palette);

        assert_eq!(
            sink.commands,
            vec![Command::Draw {
                position: Position::new(0, 0),
                fill: palette.background,
                border: palette.background,
            }]
        );
    }

    #[test]
    fn test_draw_snake_paints_head_last() {
        let palette = Palette {
            head: Some(Rgb(1, 2, 3)),
            ..Palette::default()
        };
        let mut snake = Snake::new(Grid::new(200, 200, 20));
        snake.grow();
        snake.grow();
        snake.move_forward();
        snake.move_forward();

        let mut sink = RecordingSink::default();
        draw_snake(&mut sink, &snake, &palette);

        assert_eq!(sink.commands.len(), 3);
        assert_eq!(
            sink.commands.last(),
            Some(&Command::Draw {
                position: snake.head(),
                fill: Rgb(1, 2, 3),
                border: palette.border,
            })
        );
        assert!(matches!(
            sink.commands[0],
            Command::Draw { fill, .. } if fill == palette.snake
        ));
    }
}
