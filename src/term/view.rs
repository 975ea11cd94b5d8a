//! GameView: maps a [`Game`] snapshot into a framebuffer.
//!
//! Pure code, no I/O, unit-tested without a terminal.

use crate::core::pieces::preview_offsets;
use crate::core::Game;
use crate::types::{Phase, PieceKind, BOARD_HEIGHT, BOARD_WIDTH};

use crate::term::fb::{CellStyle, FrameBuffer, Rgb};

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

const WELL_BG: Rgb = Rgb::new(30, 30, 40);

/// Renders the board, the active piece and ghost, the side panel, and the
/// phase overlays.
pub struct GameView {
    /// Board cell width in terminal columns.
    cell_w: u16,
    /// Board cell height in terminal rows.
    cell_h: u16,
}

impl Default for GameView {
    fn default() -> Self {
        // 2x1 compensates for the terminal glyph aspect ratio.
        Self {
            cell_w: 2,
            cell_h: 1,
        }
    }
}

impl GameView {
    pub fn new(cell_w: u16, cell_h: u16) -> Self {
        Self { cell_w, cell_h }
    }

    pub fn render(&self, game: &Game, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);

        let board_px_w = (BOARD_WIDTH as u16) * self.cell_w;
        let board_px_h = (BOARD_HEIGHT as u16) * self.cell_h;
        let frame_w = board_px_w + 2;
        let frame_h = board_px_h + 2;

        let start_x = viewport.width.saturating_sub(frame_w + 14) / 2;
        let start_y = viewport.height.saturating_sub(frame_h) / 2;

        let well = CellStyle {
            fg: Rgb::new(80, 80, 90),
            bg: WELL_BG,
            bold: false,
            dim: true,
        };
        fb.fill_rect(start_x + 1, start_y + 1, board_px_w, board_px_h, '·', well);
        self.draw_border(&mut fb, start_x, start_y, frame_w, frame_h);

        self.draw_locked_cells(&mut fb, game, start_x, start_y);

        if game.phase() == Phase::InProgress && !game.is_clearing() {
            self.draw_ghost(&mut fb, game, start_x, start_y);
            self.draw_active_piece(&mut fb, game, start_x, start_y);
        }

        self.draw_side_panel(&mut fb, game, start_x + frame_w + 2, start_y);

        match game.phase() {
            Phase::NotStarted => {
                self.draw_overlay(&mut fb, start_x, start_y, frame_w, frame_h, "PRESS ENTER");
            }
            Phase::GameOver => {
                self.draw_overlay(&mut fb, start_x, start_y, frame_w, frame_h, "GAME OVER");
                self.draw_overlay(
                    &mut fb,
                    start_x,
                    start_y + 2,
                    frame_w,
                    frame_h,
                    "ENTER RESTARTS",
                );
            }
            Phase::InProgress => {}
        }

        fb
    }

    fn draw_locked_cells(&self, fb: &mut FrameBuffer, game: &Game, start_x: u16, start_y: u16) {
        let clearing = game.clearing_rows();
        let faded = game.phase() == Phase::GameOver;
        // Blink the doomed rows every few ticks of the clear countdown.
        let flash_on = (game.clear_ticks_remaining() / 4) % 2 == 0;

        for y in 0..BOARD_HEIGHT as i8 {
            let flash = flash_on && clearing.contains(&y);
            for x in 0..BOARD_WIDTH as i8 {
                if let Some(kind) = game.board().cell(x, y) {
                    let style = if flash {
                        CellStyle {
                            fg: Rgb::new(255, 255, 255),
                            bg: WELL_BG,
                            bold: true,
                            dim: false,
                        }
                    } else {
                        CellStyle {
                            fg: kind_color(kind),
                            bg: WELL_BG,
                            bold: false,
                            dim: faded,
                        }
                    };
                    self.fill_cell(fb, start_x, start_y, x as u16, y as u16, '█', style);
                }
            }
        }
    }

    fn draw_ghost(&self, fb: &mut FrameBuffer, game: &Game, start_x: u16, start_y: u16) {
        let style = CellStyle {
            fg: Rgb::new(140, 140, 140),
            bg: WELL_BG,
            bold: false,
            dim: true,
        };
        for (x, y) in game.piece().ghost_cells(game.board()) {
            if y >= 0 {
                self.fill_cell(fb, start_x, start_y, x as u16, y as u16, '░', style);
            }
        }
    }

    fn draw_active_piece(&self, fb: &mut FrameBuffer, game: &Game, start_x: u16, start_y: u16) {
        let style = CellStyle {
            fg: kind_color(game.piece().kind()),
            bg: WELL_BG,
            bold: true,
            dim: false,
        };
        for (x, y) in game.piece().cells() {
            if y >= 0 {
                self.fill_cell(fb, start_x, start_y, x as u16, y as u16, '█', style);
            }
        }
    }

    fn draw_side_panel(&self, fb: &mut FrameBuffer, game: &Game, panel_x: u16, start_y: u16) {
        let label = CellStyle {
            bold: true,
            ..CellStyle::default()
        };
        let value = CellStyle::default();

        let mut y = start_y + 1;
        for (name, amount) in [
            ("SCORE", game.score()),
            ("LEVEL", game.level()),
            ("LINES", game.lines()),
        ] {
            fb.put_str(panel_x, y, name, label);
            fb.put_str(panel_x, y + 1, &amount.to_string(), value);
            y += 3;
        }

        fb.put_str(panel_x, y, "NEXT", label);
        self.draw_preview(fb, game.piece().next_shape(), panel_x, y + 1);
        y += 4;

        fb.put_str(panel_x, y, "HOLD", label);
        match game.piece().held_shape() {
            Some(kind) => self.draw_preview(fb, kind, panel_x, y + 1),
            None => fb.put_str(panel_x, y + 1, "-", value),
        }
    }

    /// Mini silhouette of a shape in spawn orientation, normalized to the
    /// panel origin.
    fn draw_preview(&self, fb: &mut FrameBuffer, kind: PieceKind, x: u16, y: u16) {
        let shape = preview_offsets(kind);
        let min_x = shape.iter().map(|&(ox, _)| ox).min().unwrap_or(0);
        let min_y = shape.iter().map(|&(_, oy)| oy).min().unwrap_or(0);

        let style = CellStyle {
            fg: kind_color(kind),
            ..CellStyle::default()
        };
        for (ox, oy) in shape {
            let px = x + ((ox - min_x) as u16) * self.cell_w;
            let py = y + ((oy - min_y) as u16) * self.cell_h;
            fb.fill_rect(px, py, self.cell_w, self.cell_h, '█', style);
        }
    }

    fn draw_border(&self, fb: &mut FrameBuffer, x: u16, y: u16, w: u16, h: u16) {
        let style = CellStyle {
            fg: Rgb::new(200, 200, 200),
            ..CellStyle::default()
        };

        fb.put_char(x, y, '┌', style);
        fb.put_char(x + w - 1, y, '┐', style);
        fb.put_char(x, y + h - 1, '└', style);
        fb.put_char(x + w - 1, y + h - 1, '┘', style);
        for dx in 1..w - 1 {
            fb.put_char(x + dx, y, '─', style);
            fb.put_char(x + dx, y + h - 1, '─', style);
        }
        for dy in 1..h - 1 {
            fb.put_char(x, y + dy, '│', style);
            fb.put_char(x + w - 1, y + dy, '│', style);
        }
    }

    fn draw_overlay(
        &self,
        fb: &mut FrameBuffer,
        start_x: u16,
        start_y: u16,
        frame_w: u16,
        frame_h: u16,
        text: &str,
    ) {
        let style = CellStyle {
            fg: Rgb::new(255, 255, 255),
            bold: true,
            ..CellStyle::default()
        };
        let text_w = text.chars().count() as u16;
        let x = start_x + frame_w.saturating_sub(text_w) / 2;
        fb.put_str(x, start_y + frame_h / 2, text, style);
    }

    fn fill_cell(
        &self,
        fb: &mut FrameBuffer,
        start_x: u16,
        start_y: u16,
        x: u16,
        y: u16,
        ch: char,
        style: CellStyle,
    ) {
        let px = start_x + 1 + x * self.cell_w;
        let py = start_y + 1 + y * self.cell_h;
        fb.fill_rect(px, py, self.cell_w, self.cell_h, ch, style);
    }
}

fn kind_color(kind: PieceKind) -> Rgb {
    match kind {
        PieceKind::I => Rgb::new(80, 220, 220),
        PieceKind::O => Rgb::new(240, 220, 80),
        PieceKind::T => Rgb::new(200, 120, 220),
        PieceKind::S => Rgb::new(100, 220, 120),
        PieceKind::Z => Rgb::new(220, 80, 80),
        PieceKind::J => Rgb::new(80, 120, 220),
        PieceKind::L => Rgb::new(255, 165, 0),
    }
}
