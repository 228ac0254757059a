//! GameView: maps a `GameSnapshot` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::{base_shape, piece_color, GameSnapshot};
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::types::{GameStatus, PieceColor, PieceKind, MAX_SHAPE_SIZE};

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

const BACKDROP: Rgb = Rgb::new(14, 14, 24);
const WELL: Rgb = Rgb::new(24, 24, 38);
const GRID: Rgb = Rgb::new(60, 60, 84);
const FRAME: Rgb = Rgb::new(150, 160, 200);
const TEXT: Rgb = Rgb::new(220, 220, 235);
const ACCENT: Rgb = Rgb::new(255, 214, 102);

/// Narrowest side panel worth drawing.
const PANEL_MIN_W: u16 = 12;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnchorY {
    Center,
    Top,
}

/// Terminal renderer for the game screen.
#[derive(Debug, Clone)]
pub struct GameView {
    /// Board cell width in terminal columns.
    cell_w: u16,
    /// Board cell height in terminal rows.
    cell_h: u16,
    anchor_y: AnchorY,
    /// Whether clearing rows are currently in their bright phase.
    flash_on: bool,
}

impl Default for GameView {
    fn default() -> Self {
        // 2x1 compensates for the usual terminal glyph aspect ratio.
        Self::new(2, 1)
    }
}

/// Board frame placement inside the viewport.
#[derive(Debug, Clone, Copy)]
struct Layout {
    x: u16,
    y: u16,
    w: u16,
    h: u16,
}

impl GameView {
    pub fn new(cell_w: u16, cell_h: u16) -> Self {
        Self {
            cell_w: cell_w.max(1),
            cell_h: cell_h.max(1),
            anchor_y: AnchorY::Center,
            flash_on: true,
        }
    }

    pub fn with_anchor_y(mut self, anchor_y: AnchorY) -> Self {
        self.anchor_y = anchor_y;
        self
    }

    pub fn set_flash(&mut self, on: bool) {
        self.flash_on = on;
    }

    /// Render into an existing framebuffer, resizing it to the viewport.
    pub fn render_into(&self, snap: &GameSnapshot, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(CellStyle::new(TEXT, BACKDROP).cell(' '));

        let board_w = snap.width as u16 * self.cell_w;
        let board_h = snap.height as u16 * self.cell_h;
        let frame = Layout {
            x: 0,
            y: 0,
            w: board_w + 2,
            h: board_h + 2,
        };
        let panel_w = PANEL_MIN_W + 2;
        let total_w = frame.w + panel_w;
        let frame = Layout {
            x: viewport.width.saturating_sub(total_w) / 2,
            y: match self.anchor_y {
                AnchorY::Center => viewport.height.saturating_sub(frame.h) / 2,
                AnchorY::Top => 0,
            },
            ..frame
        };

        fb.fill_rect(frame.x + 1, frame.y + 1, board_w, board_h, ' ', CellStyle::new(GRID, WELL));
        draw_border(fb, frame, CellStyle::new(FRAME, BACKDROP));

        for row in 0..snap.height {
            let clearing = snap.is_clearing_row(row);
            for col in 0..snap.width {
                match snap.cell(row, col) {
                    Some(locked) if clearing && self.flash_on => {
                        self.draw_flash_cell(fb, frame, col as u16, row as u16, locked.color)
                    }
                    Some(locked) => self.draw_glass_cell(fb, frame, col as u16, row as u16, locked.color),
                    None => self.draw_empty_cell(fb, frame, col as u16, row as u16),
                }
            }
        }

        if let Some(active) = &snap.active {
            for &(row, col) in &active.cells {
                if row >= 0 && col >= 0 && (row as usize) < snap.height && (col as usize) < snap.width {
                    self.draw_glass_cell(fb, frame, col as u16, row as u16, active.color);
                }
            }
        }

        if snap.status != GameStatus::Intro {
            self.draw_side_panel(fb, snap, viewport, frame);
        }

        if let Some(message) = snap.combo_message.as_deref() {
            let style = CellStyle::new(ACCENT, BACKDROP).bold();
            let y = frame.y + 1 + board_h / 4;
            fb.fill_rect(frame.x + 1, y, board_w, 1, ' ', style);
            fb.put_centered(frame.x + 1, y, board_w, message, style);
        }

        match snap.status {
            GameStatus::Intro => self.draw_overlay(
                fb,
                frame,
                &["GLASS TETRIS", "", "SPACE  start", "M  controls"],
            ),
            GameStatus::Menu => self.draw_overlay(
                fb,
                frame,
                &[
                    "CONTROLS",
                    "",
                    "←/→  move",
                    "↑  rotate",
                    "↓  soft drop",
                    "ENTER  hard drop",
                    "SPACE  pause",
                    "Q  restart",
                    "ESC  quit",
                    "",
                    "SPACE  start",
                ],
            ),
            GameStatus::Paused => self.draw_overlay(fb, frame, &["PAUSED", "", "SPACE  resume"]),
            GameStatus::GameOver => {
                let score = snap.score.to_string();
                self.draw_overlay(
                    fb,
                    frame,
                    &["GAME OVER", "", "FINAL SCORE", score.as_str(), "", "SPACE  restart"],
                );
            }
            GameStatus::Playing | GameStatus::Clearing => {}
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, snap: &GameSnapshot, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, viewport, &mut fb);
        fb
    }

    fn cell_origin(&self, frame: Layout, col: u16, row: u16) -> (u16, u16) {
        (
            frame.x + 1 + col * self.cell_w,
            frame.y + 1 + row * self.cell_h,
        )
    }

    fn draw_empty_cell(&self, fb: &mut FrameBuffer, frame: Layout, col: u16, row: u16) {
        let (px, py) = self.cell_origin(frame, col, row);
        let style = CellStyle::new(GRID, WELL).dim();
        fb.fill_rect(px, py, self.cell_w, self.cell_h, ' ', style);
        fb.put_char(px, py, '·', style);
    }

    /// A block with a lighter leading edge over a darker body.
    fn draw_glass_cell(&self, fb: &mut FrameBuffer, frame: Layout, col: u16, row: u16, color: PieceColor) {
        let (px, py) = self.cell_origin(frame, col, row);
        let base = Rgb::from(color);
        let body = CellStyle::new(base, base.shade(110));
        fb.fill_rect(px, py, self.cell_w, self.cell_h, '█', body);
        fb.put_char(px, py, '▓', CellStyle::new(base.tint(90), base.shade(60)).bold());
    }

    fn draw_flash_cell(&self, fb: &mut FrameBuffer, frame: Layout, col: u16, row: u16, color: PieceColor) {
        let (px, py) = self.cell_origin(frame, col, row);
        let bright = Rgb::from(color).tint(200);
        fb.fill_rect(px, py, self.cell_w, self.cell_h, '█', CellStyle::new(bright, bright).bold());
    }

    fn draw_side_panel(&self, fb: &mut FrameBuffer, snap: &GameSnapshot, viewport: Viewport, frame: Layout) {
        let panel_x = frame.x.saturating_add(frame.w).saturating_add(2);
        if panel_x >= viewport.width || viewport.width - panel_x < PANEL_MIN_W {
            return;
        }

        let label = CellStyle::new(FRAME, BACKDROP).bold();
        let value = CellStyle::new(TEXT, BACKDROP);

        let mut y = frame.y;
        for (name, number) in [("SCORE", snap.score), ("LEVEL", snap.level), ("LINES", snap.lines)] {
            fb.put_str(panel_x, y, name, label);
            fb.put_u32(panel_x, y + 1, number, value);
            y = y.saturating_add(3);
        }

        if snap.combo > 0 {
            let end = fb.put_str(panel_x, y, "COMBO x", CellStyle::new(ACCENT, BACKDROP));
            fb.put_u32(end, y, snap.combo, CellStyle::new(ACCENT, BACKDROP).bold());
        }
        y = y.saturating_add(2);

        fb.put_str(panel_x, y, "NEXT", label);
        if let Some(kind) = snap.next {
            self.draw_preview(fb, panel_x, y + 1, kind);
        }
    }

    /// Next piece in its spawn orientation.
    fn draw_preview(&self, fb: &mut FrameBuffer, x: u16, y: u16, kind: PieceKind) {
        let shape = base_shape(kind);
        let base = Rgb::from(piece_color(kind));
        let style = CellStyle::new(base, BACKDROP);
        fb.fill_rect(x, y, MAX_SHAPE_SIZE as u16 * 2, MAX_SHAPE_SIZE as u16, ' ', CellStyle::new(TEXT, BACKDROP));
        for (r, c) in shape.cells() {
            fb.fill_rect(x + c as u16 * 2, y + r as u16, 2, 1, '█', style);
        }
    }

    fn draw_overlay(&self, fb: &mut FrameBuffer, frame: Layout, lines: &[&str]) {
        let inner_w = frame.w.saturating_sub(2);
        let h = lines.len() as u16 + 2;
        let top = frame.y + frame.h.saturating_sub(h) / 2;
        let shade = CellStyle::new(TEXT, BACKDROP);
        fb.fill_rect(frame.x + 1, top, inner_w, h, ' ', shade);

        for (i, line) in lines.iter().enumerate() {
            let style = if i == 0 {
                CellStyle::new(ACCENT, BACKDROP).bold()
            } else {
                shade
            };
            fb.put_centered(frame.x + 1, top + 1 + i as u16, inner_w, line, style);
        }
    }
}

fn draw_border(fb: &mut FrameBuffer, frame: Layout, style: CellStyle) {
    let Layout { x, y, w, h } = frame;
    if w < 2 || h < 2 {
        return;
    }

    fb.put_char(x, y, '╭', style);
    fb.put_char(x + w - 1, y, '╮', style);
    fb.put_char(x, y + h - 1, '╰', style);
    fb.put_char(x + w - 1, y + h - 1, '╯', style);

    for dx in 1..w - 1 {
        fb.put_char(x + dx, y, '─', style);
        fb.put_char(x + dx, y + h - 1, '─', style);
    }
    for dy in 1..h - 1 {
        fb.put_char(x, y + dy, '│', style);
        fb.put_char(x + w - 1, y + dy, '│', style);
    }
}
