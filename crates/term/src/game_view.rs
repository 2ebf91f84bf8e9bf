//! GameView: maps a `core::GameSnapshot` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::{ExplosionSnapshot, GameSnapshot};
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::types::{Phase, Pos, GRID_HEIGHT, GRID_WIDTH};

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

const PLAY_BG: Rgb = Rgb::new(18, 18, 18);
const GRID_DOT: Rgb = Rgb::new(0x2d, 0x1b, 0x0e);
const HEAD: Rgb = Rgb::new(0x22, 0x8b, 0x22);
const BODY: Rgb = Rgb::new(0x00, 0x64, 0x00);
const HEAD_DESTROY: Rgb = Rgb::new(0xff, 0x45, 0x00);
const BODY_DESTROY: Rgb = Rgb::new(0xff, 0x63, 0x47);
const APPLE: Rgb = Rgb::new(0xdc, 0x14, 0x3c);
const STAR: Rgb = Rgb::new(0xff, 0xd7, 0x00);

/// A lightweight terminal renderer for the snake/tetris board.
pub struct GameView {
    /// Board cell width in terminal columns.
    cell_w: u16,
    /// Board cell height in terminal rows.
    cell_h: u16,
    anchor_y: AnchorY,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnchorY {
    Center,
    Top,
}

impl Default for GameView {
    fn default() -> Self {
        // 2x1 helps compensate for typical terminal glyph aspect ratio.
        Self {
            cell_w: 2,
            cell_h: 1,
            anchor_y: AnchorY::Center,
        }
    }
}

impl GameView {
    pub fn new(cell_w: u16, cell_h: u16) -> Self {
        Self {
            cell_w,
            cell_h,
            anchor_y: AnchorY::Center,
        }
    }

    pub fn with_anchor_y(mut self, anchor_y: AnchorY) -> Self {
        self.anchor_y = anchor_y;
        self
    }

    /// Width and height of the bordered board in terminal cells
    pub fn frame_size(&self) -> (u16, u16) {
        (
            (GRID_WIDTH as u16) * self.cell_w + 2,
            (GRID_HEIGHT as u16) * self.cell_h + 2,
        )
    }

    /// Render a snapshot into an existing framebuffer.
    ///
    /// Allocation-free; callers reuse one framebuffer across frames.
    pub fn render_into(&self, snap: &GameSnapshot, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(CellStyle::default().cell(' '));

        let (frame_w, frame_h) = self.frame_size();
        let start_x = viewport.width.saturating_sub(frame_w) / 2;
        let start_y = match self.anchor_y {
            AnchorY::Center => viewport.height.saturating_sub(frame_h) / 2,
            AnchorY::Top => 0,
        };
        let origin = (start_x, start_y);

        let border = if snap.destruction_active {
            CellStyle::new(HEAD_DESTROY, Rgb::new(0, 0, 0)).bold()
        } else {
            CellStyle::new(Rgb::new(0x8b, 0x69, 0x14), Rgb::new(0, 0, 0))
        };
        self.draw_border(fb, start_x, start_y, frame_w, frame_h, border);

        let dot = CellStyle::new(GRID_DOT, PLAY_BG).dim();
        for y in 0..GRID_HEIGHT as i8 {
            for x in 0..GRID_WIDTH as i8 {
                self.fill_cell(fb, origin, Pos::new(x, y), '·', dot);
            }
        }

        for &(pos, color) in &snap.settled {
            self.fill_cell(fb, origin, pos, '█', CellStyle::new(color, PLAY_BG));
        }

        if let Some(apple) = snap.apple {
            self.draw_glyph(fb, origin, apple, '●', CellStyle::new(APPLE, PLAY_BG).bold());
        }
        if let Some(star) = snap.star {
            self.draw_glyph(fb, origin, star, '★', CellStyle::new(STAR, PLAY_BG).bold());
        }

        if let Some(piece) = snap.falling {
            let mut style = CellStyle::new(piece.color, PLAY_BG).bold();
            if piece.suspended {
                style = style.dim();
            }
            for &cell in &piece.cells {
                self.fill_cell(fb, origin, cell, '▓', style);
            }
        }

        let (head_color, body_color) = if snap.destruction_active {
            (HEAD_DESTROY, BODY_DESTROY)
        } else {
            (HEAD, BODY)
        };
        for (i, &segment) in snap.snake.iter().enumerate().rev() {
            if i == 0 {
                let style = CellStyle::new(head_color, PLAY_BG).bold();
                self.draw_head(fb, origin, segment, snap, style);
            } else {
                self.fill_cell(fb, origin, segment, '█', CellStyle::new(body_color, PLAY_BG));
            }
        }

        for explosion in &snap.explosions {
            let (ch, style) = explosion_glyph(explosion);
            self.draw_glyph(fb, origin, explosion.pos, ch, style);
        }

        self.draw_side_panel(fb, snap, viewport, start_x, start_y, frame_w);

        if let Phase::Ended(cause) = snap.phase {
            let mid_y = start_y.saturating_add(frame_h / 2);
            let top = mid_y.saturating_sub(1);
            self.draw_overlay_text(fb, start_x, top, frame_w, "GAME OVER", true);
            self.draw_overlay_text(fb, start_x, mid_y, frame_w, cause.as_str(), false);
            self.draw_overlay_text(fb, start_x, mid_y + 1, frame_w, "press Enter", false);
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, snap: &GameSnapshot, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, viewport, &mut fb);
        fb
    }

    /// Terminal column/row of the top-left corner of a grid cell
    pub fn cell_origin(&self, origin: (u16, u16), pos: Pos) -> Option<(u16, u16)> {
        if pos.x < 0 || pos.y < 0 || pos.x >= GRID_WIDTH as i8 || pos.y >= GRID_HEIGHT as i8 {
            return None;
        }
        Some((
            origin.0 + 1 + pos.x as u16 * self.cell_w,
            origin.1 + 1 + pos.y as u16 * self.cell_h,
        ))
    }

    fn draw_border(&self, fb: &mut FrameBuffer, x: u16, y: u16, w: u16, h: u16, style: CellStyle) {
        if w < 2 || h < 2 {
            return;
        }

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

    fn fill_cell(
        &self,
        fb: &mut FrameBuffer,
        origin: (u16, u16),
        pos: Pos,
        ch: char,
        style: CellStyle,
    ) {
        if let Some((px, py)) = self.cell_origin(origin, pos) {
            fb.fill_rect(px, py, self.cell_w, self.cell_h, ch, style);
        }
    }

    /// A single glyph in the cell, padded with background
    fn draw_glyph(
        &self,
        fb: &mut FrameBuffer,
        origin: (u16, u16),
        pos: Pos,
        ch: char,
        style: CellStyle,
    ) {
        if let Some((px, py)) = self.cell_origin(origin, pos) {
            fb.fill_rect(px, py, self.cell_w, self.cell_h, ' ', style);
            fb.put_char(px, py, ch, style);
        }
    }

    /// Head with eyes facing the heading
    fn draw_head(
        &self,
        fb: &mut FrameBuffer,
        origin: (u16, u16),
        pos: Pos,
        snap: &GameSnapshot,
        style: CellStyle,
    ) {
        use crate::types::Direction;

        let Some((px, py)) = self.cell_origin(origin, pos) else {
            return;
        };
        let eyes = match snap.direction {
            Direction::Up => '▀',
            Direction::Down => '▄',
            Direction::Left => '▌',
            Direction::Right => '▐',
        };
        let eye_style = CellStyle {
            fg: Rgb::new(255, 255, 255),
            bg: style.fg,
            ..style
        };
        fb.fill_rect(px, py, self.cell_w, self.cell_h, '█', style);
        fb.put_char(px, py, eyes, eye_style);
        if self.cell_w > 1 {
            fb.put_char(px + self.cell_w - 1, py, eyes, eye_style);
        }
    }

    fn draw_side_panel(
        &self,
        fb: &mut FrameBuffer,
        snap: &GameSnapshot,
        viewport: Viewport,
        start_x: u16,
        start_y: u16,
        frame_w: u16,
    ) {
        let panel_x = start_x.saturating_add(frame_w).saturating_add(2);
        if panel_x >= viewport.width {
            return;
        }
        let panel_w = viewport.width - panel_x;
        if panel_w < 12 {
            return;
        }

        let label = CellStyle::new(Rgb::new(0xda, 0xa5, 0x20), Rgb::new(0, 0, 0)).bold();
        let value = CellStyle::new(Rgb::new(220, 220, 220), Rgb::new(0, 0, 0));

        let mut y = start_y;
        for (name, n) in [
            ("LENGTH", snap.length() as u32),
            ("SCORE", snap.score),
            ("HIGH", snap.high_score),
            ("APPLES", snap.apples),
        ] {
            fb.put_str(panel_x, y, name, label);
            fb.put_u32(panel_x, y.saturating_add(1), n, value);
            y = y.saturating_add(3);
        }

        if snap.destruction_active {
            let hot = CellStyle::new(HEAD_DESTROY, Rgb::new(0, 0, 0)).bold();
            let x = fb.put_str(panel_x, y, "DESTROY ", hot);
            let tenths = (snap.destruction_remaining_ms / 100) as u32;
            let x = fb.put_u32(x, y, tenths / 10, hot);
            let x = fb.put_str(x, y, ".", hot);
            let x = fb.put_u32(x, y, tenths % 10, hot);
            fb.put_str(x, y, "s", hot);
        }
        y = y.saturating_add(2);

        let help = value.dim();
        for line in [
            "arrows  snake",
            "a / d   move",
            "s / w   rotate",
            "q       quit",
        ] {
            if y >= viewport.height {
                break;
            }
            fb.put_str(panel_x, y, line, help);
            y = y.saturating_add(1);
        }
    }

    fn draw_overlay_text(
        &self,
        fb: &mut FrameBuffer,
        start_x: u16,
        y: u16,
        frame_w: u16,
        text: &str,
        bold: bool,
    ) {
        let text_w = text.chars().count() as u16;
        let x = start_x.saturating_add(frame_w.saturating_sub(text_w) / 2);
        let mut style = CellStyle::new(Rgb::new(255, 255, 255), Rgb::new(0, 0, 0));
        if bold {
            style = style.bold();
        }
        fb.put_str(x, y, text, style);
    }
}

/// Burst glyph shrinking and cooling as the animation plays out
fn explosion_glyph(e: &ExplosionSnapshot) -> (char, CellStyle) {
    let fade = 1.0 - e.progress;
    let channel = |c: u8| (c as f32 * fade + PLAY_BG.r as f32 * e.progress) as u8;
    if e.progress < 0.33 {
        (
            '✸',
            CellStyle::new(Rgb::new(channel(255), channel(255), channel(200)), PLAY_BG).bold(),
        )
    } else if e.progress < 0.66 {
        ('✶', CellStyle::new(Rgb::new(channel(255), channel(165), 0), PLAY_BG))
    } else {
        ('·', CellStyle::new(Rgb::new(channel(255), channel(69), 0), PLAY_BG).dim())
    }
}
