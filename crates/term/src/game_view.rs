//! GameView: maps a [`GameSnapshot`] into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::{GameSnapshot, Shape};
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::palette::{self, BACKGROUND, DANGER, GRID, SUCCESS, TEXT, TEXT_SECOND};
use crate::types::{Pixel, FIELD_HEIGHT, FIELD_WIDTH};

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

/// Host-side values shown next to the field.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct HudInfo {
    pub max_score: u32,
    pub tempo: f32,
    /// The max score could not be written to disk.
    pub unsaved: bool,
}

/// Prompt shown over the field while no game runs.
pub const IDLE_PROMPT: &str = "ROTATE";

/// A lightweight terminal renderer for the falling-block game.
pub struct GameView {
    /// Field cell width in terminal columns.
    cell_w: u16,
    /// Field cell height in terminal rows.
    cell_h: u16,
    anchor_y: AnchorY,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnchorY {
    Center,
    Top,
}

/// Where the field frame landed, for callers that draw around it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldRect {
    pub x: u16,
    pub y: u16,
    pub w: u16,
    pub h: u16,
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
            cell_w: cell_w.max(1),
            cell_h: cell_h.max(1),
            anchor_y: AnchorY::Center,
        }
    }

    pub fn with_anchor_y(mut self, anchor_y: AnchorY) -> Self {
        self.anchor_y = anchor_y;
        self
    }

    /// Frame position for a viewport.
    pub fn field_rect(&self, viewport: Viewport) -> FieldRect {
        let w = FIELD_WIDTH as u16 * self.cell_w + 2;
        let h = FIELD_HEIGHT as u16 * self.cell_h + 2;
        // Leave room for the side panel on the right.
        let total_w = w + 2 + PANEL_W;
        let x = viewport.width.saturating_sub(total_w) / 2;
        let y = match self.anchor_y {
            AnchorY::Center => viewport.height.saturating_sub(h) / 2,
            AnchorY::Top => 0,
        };
        FieldRect { x, y, w, h }
    }

    /// Render into an existing framebuffer, resizing it to the viewport.
    pub fn render_into(
        &self,
        snap: &GameSnapshot,
        hud: &HudInfo,
        viewport: Viewport,
        fb: &mut FrameBuffer,
    ) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(CellStyle::default().cell(' '));

        let rect = self.field_rect(viewport);
        let border_fg = if snap.running { SUCCESS } else { DANGER };
        let border = CellStyle::plain(border_fg, BACKGROUND);
        draw_border(fb, rect, border);

        for (y, row) in snap.field.iter().enumerate() {
            for (x, cell) in row.iter().enumerate() {
                let (px, py) = self.cell_origin(rect.x + 1, rect.y + 1, x as u16, y as u16);
                match cell {
                    Some(pixel) => self.draw_pixel(fb, px, py, *pixel, snap.level),
                    None => self.draw_empty(fb, px, py),
                }
            }
        }

        self.draw_side_panel(fb, snap, hud, rect);

        if !snap.running {
            draw_overlay_text(fb, rect, IDLE_PROMPT);
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, snap: &GameSnapshot, hud: &HudInfo, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, hud, viewport, &mut fb);
        fb
    }

    fn cell_origin(&self, left: u16, top: u16, x: u16, y: u16) -> (u16, u16) {
        (left + x * self.cell_w, top + y * self.cell_h)
    }

    fn draw_empty(&self, fb: &mut FrameBuffer, px: u16, py: u16) {
        let style = CellStyle::plain(GRID, BACKGROUND).dim();
        fb.fill_rect(px, py, self.cell_w, self.cell_h, ' ', style);
        fb.put_char(px, py, '·', style);
    }

    /// C cells get an inner square, A and B a corner mark.
    fn draw_pixel(&self, fb: &mut FrameBuffer, px: u16, py: u16, pixel: Pixel, level: u32) {
        let fill = palette::pixel_color(level, pixel);
        let style = CellStyle::plain(Rgb::WHITE, fill).bold();
        fb.fill_rect(px, py, self.cell_w, self.cell_h, ' ', style);
        match pixel {
            Pixel::C => {
                if self.cell_w >= 2 {
                    fb.put_char(px, py, '[', style);
                    fb.put_char(px + self.cell_w - 1, py, ']', style);
                } else {
                    fb.put_char(px, py, '▪', style);
                }
            }
            Pixel::A | Pixel::B => fb.put_char(px, py, '▘', style),
        }
    }

    fn draw_preview(&self, fb: &mut FrameBuffer, x: u16, y: u16, shape: &Shape, level: u32) {
        for (dx, dy, pixel) in shape.occupied() {
            let (px, py) = self.cell_origin(x, y, dx as u16, dy as u16);
            self.draw_pixel(fb, px, py, pixel, level);
        }
    }

    fn draw_side_panel(
        &self,
        fb: &mut FrameBuffer,
        snap: &GameSnapshot,
        hud: &HudInfo,
        rect: FieldRect,
    ) {
        let x = rect.x.saturating_add(rect.w).saturating_add(2);
        if x.saturating_add(PANEL_W) > fb.width() {
            return;
        }

        let label = CellStyle::plain(TEXT_SECOND, BACKGROUND);
        let value = CellStyle::plain(TEXT, BACKGROUND).bold();

        let mut y = rect.y;
        fb.put_str(x, y, "NEXT", label);
        y += 1;
        self.draw_preview(fb, x, y, &snap.next_shape, snap.level);
        y += snap.next_shape.size() as u16 * self.cell_h + 1;

        for (name, number) in [
            ("SCORE", snap.score),
            ("MAX", hud.max_score.max(snap.score)),
            ("LINES", snap.lines),
            ("LEVEL", snap.level),
        ] {
            fb.put_str(x, y, name, label);
            fb.put_u32(x + 6, y, number, value);
            if name == "MAX" && hud.unsaved {
                fb.put_char(x + 12, y, '!', CellStyle::plain(DANGER, BACKGROUND).bold());
            }
            y += 1;
        }

        y += 1;
        for (kind, count) in snap.statistics.iter() {
            if y >= fb.height() {
                break;
            }
            fb.put_str(x, y, kind.letter(), label);
            fb.put_u32(x + 2, y, count, value);
            y += 1;
        }

        if hud.tempo > 1.0 && y + 1 < fb.height() {
            fb.put_str(x, y + 1, "HURRY", CellStyle::plain(DANGER, BACKGROUND).bold());
        }
    }
}

/// Width reserved for the side panel.
const PANEL_W: u16 = 14;

fn draw_border(fb: &mut FrameBuffer, rect: FieldRect, style: CellStyle) {
    let FieldRect { x, y, w, h } = rect;
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

fn draw_overlay_text(fb: &mut FrameBuffer, rect: FieldRect, text: &str) {
    let mid_y = rect.y.saturating_add(rect.h / 2);
    let text_w = text.chars().count() as u16;
    let x = rect.x.saturating_add(rect.w.saturating_sub(text_w) / 2);
    let style = CellStyle::plain(TEXT, BACKGROUND).bold();
    fb.put_str(x, mid_y, text, style);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Engine;

    fn hud() -> HudInfo {
        HudInfo {
            max_score: 0,
            tempo: 1.0,
            unsaved: false,
        }
    }

    fn find_text(fb: &FrameBuffer, needle: &str) -> Option<(u16, u16)> {
        (0..fb.height()).find_map(|y| {
            fb.row_text(y)
                .find(needle)
                .map(|byte| (fb.row_text(y)[..byte].chars().count() as u16, y))
        })
    }

    #[test]
    fn test_idle_prompt_and_red_border_when_stopped() {
        let view = GameView::default();
        let snap = GameSnapshot::default();
        let fb = view.render(&snap, &hud(), Viewport::new(60, 24));

        assert!(find_text(&fb, IDLE_PROMPT).is_some());
        let rect = view.field_rect(Viewport::new(60, 24));
        let corner = fb.get(rect.x, rect.y).unwrap();
        assert_eq!(corner.ch, '┌');
        assert_eq!(corner.style.fg, DANGER);
    }

    #[test]
    fn test_green_border_while_running() {
        let view = GameView::default();
        let mut engine = Engine::new(3);
        engine.start();
        let fb = view.render(&engine.snapshot(), &hud(), Viewport::new(60, 24));

        let rect = view.field_rect(Viewport::new(60, 24));
        assert_eq!(fb.get(rect.x, rect.y).unwrap().style.fg, SUCCESS);
        assert!(find_text(&fb, IDLE_PROMPT).is_none());
    }

    #[test]
    fn test_locked_cell_uses_level_palette() {
        let view = GameView::default();
        let mut snap = GameSnapshot::default();
        snap.level = 9;
        snap.field[19][0] = Some(Pixel::B);
        let vp = Viewport::new(60, 24);
        let fb = view.render(&snap, &hud(), vp);

        let rect = view.field_rect(vp);
        let cell = fb.get(rect.x + 1, rect.y + 20).unwrap();
        assert_eq!(cell.style.bg, palette::PALETTES[1][1]);
        assert_eq!(cell.ch, '▘');
    }

    #[test]
    fn test_panel_shows_max_score() {
        let view = GameView::default();
        let mut snap = GameSnapshot::default();
        snap.score = 120;
        let info = HudInfo {
            max_score: 4000,
            tempo: 1.0,
            unsaved: false,
        };
        let fb = view.render(&snap, &info, Viewport::new(60, 24));

        let (x, y) = find_text(&fb, "MAX").unwrap();
        let shown: String = fb.row_text(y).chars().skip(x as usize + 6).take(4).collect();
        assert_eq!(shown, "4000");
        assert!(find_text(&fb, "SCORE").is_some());
    }

    #[test]
    fn test_unsaved_max_score_is_flagged() {
        let view = GameView::default();
        let mut info = hud();
        info.max_score = 500;
        let vp = Viewport::new(60, 24);

        let (x, y) = find_text(&view.render(&GameSnapshot::default(), &info, vp), "MAX").unwrap();
        info.unsaved = true;
        let fb = view.render(&GameSnapshot::default(), &info, vp);

        let mark = fb.get(x + 12, y).unwrap();
        assert_eq!(mark.ch, '!');
        assert_eq!(mark.style.fg, DANGER);
    }

    #[test]
    fn test_tiny_viewport_does_not_panic() {
        let view = GameView::default();
        let fb = view.render(&GameSnapshot::default(), &hud(), Viewport::new(5, 3));
        assert_eq!(fb.width(), 5);
    }
}
