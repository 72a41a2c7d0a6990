//! GameView: maps a session's draw list into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.
//!
//! Each sprite is the unit quad of its model transform, projected through the
//! orthographic view (x in -5..5, y in -3.75..3.75) into the playfield. Message
//! and fuel textures are drawn as text labels centred on their quad instead.

use std::fmt::Write as _;

use arrayvec::ArrayString;

use crate::assets::Palette;
use crate::core::{Outcome, Session, Sprite};
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::types::{Texture, VIEW_HALF_HEIGHT, VIEW_HALF_WIDTH};

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

/// Lander readouts shown under the playfield.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HudView {
    pub fuel: i32,
    pub vx: f32,
    pub vy: f32,
    pub altitude: f32,
    pub outcome: Outcome,
}

impl HudView {
    pub fn from_session(session: &Session) -> Self {
        let player = session.player();
        let v = player.velocity();
        Self {
            fuel: player.fuel(),
            vx: v.x,
            vy: v.y,
            altitude: player.position().y + VIEW_HALF_HEIGHT,
            outcome: session.outcome(),
        }
    }
}

/// Where the playfield sits in the viewport.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Layout {
    /// Terminal cells per world unit, before the cell aspect is applied.
    pub scale: u16,
    /// Top-left corner of the border.
    pub start_x: u16,
    pub start_y: u16,
    /// Playfield size inside the border.
    pub field_w: u16,
    pub field_h: u16,
}

impl Layout {
    pub fn frame_w(&self) -> u16 {
        self.field_w + 2
    }

    pub fn frame_h(&self) -> u16 {
        self.field_h + 2
    }
}

/// A lightweight terminal renderer for the lander game.
pub struct GameView {
    /// Terminal columns per world unit at scale 1.
    cell_w: u16,
    /// Terminal rows per world unit at scale 1.
    cell_h: u16,
    palette: Palette,
}

impl Default for GameView {
    fn default() -> Self {
        // 2x1 helps compensate for typical terminal glyph aspect ratio.
        Self::new(2, 1)
    }
}

const HUD_ROWS: u16 = 1;

/// Widest HUD readout, e.g. "VX -12345.67".
const READOUT_CAP: usize = 16;

impl GameView {
    pub fn new(cell_w: u16, cell_h: u16) -> Self {
        Self {
            cell_w: cell_w.max(1),
            cell_h: cell_h.max(1),
            palette: Palette::builtin(),
        }
    }

    pub fn with_palette(mut self, palette: Palette) -> Self {
        self.palette = palette;
        self
    }

    /// Largest integer scale whose playfield fits the viewport (at least 1).
    pub fn layout(&self, viewport: Viewport) -> Layout {
        let world_w = 2.0 * VIEW_HALF_WIDTH;
        let world_h = 2.0 * VIEW_HALF_HEIGHT;

        let avail_w = viewport.width.saturating_sub(2) as f32;
        let avail_h = viewport.height.saturating_sub(2 + HUD_ROWS) as f32;
        let fit_x = (avail_w / (world_w * self.cell_w as f32)).floor();
        let fit_y = (avail_h / (world_h * self.cell_h as f32)).floor();
        let scale = fit_x.min(fit_y).max(1.0) as u16;

        let field_w = (world_w * (scale * self.cell_w) as f32).ceil() as u16;
        let field_h = (world_h * (scale * self.cell_h) as f32).ceil() as u16;

        let start_x = viewport.width.saturating_sub(field_w + 2) / 2;
        let start_y = viewport.height.saturating_sub(field_h + 2 + HUD_ROWS) / 2;

        Layout {
            scale,
            start_x,
            start_y,
            field_w,
            field_h,
        }
    }

    /// Project a world point to fractional playfield coordinates (column, row).
    pub fn project(&self, layout: &Layout, x: f32, y: f32) -> (f32, f32) {
        let sx = (layout.scale * self.cell_w) as f32;
        let sy = (layout.scale * self.cell_h) as f32;
        ((x + VIEW_HALF_WIDTH) * sx, (VIEW_HALF_HEIGHT - y) * sy)
    }

    /// Render sprites (in draw order) into an existing framebuffer.
    ///
    /// This is the allocation-free hot path. Callers can reuse a framebuffer
    /// across frames and only resize when the terminal size changes.
    pub fn render_into(
        &self,
        sprites: &[Sprite],
        hud: Option<&HudView>,
        viewport: Viewport,
        fb: &mut FrameBuffer,
    ) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(CellStyle::default().into_cell(' '));

        let layout = self.layout(viewport);

        let space = CellStyle {
            fg: Rgb::new(70, 70, 90),
            bg: Rgb::new(8, 8, 20),
            bold: false,
            dim: false,
        };
        let border = CellStyle {
            fg: Rgb::new(200, 200, 200),
            bg: Rgb::new(0, 0, 0),
            bold: false,
            dim: false,
        };

        fb.fill_rect(
            layout.start_x + 1,
            layout.start_y + 1,
            layout.field_w,
            layout.field_h,
            ' ',
            space,
        );
        self.draw_border(
            fb,
            layout.start_x,
            layout.start_y,
            layout.frame_w(),
            layout.frame_h(),
            border,
        );

        for sprite in sprites {
            match sprite.texture {
                Texture::WinMessage => {
                    self.draw_label(fb, &layout, sprite, "MISSION ACCOMPLISHED", true)
                }
                Texture::LoseMessage => {
                    self.draw_label(fb, &layout, sprite, "MISSION FAILED", true)
                }
                Texture::FullFuel => self.draw_label(fb, &layout, sprite, "FUEL ████", false),
                Texture::HalfFuel => self.draw_label(fb, &layout, sprite, "FUEL ██░░", false),
                Texture::LowFuel => self.draw_label(fb, &layout, sprite, "FUEL █░░░", false),
                Texture::NoFuel => self.draw_label(fb, &layout, sprite, "FUEL ░░░░", false),
                Texture::Spritesheet => self.draw_lander(fb, &layout, sprite),
                Texture::Platform => {
                    let style = CellStyle {
                        fg: self.palette.color(Texture::Platform),
                        bg: space.bg,
                        bold: false,
                        dim: false,
                    };
                    self.fill_quad(fb, &layout, sprite, '█', style);
                }
                Texture::Asteroid => {
                    let style = CellStyle {
                        fg: self.palette.color(Texture::Asteroid),
                        bg: space.bg,
                        bold: false,
                        dim: false,
                    };
                    self.fill_quad(fb, &layout, sprite, '▓', style);
                }
            }
        }

        if let Some(hud) = hud {
            self.draw_hud(fb, &layout, viewport, hud);
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, sprites: &[Sprite], hud: Option<&HudView>, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(sprites, hud, viewport, &mut fb);
        fb
    }

    /// Playfield cell range covered by a sprite's unit quad, clipped.
    fn quad_cells(&self, layout: &Layout, sprite: &Sprite) -> Option<(u16, u16, u16, u16)> {
        let (cx, cy) = sprite.center();
        let (c0, r0) = self.project(layout, cx - 0.5, cy + 0.5);
        let (c1, r1) = self.project(layout, cx + 0.5, cy - 0.5);

        let clip = |v: f32, max: u16| -> u16 { v.round().clamp(0.0, max as f32) as u16 };
        let x0 = clip(c0, layout.field_w);
        let x1 = clip(c1, layout.field_w);
        let y0 = clip(r0, layout.field_h);
        let y1 = clip(r1, layout.field_h);

        if x1 <= x0 || y1 <= y0 {
            return None;
        }
        Some((x0, y0, x1 - x0, y1 - y0))
    }

    fn fill_quad(
        &self,
        fb: &mut FrameBuffer,
        layout: &Layout,
        sprite: &Sprite,
        ch: char,
        style: CellStyle,
    ) {
        if let Some((x, y, w, h)) = self.quad_cells(layout, sprite) {
            fb.fill_rect(
                layout.start_x + 1 + x,
                layout.start_y + 1 + y,
                w,
                h,
                ch,
                style,
            );
        }
    }

    fn draw_lander(&self, fb: &mut FrameBuffer, layout: &Layout, sprite: &Sprite) {
        let color = match sprite.frame {
            Some(frame) => self.palette.frame_color(frame),
            None => self.palette.color(Texture::Spritesheet),
        };
        let body = CellStyle {
            fg: color,
            bg: Rgb::new(8, 8, 20),
            bold: true,
            dim: false,
        };
        self.fill_quad(fb, layout, sprite, '█', body);

        let Some((x, y, w, h)) = self.quad_cells(layout, sprite) else {
            return;
        };
        let nose = CellStyle {
            fg: Rgb::new(0, 0, 0),
            bg: color,
            bold: true,
            dim: false,
        };
        fb.put_char(
            layout.start_x + 1 + x + w / 2,
            layout.start_y + 1 + y + h / 2,
            lander_glyph(sprite.frame),
            nose,
        );
    }

    fn draw_label(
        &self,
        fb: &mut FrameBuffer,
        layout: &Layout,
        sprite: &Sprite,
        text: &str,
        bold: bool,
    ) {
        let (cx, cy) = sprite.center();
        let (col, row) = self.project(layout, cx, cy);
        let text_w = text.chars().count() as u16;

        let row = (row.floor().max(0.0) as u16).min(layout.field_h.saturating_sub(1));
        let left = (col.round() as i32 - (text_w / 2) as i32)
            .clamp(0, layout.field_w.saturating_sub(text_w) as i32) as u16;

        let style = CellStyle {
            fg: self.palette.color(sprite.texture),
            bg: Rgb::new(0, 0, 0),
            bold,
            dim: false,
        };
        fb.put_str(
            layout.start_x + 1 + left,
            layout.start_y + 1 + row,
            text,
            style,
        );
    }

    fn draw_hud(&self, fb: &mut FrameBuffer, layout: &Layout, viewport: Viewport, hud: &HudView) {
        let y = layout.start_y + layout.frame_h();
        if y >= viewport.height {
            return;
        }

        let label = CellStyle {
            fg: Rgb::new(220, 220, 220),
            bg: Rgb::new(0, 0, 0),
            bold: true,
            dim: false,
        };
        let value = CellStyle {
            fg: Rgb::new(200, 200, 200),
            bg: Rgb::new(0, 0, 0),
            bold: false,
            dim: false,
        };

        let status = match hud.outcome {
            Outcome::Flying => "q: quit",
            Outcome::Landed => "LANDED",
            Outcome::Crashed => "CRASHED",
        };
        let right = layout.start_x + layout.frame_w();
        let status_x = right.saturating_sub(status.len() as u16);
        fb.put_str(status_x, y, status, label);

        let mut x = layout.start_x;
        fb.put_str(x, y, "FUEL", label);
        x = fb.put_i32(x + 5, y, hud.fuel, value) + 2;

        let readouts = [("VX", hud.vx, true), ("VY", hud.vy, true), ("ALT", hud.altitude, false)];
        for (name, v, signed) in readouts {
            let mut field = ArrayString::<READOUT_CAP>::new();
            let written = if signed {
                write!(field, "{name} {v:+.2}")
            } else {
                write!(field, "{name} {v:.2}")
            };
            // Readings too wide for the field are left out.
            if written.is_err() {
                continue;
            }

            let end = x + (field.len() as u16);
            if end >= status_x {
                break;
            }
            fb.put_str(x, y, &field, value);
            x = end + 2;
        }
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
}

/// Lander glyph for a sprite-sheet frame: right 0/1, left 2/3, up 4/5.
fn lander_glyph(frame: Option<usize>) -> char {
    match frame {
        Some(0) => '▶',
        Some(1) => '▷',
        Some(2) => '◀',
        Some(3) => '◁',
        Some(5) => '△',
        _ => '▲',
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Controls;

    #[test]
    fn layout_picks_largest_fitting_scale() {
        let view = GameView::default();
        // 80x24: width allows 3, height (24 - 3) / 7.5 allows 2.
        let l = view.layout(Viewport::new(80, 24));
        assert_eq!(l.scale, 2);
        assert_eq!(l.field_w, 40);
        assert_eq!(l.field_h, 15);
        assert_eq!(l.start_x, 19);
    }

    #[test]
    fn tiny_viewports_still_get_scale_one() {
        let view = GameView::default();
        let l = view.layout(Viewport::new(10, 5));
        assert_eq!(l.scale, 1);
        assert_eq!(l.field_w, 20);
        assert_eq!(l.field_h, 8);
    }

    #[test]
    fn projection_maps_view_corners() {
        let view = GameView::default();
        let l = view.layout(Viewport::new(42, 18));
        assert_eq!(view.project(&l, -5.0, 3.75), (0.0, 0.0));
        assert_eq!(view.project(&l, 5.0, -3.75), (40.0, 15.0));
        assert_eq!(view.project(&l, 0.0, 0.0), (20.0, 7.5));
    }

    #[test]
    fn renders_new_session_into_frame() {
        let mut session = Session::new();
        session.step(Controls::NONE);
        let view = GameView::default();
        let hud = HudView::from_session(&session);
        let fb = view.render(&session.draw_list(), Some(&hud), Viewport::new(42, 18));

        assert_eq!(fb.get(0, 0).map(|c| c.ch), Some('┌'));
        assert_eq!(fb.get(41, 16).map(|c| c.ch), Some('┘'));

        // Lander quad spans columns 18..22 and rows 0..2 of the field.
        assert_eq!(fb.get(21, 2).map(|c| c.ch), Some('▲'));
        assert_eq!(fb.get(19, 1).map(|c| c.ch), Some('█'));

        assert!(fb.row_string(4).contains("FUEL ████"));
        assert!(!fb.row_string(8).contains("MISSION"));
        assert!(fb.row_string(17).starts_with("FUEL 1000"));
    }

    #[test]
    fn oversized_readouts_are_left_out_of_the_hud() {
        let hud = HudView {
            fuel: 1000,
            vx: f32::MAX,
            vy: -1.5,
            altitude: 3.5,
            outcome: Outcome::Flying,
        };
        let fb = GameView::default().render(&[], Some(&hud), Viewport::new(80, 24));

        let row = fb.row_string(20);
        assert!(row.contains("FUEL 1000"));
        assert!(!row.contains("VX"));
        assert!(row.contains("VY -1.50"));
        assert!(row.contains("ALT 3.50"));
        assert!(row.contains("q: quit"));
    }

    #[test]
    fn lander_glyph_follows_frame() {
        assert_eq!(lander_glyph(Some(2)), '◀');
        assert_eq!(lander_glyph(Some(4)), '▲');
        assert_eq!(lander_glyph(None), '▲');
    }
}
