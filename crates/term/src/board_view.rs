//! BoardView: maps a [`BoardSnapshot`] into a terminal framebuffer.
//!
//! Pure; no terminal I/O.

use crate::core::{BoardSnapshot, CellKind};
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::types::Position;

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

const PLAY_BG: Rgb = Rgb::new(30, 30, 40);
const BLACK: Rgb = Rgb::new(0, 0, 0);

pub struct BoardView {
    /// Board cell width in terminal columns.
    cell_w: u16,
    /// Board cell height in terminal rows.
    cell_h: u16,
}

impl Default for BoardView {
    fn default() -> Self {
        // 2x1 keeps cells roughly square in most terminal fonts.
        Self { cell_w: 2, cell_h: 1 }
    }
}

impl BoardView {
    pub fn new(cell_w: u16, cell_h: u16) -> Self {
        Self {
            cell_w: cell_w.max(1),
            cell_h: cell_h.max(1),
        }
    }

    /// Terminal size of the bordered board.
    pub fn frame_size(&self, bounds: Position) -> (u16, u16) {
        let w = span(bounds.x, self.cell_w).saturating_add(2);
        let h = span(bounds.y, self.cell_h).saturating_add(2);
        (w, h)
    }

    /// Render into an existing framebuffer, resizing it to the viewport.
    pub fn render_into(&self, snap: &BoardSnapshot, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(Default::default());

        let (frame_w, frame_h) = self.frame_size(snap.bounds);
        let start_x = viewport.width.saturating_sub(frame_w) / 2;
        let start_y = viewport.height.saturating_sub(frame_h) / 2;

        self.draw_border(fb, start_x, start_y, frame_w, frame_h);

        // Cells past the viewport edge are clipped.
        for y in 0..snap.bounds.y {
            let py = (start_y + 1).saturating_add(span(y, self.cell_h));
            if py >= fb.height() {
                break;
            }
            for x in 0..snap.bounds.x {
                let px = (start_x + 1).saturating_add(span(x, self.cell_w));
                if px >= fb.width() {
                    break;
                }
                let (ch, style) = cell_glyph(snap.cell_at(Position::new(x, y)));
                fb.fill_rect(px, py, self.cell_w, self.cell_h, ch, style);
            }
        }

        let panel_x = start_x.saturating_add(frame_w).saturating_add(2);
        self.draw_side_panel(fb, snap, viewport, panel_x, start_y);

        if snap.finished {
            let text = "GAME OVER";
            let text_w = text.chars().count() as u16;
            let x = start_x.saturating_add(frame_w.saturating_sub(text_w) / 2);
            let style = CellStyle::new(Rgb::new(255, 255, 255), BLACK).bold();
            fb.put_str(x, start_y.saturating_add(frame_h / 2), text, style);
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, snap: &BoardSnapshot, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, viewport, &mut fb);
        fb
    }

    fn draw_border(&self, fb: &mut FrameBuffer, x: u16, y: u16, w: u16, h: u16) {
        if w < 2 || h < 2 {
            return;
        }
        let style = CellStyle::new(Rgb::new(200, 200, 200), BLACK);

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

    fn draw_side_panel(
        &self,
        fb: &mut FrameBuffer,
        snap: &BoardSnapshot,
        viewport: Viewport,
        panel_x: u16,
        start_y: u16,
    ) {
        if panel_x.saturating_add(12) > viewport.width {
            return;
        }
        let label = CellStyle::new(Rgb::new(220, 220, 220), BLACK).bold();
        let value = CellStyle::new(Rgb::new(200, 200, 200), BLACK);

        fb.put_str(panel_x, start_y, "LENGTH", label);
        fb.put_str(panel_x, start_y + 1, &snap.length.to_string(), value);

        fb.put_str(panel_x, start_y + 3, "KEYS", label);
        fb.put_str(panel_x, start_y + 4, "wasd move", value);
        fb.put_str(panel_x, start_y + 5, "x/q  quit", value);
    }
}

/// Terminal extent of `cells` board cells, saturating at `u16::MAX`.
fn span(cells: i32, cell: u16) -> u16 {
    u16::try_from(cells.max(0))
        .unwrap_or(u16::MAX)
        .saturating_mul(cell)
}

fn cell_glyph(kind: CellKind) -> (char, CellStyle) {
    match kind {
        CellKind::Empty => ('·', CellStyle::new(Rgb::new(90, 90, 100), PLAY_BG)),
        CellKind::Body => ('█', CellStyle::new(Rgb::new(100, 220, 120), PLAY_BG)),
        CellKind::Food => ('●', CellStyle::new(Rgb::new(255, 120, 200), PLAY_BG).bold()),
        CellKind::Head => ('█', CellStyle::new(Rgb::new(255, 255, 255), PLAY_BG).bold()),
    }
}
