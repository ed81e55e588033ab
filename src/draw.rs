use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rgba(pub [u8; 4]);

impl Rgba {
    pub const GREEN: Rgba = Rgba([0, 128, 0, 255]);
    pub const RED: Rgba = Rgba([255, 0, 0, 255]);
    pub const BACKGROUND: Rgba = Rgba([20, 20, 30, 255]);
    pub const WHITE: Rgba = Rgba([255, 255, 255, 255]);
    pub const SHADE: Rgba = Rgba([0, 0, 0, 170]);
}

/// One immediate-mode draw command, in surface pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Draw {
    Clear(Rgba),
    Rect { x: i32, y: i32, w: u32, h: u32, color: Rgba },
}

/// Rasterizes draw commands onto an RGBA8 frame of a fixed size.
#[derive(Clone, Copy, Debug)]
pub struct Canvas {
    pub width: u32,
    pub height: u32,
}

impl Canvas {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    pub fn paint(&self, frame: &mut [u8], commands: &[Draw]) {
        for cmd in commands {
            match *cmd {
                Draw::Clear(c) => self.clear(frame, c),
                Draw::Rect { x, y, w, h, color } => self.fill_rect(frame, x, y, w, h, color),
            }
        }
    }

    pub fn clear(&self, frame: &mut [u8], c: Rgba) {
        for px in frame.chunks_exact_mut(4) {
            px.copy_from_slice(&c.0);
        }
    }

    fn blend_pixel(&self, frame: &mut [u8], x: u32, y: u32, c: Rgba) {
        if x >= self.width || y >= self.height {
            return;
        }
        let idx = ((y * self.width + x) * 4) as usize;
        if idx + 3 >= frame.len() {
            return;
        }
        let [r, g, b, a] = c.0;
        let (a, ia) = (a as u16, 255 - a as u16);
        frame[idx] = ((r as u16 * a + frame[idx] as u16 * ia) / 255) as u8;
        frame[idx + 1] = ((g as u16 * a + frame[idx + 1] as u16 * ia) / 255) as u8;
        frame[idx + 2] = ((b as u16 * a + frame[idx + 2] as u16 * ia) / 255) as u8;
        frame[idx + 3] = 255;
    }

    /// Filled rectangle clipped to the frame; fully off-frame is a no-op.
    pub fn fill_rect(&self, frame: &mut [u8], x: i32, y: i32, w: u32, h: u32, c: Rgba) {
        let x0 = x.max(0) as i64;
        let y0 = y.max(0) as i64;
        let x1 = (x as i64 + w as i64).min(self.width as i64);
        let y1 = (y as i64 + h as i64).min(self.height as i64);
        for py in y0..y1 {
            for px in x0..x1 {
                self.blend_pixel(frame, px as u32, py as u32, c);
            }
        }
    }

    pub fn draw_text(&self, frame: &mut [u8], text: &str, x: u32, y: u32, scale: u32, c: Rgba) {
        let mut cx = x;
        for ch in text.chars() {
            if let Some(rows) = glyph_5x7(ch) {
                for (ry, row) in rows.iter().enumerate() {
                    for rx in 0..5u32 {
                        if (row >> (4 - rx)) & 1 == 1 {
                            for sy in 0..scale {
                                for sx in 0..scale {
                                    self.blend_pixel(frame, cx + rx * scale + sx, y + ry as u32 * scale + sy, c);
                                }
                            }
                        }
                    }
                }
            }
            cx += 6 * scale;
        }
    }

    pub fn text_width(text: &str, scale: u32) -> u32 {
        (text.chars().count() as u32 * 6 * scale).saturating_sub(scale)
    }

    /// Dimmed band across the middle of the frame with centered lines of text.
    pub fn notice(&self, frame: &mut [u8], lines: &[&str], color: Rgba) {
        let scale = if self.width >= 320 { 2 } else { 1 };
        let line_h = 10 * scale;
        let band_h = line_h * lines.len() as u32 + 4 * scale;
        let top = self.height.saturating_sub(band_h) / 2;
        self.fill_rect(frame, 0, top as i32, self.width, band_h, Rgba::SHADE);
        for (i, line) in lines.iter().enumerate() {
            let w = Self::text_width(line, scale);
            let x = self.width.saturating_sub(w) / 2;
            self.draw_text(frame, line, x, top + 2 * scale + i as u32 * line_h, scale, color);
        }
    }
}

fn glyph_5x7(ch: char) -> Option<[u8; 7]> {
    Some(match ch.to_ascii_uppercase() {
        'A' => [0b01110, 0b10001, 0b10001, 0b11111, 0b10001, 0b10001, 0b10001],
        'C' => [0b01110, 0b10001, 0b10000, 0b10000, 0b10000, 0b10001, 0b01110],
        'D' => [0b11100, 0b10010, 0b10001, 0b10001, 0b10001, 0b10010, 0b11100],
        'E' => [0b11111, 0b10000, 0b11110, 0b10000, 0b10000, 0b10000, 0b11111],
        'G' => [0b01110, 0b10001, 0b10000, 0b10111, 0b10001, 0b10001, 0b01110],
        'H' => [0b10001, 0b10001, 0b11111, 0b10001, 0b10001, 0b10001, 0b10001],
        'L' => [0b10000, 0b10000, 0b10000, 0b10000, 0b10000, 0b10000, 0b11111],
        'M' => [0b10001, 0b11011, 0b10101, 0b10101, 0b10001, 0b10001, 0b10001],
        'N' => [0b10001, 0b11001, 0b10101, 0b10011, 0b10001, 0b10001, 0b10001],
        'O' => [0b01110, 0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b01110],
        'P' => [0b11110, 0b10001, 0b10001, 0b11110, 0b10000, 0b10000, 0b10000],
        'R' => [0b11110, 0b10001, 0b10001, 0b11110, 0b10100, 0b10010, 0b10001],
        'S' => [0b01111, 0b10000, 0b10000, 0b01110, 0b00001, 0b00001, 0b11110],
        'T' => [0b11111, 0b00100, 0b00100, 0b00100, 0b00100, 0b00100, 0b00100],
        'U' => [0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b01110],
        'V' => [0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b01010, 0b00100],
        '0' => [0b01110, 0b10001, 0b10011, 0b10101, 0b11001, 0b10001, 0b01110],
        '1' => [0b00100, 0b01100, 0b00100, 0b00100, 0b00100, 0b00100, 0b01110],
        '2' => [0b01110, 0b10001, 0b00001, 0b00010, 0b00100, 0b01000, 0b11111],
        '3' => [0b11110, 0b00001, 0b00001, 0b01110, 0b00001, 0b00001, 0b11110],
        '4' => [0b00010, 0b00110, 0b01010, 0b10010, 0b11111, 0b00010, 0b00010],
        '5' => [0b11111, 0b10000, 0b11110, 0b00001, 0b00001, 0b10001, 0b01110],
        '6' => [0b00110, 0b01000, 0b10000, 0b11110, 0b10001, 0b10001, 0b01110],
        '7' => [0b11111, 0b00001, 0b00010, 0b00100, 0b01000, 0b01000, 0b01000],
        '8' => [0b01110, 0b10001, 0b10001, 0b01110, 0b10001, 0b10001, 0b01110],
        '9' => [0b01110, 0b10001, 0b10001, 0b01111, 0b00001, 0b00010, 0b01100],
        ':' => [0b00000, 0b00100, 0b00000, 0b00000, 0b00100, 0b00000, 0b00000],
        _ => return None,
    })
}
