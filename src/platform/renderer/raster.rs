use anyhow::{Context, Result};
use fontdue::Font as FontDue;
use image::{Rgba, RgbaImage};
use std::path::Path;

use crate::engine::directional::{PathSegment, ResolvedSize};
use crate::engine::layouter::types::{Color, TextStyle};
use crate::engine::renderer_model::Renderer;
use crate::platform::renderer::text_measurer::pen_positions;

/// fontdue でグリフをラスタライズし、パスに沿って RGBA 画像へ描く
///
/// グリフの「上」は進行方向の左手側になる
pub struct RasterRenderer {
    font: FontDue,
    image: RgbaImage,
    /// save/restore の深さ (状態は持たないのでデバッグ用)
    depth: usize,
}

impl RasterRenderer {
    pub fn new(font: FontDue, width: u32, height: u32, background: Color) -> Self {
        let Color(r, g, b, a) = background;
        Self {
            font,
            image: RgbaImage::from_pixel(width.max(1), height.max(1), Rgba([r, g, b, a])),
            depth: 0,
        }
    }

    /// 解決済みサイズから画像を作る (端数は切り上げ)
    pub fn for_surface(font: FontDue, size: ResolvedSize, background: Color) -> Self {
        Self::new(
            font,
            size.width.max(0.0).ceil() as u32,
            size.height.max(0.0).ceil() as u32,
            background,
        )
    }

    pub fn image(&self) -> &RgbaImage {
        &self.image
    }

    pub fn into_image(self) -> RgbaImage {
        self.image
    }

    pub fn save_png(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        self.image
            .save_with_format(path, image::ImageFormat::Png)
            .with_context(|| format!("failed to write {}", path.display()))
    }

    fn blend(&mut self, x: f32, y: f32, color: Color, coverage: u8) {
        let (ix, iy) = (x.floor(), y.floor());
        if ix < 0.0 || iy < 0.0 {
            return;
        }
        let (ix, iy) = (ix as u32, iy as u32);
        if ix >= self.image.width() || iy >= self.image.height() {
            return;
        }

        let alpha = (color.3 as f32 / 255.0) * (coverage as f32 / 255.0);
        let dst = self.image.get_pixel_mut(ix, iy);
        let mix = |s: u8, d: u8| (s as f32 * alpha + d as f32 * (1.0 - alpha)).round() as u8;
        let out_a = alpha + (dst[3] as f32 / 255.0) * (1.0 - alpha);
        *dst = Rgba([
            mix(color.0, dst[0]),
            mix(color.1, dst[1]),
            mix(color.2, dst[2]),
            (out_a * 255.0).round() as u8,
        ]);
    }
}

impl Renderer for RasterRenderer {
    fn save(&mut self) {
        self.depth += 1;
    }

    fn restore(&mut self) {
        self.depth = self.depth.saturating_sub(1);
    }

    fn draw_text_along_path(&mut self, text: &str, path: &PathSegment, style: &TextStyle) {
        let Some((dx, dy)) = path.direction() else {
            return;
        };
        let (ux, uy) = (dy, -dx);
        let length = path.length();
        let size = style.font_size;

        for (ch, pen_x) in pen_positions(&self.font, text, size) {
            // パスの終端を越えたグリフは描かない
            if pen_x > length {
                break;
            }
            let (m, bitmap) = self.font.rasterize(ch, size);
            if m.width == 0 || m.height == 0 {
                continue;
            }

            for gy in 0..m.height {
                for gx in 0..m.width {
                    let coverage = bitmap[gy * m.width + gx];
                    if coverage == 0 {
                        continue;
                    }
                    let along = pen_x + m.xmin as f32 + gx as f32 + 0.5;
                    let rise = m.ymin as f32 + (m.height - gy) as f32 - 0.5;
                    let x = path.start.x + dx * along + ux * rise;
                    let y = path.start.y + dy * along + uy * rise;
                    self.blend(x, y, style.color, coverage);
                }
            }
        }
    }
}
