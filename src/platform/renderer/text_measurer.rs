use crate::engine::bridge::text::{
    TextMeasureError, TextMeasurement, TextMeasurementRequest, TextMeasurer,
};
use anyhow::Context;
use fontdue::Font as FontDue;
use std::collections::HashMap;
use std::env;

/// 既定フォントの登録名
pub const DEFAULT_FONT_ID: &str = "default";

/// テキスト計測のプラットフォーム側実装 (fontdue)
///
/// 返すのはインクの外接矩形 (advance ではない)
pub struct PlatformTextMeasurer {
    fonts: HashMap<String, FontDue>,
    default_font: String,
}

impl PlatformTextMeasurer {
    /// システムフォントから初期化を試みる
    ///
    /// 環境変数 `DIRTEXT_FONT` があればそちらを優先する
    pub fn new() -> anyhow::Result<Self> {
        if let Ok(p) = env::var("DIRTEXT_FONT") {
            let bytes = std::fs::read(&p).with_context(|| format!("failed to read font {p}"))?;
            log::info!(target: "PlatformTextMeasurer", "using font from DIRTEXT_FONT: {p}");
            return Ok(Self::from_bytes(DEFAULT_FONT_ID, bytes)?);
        }

        for p in crate::platform::font::system_font_candidates()? {
            if let Ok(bytes) = std::fs::read(&p) {
                log::info!(target: "PlatformTextMeasurer", "using system font {}", p.display());
                return Ok(Self::from_bytes(DEFAULT_FONT_ID, bytes)?);
            }
        }

        anyhow::bail!("no system font found")
    }

    /// バイト列からフォントを読み込んで初期化
    pub fn from_bytes(id: &str, bytes: Vec<u8>) -> Result<Self, TextMeasureError> {
        let mut measurer = Self {
            fonts: HashMap::new(),
            default_font: id.to_string(),
        };
        measurer.add_font(id, bytes)?;
        Ok(measurer)
    }

    /// フォントファミリを追加登録する
    pub fn add_font(&mut self, id: &str, bytes: Vec<u8>) -> Result<(), TextMeasureError> {
        let font = FontDue::from_bytes(bytes, fontdue::FontSettings::default())
            .map_err(|e| TextMeasureError::FontLoadError(format!("{id}: {e}")))?;
        self.fonts.insert(id.to_string(), font);
        Ok(())
    }

    /// ファミリ名からフォントを引く (None は既定フォント)
    pub fn font(&self, family: Option<&str>) -> Result<&FontDue, TextMeasureError> {
        let id = family.unwrap_or(&self.default_font);
        self.fonts
            .get(id)
            .ok_or_else(|| TextMeasureError::FontNotFound(id.to_string()))
    }
}

impl TextMeasurer for PlatformTextMeasurer {
    fn measure(&self, req: &TextMeasurementRequest) -> Result<TextMeasurement, TextMeasureError> {
        let font = self.font(req.font.family.as_deref())?;
        let font_size = req.font.size_px;
        if !font_size.is_finite() || font_size <= 0.0 {
            return Err(TextMeasureError::InvalidMetrics(format!("font size {font_size}")));
        }

        let mut advance = 0.0_f32;
        let mut ink: Option<(f32, f32, f32, f32)> = None;

        for (ch, pen_x) in pen_positions(font, &req.text, font_size) {
            let m = font.metrics(ch, font_size);
            advance = pen_x + m.advance_width;

            let b = m.bounds;
            if b.width <= 0.0 || b.height <= 0.0 {
                continue;
            }
            // y は上向き (ベースライン = 0)
            let (x0, y0) = (pen_x + b.xmin, b.ymin);
            let (x1, y1) = (x0 + b.width, y0 + b.height);
            ink = Some(match ink {
                None => (x0, y0, x1, y1),
                Some((a0, b0, a1, b1)) => (a0.min(x0), b0.min(y0), a1.max(x1), b1.max(y1)),
            });
        }

        // 空白だけの場合は advance 幅・高さ 0
        let Some((x0, y0, x1, y1)) = ink else {
            return Ok(TextMeasurement {
                width: advance.max(0.0),
                height: 0.0,
                baseline: 0.0,
            });
        };

        Ok(TextMeasurement {
            width: x1 - x0,
            height: y1 - y0,
            baseline: y1,
        })
    }
}

/// 各文字のペン位置 (カーニング込み)
///
/// 計測と描画で同じ配置を使うために共通化している
pub(crate) fn pen_positions(font: &FontDue, text: &str, font_size: f32) -> Vec<(char, f32)> {
    let mut out = Vec::with_capacity(text.len());
    let mut pen_x = 0.0_f32;
    let mut prev: Option<char> = None;

    for ch in text.chars().filter(|c| !c.is_control()) {
        if let Some(p) = prev
            && let Some(kern) = font.horizontal_kern(p, ch, font_size)
        {
            pen_x += kern;
        }
        out.push((ch, pen_x));
        pen_x += font.metrics(ch, font_size).advance_width;
        prev = Some(ch);
    }

    out
}
