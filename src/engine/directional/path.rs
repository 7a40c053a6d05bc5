use super::layout::ResolvedSize;
use super::measure::BoundingBox;
use super::orientation::Orientation;

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// Straight baseline along which the glyph run is drawn, start to end.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PathSegment {
    pub start: Point,
    pub end: Point,
}

impl PathSegment {
    pub fn new(start: Point, end: Point) -> Self {
        Self { start, end }
    }

    pub fn length(&self) -> f32 {
        (self.end.x - self.start.x).hypot(self.end.y - self.start.y)
    }

    pub fn midpoint(&self) -> Point {
        Point::new(
            (self.start.x + self.end.x) / 2.0,
            (self.start.y + self.end.y) / 2.0,
        )
    }

    pub fn is_degenerate(&self) -> bool {
        self.start == self.end
    }

    /// Unit vector of travel. None for a zero-length segment.
    pub fn direction(&self) -> Option<(f32, f32)> {
        let len = self.length();
        if len == 0.0 || !len.is_finite() {
            return None;
        }
        Some((
            (self.end.x - self.start.x) / len,
            (self.end.y - self.start.y) / len,
        ))
    }
}

/// Builds the baseline for `bbox` centered in a `resolved` surface.
///
/// The run is centered on both axes; the baseline sits on the side that keeps
/// the glyphs (drawn on the left of the travel direction) inside the box.
pub fn build_path(resolved: ResolvedSize, bbox: BoundingBox, orientation: Orientation) -> PathSegment {
    let (w, h) = (resolved.width, resolved.height);
    let (tw, th) = (bbox.width, bbox.height);

    match orientation {
        Orientation::TopToBottom => {
            let x = (w - th) / 2.0;
            PathSegment::new(Point::new(x, (h - tw) / 2.0), Point::new(x, (h + tw) / 2.0))
        }
        Orientation::BottomToTop => {
            let x = (w + th) / 2.0;
            PathSegment::new(Point::new(x, (h + tw) / 2.0), Point::new(x, (h - tw) / 2.0))
        }
        Orientation::LeftToRight => {
            let y = (h + th) / 2.0;
            PathSegment::new(Point::new((w - tw) / 2.0, y), Point::new((w + tw) / 2.0, y))
        }
        Orientation::RightToLeft => {
            let y = (h - th) / 2.0;
            PathSegment::new(Point::new((w + tw) / 2.0, y), Point::new((w - tw) / 2.0, y))
        }
    }
}
