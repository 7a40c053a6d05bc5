use super::measure::BoundingBox;
use super::orientation::Orientation;

const MODE_SHIFT: u32 = 30;
const MODE_MASK: i32 = 0x3 << MODE_SHIFT;
const MODE_UNSPECIFIED: i32 = 0;
const MODE_EXACTLY: i32 = 1 << MODE_SHIFT;
const MODE_AT_MOST: i32 = 2 << MODE_SHIFT;

/// Sizing requirement a host container imposes on one axis.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum AxisConstraint {
    Exact(f32),
    AtMost(f32),
    #[default]
    Unconstrained,
}

impl AxisConstraint {
    /// Decodes a packed measure spec: mode in the top two bits, size in the low 30.
    ///
    /// The reserved fourth mode is treated as unconstrained.
    pub fn from_measure_spec(spec: i32) -> Self {
        let size = (spec & !MODE_MASK) as f32;
        match spec & MODE_MASK {
            MODE_EXACTLY => AxisConstraint::Exact(size),
            MODE_AT_MOST => AxisConstraint::AtMost(size),
            _ => AxisConstraint::Unconstrained,
        }
    }

    /// Packs the constraint back into a measure spec. Sizes are truncated to whole pixels.
    pub fn to_measure_spec(self) -> i32 {
        let pack = |size: f32| (size.max(0.0) as i32) & !MODE_MASK;
        match self {
            AxisConstraint::Exact(size) => MODE_EXACTLY | pack(size),
            AxisConstraint::AtMost(size) => MODE_AT_MOST | pack(size),
            AxisConstraint::Unconstrained => MODE_UNSPECIFIED,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Padding {
    pub left: f32,
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
}

impl Padding {
    pub const ZERO: Padding = Padding {
        left: 0.0,
        top: 0.0,
        right: 0.0,
        bottom: 0.0,
    };

    pub fn uniform(v: f32) -> Self {
        Self {
            left: v,
            top: v,
            right: v,
            bottom: v,
        }
    }

    pub fn horizontal(&self) -> f32 {
        self.left + self.right
    }

    pub fn vertical(&self) -> f32 {
        self.top + self.bottom
    }
}

/// Final surface dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ResolvedSize {
    pub width: f32,
    pub height: f32,
}

impl ResolvedSize {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

pub fn resolve_axis(content_size: f32, constraint: AxisConstraint) -> f32 {
    match constraint {
        AxisConstraint::Exact(size) => size,
        AxisConstraint::AtMost(size) => content_size.min(size),
        AxisConstraint::Unconstrained => content_size,
    }
}

/// Content-derived `(width, height)` of the surface, padding included.
///
/// Vertical runs are rotated, so the box height drives the surface width and
/// the box width drives the surface height.
pub fn content_size(bbox: BoundingBox, orientation: Orientation, padding: Padding) -> (f32, f32) {
    let (across, along) = match orientation {
        Orientation::TopToBottom | Orientation::BottomToTop => (bbox.height, bbox.width),
        Orientation::LeftToRight | Orientation::RightToLeft => (bbox.width, bbox.height),
    };
    (across + padding.horizontal(), along + padding.vertical())
}

/// Resolves both surface axes independently.
pub fn solve(
    bbox: BoundingBox,
    orientation: Orientation,
    padding: Padding,
    width: AxisConstraint,
    height: AxisConstraint,
) -> ResolvedSize {
    let (content_w, content_h) = content_size(bbox, orientation, padding);
    let resolved = ResolvedSize::new(resolve_axis(content_w, width), resolve_axis(content_h, height));

    log::debug!(
        target: "LayoutSolver",
        "{orientation}: content={}x{} constraints=({:?}, {:?}) -> {}x{}",
        content_w, content_h, width, height, resolved.width, resolved.height
    );

    resolved
}
