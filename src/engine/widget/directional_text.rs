use crate::engine::bridge::text::TextMeasurer;
use crate::engine::directional::{
    self, AxisConstraint, BoundingBox, Orientation, Padding, PathSegment, ResolvedSize,
    error::Result,
};
use crate::engine::layouter::types::TextStyle;
use crate::engine::renderer_model::Renderer;

use super::attributes::{Attribute, DirectionalTextConfig};

/// Host-side adapter around the directional layout core.
///
/// Setters only mark the view dirty; the host is expected to call
/// [`measure`](Self::measure) and [`draw`](Self::draw) again afterwards.
#[derive(Debug, Clone)]
pub struct DirectionalTextView {
    text: String,
    style: TextStyle,
    padding: Padding,
    orientation: Orientation,

    /// Bounding box from the last measure pass
    bounds: Option<BoundingBox>,
    /// Surface size assigned by the last measure or layout pass
    frame: Option<ResolvedSize>,

    needs_layout: bool,
    needs_redraw: bool,
}

impl DirectionalTextView {
    pub fn new(config: DirectionalTextConfig) -> Self {
        Self {
            text: config.text,
            style: config.style,
            padding: config.padding,
            orientation: config.orientation,
            bounds: None,
            frame: None,
            needs_layout: true,
            needs_redraw: true,
        }
    }

    pub fn from_attributes(attrs: &[Attribute]) -> Result<Self> {
        Ok(Self::new(DirectionalTextConfig::from_attributes(attrs)?))
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn style(&self) -> &TextStyle {
        &self.style
    }

    pub fn padding(&self) -> Padding {
        self.padding
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    pub fn bounds(&self) -> Option<BoundingBox> {
        self.bounds
    }

    pub fn frame(&self) -> Option<ResolvedSize> {
        self.frame
    }

    pub fn needs_layout(&self) -> bool {
        self.needs_layout
    }

    pub fn needs_redraw(&self) -> bool {
        self.needs_redraw
    }

    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
        self.invalidate_layout();
    }

    pub fn set_style(&mut self, style: TextStyle) {
        self.style = style;
        self.invalidate_layout();
    }

    pub fn set_padding(&mut self, padding: Padding) {
        self.padding = padding;
        self.invalidate_layout();
    }

    pub fn set_orientation(&mut self, orientation: Orientation) {
        self.orientation = orientation;
        self.invalidate_layout();
    }

    /// Sets the orientation from its numeric code. Unknown codes leave the view untouched.
    pub fn set_orientation_code(&mut self, code: i32) -> Result<()> {
        let orientation = Orientation::try_from(code)?;
        self.set_orientation(orientation);
        Ok(())
    }

    fn invalidate_layout(&mut self) {
        self.bounds = None;
        self.needs_layout = true;
        self.needs_redraw = true;
    }

    /// Measure pass: bounding box, then each axis against the host constraints.
    ///
    /// The resolved size also becomes the frame until the host calls [`layout`](Self::layout).
    pub fn measure(
        &mut self,
        measurer: &dyn TextMeasurer,
        width: AxisConstraint,
        height: AxisConstraint,
    ) -> Result<ResolvedSize> {
        let bounds = match directional::measure(&self.text, &self.style.font(), measurer) {
            Ok(b) => b,
            Err(e) => {
                self.bounds = None;
                return Err(e);
            }
        };
        let resolved = directional::solve(bounds, self.orientation, self.padding, width, height);

        self.bounds = Some(bounds);
        self.frame = Some(resolved);
        self.needs_layout = false;
        self.needs_redraw = true;
        Ok(resolved)
    }

    /// Assigns the final surface size chosen by the host container.
    pub fn layout(&mut self, size: ResolvedSize) {
        if self.frame != Some(size) {
            self.frame = Some(size);
            self.needs_redraw = true;
        }
    }

    /// Draw pass. Returns the path the text was drawn along, or None when
    /// there was nothing to draw (empty text, or no successful measure since
    /// the last change).
    pub fn draw(&mut self, renderer: &mut dyn Renderer) -> Option<PathSegment> {
        let (Some(bounds), Some(frame)) = (self.bounds, self.frame) else {
            log::warn!(target: "DirectionalTextView", "draw before measure, skipping");
            return None;
        };

        let path = directional::build_path(frame, bounds, self.orientation);
        self.needs_redraw = false;

        if self.text.is_empty() || path.is_degenerate() {
            log::debug!(target: "DirectionalTextView", "nothing to draw for {:?}", self.text);
            return None;
        }

        log::debug!(
            target: "DirectionalTextView",
            "{}: ({}, {}) -> ({}, {}) in {}x{}",
            self.orientation, path.start.x, path.start.y, path.end.x, path.end.y, frame.width, frame.height
        );

        renderer.save();
        renderer.draw_text_along_path(&self.text, &path, &self.style);
        renderer.restore();

        Some(path)
    }

    /// Current path without drawing. None until measured.
    pub fn path(&self) -> Option<PathSegment> {
        Some(directional::build_path(self.frame?, self.bounds?, self.orientation))
    }
}

impl Default for DirectionalTextView {
    fn default() -> Self {
        Self::new(DirectionalTextConfig::default())
    }
}
