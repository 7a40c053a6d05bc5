use crate::engine::directional::PathSegment;
use crate::engine::layouter::types::TextStyle;

#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Save,
    Restore,
    DrawTextOnPath {
        text: String,
        path: PathSegment,
        style: TextStyle,
    },
}

/// Host drawing capability.
///
/// The widget only computes the path; pixels are the renderer's business.
pub trait Renderer {
    fn save(&mut self) {}

    fn restore(&mut self) {}

    fn draw_text_along_path(&mut self, text: &str, path: &PathSegment, style: &TextStyle);
}

/// Recording renderer: every call becomes a `DrawCommand`.
impl Renderer for Vec<DrawCommand> {
    fn save(&mut self) {
        self.push(DrawCommand::Save);
    }

    fn restore(&mut self) {
        self.push(DrawCommand::Restore);
    }

    fn draw_text_along_path(&mut self, text: &str, path: &PathSegment, style: &TextStyle) {
        self.push(DrawCommand::DrawTextOnPath {
            text: text.to_string(),
            path: *path,
            style: style.clone(),
        });
    }
}

/// Replays recorded commands into another renderer.
pub fn replay(commands: &[DrawCommand], target: &mut dyn Renderer) {
    for cmd in commands {
        match cmd {
            DrawCommand::Save => target.save(),
            DrawCommand::Restore => target.restore(),
            DrawCommand::DrawTextOnPath { text, path, style } => {
                target.draw_text_along_path(text, path, style)
            }
        }
    }
}
