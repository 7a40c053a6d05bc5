use directional_text::directional::{
    AxisConstraint, BoundingBox, DirectionalTextError, Orientation, Padding, PathSegment, Point,
    ResolvedSize,
};
use directional_text::engine::bridge::text::{
    FallbackTextMeasurer, TextMeasureError, TextMeasurement, TextMeasurementRequest, TextMeasurer,
};
use directional_text::engine::layouter::types::{Color, TextStyle};
use directional_text::engine::renderer_model::DrawCommand;
use directional_text::engine::widget::Attribute;
use directional_text::{DirectionalTextConfig, DirectionalTextView};
use std::sync::atomic::{AtomicUsize, Ordering};

/// 常に 40x10 を返す計測器
#[derive(Default)]
struct MockMeasurer {
    calls: AtomicUsize,
}

impl TextMeasurer for MockMeasurer {
    fn measure(&self, _req: &TextMeasurementRequest) -> Result<TextMeasurement, TextMeasureError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(TextMeasurement {
            width: 40.0,
            height: 10.0,
            baseline: 10.0,
        })
    }
}

struct BrokenMeasurer;

impl TextMeasurer for BrokenMeasurer {
    fn measure(&self, _req: &TextMeasurementRequest) -> Result<TextMeasurement, TextMeasureError> {
        Err(TextMeasureError::FontLoadError("truncated font".to_string()))
    }
}

struct NanMeasurer;

impl TextMeasurer for NanMeasurer {
    fn measure(&self, _req: &TextMeasurementRequest) -> Result<TextMeasurement, TextMeasureError> {
        Ok(TextMeasurement {
            width: f32::NAN,
            height: 10.0,
            baseline: 10.0,
        })
    }
}

fn view(text: &str, orientation: Orientation) -> DirectionalTextView {
    DirectionalTextView::new(DirectionalTextConfig {
        text: text.to_string(),
        orientation,
        ..Default::default()
    })
}

const FREE: AxisConstraint = AxisConstraint::Unconstrained;

#[test]
fn measure_then_draw_top_to_bottom() {
    let mut v = view("hello", Orientation::TopToBottom);
    let size = v.measure(&MockMeasurer::default(), FREE, FREE).expect("measure");
    assert_eq!(size, ResolvedSize::new(10.0, 40.0));
    assert_eq!(v.bounds(), Some(BoundingBox::new(40.0, 10.0)));

    let mut commands: Vec<DrawCommand> = Vec::new();
    let path = v.draw(&mut commands).expect("drawn");
    assert_eq!(path, PathSegment::new(Point::new(0.0, 0.0), Point::new(0.0, 40.0)));

    assert_eq!(
        commands,
        vec![
            DrawCommand::Save,
            DrawCommand::DrawTextOnPath {
                text: "hello".to_string(),
                path,
                style: TextStyle::default(),
            },
            DrawCommand::Restore,
        ]
    );
    assert!(!v.needs_layout());
    assert!(!v.needs_redraw());
}

#[test]
fn orientation_change_requests_layout_and_redraw() {
    let measurer = MockMeasurer::default();
    let mut v = view("hello", Orientation::TopToBottom);
    v.measure(&measurer, FREE, FREE).expect("measure");
    v.draw(&mut Vec::<DrawCommand>::new());

    v.set_orientation(Orientation::LeftToRight);
    assert!(v.needs_layout());
    assert!(v.needs_redraw());

    // 再計測するまでは描かない
    let mut commands: Vec<DrawCommand> = Vec::new();
    assert_eq!(v.draw(&mut commands), None);
    assert!(commands.is_empty());

    let size = v.measure(&measurer, FREE, FREE).expect("measure");
    assert_eq!(size, ResolvedSize::new(40.0, 10.0));
    assert_eq!(measurer.calls.load(Ordering::SeqCst), 2);
}

#[test]
fn invalid_orientation_code_is_rejected() {
    let mut v = view("hello", Orientation::BottomToTop);
    assert_eq!(
        v.set_orientation_code(7),
        Err(DirectionalTextError::InvalidOrientation("7".to_string()))
    );
    assert_eq!(v.orientation(), Orientation::BottomToTop);

    v.set_orientation_code(3).expect("valid code");
    assert_eq!(v.orientation(), Orientation::RightToLeft);
}

#[test]
fn metrics_failure_propagates_and_nothing_is_drawn() {
    let mut v = view("hello", Orientation::LeftToRight);
    let err = v.measure(&BrokenMeasurer, FREE, FREE).unwrap_err();
    assert!(matches!(
        err,
        DirectionalTextError::MetricsUnavailable(TextMeasureError::FontLoadError(_))
    ));

    let mut commands: Vec<DrawCommand> = Vec::new();
    assert_eq!(v.draw(&mut commands), None);
    assert!(commands.is_empty());
}

#[test]
fn non_finite_metrics_are_not_papered_over() {
    let mut v = view("hello", Orientation::LeftToRight);
    let err = v.measure(&NanMeasurer, FREE, FREE).unwrap_err();
    assert!(matches!(
        err,
        DirectionalTextError::MetricsUnavailable(TextMeasureError::InvalidMetrics(_))
    ));
}

#[test]
fn empty_text_skips_the_measurer_and_the_draw() {
    let measurer = MockMeasurer::default();
    let mut v = view("", Orientation::LeftToRight);
    v.set_padding(Padding::uniform(3.0));

    let size = v
        .measure(&measurer, FREE, AxisConstraint::Exact(20.0))
        .expect("measure");
    assert_eq!(size, ResolvedSize::new(6.0, 20.0));
    assert_eq!(measurer.calls.load(Ordering::SeqCst), 0);

    let path = v.path().expect("measured");
    assert_eq!(path.start, path.end);

    let mut commands: Vec<DrawCommand> = Vec::new();
    assert_eq!(v.draw(&mut commands), None);
    assert!(commands.is_empty());
}

#[test]
fn host_layout_overrides_measured_frame() {
    let mut v = view("hello", Orientation::LeftToRight);
    v.measure(&MockMeasurer::default(), AxisConstraint::AtMost(100.0), FREE)
        .expect("measure");
    v.draw(&mut Vec::<DrawCommand>::new());

    v.layout(ResolvedSize::new(100.0, 30.0));
    assert!(v.needs_redraw());

    let path = v.draw(&mut Vec::<DrawCommand>::new()).expect("drawn");
    assert_eq!(path, PathSegment::new(Point::new(30.0, 20.0), Point::new(70.0, 20.0)));
}

#[test]
fn draw_uses_the_text_color() {
    let mut v = DirectionalTextView::from_attributes(&[
        Attribute::new("text", "label"),
        Attribute::new("direction", "1"),
        Attribute::new("textColor", "#ff0000"),
    ])
    .expect("attributes");
    v.measure(&FallbackTextMeasurer::default(), FREE, FREE)
        .expect("measure");

    let mut commands: Vec<DrawCommand> = Vec::new();
    v.draw(&mut commands).expect("drawn");
    let DrawCommand::DrawTextOnPath { style, .. } = &commands[1] else {
        panic!("expected DrawTextOnPath, got {:?}", commands[1]);
    };
    assert_eq!(style.color, Color(255, 0, 0, 255));
}

#[test]
fn attributes_build_a_config() {
    let config = DirectionalTextConfig::from_attributes(&[
        Attribute::new("direction", "right-to-left"),
        Attribute::new("text", "縦書き"),
        Attribute::new("textSize", "24px"),
        Attribute::new("paddingLeft", "2"),
        Attribute::new("padding", "5"),
        Attribute::new("fontFamily", "serif"),
        Attribute::new("onClick", "ignored"),
    ])
    .expect("attributes");

    assert_eq!(config.orientation, Orientation::RightToLeft);
    assert_eq!(config.text, "縦書き");
    assert_eq!(config.style.font_size, 24.0);
    assert_eq!(config.style.font_family.as_deref(), Some("serif"));
    assert_eq!(
        config.padding,
        Padding {
            left: 2.0,
            top: 5.0,
            right: 5.0,
            bottom: 5.0,
        }
    );
}

#[test]
fn missing_direction_defaults_to_top_to_bottom() {
    let config = DirectionalTextConfig::from_attributes(&[]).expect("attributes");
    assert_eq!(config.orientation, Orientation::TopToBottom);
}

#[test]
fn bad_attributes_fail_fast() {
    assert!(matches!(
        DirectionalTextConfig::from_attributes(&[Attribute::new("direction", "4")]),
        Err(DirectionalTextError::InvalidOrientation(_))
    ));
    assert_eq!(
        DirectionalTextConfig::from_attributes(&[Attribute::new("textSize", "-3")]),
        Err(DirectionalTextError::InvalidAttribute {
            name: "textSize".to_string(),
            value: "-3".to_string(),
        })
    );
    assert!(DirectionalTextConfig::from_attributes(&[Attribute::new("textColor", "blue")]).is_err());
}
