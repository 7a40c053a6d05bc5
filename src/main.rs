use anyhow::{Context, Result};
use directional_text::directional::{AxisConstraint, Orientation, Padding};
use directional_text::engine::layouter::types::{Color, DEFAULT_FONT_SIZE, TextStyle};
use directional_text::platform::renderer::{PlatformTextMeasurer, RasterRenderer};
use directional_text::{DirectionalTextConfig, DirectionalTextView};
use std::env;

const USAGE: &str = "usage: directional_text <text> [direction] [output.png] [font_size]";

fn main() -> Result<()> {
    env_logger::init();

    let args: Vec<String> = env::args().skip(1).collect();
    let Some(text) = args.first().cloned() else {
        anyhow::bail!(USAGE);
    };
    let orientation: Orientation = match args.get(1) {
        Some(s) => s.parse::<Orientation>().with_context(|| USAGE)?,
        None => Orientation::default(),
    };
    let output = args
        .get(2)
        .cloned()
        .unwrap_or_else(|| "directional_text.png".to_string());
    let font_size = match args.get(3) {
        Some(s) => s.parse::<f32>().with_context(|| format!("invalid font size: {s}"))?,
        None => DEFAULT_FONT_SIZE * 2.0,
    };

    let measurer = PlatformTextMeasurer::new()?;

    let mut view = DirectionalTextView::new(DirectionalTextConfig {
        text,
        orientation,
        padding: Padding::uniform(font_size / 4.0),
        style: TextStyle {
            font_size,
            ..TextStyle::default()
        },
    });

    let size = view.measure(
        &measurer,
        AxisConstraint::Unconstrained,
        AxisConstraint::Unconstrained,
    )?;
    log::info!("{orientation}: surface {}x{}", size.width, size.height);

    let font = measurer.font(None)?.clone();
    let mut renderer = RasterRenderer::for_surface(font, size, Color::WHITE);
    match view.draw(&mut renderer) {
        Some(path) => log::info!(
            "path ({}, {}) -> ({}, {})",
            path.start.x,
            path.start.y,
            path.end.x,
            path.end.y
        ),
        None => log::warn!("nothing drawn"),
    }

    renderer.save_png(&output)?;
    println!("wrote {output} ({}x{})", size.width.ceil(), size.height.ceil());

    Ok(())
}
