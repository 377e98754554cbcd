use anyhow::{ensure, Context, Result};
use taglayout_ui::{DrawPrimitive, EdgeInsets, TagElement, TagLayout};

const DEFAULT_WIDTH: f32 = 360.0;
const DEFAULT_TAGS: &[&str] = &[
    "Rust", "Kotlin", "Layout", "Flow", "Wrap", "Measure", "Place", "Tags", "Rows", "Margins",
    "Padding", "Compose",
];

struct Args {
    width: f32,
    tags: Vec<String>,
}

/// `tag-demo [WIDTH] [TAG...]`
fn parse_args() -> Result<Args> {
    let mut args = std::env::args().skip(1);
    let width = match args.next() {
        Some(raw) => raw
            .parse::<f32>()
            .with_context(|| format!("WIDTH must be a number, got {raw:?}"))?,
        None => DEFAULT_WIDTH,
    };
    ensure!(width.is_finite(), "WIDTH must be finite, got {width}");

    let mut tags: Vec<String> = args.collect();
    if tags.is_empty() {
        tags = DEFAULT_TAGS.iter().map(|tag| tag.to_string()).collect();
    }
    Ok(Args { width, tags })
}

fn init_logging() {
    #[cfg(feature = "logging")]
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_millis()
        .init();
}

fn main() -> Result<()> {
    init_logging();
    let args = parse_args()?;

    let mut layout = TagLayout::new().with_padding(EdgeInsets::uniform(8.0));
    for tag in &args.tags {
        layout.push(TagElement::new(tag.as_str()).with_margin(EdgeInsets::uniform(4.0)));
    }

    let size = layout.measure_and_place(args.width);
    log::info!(
        "laid out {} tags at width {}: {}x{}",
        layout.len(),
        args.width,
        size.width,
        size.height
    );

    if let Some(result) = layout.last_result() {
        for (row, line) in result.lines.iter().enumerate() {
            let members: Vec<&str> = args.tags[line.range.clone()]
                .iter()
                .map(String::as_str)
                .collect();
            println!(
                "row {row}: top {:>6.1} height {:>5.1} width {:>6.1}  {}",
                line.top,
                line.height,
                line.width,
                members.join(" | ")
            );
        }
    }

    for primitive in layout.render() {
        if let DrawPrimitive::RoundRect { rect, brush, .. } = primitive {
            log::debug!("tag at {rect:?} painted {:?}", brush.color());
        }
    }

    Ok(())
}
