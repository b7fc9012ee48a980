use clap::Parser;
use speedometer::{GaugeConfig, Speedometer};

/// Two draggable knobs riding on a pair of facing arcs.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Args {
    /// Initial window width in logical pixels
    #[arg(long, default_value_t = 600)]
    width: u32,

    /// Initial window height in logical pixels
    #[arg(long, default_value_t = 800)]
    height: u32,

    /// Distance kept between the arcs and the window edges
    #[arg(long, default_value_t = 150.0)]
    margin: f64,

    /// Radius of the knob discs
    #[arg(long, default_value_t = 50.0)]
    knob_radius: f64,

    /// Stroke width of the arcs; also widens the grab area
    #[arg(long, default_value_t = 16.0)]
    arc_width: f64,

    #[arg(long, default_value = "Speedometer")]
    title: String,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();

    let config = GaugeConfig::builder()
        .window_width(args.width)
        .window_height(args.height)
        .margin_from_edge(args.margin)
        .knob_radius(args.knob_radius)
        .arc_stroke_width(args.arc_width)
        .title(args.title)
        .build();

    let mut speedometer = Speedometer::new(config)?;
    speedometer.show()?;
    Ok(())
}
