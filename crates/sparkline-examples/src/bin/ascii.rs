// File: crates/sparkline-examples/src/bin/ascii.rs
// Summary: Minimal example that runs the pipeline and prints a terminal sparkline.

use anyhow::Result;
use serde_json::json;
use sparkline_core::{
    LoadedSource, PointStyle, Readiness, Size, Sparkline, SparklineOptions, SparklineType,
};

const BLOCKS: [char; 8] = ['▁', '▂', '▃', '▄', '▅', '▆', '▇', '█'];

fn render_ascii(sparkline: &Sparkline) -> String {
    let span = (sparkline.value_range.max - sparkline.value_range.min).max(f64::EPSILON);
    sparkline
        .points
        .iter()
        .map(|p| match p.value {
            Some(v) => {
                let t = (v - sparkline.value_range.min) / span;
                BLOCKS[((t * 7.0).round() as usize).min(7)]
            }
            None => ' ',
        })
        .collect()
}

fn main() -> Result<()> {
    env_logger::init();

    let data: Vec<_> = (0..32)
        .map(|i| json!((i as f64 * 0.45).sin() * 5.0 + (i as f64 * 0.1)))
        .collect();
    let source = LoadedSource(data);

    for sparkline_type in [SparklineType::Line, SparklineType::Bar, SparklineType::WinLoss] {
        let options = SparklineOptions::new(sparkline_type)
            .with_size(Size::new(Some(250.0), Some(30.0)))
            .with_markers(true, true);
        let mut sparkline = Sparkline::new(options);
        anyhow::ensure!(
            sparkline.refresh(&source, (0.0, 0.0)) == Readiness::Ready,
            "in-memory source should be ready"
        );

        let highlighted = sparkline
            .styles
            .iter()
            .filter(|s| !matches!(s, PointStyle::Inherit))
            .count();
        println!("{sparkline_type:?}: {}", render_ascii(&sparkline));
        println!(
            "  range [{:.2}, {:.2}], {} highlighted point(s), bar width {:?}",
            sparkline.value_range.min, sparkline.value_range.max, highlighted, sparkline.bar_width
        );
    }
    Ok(())
}
