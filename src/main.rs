use std::error::Error;
use std::io::{self, IsTerminal, Read};

use linekit::{LinekitConfig, PipelineConfig, diff_report, run_pipeline};
use tracing_subscriber::EnvFilter;

const SAMPLE: &str = include_str!("../demos/sample.txt");

/// Cleans text from stdin (or the bundled sample) and prints the result,
/// its statistics, and a diff against the input.
///
/// Usage: `linekit [CONFIG.yaml] < input.txt`
fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let config = match std::env::args().nth(1) {
        Some(path) => LinekitConfig::from_file(path)?,
        None => LinekitConfig {
            pipeline: PipelineConfig {
                remove_empty_lines: true,
                trim_both: true,
                deduplicate: true,
                ..Default::default()
            },
            ..Default::default()
        },
    };
    config.pipeline.validate()?;

    let mut input = String::new();
    if !io::stdin().is_terminal() {
        io::stdin().read_to_string(&mut input)?;
    }
    if input.is_empty() {
        input = SAMPLE.to_string();
    }

    let out = run_pipeline(input.as_str(), &config.pipeline);
    println!("{}", out.output_text);
    println!("{}", serde_json::to_string_pretty(&out.stats)?);

    let report = diff_report(input.as_str(), out.output_text.as_str(), &config.diff)?;
    print!("{}", report.to_unified_lines());

    Ok(())
}
