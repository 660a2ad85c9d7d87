use chart_viewport::api::{ViewportAction, ViewportEngine, ViewportEngineConfig, ViewportSnapshot};
use chart_viewport::core::{DataPoint, SyntheticSeriesConfig, generate_synthetic_series};
use chart_viewport::telemetry::init_tracing_with_fallback;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

#[derive(Debug)]
struct CliArgs {
    script: PathBuf,
    output: Option<PathBuf>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "snake_case")]
enum ReplayData {
    Points(Vec<DataPoint>),
    Synthetic(SyntheticSeriesConfig),
}

#[derive(Debug, Clone, Deserialize)]
struct ReplayScript {
    config: ViewportEngineConfig,
    data: ReplayData,
    actions: Vec<ViewportAction>,
}

#[derive(Debug, Clone, Serialize)]
struct ReplayStep {
    index: usize,
    action: Option<ViewportAction>,
    changed: bool,
    snapshot: ViewportSnapshot,
}

fn main() {
    let _ = init_tracing_with_fallback("chart_viewport=debug");
    if let Err(err) = run() {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    let args = parse_args()?;
    let raw = fs::read_to_string(&args.script)
        .map_err(|e| format!("failed to read `{}`: {e}", args.script.display()))?;
    let script: ReplayScript =
        serde_json::from_str(&raw).map_err(|e| format!("failed to parse script: {e}"))?;

    let points = match script.data {
        ReplayData::Points(points) => points,
        ReplayData::Synthetic(config) => {
            generate_synthetic_series(&config).map_err(|e| e.to_string())?
        }
    };
    let mut engine =
        ViewportEngine::with_data(script.config, points).map_err(|e| e.to_string())?;

    let mut steps = Vec::with_capacity(script.actions.len() + 1);
    steps.push(ReplayStep {
        index: 0,
        action: None,
        changed: false,
        snapshot: engine.snapshot(),
    });
    for (offset, action) in script.actions.into_iter().enumerate() {
        let changed = engine.dispatch(&action);
        steps.push(ReplayStep {
            index: offset + 1,
            action: Some(action),
            changed,
            snapshot: engine.snapshot(),
        });
    }

    let rendered = serde_json::to_string_pretty(&steps)
        .map_err(|e| format!("failed to serialize replay: {e}"))?;
    match args.output {
        Some(path) => fs::write(&path, rendered)
            .map_err(|e| format!("failed to write `{}`: {e}", path.display())),
        None => {
            println!("{rendered}");
            Ok(())
        }
    }
}

fn parse_args() -> Result<CliArgs, String> {
    let mut args = std::env::args().skip(1);
    let script = args
        .next()
        .map(PathBuf::from)
        .ok_or_else(|| "usage: viewport_replay <script.json> [--output <file>]".to_owned())?;

    let mut output = None;
    while let Some(flag) = args.next() {
        match flag.as_str() {
            "--output" => {
                let path = args
                    .next()
                    .ok_or_else(|| "--output requires a file path".to_owned())?;
                output = Some(PathBuf::from(path));
            }
            other => return Err(format!("unknown argument `{other}`")),
        }
    }

    Ok(CliArgs { script, output })
}
