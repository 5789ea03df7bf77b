use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;

use gearmap_rs::api::{HeatmapEngine, HeatmapEngineConfig};
use gearmap_rs::core::Viewport;
use gearmap_rs::render::SvgRenderer;

#[derive(Debug)]
struct CliArgs {
    front: Option<String>,
    rear: Option<String>,
    width: u32,
    height: u32,
    output: Option<PathBuf>,
}

fn parse_args() -> Result<CliArgs, String> {
    let mut args = CliArgs {
        front: None,
        rear: None,
        width: 900,
        height: 520,
        output: None,
    };

    let mut iter = std::env::args().skip(1);
    while let Some(flag) = iter.next() {
        let mut value = |name: &str| {
            iter.next()
                .ok_or_else(|| format!("missing value for `{name}`"))
        };
        match flag.as_str() {
            "--front" => args.front = Some(value("--front")?),
            "--rear" => args.rear = Some(value("--rear")?),
            "--width" => {
                args.width = value("--width")?
                    .parse()
                    .map_err(|e| format!("invalid `--width`: {e}"))?;
            }
            "--height" => {
                args.height = value("--height")?
                    .parse()
                    .map_err(|e| format!("invalid `--height`: {e}"))?;
            }
            "--out" => args.output = Some(PathBuf::from(value("--out")?)),
            other => return Err(format!("unknown argument `{other}`")),
        }
    }

    Ok(args)
}

fn run(args: CliArgs) -> Result<(), String> {
    let mut config = HeatmapEngineConfig::new(Viewport::new(args.width, args.height));
    if let Some(front) = args.front {
        config = config.with_front_input(front);
    }
    if let Some(rear) = args.rear {
        config = config.with_rear_input(rear);
    }

    let mut engine =
        HeatmapEngine::new(SvgRenderer::new(), config).map_err(|e| e.to_string())?;
    engine.render().map_err(|e| e.to_string())?;
    let document = engine.into_renderer().into_document();

    match args.output {
        Some(path) => fs::write(&path, document)
            .map_err(|e| format!("failed to write {}: {e}", path.display())),
        None => {
            print!("{document}");
            Ok(())
        }
    }
}

fn main() -> ExitCode {
    let _ = gearmap_rs::telemetry::init_default_tracing();

    let args = match parse_args() {
        Ok(args) => args,
        Err(message) => {
            eprintln!("{message}");
            eprintln!(
                "usage: render_heatmap_svg [--front \"36, 50\"] [--rear \"11, 13, ...\"] \
                 [--width 900] [--height 520] [--out chart.svg]"
            );
            return ExitCode::FAILURE;
        }
    };

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(message) => {
            eprintln!("{message}");
            ExitCode::FAILURE
        }
    }
}
