use iwi_chart::api::{BarChartBuilder, BuilderConfig, ChartVariant};
use iwi_chart::core::DataTable;
use std::fs;
use std::path::PathBuf;
use tracing::debug;

#[derive(Debug)]
struct CliArgs {
    data_path: PathBuf,
    config_path: Option<PathBuf>,
    variant: ChartVariant,
    validate: bool,
}

fn main() {
    let _ = iwi_chart::telemetry::init_default_tracing();
    if let Err(err) = run() {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    let args = parse_args()?;
    debug!(?args, "build chart options");

    let raw_table = fs::read_to_string(&args.data_path).map_err(|e| {
        format!(
            "failed to read data table `{}`: {e}",
            args.data_path.display()
        )
    })?;
    let table = DataTable::from_json_str(&raw_table).map_err(|e| e.to_string())?;

    let config = match &args.config_path {
        Some(path) => {
            let raw_config = fs::read_to_string(path)
                .map_err(|e| format!("failed to read config `{}`: {e}", path.display()))?;
            BuilderConfig::from_json_str(&raw_config).map_err(|e| e.to_string())?
        }
        None => BuilderConfig::for_variant(args.variant),
    };

    if args.validate {
        table.validate().map_err(|e| e.to_string())?;
        config.validate().map_err(|e| e.to_string())?;
    }

    let options = BarChartBuilder::new(&table, config).build();
    let json = options.to_json_pretty().map_err(|e| e.to_string())?;
    println!("{json}");
    Ok(())
}

fn parse_args() -> Result<CliArgs, String> {
    let mut data_path: Option<PathBuf> = None;
    let mut config_path: Option<PathBuf> = None;
    let mut variant = ChartVariant::default();
    let mut validate = false;

    let mut args = std::env::args().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--data" => {
                let value = args
                    .next()
                    .ok_or_else(|| "missing value for --data".to_owned())?;
                data_path = Some(PathBuf::from(value));
            }
            "--config" => {
                let value = args
                    .next()
                    .ok_or_else(|| "missing value for --config".to_owned())?;
                config_path = Some(PathBuf::from(value));
            }
            "--variant" => {
                let value = args
                    .next()
                    .ok_or_else(|| "missing value for --variant".to_owned())?;
                variant = value.parse().map_err(|e: iwi_chart::ChartError| e.to_string())?;
            }
            "--validate" => {
                validate = true;
            }
            "-h" | "--help" => {
                println!(
                    "Usage: cargo run --bin build_chart_options -- --data <path> [--variant stacked|overlapped] [--config <path>] [--validate]"
                );
                std::process::exit(0);
            }
            _ => {
                return Err(format!("unknown argument `{arg}`"));
            }
        }
    }

    let data_path = data_path.ok_or_else(|| "missing required --data <path>".to_owned())?;
    Ok(CliArgs {
        data_path,
        config_path,
        variant,
        validate,
    })
}
