//! # Section CLI
//!
//! Command-line front end for `section_core`. Every command prints JSON so
//! the output can be piped into other tools.
//!
//! ```text
//! section compute --family hea --dim h=190 --dim b=200 --dim tw=6.5 --dim tf=10 \
//!     --length 6000 --material "Steel S235"
//! section run requests.json
//! section families
//! ```

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{Args, Parser, Subcommand};
use serde::Serialize;
use serde_json::Value;
use tracing::info;
use tracing_subscriber::EnvFilter;

use section_core::calculation::{run, CalculationRecord, CalculationRequest, MaterialRef};
use section_core::materials::catalog;
use section_core::{CalcError, DimensionMap, LengthUnit, ProfileFamily};

#[derive(Parser)]
#[command(name = "section")]
#[command(about = "Cross-section properties for standard structural profiles", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate inputs without computing
    Validate(SectionArgs),
    /// Validate inputs and compute section properties
    Compute(SectionArgs),
    /// Run calculation requests from a JSON file (one request or an array)
    Run {
        /// Path to the request file
        path: PathBuf,
    },
    /// List profile families and their required dimensions
    Families,
    /// List the built-in materials
    Materials,
}

#[derive(Args)]
struct SectionArgs {
    /// Profile family id (e.g., hea, rhs, equal_angle)
    #[arg(short, long)]
    family: String,
    /// Dimension as key=value, repeatable (e.g., --dim h=200)
    #[arg(short, long = "dim", value_parser = parse_dimension)]
    dims: Vec<(String, String)>,
    /// Unit the dimensions and length are entered in
    #[arg(short, long, default_value = "mm", value_parser = parse_unit)]
    unit: LengthUnit,
    /// Member length (ignored for plate families)
    #[arg(short, long, default_value = "")]
    length: String,
    /// Material name from the built-in catalog
    #[arg(short, long)]
    material: Option<String>,
    /// Operating temperature in °C
    #[arg(short, long)]
    temperature: Option<String>,
}

impl SectionArgs {
    fn into_request(self) -> CalculationRequest {
        let mut request = CalculationRequest::new("cli", self.family)
            .with_unit(self.unit)
            .with_length(self.length);
        request.dimensions = self.dims.into_iter().collect::<DimensionMap>();
        request.material = self.material.map(MaterialRef::Name);
        request.temperature = self.temperature;
        request
    }
}

fn parse_dimension(s: &str) -> Result<(String, String), String> {
    let (key, value) = s
        .split_once('=')
        .ok_or_else(|| format!("expected key=value, got '{s}'"))?;
    Ok((key.trim().to_string(), value.trim().to_string()))
}

fn parse_unit(s: &str) -> Result<LengthUnit, String> {
    s.parse().map_err(|e: CalcError| e.to_string())
}

#[derive(Serialize)]
struct FamilyEntry {
    id: &'static str,
    name: &'static str,
    group: &'static str,
    dimensions: &'static [&'static str],
}

fn print_json<T: Serialize>(value: &T) -> Result<(), CalcError> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn cmd_validate(args: SectionArgs) -> Result<bool, CalcError> {
    let result = args.into_request().validate();
    print_json(&result)?;
    Ok(result.is_valid())
}

fn cmd_compute(args: SectionArgs) -> Result<bool, CalcError> {
    let record = run(args.into_request());
    print_json(&record)?;
    Ok(record.succeeded())
}

/// One request object or an array of them; errors name the failing element
fn parse_requests(text: &str) -> Result<Vec<CalculationRequest>, CalcError> {
    match serde_json::from_str::<Value>(text)? {
        Value::Array(items) => items
            .into_iter()
            .enumerate()
            .map(|(index, item)| {
                serde_json::from_value(item).map_err(|e| CalcError::SerializationError {
                    reason: format!("request [{index}]: {e}"),
                })
            })
            .collect(),
        single => Ok(vec![serde_json::from_value(single)?]),
    }
}

fn cmd_run(path: &Path) -> Result<bool, CalcError> {
    let text = std::fs::read_to_string(path).map_err(|e| {
        CalcError::invalid_input("path", path.display().to_string(), format!("Failed to read request file: {e}"))
    })?;
    let requests = parse_requests(&text)?;
    info!(count = requests.len(), path = %path.display(), "running calculation requests");

    let records: Vec<CalculationRecord> = requests.into_iter().map(run).collect();
    print_json(&records)?;
    Ok(records.iter().all(CalculationRecord::succeeded))
}

fn cmd_families() -> Result<bool, CalcError> {
    let entries: Vec<FamilyEntry> = ProfileFamily::ALL
        .iter()
        .map(|family| FamilyEntry {
            id: family.id(),
            name: family.display_name(),
            group: family.group().display_name(),
            dimensions: family.required_dimensions(),
        })
        .collect();
    print_json(&entries)?;
    Ok(true)
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let outcome = match cli.command {
        Commands::Validate(args) => cmd_validate(args),
        Commands::Compute(args) => cmd_compute(args),
        Commands::Run { path } => cmd_run(&path),
        Commands::Families => cmd_families(),
        Commands::Materials => print_json(&catalog::all()).map(|_| true),
    };

    match outcome {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::from(1),
        Err(e) => {
            eprintln!("Error: {}", e);
            if let Ok(json) = serde_json::to_string_pretty(&e) {
                eprintln!();
                eprintln!("Error JSON:");
                eprintln!("{}", json);
            }
            ExitCode::from(2)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_dimension() {
        assert_eq!(parse_dimension("h=200").unwrap(), ("h".to_string(), "200".to_string()));
        assert_eq!(parse_dimension(" tw = 6.5 ").unwrap(), ("tw".to_string(), "6.5".to_string()));
        assert!(parse_dimension("h200").is_err());
    }

    #[test]
    fn test_parse_unit() {
        assert_eq!(parse_unit("cm").unwrap(), LengthUnit::Centimeter);
        assert!(parse_unit("parsec").is_err());
    }

    #[test]
    fn test_unknown_material_is_a_validation_failure() {
        let cli = Cli::try_parse_from([
            "section", "validate", "--family", "round", "--dim", "d=20", "--length", "1000", "--material", "Unobtanium",
        ])
        .unwrap();
        let Commands::Validate(args) = cli.command else {
            panic!("expected validate");
        };
        assert!(!cmd_validate(args).unwrap());
    }

    #[test]
    fn test_parse_requests_single_and_array() {
        let single = r#"{ "family": "round", "dimensions": { "d": "20" } }"#;
        assert_eq!(parse_requests(single).unwrap().len(), 1);

        let array = r#"[{ "family": "round" }, { "family": "square", "label": "S" }]"#;
        let requests = parse_requests(array).unwrap();
        assert_eq!(requests[1].label, "S");
    }

    #[test]
    fn test_parse_requests_names_failing_element() {
        let array = r#"[{ "family": "round" }, { "label": "no family" }]"#;
        let err = parse_requests(array).unwrap_err();
        let message = err.to_string();
        assert!(message.contains("request [1]"), "{message}");
        assert!(message.contains("family"), "{message}");

        let err = parse_requests(r#"{ "label": "no family" }"#).unwrap_err();
        assert!(err.to_string().contains("missing field `family`"), "{err}");
    }

    #[test]
    fn test_cli_definition() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn test_args_into_request() {
        let cli = Cli::try_parse_from([
            "section", "compute", "--family", "rhs", "--dim", "h=100", "--dim", "b=50", "--dim", "t=5",
            "--unit", "cm", "--length", "300", "--material", "Steel S235",
        ])
        .unwrap();
        let Commands::Compute(args) = cli.command else {
            panic!("expected compute");
        };
        let record = run(args.into_request());
        assert!(record.succeeded(), "{:?}", record.validation.errors());
        assert_eq!(record.properties.unwrap().area_cm2, 1400.0);
    }
}
