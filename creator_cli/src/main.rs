//! # creator-calc CLI
//!
//! Terminal front end for the creator-economy calculators. Input comes from
//! a JSON file and/or `--set field=value` flags; anything not supplied takes
//! the calculator's default.
//!
//! ```text
//! creator-calc list
//! creator-calc describe brand-deal
//! creator-calc run engagement-rate --set followers=50000 --set avg_likes=2500
//! creator-calc run creator-tax --input tax.json --json
//! ```

mod render;

use std::io::Read;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context};
use clap::Parser;
use creator_core::analytics::{AnalyticsSink, NoopSink};
use creator_core::calculations::{CalculatorKind, Submission};
use creator_core::config::Settings;
use serde_json::{Map, Value};

/// Creator-economy calculators: engagement, brand deals, payouts, taxes.
#[derive(Parser, Debug)]
#[command(name = "creator-calc", version, about)]
struct Cli {
    /// Settings file (JSON). Falls back to $CREATOR_CALC_CONFIG.
    #[arg(long, global = true, value_name = "FILE")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(clap::Subcommand, Debug)]
enum Commands {
    /// List available calculators.
    List,
    /// Show a calculator's fields, bounds and defaults.
    Describe {
        /// Calculator id, e.g. brand-deal
        calculator: CalculatorKind,
    },
    /// Validate input and run a calculator.
    Run(InputArgs),
    /// Validate input without calculating.
    Validate(InputArgs),
}

#[derive(clap::Args, Debug)]
struct InputArgs {
    /// Calculator id, e.g. engagement-rate
    calculator: CalculatorKind,

    /// JSON object with input fields ("-" reads stdin)
    #[arg(long, short, value_name = "FILE")]
    input: Option<PathBuf>,

    /// Set one field; repeatable
    #[arg(long = "set", value_name = "FIELD=VALUE")]
    sets: Vec<String>,

    /// Print JSON instead of a report
    #[arg(long)]
    json: bool,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::List => {
            render::list(CalculatorKind::ALL);
            Ok(())
        }
        Commands::Describe { calculator } => {
            let defaults = calculator.default_input()?;
            render::describe(calculator, &defaults);
            Ok(())
        }
        Commands::Validate(args) => validate(&args),
        Commands::Run(args) => {
            let settings = load_settings(cli.config.as_deref());
            run(&args, &settings)
        }
    }
}

fn validate(args: &InputArgs) -> anyhow::Result<()> {
    let payload = build_payload(args)?;
    let report = args.calculator.validate_json(&payload);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else if report.valid {
        println!("Input is valid.");
    } else {
        render::errors(&report);
    }

    if !report.valid {
        bail!("{} field(s) failed validation", report.errors.len());
    }
    Ok(())
}

fn run(args: &InputArgs, settings: &Settings) -> anyhow::Result<()> {
    let payload = build_payload(args)?;
    let sink = analytics_sink(settings);

    let delay = settings.loading_delay();
    if !args.json && !delay.is_zero() {
        eprintln!("Calculating...");
        std::thread::sleep(delay);
    }

    let submission = args.calculator.submit(&payload, sink.as_ref())?;
    sink.flush();

    if args.json {
        println!("{}", serde_json::to_string_pretty(&submission)?);
    }

    match submission {
        Submission::Calculated { input, output } => {
            if !args.json {
                render::result(args.calculator, &input, &output);
            }
            Ok(())
        }
        Submission::Invalid(report) => {
            if !args.json {
                render::errors(&report);
            }
            bail!("{} field(s) failed validation", report.errors.len())
        }
    }
}

/// Settings only shape analytics and cosmetics, so a bad file means defaults
fn load_settings(path: Option<&Path>) -> Settings {
    Settings::resolve(path).unwrap_or_else(|e| {
        tracing::warn!(error = %e, "settings ignored, using defaults");
        Settings::default()
    })
}

/// Analytics must never stop a calculation: fall back to no reporting
fn analytics_sink(settings: &Settings) -> Box<dyn AnalyticsSink> {
    settings.build_sink().unwrap_or_else(|e| {
        tracing::warn!(error = %e, "analytics disabled");
        Box::new(NoopSink)
    })
}

fn build_payload(args: &InputArgs) -> anyhow::Result<Value> {
    let mut object = match &args.input {
        Some(path) => match read_json(path)? {
            Value::Object(object) => object,
            _ => bail!("{} must contain a JSON object", path.display()),
        },
        None => Map::new(),
    };

    for set in &args.sets {
        let (field, value) = parse_set(args.calculator, set)?;
        object.insert(field, value);
    }

    Ok(Value::Object(object))
}

fn read_json(path: &Path) -> anyhow::Result<Value> {
    let contents = if path == Path::new("-") {
        let mut buf = String::new();
        std::io::stdin().read_to_string(&mut buf).context("reading stdin")?;
        buf
    } else {
        std::fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?
    };
    serde_json::from_str(&contents).with_context(|| format!("parsing {}", path.display()))
}

/// `field=value`, typed by the calculator's declaration of `field`
fn parse_set(kind: CalculatorKind, raw: &str) -> anyhow::Result<(String, Value)> {
    let Some((field, value)) = raw.split_once('=') else {
        bail!("expected FIELD=VALUE, got '{}'", raw);
    };
    let field = field.trim();
    if field.is_empty() {
        bail!("missing field name in '{}'", raw);
    }
    let parsed = kind.parse_field(field, value)?;
    Ok((field.to_string(), parsed))
}
