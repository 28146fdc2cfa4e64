use clap::{Parser, Subcommand};
use ic_polar::PolarClass;
use std::io::{self, Write};

mod error;
mod interactive;
mod logging;
mod report;

use error::CliResult;
use interactive::Session;
use report::{
    BowLoadInputs, BowLoadReport, OutputFormat, ResistanceInputs, ResistanceReport, class_table,
    parse_non_negative, render, render_class_table,
};

#[derive(Debug, Parser)]
#[command(name = "ic-cli")]
#[command(about = "Ice load calculator - level ice resistance and Polar Class bow loads", long_about = None)]
struct Cli {
    /// Output format for reports
    #[arg(long, value_enum, global = true, default_value_t = OutputFormat::Text)]
    format: OutputFormat,
    /// Log filter (e.g. debug, ic_polar=trace); overrides RUST_LOG
    #[arg(long, global = true)]
    log_level: Option<String>,
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Level ice resistance (Lindqvist)
    Resistance {
        /// Ship length L (m)
        #[arg(long, value_parser = parse_non_negative)]
        length: f64,
        /// Ship breadth B (m)
        #[arg(long, value_parser = parse_non_negative)]
        breadth: f64,
        /// Ship draft T (m)
        #[arg(long, value_parser = parse_non_negative)]
        draft: f64,
        /// Ship speed (kn)
        #[arg(long, value_parser = parse_non_negative)]
        speed_kn: f64,
        /// Trim angle phi (deg)
        #[arg(long, value_parser = parse_non_negative)]
        trim_deg: f64,
        /// Angle between keel and direction of motion psi (deg)
        #[arg(long, value_parser = parse_non_negative)]
        keel_deg: f64,
        /// Angle between ship side and waterline alpha (deg)
        #[arg(long, value_parser = parse_non_negative)]
        side_deg: f64,
        /// Level ice thickness (cm)
        #[arg(long, value_parser = parse_non_negative)]
        ice_cm: f64,
    },
    /// Design ice load at the bow (IACS Polar Class)
    BowLoad {
        /// Upper ice waterline length Lui (m)
        #[arg(long, value_parser = parse_non_negative)]
        lui: f64,
        /// Deadweight at UIWL Dui (kt)
        #[arg(long, value_parser = parse_non_negative)]
        dui_kt: f64,
        /// Polar Class, PC1..PC7
        #[arg(long)]
        class: PolarClass,
        /// Normal frame angle beta' at UIWL (deg)
        #[arg(long, value_parser = parse_non_negative)]
        beta_prime_deg: f64,
        /// Upper ice waterline angle alpha (deg)
        #[arg(long, value_parser = parse_non_negative)]
        alpha_deg: f64,
        /// Buttock angle gamma at UIWL (deg)
        #[arg(long, value_parser = parse_non_negative, default_value_t = 0.0)]
        gamma_deg: f64,
    },
    /// Print the Polar Class factor table
    Classes,
    /// Menu-driven session (default)
    Interactive,
}

fn main() -> CliResult<()> {
    let cli = Cli::parse();
    logging::init(cli.log_level.as_deref())?;

    match render_command(cli.format, cli.command.unwrap_or(Commands::Interactive))? {
        Some(text) => emit(&text),
        None => {
            let stdin = io::stdin();
            Session::new(stdin.lock(), io::stdout()).run()
        }
    }
}

/// Report text for a one-shot command, `None` for the interactive session.
fn render_command(format: OutputFormat, command: Commands) -> CliResult<Option<String>> {
    let text = match command {
        Commands::Resistance {
            length,
            breadth,
            draft,
            speed_kn,
            trim_deg,
            keel_deg,
            side_deg,
            ice_cm,
        } => cmd_resistance(
            format,
            ResistanceInputs {
                length_m: length,
                breadth_m: breadth,
                draft_m: draft,
                speed_kn,
                trim_deg,
                keel_deg,
                side_deg,
                ice_thickness_cm: ice_cm,
            },
        )?,
        Commands::BowLoad {
            lui,
            dui_kt,
            class,
            beta_prime_deg,
            alpha_deg,
            gamma_deg,
        } => cmd_bow_load(
            format,
            BowLoadInputs {
                lui_m: lui,
                dui_kt,
                class,
                beta_prime_deg,
                alpha_deg,
                gamma_deg,
            },
        )?,
        Commands::Classes => cmd_classes(format)?,
        Commands::Interactive => return Ok(None),
    };
    Ok(Some(text))
}

fn cmd_resistance(format: OutputFormat, inputs: ResistanceInputs) -> CliResult<String> {
    tracing::info!(?inputs, "level ice resistance");
    let report = inputs.evaluate()?;
    render(format, &report, ResistanceReport::render_text)
}

fn cmd_bow_load(format: OutputFormat, inputs: BowLoadInputs) -> CliResult<String> {
    tracing::info!(?inputs, "bow design load");
    let report = inputs.evaluate()?;
    render(format, &report, BowLoadReport::render_text)
}

fn cmd_classes(format: OutputFormat) -> CliResult<String> {
    let rows = class_table();
    render(format, &rows, |_| render_class_table())
}

fn emit(text: &str) -> CliResult<()> {
    let mut stdout = io::stdout().lock();
    stdout.write_all(text.as_bytes())?;
    stdout.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CliError;
    use ic_polar::PolarError;

    const RESISTANCE_ARGS: [&str; 18] = [
        "ic-cli",
        "resistance",
        "--length",
        "100",
        "--breadth",
        "20",
        "--draft",
        "8",
        "--speed-kn",
        "10",
        "--trim-deg",
        "20",
        "--keel-deg",
        "30",
        "--side-deg",
        "40",
        "--ice-cm",
        "100",
    ];

    fn bow_load_args(class: &str) -> Vec<&str> {
        vec![
            "ic-cli",
            "bow-load",
            "--lui",
            "150",
            "--dui-kt",
            "20",
            "--class",
            class,
            "--beta-prime-deg",
            "30",
            "--alpha-deg",
            "20",
        ]
    }

    fn run_args(args: &[&str]) -> CliResult<Option<String>> {
        let cli = Cli::try_parse_from(args).unwrap();
        render_command(cli.format, cli.command.unwrap_or(Commands::Interactive))
    }

    #[test]
    fn no_subcommand_starts_the_interactive_menu() {
        let cli = Cli::try_parse_from(["ic-cli"]).unwrap();
        assert!(cli.command.is_none());
        assert_eq!(cli.format, OutputFormat::Text);
        assert!(run_args(&["ic-cli", "interactive"]).unwrap().is_none());
    }

    #[test]
    fn resistance_prints_text_report() {
        let text = run_args(&RESISTANCE_ARGS).unwrap().unwrap();
        assert!(text.contains("Ice resistance: 1802.07 kN"), "{text}");
    }

    #[test]
    fn resistance_json_carries_inputs_and_total() {
        let mut args = RESISTANCE_ARGS.to_vec();
        args.extend(["--format", "json"]);
        let json = run_args(&args).unwrap().unwrap();

        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["inputs"]["speed_kn"], 10.0);
        let total = value["total_kn"].as_f64().unwrap();
        assert!((total - 1802.07).abs() < 0.01, "total = {total}");
    }

    #[test]
    fn global_flags_are_accepted_before_the_subcommand() {
        let cli = Cli::try_parse_from([
            "ic-cli",
            "--format",
            "json",
            "--log-level",
            "debug",
            "classes",
        ])
        .unwrap();
        assert_eq!(cli.format, OutputFormat::Json);
        assert_eq!(cli.log_level.as_deref(), Some("debug"));
        assert!(matches!(cli.command, Some(Commands::Classes)));
    }

    #[test]
    fn negative_numbers_are_rejected_at_parse_time() {
        let mut args = RESISTANCE_ARGS.to_vec();
        args[17] = "-5";
        assert!(Cli::try_parse_from(&args).is_err());

        let mut args = bow_load_args("PC5");
        args[3] = "-150";
        assert!(Cli::try_parse_from(&args).is_err());
    }

    #[test]
    fn bow_load_parses_class_and_defaults_gamma() {
        let cli = Cli::try_parse_from(bow_load_args("PC5")).unwrap();
        match cli.command {
            Some(Commands::BowLoad {
                class, gamma_deg, ..
            }) => {
                assert_eq!(class, PolarClass::PC5);
                assert_eq!(gamma_deg, 0.0);
            }
            other => panic!("unexpected command {other:?}"),
        }

        let text = run_args(&bow_load_args("PC5")).unwrap().unwrap();
        assert!(text.contains("Shape Factors for PC5:"));
        assert!(text.contains("  Fi: 6.95 MN"));
    }

    #[test]
    fn unknown_class_is_rejected() {
        assert!(Cli::try_parse_from(bow_load_args("PC8")).is_err());
        assert!(Cli::try_parse_from(bow_load_args("pc5")).is_err());
    }

    #[test]
    fn degenerate_bow_geometry_surfaces_as_polar_error() {
        let mut args = bow_load_args("PC3");
        args[9] = "0";
        let err = run_args(&args).unwrap_err();
        assert!(matches!(
            err,
            CliError::Polar(PolarError::DegenerateGeometry { .. })
        ));
    }

    #[test]
    fn classes_table_in_both_formats() {
        let text = run_args(&["ic-cli", "classes"]).unwrap().unwrap();
        assert!(text.starts_with("Class"));
        assert_eq!(text.lines().count(), 8);

        let json = run_args(&["ic-cli", "classes", "--format", "json"])
            .unwrap()
            .unwrap();
        let rows: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(rows.as_array().map(Vec::len), Some(7));
        assert_eq!(rows[0]["class"], "PC1");
        assert_eq!(rows[6]["class"], "PC7");
    }
}
