use std::ops::Range;
use std::path::PathBuf;
use std::process::ExitCode;

use ariadne::{IndexType, Label, Report, ReportKind, Source};
use clap::{ArgAction, Parser, Subcommand, ValueEnum};
use serde::Serialize;
use threadbook::black_book::validators::Severity;
use threadbook::lexer;
use threadbook::selection::{FamilyUpdate, InsertUpdate, SizeUpdate};
use threadbook::{
    init_logging, resolve_geometry, Config, ConfigError, Family, ReferenceData,
    SelectionState, Series,
};

#[derive(Parser)]
#[command(
    name = "threadbook",
    version,
    about = "Thread geometry lookup and threading-insert selection"
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// JSON file with extra thread entries
    #[arg(long, value_name = "FILE", global = true)]
    threads: Option<PathBuf>,

    /// JSON insert catalog replacing the built-in one
    #[arg(long, value_name = "FILE", global = true)]
    catalog: Option<PathBuf>,

    /// Explicit log level (overrides -v)
    #[arg(long = "log-level", value_enum, global = true)]
    log_level: Option<LogLevelArg>,

    /// More logging (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Command {
    /// Print the series of each designation
    Classify {
        #[arg(required = true, value_name = "DESIGNATION")]
        designations: Vec<String>,
    },

    /// Resolve the geometry of a designation
    Lookup {
        designation: String,

        #[arg(long)]
        json: bool,
    },

    /// List thread families and their inserts
    Families,

    /// Run the selection cascade: family, then insert, then size
    Select(SelectArgs),

    /// Validate the insert catalog against the thread database
    Check,
}

#[derive(clap::Args)]
struct SelectArgs {
    /// parallel60, parallel55, tapered55 or tapered60
    #[arg(long)]
    family: Family,

    /// M, MF, HC, UNC, UNF or UNEF
    #[arg(long)]
    series: Option<Series>,

    #[arg(long)]
    insert: Option<String>,

    #[arg(long)]
    size: Option<String>,

    #[arg(long)]
    json: bool,
}

#[derive(Clone, Copy, ValueEnum)]
enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl Cli {
    fn level(&self) -> tracing::Level {
        match self.log_level {
            Some(LogLevelArg::Error) => tracing::Level::ERROR,
            Some(LogLevelArg::Warn) => tracing::Level::WARN,
            Some(LogLevelArg::Info) => tracing::Level::INFO,
            Some(LogLevelArg::Debug) => tracing::Level::DEBUG,
            Some(LogLevelArg::Trace) => tracing::Level::TRACE,
            None => match self.verbose {
                0 => tracing::Level::WARN,
                1 => tracing::Level::INFO,
                2 => tracing::Level::DEBUG,
                _ => tracing::Level::TRACE,
            },
        }
    }

    fn config(&self) -> Config {
        Config {
            threads_file: self.threads.clone(),
            catalog_file: self.catalog.clone(),
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.level());

    match run(&cli) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<ExitCode, ConfigError> {
    match &cli.command {
        Command::Classify { designations } => {
            for designation in designations {
                report_unrecognized(designation);
                println!("{}\t{}", designation, threadbook::classify(designation));
            }
        }
        Command::Lookup { designation, json } => {
            let data = ReferenceData::load(&cli.config())?;
            let resolution = resolve_geometry(&data.threads, designation);
            if *json {
                print_json(&resolution);
            } else {
                println!("Resolution: {}", resolution.label());
                println!("{}", resolution.geometry(designation));
            }
            if !resolution.is_found() {
                return Ok(ExitCode::FAILURE);
            }
        }
        Command::Families => {
            let data = ReferenceData::load(&cli.config())?;
            for group in data.catalog.families() {
                let family = group.family;
                println!(
                    "{} ({:?}, {}°){}",
                    family,
                    family.mode(),
                    family.profile_angle(),
                    series_selector(family)
                );
                for insert in &group.inserts {
                    println!(
                        "  {}  Dc {} mm  {} sizes",
                        insert.code,
                        insert.cutting_diameter,
                        insert.compatible_sizes.len()
                    );
                }
            }
        }
        Command::Select(args) => {
            let data = ReferenceData::load(&cli.config())?;
            let report = run_select(&data, args);
            if args.json {
                print_json(&report);
            } else {
                print_select(&report);
            }
        }
        Command::Check => {
            let data = ReferenceData::load(&cli.config())?;
            for issue in &data.issues {
                println!("{}", issue);
            }
            let errors = data
                .issues
                .iter()
                .filter(|i| i.severity == Severity::Error)
                .count();
            println!(
                "{} thread entries, {} inserts, {} issues ({} errors)",
                data.threads.len(),
                data.catalog.len(),
                data.issues.len(),
                errors
            );
            if data.has_errors() {
                return Ok(ExitCode::FAILURE);
            }
        }
    }

    Ok(ExitCode::SUCCESS)
}

fn series_selector(family: Family) -> String {
    if !family.exposes_series_selector() {
        return String::new();
    }
    let series: Vec<String> = Series::METRIC_SELECTOR.iter().map(|s| s.to_string()).collect();
    format!(" [series: {}]", series.join(" / "))
}

/// Point at the characters the designation lexer could not read
fn report_unrecognized(designation: &str) {
    let Some(report) = unrecognized_report(designation) else {
        return;
    };
    if let Err(e) = report.eprint(Source::from(designation.to_string())) {
        tracing::warn!("failed to print diagnostic: {}", e);
    }
}

/// Lexer spans are byte ranges, so the report indexes by byte.
fn unrecognized_report(designation: &str) -> Option<Report<'static, Range<usize>>> {
    let spans = lexer::unrecognized_spans(designation);
    let first = spans.first()?.start;

    let mut report = Report::build(ReportKind::Warning, (), first)
        .with_config(ariadne::Config::default().with_index_type(IndexType::Byte))
        .with_message(format!("unrecognized characters in `{}`", designation));
    for span in spans {
        report = report
            .with_label(Label::new(span).with_message("not part of a thread designation"));
    }
    Some(report.finish())
}

#[derive(Serialize)]
struct SelectReport {
    state: SelectionState,
    family: FamilyUpdate,
    #[serde(skip_serializing_if = "Option::is_none")]
    insert: Option<InsertUpdate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    size: Option<SizeUpdate>,
}

fn run_select(data: &ReferenceData, args: &SelectArgs) -> SelectReport {
    let filter = data.filter();
    let mut state = SelectionState {
        family: Some(args.family),
        series: args.series,
        ..SelectionState::default()
    };

    let family = filter.on_family_changed(&state);
    family.apply_to(&mut state);

    let insert = args.insert.as_ref().map(|code| {
        state.insert = Some(code.clone());
        let update = filter.on_insert_changed(&state);
        update.apply_to(&mut state);
        update
    });

    let size = args.size.as_ref().map(|size| {
        state.size = Some(size.clone());
        let update = filter.on_size_changed(&state);
        update.apply_to(&mut state);
        update
    });

    SelectReport {
        state,
        family,
        insert,
        size,
    }
}

fn print_select(report: &SelectReport) {
    let series = report
        .state
        .series
        .map(|s| s.to_string())
        .unwrap_or_else(|| "-".to_string());
    println!(
        "Family: {}  Series: {}",
        report.state.family.map(|f| f.key()).unwrap_or("-"),
        series
    );
    println!("Sizes ({}): {}", report.family.sizes.len(), report.family.sizes.join(", "));
    println!("Inserts ({}): {}", report.family.inserts.len(), report.family.inserts.join(", "));

    if let Some(insert) = &report.insert {
        println!();
        println!("Insert sizes ({}): {}", insert.sizes.len(), insert.sizes.join(", "));
        print_cutting_diameter(insert.cutting_diameter);
    }

    if let Some(size) = &report.size {
        println!();
        println!("Resolution: {}", size.resolution.label());
        println!("{}", size.geometry);
        println!("Inserts for size ({}): {}", size.inserts.len(), size.inserts.join(", "));
        print_cutting_diameter(size.cutting_diameter);
    }

    println!();
    println!(
        "Selected size: {}  Selected insert: {}",
        report.state.size.as_deref().unwrap_or("-"),
        report.state.insert.as_deref().unwrap_or("-")
    );
}

fn print_cutting_diameter(dc: Option<f64>) {
    match dc {
        Some(dc) => println!("Cutting diameter: {} mm", dc),
        None => println!("Cutting diameter: -"),
    }
}

fn print_json<T: Serialize>(value: &T) {
    match serde_json::to_string_pretty(value) {
        Ok(json) => println!("{}", json),
        Err(e) => eprintln!("error: {}", e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn select(args: &[&str]) -> SelectReport {
        let cli = Cli::try_parse_from(args).expect("arguments should parse");
        let Command::Select(select_args) = &cli.command else {
            panic!("expected select");
        };
        run_select(&ReferenceData::builtin(), select_args)
    }

    #[test]
    fn test_select_cascade() {
        let report = select(&[
            "threadbook",
            "select",
            "--family",
            "parallel60",
            "--series",
            "MF",
            "--insert",
            "R06005-05010",
            "--size",
            "MF 8 x 1.0",
        ]);

        let insert = report.insert.as_ref().unwrap();
        assert!(insert.sizes.contains(&"MF 8 x 1.0".to_string()));
        assert!(!insert.sizes.contains(&"M 6 x 1.0".to_string()));
        assert!(!insert.sizes.contains(&"UNF 1/4-28".to_string()));

        assert_eq!(report.state.size.as_deref(), Some("MF 8 x 1.0"));
        assert_eq!(report.state.insert.as_deref(), Some("R06005-05010"));
        let size = report.size.as_ref().unwrap();
        assert_eq!(size.cutting_diameter, Some(5.0));
        assert_eq!(size.inserts, vec!["R06005-05010", "R06007-06810"]);
    }

    #[test]
    fn test_select_hidden_series() {
        let report = select(&["threadbook", "select", "--family", "tapered60", "--series", "HC"]);
        assert_eq!(report.state.series, None);
        assert_eq!(report.family.sizes, vec!["NPT 1/4", "NPT 3/8", "NPT 1/2", "NPT 3/4"]);
    }

    #[test]
    fn test_bad_family_is_rejected() {
        assert!(Cli::try_parse_from(["threadbook", "select", "--family", "parallel45"]).is_err());
        assert!(Cli::try_parse_from([
            "threadbook",
            "select",
            "--family",
            "parallel60",
            "--series",
            "BSW"
        ])
        .is_err());
    }

    #[test]
    fn test_verbosity() {
        let cli = Cli::try_parse_from(["threadbook", "-vv", "families"]).unwrap();
        assert_eq!(cli.level(), tracing::Level::DEBUG);

        let cli =
            Cli::try_parse_from(["threadbook", "-v", "--log-level", "trace", "check"]).unwrap();
        assert_eq!(cli.level(), tracing::Level::TRACE);

        let cli = Cli::try_parse_from(["threadbook", "check"]).unwrap();
        assert_eq!(cli.level(), tracing::Level::WARN);
    }

    fn rendered(designation: &str) -> String {
        let report = unrecognized_report(designation).expect("designation has bad characters");
        let mut out = Vec::new();
        report
            .write(Source::from(designation.to_string()), &mut out)
            .unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_unrecognized_multibyte_characters() {
        let designation = "Ø12 é";
        let spans = lexer::unrecognized_spans(designation);
        let marked: Vec<&str> = spans.iter().map(|s| &designation[s.clone()]).collect();
        assert_eq!(marked, vec!["Ø", "é"]);

        let text = rendered(designation);
        assert_eq!(text.matches("not part of a thread designation").count(), 2);

        let text = rendered("M 6 ×× 1.0");
        assert_eq!(
            text.matches("not part of a thread designation").count(),
            lexer::unrecognized_spans("M 6 ×× 1.0").len()
        );
    }

    #[test]
    fn test_series_selector_label() {
        assert_eq!(series_selector(Family::Parallel60), " [series: M / MF / HC]");
        assert_eq!(series_selector(Family::Tapered55), "");
    }

    #[test]
    fn test_clean_designation_has_no_report() {
        assert!(unrecognized_report("UNF 1/4-28").is_none());
    }

    #[test]
    fn test_select_report_json() {
        let report = select(&[
            "threadbook",
            "select",
            "--family",
            "parallel55",
            "--size",
            "G (PF) 1/4",
        ]);
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["state"]["family"], "parallel55");
        assert_eq!(json["size"]["inserts"][0], "R05510-10018");
        assert_eq!(json["size"]["resolution"]["resolution"], "exact");
        assert!(json.get("insert").is_none());
    }
}
