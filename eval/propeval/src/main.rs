use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use log::LevelFilter;
use propeval::{
    binarize, confusion, cutoff, labels, precision, read_input, report, BinarizeRule, CliError,
    EvalConfig, OutputMode, Rendered, ReportOverrides,
};
use propeval_metrics::Proportion;

#[derive(Debug, Parser)]
#[command(
    name = "propeval",
    version,
    about = "Evaluate ranked binary classifiers at a top proportion of the population",
    long_about = "propeval computes the cutoff score that selects the top proportion of a\n\
        population, binarizes scores at that cutoff, and reports precision, confusion\n\
        counts and label coverage.\n\n\
        Input is JSON: {\"y_true\": [1, null, 0, ...], \"y_score\": [0.9, 0.4, ...]}\n\
        where null marks a sample without a label.\n\n\
        EXAMPLES:\n\
        \n  propeval cutoff -p 0.1 scores.json\n\
        \n  propeval precision -p 0.05 --ignore-nas scores.json\n\
        \n  propeval report --config eval.toml --json scores.json\n\
        \n  cat scores.json | propeval confusion -p 0.2"
)]
struct Cli {
    /// Increase verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Print results as JSON
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Score at the boundary of the top proportion
    Cutoff(ProportionArgs),
    /// Turn scores into 0/1 predictions
    Binarize(BinarizeArgs),
    /// Precision of the top proportion and the cutoff used
    Precision(PrecisionArgs),
    /// True/false positive/negative counts at the top proportion
    Confusion(ProportionArgs),
    /// Labeled samples inside the top proportion
    Labels(LabelsArgs),
    /// Table of every metric over a list of proportions
    Report(ReportArgs),
}

#[derive(Debug, Args, Clone)]
struct InputArg {
    /// Input JSON file (reads from stdin if not provided)
    #[arg(value_name = "FILE")]
    input: Option<PathBuf>,
}

#[derive(Debug, Args, Clone)]
struct ProportionArgs {
    /// Proportion of the population to select, in [0, 1]
    #[arg(short = 'p', long = "proportion", value_parser = parse_proportion)]
    proportion: f64,

    #[command(flatten)]
    input: InputArg,
}

#[derive(Debug, Args, Clone)]
struct BinarizeArgs {
    /// Select the top proportion (scores >= cutoff)
    #[arg(
        short = 'p',
        long = "proportion",
        value_parser = parse_proportion,
        conflicts_with = "quantile",
        required_unless_present = "quantile"
    )]
    proportion: Option<f64>,

    /// Select scores strictly above this quantile
    #[arg(short = 'q', long = "quantile", value_parser = parse_proportion)]
    quantile: Option<f64>,

    #[command(flatten)]
    input: InputArg,
}

#[derive(Debug, Args, Clone)]
struct PrecisionArgs {
    #[command(flatten)]
    target: ProportionArgs,

    /// Treat missing labels as negatives instead of failing
    #[arg(long = "ignore-nas")]
    ignore_nas: bool,
}

#[derive(Debug, Args, Clone)]
struct LabelsArgs {
    #[command(flatten)]
    target: ProportionArgs,

    /// Report a fraction of all labeled samples instead of a count
    #[arg(long)]
    normalize: bool,
}

#[derive(Debug, Args, Clone)]
struct ReportArgs {
    /// TOML file with proportions, ignore_nas and normalize
    #[arg(long = "config", value_name = "FILE")]
    config: Option<PathBuf>,

    /// Proportion to evaluate; repeat for several (default: 0.01 to 1.00)
    #[arg(short = 'p', long = "proportion", value_parser = parse_proportion)]
    proportions: Vec<f64>,

    /// Treat missing labels as negatives for precision
    #[arg(long = "ignore-nas")]
    ignore_nas: bool,

    /// Report label coverage as a fraction
    #[arg(long)]
    normalize: bool,

    #[command(flatten)]
    input: InputArg,
}

fn parse_proportion(s: &str) -> Result<f64, String> {
    s.parse::<Proportion>()
        .map(f64::from)
        .map_err(|e| e.to_string())
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    let _ = env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .try_init();
}

fn execute(command: Command) -> Result<Rendered, CliError> {
    match command {
        Command::Cutoff(args) => cutoff(&read_input(&args.input.input)?, args.proportion),
        Command::Binarize(args) => {
            let rule = match (args.quantile, args.proportion) {
                (Some(q), _) => BinarizeRule::Quantile(q),
                (None, Some(p)) => BinarizeRule::TopProportion(p),
                (None, None) => unreachable!("clap requires --proportion or --quantile"),
            };
            binarize(&read_input(&args.input.input)?, rule)
        }
        Command::Precision(args) => precision(
            &read_input(&args.target.input.input)?,
            args.target.proportion,
            args.ignore_nas,
        ),
        Command::Confusion(args) => confusion(&read_input(&args.input.input)?, args.proportion),
        Command::Labels(args) => labels(
            &read_input(&args.target.input.input)?,
            args.target.proportion,
            args.normalize,
        ),
        Command::Report(args) => {
            let base = match &args.config {
                Some(path) => EvalConfig::load(path)?,
                None => EvalConfig::default(),
            };
            let config = base.merged(&ReportOverrides {
                proportions: args.proportions.clone(),
                ignore_nas: args.ignore_nas,
                normalize: args.normalize,
            });
            if let Ok(effective) = config.to_toml() {
                log::debug!("effective report config:\n{effective}");
            }
            report(&read_input(&args.input.input)?, &config)
        }
    }
}

fn run_cli() -> i32 {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    let mode = if cli.json {
        OutputMode::Json
    } else {
        OutputMode::Text
    };

    match execute(cli.command) {
        Ok(rendered) => {
            println!("{}", rendered.render(mode).trim_end());
            0
        }
        Err(e) => {
            eprintln!("error: {e}");
            e.exit_code()
        }
    }
}

fn main() {
    std::process::exit(run_cli());
}
