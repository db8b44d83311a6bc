use std::{fs::File, io::BufReader, path::PathBuf, process::ExitCode};

use anyhow::Context as _;
use clap::{ArgAction, Parser, Subcommand, ValueEnum};

#[derive(Parser, Debug)]
#[command(name = "chapter-ir", version)]
struct Cli {
    /// Increase log verbosity on stderr (-v info, -vv debug, -vvv trace).
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Validate one or more chapter IR JSON files.
    Validate(ValidateArgs),
    /// Print the IR vocabulary tables as JSON.
    Schema,
}

#[derive(Parser, Debug)]
struct ValidateArgs {
    /// Input chapter JSON files.
    #[arg(long = "in", required = true, num_args = 1..)]
    in_paths: Vec<PathBuf>,

    /// Output format.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Validate files in parallel.
    #[arg(long, default_value_t = false)]
    parallel: bool,

    /// Override rayon worker threads (parallel mode only).
    #[arg(long)]
    threads: Option<usize>,

    /// Validator options JSON file (`schema_version`, `max_depth`).
    #[arg(long)]
    opts: Option<PathBuf>,

    /// Override the maximum block nesting depth.
    #[arg(long)]
    max_depth: Option<usize>,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    match cli.cmd {
        Command::Validate(args) => cmd_validate(args),
        Command::Schema => cmd_schema(),
    }
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => tracing::Level::WARN,
        1 => tracing::Level::INFO,
        2 => tracing::Level::DEBUG,
        _ => tracing::Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
}

fn load_opts(args: &ValidateArgs) -> anyhow::Result<chapter_ir::ValidatorOpts> {
    let mut opts = match &args.opts {
        Some(path) => {
            let f = File::open(path)
                .with_context(|| format!("open validator options '{}'", path.display()))?;
            chapter_ir::ValidatorOpts::from_reader(BufReader::new(f))?
        }
        None => chapter_ir::ValidatorOpts::default(),
    };
    if let Some(depth) = args.max_depth {
        opts.max_depth = depth;
    }
    Ok(opts)
}

fn cmd_validate(args: ValidateArgs) -> anyhow::Result<ExitCode> {
    let validator = chapter_ir::ChapterValidator::new(load_opts(&args)?)?;
    let batch_opts = chapter_ir::BatchOpts {
        parallel: args.parallel,
        threads: args.threads,
    };
    let report = chapter_ir::validate_paths(&args.in_paths, &validator, &batch_opts)?;

    match args.format {
        OutputFormat::Text => print_text(&report),
        OutputFormat::Json => print_json(&report)?,
    }

    Ok(if report.all_ok() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}

fn print_text(report: &chapter_ir::BatchReport) {
    for file in &report.files {
        let label = file.path.display();
        match &file.outcome {
            chapter_ir::FileOutcome::Checked(r) if r.ok() => println!("ok    {label}"),
            chapter_ir::FileOutcome::Checked(r) => {
                println!("FAIL  {label} ({} errors)", r.errors.len());
                for d in &r.errors {
                    println!("      {d}");
                }
            }
            chapter_ir::FileOutcome::LoadFailed(e) => println!("ERROR {label}: {e}"),
        }
    }
    eprintln!(
        "{} passed, {} failed, {} unreadable",
        report.passed(),
        report.failed(),
        report.unreadable()
    );
}

fn print_json(report: &chapter_ir::BatchReport) -> anyhow::Result<()> {
    let files: Vec<serde_json::Value> = report
        .files
        .iter()
        .map(|f| match &f.outcome {
            chapter_ir::FileOutcome::Checked(r) => serde_json::json!({
                "path": f.path,
                "chapterId": f.chapter_id,
                "ok": r.ok(),
                "schemaVersion": r.schema_version,
                "errors": r.errors,
            }),
            chapter_ir::FileOutcome::LoadFailed(e) => serde_json::json!({
                "path": f.path,
                "ok": false,
                "loadError": e.to_string(),
            }),
        })
        .collect();
    let out = serde_json::to_string_pretty(&files).context("serialize report JSON")?;
    println!("{out}");
    Ok(())
}

fn cmd_schema() -> anyhow::Result<ExitCode> {
    let registry = chapter_ir::SchemaRegistry::default();
    let out = serde_json::to_string_pretty(&registry).context("serialize schema JSON")?;
    println!("{out}");
    Ok(ExitCode::SUCCESS)
}
