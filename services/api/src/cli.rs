use crate::demo::{run_demo, run_evaluate, run_schools, DemoArgs, EvaluateArgs, SchoolsArgs};
use crate::server;
use admit_ai::admissions::ScoringProfile;
use admit_ai::error::AppError;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "Admissions Evaluator",
    about = "Estimate college admission chances and explain them, from the command line or over HTTP",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Start the HTTP service (default command)
    Serve(ServeArgs),
    /// List the schools in the active catalog
    Schools(SchoolsArgs),
    /// Evaluate an applicant profile stored as JSON
    Evaluate(EvaluateArgs),
    /// Evaluate a sample applicant against a handful of schools
    Demo(DemoArgs),
}

#[derive(Args, Debug, Default)]
pub(crate) struct ServeArgs {
    /// Override the configured host for the HTTP server
    #[arg(long)]
    pub(crate) host: Option<String>,
    /// Override the configured port for the HTTP server
    #[arg(long)]
    pub(crate) port: Option<u16>,
    #[command(flatten)]
    pub(crate) engine: EngineArgs,
}

/// Catalog and weighting overrides shared by every command that evaluates.
#[derive(Args, Debug, Default, Clone)]
pub(crate) struct EngineArgs {
    /// CSV school catalog replacing the built-in one
    #[arg(long)]
    pub(crate) catalog: Option<PathBuf>,
    /// Component weighting: holistic or core
    #[arg(long, value_parser = crate::infra::parse_scoring_profile)]
    pub(crate) scoring_profile: Option<ScoringProfile>,
}

pub(crate) async fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    match command {
        Command::Serve(args) => server::run(args).await,
        Command::Schools(args) => run_schools(args),
        Command::Evaluate(args) => run_evaluate(args),
        Command::Demo(args) => run_demo(args),
    }
}
