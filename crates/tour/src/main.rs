use anyhow::Context;
use clap::Parser;
use std::io::{self, Write};
use std::process::ExitCode;
use tour_core::{run_demo, Config, FixedRandom, Random, SeededRandom, Step};
use tracing::debug;
use tracing_subscriber::EnvFilter;

/// Application configuration.
#[derive(clap::Parser, Debug)]
#[clap(version, about)]
struct Args {
    /// The command to run. Defaults to `run`.
    #[command(subcommand)]
    subcommand: Option<Subcommand>,

    /// The global options.
    #[clap(flatten)]
    global: GlobalArgs,
}

/// Global configuration options.
#[derive(clap::Args, Debug)]
struct GlobalArgs {
    #[arg(short = 'v', long = "verbose", global = true)]
    verbose: bool,

    #[arg(long = "debug", global = true)]
    debug: bool,
}

/// The subcommands for the tour executable.
#[derive(clap::Subcommand, Debug)]
enum Subcommand {
    /// Run the tour.
    Run(RunArgs),
    /// List the steps of the tour.
    List,
}

/// The tour subcommand.
#[derive(clap::Args, Debug, Default)]
struct RunArgs {
    /// Seed the random source so the run can be repeated.
    #[arg(long)]
    seed: Option<u64>,

    /// Force the value rolled by the if-initializer step.
    #[arg(long, conflicts_with = "seed", value_parser = clap::value_parser!(u32).range(0..=9))]
    roll: Option<u32>,

    /// Only run the given steps.
    #[arg(long = "step", value_enum)]
    steps: Vec<Step>,
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_logging(&args.global);
    debug!(?args, "parsed arguments");

    let mut stdout = io::stdout().lock();
    let result = match args.subcommand {
        Some(Subcommand::Run(run_args)) => cmd_run(&run_args, &mut stdout),
        None => cmd_run(&RunArgs::default(), &mut stdout),
        Some(Subcommand::List) => cmd_list(&mut stdout),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err:#}");
            ExitCode::FAILURE
        }
    }
}

fn init_logging(global_args: &GlobalArgs) {
    let default_level = if global_args.debug {
        "trace"
    } else if global_args.verbose {
        "debug"
    } else {
        "warn"
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

impl RunArgs {
    fn random(&self) -> Box<dyn Random> {
        match (self.roll, self.seed) {
            (Some(roll), _) => Box::new(FixedRandom::new(roll)),
            (None, Some(seed)) => Box::new(SeededRandom::from_seed(seed)),
            (None, None) => Box::new(SeededRandom::from_entropy()),
        }
    }

    fn config(&self) -> Config {
        if self.steps.is_empty() {
            Config::new()
        } else {
            Config::new().with_steps(self.steps.iter().copied())
        }
    }
}

fn cmd_run(args: &RunArgs, out: &mut impl Write) -> anyhow::Result<()> {
    let mut random = args.random();
    run_demo(&args.config(), random.as_mut(), out).context("failed to run the tour")
}

fn cmd_list(out: &mut impl Write) -> anyhow::Result<()> {
    for step in Step::ALL {
        writeln!(out, "{}", step.name()).context("failed to list the steps")?;
    }
    Ok(())
}
