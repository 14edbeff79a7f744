use crate::{
    error::Result,
    project::utils::PI,
    random::Random,
    square::square,
    transform::transform_value,
};
use std::io::Write;
use tracing::{debug, info_span, trace};

/// One demonstration in the tour, listed in run order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, clap::ValueEnum)]
pub enum Step {
    StructuredBinding,
    IfInitializer,
    ConstexprLambda,
    FoldSum,
    ProcessedInt,
    ProcessedString,
    InlineVariable,
}

impl Step {
    pub const ALL: [Step; 7] = [
        Step::StructuredBinding,
        Step::IfInitializer,
        Step::ConstexprLambda,
        Step::FoldSum,
        Step::ProcessedInt,
        Step::ProcessedString,
        Step::InlineVariable,
    ];

    /// The name used to select this step on the command line.
    pub fn name(self) -> &'static str {
        match self {
            Step::StructuredBinding => "structured-binding",
            Step::IfInitializer => "if-initializer",
            Step::ConstexprLambda => "constexpr-lambda",
            Step::FoldSum => "fold-sum",
            Step::ProcessedInt => "processed-int",
            Step::ProcessedString => "processed-string",
            Step::InlineVariable => "inline-variable",
        }
    }
}

/// Which steps a run performs.
#[derive(Clone, Debug)]
pub struct Config {
    steps: Vec<Step>,
}

impl Config {
    pub fn new() -> Config {
        Config {
            steps: Step::ALL.to_vec(),
        }
    }

    /// Restrict the run to the given steps. They still run in tour order,
    /// and each runs at most once.
    #[must_use]
    pub fn with_steps(mut self, steps: impl IntoIterator<Item = Step>) -> Config {
        self.steps = steps.into_iter().collect();
        self.steps.sort_unstable();
        self.steps.dedup();
        self
    }

    pub fn steps(&self) -> &[Step] {
        &self.steps
    }
}

impl Default for Config {
    fn default() -> Self {
        Config::new()
    }
}

/// Run the tour, writing one block of text per step to `out`.
pub fn run_demo<R, W>(config: &Config, random: &mut R, out: &mut W) -> Result<()>
where
    R: Random + ?Sized,
    W: Write + ?Sized,
{
    let _span = info_span!("run_demo").entered();

    #[allow(unused_variables)]
    let unused_var = 42;

    for &step in config.steps() {
        debug!(step = step.name(), "running step");
        run_step(step, random, out)?;
    }
    out.flush()?;
    Ok(())
}

fn run_step<R, W>(step: Step, random: &mut R, out: &mut W) -> Result<()>
where
    R: Random + ?Sized,
    W: Write + ?Sized,
{
    match step {
        Step::StructuredBinding => {
            let values: [i32; 3] = [10, 20, 30];
            let [a, b, c] = values;
            writeln!(out, "Structured binding: {a}, {b}, {c}")?;
        }
        Step::IfInitializer => {
            if let result @ 6.. = roll_digit(random) {
                writeln!(out, "If-initializer: {result} > 5")?;
            }
        }
        Step::ConstexprLambda => {
            const FIVE_SQUARED: i32 = square(5);
            writeln!(out, "Constexpr lambda: {FIVE_SQUARED}")?;
        }
        Step::FoldSum => {
            let total = crate::sum!(1, 2.5, 3, 4.2)?;
            writeln!(out, "Fold sum: {total}")?;
        }
        Step::ProcessedInt => {
            writeln!(out, "Processed int: {}", transform_value(10))?;
        }
        Step::ProcessedString => {
            let greeting = transform_value(String::from("World"));
            writeln!(out, "Processed string: {greeting}")?;
        }
        Step::InlineVariable => {
            writeln!(out, "Inline variable: {PI}")?;
        }
    }
    Ok(())
}

/// Draw a digit in `0..=9`.
fn roll_digit<R: Random + ?Sized>(random: &mut R) -> u32 {
    let digit = random.next_u32() % 10;
    trace!(digit, "rolled");
    digit
}
