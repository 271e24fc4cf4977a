//! `numeth`: solve linear systems and find roots from plain-text input files.

mod parse;
mod report;

use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::Context;
use clap::{Args, Parser, Subcommand};
use log::Level;
use numeth_observers::{Chain, LogObserver, StallGuard};
use numeth_solvers::{
    linear,
    roots::{self, Cubic, RootTrace},
};

#[derive(Parser, Debug)]
#[command(name = "numeth", version, about = "Linear-system solvers and root finders")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Solve A·x = b with one of the linear methods
    Linear(LinearArgs),
    /// Find a root of f(x) = x³ − 9x + 3 and write the iteration table
    Roots(RootsArgs),
    /// List the available methods
    Methods,
}

#[derive(Args, Debug)]
struct LinearArgs {
    /// Method name or slug (see `numeth methods`)
    #[arg(long, short)]
    method: linear::Method,

    /// File holding the augmented matrix A|b
    #[arg(long, conflicts_with_all = ["matrix", "vector"], required_unless_present = "matrix")]
    system: Option<PathBuf>,

    /// File holding the square matrix A
    #[arg(long, requires = "vector")]
    matrix: Option<PathBuf>,

    /// File holding the right-hand side b
    #[arg(long, requires = "matrix")]
    vector: Option<PathBuf>,

    /// Record intermediate steps
    #[arg(long)]
    steps: bool,

    /// Include matrix snapshots in the steps
    #[arg(long, requires = "steps")]
    show_matrices: bool,

    /// Include the L and U factors in the steps
    #[arg(long, requires = "steps")]
    show_lu: bool,

    /// Include the column permutation of complete pivoting in the steps
    #[arg(long, requires = "steps")]
    show_permutation: bool,

    /// Include every iterate of Jacobi or Gauss-Seidel in the steps
    #[arg(long, requires = "steps")]
    record_iterations: bool,

    /// Initial guess for the iterative methods, comma separated
    #[arg(long, value_delimiter = ',', allow_hyphen_values = true)]
    x0: Option<Vec<f64>>,

    /// Convergence tolerance for the iterative methods
    #[arg(long, default_value_t = 1e-8)]
    tol: f64,

    /// Maximum number of sweeps for the iterative methods
    #[arg(long, default_value_t = 100)]
    max_iter: usize,
}

#[derive(Args, Debug)]
struct RootsArgs {
    /// Parameter file: method a b x0 x1 tol maxIter
    params: PathBuf,

    /// Where to write the iteration table
    #[arg(long, short, default_value = "result.txt")]
    output: PathBuf,

    /// Stop once the error has not improved for this many iterations
    #[arg(long)]
    stall: Option<usize>,

    /// Level at which each iteration is logged
    #[arg(long, default_value_t = Level::Debug)]
    log_level: Level,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    match Cli::parse().command {
        Command::Linear(args) => run_linear(&args),
        Command::Roots(args) => run_roots(&args),
        Command::Methods => {
            print!("{}", report::methods()?);
            Ok(())
        }
    }
}

fn run_linear(args: &LinearArgs) -> anyhow::Result<()> {
    let (a, b) = match (&args.system, &args.matrix, &args.vector) {
        (Some(system), _, _) => parse::system(&read(system)?)
            .with_context(|| format!("invalid system file {}", system.display()))?,
        (None, Some(matrix), Some(vector)) => (
            parse::matrix(&read(matrix)?)
                .with_context(|| format!("invalid matrix file {}", matrix.display()))?,
            parse::vector(&read(vector)?)
                .with_context(|| format!("invalid vector file {}", vector.display()))?,
        ),
        _ => anyhow::bail!("pass either --system or both --matrix and --vector"),
    };

    let options = linear::Options {
        return_steps: args.steps,
        show_matrices: args.show_matrices,
        show_lu: args.show_lu,
        show_permutation: args.show_permutation,
        record_iterations: args.record_iterations,
        x0: args.x0.clone().map(Into::into),
        tol: args.tol,
        max_iter: args.max_iter,
    };

    let solution = linear::solve(args.method, &a, &b, &options)?;
    print!("{}", report::linear_solution(args.method, &a, &b, &solution)?);
    Ok(())
}

fn run_roots(args: &RootsArgs) -> anyhow::Result<()> {
    let (method, input) = parse::root_params(&read(&args.params)?)
        .with_context(|| format!("invalid parameter file {}", args.params.display()))?;

    println!("====================================");
    println!("     NUMERICAL METHODS");
    println!("====================================");
    println!("Selected method: {}", method.label());

    let logger = LogObserver::new(args.log_level);
    let trace: RootTrace = match args.stall {
        Some(patience) => roots::run_observed(
            method,
            &Cubic,
            &input,
            Chain::new(logger, StallGuard::new(patience)),
        ),
        None => roots::run_observed(method, &Cubic, &input, logger),
    };

    fs::write(&args.output, trace.render())
        .with_context(|| format!("cannot write {}", args.output.display()))?;

    print!("{}", report::root_summary(&trace)?);
    println!("------------------------------------");
    println!("Done. Results saved to {}", args.output.display());
    println!("------------------------------------");
    Ok(())
}

fn read(path: &Path) -> anyhow::Result<String> {
    fs::read_to_string(path).with_context(|| format!("cannot read {}", path.display()))
}
