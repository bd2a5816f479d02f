use std::io::{self, BufRead, Write};
use std::process;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use echelon::elimination_runs::method::Method;
use echelon::elimination_runs::outcome::SolveOutcome;
use echelon::elimination_runs::run_builder::EliminationRunBuilder;
use echelon::row_reduction::classification::SolutionType;
use echelon::row_reduction::matrix::AugmentedMatrix;
use env_logger::Env;
use itertools::Itertools;
use strum::IntoEnumIterator;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Preselect the elimination method instead of prompting each round
    #[arg(short, long, value_enum)]
    method: Option<MethodChoice>,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum MethodChoice {
    Gauss,
    GaussJordan,
}

impl From<MethodChoice> for Method {
    fn from(choice: MethodChoice) -> Self {
        match choice {
            MethodChoice::Gauss => Method::GaussElimination,
            MethodChoice::GaussJordan => Method::GaussJordan,
        }
    }
}

type InputLines = io::Lines<io::StdinLock<'static>>;

fn main() {
    let args = Args::parse();
    env_logger::Builder::from_env(Env::default().default_filter_or("warn")).init();
    log::debug!("Running with: {args:?}");
    if let Err(err) = run_solver_loop(&args) {
        eprintln!("ran into solver error: {err:?}");
        process::exit(1)
    }
}

fn run_solver_loop(args: &Args) -> Result<()> {
    let mut lines = io::stdin().lock().lines();
    loop {
        let method = match args.method {
            Some(choice) => Method::from(choice),
            None => read_method(&mut lines)?,
        };
        let n = read_equation_count(&mut lines)?;
        let matrix = read_augmented_matrix(&mut lines, n)?;

        println!("\nProcessing...");
        print_matrix("Initial Matrix", &matrix);

        let outcome = EliminationRunBuilder::new(method).run(matrix);
        present_outcome(method, &outcome);

        let again = prompt_line(&mut lines, "\nDo you want to solve another system? (y/n): ")?;
        if !again.trim().eq_ignore_ascii_case("y") {
            println!("\nThank you! Goodbye");
            return Ok(());
        }
    }
}

fn prompt_line(lines: &mut InputLines, prompt: &str) -> Result<String> {
    print!("{prompt}");
    io::stdout().flush().context("flushing prompt")?;
    lines
        .next()
        .context("input stream closed")?
        .context("reading from stdin")
}

fn read_method(lines: &mut InputLines) -> Result<Method> {
    loop {
        println!("\nChoose Method:");
        for (idx, method) in Method::iter().enumerate() {
            println!("{}. {}", idx + 1, method);
        }
        let entered = prompt_line(lines, "Enter choice (1 or 2): ")?;
        let picked = entered
            .trim()
            .parse::<usize>()
            .ok()
            .and_then(|choice| Method::iter().nth(choice.wrapping_sub(1)));
        match picked {
            Some(method) => return Ok(method),
            None => println!("ERROR: Invalid choice!"),
        }
    }
}

fn read_equation_count(lines: &mut InputLines) -> Result<usize> {
    loop {
        let entered = prompt_line(lines, "Enter number of equations: ")?;
        match entered.trim().parse::<usize>() {
            Ok(n) if n >= 1 => return Ok(n),
            _ => println!("ERROR: Enter a positive whole number!"),
        }
    }
}

fn read_augmented_matrix(lines: &mut InputLines, n: usize) -> Result<AugmentedMatrix> {
    println!(
        "\nYou must enter {} numbers per row (coefficients + constant):",
        n + 1
    );
    let mut rows: Vec<Vec<f64>> = Vec::with_capacity(n);
    while rows.len() < n {
        let entered = prompt_line(lines, &format!("Row {}: ", rows.len() + 1))?;
        let tokens = entered.split_whitespace().collect_vec();
        if tokens.len() != n + 1 {
            println!("ERROR: Enter exactly {} numbers! Try again.", n + 1);
            continue;
        }
        match tokens
            .iter()
            .map(|token| token.parse::<f64>())
            .collect::<Result<Vec<f64>, _>>()
        {
            Ok(row) => rows.push(row),
            Err(_) => println!("ERROR: Only numeric values allowed! Try again."),
        }
    }
    AugmentedMatrix::from_rows(rows)
}

fn print_matrix(title: &str, matrix: &AugmentedMatrix) {
    println!("\n{title}");
    println!("{matrix}");
}

fn present_outcome(method: Method, outcome: &SolveOutcome) {
    for snapshot in &outcome.steps {
        print_matrix(&snapshot.title(), &snapshot.matrix);
    }
    print_matrix(method.final_form_title(), &outcome.matrix);
    println!();
    match (outcome.classification, &outcome.solution) {
        (SolutionType::Unique, Some(solution)) => {
            println!("Unique solution:");
            for (idx, value) in solution.iter().enumerate() {
                println!("x{} = {}", idx + 1, value);
            }
        }
        (SolutionType::Unique, None) => {
            // backstop: classification said unique but substitution bailed
            println!("Unique classification, but the solution could not be resolved.");
        }
        (SolutionType::Infinite, _) => println!("Infinite solutions (free variables exist)."),
        (SolutionType::NoSolution, _) => println!("No solution (inconsistent system)."),
    }
}
