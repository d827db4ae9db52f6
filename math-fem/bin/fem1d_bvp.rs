//! Reference driver for the 1D linear FEM solver
//!
//! Solves the built-in benchmark problems, prints nodal comparison tables
//! against the exact solution and optionally runs convergence studies.
//!
//! Usage:
//!     cargo run --bin fem1d-bvp --release -- --nodes 11 --problem 1 --refine 11,21,41,81

use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::Context;
use clap::Parser;
use math_bvp_fem::mesh::uniform_mesh;
use math_bvp_fem::{ComparisonTable, ConvergenceStudy, DriverConfig, SolveStatus};
use serde::Serialize;

#[derive(Parser, Debug)]
#[command(author, version, about = "Linear FEM solver for -(a u')' + c u = f on [0, 1]")]
struct Cli {
    /// Number of mesh nodes, including both end points
    #[arg(long)]
    nodes: Option<usize>,

    /// Problem id to run (1..=5), may be repeated; all problems by default
    #[arg(long = "problem")]
    problems: Vec<usize>,

    /// Node counts for a convergence study, e.g. 11,21,41
    #[arg(long, value_delimiter = ',')]
    refine: Vec<usize>,

    /// Gauss points per sub-interval used in assembly (2 reproduces the reference tables)
    #[arg(long)]
    quadrature: Option<usize>,

    /// JSON configuration file; command line flags take precedence
    #[arg(long)]
    config: Option<PathBuf>,

    /// Write results as JSON to this path
    #[arg(long)]
    json: Option<PathBuf>,
}

impl Cli {
    fn into_config(self) -> anyhow::Result<DriverConfig> {
        let mut config = match &self.config {
            Some(path) => DriverConfig::from_file(path)
                .with_context(|| format!("loading {}", path.display()))?,
            None => DriverConfig::default(),
        };
        if let Some(nodes) = self.nodes {
            config.nodes = nodes;
        }
        if !self.problems.is_empty() {
            config.problems = self.problems;
        }
        if !self.refine.is_empty() {
            config.refine = self.refine;
        }
        if let Some(order) = self.quadrature {
            config.quadrature_order = order;
        }
        if self.json.is_some() {
            config.output = self.json;
        }
        config.validate()?;
        Ok(config)
    }
}

#[derive(Debug, Clone, Serialize)]
struct ProblemResult {
    problem_id: usize,
    name: String,
    nodes: usize,
    status: SolveStatus,
    status_code: u8,
    singular_equations: Vec<usize>,
    max_error: f64,
    rms_error: f64,
    duration_us: u64,
    table: ComparisonTable,
    convergence: Option<ConvergenceStudy>,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let config = Cli::parse().into_config()?;
    let mesh = uniform_mesh(config.nodes)?;
    let rule = config.quadrature_rule();

    println!();
    println!("FEM1D_BVP_LINEAR");
    println!("  Version {}", math_bvp_fem::version());
    println!("  Solve -( A(x) U'(x) )' + C(x) U(x) = F(x)");
    println!("  for 0 < x < 1, with U(0) = U(1) = 0.");

    let mut results = Vec::new();
    for problem in config.selected_problems()? {
        println!();
        println!("PROBLEM {}: {}", problem.id, problem.name);
        for line in problem.description {
            println!("  {}", line);
        }
        println!();
        println!("  Number of nodes = {}", mesh.num_nodes());
        println!("  Number of elements = {}", mesh.num_elements());
        println!("  Quadrature points per element = {}", rule.num_points());
        println!();

        let start = Instant::now();
        let solution = problem
            .solve_with_rule(&mesh, &rule)
            .with_context(|| format!("solving problem {}", problem.id))?;
        let duration_us = start.elapsed().as_micros() as u64;

        let table = ComparisonTable::new(&mesh, &solution, problem.exact);
        print!("{}", table);

        let convergence = if config.refine.is_empty() {
            None
        } else {
            let study = ConvergenceStudy::run_with_rule(&problem, &config.refine, &rule)
                .with_context(|| format!("convergence study for problem {}", problem.id))?;
            println!();
            print!("{}", study);
            Some(study)
        };

        results.push(ProblemResult {
            problem_id: problem.id,
            name: problem.name.to_string(),
            nodes: mesh.num_nodes(),
            status: solution.status,
            status_code: solution.status.code(),
            singular_equations: solution.singular_equations.clone(),
            max_error: table.max_error(),
            rms_error: table.rms_error(),
            duration_us,
            table,
            convergence,
        });
    }

    print_summary(&results);

    if let Some(path) = &config.output {
        save_results(&results, path)?;
        println!("\nResults written to {}", path.display());
    }

    println!();
    println!("FEM1D_BVP_LINEAR");
    println!("  Normal end of execution.");
    Ok(())
}

fn print_summary(results: &[ProblemResult]) {
    println!("\nSummary:");
    println!(
        "{:<4} | {:<20} | {:<6} | {:<12} | {:<12} | {:<8} | {}",
        "Id", "Problem", "Nodes", "Max error", "RMS error", "Time(us)", "Status"
    );
    println!("{:-<90}", "");
    for res in results {
        let order = res
            .convergence
            .as_ref()
            .and_then(|s| s.final_order())
            .map(|p| format!(" (order {:.2})", p))
            .unwrap_or_default();
        println!(
            "{:<4} | {:<20} | {:<6} | {:<12.4e} | {:<12.4e} | {:<8} | {}{}",
            res.problem_id,
            res.name,
            res.nodes,
            res.max_error,
            res.rms_error,
            res.duration_us,
            res.status,
            order
        );
    }
}

fn save_results(results: &[ProblemResult], path: impl AsRef<Path>) -> anyhow::Result<()> {
    let path = path.as_ref();
    let json = serde_json::to_string_pretty(results)?;
    std::fs::write(path, json).with_context(|| format!("writing {}", path.display()))?;
    Ok(())
}
