//! Validation tests comparing FEM solutions against exact solutions
//!
//! Every reference problem has the exact solution u(x) = x(1-x)eˣ, so the
//! same checks apply across all coefficient choices.

use approx::{assert_abs_diff_eq, assert_relative_eq};
use math_bvp_fem::assembly::{BvpCoefficients, assemble_system};
use math_bvp_fem::mesh::{mapped_mesh, refinement_sequence, uniform_mesh};
use math_bvp_fem::problems::exact_solution;
use math_bvp_fem::{
    BenchmarkProblem, ComparisonTable, ConvergenceStudy, DriverConfig, SolveStatus, solve_bvp,
};

fn problem(id: usize) -> BenchmarkProblem {
    BenchmarkProblem::by_id(id).expect("built-in problem")
}

/// Discrete L2 error relative to the exact nodal values
fn relative_l2_error(nodes: &[f64], values: &[f64], exact: fn(f64) -> f64) -> f64 {
    let mut error_sq = 0.0;
    let mut norm_sq = 0.0;
    for (&x, &u) in nodes.iter().zip(values) {
        let e = exact(x);
        error_sq += (u - e) * (u - e);
        norm_sq += e * e;
    }
    if norm_sq > 1e-15 {
        (error_sq / norm_sq).sqrt()
    } else {
        error_sq.sqrt()
    }
}

#[test]
fn test_constant_diffusion_midpoint() {
    let mesh = uniform_mesh(11).unwrap();
    let p = problem(1);
    let solution = p.solve(&mesh).unwrap();

    assert_eq!(solution.status, SolveStatus::Ok);
    assert_relative_eq!(mesh.node(5), 0.5);
    let error = (solution.values[5] - exact_solution(0.5)).abs();
    assert!(error < 1e-3, "error at x = 0.5: {:e}", error);
    assert_abs_diff_eq!(solution.values[5], 0.412180, epsilon = 1e-5);
}

/// Midpoint values printed by the reference tables on 11 nodes
const MIDPOINT_VALUES: [f64; 5] = [
    0.41218075986238856,
    0.412749221639797,
    0.41256713548258916,
    0.4135402865200436,
    0.4136032306283281,
];

#[test]
fn test_nodal_values_are_bit_exact() {
    let mesh = uniform_mesh(11).unwrap();
    for (p, &expected) in BenchmarkProblem::all().iter().zip(MIDPOINT_VALUES.iter()) {
        let solution = p.solve(&mesh).unwrap();
        assert_eq!(solution.values[5], expected, "problem {}", p.id);
    }

    let solution = problem(1).solve(&mesh).unwrap();
    assert_eq!(solution.values[2], 0.19542468886849707);
}

#[test]
fn test_reaction_term_reproduces_same_curve() {
    let mesh = uniform_mesh(11).unwrap();
    let plain = problem(1).solve(&mesh).unwrap();
    let reaction = problem(2).solve(&mesh).unwrap();

    assert_eq!(reaction.status, SolveStatus::Ok);
    for i in 0..mesh.num_nodes() {
        assert_abs_diff_eq!(reaction.values[i], plain.values[i], epsilon = 2e-3);
        assert_abs_diff_eq!(reaction.values[i], exact_solution(mesh.node(i)), epsilon = 1e-3);
    }
}

#[test]
fn test_all_problems_within_tolerance() {
    let mesh = uniform_mesh(11).unwrap();
    for p in BenchmarkProblem::all() {
        let solution = p.solve(&mesh).unwrap();
        let table = ComparisonTable::new(&mesh, &solution, p.exact);

        assert!(solution.status.is_ok(), "problem {}: {}", p.id, solution.status);
        assert!(
            table.max_error() < 2e-3,
            "problem {}: max error {:e}",
            p.id,
            table.max_error()
        );

        let rel = relative_l2_error(mesh.nodes(), solution.values.as_slice().unwrap(), p.exact);
        assert!(rel < 1e-2, "problem {}: relative L2 error {:e}", p.id, rel);
    }
}

#[test]
fn test_boundary_values_are_exactly_zero() {
    for n in [2, 3, 11, 50, 101] {
        let mesh = uniform_mesh(n).unwrap();
        for p in BenchmarkProblem::all() {
            let solution = p.solve(&mesh).unwrap();
            assert_eq!(solution.values[0], 0.0);
            assert_eq!(solution.values[n - 1], 0.0);
            assert!(solution.dirichlet_defect < 1e-12);
        }
    }
}

#[test]
fn test_assembled_matrix_is_banded() {
    let mesh = uniform_mesh(11).unwrap();
    let p = problem(4);
    let system = assemble_system(&mesh, &BvpCoefficients::new(p.a, p.c, p.f)).unwrap();
    let n = system.dim();

    assert_eq!(n, 11);
    assert!(system.is_tridiagonal());
    for i in 0..n {
        for j in 0..n {
            if i.abs_diff(j) > 1 {
                assert_eq!(system.matrix[[i, j]], 0.0, "entry ({}, {})", i, j);
            }
        }
    }
    for &b in &[0, n - 1] {
        for j in 0..n {
            let expected = if j == b { 1.0 } else { 0.0 };
            assert_eq!(system.matrix[[b, j]], expected);
        }
        assert_eq!(system.rhs[b], 0.0);
    }
}

#[test]
fn test_zeroed_equation_is_consistent_singularity() {
    let mesh = uniform_mesh(11).unwrap();
    let p = problem(1);
    let mut system = assemble_system(&mesh, &BvpCoefficients::new(p.a, p.c, p.f)).unwrap();
    let k = 5;
    system.matrix.row_mut(k).fill(0.0);
    system.matrix.column_mut(k).fill(0.0);
    system.rhs[k] = 0.0;

    let solution = system.solve().unwrap();
    assert_eq!(solution.status, SolveStatus::ConsistentSingular);
    assert_eq!(solution.singular_equations, vec![k + 1]);
    assert_eq!(solution.values[k], 0.0);
    assert!(solution.values.iter().all(|v| v.is_finite()));
}

#[test]
fn test_zeroed_equation_with_load_is_inconsistent() {
    let mesh = uniform_mesh(11).unwrap();
    let p = problem(1);
    let mut system = assemble_system(&mesh, &BvpCoefficients::new(p.a, p.c, p.f)).unwrap();
    let k = 5;
    system.matrix.row_mut(k).fill(0.0);
    system.matrix.column_mut(k).fill(0.0);
    system.rhs[k] = 1.0;

    let solution = system.solve().unwrap();
    assert_eq!(solution.status, SolveStatus::InconsistentSingular);
    assert_eq!(solution.singular_equations, vec![k + 1]);
    assert_eq!(solution.values[k], 0.0);
}

#[test]
fn test_refinement_reduces_error_hundredfold() {
    for id in [2, 3, 4] {
        let p = problem(id);
        let coarse = p.solve(&uniform_mesh(11).unwrap()).unwrap();
        let fine = p.solve(&uniform_mesh(101).unwrap()).unwrap();
        let ratio = coarse.max_nodal_error(p.exact) / fine.max_nodal_error(p.exact);
        assert!((50.0..200.0).contains(&ratio), "problem {}: ratio {}", id, ratio);
    }
}

#[test]
fn test_convergence_study_on_refined_meshes() {
    let meshes = refinement_sequence(&uniform_mesh(11).unwrap(), 2).unwrap();
    let study = ConvergenceStudy::run_on_meshes(&problem(3), &meshes).unwrap();

    assert_eq!(study.problem_id, 3);
    assert_eq!(study.levels.len(), 3);
    let order = study.final_order().unwrap();
    assert!((1.8..2.2).contains(&order), "observed order {}", order);
}

#[test]
fn test_graded_mesh() {
    let mesh = mapped_mesh(21, |t| t * t).unwrap();
    let p = problem(4);
    let solution = p.solve(&mesh).unwrap();

    assert!(solution.status.is_ok());
    assert!(solution.max_nodal_error(p.exact) < 5e-3);
}

#[test]
fn test_quadratic_solution_is_nodally_exact() {
    // -u'' = 2 has the solution x(1-x), which linear elements reproduce at the nodes
    let mesh = mapped_mesh(9, |t| t * (1.0 + t) / 2.0).unwrap();
    let solution = solve_bvp(|_| 1.0, |_| 0.0, |_| 2.0, &mesh).unwrap();
    for (i, &x) in mesh.nodes().iter().enumerate() {
        assert_abs_diff_eq!(solution.values[i], x * (1.0 - x), epsilon = 1e-12);
    }
}

#[test]
fn test_interpolated_solution_between_nodes() {
    let mesh = uniform_mesh(101).unwrap();
    let p = problem(1);
    let solution = p.solve(&mesh).unwrap();
    for &x in &[0.123, 0.5, 0.777] {
        assert_abs_diff_eq!(solution.evaluate(x), exact_solution(x), epsilon = 2e-4);
    }
}

#[test]
fn test_configured_quadrature_order() {
    let config = DriverConfig::from_json(r#"{ "quadrature_order": 5, "refine": [11, 21] }"#).unwrap();
    config.validate().unwrap();
    let rule = config.quadrature_rule();
    let p = problem(1);
    let mesh = uniform_mesh(config.nodes).unwrap();

    let reference = p.solve(&mesh).unwrap();
    let accurate = p.solve_with_rule(&mesh, &rule).unwrap();
    assert!(accurate.max_nodal_error(p.exact) < 1e-12);
    assert!(accurate.max_nodal_error(p.exact) < reference.max_nodal_error(p.exact));

    let study = ConvergenceStudy::run_with_rule(&p, &config.refine, &rule).unwrap();
    assert!(study.levels.iter().all(|l| l.max_error < 1e-12));
}
