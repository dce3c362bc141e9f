//! tests for the secant root-finding algorithm
use approx::assert_abs_diff_eq;
use fxroot::{secant, Algorithm, RootFindingError, SolverCfg, ToleranceSatisfied};

type TestResult = Result<(), Box<dyn std::error::Error>>;

#[test]
fn finds_sqrt_2() -> TestResult {
    let f   = |x: f64| x * x - 2.0;
    let res = secant(&f, 1.0, 2.0, SolverCfg::default())?;

    assert_abs_diff_eq!(res.root, 2.0_f64.sqrt(), epsilon = 1e-5);
    assert_eq!(res.tolerance_satisfied, ToleranceSatisfied::StepSizeReached);
    assert_eq!(res.algorithm, Algorithm::SECANT);
    assert!(res.iterations > 0);
    Ok(())
}

#[test]
fn finds_3() -> TestResult {
    // exact after one step, the second step confirms it
    let f   = |x: f64| 2.0 * x - 6.0;
    let res = secant(&f, 0.0, 10.0, SolverCfg::default())?;

    assert_eq!(res.into_pair(), (3.0, 2));
    Ok(())
}

#[test]
fn symmetric_guesses_are_degenerate() {
    let f   = |x: f64| x * x - 4.0;
    let err = secant(&f, 2.0, -2.0, SolverCfg::default()).unwrap_err();

    assert!(matches!(
        err,
        RootFindingError::DegenerateGuesses { x0, x1, fx } if x0 == 2.0 && x1 == -2.0 && fx == 0.0
    ));
    assert!(err.to_string().contains("causing division by zero"));
}

#[test]
fn equal_guesses_are_degenerate() {
    let f = |x: f64| x * x - 2.0;
    assert!(matches!(
        secant(&f, 3.0, 3.0, SolverCfg::default()),
        Err(RootFindingError::DegenerateGuesses { .. })
    ));
}

#[test]
fn flat_secant_mid_run() {
    // 0, 1 -> -1, and f(1) == f(-1)
    let f   = |x: f64| x * x + 1.0;
    let err = secant(&f, 0.0, 1.0, SolverCfg::default()).unwrap_err();

    assert!(matches!(
        err,
        RootFindingError::ZeroDenominator { algorithm: Algorithm::SECANT, x, iteration: 1 } if x == -1.0
    ));
}

#[test]
fn budget_exhausted() -> TestResult {
    let f   = |x: f64| x * x - 2.0;
    let cfg = SolverCfg::new().set_max_iter(2)?;

    assert!(matches!(
        secant(&f, 1.0, 2.0, cfg),
        Err(RootFindingError::MaxIterationsExceeded { algorithm: Algorithm::SECANT, max_iter: 2 })
    ));
    Ok(())
}

#[test]
fn close_guesses_return_immediately() -> TestResult {
    // only the step size is tested, so x1 comes back even though f(x1) != 0
    let f   = |x: f64| x * x - 2.0;
    let res = secant(&f, 1.0, 1.000001, SolverCfg::default())?;

    assert_eq!(res.into_pair(), (1.000001, 0));
    Ok(())
}

#[test]
fn overflowing_step_diverges() {
    let f   = |x: f64| x;
    let err = secant(&f, -1e308, 1e308, SolverCfg::default()).unwrap_err();

    assert!(matches!(err, RootFindingError::Diverged { iteration: 1, x, .. } if x.is_nan()));
}

#[test]
fn non_finite_eval() {
    let f   = |x: f64| x.ln();
    let err = secant(&f, -1.0, 2.0, SolverCfg::default()).unwrap_err();

    assert!(matches!(err, RootFindingError::Evaluation(e) if e.x() == -1.0));
}
