//! tests for the false position root finding algorithm
use approx::assert_abs_diff_eq;
use fxroot::{bisection, false_position, Algorithm, RootFindingError, SolverCfg, ToleranceSatisfied};

type TestResult = Result<(), Box<dyn std::error::Error>>;

#[test]
fn linear_root_in_one_interpolation() -> TestResult {
    let f   = |x: f64| x - 2.0;
    let res = false_position(&f, 1.0, 2.0, SolverCfg::default())?;

    assert_eq!(res.into_pair(), (2.0, 0));
    assert_eq!(res.tolerance_satisfied, ToleranceSatisfied::AbsFxReached);
    assert_eq!(res.algorithm, Algorithm::FALSE_POSITION);
    Ok(())
}

#[test]
fn finds_3() -> TestResult {
    let f   = |x: f64| 2.0 * x - 6.0;
    let res = false_position(&f, 0.0, 10.0, SolverCfg::default())?;

    assert_eq!(res.into_pair(), (3.0, 0));
    Ok(())
}

#[test]
fn finds_sqrt_3() -> TestResult {
    let f   = |x: f64| x * x - 3.0;
    let res = false_position(&f, 1.0, 2.0, SolverCfg::default())?;

    assert!(f(res.root).abs() <= 1e-5);
    assert_abs_diff_eq!(res.root, 3.0_f64.sqrt(), epsilon = 1e-5);
    Ok(())
}

#[test]
fn no_sign_change() {
    let f   = |x: f64| x * x + 1.0;
    let err = false_position(&f, -1.0, 1.0, SolverCfg::default()).unwrap_err();

    assert!(matches!(err, RootFindingError::InvalidBracket { a, b, .. } if a == -1.0 && b == 1.0));
}

#[test]
fn flat_chord() {
    // both ends are roots: the bracket is accepted but the chord has no slope
    let f   = |x: f64| x * (x - 1.0);
    let err = false_position(&f, 0.0, 1.0, SolverCfg::default()).unwrap_err();

    assert!(matches!(
        err,
        RootFindingError::ZeroDenominator { algorithm: Algorithm::FALSE_POSITION, iteration: 0, .. }
    ));
}

#[test]
fn budget_exhausted() -> TestResult {
    let f   = |x: f64| (-x).exp() - x;
    let cfg = SolverCfg::new().set_max_iter(1)?;
    let err = false_position(&f, 0.0, 1.0, cfg).unwrap_err();

    assert!(matches!(
        err,
        RootFindingError::MaxIterationsExceeded { algorithm: Algorithm::FALSE_POSITION, max_iter: 1 }
    ));
    Ok(())
}

#[test]
fn one_sided_stall_where_bisection_does_not() -> TestResult {
    // the right end stays fixed, so the left end creeps towards the root
    let f   = |x: f64| x.powi(10) - 1.0;
    let cfg = SolverCfg::new().set_max_iter(10)?;

    assert!(matches!(
        false_position(&f, 0.0, 1.3, cfg),
        Err(RootFindingError::MaxIterationsExceeded { max_iter: 10, .. })
    ));

    let res = bisection(&f, 0.0, 1.3, SolverCfg::default())?;
    assert_abs_diff_eq!(res.root, 1.0, epsilon = 1e-5);

    let res = false_position(&f, 0.0, 1.3, SolverCfg::default())?;
    assert!(res.iterations > 10);
    assert!(f(res.root).abs() <= 1e-5);
    Ok(())
}

#[test]
fn non_finite_eval() {
    let f   = |x: f64| 1.0 / x;
    let err = false_position(&f, 0.0, 1.0, SolverCfg::default()).unwrap_err();

    assert!(matches!(err, RootFindingError::Evaluation(e) if e.x() == 0.0));
}
