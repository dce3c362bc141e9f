use fxroot::{
    bisection, false_position, modified_newton, newton, secant, RootFindingError, SolverCfg,
};
use proptest::prelude::*;

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn bracket_without_sign_change_is_rejected(
        c in 0.1f64..100.0,
        a in -100.0f64..100.0,
        width in 0.1f64..50.0,
    ) {
        let f = move |x: f64| x * x + c;
        let b = a + width;

        let bisect = bisection(&f, a, b, SolverCfg::default());
        let rejected = matches!(bisect, Err(RootFindingError::InvalidBracket { .. }));
        prop_assert!(rejected, "{:?}", bisect);

        let chord = false_position(&f, a, b, SolverCfg::default());
        let rejected = matches!(chord, Err(RootFindingError::InvalidBracket { .. }));
        prop_assert!(rejected, "{:?}", chord);
    }

    #[test]
    fn bisection_lands_within_tolerance(
        r in -100.0f64..100.0,
        left in 0.1f64..10.0,
        right in 0.1f64..10.0,
    ) {
        let f   = move |x: f64| x - r;
        let cfg = SolverCfg::default();

        let res = bisection(&f, r - left, r + right, cfg);
        prop_assert!(res.is_ok(), "{:?}", res);
        if let Ok(res) = res {
            prop_assert!((res.root - r).abs() <= 2.0 * cfg.tol());
            prop_assert!(res.iterations < cfg.max_iter());
        }
    }

    #[test]
    fn false_position_meets_residual(c in 0.5f64..100.0) {
        let f   = move |x: f64| x * x - c;
        let cfg = SolverCfg::default();
        let b   = 2.0 * c.sqrt();

        let first = false_position(&f, 0.0, b, cfg);
        prop_assert!(first.is_ok(), "{:?}", first);
        if let Ok(first) = first {
            prop_assert!(f(first.root).abs() <= cfg.tol());
            prop_assert!(first.iterations < cfg.max_iter());

            let second = false_position(&f, 0.0, b, cfg);
            prop_assert_eq!(second.ok(), Some(first));
        }
    }

    #[test]
    fn newton_square_roots(c in 0.5f64..100.0) {
        let f   = move |x: f64| x * x - c;
        let df  = |x: f64| 2.0 * x;
        let cfg = SolverCfg::default();

        let first = newton(&f, &df, c + 1.0, cfg);
        prop_assert!(first.is_ok(), "{:?}", first);
        if let Ok(first) = first {
            prop_assert!(f(first.root).abs() <= cfg.tol());
            prop_assert!(first.iterations < cfg.max_iter());

            let second = newton(&f, &df, c + 1.0, cfg);
            prop_assert_eq!(second.ok(), Some(first));
        }
    }

    #[test]
    fn modified_newton_square_roots(c in 0.5f64..100.0) {
        let f   = move |x: f64| x * x - c;
        let df  = |x: f64| 2.0 * x;
        let ddf = |_x: f64| 2.0;
        let cfg = SolverCfg::default();

        let first = modified_newton(&f, &df, &ddf, c + 1.0, cfg);
        prop_assert!(first.is_ok(), "{:?}", first);
        if let Ok(first) = first {
            prop_assert!(f(first.root).abs() < cfg.tol());
            prop_assert!(first.iterations < cfg.max_iter());

            let second = modified_newton(&f, &df, &ddf, c + 1.0, cfg);
            prop_assert_eq!(second.ok(), Some(first));
        }
    }

    #[test]
    fn secant_settles_near_root(c in 0.5f64..100.0) {
        // converged steps are superlinear, so the last step bounds the error
        let f   = move |x: f64| x * x - c;
        let cfg = SolverCfg::default();

        let first = secant(&f, c, c + 1.0, cfg);
        prop_assert!(first.is_ok(), "{:?}", first);
        if let Ok(first) = first {
            prop_assert!((first.root - c.sqrt()).abs() <= cfg.tol());
            prop_assert!(first.iterations < cfg.max_iter());

            let second = secant(&f, c, c + 1.0, cfg);
            prop_assert_eq!(second.ok(), Some(first));
        }
    }

    #[test]
    fn newton_rejects_stationary_guess(r in -100.0f64..100.0) {
        let f  = move |x: f64| (x - r) * (x - r) - 1.0;
        let df = move |x: f64| 2.0 * (x - r);

        let res = newton(&f, &df, r, SolverCfg::default());
        let rejected = matches!(res, Err(RootFindingError::ZeroDerivative { x0 }) if x0 == r);
        prop_assert!(rejected, "{:?}", res);
    }

    #[test]
    fn secant_rejects_mirrored_guesses(k in 0.1f64..100.0, d in 0.1f64..50.0) {
        let f = move |x: f64| x * x - k;

        let res = secant(&f, d, -d, SolverCfg::default());
        let rejected = matches!(res, Err(RootFindingError::DegenerateGuesses { .. }));
        prop_assert!(rejected, "{:?}", res);
    }

    #[test]
    fn bisection_runs_are_repeatable(c in 1.0f64..50.0) {
        let f = move |x: f64| x.powi(3) - c;
        let hi = c + 1.0;

        let first  = bisection(&f, 0.0, hi, SolverCfg::default());
        let second = bisection(&f, 0.0, hi, SolverCfg::default());
        prop_assert!(first.is_ok(), "{:?}", first);
        if let (Ok(first), Ok(second)) = (first, second) {
            prop_assert_eq!(first, second);
        }
    }
}
