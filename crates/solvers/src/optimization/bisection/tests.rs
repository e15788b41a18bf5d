use std::cell::Cell;

use approx::assert_abs_diff_eq;

use crate::optimization::{ConfigError, Error, Status};

use super::{Action, Config, Event, minimize, minimize_unobserved};

fn shifted_parabola(center: f64) -> impl Fn(f64) -> f64 {
    move |x| (x - center).powi(2) + 2.0
}

#[test]
fn finds_minimum_of_parabola() {
    let f = shifted_parabola(3.0);

    let solution =
        minimize_unobserved(&f, [0.0, 10.0], &Config::default()).expect("should converge");

    assert_eq!(solution.status, Status::Converged);
    assert_abs_diff_eq!(solution.x, 3.0, epsilon = 1e-4);
    // 10 / 2^20 < 1e-5 <= 10 / 2^19
    assert_eq!(solution.iters, 20);
}

#[test]
fn tracks_off_center_minima() {
    for center in [0.5, 1.234, 7.9] {
        let f = shifted_parabola(center);

        let solution =
            minimize_unobserved(&f, [0.0, 10.0], &Config::default()).expect("should converge");

        assert_abs_diff_eq!(solution.x, center, epsilon = 1e-4);
    }
}

#[test]
fn result_stays_inside_bracket() {
    // Monotone objectives push the search against an endpoint.
    let increasing = |x: f64| x;
    let decreasing = |x: f64| -x;

    for f in [&increasing as &dyn Fn(f64) -> f64, &decreasing] {
        let solution =
            minimize_unobserved(&f, [-4.0, 4.0], &Config::default()).expect("should converge");

        assert!((-4.0..=4.0).contains(&solution.x), "x = {}", solution.x);
    }
}

#[test]
fn evaluates_two_fresh_probes_per_iteration() {
    let calls = Cell::new(0_usize);
    let f = |x: f64| {
        calls.set(calls.get() + 1);
        (x - 3.0).powi(2)
    };

    let solution =
        minimize_unobserved(&f, [0.0, 10.0], &Config::default()).expect("should converge");

    assert_eq!(calls.get(), 2 * solution.iters);
}

#[test]
fn halves_bracket_each_iteration() {
    let f = shifted_parabola(3.0);
    let mut widths = vec![10.0];
    let observer = |event: &Event| -> Option<Action> {
        widths.push(event.width());
        None
    };

    minimize(&f, [0.0, 10.0], &Config::default(), observer).expect("should converge");

    for pair in widths.windows(2) {
        assert_abs_diff_eq!(pair[1], pair[0] / 2.0, epsilon = 1e-12);
    }
}

#[test]
fn ties_discard_the_left_half() {
    // Equal probe values move `a` to the midpoint.
    let flat = |_: f64| 1.0;

    let mut first = None;
    let observer = |event: &Event| -> Option<Action> {
        first.get_or_insert(event.bracket);
        None
    };

    minimize(&flat, [0.0, 8.0], &Config::default(), observer).expect("should converge");

    assert_eq!(first, Some([4.0, 8.0]));
}

#[test]
fn observer_can_stop_early() {
    let f = shifted_parabola(3.0);
    let observer = |event: &Event| (event.iter >= 3).then_some(Action::StopEarly);

    let solution =
        minimize(&f, [0.0, 10.0], &Config::default(), observer).expect("should stop cleanly");

    assert_eq!(solution.status, Status::StoppedByObserver);
    assert_eq!(solution.iters, 3);
    // [0, 10] -> [0, 5] -> [2.5, 5] -> [2.5, 3.75]
    assert_abs_diff_eq!(solution.x, 3.125, epsilon = 1e-12);
}

#[test]
fn iteration_cap_reports_max_iters() {
    let f = shifted_parabola(3.0);
    let config = Config::new(5, 1e-5).expect("valid config");

    let solution = minimize_unobserved(&f, [0.0, 10.0], &config).expect("should stop at cap");

    assert_eq!(solution.status, Status::MaxIters);
    assert_eq!(solution.iters, 5);
}

#[test]
fn wide_tolerance_returns_midpoint_without_evaluating() {
    let calls = Cell::new(0_usize);
    let f = |x: f64| {
        calls.set(calls.get() + 1);
        x * x
    };
    let config = Config::new(10, 20.0).expect("valid config");

    let solution = minimize_unobserved(&f, [0.0, 10.0], &config).expect("should converge");

    assert_eq!(solution.status, Status::Converged);
    assert_eq!(solution.iters, 0);
    assert_abs_diff_eq!(solution.x, 5.0);
    assert_eq!(calls.get(), 0);
}

#[test]
fn rejects_non_positive_tolerance() {
    assert_eq!(
        Config::new(10, 0.0),
        Err(ConfigError::NonPositiveTolerance { epsilon: 0.0 })
    );
    assert!(Config::new(10, -1e-3).is_err());
}

#[test]
fn rejects_invalid_interval() {
    let f = shifted_parabola(3.0);

    let result = minimize_unobserved(&f, [10.0, 0.0], &Config::default());

    assert_eq!(result, Err(Error::InvalidInterval { a: 10.0, b: 0.0 }));
}
