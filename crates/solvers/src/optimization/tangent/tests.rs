use approx::assert_abs_diff_eq;

use crate::optimization::{Error, Status};

use super::{Action, Config, Event, minimize, minimize_unobserved};

#[test]
fn converges_on_shifted_parabola() {
    let f = |x: f64| (x - 3.0).powi(2) + 2.0;

    let solution =
        minimize_unobserved(&f, [0.0, 10.0], &Config::default()).expect("should converge");

    assert_eq!(solution.status, Status::Converged);
    assert!(solution.iters < Config::default().max_iters());
    assert_abs_diff_eq!(solution.x, 3.0, epsilon = 1e-5);
}

#[test]
fn starts_at_midpoint() {
    // The derivative of (x - 5)² vanishes exactly at the midpoint of [0, 10].
    let f = |x: f64| (x - 5.0).powi(2);

    let solution =
        minimize_unobserved(&f, [0.0, 10.0], &Config::default()).expect("should converge");

    assert_eq!(solution.status, Status::Converged);
    assert_eq!(solution.iters, 0);
    assert_abs_diff_eq!(solution.x, 5.0);
}

#[test]
fn converges_from_off_center_start() {
    let f = |x: f64| (x - 5.0).powi(2);

    let solution =
        minimize_unobserved(&f, [0.0, 16.0], &Config::default()).expect("should converge");

    assert_eq!(solution.status, Status::Converged);
    assert!(solution.iters < 1000);
    assert_abs_diff_eq!(solution.x, 5.0, epsilon = 1e-5);
}

#[test]
fn descent_contracts_toward_minimum() {
    // With step 0.1 on (x - 3)², each step scales the error by 0.8.
    let f = |x: f64| (x - 3.0).powi(2);
    let mut positions = Vec::new();
    let observer = |event: &Event| -> Option<Action> {
        positions.push(event.x);
        None
    };

    minimize(&f, [0.0, 10.0], &Config::default(), observer).expect("should converge");

    assert_abs_diff_eq!(positions[0], 3.0 + 2.0 * 0.8, epsilon = 1e-6);
    assert_abs_diff_eq!(positions[1], 3.0 + 2.0 * 0.64, epsilon = 1e-6);
}

#[test]
fn minimum_beyond_right_end_is_clamped() {
    let f = |x: f64| (x - 20.0).powi(2);

    let mut clamps = 0;
    let observer = |event: &Event| -> Option<Action> {
        if event.clamped {
            clamps += 1;
        }
        None
    };

    let solution = minimize(&f, [0.0, 10.0], &Config::default(), observer)
        .expect("should stop at the iteration cap");

    assert_eq!(solution.status, Status::MaxIters);
    assert_eq!(solution.iters, 1000);
    assert!(!solution.is_converged());
    assert_abs_diff_eq!(solution.x, 10.0 - 1e-5, epsilon = 1e-12);
    assert!(clamps > 0);
}

#[test]
fn minimum_beyond_left_end_is_clamped() {
    let f = |x: f64| (x + 20.0).powi(2);

    let solution =
        minimize_unobserved(&f, [0.0, 10.0], &Config::default()).expect("should stop at cap");

    assert_eq!(solution.status, Status::MaxIters);
    assert_abs_diff_eq!(solution.x, 1e-5, epsilon = 1e-12);
}

#[test]
fn clamp_is_not_rechecked_within_an_iteration() {
    // A steep objective overshoots past `a` on the first step. The clamped
    // position is reported as-is and only checked at the next iteration.
    let f = |x: f64| 100.0 * (x - 3.0).powi(2);
    let mut first = None;
    let observer = |event: &Event| -> Option<Action> {
        first.get_or_insert(*event);
        None
    };
    let config = Config::new(5, 1e-5).expect("valid config");

    let solution = minimize(&f, [0.0, 10.0], &config, observer).expect("should stop");

    let first = first.expect("at least one step");
    assert!(first.clamped);
    assert_abs_diff_eq!(first.x, 1e-5, epsilon = 1e-12);
    assert_eq!(solution.status, Status::MaxIters);
}

#[test]
fn last_step_onto_the_minimum_counts_as_converged() {
    // One step from x = 5 with derivative 10 lands on the vertex at 4.
    let f = |x: f64| 5.0 * (x - 4.0).powi(2);
    let config = Config::new(1, 1e-5).expect("valid config");

    let solution = minimize_unobserved(&f, [0.0, 10.0], &config).expect("should converge");

    assert_eq!(solution.status, Status::Converged);
    assert_eq!(solution.iters, 1);
    assert_abs_diff_eq!(solution.x, 4.0, epsilon = 1e-9);
}

#[test]
fn zero_max_iters_returns_midpoint() {
    let f = |x: f64| (x - 3.0).powi(2);
    let config = Config::new(0, 1e-5).expect("valid config");

    let solution = minimize_unobserved(&f, [0.0, 10.0], &config).expect("should return");

    assert_eq!(solution.status, Status::MaxIters);
    assert_eq!(solution.iters, 0);
    assert_abs_diff_eq!(solution.x, 5.0);
}

#[test]
fn observer_can_stop_early() {
    let f = |x: f64| (x - 3.0).powi(2);
    let observer = |event: &Event| (event.iter == 2).then_some(Action::StopEarly);

    let solution = minimize(&f, [0.0, 10.0], &Config::default(), observer)
        .expect("should stop cleanly");

    assert_eq!(solution.status, Status::StoppedByObserver);
    assert_eq!(solution.iters, 2);
    assert_abs_diff_eq!(solution.x, 3.0 + 2.0 * 0.64, epsilon = 1e-6);
}

#[test]
fn rejects_invalid_interval() {
    let f = |x: f64| x * x;

    let result = minimize_unobserved(&f, [1.0, f64::NAN], &Config::default());

    assert!(matches!(result, Err(Error::InvalidInterval { .. })));
}
