use unimin_core::{Objective, Observer, Point};

use crate::optimization::{Action, Interval, Solution, Status};

use super::{Config, Event, bracket::GoldenBracket};

/// Core golden section search loop.
///
/// Expects a validated interval. Each iteration reuses one interior point and
/// evaluates exactly one new one.
pub(super) fn search<F, Obs>(
    objective: &F,
    interval: Interval,
    config: &Config,
    mut observer: Obs,
) -> Solution
where
    F: Objective,
    Obs: Observer<Event, Action>,
{
    let mut bracket = GoldenBracket::new(interval);
    let mut left = evaluate(objective, bracket.inner_left);
    let mut right = evaluate(objective, bracket.inner_right);

    let mut iters = 0;
    let status = loop {
        if bracket.width() <= config.epsilon() {
            break Status::Converged;
        }
        if iters == config.max_iters() {
            break Status::MaxIters;
        }
        iters += 1;

        let (point, other) = if left.objective < right.objective {
            // Left is better → shrink right
            bracket.shrink_right();
            right = left;
            left = evaluate(objective, bracket.inner_left);
            (left, right)
        } else {
            // Right is better (or tied) → shrink left
            bracket.shrink_left();
            left = right;
            right = evaluate(objective, bracket.inner_right);
            (right, left)
        };
        tracing::trace!(iter = iters, width = bracket.width(), "golden section step");

        let event = Event {
            iter: iters,
            bracket: bracket.as_array(),
            point,
            other,
        };
        if let Some(Action::StopEarly) = observer.observe(&event) {
            break Status::StoppedByObserver;
        }
    };

    Solution::finish("golden_section", status, bracket.midpoint(), iters)
}

fn evaluate<F: Objective>(objective: &F, x: f64) -> Point {
    Point::new(x, objective.value(x))
}
