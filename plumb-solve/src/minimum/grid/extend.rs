use plumb_core::{CancelPoll, Criterion};
use tracing::{debug, warn};

use super::{
    Config,
    bracket::{Bracket, Point},
    scan::Scan,
    solution::{Solution, Status},
};

/// Step-rate growth factor applied before each extension advance.
const STEP_GROWTH: f64 = 3.0;

/// Walks right past the grid until the criterion turns upward.
///
/// Entered when the best sample sits on the last grid point, meaning the
/// criterion was still decreasing at `high`. Each pass evaluates the
/// current right neighbor, shifts the bracket outward while it keeps
/// improving, and triples the step before advancing again.
pub(super) fn extend_right(
    criterion: &mut impl Criterion,
    poll: &mut impl CancelPoll,
    state: Scan,
    config: &Config,
) -> Solution {
    let mut bracket = state.bracket();
    let Scan {
        spacing,
        mut rate,
        mut evals,
        ..
    } = state;

    debug!("criterion still decreasing at the grid edge; extending above x = {}", bracket.best.x);

    for _ in 0..config.max_extensions() {
        if poll.is_cancelled() {
            return aborted(bracket, evals);
        }

        let sample = criterion.evaluate(bracket.right.x);
        evals += 1;
        bracket.right.y = sample.y;
        if sample.cancel {
            return aborted(bracket, evals);
        }

        if bracket.right.y > bracket.best.y {
            return finished(bracket, Status::Bracketed, evals);
        }
        if bracket.is_flat() {
            return finished(bracket, Status::Flat, evals);
        }

        bracket.left = bracket.best;
        bracket.best = bracket.right;
        rate *= STEP_GROWTH;
        bracket.right = Point::new(spacing.advance(bracket.best.x, rate), f64::NAN);
    }

    warn!(
        "gave up extending after {} evaluations; criterion still decreasing at x = {}",
        config.max_extensions(),
        bracket.best.x
    );

    finished(bracket, Status::ExtensionLimit, evals)
}

/// Walks left past the grid until the criterion turns upward.
///
/// Mirror of [`extend_right`], entered when the best sample sits on the
/// first grid point.
pub(super) fn extend_left(
    criterion: &mut impl Criterion,
    poll: &mut impl CancelPoll,
    state: Scan,
    config: &Config,
) -> Solution {
    let mut bracket = state.bracket();
    let Scan {
        spacing,
        mut rate,
        mut evals,
        ..
    } = state;

    debug!("criterion still decreasing at the grid edge; extending below x = {}", bracket.best.x);

    for _ in 0..config.max_extensions() {
        if poll.is_cancelled() {
            return aborted(bracket, evals);
        }

        let sample = criterion.evaluate(bracket.left.x);
        evals += 1;
        bracket.left.y = sample.y;
        if sample.cancel {
            return aborted(bracket, evals);
        }

        if bracket.left.y > bracket.best.y {
            return finished(bracket, Status::Bracketed, evals);
        }
        if bracket.is_flat() {
            return finished(bracket, Status::Flat, evals);
        }

        bracket.right = bracket.best;
        bracket.best = bracket.left;
        rate *= STEP_GROWTH;
        bracket.left = Point::new(spacing.retreat(bracket.best.x, rate), f64::NAN);
    }

    warn!(
        "gave up extending after {} evaluations; criterion still decreasing at x = {}",
        config.max_extensions(),
        bracket.best.x
    );

    finished(bracket, Status::ExtensionLimit, evals)
}

fn aborted(bracket: Bracket, evals: usize) -> Solution {
    Solution {
        bracket,
        status: Status::Incomplete,
        cancelled: true,
        evals,
    }
}

fn finished(bracket: Bracket, status: Status, evals: usize) -> Solution {
    Solution {
        bracket,
        status,
        cancelled: false,
        evals,
    }
}
