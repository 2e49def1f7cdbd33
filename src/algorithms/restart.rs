//! Restart selection: run a randomized procedure several times and keep the
//! best outcome.

use std::cmp::Ordering;

/// Runs `trial` `trial_count` times and returns the index and outcome of the
/// smallest outcome according to `cmp`.
///
/// When several outcomes compare equal, the first one is kept. Returns `None`
/// when `trial_count` is zero.
///
/// # Example
///
/// ```rust
/// let outcomes = [4, 1, 3, 1];
/// let best = scatter::best_of(outcomes.len(), |i| outcomes[i], |a, b| a.cmp(b));
/// assert_eq!(best, Some((1, 1)));
/// ```
pub fn best_of<T, F, C>(trial_count: usize, mut trial: F, mut cmp: C) -> Option<(usize, T)>
where
    F: FnMut(usize) -> T,
    C: FnMut(&T, &T) -> Ordering,
{
    let mut best: Option<(usize, T)> = None;
    for i in 0..trial_count {
        let outcome = trial(i);
        let is_better = match &best {
            Some((_, incumbent)) => cmp(&outcome, incumbent) == Ordering::Less,
            None => true,
        };
        if is_better {
            best = Some((i, outcome));
        }
    }
    best
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_best_of_picks_minimum() {
        let scores = [0.5, 0.2, 0.9, 0.3];
        let best = best_of(scores.len(), |i| scores[i], f64::total_cmp);
        assert_eq!(best, Some((1, 0.2)));
    }

    #[test]
    fn test_best_of_keeps_first_tie() {
        let outcomes = [(3, 'a'), (1, 'b'), (1, 'c'), (2, 'd')];
        let best = best_of(outcomes.len(), |i| outcomes[i], |a, b| a.0.cmp(&b.0));
        assert_eq!(best, Some((1, (1, 'b'))));
    }

    #[test]
    fn test_best_of_no_trial() {
        let mut calls = 0;
        let best = best_of(0, |_| calls += 1, |_, _| Ordering::Equal);
        assert_eq!(best, None);
        assert_eq!(calls, 0);
    }

    #[test]
    fn test_best_of_runs_every_trial() {
        let mut calls = Vec::new();
        best_of(
            10,
            |i| {
                calls.push(i);
                i
            },
            |a, b| b.cmp(a),
        );
        assert_eq!(calls, (0..10).collect::<Vec<_>>());
    }
}
