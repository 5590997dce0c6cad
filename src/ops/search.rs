//! Step-doubling search over a real position.
//!
//! The step doubles until the probe first reports a change of direction, then halves on
//! every move, so the position settles on the crossing point of a monotonic probe.

use crate::defs::Error;
use log::debug;

/// Position of a probed candidate relative to the target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Probe {
    /// The candidate overshoots: the position must decrease.
    Above,

    /// The candidate undershoots: the position must increase.
    Below,

    /// The candidate hits the target.
    Exact,

    /// The target lies outside the searchable domain.
    Outside,
}

/// Searches for the position where `probe` switches from `Below` to `Above`.
///
/// Returns `None` if `probe` reports `Outside`. An `Exact` probe ends the search at once.
/// The search also stops when the step vanishes or no longer moves the position.
pub(crate) fn step_search<F>(
    start: f64,
    initial_step: f64,
    iterations: usize,
    mut probe: F,
) -> Result<Option<f64>, Error>
where
    F: FnMut(f64) -> Result<Probe, Error>,
{
    let mut pos = start;
    let mut step = initial_step;
    let mut prev: Option<bool> = None;
    let mut changed = false;

    for _ in 1..iterations {
        let rose = match probe(pos)? {
            Probe::Exact => return Ok(Some(pos)),
            Probe::Outside => return Ok(None),
            Probe::Above => true,
            Probe::Below => false,
        };

        changed |= matches!(prev, Some(p) if p != rose);
        prev = Some(rose);

        if changed {
            step /= 2.0;
        } else {
            step *= 2.0;
        }
        step = if rose { -step.abs() } else { step.abs() };

        let next = pos + step;
        if step == 0.0 || next == pos {
            return Ok(Some(pos));
        }
        pos = next;
    }

    debug!("step search: iteration cap {} reached at {}", iterations, pos);
    Ok(Some(pos))
}

#[cfg(test)]
mod tests {

    use super::*;
    use rand::random;

    #[test]
    fn test_step_search() {
        // exact hit ends the search
        let mut calls = 0;
        let r = step_search(2.0, 0.5, 100, |p| {
            calls += 1;
            Ok(if p == 2.0 { Probe::Exact } else { Probe::Below })
        })
        .unwrap();
        assert_eq!(r, Some(2.0));
        assert_eq!(calls, 1);

        // leaving the domain
        let r = step_search(0.0, 1.0, 100, |p| Ok(if p > 10.0 { Probe::Outside } else { Probe::Below })).unwrap();
        assert_eq!(r, None);

        // errors propagate
        let r = step_search(0.0, 1.0, 100, |_| Err(Error::LambertWNoConvergence));
        assert_eq!(r.unwrap_err(), Error::LambertWNoConvergence);

        // crossing points of monotonic probes
        for _ in 0..1000 {
            let target = random::<f64>() * 200.0 - 100.0;
            let r = step_search(0.0, 0.001, 200, |p| {
                Ok(if p.powi(3) > target.powi(3) { Probe::Above } else { Probe::Below })
            })
            .unwrap()
            .unwrap();
            assert!((r - target).abs() < 1e-9, "{} {}", r, target);
        }
    }
}
