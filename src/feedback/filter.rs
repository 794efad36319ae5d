use crate::code::Code;
use crate::error::Result;
use crate::feedback::{evaluate, Feedback};
use std::fmt::Debug;
use std::hash::Hash;
use tracing::{debug, trace};

// A guess someone has made with the feedback it received.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Observation<T> {
    pub guess: Code<T>,
    pub feedback: Feedback,
}

impl<T> Observation<T> {
    pub fn new(guess: Code<T>, feedback: Feedback) -> Self {
        Self { guess, feedback }
    }
}

/// Whether `candidate`, were it the secret, would have answered `guess` with `target`.
pub fn is_consistent<T: Clone + Hash + Eq>(
    target: Feedback,
    guess: &Code<T>,
    candidate: &Code<T>,
) -> Result<bool> {
    Ok(evaluate(guess, candidate)? == target)
}

/// Keeps the candidates consistent with `target` for `guess`, in their original order. Duplicates
/// in `universe` are kept.
pub fn filter_candidates<T: Clone + Hash + Eq + Debug>(
    target: Feedback,
    guess: &Code<T>,
    universe: &[Code<T>],
) -> Result<Vec<Code<T>>> {
    let mut survivors = Vec::new();
    for candidate in universe {
        if is_consistent(target, guess, candidate)? {
            survivors.push(candidate.clone());
        } else {
            trace!(feedback = %target, candidate = ?candidate, "candidate rejected");
        }
    }
    debug!(
        guess = ?guess,
        feedback = %target,
        universe = universe.len(),
        survivors = survivors.len(),
        "filtered candidates"
    );
    Ok(survivors)
}

/// Same output as [`filter_candidates`], with candidates checked on the rayon pool.
#[cfg(feature = "parallel")]
pub fn par_filter_candidates<T>(
    target: Feedback,
    guess: &Code<T>,
    universe: &[Code<T>],
) -> Result<Vec<Code<T>>>
where
    T: Clone + Hash + Eq + Debug + Send + Sync,
{
    use rayon::prelude::*;

    // Indexed collect keeps input order.
    let kept: Vec<Option<Code<T>>> = universe
        .par_iter()
        .map(|candidate| {
            is_consistent(target, guess, candidate)
                .map(|consistent| consistent.then(|| candidate.clone()))
        })
        .collect::<Result<_>>()?;
    let survivors: Vec<Code<T>> = kept.into_iter().flatten().collect();
    debug!(
        guess = ?guess,
        feedback = %target,
        universe = universe.len(),
        survivors = survivors.len(),
        "filtered candidates in parallel"
    );
    Ok(survivors)
}

/// Narrows `universe` by every observation in turn.
pub fn filter_by_observations<T: Clone + Hash + Eq + Debug>(
    observations: &[Observation<T>],
    universe: &[Code<T>],
) -> Result<Vec<Code<T>>> {
    let mut remaining = universe.to_vec();
    for observation in observations {
        remaining = filter_candidates(observation.feedback, &observation.guess, &remaining)?;
    }
    Ok(remaining)
}
