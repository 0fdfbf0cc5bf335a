//! Per-digit driver: the integer pass, then the rational pass bounded
//! by the integer result.

use log::info;
use rayon::prelude::*;
use serde::Serialize;
use thiserror::Error;

use crate::number::{Entry, Exact, Fraction};
use crate::search::Dictionary;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum SolveError {
    #[error("digit must be between 1 and 9, got {0}")]
    InvalidDigit(u8),
    #[error("target must be a positive integer")]
    ZeroTarget,
}

/// One solved domain: the score and the breadth-first transcript of the
/// expression graph rooted at the target.
#[derive(Debug, Clone, Serialize)]
pub struct Witness {
    pub level: usize,
    pub lines: Vec<String>,
}

/// The result of both passes for one (target, digit) pair. `rational`
/// is present when the fraction search tied or beat the integer score;
/// with its richer operator set that is the common case.
#[derive(Debug, Clone, Serialize)]
pub struct Solution {
    pub target: u64,
    pub digit: u8,
    pub integer: Witness,
    pub rational: Option<Witness>,
}

/// Breakdown lines for `root`: one `<value> = <expression>` per
/// reachable node, repunit leaves omitted.
pub fn breakdown_lines<N: Exact>(dictionary: &Dictionary<N>, root: N) -> Vec<String> {
    dictionary
        .bfs(root)
        .filter(|(_, step)| !step.is_leaf())
        .map(|(key, step)| format!("{} = {}", key, step))
        .collect()
}

/// Searches both domains for `target` written with `digit` alone.
pub fn solve_digit(target: u64, digit: u8) -> Result<Solution, SolveError> {
    if target == 0 {
        return Err(SolveError::ZeroTarget);
    }
    if !(1..=9).contains(&digit) {
        return Err(SolveError::InvalidDigit(digit));
    }

    let mut integers = Dictionary::<Entry>::new(digit);
    let key = Entry::from(target);
    integers.build(key, None);
    info!(
        "{}#{}: integer search finished at level {}",
        target,
        digit,
        integers.level()
    );
    let integer = Witness {
        level: integers.level(),
        lines: breakdown_lines(&integers, key),
    };

    let mut rationals = Dictionary::<Fraction>::new(digit);
    let key = Fraction::from(target);
    let rational = rationals.build(key, Some(integer.level)).then(|| {
        info!(
            "{}#{}: rational search hit at level {}",
            target,
            digit,
            rationals.level()
        );
        Witness {
            level: rationals.level(),
            lines: breakdown_lines(&rationals, key),
        }
    });

    Ok(Solution {
        target,
        digit,
        integer,
        rational,
    })
}

/// Runs the nine digit strains in parallel. Dictionaries share no
/// state, so the strains are independent.
pub fn solve_all(target: u64) -> Result<Vec<Solution>, SolveError> {
    (1..=9u8)
        .into_par_iter()
        .map(|digit| solve_digit(target, digit))
        .collect()
}
