use log::debug;
use rustc_hash::FxHashMap;

use crate::number::Exact;

use super::walk::{Order, Walk};
use super::Step;

/// The level-indexed closure over one (digit, domain) pair.
///
/// Level k holds every value first expressible with exactly k copies of
/// the digit. `grow` extends the closure by one level; because levels
/// are visited in ascending order and insertion never overwrites, the
/// level at which a value first appears is the minimum score of any
/// expression for it under the supported operators.
pub struct Dictionary<N: Exact> {
    graph: FxHashMap<N, Step<N>>,
    hierarchy: Vec<Vec<N>>,
    digit: u8,
}

impl<N: Exact> Dictionary<N> {
    /// A dictionary for `digit` (1..=9), with the domain's default map
    /// capacity.
    pub fn new(digit: u8) -> Self {
        Self::with_capacity(digit, N::MAP_CAPACITY)
    }

    pub fn with_capacity(digit: u8, capacity: usize) -> Self {
        Dictionary {
            graph: FxHashMap::with_capacity_and_hasher(capacity, Default::default()),
            hierarchy: Vec::new(),
            digit,
        }
    }

    pub fn digit(&self) -> u8 {
        self.digit
    }

    /// Number of levels grown so far.
    pub fn level(&self) -> usize {
        self.hierarchy.len()
    }

    pub fn len(&self) -> usize {
        self.graph.len()
    }

    pub fn is_empty(&self) -> bool {
        self.graph.is_empty()
    }

    pub fn contains(&self, key: &N) -> bool {
        self.graph.contains_key(key)
    }

    pub fn get(&self, key: &N) -> Option<&Step<N>> {
        self.graph.get(key)
    }

    /// Keys first discovered at 1-based `level`, in insertion order.
    pub fn level_keys(&self, level: usize) -> &[N] {
        level
            .checked_sub(1)
            .and_then(|index| self.hierarchy.get(index))
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Grows levels until `target` is recorded or `limit` levels exist.
    /// With `limit = None` the search is unbounded. Containment is
    /// checked after every `grow`, so a target first discovered at
    /// exactly `limit` levels still counts as a hit; the limit only
    /// gates further growth.
    pub fn build(&mut self, target: N, limit: Option<usize>) -> bool {
        loop {
            if self.graph.contains_key(&target) {
                return true;
            }
            if limit.is_some_and(|limit| self.hierarchy.len() >= limit) {
                return false;
            }
            self.grow();
        }
    }

    /// Adds the next level: the repunit of that length, every binary
    /// combination of lower levels whose scores sum to it, the
    /// factorial-neighbour rule, and the factorial closure over the
    /// fresh values.
    pub fn grow(&mut self) {
        self.hierarchy.push(Vec::new());
        let level = self.hierarchy.len();

        let repunit = N::repunit(level, self.digit);
        self.sqrt_closure(repunit, Step::Repunit(repunit));

        for lower in (1..=level / 2).rev() {
            let upper = level - lower;
            for x_index in 0..self.hierarchy[lower - 1].len() {
                let x = self.hierarchy[lower - 1][x_index];
                for y_index in 0..self.hierarchy[upper - 1].len() {
                    let y = self.hierarchy[upper - 1][y_index];
                    self.combine(x, y);
                }
            }
        }

        if level >= 3 {
            self.factorial_neighbors(level);
        }
        self.factorial_closure();

        debug!(
            "digit {}: level {} done, {} values known",
            self.digit,
            level,
            self.graph.len()
        );
    }

    /// Breadth-first walk of the parent-pointer graph from `root`,
    /// visiting each subtree once.
    pub fn bfs(&self, root: N) -> Walk<'_, N> {
        Walk::new(self, root, Order::Breadth)
    }

    /// Depth-first variant of [`Dictionary::bfs`].
    pub fn dfs(&self, root: N) -> Walk<'_, N> {
        Walk::new(self, root, Order::Depth)
    }

    /// Records `key` unless it is a sentinel or already known. First
    /// write wins: rediscoveries at higher levels must not overwrite.
    fn record(&mut self, key: N, step: Step<N>) -> bool {
        if !key.truthy() || self.graph.contains_key(&key) {
            return false;
        }
        self.graph.insert(key, step);
        if let Some(bucket) = self.hierarchy.last_mut() {
            bucket.push(key);
        }
        true
    }

    /// Records `key` and every square-root iterate of it. Square roots
    /// cost no digits, so the iterates land on the same level.
    fn sqrt_closure(&mut self, mut key: N, mut step: Step<N>) {
        while self.record(key, step) {
            step = Step::Sqrt(key);
            key = key.sqrt();
        }
    }

    /// All binary compositions of `x` and `y`, both orders where the
    /// operator is not commutative.
    fn combine(&mut self, x: N, y: N) {
        self.sqrt_closure(x + y, Step::Add(x, y));
        self.sqrt_closure(x * y, Step::Mul(x, y));

        self.sqrt_closure(x - y, Step::Sub(x, y));
        self.sqrt_closure(y - x, Step::Sub(y, x));

        let quotient = x / y;
        self.sqrt_closure(quotient, Step::Div(x, y));
        match quotient.reciprocal() {
            Some(inverse) => self.sqrt_closure(inverse, Step::Div(y, x)),
            None => self.sqrt_closure(y / x, Step::Div(y, x)),
        }

        if let Some(exponent) = y.exponent() {
            if x.is_power_base() {
                self.power(x, y, exponent);
            }
        }
        if let Some(exponent) = x.exponent() {
            if y.is_power_base() {
                self.power(y, x, exponent);
            }
        }

        self.sqrt_closure(x.factorial_ratio(y), Step::FactorialRatio(x, y));
        self.sqrt_closure(y.factorial_ratio(x), Step::FactorialRatio(y, x));
    }

    /// The 2-adic power chain. With `exponent = odd << shift`, the
    /// values `base^odd, base^(2·odd), …, base^exponent` are successive
    /// squarings; each is the square root of the next, so each is
    /// recorded as the full power under the matching number of roots.
    /// On domains with inverses the reciprocal of every chain member is
    /// recorded too, which is where negative exponents come from.
    fn power(&mut self, base: N, exponent: N, exp: u64) {
        let shift = exp.trailing_zeros() as u8;
        let odd = exp >> shift;
        let mut value = base.pow(odd);

        // The odd part may itself have an integer square root that no
        // chain member covers.
        self.sqrt_closure(
            value.sqrt(),
            Step::Power {
                base,
                exponent,
                sqrts: shift + 1,
                reciprocal: false,
            },
        );

        let mut away = shift;
        loop {
            self.record(
                value,
                Step::Power {
                    base,
                    exponent,
                    sqrts: away,
                    reciprocal: false,
                },
            );
            if let Some(inverse) = value.reciprocal() {
                self.record(
                    inverse,
                    Step::Power {
                        base,
                        exponent,
                        sqrts: away,
                        reciprocal: true,
                    },
                );
            }
            if away == 0 {
                break;
            }
            value = value * value;
            away -= 1;
        }
    }

    /// `(x! + y!) / y!` and `(x! - y!) / y!` for x two levels down and
    /// y a level-1 value: y is spent twice, so the score works out to
    /// the current level. These generate the small constants around
    /// factorial ratios that the plain operator set misses.
    fn factorial_neighbors(&mut self, level: usize) {
        for x_index in 0..self.hierarchy[level - 3].len() {
            let x = self.hierarchy[level - 3][x_index];
            for y_index in 0..self.hierarchy[0].len() {
                let y = self.hierarchy[0][y_index];
                let ratio = x.factorial_ratio(y);
                if !ratio.truthy() {
                    continue;
                }
                self.sqrt_closure(ratio + N::one(), Step::FactorialPlus(x, y));
                self.sqrt_closure(ratio - N::one(), Step::FactorialMinus(x, y));
            }
        }
    }

    /// Transitive factorial closure over the level being grown. Chains
    /// (x, x!, x!!, …) stop at the sentinel or a known value; appended
    /// members are chased by the inner loop, so the outer bound is the
    /// bucket length on entry. Factorials of n ≥ 2 are never perfect
    /// squares (Bertrand's postulate), so no √-closure is needed here.
    fn factorial_closure(&mut self) {
        let last = self.hierarchy.len() - 1;
        let length = self.hierarchy[last].len();

        for index in 0..length {
            let mut x = self.hierarchy[last][index];
            let mut y = x.factorial();
            while y.truthy() && self.record(y, Step::Factorial(x)) {
                x = y;
                y = x.factorial();
            }
        }
    }
}
