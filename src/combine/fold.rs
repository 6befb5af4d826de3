//! Folding kept per-rule results into one number

use crate::combine::strategy::CombineStrategy;
use crate::error::UnrecoverableIntersection;
use crate::rule::Outcome;
use rand::Rng;
use smallvec::SmallVec;

/// Running totals over the results kept by the only-filter
#[derive(Debug, Clone, Default)]
pub struct Tally {
    results: SmallVec<[f64; 8]>,
    min: f64,
    max: f64,
    sum: f64,
    any_matched: bool,
    extra_matches: usize,
}

impl Tally {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, outcome: Outcome) {
        if outcome.matched {
            if self.any_matched {
                self.extra_matches += 1;
            } else {
                self.any_matched = true;
            }
        }

        // Bounds start at the first kept result
        if self.results.is_empty() {
            self.min = outcome.value;
            self.max = outcome.value;
        } else {
            self.min = self.min.min(outcome.value);
            self.max = self.max.max(outcome.value);
        }

        self.sum += outcome.value;
        self.results.push(outcome.value);
    }

    pub fn len(&self) -> usize {
        self.results.len()
    }

    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }

    /// Matches after the first one
    pub fn extra_matches(&self) -> usize {
        self.extra_matches
    }

    /// Fold the tally per strategy. An empty tally folds to `0`.
    ///
    /// # Panics
    ///
    /// With [`CombineStrategy::IntersectionFatal`], panics with an
    /// [`UnrecoverableIntersection`] payload when more than one kept rule
    /// matched.
    pub fn fold<R: Rng>(&self, strategy: CombineStrategy, rng: &mut R) -> f64 {
        let (first, last) = match (self.results.first(), self.results.last()) {
            (Some(first), Some(last)) => (*first, *last),
            _ => return 0.0,
        };

        match strategy {
            CombineStrategy::LastOne => last,
            CombineStrategy::FirstOne => first,
            CombineStrategy::Random => self.results[rng.gen_range(0..self.results.len())],
            CombineStrategy::Average => self.sum / self.results.len() as f64,
            CombineStrategy::Maximum => self.max,
            CombineStrategy::Minimum => self.min,
            CombineStrategy::Sum => self.sum,
            CombineStrategy::Intersections => self.extra_matches as f64,
            CombineStrategy::IntersectionFatal => {
                if self.extra_matches > 0 {
                    std::panic::panic_any(UnrecoverableIntersection {
                        extra_matches: self.extra_matches,
                    });
                }
                0.0
            }
        }
    }
}

impl Extend<Outcome> for Tally {
    fn extend<I: IntoIterator<Item = Outcome>>(&mut self, iter: I) {
        for outcome in iter {
            self.push(outcome);
        }
    }
}

impl FromIterator<Outcome> for Tally {
    fn from_iter<I: IntoIterator<Item = Outcome>>(iter: I) -> Self {
        let mut tally = Tally::new();
        tally.extend(iter);
        tally
    }
}
