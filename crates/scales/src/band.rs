//! Categorical band scale: maps each discrete domain value to an
//! equal-width pixel slot.

/// A band scale over an ordered categorical domain.
///
/// The domain is deduplicated preserving first-occurrence order, so a
/// per-record year sequence can be fed in directly. Slots never overlap:
/// slot `i` starts at `start + i * step` and is `bandwidth()` wide.
#[derive(Debug, Clone)]
pub struct BandScale<T> {
    domain: Vec<T>,
    start: f64,
    step: f64,
    round: bool,
}

impl<T: PartialEq + Copy> BandScale<T> {
    /// Build a band scale over `range = (start, end)` in pixels.
    pub fn new(domain: impl IntoIterator<Item = T>, range: (f64, f64)) -> Self {
        Self::build(domain, range, false)
    }

    /// Like [`BandScale::new`] but with integer slot positions and width,
    /// centering any leftover space.
    pub fn rounded(domain: impl IntoIterator<Item = T>, range: (f64, f64)) -> Self {
        Self::build(domain, range, true)
    }

    fn build(domain: impl IntoIterator<Item = T>, range: (f64, f64), round: bool) -> Self {
        let mut deduped: Vec<T> = Vec::new();
        for value in domain {
            if !deduped.contains(&value) {
                deduped.push(value);
            }
        }

        let (mut start, end) = range;
        let n = deduped.len().max(1) as f64;
        let mut step = (end - start) / n;
        if round {
            step = step.floor();
            start = (start + (end - start - step * n) / 2.0).round();
        }

        Self {
            domain: deduped,
            start,
            step,
            round,
        }
    }

    /// Pixel position of the start of the slot for `value`, if present.
    pub fn position(&self, value: &T) -> Option<f64> {
        let index = self.domain.iter().position(|d| d == value)?;
        let pos = self.start + index as f64 * self.step;
        Some(if self.round { pos.round() } else { pos })
    }

    /// Width of each slot.
    pub fn bandwidth(&self) -> f64 {
        self.step
    }

    /// Deduplicated domain in first-occurrence order.
    pub fn domain(&self) -> &[T] {
        &self.domain
    }

    pub fn len(&self) -> usize {
        self.domain.len()
    }

    pub fn is_empty(&self) -> bool {
        self.domain.is_empty()
    }
}

/// Axis tick selection for year domains: keep only years divisible by 10.
pub fn decade_ticks(years: &[i32]) -> Vec<i32> {
    years.iter().copied().filter(|year| year % 10 == 0).collect()
}
