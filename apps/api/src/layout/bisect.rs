//! Integer dichotomy search shared by the font-size solver and the wrap-width optimizer.
//!
//! The caller supplies a probe that inspects a midpoint and decides which half of the
//! range to keep. The loop runs while `max - min > 1`, so it always terminates after
//! at most `log2(max - min)` probes.

/// Bounds of an in-progress dichotomy search. `min < max` at loop entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchBounds {
    pub min: usize,
    pub max: usize,
}

impl SearchBounds {
    pub fn new(min: usize, max: usize) -> Self {
        Self { min, max }
    }

    /// True once the range has collapsed to width 1 (or less).
    pub fn is_settled(&self) -> bool {
        self.max.saturating_sub(self.min) <= 1
    }

    fn midpoint(&self) -> usize {
        self.min + (self.max - self.min) / 2
    }
}

/// Which half of the range a probe keeps.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Narrow {
    /// The midpoint is acceptable: `min = mid`.
    Grow,
    /// The midpoint is too large: `max = mid`.
    Shrink,
}

/// Runs the dichotomy until the bounds settle, returning the final bounds.
///
/// Probe errors abort the search and are returned unchanged.
pub fn bisect<E, F>(mut bounds: SearchBounds, mut probe: F) -> Result<SearchBounds, E>
where
    F: FnMut(usize) -> Result<Narrow, E>,
{
    while !bounds.is_settled() {
        let mid = bounds.midpoint();
        match probe(mid)? {
            Narrow::Grow => bounds.min = mid,
            Narrow::Shrink => bounds.max = mid,
        }
    }
    Ok(bounds)
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use std::convert::Infallible;

    #[test]
    fn test_bisect_finds_largest_accepted_value() {
        // Accept everything up to 37 → min settles on 37.
        let result =
            bisect::<Infallible, _>(SearchBounds::new(0, 101), |mid| {
                Ok(if mid <= 37 { Narrow::Grow } else { Narrow::Shrink })
            })
            .unwrap();
        assert_eq!(result.min, 37);
        assert_eq!(result.max, 38);
    }

    #[test]
    fn test_bisect_settled_bounds_never_probe() {
        let mut probes = 0;
        let result = bisect::<Infallible, _>(SearchBounds::new(4, 5), |_| {
            probes += 1;
            Ok(Narrow::Grow)
        })
        .unwrap();
        assert_eq!(probes, 0);
        assert_eq!(result, SearchBounds::new(4, 5));
    }

    #[test]
    fn test_bisect_inverted_bounds_are_settled() {
        assert!(SearchBounds::new(9, 3).is_settled());
    }

    #[test]
    fn test_bisect_probe_count_is_logarithmic() {
        let mut probes = 0;
        bisect::<Infallible, _>(SearchBounds::new(0, 1024), |_| {
            probes += 1;
            Ok(Narrow::Shrink)
        })
        .unwrap();
        assert_eq!(probes, 10);
    }

    #[test]
    fn test_bisect_propagates_probe_error() {
        let result = bisect(SearchBounds::new(0, 10), |mid| {
            if mid == 5 {
                Err("boom")
            } else {
                Ok(Narrow::Grow)
            }
        });
        assert_eq!(result, Err("boom"));
    }
}
