//! Threshold (bucket) scale: partitions a closed value interval into N
//! equal-width buckets for discrete color classification.

use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum ScaleError {
    #[error("bucket count must be at least 1")]
    NoBuckets,

    #[error("domain [{min}, {max}] is not a finite increasing interval")]
    InvalidDomain { min: f64, max: f64 },
}

/// An equal-interval threshold scale over `[min, max]`.
///
/// Stores the N-1 interior boundaries, which are strictly increasing.
/// Bucket `i` covers `[boundary[i-1], boundary[i]]` (the outermost buckets
/// extend to `min`/`max`); a value equal to a shared boundary belongs to
/// the lower-indexed bucket.
#[derive(Debug, Clone)]
pub struct ThresholdScale {
    min: f64,
    max: f64,
    boundaries: Vec<f64>,
}

impl ThresholdScale {
    /// Partition `[min, max]` into `buckets` equal-width sub-intervals.
    pub fn equal_intervals(min: f64, max: f64, buckets: usize) -> Result<Self, ScaleError> {
        if buckets == 0 {
            return Err(ScaleError::NoBuckets);
        }
        if !min.is_finite() || !max.is_finite() || max <= min {
            return Err(ScaleError::InvalidDomain { min, max });
        }

        let step = (max - min) / buckets as f64;
        let boundaries = (1..buckets).map(|i| min + i as f64 * step).collect();

        Ok(Self {
            min,
            max,
            boundaries,
        })
    }

    pub fn bucket_count(&self) -> usize {
        self.boundaries.len() + 1
    }

    /// Index of the bucket containing `value`.
    ///
    /// Boundary ties resolve to the lower-indexed bucket; out-of-range
    /// values clamp to the first/last bucket.
    pub fn bucket_index(&self, value: f64) -> usize {
        self.boundaries.iter().take_while(|b| **b < value).count()
    }

    /// Interior boundaries, strictly increasing.
    pub fn boundaries(&self) -> &[f64] {
        &self.boundaries
    }

    /// The `[low, high]` temperature extent of bucket `index`.
    pub fn bucket_extent(&self, index: usize) -> Option<(f64, f64)> {
        let count = self.bucket_count();
        if index >= count {
            return None;
        }
        let low = if index == 0 {
            self.min
        } else {
            self.boundaries[index - 1]
        };
        let high = if index == count - 1 {
            self.max
        } else {
            self.boundaries[index]
        };
        Some((low, high))
    }

    pub fn min(&self) -> f64 {
        self.min
    }

    pub fn max(&self) -> f64 {
        self.max
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_boundary_tie_goes_to_lower_bucket() {
        let scale = ThresholdScale::equal_intervals(0.0, 10.0, 5).unwrap();
        // boundaries at 2, 4, 6, 8
        assert_eq!(scale.bucket_index(2.0), 0);
        assert_eq!(scale.bucket_index(2.0 + 1e-9), 1);
        assert_eq!(scale.bucket_index(8.0), 3);
    }

    #[test]
    fn test_out_of_range_clamps() {
        let scale = ThresholdScale::equal_intervals(0.0, 10.0, 5).unwrap();
        assert_eq!(scale.bucket_index(-100.0), 0);
        assert_eq!(scale.bucket_index(100.0), 4);
    }

    #[test]
    fn test_degenerate_domain_rejected() {
        assert!(ThresholdScale::equal_intervals(5.0, 5.0, 11).is_err());
        assert!(ThresholdScale::equal_intervals(5.0, 4.0, 11).is_err());
        assert!(ThresholdScale::equal_intervals(0.0, 1.0, 0).is_err());
    }
}
