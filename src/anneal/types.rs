//! Per-run progress records.

/// One loop iteration of an annealing run.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MetricSample {
    /// 1-based iteration number.
    pub iteration: usize,
    /// Cost of the current tour after the accept/revert decision.
    pub current_cost: f64,
    /// Lowest cost this run has seen so far.
    pub best_cost: f64,
}

/// Ordered trajectory of a run, one sample per iteration.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RunMetrics {
    samples: Vec<MetricSample>,
}

impl RunMetrics {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            samples: Vec::with_capacity(capacity),
        }
    }

    pub fn push(&mut self, sample: MetricSample) {
        self.samples.push(sample);
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn samples(&self) -> &[MetricSample] {
        &self.samples
    }

    pub fn iter(&self) -> std::slice::Iter<'_, MetricSample> {
        self.samples.iter()
    }

    pub fn last(&self) -> Option<&MetricSample> {
        self.samples.last()
    }
}

impl<'a> IntoIterator for &'a RunMetrics {
    type Item = &'a MetricSample;
    type IntoIter = std::slice::Iter<'a, MetricSample>;

    fn into_iter(self) -> Self::IntoIter {
        self.samples.iter()
    }
}
