//! Reference samples: a text plus the scores it is expected to get.

use crate::error::{ReadabilityError, Result};
use crate::result::{Metric, ReadabilityResult};
use crate::util::approx_eq_rel;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

pub const DEFAULT_TOLERANCE: f64 = 0.01;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoredSample {
    pub text: String,
    pub fk_grade: f64,
    pub fk_ease: f64,
    pub coleman_liau: f64,
    pub ari: f64,
    pub smog: f64,
    pub dale_chall: f64,
    pub forcast: f64,
}

/// A metric that landed outside the tolerance.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Deviation {
    pub metric: Metric,
    pub expected: f64,
    pub actual: f64,
}

impl ScoredSample {
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path).map_err(|e| ReadabilityError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;
        serde_json::from_str(&contents).map_err(|e| ReadabilityError::SampleMalformed {
            path: path.to_path_buf(),
            source: e,
        })
    }

    pub fn expected(&self) -> ReadabilityResult {
        ReadabilityResult {
            flesch_kincaid_grade_level: self.fk_grade,
            flesch_kincaid_reading_ease: self.fk_ease,
            coleman_liau_index: self.coleman_liau,
            automated_readability_index: self.ari,
            smog: self.smog,
            dale_chall: self.dale_chall,
            forcast: self.forcast,
        }
    }

    /// Metrics whose score differs from the expected one by more than
    /// `tolerance` relative error.
    pub fn deviations(&self, actual: &ReadabilityResult, tolerance: f64) -> Vec<Deviation> {
        let expected = self.expected();
        Metric::ALL
            .into_iter()
            .filter(|&m| !approx_eq_rel(actual.get(m), expected.get(m), tolerance))
            .map(|metric| Deviation {
                metric,
                expected: expected.get(metric),
                actual: actual.get(metric),
            })
            .collect()
    }
}
