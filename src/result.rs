use serde::{Deserialize, Serialize};

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, strum_macros::Display)]
#[strum(serialize_all = "snake_case")]
pub enum Metric {
    FleschKincaidGradeLevel,
    FleschKincaidReadingEase,
    ColemanLiauIndex,
    AutomatedReadabilityIndex,
    Smog,
    DaleChall,
    Forcast,
}

impl Metric {
    pub const ALL: [Metric; 7] = [
        Metric::FleschKincaidGradeLevel,
        Metric::FleschKincaidReadingEase,
        Metric::ColemanLiauIndex,
        Metric::AutomatedReadabilityIndex,
        Metric::Smog,
        Metric::DaleChall,
        Metric::Forcast,
    ];

    /// Look a metric up by its snake_case name.
    pub fn from_name(name: &str) -> Option<Metric> {
        Metric::ALL.into_iter().find(|m| m.to_string() == name)
    }
}

/// The seven scores for one document.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ReadabilityResult {
    pub flesch_kincaid_grade_level: f64,
    pub flesch_kincaid_reading_ease: f64,
    pub coleman_liau_index: f64,
    pub automated_readability_index: f64,
    pub smog: f64,
    pub dale_chall: f64,
    pub forcast: f64,
}

impl ReadabilityResult {
    /// The result for text with no countable words.
    pub const ZERO: ReadabilityResult = ReadabilityResult {
        flesch_kincaid_grade_level: 0.0,
        flesch_kincaid_reading_ease: 0.0,
        coleman_liau_index: 0.0,
        automated_readability_index: 0.0,
        smog: 0.0,
        dale_chall: 0.0,
        forcast: 0.0,
    };

    pub fn get(&self, metric: Metric) -> f64 {
        match metric {
            Metric::FleschKincaidGradeLevel => self.flesch_kincaid_grade_level,
            Metric::FleschKincaidReadingEase => self.flesch_kincaid_reading_ease,
            Metric::ColemanLiauIndex => self.coleman_liau_index,
            Metric::AutomatedReadabilityIndex => self.automated_readability_index,
            Metric::Smog => self.smog,
            Metric::DaleChall => self.dale_chall,
            Metric::Forcast => self.forcast,
        }
    }

    pub fn get_by_name(&self, name: &str) -> Option<f64> {
        Metric::from_name(name).map(|m| self.get(m))
    }

    pub fn iter(&self) -> impl Iterator<Item = (Metric, f64)> + '_ {
        Metric::ALL.into_iter().map(move |m| (m, self.get(m)))
    }

    pub fn is_zero(&self) -> bool {
        self.iter().all(|(_, v)| v == 0.0)
    }
}
