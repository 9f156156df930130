//! Per-voice ranking multipliers, one profile per calibration domain.
//! Weights only affect sort order — never the emitted `confidence` on an
//! insight.

use serde::{Deserialize, Serialize};

use insight_core::Voice;

/// A calibration profile selecting which business context an interview
/// batch belongs to. `None` (the default) applies uniform weights.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Domain {
    Requirements,
    BizAnalysis,
    HrEvaluation,
    DailyConcerns,
    CustomerVoice,
    Retrospective,
}

/// Positive multiplier per voice, applied to `confidence` at sort time.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DomainWeights {
    pub pain: f32,
    pub insecurity: f32,
    pub vision: f32,
    pub objection: f32,
    pub traction: f32,
}

impl DomainWeights {
    pub const UNIFORM: DomainWeights = DomainWeights {
        pain: 1.0,
        insecurity: 1.0,
        vision: 1.0,
        objection: 1.0,
        traction: 1.0,
    };

    pub fn get(&self, voice: Voice) -> f32 {
        match voice {
            Voice::Pain => self.pain,
            Voice::Insecurity => self.insecurity,
            Voice::Vision => self.vision,
            Voice::Objection => self.objection,
            Voice::Traction => self.traction,
        }
    }
}

impl Default for DomainWeights {
    fn default() -> Self {
        Self::UNIFORM
    }
}

/// Weights table for a domain, or uniform weights when `domain` is `None`.
pub fn weights_for(domain: Option<Domain>) -> DomainWeights {
    match domain {
        None => DomainWeights::UNIFORM,
        Some(Domain::Requirements) => DomainWeights {
            pain: 1.5,
            insecurity: 1.2,
            vision: 1.3,
            objection: 1.0,
            traction: 1.0,
        },
        Some(Domain::BizAnalysis) => DomainWeights {
            pain: 1.3,
            insecurity: 1.1,
            vision: 1.4,
            objection: 1.1,
            traction: 1.2,
        },
        Some(Domain::HrEvaluation) => DomainWeights {
            pain: 1.2,
            insecurity: 1.6,
            vision: 1.0,
            objection: 1.0,
            traction: 1.1,
        },
        Some(Domain::DailyConcerns) => DomainWeights {
            pain: 1.8,
            insecurity: 2.0,
            vision: 1.0,
            objection: 1.2,
            traction: 1.0,
        },
        Some(Domain::CustomerVoice) => DomainWeights {
            pain: 1.4,
            insecurity: 1.1,
            vision: 1.2,
            objection: 1.5,
            traction: 1.1,
        },
        Some(Domain::Retrospective) => DomainWeights {
            pain: 1.1,
            insecurity: 1.0,
            vision: 1.2,
            objection: 1.0,
            traction: 1.6,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_domain_is_uniform() {
        let w = weights_for(None);
        for voice in Voice::ALL {
            assert_eq!(w.get(voice), 1.0);
        }
    }

    #[test]
    fn daily_concerns_matches_the_documented_profile() {
        let w = weights_for(Some(Domain::DailyConcerns));
        assert_eq!(w.pain, 1.8);
        assert_eq!(w.insecurity, 2.0);
        assert_eq!(w.vision, 1.0);
        assert_eq!(w.objection, 1.2);
        assert_eq!(w.traction, 1.0);
    }
}
