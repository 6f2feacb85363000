//! Management recommendations
//!
//! Maps a risk score onto one of four escalation tiers, each with its
//! standing action list for aquaculture operators.

use serde::{Deserialize, Serialize};

/// Escalation tier derived from the risk score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ManagementAdvice {
    /// Score below 50: standard operations.
    Routine,
    /// Score 50–69: elevated risk.
    Elevated,
    /// Score 70–84: high alert.
    HighAlert,
    /// Score 85 and above: emergency protocols.
    Emergency,
}

impl ManagementAdvice {
    pub fn from_risk_score(risk_score: u8) -> Self {
        if risk_score >= 85 {
            ManagementAdvice::Emergency
        } else if risk_score >= 70 {
            ManagementAdvice::HighAlert
        } else if risk_score >= 50 {
            ManagementAdvice::Elevated
        } else {
            ManagementAdvice::Routine
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ManagementAdvice::Routine => "NORMAL OPERATIONS",
            ManagementAdvice::Elevated => "ELEVATED RISK",
            ManagementAdvice::HighAlert => "HIGH ALERT",
            ManagementAdvice::Emergency => "EMERGENCY PROTOCOLS REQUIRED",
        }
    }

    /// Recommended actions for this tier.
    pub fn actions(&self) -> &'static [&'static str] {
        match self {
            ManagementAdvice::Routine => &[
                "Standard feeding protocols",
                "Routine monitoring",
                "Continue growth optimization",
            ],
            ManagementAdvice::Elevated => &[
                "Reduce feeding by 30%",
                "Increase monitoring frequency",
                "Ensure optimal aeration",
                "Review stocking density",
            ],
            ManagementAdvice::HighAlert => &[
                "Reduce feeding by 50%",
                "Increase water exchange rate",
                "Deploy emergency aeration",
                "Prepare for early harvest",
            ],
            ManagementAdvice::Emergency => &[
                "Immediate harvest or stock relocation",
                "Cease feeding to minimize metabolic load",
                "Maximize aeration systems",
                "Monitor mortality hourly",
            ],
        }
    }
}
