use serde::{Deserialize, Serialize};

/// How to format a numeric value on the frontend.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "kind")]
pub enum ValueFormat {
    Money { currency: String },
    Number { decimals: u8 },
    Percent { decimals: u8 },
    Integer,
}

impl ValueFormat {
    /// Rupee money format used by every module summary.
    pub fn rupees() -> Self {
        Self::Money {
            currency: "₹".to_string(),
        }
    }
}

/// Visual status of an indicator (drives the card colour).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum IndicatorStatus {
    Good,
    Bad,
    #[default]
    Neutral,
    Warning,
}
