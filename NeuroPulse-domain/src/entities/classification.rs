use std::fmt;

use serde::{Deserialize, Serialize};

/// Label shown when a reading could not be classified
pub const UNCLASSIFIED_LABEL: &str = "—";

/// Severity tier of a single vital sign reading.
///
/// Variant order is the display ordering: `Normal` is least severe, then
/// `Low`/`High`, then `VeryLow`/`VeryHigh`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SeverityTier {
    #[default]
    Normal,
    Low,
    High,
    VeryLow,
    VeryHigh,
}

/// Which side of the normal range a tier falls on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RangeDirection {
    Below,
    Within,
    Above,
}

impl SeverityTier {
    /// 0 for normal, 1 for low/high, 2 for very low/very high
    pub fn severity_rank(self) -> u8 {
        match self {
            SeverityTier::Normal => 0,
            SeverityTier::Low | SeverityTier::High => 1,
            SeverityTier::VeryLow | SeverityTier::VeryHigh => 2,
        }
    }

    pub fn direction(self) -> RangeDirection {
        match self {
            SeverityTier::Normal => RangeDirection::Within,
            SeverityTier::Low | SeverityTier::VeryLow => RangeDirection::Below,
            SeverityTier::High | SeverityTier::VeryHigh => RangeDirection::Above,
        }
    }

    /// Machine-readable name, matching the serde representation
    pub fn as_str(self) -> &'static str {
        match self {
            SeverityTier::Normal => "normal",
            SeverityTier::Low => "low",
            SeverityTier::High => "high",
            SeverityTier::VeryLow => "very_low",
            SeverityTier::VeryHigh => "very_high",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            SeverityTier::Normal => "Normal",
            SeverityTier::Low => "Low",
            SeverityTier::High => "High",
            SeverityTier::VeryLow => "Very Low",
            SeverityTier::VeryHigh => "Very High",
        }
    }
}

impl fmt::Display for SeverityTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Semantic color category used by display components
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DisplayColor {
    Success,
    Info,
    Warning,
    Error,
}

impl DisplayColor {
    pub fn as_str(self) -> &'static str {
        match self {
            DisplayColor::Success => "success",
            DisplayColor::Info => "info",
            DisplayColor::Warning => "warning",
            DisplayColor::Error => "error",
        }
    }
}

impl fmt::Display for DisplayColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Outcome of classifying one reading.
///
/// `display_color` is `None` only for the unclassified result, which callers
/// render with a neutral style.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ClassificationResult {
    pub tier: SeverityTier,
    pub display_color: Option<DisplayColor>,
}

impl ClassificationResult {
    pub const fn new(tier: SeverityTier, display_color: DisplayColor) -> Self {
        Self {
            tier,
            display_color: Some(display_color),
        }
    }

    /// The "no classification" result: normal tier, no color override
    pub const fn unclassified() -> Self {
        Self {
            tier: SeverityTier::Normal,
            display_color: None,
        }
    }

    pub fn is_classified(&self) -> bool {
        self.display_color.is_some()
    }

    /// Tier label, or a dash when nothing was classified
    pub fn label(&self) -> &'static str {
        if self.is_classified() {
            self.tier.label()
        } else {
            UNCLASSIFIED_LABEL
        }
    }
}
