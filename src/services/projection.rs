//! Frequency projection
//!
//! Scales a recurring amount to a monthly-equivalent value.

use tracing::warn;

/// A recognised recurrence cadence
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Frequency {
    Daily,
    Weekly,
    BiWeekly,
    Monthly,
}

impl Frequency {
    /// Parse a frequency label, ignoring case
    pub fn parse(label: &str) -> Option<Self> {
        match label.to_lowercase().as_str() {
            "daily" => Some(Self::Daily),
            "weekly" => Some(Self::Weekly),
            "bi-weekly" => Some(Self::BiWeekly),
            "monthly" => Some(Self::Monthly),
            _ => None,
        }
    }

    /// How many occurrences fall in an average month
    pub fn multiplier(&self) -> f64 {
        match self {
            Self::Daily => 30.0,
            Self::Weekly => 4.3,
            Self::BiWeekly => 2.15,
            Self::Monthly => 1.0,
        }
    }
}

/// Monthly multiplier for a frequency label
///
/// Unrecognised labels are projected as monthly, with a warning.
pub fn monthly_multiplier(frequency: &str) -> f64 {
    match Frequency::parse(frequency) {
        Some(known) => known.multiplier(),
        None => {
            warn!(frequency, "Unknown frequency. Defaulting to monthly.");
            Frequency::Monthly.multiplier()
        }
    }
}
