//! Score ratings.

use std::fmt;

use serde::Serialize;

/// Qualitative band for a final score.
///
/// # Examples
///
/// ```
/// use u_puzzle::scoring::Rating;
///
/// assert_eq!(Rating::from_score(950), Rating::Perfect);
/// assert_eq!(Rating::from_score(500).stars(), 2);
/// assert_eq!(Rating::from_score(0).to_string(), "Keep Trying!");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Rating {
    KeepTrying,
    Fair,
    Good,
    Excellent,
    Perfect,
}

impl Rating {
    /// Classifies a final score.
    pub fn from_score(score: u32) -> Self {
        match score {
            900.. => Rating::Perfect,
            700..=899 => Rating::Excellent,
            500..=699 => Rating::Good,
            300..=499 => Rating::Fair,
            _ => Rating::KeepTrying,
        }
    }

    /// Number of stars awarded, 1 to 3.
    pub fn stars(self) -> u8 {
        match self {
            Rating::Perfect | Rating::Excellent => 3,
            Rating::Good | Rating::Fair => 2,
            Rating::KeepTrying => 1,
        }
    }

    /// Display label.
    pub fn label(self) -> &'static str {
        match self {
            Rating::Perfect => "Perfect!",
            Rating::Excellent => "Excellent!",
            Rating::Good => "Good!",
            Rating::Fair => "Fair",
            Rating::KeepTrying => "Keep Trying!",
        }
    }
}

impl fmt::Display for Rating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
