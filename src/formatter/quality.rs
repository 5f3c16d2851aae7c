//! Resolution ranking for video variants
//!
//! The rank table is ascending (144p lowest). Call sites that want the best
//! variant first compare in descending order. Labels outside the table have
//! no rank and sort below every known label.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;

/// Known resolution labels, lowest to highest
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Quality {
    P144,
    P240,
    P360,
    P480,
    P720,
    P1080,
    P1440,
    P2160,
    P4320,
}

impl Quality {
    pub const ALL: [Quality; 9] = [
        Quality::P144,
        Quality::P240,
        Quality::P360,
        Quality::P480,
        Quality::P720,
        Quality::P1080,
        Quality::P1440,
        Quality::P2160,
        Quality::P4320,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Quality::P144 => "144p",
            Quality::P240 => "240p",
            Quality::P360 => "360p",
            Quality::P480 => "480p",
            Quality::P720 => "720p",
            Quality::P1080 => "1080p",
            Quality::P1440 => "1440p",
            Quality::P2160 => "2160p",
            Quality::P4320 => "4320p",
        }
    }

    /// Parse a label such as "1080p". Surrounding whitespace and case are ignored.
    pub fn from_label(label: &str) -> Option<Self> {
        let label = label.trim();
        Self::ALL
            .into_iter()
            .find(|q| q.label().eq_ignore_ascii_case(label))
    }

    /// Index in the ascending table
    pub fn rank(self) -> usize {
        self as usize
    }
}

impl fmt::Display for Quality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Rank of an optional label; `None` for missing or unknown labels
pub fn quality_rank(label: Option<&str>) -> Option<usize> {
    label.and_then(Quality::from_label).map(Quality::rank)
}

/// Highest quality first; unknown labels last
pub fn compare_quality_desc(a: Option<&str>, b: Option<&str>) -> Ordering {
    // Option orders None below Some, so reversing puts unranked labels last.
    quality_rank(b).cmp(&quality_rank(a))
}
