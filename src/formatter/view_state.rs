//! Which section of a report is expanded
//!
//! At most one section is open at a time. Opening a section closes every
//! other one; activating the open section collapses it.

use crate::formatter::report::{Report, SectionKind};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ViewState {
    expanded: Option<SectionKind>,
}

impl Default for ViewState {
    fn default() -> Self {
        Self::new(Some(SectionKind::GeneralInformation))
    }
}

impl ViewState {
    pub fn new(expanded: Option<SectionKind>) -> Self {
        Self { expanded }
    }

    pub fn collapsed() -> Self {
        Self { expanded: None }
    }

    pub fn expanded(&self) -> Option<SectionKind> {
        self.expanded
    }

    pub fn is_expanded(&self, kind: SectionKind) -> bool {
        self.expanded == Some(kind)
    }

    /// State after the user activates `kind`'s header
    #[must_use]
    pub fn toggle(self, kind: SectionKind) -> Self {
        if self.is_expanded(kind) {
            Self::collapsed()
        } else {
            Self::new(Some(kind))
        }
    }

    /// Keep the expanded section only if `report` actually has it; otherwise
    /// fall back to General Information (or nothing, for failures).
    #[must_use]
    pub fn fit_to(self, report: &Report) -> Self {
        match self.expanded {
            None => self,
            Some(kind) if report.has_section(kind) => self,
            Some(_) if report.has_section(SectionKind::GeneralInformation) => {
                Self::new(Some(SectionKind::GeneralInformation))
            }
            Some(_) => Self::collapsed(),
        }
    }
}
