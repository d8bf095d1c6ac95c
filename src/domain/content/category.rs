// src/domain/content/category.rs
use crate::domain::errors::{DomainError, DomainResult};
use slug::slugify;
use std::{fmt, str::FromStr};

/// The fixed editorial catalog. `FairReview` is the review collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Family,
    Constitutional,
    Adr,
    Corporate,
    Technology,
    LandmarkCases,
    CaseUpdates,
    Education,
    Politics,
    International,
    Criminal,
    Civil,
    Property,
    LegalStudies,
    FairReview,
}

impl Category {
    /// Catalog order as presented to readers.
    pub const ALL: [Self; 15] = [
        Self::Family,
        Self::Constitutional,
        Self::Adr,
        Self::Corporate,
        Self::Technology,
        Self::LandmarkCases,
        Self::CaseUpdates,
        Self::Education,
        Self::Politics,
        Self::International,
        Self::Criminal,
        Self::Civil,
        Self::Property,
        Self::LegalStudies,
        Self::FairReview,
    ];

    pub const REVIEW: Self = Self::FairReview;

    /// Stored and displayed name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Family => "Family",
            Self::Constitutional => "Constitutional",
            Self::Adr => "ADR",
            Self::Corporate => "Corporate",
            Self::Technology => "Technology",
            Self::LandmarkCases => "Landmark Cases",
            Self::CaseUpdates => "Case Updates",
            Self::Education => "Education",
            Self::Politics => "Politics",
            Self::International => "International",
            Self::Criminal => "Criminal",
            Self::Civil => "Civil",
            Self::Property => "Property",
            Self::LegalStudies => "Legal Studies",
            Self::FairReview => "FairReview",
        }
    }

    #[must_use]
    pub const fn slug(self) -> &'static str {
        match self {
            Self::Family => "family",
            Self::Constitutional => "constitutional",
            Self::Adr => "adr",
            Self::Corporate => "corporate",
            Self::Technology => "technology",
            Self::LandmarkCases => "landmark-cases",
            Self::CaseUpdates => "case-updates",
            Self::Education => "education",
            Self::Politics => "politics",
            Self::International => "international",
            Self::Criminal => "criminal",
            Self::Civil => "civil",
            Self::Property => "property",
            Self::LegalStudies => "legal-studies",
            Self::FairReview => "fairreview",
        }
    }

    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::Family => "Family law and domestic matters",
            Self::Constitutional => "Constitutional law and fundamental rights",
            Self::Adr => "Alternative Dispute Resolution and mediation",
            Self::Corporate => "Corporate law and business regulations",
            Self::Technology => "Technology law and digital rights",
            Self::LandmarkCases => "Important landmark case judgments",
            Self::CaseUpdates => "Latest updates on ongoing cases",
            Self::Education => "Legal education and academic insights",
            Self::Politics => "Political developments and policy analysis",
            Self::International => "International law and global affairs",
            Self::Criminal => "Criminal law and justice system",
            Self::Civil => "Civil law and litigation matters",
            Self::Property => "Property law and real estate",
            Self::LegalStudies => "Legal research and scholarly articles",
            Self::FairReview => "Expert reviews and critical analysis",
        }
    }

    #[must_use]
    pub const fn is_review(self) -> bool {
        matches!(self, Self::REVIEW)
    }

    /// Case-insensitive lookup by slug. Unslugged input ("Landmark Cases")
    /// is slugified first.
    #[must_use]
    pub fn from_slug(input: &str) -> Option<Self> {
        let wanted = slugify(input);
        Self::ALL.into_iter().find(|cat| cat.slug() == wanted)
    }

    /// Case-insensitive lookup by display name.
    #[must_use]
    pub fn from_name(input: &str) -> Option<Self> {
        let wanted = input.trim();
        Self::ALL
            .into_iter()
            .find(|cat| cat.name().eq_ignore_ascii_case(wanted))
    }

    #[must_use]
    pub fn lookup(input: &str) -> Option<Self> {
        Self::from_name(input).or_else(|| Self::from_slug(input))
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Category {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::lookup(s).ok_or_else(|| DomainError::Validation(format!("unknown category '{s}'")))
    }
}

pub fn parse_category(input: &str) -> DomainResult<Category> {
    input.parse()
}
