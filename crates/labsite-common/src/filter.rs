//! Pure filter functions over the catalog collections.
//!
//! Each filter takes an immutable slice plus a small criteria value and
//! returns the matching records in source order. Nothing here allocates
//! records; results borrow from the input slice.

use serde::{Serialize, Serializer};
use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use crate::entities::{Person, Publication, Role};
use crate::error::LabsiteError;

/// The sentinel meaning "no restriction on this field".
pub const ALL: &str = "All";

// ── Year selection ──────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum YearFilter {
    #[default]
    All,
    Year(i32),
}

impl YearFilter {
    pub fn matches(self, year: i32) -> bool {
        match self {
            YearFilter::All => true,
            YearFilter::Year(selected) => selected == year,
        }
    }
}

impl fmt::Display for YearFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            YearFilter::All => f.write_str(ALL),
            YearFilter::Year(year) => write!(f, "{year}"),
        }
    }
}

impl FromStr for YearFilter {
    type Err = LabsiteError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() || s.eq_ignore_ascii_case(ALL) {
            return Ok(YearFilter::All);
        }
        s.parse::<i32>()
            .map(YearFilter::Year)
            .map_err(|_| LabsiteError::InvalidFilter(format!("invalid year: {s}")))
    }
}

impl Serialize for YearFilter {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Year filter options: `All` first, then every distinct year, newest first.
pub fn year_options(publications: &[Publication]) -> Vec<YearFilter> {
    let years: BTreeSet<i32> = publications.iter().map(|p| p.year).collect();
    std::iter::once(YearFilter::All)
        .chain(years.into_iter().rev().map(YearFilter::Year))
        .collect()
}

// ── Role selection ──────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RoleFilter {
    #[default]
    All,
    Only(Role),
}

impl RoleFilter {
    pub fn matches(self, role: Role) -> bool {
        match self {
            RoleFilter::All => true,
            RoleFilter::Only(selected) => selected == role,
        }
    }

    /// Fixed button order: `All, PI, Postdoc, PhD, Masters, Alumni`.
    pub fn options() -> Vec<RoleFilter> {
        std::iter::once(RoleFilter::All)
            .chain(Role::ALL.into_iter().map(RoleFilter::Only))
            .collect()
    }
}

impl fmt::Display for RoleFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RoleFilter::All => f.write_str(ALL),
            RoleFilter::Only(role) => f.write_str(role.label()),
        }
    }
}

impl FromStr for RoleFilter {
    type Err = LabsiteError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() || s.eq_ignore_ascii_case(ALL) {
            return Ok(RoleFilter::All);
        }
        s.parse::<Role>().map(RoleFilter::Only)
    }
}

impl Serialize for RoleFilter {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

pub fn filter_people(people: &[Person], role: RoleFilter) -> Vec<&Person> {
    people.iter().filter(|p| role.matches(p.role)).collect()
}

// ── Publication search ──────────────────────────────────────────────────────

/// Lowercased `title authors venue` text that the query is matched against.
pub fn haystack(publication: &Publication) -> String {
    format!(
        "{} {} {}",
        publication.title,
        publication.authors.join(" "),
        publication.venue.as_deref().unwrap_or_default(),
    )
    .to_lowercase()
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PublicationQuery {
    pub text: String,
    pub year: YearFilter,
}

impl PublicationQuery {
    pub fn new(text: impl Into<String>, year: YearFilter) -> Self {
        Self { text: text.into(), year }
    }

    pub fn matches(&self, publication: &Publication) -> bool {
        self.year.matches(publication.year)
            && haystack(publication).contains(&self.text.to_lowercase())
    }

    pub fn apply<'a>(&self, publications: &'a [Publication]) -> Vec<&'a Publication> {
        publications.iter().filter(|p| self.matches(p)).collect()
    }
}

pub fn filter_publications<'a>(
    publications: &'a [Publication],
    text: &str,
    year: YearFilter,
) -> Vec<&'a Publication> {
    PublicationQuery::new(text, year).apply(publications)
}
