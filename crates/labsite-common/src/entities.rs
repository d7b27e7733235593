/// Record types rendered on the lab homepage.
/// Every collection is immutable once a `Catalog` is built.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use crate::error::LabsiteError;

// ---------------------------------------------------------------------------
// Publication
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Publication {
    /// Unique within the catalog; used as the list key.
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub authors: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub venue: Option<String>,
    pub year: i32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub doi: Option<String>, // bare identifier, e.g. 10.1016/j.pmatsci.2008.07.002
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pdf: Option<String>,
}

impl Publication {
    pub fn doi_url(&self) -> Option<String> {
        self.doi.as_ref().map(|doi| format!("https://doi.org/{doi}"))
    }

    pub fn author_line(&self) -> String {
        self.authors.join(", ")
    }
}

// ---------------------------------------------------------------------------
// Person
// ---------------------------------------------------------------------------

/// Closed set of group roles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Role {
    #[serde(rename = "PI")]
    Pi,
    Postdoc,
    #[serde(rename = "PhD")]
    Phd,
    Masters,
    Alumni,
}

impl Role {
    /// Display order of the role filter buttons.
    pub const ALL: [Role; 5] = [Role::Pi, Role::Postdoc, Role::Phd, Role::Masters, Role::Alumni];

    pub fn label(self) -> &'static str {
        match self {
            Role::Pi => "PI",
            Role::Postdoc => "Postdoc",
            Role::Phd => "PhD",
            Role::Masters => "Masters",
            Role::Alumni => "Alumni",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Role {
    type Err = LabsiteError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Role::ALL
            .into_iter()
            .find(|role| role.label().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| LabsiteError::InvalidFilter(format!("unknown role: {s}")))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Person {
    /// Unique within the catalog; used as the list key.
    pub name: String,
    pub role: Role,
    pub field: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub img: Option<String>,
    /// Graduation year; only alumni carry one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub year: Option<i32>,
    #[serde(default)]
    pub links: BTreeMap<String, String>,
}

// ---------------------------------------------------------------------------
// Course / Research area
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Course {
    pub code: String,
    pub title: String,
    pub term: String,
    pub syllabus: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResearchArea {
    pub title: String,
    #[serde(rename = "desc")]
    pub description: String,
    pub icon: String,
}
