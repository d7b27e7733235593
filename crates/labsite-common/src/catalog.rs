//! The immutable content catalog.
//!
//! A `Catalog` bundles every collection the homepage renders. The built-in
//! demo catalog is compiled in; a YAML or JSON content file with the same
//! shape can replace it at startup.

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashSet};
use std::path::Path;

use crate::entities::{Course, Person, Publication, ResearchArea, Role};
use crate::error::{LabsiteError, Result};
use crate::filter::{year_options, YearFilter};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Catalog {
    #[serde(default)]
    pub research_areas: Vec<ResearchArea>,
    #[serde(default)]
    pub people: Vec<Person>,
    #[serde(default)]
    pub courses: Vec<Course>,
    #[serde(default)]
    pub publications: Vec<Publication>,
}

impl Catalog {
    /// Load a catalog from a `.yaml`/`.yml` or `.json` file and validate it.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| LabsiteError::io(path, e))?;
        let catalog = match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => Self::from_json_str(&content)?,
            Some("yaml") | Some("yml") => Self::from_yaml_str(&content)?,
            other => {
                return Err(LabsiteError::Content(format!(
                    "unsupported content file extension {:?} for {}",
                    other.unwrap_or(""),
                    path.display()
                )))
            }
        };
        tracing::info!(
            "Loaded catalog from {}: {} publications, {} people, {} courses, {} research areas",
            path.display(),
            catalog.publications.len(),
            catalog.people.len(),
            catalog.courses.len(),
            catalog.research_areas.len(),
        );
        Ok(catalog)
    }

    pub fn from_yaml_str(content: &str) -> Result<Self> {
        let catalog: Self = serde_yaml::from_str(content)?;
        catalog.validate()?;
        Ok(catalog)
    }

    pub fn from_json_str(content: &str) -> Result<Self> {
        let catalog: Self = serde_json::from_str(content)?;
        catalog.validate()?;
        Ok(catalog)
    }

    /// Check list keys are unique and only alumni carry a graduation year.
    pub fn validate(&self) -> Result<()> {
        ensure_unique("publication id", self.publications.iter().map(|p| p.id.as_str()))?;
        ensure_unique("person name", self.people.iter().map(|p| p.name.as_str()))?;
        ensure_unique("course code", self.courses.iter().map(|c| c.code.as_str()))?;
        ensure_unique("research area", self.research_areas.iter().map(|r| r.title.as_str()))?;

        if let Some(person) = self
            .people
            .iter()
            .find(|p| p.year.is_some() && p.role != Role::Alumni)
        {
            return Err(LabsiteError::Content(format!(
                "{} has a graduation year but role {}",
                person.name, person.role
            )));
        }
        Ok(())
    }

    pub fn year_options(&self) -> Vec<YearFilter> {
        year_options(&self.publications)
    }

    /// Demo content shown until real lab data is supplied.
    pub fn demo() -> Self {
        Self {
            research_areas: vec![
                area(
                    "Condensed-Matter Physics",
                    "Structure–property relations in functional materials; defects, doping, interfaces.",
                    "🧪",
                ),
                area(
                    "2D Materials & Nanostructures",
                    "Graphene-like systems; growth, characterization, transport & optics.",
                    "🧩",
                ),
                area(
                    "Materials for Devices",
                    "Thin films, oxide semiconductors, optoelectronic & photonic applications.",
                    "💡",
                ),
                area(
                    "Theory–Experiment Bridge",
                    "Data-driven modeling, DFT-assisted insights, and experimental validation.",
                    "🔗",
                ),
            ],
            people: vec![
                Person {
                    name: "Prof. Debnarayan Jana".into(),
                    role: Role::Pi,
                    field: "Condensed-Matter Physics & Materials Science".into(),
                    email: Some("email@example.edu".into()),
                    img: None,
                    year: None,
                    links: links(&[
                        ("scholar", "https://scholar.google.com/citations?user=43SR0GsAAAAJ&hl=en"),
                        ("orcid", "https://orcid.org/"),
                    ]),
                },
                Person {
                    name: "Dr. B. Senior".into(),
                    role: Role::Postdoc,
                    field: "Oxide thin films".into(),
                    email: Some("b@example.edu".into()),
                    img: None,
                    year: None,
                    links: links(&[("github", "#")]),
                },
                Person {
                    name: "C. Student".into(),
                    role: Role::Phd,
                    field: "2D materials growth".into(),
                    email: Some("c@example.edu".into()),
                    img: None,
                    year: None,
                    links: links(&[("linkedin", "#")]),
                },
                Person {
                    name: "D. Alum".into(),
                    role: Role::Alumni,
                    field: "Device physics".into(),
                    email: Some("d@example.com".into()),
                    img: None,
                    year: Some(2024),
                    links: links(&[("website", "#")]),
                },
            ],
            courses: vec![
                Course {
                    code: "PHYS 6xx".into(),
                    title: "Advanced Condensed-Matter".into(),
                    term: "Spring 2025".into(),
                    syllabus: "#".into(),
                },
                Course {
                    code: "PHYS 7xx".into(),
                    title: "Functional Materials".into(),
                    term: "Fall 2024".into(),
                    syllabus: "#".into(),
                },
            ],
            publications: vec![
                Publication {
                    id: "1".into(),
                    title: "Role of Defects in Tailoring Structural, Electrical and Optical Properties of ZnO".into(),
                    authors: strings(&[
                        "S. Dutta",
                        "S. Chattopadhyay",
                        "A. Sarkar",
                        "M. Chakrabarti",
                        "D. Sanyal",
                        "Debnarayan Jana",
                    ]),
                    venue: Some("Progress in Materials Science".into()),
                    year: 2009,
                    doi: Some("10.1016/j.pmatsci.2008.07.002".into()),
                    url: Some("#".into()),
                    pdf: None,
                },
                Publication {
                    id: "2".into(),
                    title: "Optical/electrical behavior in oxide thin films".into(),
                    authors: strings(&["A. Researcher", "Debnarayan Jana"]),
                    venue: Some("Journal Example".into()),
                    year: 2014,
                    doi: Some("10.xxxx/xxxxx".into()),
                    url: None,
                    pdf: None,
                },
                Publication {
                    id: "3".into(),
                    title: "2D materials growth and transport".into(),
                    authors: strings(&["Debnarayan Jana"]),
                    venue: Some("Conference Example".into()),
                    year: 2018,
                    doi: None,
                    url: Some("#".into()),
                    pdf: None,
                },
            ],
        }
    }
}

fn ensure_unique<'a>(what: &str, keys: impl Iterator<Item = &'a str>) -> Result<()> {
    let mut seen = HashSet::new();
    for key in keys {
        if !seen.insert(key) {
            return Err(LabsiteError::Content(format!("duplicate {what}: {key}")));
        }
    }
    Ok(())
}

fn area(title: &str, description: &str, icon: &str) -> ResearchArea {
    ResearchArea {
        title: title.into(),
        description: description.into(),
        icon: icon.into(),
    }
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn links(pairs: &[(&str, &str)]) -> BTreeMap<String, String> {
    pairs.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect()
}
