//! Lab-specific copy shown on the homepage.
//!
//! Everything here has a default matching the demo lab, so a bare
//! `[site]` table (or none at all) renders a complete page.

use serde::{Deserialize, Serialize};

/// Names, blurbs, contact details and brand colours for one lab site.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SiteProfile {
    /// Brand link text in the navbar and footer
    #[serde(default = "default_lab_name")]
    pub lab_name: String,

    /// Hero headline; the word in `hero_accent` is highlighted
    #[serde(default = "default_hero_headline")]
    pub hero_headline: String,

    #[serde(default = "default_hero_accent")]
    pub hero_accent: String,

    #[serde(default = "default_hero_tagline")]
    pub hero_tagline: String,

    #[serde(default = "default_about_title")]
    pub about_title: String,

    #[serde(default = "default_about")]
    pub about: String,

    /// Postal address, one entry per line
    #[serde(default = "default_address")]
    pub address: Vec<String>,

    #[serde(default = "default_email")]
    pub email: String,

    /// Footer profile links as `(label, url)` pairs, in display order
    #[serde(default = "default_links")]
    pub links: Vec<ProfileLink>,

    /// Shown under the publications heading as "Synced from ..."
    #[serde(default = "default_publication_source")]
    pub publication_source: String,

    #[serde(default)]
    pub brand: Brand,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileLink {
    pub label: String,
    pub url: String,
}

fn default_lab_name() -> String { "Prof. Debnarayan Jana Lab".to_string() }
fn default_hero_headline() -> String { "Discover. Compute. Translate Physics.".to_string() }
fn default_hero_accent() -> String { "Translate".to_string() }
fn default_hero_tagline() -> String {
    "We explore materials and devices across growth, characterization, transport, and theory—linking fundamentals to applications.".to_string()
}
fn default_about_title() -> String { "About the Professor".to_string() }
fn default_about() -> String {
    "Prof. Debnarayan Jana’s group explores condensed-matter physics and materials science, \
     spanning thin films, nanostructures, 2D materials, and structure–property relationships \
     with applications in devices and photonics."
        .to_string()
}
fn default_address() -> Vec<String> {
    vec![
        "Department of Physics, University of Calcutta".to_string(),
        "Kolkata, India".to_string(),
    ]
}
fn default_email() -> String { "email@example.edu".to_string() }
fn default_links() -> Vec<ProfileLink> {
    [
        ("Google Scholar", "https://scholar.google.com/citations?user=43SR0GsAAAAJ&hl=en"),
        ("ORCID", "#"),
        ("GitHub", "#"),
    ]
    .into_iter()
    .map(|(label, url)| ProfileLink { label: label.to_string(), url: url.to_string() })
    .collect()
}
fn default_publication_source() -> String { "Google Scholar (mirrored manually)".to_string() }

impl Default for SiteProfile {
    fn default() -> Self {
        Self {
            lab_name: default_lab_name(),
            hero_headline: default_hero_headline(),
            hero_accent: default_hero_accent(),
            hero_tagline: default_hero_tagline(),
            about_title: default_about_title(),
            about: default_about(),
            address: default_address(),
            email: default_email(),
            links: default_links(),
            publication_source: default_publication_source(),
            brand: Brand::default(),
        }
    }
}

impl SiteProfile {
    /// Split the headline around the accent word: `(before, accent, after)`.
    /// Without a match the whole headline lands in `before`.
    pub fn headline_parts(&self) -> (&str, &str, &str) {
        let accent = self.hero_accent.as_str();
        match self.hero_headline.find(accent) {
            Some(start) if !accent.is_empty() => {
                let end = start + accent.len();
                (
                    &self.hero_headline[..start],
                    &self.hero_headline[start..end],
                    &self.hero_headline[end..],
                )
            }
            _ => (self.hero_headline.as_str(), "", ""),
        }
    }
}

// ── Brand ───────────────────────────────────────────────────────────────────

/// Colour tokens emitted as CSS custom properties.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Brand {
    #[serde(default = "default_primary")]
    pub primary: String,
    #[serde(default = "default_primary_accent")]
    pub primary_accent: String,
    #[serde(default = "default_bg")]
    pub bg: String,
    #[serde(default = "default_card")]
    pub card: String,
    #[serde(default = "default_text")]
    pub text: String,
    #[serde(default = "default_subtle")]
    pub subtle: String,
}

fn default_primary() -> String { "#1e40af".to_string() }
fn default_primary_accent() -> String { "#3b82f6".to_string() }
fn default_bg() -> String { "#0b1020".to_string() }
fn default_card() -> String { "#121a2a".to_string() }
fn default_text() -> String { "#e5e7eb".to_string() }
fn default_subtle() -> String { "#9ca3af".to_string() }

impl Default for Brand {
    fn default() -> Self {
        Self {
            primary: default_primary(),
            primary_accent: default_primary_accent(),
            bg: default_bg(),
            card: default_card(),
            text: default_text(),
            subtle: default_subtle(),
        }
    }
}

impl Brand {
    /// True when every token is a `#rgb` or `#rrggbb` hex colour.
    pub fn is_valid(&self) -> bool {
        [&self.primary, &self.primary_accent, &self.bg, &self.card, &self.text, &self.subtle]
            .iter()
            .all(|c| is_hex_colour(c))
    }
}

fn is_hex_colour(value: &str) -> bool {
    match value.strip_prefix('#') {
        Some(hex) => matches!(hex.len(), 3 | 6) && hex.chars().all(|c| c.is_ascii_hexdigit()),
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_profile() {
        let profile = SiteProfile::default();
        assert_eq!(profile.lab_name, "Prof. Debnarayan Jana Lab");
        assert_eq!(profile.links.len(), 3);
        assert!(profile.brand.is_valid());
    }

    #[test]
    fn test_headline_parts() {
        let profile = SiteProfile::default();
        assert_eq!(
            profile.headline_parts(),
            ("Discover. Compute. ", "Translate", " Physics.")
        );

        let plain = SiteProfile { hero_accent: "Nope".into(), ..SiteProfile::default() };
        assert_eq!(plain.headline_parts().0, plain.hero_headline);
        assert_eq!(plain.headline_parts().1, "");
    }

    #[test]
    fn test_partial_yaml_uses_defaults() {
        let profile: SiteProfile = serde_yaml::from_str("lab_name: Optics Lab\nbrand:\n  bg: '#000'\n").unwrap();
        assert_eq!(profile.lab_name, "Optics Lab");
        assert_eq!(profile.brand.bg, "#000");
        assert_eq!(profile.brand.text, "#e5e7eb");
        assert_eq!(profile.email, "email@example.edu");
    }

    #[test]
    fn test_brand_rejects_non_hex() {
        let brand = Brand { bg: "navy".into(), ..Brand::default() };
        assert!(!brand.is_valid());
    }
}
