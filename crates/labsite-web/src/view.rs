//! View models handed to the templates.
//!
//! Building a `PageView` is where the filters run: the catalog slices go in,
//! the filtered cards come out in source order.

use serde::Serialize;

use labsite_common::filter::{filter_people, haystack, PublicationQuery, RoleFilter, YearFilter};
use labsite_common::{Catalog, Course, Person, Publication, ResearchArea, SiteProfile};

/// In-page anchors, in navbar order. `home` is the brand link.
pub const SECTIONS: [NavLink; 6] = [
    NavLink { label: "About", id: "about" },
    NavLink { label: "Research", id: "research" },
    NavLink { label: "Group", id: "group" },
    NavLink { label: "Teaching", id: "teaching" },
    NavLink { label: "Publications", id: "publications" },
    NavLink { label: "Contact", id: "contact" },
];

pub const NO_PUBLICATIONS: &str = "No publications match your filter.";
pub const NO_PEOPLE: &str = "No people match this role.";

#[derive(Debug, Clone, Copy, Serialize)]
pub struct NavLink {
    pub label: &'static str,
    pub id: &'static str,
}

/// How site-relative URLs are written: `""` when served, the configured
/// base path when exported.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Links {
    pub base_path: String,
    pub trailing_slash: bool,
}

impl Links {
    pub fn server() -> Self {
        Self { base_path: String::new(), trailing_slash: true }
    }

    pub fn new(base_path: impl Into<String>, trailing_slash: bool) -> Self {
        Self { base_path: base_path.into(), trailing_slash }
    }

    /// URL of the homepage itself; filter forms submit here.
    pub fn page(&self) -> String {
        if self.trailing_slash || self.base_path.is_empty() {
            format!("{}/", self.base_path)
        } else {
            self.base_path.clone()
        }
    }

    /// Prefix root-relative paths with the base path; leave the rest alone.
    pub fn asset(&self, path: &str) -> String {
        if path.starts_with('/') && !path.starts_with("//") {
            format!("{}{}", self.base_path, path)
        } else {
            path.to_string()
        }
    }
}

/// Filter state for one render. Parsed from the query string when served.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PageFilters {
    pub publications: PublicationQuery,
    pub role: RoleFilter,
}

#[derive(Debug, Serialize)]
pub struct FilterOption {
    pub value: String,
    pub selected: bool,
}

#[derive(Debug, Serialize)]
pub struct LinkView<'a> {
    pub label: &'a str,
    pub url: String,
}

#[derive(Debug, Serialize)]
pub struct HeadlineView<'a> {
    pub before: &'a str,
    pub accent: &'a str,
    pub after: &'a str,
}

#[derive(Debug, Serialize)]
pub struct PersonCard<'a> {
    pub key: &'a str,
    pub name: &'a str,
    pub role: &'static str,
    pub field: &'a str,
    pub email: Option<&'a str>,
    pub img: Option<String>,
    pub alumni_year: Option<i32>,
    pub links: Vec<LinkView<'a>>,
}

impl<'a> PersonCard<'a> {
    fn new(person: &'a Person, links: &Links) -> Self {
        Self {
            key: &person.name,
            name: &person.name,
            role: person.role.label(),
            field: &person.field,
            email: person.email.as_deref(),
            img: person.img.as_deref().filter(|s| !s.is_empty()).map(|s| links.asset(s)),
            alumni_year: person.year,
            links: person
                .links
                .iter()
                .map(|(label, url)| LinkView { label, url: links.asset(url) })
                .collect(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct CourseCard<'a> {
    pub key: &'a str,
    pub code: &'a str,
    pub title: &'a str,
    pub term: &'a str,
    pub syllabus: String,
}

impl<'a> CourseCard<'a> {
    fn new(course: &'a Course, links: &Links) -> Self {
        Self {
            key: &course.code,
            code: &course.code,
            title: &course.title,
            term: &course.term,
            syllabus: links.asset(&course.syllabus),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct PublicationCard<'a> {
    pub key: &'a str,
    pub title: &'a str,
    pub authors: String,
    pub venue: Option<&'a str>,
    pub year: i32,
    pub pdf: Option<String>,
    pub doi_url: Option<String>,
    pub url: Option<String>,
    /// Lowercased match text; the browser script filters on it
    pub haystack: String,
}

impl<'a> PublicationCard<'a> {
    fn new(publication: &'a Publication, links: &Links) -> Self {
        Self {
            key: &publication.id,
            title: &publication.title,
            authors: publication.author_line(),
            venue: publication.venue.as_deref(),
            year: publication.year,
            pdf: publication.pdf.as_deref().map(|s| links.asset(s)),
            doi_url: publication.doi_url(),
            url: publication.url.as_deref().map(|s| links.asset(s)),
            haystack: haystack(publication),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct GroupView<'a> {
    pub selected: String,
    pub roles: Vec<FilterOption>,
    pub people: Vec<PersonCard<'a>>,
    /// True when no role is selected, so every card is on the page
    pub complete: bool,
    pub empty_text: &'static str,
}

#[derive(Debug, Serialize)]
pub struct PublicationsView<'a> {
    pub query: &'a str,
    pub selected_year: String,
    pub years: Vec<FilterOption>,
    pub items: Vec<PublicationCard<'a>>,
    pub total: usize,
    pub source: &'a str,
    pub complete: bool,
    pub empty_text: &'static str,
}

#[derive(Debug, Serialize)]
pub struct PageView<'a> {
    pub profile: &'a SiteProfile,
    pub headline: HeadlineView<'a>,
    pub sections: &'static [NavLink],
    pub page_href: String,
    pub stylesheet_href: String,
    pub script_href: String,
    pub current_year: i32,
    pub contact_links: Vec<LinkView<'a>>,
    pub research_areas: &'a [ResearchArea],
    pub courses: Vec<CourseCard<'a>>,
    pub group: GroupView<'a>,
    pub publications: PublicationsView<'a>,
}

impl<'a> PageView<'a> {
    pub fn build(
        catalog: &'a Catalog,
        year_options: &[YearFilter],
        profile: &'a SiteProfile,
        filters: &'a PageFilters,
        links: &Links,
        current_year: i32,
    ) -> Self {
        let (before, accent, after) = profile.headline_parts();

        let people = filter_people(&catalog.people, filters.role)
            .into_iter()
            .map(|p| PersonCard::new(p, links))
            .collect();

        let items: Vec<PublicationCard<'a>> = filters
            .publications
            .apply(&catalog.publications)
            .into_iter()
            .map(|p| PublicationCard::new(p, links))
            .collect();

        Self {
            profile,
            headline: HeadlineView { before, accent, after },
            sections: &SECTIONS,
            page_href: links.page(),
            stylesheet_href: links.asset("/static/css/site.css"),
            script_href: links.asset("/static/js/filter.js"),
            current_year,
            contact_links: profile
                .links
                .iter()
                .map(|l| LinkView { label: &l.label, url: links.asset(&l.url) })
                .collect(),
            research_areas: &catalog.research_areas,
            courses: catalog.courses.iter().map(|c| CourseCard::new(c, links)).collect(),
            group: GroupView {
                selected: filters.role.to_string(),
                roles: RoleFilter::options()
                    .into_iter()
                    .map(|r| FilterOption { value: r.to_string(), selected: r == filters.role })
                    .collect(),
                people,
                complete: filters.role == RoleFilter::All,
                empty_text: NO_PEOPLE,
            },
            publications: PublicationsView {
                query: &filters.publications.text,
                selected_year: filters.publications.year.to_string(),
                years: year_choices(year_options, filters.publications.year),
                total: items.len(),
                items,
                source: &profile.publication_source,
                complete: filters.publications == PublicationQuery::default(),
                empty_text: NO_PUBLICATIONS,
            },
        }
    }
}

/// Options for the year select. A requested year no publication carries is
/// slotted into its descending position so the select still shows it.
fn year_choices(year_options: &[YearFilter], selected: YearFilter) -> Vec<FilterOption> {
    let mut years = year_options.to_vec();
    if let YearFilter::Year(wanted) = selected {
        if !years.contains(&selected) {
            let at = years
                .iter()
                .position(|y| matches!(y, YearFilter::Year(year) if *year < wanted))
                .unwrap_or(years.len());
            years.insert(at, selected);
        }
    }
    years
        .into_iter()
        .map(|y| FilterOption { value: y.to_string(), selected: y == selected })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use labsite_common::site_profile::ProfileLink;
    use labsite_common::Role;

    #[test]
    fn test_links_server_and_export() {
        let server = Links::server();
        assert_eq!(server.page(), "/");
        assert_eq!(server.asset("/static/css/site.css"), "/static/css/site.css");

        let pages = Links::new("/prof-lab", true);
        assert_eq!(pages.page(), "/prof-lab/");
        assert_eq!(pages.asset("/img/jana.jpg"), "/prof-lab/img/jana.jpg");
        assert_eq!(pages.asset("https://orcid.org/"), "https://orcid.org/");
        assert_eq!(pages.asset("#"), "#");
        assert_eq!(pages.asset("//cdn.example.org/x"), "//cdn.example.org/x");

        assert_eq!(Links::new("/prof-lab", false).page(), "/prof-lab");
        assert_eq!(Links::new("", false).page(), "/");
    }

    #[test]
    fn test_build_applies_filters() {
        let catalog = Catalog::demo();
        let profile = SiteProfile::default();
        let filters = PageFilters {
            publications: PublicationQuery::new("2d", YearFilter::All),
            role: RoleFilter::Only(Role::Alumni),
        };
        let years = catalog.year_options();
        let view = PageView::build(&catalog, &years, &profile, &filters, &Links::server(), 2026);

        assert_eq!(view.publications.total, 1);
        assert_eq!(view.publications.items[0].key, "3");
        assert_eq!(view.group.people.len(), 1);
        assert_eq!(view.group.people[0].alumni_year, Some(2024));
        assert!(view.group.roles.iter().any(|r| r.value == "Alumni" && r.selected));
        assert!(view.publications.years.iter().any(|y| y.value == "All" && y.selected));
    }

    #[test]
    fn test_publication_card_optional_links() {
        let catalog = Catalog::demo();
        let card = PublicationCard::new(&catalog.publications[1], &Links::server());
        assert_eq!(card.doi_url.as_deref(), Some("https://doi.org/10.xxxx/xxxxx"));
        assert!(card.url.is_none());
        assert!(card.pdf.is_none());
        assert_eq!(card.authors, "A. Researcher, Debnarayan Jana");
    }

    #[test]
    fn test_unlisted_year_stays_selected() {
        let catalog = Catalog::demo();
        let profile = SiteProfile::default();
        let years = catalog.year_options();
        let filters = PageFilters {
            publications: PublicationQuery::new("", YearFilter::Year(2010)),
            role: RoleFilter::All,
        };
        let view = PageView::build(&catalog, &years, &profile, &filters, &Links::server(), 2026);

        let values: Vec<&str> = view.publications.years.iter().map(|y| y.value.as_str()).collect();
        assert_eq!(values, vec!["All", "2018", "2014", "2010", "2009"]);
        let selected: Vec<&str> = view
            .publications
            .years
            .iter()
            .filter(|y| y.selected)
            .map(|y| y.value.as_str())
            .collect();
        assert_eq!(selected, vec!["2010"]);
        assert_eq!(view.publications.total, 0);
    }

    #[test]
    fn test_year_older_than_every_publication_goes_last() {
        let years = Catalog::demo().year_options();
        let choices = year_choices(&years, YearFilter::Year(1999));
        assert_eq!(choices.last().map(|c| (c.value.as_str(), c.selected)), Some(("1999", true)));
        assert_eq!(choices.len(), 5);
    }

    #[test]
    fn test_site_urls_carry_base_path() {
        let mut catalog = Catalog::demo();
        catalog.courses[0].syllabus = "/syllabi/phys6.pdf".into();
        let mut profile = SiteProfile::default();
        profile.links = vec![ProfileLink { label: "ORCID".into(), url: "/orcid.html".into() }];
        let years = catalog.year_options();
        let filters = PageFilters::default();
        let links = Links::new("/prof-lab", true);
        let view = PageView::build(&catalog, &years, &profile, &filters, &links, 2026);

        assert_eq!(view.courses[0].syllabus, "/prof-lab/syllabi/phys6.pdf");
        assert_eq!(view.courses[1].syllabus, catalog.courses[1].syllabus);
        assert_eq!(view.contact_links[0].url, "/prof-lab/orcid.html");
        assert_eq!(view.contact_links[0].label, "ORCID");
    }
}
