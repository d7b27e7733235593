//! Template rendering.
//!
//! Templates are embedded at build time. When a templates directory is
//! configured, files there with the same name win over the embedded copy.

use std::path::Path;

use minijinja::Environment;

use crate::error::Result;
use crate::view::PageView;

pub const PAGE_TEMPLATE: &str = "page.html";

const EMBEDDED: [(&str, &str); 4] = [
    ("page.html", include_str!("../templates/page.html")),
    ("nav.html", include_str!("../templates/nav.html")),
    ("group.html", include_str!("../templates/group.html")),
    ("publications.html", include_str!("../templates/publications.html")),
];

fn embedded_template(name: &str) -> Option<&'static str> {
    EMBEDDED.iter().find(|(n, _)| *n == name).map(|(_, src)| *src)
}

pub struct Renderer {
    env: Environment<'static>,
}

impl Renderer {
    pub fn new(templates_dir: Option<&Path>) -> Result<Self> {
        let mut env = Environment::new();

        let disk = templates_dir.map(|dir| {
            tracing::info!("Template overrides enabled from {}", dir.display());
            minijinja::path_loader(dir.to_path_buf())
        });
        env.set_loader(move |name| {
            if let Some(disk) = &disk {
                if let Some(source) = disk(name)? {
                    return Ok(Some(source));
                }
            }
            Ok(embedded_template(name).map(str::to_string))
        });

        let renderer = Self { env };
        // Fail at startup rather than on the first request.
        renderer.env.get_template(PAGE_TEMPLATE)?;
        Ok(renderer)
    }

    pub fn embedded() -> Result<Self> {
        Self::new(None)
    }

    pub fn render_page(&self, view: &PageView<'_>) -> Result<String> {
        let template = self.env.get_template(PAGE_TEMPLATE)?;
        Ok(template.render(view)?)
    }
}
