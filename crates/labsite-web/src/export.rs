//! Static export. Writes the unfiltered page, its assets and JSON data dumps
//! into a directory that any static host can serve.

use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::{debug, info};

use labsite_common::error::LabsiteError;

use crate::assets::ASSETS;
use crate::error::Result;
use crate::state::AppState;
use crate::view::{Links, PageFilters, PageView};

#[derive(Debug, Clone)]
pub struct ExportOptions {
    pub out_dir: PathBuf,
    pub links: Links,
}

/// Files written by one export, in write order.
#[derive(Debug, Default)]
pub struct ExportReport {
    pub files: Vec<PathBuf>,
}

impl ExportReport {
    fn write(&mut self, path: PathBuf, contents: impl AsRef<[u8]>) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| LabsiteError::io(parent, e))?;
        }
        std::fs::write(&path, contents).map_err(|e| LabsiteError::io(&path, e))?;
        debug!("Wrote {}", path.display());
        self.files.push(path);
        Ok(())
    }

    fn write_json<T: Serialize + ?Sized>(&mut self, path: PathBuf, value: &T) -> Result<()> {
        let json = serde_json::to_string_pretty(value).map_err(LabsiteError::from)?;
        self.write(path, json)
    }
}

pub fn export_site(state: &AppState, options: &ExportOptions, current_year: i32) -> Result<ExportReport> {
    let out = &options.out_dir;
    std::fs::create_dir_all(out).map_err(|e| LabsiteError::io(out, e))?;

    let mut report = ExportReport::default();

    let filters = PageFilters::default();
    let view = PageView::build(
        &state.catalog,
        &state.year_options,
        &state.profile,
        &filters,
        &options.links,
        current_year,
    );
    report.write(out.join("index.html"), state.renderer.render_page(&view)?)?;

    for (path, contents) in ASSETS {
        report.write(out.join(path), contents)?;
    }

    let data = out.join("data");
    report.write_json(data.join("publications.json"), &state.catalog.publications)?;
    report.write_json(data.join("people.json"), &state.catalog.people)?;
    report.write_json(data.join("courses.json"), &state.catalog.courses)?;
    report.write_json(data.join("research.json"), &state.catalog.research_areas)?;

    // GitHub Pages would otherwise run the tree through Jekyll.
    report.write(out.join(".nojekyll"), "")?;

    if let Some(public) = &state.public_dir {
        copy_dir(public, out, &mut report)?;
    }

    info!(
        "Exported {} files to {} (base path {:?})",
        report.files.len(),
        out.display(),
        options.links.base_path
    );
    Ok(report)
}

fn copy_dir(from: &Path, to: &Path, report: &mut ExportReport) -> Result<()> {
    let entries = std::fs::read_dir(from).map_err(|e| LabsiteError::io(from, e))?;
    for entry in entries {
        let entry = entry.map_err(|e| LabsiteError::io(from, e))?;
        let source = entry.path();
        let target = to.join(entry.file_name());
        if source.is_dir() {
            copy_dir(&source, &target, report)?;
        } else {
            let bytes = std::fs::read(&source).map_err(|e| LabsiteError::io(&source, e))?;
            report.write(target, bytes)?;
        }
    }
    Ok(())
}
