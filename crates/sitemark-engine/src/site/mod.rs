//! Page templating and content-tree helpers for building a static site.

use std::fs;
use std::path::{Path, PathBuf};

use crate::{ConvertError, extract_title, markdown_to_html};

pub const TITLE_PLACEHOLDER: &str = "{{ Title }}";
pub const CONTENT_PLACEHOLDER: &str = "{{ Content }}";

#[derive(Debug, thiserror::Error)]
pub enum SiteError {
    #[error("Failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Failed to convert {path}: {source}")]
    Convert {
        path: PathBuf,
        source: ConvertError,
    },
    #[error("Directory not found: {0}")]
    MissingDir(PathBuf),
}

/// Substitutes the title, then the content, into every placeholder.
pub fn fill_template(template: &str, title: &str, html: &str) -> String {
    template
        .replace(TITLE_PLACEHOLDER, title)
        .replace(CONTENT_PLACEHOLDER, html)
}

/// Renders a markdown document into a complete page.
pub fn render_page(markdown: &str, template: &str) -> Result<String, ConvertError> {
    let html = markdown_to_html(markdown)?;
    let title = extract_title(markdown)?;
    Ok(fill_template(template, &title, &html))
}

/// Converts the markdown file at `from` into an HTML page at `dest`.
pub fn generate_page(from: &Path, template_path: &Path, dest: &Path) -> Result<(), SiteError> {
    log::info!(
        "Generating page from {} to {} using {}",
        from.display(),
        dest.display(),
        template_path.display()
    );
    let markdown = read(from)?;
    let template = read(template_path)?;

    let page = render_page(&markdown, &template).map_err(|source| SiteError::Convert {
        path: from.to_path_buf(),
        source,
    })?;

    if let Some(parent) = dest.parent() {
        fs::create_dir_all(parent).map_err(|source| SiteError::Write {
            path: parent.to_path_buf(),
            source,
        })?;
    }
    fs::write(dest, format!("{page}\n")).map_err(|source| SiteError::Write {
        path: dest.to_path_buf(),
        source,
    })
}

/// Pages written by a batch build and the documents that failed.
#[derive(Debug, Default)]
pub struct SiteReport {
    pub written: Vec<PathBuf>,
    pub failures: Vec<SiteError>,
}

impl SiteReport {
    pub fn is_success(&self) -> bool {
        self.failures.is_empty()
    }
}

/// Generates a page for every `.md` file under `content_dir`, mirroring the
/// folder layout under `dest_dir`.
///
/// A failing document is logged and recorded in the report; the remaining
/// documents are still generated. Only an unreadable `content_dir` is an
/// error.
pub fn generate_pages_recursive(
    content_dir: &Path,
    template_path: &Path,
    dest_dir: &Path,
) -> Result<SiteReport, SiteError> {
    let mut report = SiteReport::default();
    walk_pages(content_dir, template_path, dest_dir, &mut report)?;
    Ok(report)
}

fn walk_pages(
    content_dir: &Path,
    template_path: &Path,
    dest_dir: &Path,
    report: &mut SiteReport,
) -> Result<(), SiteError> {
    for entry in sorted_entries(content_dir)? {
        let name = entry.file_name().map(PathBuf::from).unwrap_or_default();
        if entry.is_dir() {
            if let Err(e) = walk_pages(&entry, template_path, &dest_dir.join(&name), report) {
                log::error!("{e}");
                report.failures.push(e);
            }
        } else if entry.extension().is_some_and(|ext| ext == "md") {
            let dest = dest_dir.join(name).with_extension("html");
            match generate_page(&entry, template_path, &dest) {
                Ok(()) => report.written.push(dest),
                Err(e) => {
                    log::error!("{e}");
                    report.failures.push(e);
                }
            }
        }
    }
    Ok(())
}

/// Recursively copies `source` into `destination`. Returns the copied file paths.
pub fn copy_static(source: &Path, destination: &Path) -> Result<Vec<PathBuf>, SiteError> {
    fs::create_dir_all(destination).map_err(|source| SiteError::Write {
        path: destination.to_path_buf(),
        source,
    })?;

    let mut copied = vec![];
    for entry in sorted_entries(source)? {
        let Some(name) = entry.file_name() else {
            continue;
        };
        let target = destination.join(name);
        if entry.is_dir() {
            copied.extend(copy_static(&entry, &target)?);
        } else {
            log::info!("Copying {} to {}", entry.display(), target.display());
            fs::copy(&entry, &target).map_err(|source| SiteError::Write {
                path: target.clone(),
                source,
            })?;
            copied.push(target);
        }
    }
    Ok(copied)
}

/// Deletes a directory tree if it exists.
pub fn clean_dir(path: &Path) -> Result<(), SiteError> {
    if !path.exists() {
        return Ok(());
    }
    log::info!("Deleting {}", path.display());
    fs::remove_dir_all(path).map_err(|source| SiteError::Write {
        path: path.to_path_buf(),
        source,
    })
}

fn read(path: &Path) -> Result<String, SiteError> {
    fs::read_to_string(path).map_err(|source| SiteError::Read {
        path: path.to_path_buf(),
        source,
    })
}

fn sorted_entries(dir: &Path) -> Result<Vec<PathBuf>, SiteError> {
    if !dir.is_dir() {
        return Err(SiteError::MissingDir(dir.to_path_buf()));
    }
    let read_err = |source: std::io::Error| SiteError::Read {
        path: dir.to_path_buf(),
        source,
    };
    let mut entries = fs::read_dir(dir)
        .map_err(read_err)?
        .map(|entry| entry.map(|e| e.path()).map_err(read_err))
        .collect::<Result<Vec<_>, _>>()?;
    entries.sort();
    Ok(entries)
}
