// catalog.rs
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

use crate::domain::filter::FilterSelection;
use crate::domain::listing::ListingItem;

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("catalog not found: {}", .0.display())]
    NotFound(PathBuf),
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// A catalog file holds either one listing or an array of them.
#[derive(Deserialize)]
#[serde(untagged)]
enum CatalogFile {
    Many(Vec<ListingItem>),
    One(Box<ListingItem>),
}

/// The listings the directory shows, loaded once and never mutated.
///
/// Positions in `items` are the listing ids used by the page.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    items: Vec<ListingItem>,
}

impl Catalog {
    pub fn new(items: Vec<ListingItem>) -> Self {
        Self { items }
    }

    /// Loads from a JSON file, or from a directory of `<topic>/<id>.json`
    /// files as written by the scraper pipeline.
    ///
    /// A bad single file is an error. Inside a directory bad files are
    /// skipped with a warning.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(CatalogError::NotFound(path.to_path_buf()));
        }

        let catalog = if path.is_dir() {
            Self::load_dir(path)?
        } else {
            Self::new(read_file(path)?)
        };

        log::info!(
            "Loaded {} listings from {}",
            catalog.len(),
            path.display()
        );
        Ok(catalog)
    }

    fn load_dir(root: &Path) -> Result<Self, CatalogError> {
        let mut items = Vec::new();
        let mut per_topic: BTreeMap<String, usize> = BTreeMap::new();

        for file in json_files(root)? {
            match read_file(&file) {
                Ok(mut parsed) => {
                    *per_topic.entry(topic_of(root, &file)).or_default() += parsed.len();
                    items.append(&mut parsed);
                }
                Err(e) => log::warn!("Skipping catalog file: {e}"),
            }
        }

        for (topic, count) in &per_topic {
            log::debug!("Topic {topic}: {count} listings");
        }

        Ok(Self::new(items))
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&ListingItem> {
        self.items.get(index)
    }

    /// Distinct category tags in order of first appearance.
    pub fn categories(&self) -> Vec<&str> {
        let mut seen: Vec<&str> = Vec::new();
        for tag in self.items.iter().flat_map(|item| item.category.iter()) {
            if !seen.contains(&tag.as_str()) {
                seen.push(tag);
            }
        }
        seen
    }

    /// Listings passing `selection`, with their catalog positions.
    pub fn filtered(&self, selection: &FilterSelection) -> Vec<(usize, &ListingItem)> {
        self.items
            .iter()
            .enumerate()
            .filter(|(_, item)| selection.matches(item))
            .collect()
    }
}

fn read_file(path: &Path) -> Result<Vec<ListingItem>, CatalogError> {
    let raw = fs::read_to_string(path).map_err(|source| CatalogError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let parsed: CatalogFile =
        serde_json::from_str(&raw).map_err(|source| CatalogError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
    Ok(match parsed {
        CatalogFile::Many(items) => items,
        CatalogFile::One(item) => vec![*item],
    })
}

fn is_json(path: &Path) -> bool {
    path.is_file() && path.extension().is_some_and(|ext| ext == "json")
}

fn list_dir(path: &Path) -> Result<Vec<PathBuf>, CatalogError> {
    let entries = fs::read_dir(path).map_err(|source| CatalogError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(entries.filter_map(|e| e.ok().map(|e| e.path())).collect())
}

/// `.json` files directly under `root` and one level down, sorted.
fn json_files(root: &Path) -> Result<Vec<PathBuf>, CatalogError> {
    let mut files = Vec::new();
    for path in list_dir(root)? {
        if path.is_dir() {
            files.extend(list_dir(&path)?.into_iter().filter(|p| is_json(p)));
        } else if is_json(&path) {
            files.push(path);
        }
    }
    files.sort();
    Ok(files)
}

fn topic_of(root: &Path, file: &Path) -> String {
    file.parent()
        .filter(|parent| *parent != root)
        .and_then(|parent| parent.file_name())
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| "(root)".to_string())
}
