//! Partition discovery under a corpus root.
//!
//! Plain files directly under the root count as partitions, as do files one
//! directory level down (the directory becomes the partition's group label).
//! Archives are skipped and listing order is sorted, so repeated runs see
//! identical partitions in identical order.
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use log::debug;

use crate::error::Error;
use crate::lexicon::title_case;
use crate::sources::Review;

/// Archive suffixes never treated as partitions.
const SKIPPED_SUFFIXES: &[&str] = &["rar", "zip", "gz"];

/// Identity of one partition in outputs and logs: source document label plus
/// group (parent directory) label, the latter empty for root-level files.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct PartitionId {
    pub source: String,
    pub group: String,
}

impl PartitionId {
    fn for_path(path: &Path, root: &Path) -> Self {
        let source = path
            .file_stem()
            .map(|stem| label(&stem.to_string_lossy()))
            .unwrap_or_default();
        let group = path
            .parent()
            .filter(|parent| *parent != root)
            .and_then(|parent| parent.file_name())
            .map(|name| label(&name.to_string_lossy()))
            .unwrap_or_default();
        Self { source, group }
    }
}

impl fmt::Display for PartitionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.group.is_empty() {
            write!(f, "{}", self.source)
        } else {
            write!(f, "{}/{}", self.group, self.source)
        }
    }
}

/// Display label from a path component: separators to spaces, title-cased.
fn label(component: &str) -> String {
    title_case(&component.replace(['_', '-'], " "))
}

/// One processable corpus partition.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct Partition {
    pub id: PartitionId,
    pub path: PathBuf,
}

impl Partition {
    /// Read and parse this partition's review lines. The file is decoded as
    /// UTF-8 with invalid sequences replaced.
    pub fn reviews(&self) -> Result<Vec<Review>, Error> {
        let bytes = fs::read(&self.path)?;
        Ok(Review::parse_document(&String::from_utf8_lossy(&bytes)))
    }
}

/// The partition files found under a corpus root.
#[derive(Debug)]
pub struct ReviewCorpus {
    partitions: Vec<Partition>,
}

impl ReviewCorpus {
    /// Lists the corpus under `root`.
    ///
    /// Fails if the root cannot be read or holds no processable partition,
    /// so a mistyped or empty corpus path surfaces before any mining starts.
    pub fn discover(root: &Path) -> Result<Self, Error> {
        let mut partitions = Vec::new();
        for path in sorted_entries(root)? {
            if path.is_dir() {
                for child in sorted_entries(&path)? {
                    if child.is_file() {
                        push_partition(&mut partitions, child, root);
                    }
                }
            } else if path.is_file() {
                push_partition(&mut partitions, path, root);
            }
        }
        if partitions.is_empty() {
            return Err(Error::EmptyCorpus(root.to_path_buf()));
        }
        Ok(Self { partitions })
    }

    pub fn partitions(&self) -> &[Partition] {
        &self.partitions
    }

    pub fn len(&self) -> usize {
        self.partitions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.partitions.is_empty()
    }
}

fn sorted_entries(dir: &Path) -> Result<Vec<PathBuf>, Error> {
    let mut entries: Vec<PathBuf> = fs::read_dir(dir)?
        .map(|entry| entry.map(|e| e.path()))
        .collect::<Result<_, _>>()?;
    entries.sort();
    Ok(entries)
}

fn push_partition(partitions: &mut Vec<Partition>, path: PathBuf, root: &Path) {
    if skipped(&path) {
        debug!("skipping archive {:?}", path);
        return;
    }
    let id = PartitionId::for_path(&path, root);
    partitions.push(Partition { id, path });
}

fn skipped(path: &Path) -> bool {
    path.extension()
        .map(|ext| {
            let ext = ext.to_string_lossy().to_lowercase();
            SKIPPED_SUFFIXES.iter().any(|suffix| *suffix == ext)
        })
        .unwrap_or(false)
}
