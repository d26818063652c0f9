//! The four booking sources and the load cycle that merges them.

use crate::core::parser::parse_bookings;
use crate::errors::{AppError, AppResult};
use crate::models::booking::{Booking, PartitionedBookings};
use crate::models::brand::Brand;
use std::future::Future;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceKind {
    Confirmed,
    Cancelled,
}

/// One named source file, tagged with the brand and partition it feeds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceFile {
    pub name: String,
    pub brand: Brand,
    pub kind: SourceKind,
}

impl SourceFile {
    pub fn new(name: impl Into<String>, brand: Brand, kind: SourceKind) -> Self {
        Self {
            name: name.into(),
            brand,
            kind,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceSet {
    pub colab: SourceFile,
    pub xcolab: SourceFile,
    pub itcd: SourceFile,
    pub xitcd: SourceFile,
}

impl Default for SourceSet {
    fn default() -> Self {
        Self::new("colab.csv", "xcolab.csv", "itcd.csv", "xitcd.csv")
    }
}

impl SourceSet {
    pub fn new(colab: &str, xcolab: &str, itcd: &str, xitcd: &str) -> Self {
        Self {
            colab: SourceFile::new(colab, Brand::Colab, SourceKind::Confirmed),
            xcolab: SourceFile::new(xcolab, Brand::Colab, SourceKind::Cancelled),
            itcd: SourceFile::new(itcd, Brand::Itcd, SourceKind::Confirmed),
            xitcd: SourceFile::new(xitcd, Brand::Itcd, SourceKind::Cancelled),
        }
    }

    pub fn files(&self) -> [&SourceFile; 4] {
        [&self.colab, &self.xcolab, &self.itcd, &self.xitcd]
    }
}

/// Where source text comes from. Implementations report failures as
/// `AppError::Retrieval` carrying the source name.
pub trait Fetcher {
    fn fetch(&self, source: &SourceFile) -> impl Future<Output = AppResult<String>>;
}

/// Reads sources from a directory on disk.
#[derive(Debug, Clone)]
pub struct FsFetcher {
    base_dir: PathBuf,
}

impl FsFetcher {
    pub fn new(base_dir: impl AsRef<Path>) -> Self {
        Self {
            base_dir: base_dir.as_ref().to_path_buf(),
        }
    }
}

impl Fetcher for FsFetcher {
    async fn fetch(&self, source: &SourceFile) -> AppResult<String> {
        let path = self.base_dir.join(&source.name);
        debug!(path = %path.display(), "fetching source");

        let text = tokio::fs::read_to_string(&path)
            .await
            .map_err(|e| AppError::retrieval(&source.name, e))?;

        debug!(
            source = %source.name,
            length = text.len(),
            first_lines = ?text.lines().take(2).collect::<Vec<_>>(),
            "source loaded"
        );
        Ok(text)
    }
}

/// Run one load cycle.
///
/// The four fetches run concurrently and must all succeed; the first
/// failure aborts the cycle and nothing is returned for the others.
/// Confirmed = colab ++ itcd, cancelled = xcolab ++ xitcd.
pub async fn load_all<F: Fetcher>(fetcher: &F, sources: &SourceSet) -> AppResult<PartitionedBookings> {
    info!("loading all booking sources");

    let (colab, xcolab, itcd, xitcd) = tokio::try_join!(
        fetcher.fetch(&sources.colab),
        fetcher.fetch(&sources.xcolab),
        fetcher.fetch(&sources.itcd),
        fetcher.fetch(&sources.xitcd),
    )?;

    let confirmed = concat(
        parse_bookings(&colab, &sources.colab.name)?,
        parse_bookings(&itcd, &sources.itcd.name)?,
    );
    let cancelled = concat(
        parse_bookings(&xcolab, &sources.xcolab.name)?,
        parse_bookings(&xitcd, &sources.xitcd.name)?,
    );

    info!(
        confirmed = confirmed.len(),
        cancelled = cancelled.len(),
        "finished loading bookings"
    );

    Ok(PartitionedBookings::new(confirmed, cancelled))
}

fn concat(mut first: Vec<Booking>, second: Vec<Booking>) -> Vec<Booking> {
    first.extend(second);
    first
}
