//! @ai:module:intent Collect run records from explicit files or approach directories
//! @ai:module:layer infrastructure
//! @ai:module:public_api InputCollector
//! @ai:module:stateless true

use crate::error::{Error, Result};
use crate::metrics::ApproachRuns;
use crate::record::{directory_approach_name, file_approach_name, FlatRecord, RecordLoaderTrait};
use regex::Regex;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// @ai:intent Turns command-line inputs into per-approach run lists
pub struct InputCollector<L: RecordLoaderTrait> {
    loader: L,
    pattern: Regex,
}

impl<L: RecordLoaderTrait> InputCollector<L> {
    /// @ai:intent Create a collector that matches run files against `pattern`
    /// @ai:effects pure
    pub fn new(loader: L, pattern: Regex) -> Self {
        Self { loader, pattern }
    }

    /// @ai:intent One run per file; files naming the same approach are grouped
    /// @ai:effects fs:read
    pub fn collect_files(&self, paths: &[PathBuf]) -> Result<Vec<ApproachRuns>> {
        let mut approaches: Vec<ApproachRuns> = Vec::new();

        for path in paths {
            let Some((approach, record)) = self.load_file(path, None)? else {
                continue;
            };

            match approaches.iter_mut().find(|a| a.approach == approach) {
                Some(existing) => {
                    tracing::info!(
                        "{} repeats approach {}; averaging with earlier runs",
                        path.display(),
                        approach
                    );
                    existing.records.push(record);
                }
                None => {
                    let mut runs = ApproachRuns::new(approach);
                    runs.records.push(record);
                    approaches.push(runs);
                }
            }
        }

        Ok(approaches)
    }

    /// @ai:intent One approach per directory, one run per matching file inside it
    /// @ai:effects fs:read
    pub fn collect_directories(&self, dirs: &[PathBuf]) -> Result<Vec<ApproachRuns>> {
        let mut approaches = Vec::with_capacity(dirs.len());

        for dir in dirs {
            if !dir.is_dir() {
                let err = Error::MissingInput { path: dir.clone() };
                tracing::warn!("Skipping {}", err);
                continue;
            }

            let approach = directory_approach_name(dir);
            let files = self.find_run_files(dir);
            tracing::info!(
                "Found {} run file(s) for {} in {}",
                files.len(),
                approach,
                dir.display()
            );

            let mut runs = ApproachRuns::new(approach.clone());
            for path in &files {
                if let Some((_, record)) = self.load_file(path, Some(&approach))? {
                    runs.records.push(record);
                }
            }

            approaches.push(runs);
        }

        Ok(approaches)
    }

    /// @ai:intent Matching run files directly inside `dir`, sorted by name
    /// @ai:effects fs:read
    fn find_run_files(&self, dir: &Path) -> Vec<PathBuf> {
        let mut files: Vec<PathBuf> = WalkDir::new(dir)
            .min_depth(1)
            .max_depth(1)
            .into_iter()
            .filter_map(|e| e.ok())
            .filter(|e| e.file_type().is_file())
            .filter(|e| {
                e.file_name()
                    .to_str()
                    .map(|name| self.pattern.is_match(name))
                    .unwrap_or(false)
            })
            .map(|e| e.path().to_path_buf())
            .collect();

        files.sort();
        files
    }

    /// @ai:intent Load and flatten one file; recoverable failures are logged and skipped
    /// @ai:effects fs:read
    fn load_file(
        &self,
        path: &Path,
        approach: Option<&str>,
    ) -> Result<Option<(String, FlatRecord)>> {
        match self.try_load_file(path, approach) {
            Ok(loaded) => Ok(Some(loaded)),
            Err(e) if e.is_recoverable() => {
                tracing::warn!("Skipping {}: {}", path.display(), e);
                Ok(None)
            }
            Err(e) => Err(e),
        }
    }

    fn try_load_file(&self, path: &Path, approach: Option<&str>) -> Result<(String, FlatRecord)> {
        tracing::info!("Loading metrics from: {}", path.display());

        let raw = self.loader.load(path)?;
        let approach = match approach {
            Some(name) => name.to_string(),
            None => file_approach_name(&raw, path),
        };
        let record = self.loader.flatten(&raw, &approach);

        Ok((approach, record))
    }
}
