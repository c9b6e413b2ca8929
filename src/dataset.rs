//! Labelled image folders and batch evaluation.

use crate::detection::{LineDetector, RegionSegmenter};
use crate::detector::TableFitDetector;
use crate::error::FitError;
use crate::image::io::load_rgb_image;
use crate::types::{FitReport, Verdict};
use image::RgbImage;
use log::{debug, warn};
use rayon::prelude::*;
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};

pub struct DatasetImage {
    /// File name inside the dataset folder.
    pub name: String,
    pub image: RgbImage,
}

/// Decodes every image file in `dir`, sorted by file name.
///
/// Files that cannot be decoded are skipped with a warning; only a missing
/// or unreadable directory is an error.
pub fn read_images(dir: &Path) -> Result<Vec<DatasetImage>, String> {
    let entries = fs::read_dir(dir)
        .map_err(|e| format!("Failed to read dataset {}: {e}", dir.display()))?;
    let mut paths: Vec<PathBuf> = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|e| format!("Failed to list {}: {e}", dir.display()))?;
        let path = entry.path();
        if path.is_file() {
            paths.push(path);
        }
    }
    paths.sort();

    let mut images = Vec::with_capacity(paths.len());
    for path in paths {
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        match load_rgb_image(&path) {
            Ok(image) => images.push(DatasetImage { name, image }),
            Err(err) => warn!("skipping image: {err}"),
        }
    }
    debug!("read {} images from {}", images.len(), dir.display());
    Ok(images)
}

pub struct ImageOutcome {
    pub name: String,
    pub result: Result<FitReport, FitError>,
}

impl ImageOutcome {
    pub fn verdict(&self) -> Option<Verdict> {
        self.result.as_ref().ok().map(|r| r.verdict)
    }

    /// Console line for this image.
    pub fn answer_line(&self) -> String {
        match &self.result {
            Ok(report) if report.verdict.fits() => "Bowl can be placed under the table".into(),
            Ok(_) => "Bowl cannot be placed under the table".into(),
            Err(err) => format!("{}: error: {err}", self.name),
        }
    }
}

/// Runs the detector over `images` in parallel; outcomes keep the input
/// order.
pub fn evaluate<L, S>(
    detector: &TableFitDetector<L, S>,
    images: &[DatasetImage],
) -> Vec<ImageOutcome>
where
    L: LineDetector,
    S: RegionSegmenter,
{
    images
        .par_iter()
        .map(|item| ImageOutcome {
            name: item.name.clone(),
            result: detector.process(&item.image),
        })
        .collect()
}

#[derive(Debug, Serialize)]
pub struct ImageRecord {
    pub name: String,
    pub verdict: Option<Verdict>,
    pub error: Option<String>,
    pub report: Option<FitReport>,
}

#[derive(Debug, Serialize)]
pub struct DatasetReport {
    pub label: String,
    pub path: PathBuf,
    pub expected: Option<bool>,
    pub total: usize,
    /// Images whose verdict matched `expected`; failed decisions never count.
    pub correct: Option<usize>,
    pub images: Vec<ImageRecord>,
}

impl DatasetReport {
    pub fn new(
        label: String,
        path: PathBuf,
        expected: Option<bool>,
        outcomes: Vec<ImageOutcome>,
    ) -> Self {
        let correct = expected.map(|want| {
            outcomes
                .iter()
                .filter(|o| o.verdict() == Some(Verdict::from(want)))
                .count()
        });
        let images = outcomes
            .into_iter()
            .map(|o| match o.result {
                Ok(report) => ImageRecord {
                    name: o.name,
                    verdict: Some(report.verdict),
                    error: None,
                    report: Some(report),
                },
                Err(err) => ImageRecord {
                    name: o.name,
                    verdict: None,
                    error: Some(err.to_string()),
                    report: None,
                },
            })
            .collect::<Vec<_>>();
        Self {
            label,
            path,
            expected,
            total: images.len(),
            correct,
            images,
        }
    }
}
