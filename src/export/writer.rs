//! File layout and encoding of exported results.

use super::ExportError;
use crate::ops::OperationResult;
use crate::raster::Image;
use crate::stats::{Report, StatisticsRecord};
use chrono::{DateTime, Local};
use image::{imageops, GrayImage, Luma};
use serde::Serialize;
use std::path::{Path, PathBuf};

/// Width of the separator between the two halves of a comparison.
pub const COMPARISON_GAP: u32 = 10;
const GAP_SHADE: u8 = 128;

/// Operation family; each family gets its own subfolder.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    /// Absolute and offset differences.
    Subtraction,
    /// AND, OR, XOR and NOT.
    Boolean,
    /// Motion masks.
    Motion,
    /// Weighted blends.
    Blending,
}

impl Category {
    /// Returns the subfolder name for this family.
    pub fn dir_name(&self) -> &'static str {
        match self {
            Category::Subtraction => "1_subtraction",
            Category::Boolean => "2_boolean",
            Category::Motion => "3_motion_detection",
            Category::Blending => "4_blending",
        }
    }
}

#[derive(Serialize)]
struct Section<'a> {
    title: &'a str,
    stats: StatisticsRecord,
}

#[derive(Serialize)]
struct Sidecar<'a> {
    generated_at: DateTime<Local>,
    original: Section<'a>,
    result: Section<'a>,
}

/// Places `left` and `right` side by side with a gray separator.
///
/// The shorter image is padded with black at the bottom.
pub fn compose_comparison(left: &Image, right: &Image) -> GrayImage {
    let width = left.width() + COMPARISON_GAP + right.width();
    let height = left.height().max(right.height());

    let mut canvas = GrayImage::from_pixel(width, height, Luma([0]));
    for y in 0..height {
        for x in left.width()..left.width() + COMPARISON_GAP {
            canvas.put_pixel(x, y, Luma([GAP_SHADE]));
        }
    }
    imageops::replace(&mut canvas, &left.to_gray_image(), 0, 0);
    imageops::replace(
        &mut canvas,
        &right.to_gray_image(),
        (left.width() + COMPARISON_GAP) as i64,
        0,
    );
    canvas
}

/// Writes results under a root directory.
#[derive(Debug)]
pub struct Exporter {
    root: PathBuf,
    files_written: usize,
}

impl Exporter {
    /// Creates an exporter rooted at `root`. Nothing is written until the first export.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            files_written: 0,
        }
    }

    /// Returns the output root directory.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Total number of files written by this exporter.
    pub fn files_written(&self) -> usize {
        self.files_written
    }

    fn category_dir(&self, category: Category) -> Result<PathBuf, ExportError> {
        let dir = self.root.join(category.dir_name());
        std::fs::create_dir_all(&dir).map_err(|source| ExportError::Io {
            path: dir.clone(),
            source,
        })?;
        Ok(dir)
    }

    fn save_png(&mut self, path: PathBuf, image: &GrayImage) -> Result<(), ExportError> {
        image
            .save(&path)
            .map_err(|source| ExportError::Encode { path, source })?;
        self.files_written += 1;
        Ok(())
    }

    fn save_sidecar(&mut self, path: PathBuf, text: &str) -> Result<(), ExportError> {
        std::fs::write(&path, text).map_err(|source| ExportError::Io { path, source })?;
        self.files_written += 1;
        Ok(())
    }

    /// Writes `<name>_original.png`, `<name>_result.png`,
    /// `<name>_comparison.png` and `<name>_stats.toml`.
    ///
    /// Returns the number of files written. Each file is counted as soon
    /// as it lands on disk, so a failed export still leaves
    /// [`files_written`](Self::files_written) matching what was written.
    pub fn export<A: Report, B: Report>(
        &mut self,
        category: Category,
        name: &str,
        original: &OperationResult<A>,
        result: &OperationResult<B>,
    ) -> Result<usize, ExportError> {
        let dir = self.category_dir(category)?;
        let before = self.files_written;

        self.save_png(
            dir.join(format!("{name}_original.png")),
            &original.image.to_gray_image(),
        )?;
        self.save_png(
            dir.join(format!("{name}_result.png")),
            &result.image.to_gray_image(),
        )?;
        let comparison = dir.join(format!("{name}_comparison.png"));
        self.save_png(
            comparison.clone(),
            &compose_comparison(&original.image, &result.image),
        )?;

        let sidecar = Sidecar {
            generated_at: Local::now(),
            original: Section {
                title: &original.title,
                stats: original.record(),
            },
            result: Section {
                title: &result.title,
                stats: result.record(),
            },
        };
        let text = toml::to_string(&sidecar)?;
        self.save_sidecar(dir.join(format!("{name}_stats.toml")), &text)?;

        tracing::info!(
            category = category.dir_name(),
            name,
            "Saved {}",
            comparison.display()
        );
        Ok(self.files_written - before)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stats::basic_statistics;

    fn temp_root(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("pixel-ops-export-{name}-{}", std::process::id()))
    }

    #[test]
    fn test_comparison_layout() {
        let left = Image::filled(4, 3, 200);
        let right = Image::filled(5, 6, 50);
        let canvas = compose_comparison(&left, &right);

        assert_eq!(canvas.dimensions(), (4 + COMPARISON_GAP + 5, 6));
        assert_eq!(canvas.get_pixel(0, 0)[0], 200);
        assert_eq!(canvas.get_pixel(0, 5)[0], 0);
        assert_eq!(canvas.get_pixel(4, 0)[0], GAP_SHADE);
        assert_eq!(canvas.get_pixel(4 + COMPARISON_GAP, 5)[0], 50);
    }

    #[test]
    fn test_export_writes_four_files() {
        let root = temp_root("four");
        let mut exporter = Exporter::new(&root);

        let image = Image::from_fn(8, 8, |x, y| (x * 8 + y) as u8);
        let stats = basic_statistics(&image).unwrap();
        let original = OperationResult::new(image.clone(), stats.clone(), "Image A");
        let result = OperationResult::new(image, stats, "Result");

        let written = exporter
            .export(Category::Subtraction, "absolute", &original, &result)
            .unwrap();
        assert_eq!(written, 4);
        assert_eq!(exporter.files_written(), 4);

        let dir = root.join("1_subtraction");
        for suffix in ["original.png", "result.png", "comparison.png", "stats.toml"] {
            assert!(dir.join(format!("absolute_{suffix}")).exists(), "{suffix}");
        }

        let sidecar = std::fs::read_to_string(dir.join("absolute_stats.toml")).unwrap();
        let parsed: toml::Table = sidecar.parse().unwrap();
        assert_eq!(parsed["result"]["title"].as_str(), Some("Result"));
        assert_eq!(
            parsed["original"]["stats"]["Total Pixels"].as_integer(),
            Some(64)
        );

        std::fs::remove_dir_all(root).ok();
    }

    #[test]
    fn test_partial_export_counts_written_files() {
        let root = temp_root("partial");
        let mut exporter = Exporter::new(&root);

        // A directory in place of the comparison file makes the third save fail.
        let blocked = root.join("4_blending").join("blend_50_comparison.png");
        std::fs::create_dir_all(&blocked).unwrap();

        let image = Image::filled(6, 6, 80);
        let stats = basic_statistics(&image).unwrap();
        let original = OperationResult::new(image.clone(), stats.clone(), "Image A");
        let result = OperationResult::new(image, stats, "Blend");

        let err = exporter
            .export(Category::Blending, "blend_50", &original, &result)
            .unwrap_err();
        assert!(matches!(err, ExportError::Encode { .. }));
        assert_eq!(exporter.files_written(), 2);

        let dir = root.join("4_blending");
        assert!(dir.join("blend_50_original.png").exists());
        assert!(dir.join("blend_50_result.png").exists());
        assert!(!dir.join("blend_50_stats.toml").exists());

        std::fs::remove_dir_all(root).ok();
    }
}
