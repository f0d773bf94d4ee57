//! Demonstration suites that run the engines and export their results.

use super::DemoError;
use crate::config::OperationConfig;
use crate::export::{Category, Exporter};
use crate::motion::MotionDetector;
use crate::ops::{self, boolean, OperationResult};
use crate::raster::{Image, ImagePair};
use crate::stats::{basic_statistics, binary_statistics, BasicStats};

/// Runs operation families over image pairs and writes every result
/// through its [`Exporter`].
#[derive(Debug)]
pub struct Workbench {
    config: OperationConfig,
    exporter: Exporter,
}

impl Workbench {
    /// Creates a workbench that exports through `exporter`.
    pub fn new(config: OperationConfig, exporter: Exporter) -> Self {
        Self { config, exporter }
    }

    /// Returns the operation parameters.
    pub fn config(&self) -> &OperationConfig {
        &self.config
    }

    /// Returns the exporter, e.g. to read the running file count.
    pub fn exporter(&self) -> &Exporter {
        &self.exporter
    }

    fn described(image: &Image, title: &str) -> Result<OperationResult<BasicStats>, DemoError> {
        Ok(OperationResult::new(
            image.clone(),
            basic_statistics(image)?,
            title,
        ))
    }

    /// Absolute difference plus one offset difference per configured constant.
    pub fn subtraction(&mut self, pair: &ImagePair) -> Result<usize, DemoError> {
        self.run_subtraction(pair, "")
    }

    fn run_subtraction(&mut self, pair: &ImagePair, prefix: &str) -> Result<usize, DemoError> {
        tracing::info!("Running subtraction suite");
        let pair = pair.clone().aligned();
        let original = Self::described(&pair.first, "Image A (Original)")?;

        let mut written = 0;
        let absolute = ops::absolute_difference(&pair.first, &pair.second)?;
        written += self.exporter.export(
            Category::Subtraction,
            &format!("{prefix}absolute"),
            &original,
            &absolute,
        )?;

        for &constant in &self.config.offsets {
            let offset = ops::offset_difference(&pair.first, &pair.second, constant)?;
            written += self.exporter.export(
                Category::Subtraction,
                &format!("{prefix}offset_{constant}"),
                &original,
                &offset,
            )?;
        }
        Ok(written)
    }

    /// AND, OR, XOR and NOT, each compared against binarized A.
    pub fn boolean(&mut self, pair: &ImagePair) -> Result<usize, DemoError> {
        self.run_boolean(pair, "")
    }

    fn run_boolean(&mut self, pair: &ImagePair, prefix: &str) -> Result<usize, DemoError> {
        tracing::info!("Running Boolean suite");
        let threshold = self.config.binary_threshold;
        let pair = pair.clone().aligned();

        let binary_a = ops::try_binarize(&pair.first, threshold)?;
        let stats_a = binary_statistics(&binary_a, "Binary A", threshold);
        let reference = OperationResult::new(
            binary_a.into_image(),
            stats_a,
            format!("Binary A (Threshold {threshold})"),
        );

        let results = [
            ("and", boolean::and(&pair.first, &pair.second, threshold)?),
            ("or", boolean::or(&pair.first, &pair.second, threshold)?),
            ("xor", boolean::xor(&pair.first, &pair.second, threshold)?),
            ("not", boolean::not(&pair.first, threshold)?),
        ];

        let mut written = 0;
        for (name, result) in &results {
            written += self.exporter.export(
                Category::Boolean,
                &format!("{prefix}boolean_{name}"),
                &reference,
                result,
            )?;
        }
        Ok(written)
    }

    /// Simple, cleaned, and low-threshold motion masks of a frame pair.
    pub fn motion(&mut self, frames: &ImagePair) -> Result<usize, DemoError> {
        self.run_motion(frames, "", false)
    }

    fn run_motion(
        &mut self,
        frames: &ImagePair,
        prefix: &str,
        cleaned_only: bool,
    ) -> Result<usize, DemoError> {
        tracing::info!("Running motion suite");
        let frames = frames.clone().aligned();
        let detector =
            MotionDetector::new(self.config.motion_threshold, self.config.motion_low_threshold);
        let report = detector.report(&frames.first, &frames.second)?;

        let mut written = self.exporter.export(
            Category::Motion,
            &format!("{prefix}motion_detection"),
            &report.frame1,
            &report.cleaned,
        )?;
        if cleaned_only {
            return Ok(written);
        }

        for (name, variant) in [
            ("motion_simple", &report.simple),
            ("motion_low_threshold", &report.low_threshold),
        ] {
            written += self.exporter.export(
                Category::Motion,
                &format!("{prefix}{name}"),
                &report.frame1,
                variant,
            )?;
        }
        Ok(written)
    }

    /// One blend per configured alpha.
    pub fn blending(&mut self, pair: &ImagePair) -> Result<usize, DemoError> {
        self.run_blending(pair, "")
    }

    fn run_blending(&mut self, pair: &ImagePair, prefix: &str) -> Result<usize, DemoError> {
        tracing::info!("Running blending suite");
        let pair = pair.clone().aligned();

        let mut written = 0;
        for &alpha in &self.config.blend_alphas {
            let original = Self::described(&pair.first, &format!("Image A (Weight={alpha:.1})"))?;
            let result = ops::blend(&pair.first, &pair.second, alpha)?;
            let percent = (alpha * 100.0).round() as u32;
            written += self.exporter.export(
                Category::Blending,
                &format!("{prefix}blend_{percent}"),
                &original,
                &result,
            )?;
        }
        Ok(written)
    }

    /// Every suite in turn: subtraction, Boolean, motion (cleaned mask
    /// only), blending. Motion runs on `frames`, the rest on `pair`.
    pub fn full(&mut self, pair: &ImagePair, frames: &ImagePair) -> Result<usize, DemoError> {
        let before = self.exporter.files_written();

        self.run_subtraction(pair, "demo_")?;
        self.run_boolean(pair, "demo_")?;
        self.run_motion(frames, "demo_", true)?;
        self.run_blending(pair, "demo_")?;

        let written = self.exporter.files_written() - before;
        tracing::info!(files = written, "Full demo finished");
        Ok(written)
    }
}
