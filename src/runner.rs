//! File and directory handling for the CLI

use anyhow::{Context, Result};
use scrimmage_analysis::{AnalyzedPlay, PipelineConfig, PlayAnalyzer, analyze_batch};
use scrimmage_core::DetectionSet;
use std::fmt;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// File name written inside each play's output directory
pub const OUTPUT_FILE: &str = "output.json";

pub fn load_config(path: Option<&Path>) -> Result<PipelineConfig> {
    match path {
        Some(path) => {
            let config = PipelineConfig::from_json_file(path)?;
            info!(path = %path.display(), "loaded pipeline config");
            Ok(config)
        }
        None => Ok(PipelineConfig::default()),
    }
}

/// Analyze one detection file. Writes to `output` when given, otherwise
/// prints the JSON to stdout.
pub fn analyze_file(analyzer: &PlayAnalyzer, input: &Path, output: Option<&Path>) -> Result<AnalyzedPlay> {
    let detections = DetectionSet::load(input)?;
    let result = analyzer
        .analyze(&detections)
        .with_context(|| format!("Failed to analyze {}", input.display()))?;

    match output {
        Some(path) => {
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                std::fs::create_dir_all(parent)
                    .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
            }
            analyzer.export_json(&result, path)?;
            info!(path = %path.display(), "wrote analysis");
        }
        None => println!("{}", serde_json::to_string_pretty(&result)?),
    }

    Ok(result)
}

/// Counts from one batch run
#[derive(Debug, Default)]
pub struct BatchReport {
    pub analyzed: usize,
    pub skipped: usize,
    pub failed: Vec<(String, String)>,
}

impl fmt::Display for BatchReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "analyzed {}, skipped {}, failed {}",
            self.analyzed,
            self.skipped,
            self.failed.len()
        )?;
        for (name, reason) in &self.failed {
            write!(f, "\n  {name}: {reason}")?;
        }
        Ok(())
    }
}

/// `*.json` files directly inside `dir`, sorted by name
fn json_inputs(dir: &Path) -> Result<Vec<PathBuf>> {
    let entries = std::fs::read_dir(dir).with_context(|| format!("Failed to read directory: {}", dir.display()))?;

    let mut inputs = Vec::new();
    for entry in entries {
        let path = entry?.path();
        if path.is_file() && path.extension().is_some_and(|ext| ext == "json") {
            inputs.push(path);
        }
    }
    inputs.sort();
    Ok(inputs)
}

fn play_name(path: &Path) -> String {
    path.file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_default()
}

pub fn output_path(output_dir: &Path, name: &str) -> PathBuf {
    output_dir.join(name).join(OUTPUT_FILE)
}

/// Analyze every detection file in `input_dir`.
///
/// Each play owns `<output_dir>/<stem>/output.json`. Plays whose output
/// already exists are skipped unless `force` is set.
pub fn run_batch(analyzer: &PlayAnalyzer, input_dir: &Path, output_dir: &Path, force: bool) -> Result<BatchReport> {
    let mut report = BatchReport::default();
    let mut plays = Vec::new();

    for input in json_inputs(input_dir)? {
        let name = play_name(&input);
        if !force && output_path(output_dir, &name).exists() {
            info!(play = %name, "output exists, skipping");
            report.skipped += 1;
            continue;
        }

        match DetectionSet::load(&input) {
            Ok(detections) => plays.push((name, detections)),
            Err(err) => {
                warn!(play = %name, error = %err, "could not load detections");
                report.failed.push((name, format!("{err:#}")));
            }
        }
    }

    for outcome in analyze_batch(analyzer, &plays) {
        let result = match outcome.result {
            Ok(result) => result,
            Err(err) => {
                report.failed.push((outcome.name, err.to_string()));
                continue;
            }
        };

        let path = output_path(output_dir, &outcome.name);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
        }
        analyzer.export_json(&result, &path)?;
        report.analyzed += 1;
    }

    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;

    const PLAY: &str = r#"{"predictions": [
        {"x": 440, "y": 300, "width": 40, "height": 80, "confidence": 0.9, "class": "RB", "detection_id": "rb"},
        {"x": 520, "y": 300, "width": 40, "height": 80, "confidence": 0.9, "class": "QB", "detection_id": "qb"},
        {"x": 590, "y": 300, "width": 40, "height": 80, "confidence": 0.9, "class": "C", "detection_id": "c"},
        {"x": 580, "y": 100, "width": 40, "height": 80, "confidence": 0.9, "class": "WR", "detection_id": "wr"},
        {"x": 660, "y": 100, "width": 40, "height": 80, "confidence": 0.9, "class": "CB", "detection_id": "cb"},
        {"x": 760, "y": 320, "width": 40, "height": 80, "confidence": 0.9, "class": "LB", "detection_id": "lb"},
        {"x": 1000, "y": 300, "width": 40, "height": 80, "confidence": 0.9, "class": "FS", "detection_id": "fs"}
    ]}"#;

    #[test]
    fn test_analyze_file_writes_output() -> Result<()> {
        let dir = tempfile::tempdir()?;
        let input = dir.path().join("play.json");
        std::fs::write(&input, PLAY)?;
        let output = dir.path().join("out").join(OUTPUT_FILE);

        let result = analyze_file(&PlayAnalyzer::default(), &input, Some(&output))?;

        assert_eq!(result.play.players.len(), 7);
        assert!(output.exists());
        Ok(())
    }

    #[test]
    fn test_analyze_file_missing_input() {
        let err = analyze_file(&PlayAnalyzer::default(), Path::new("/nonexistent/play.json"), None).unwrap_err();
        assert!(format!("{err:#}").contains("/nonexistent/play.json"));
    }

    #[test]
    fn test_batch_skips_existing_and_reports_failures() -> Result<()> {
        let input_dir = tempfile::tempdir()?;
        let output_dir = tempfile::tempdir()?;
        std::fs::write(input_dir.path().join("a.json"), PLAY)?;
        std::fs::write(input_dir.path().join("b.json"), PLAY)?;
        std::fs::write(input_dir.path().join("empty.json"), "[]")?;
        std::fs::write(input_dir.path().join("broken.json"), "{")?;
        std::fs::write(input_dir.path().join("notes.txt"), "ignored")?;

        std::fs::create_dir_all(output_dir.path().join("b"))?;
        std::fs::write(output_path(output_dir.path(), "b"), "{}")?;

        let analyzer = PlayAnalyzer::default();
        let report = run_batch(&analyzer, input_dir.path(), output_dir.path(), false)?;

        assert_eq!(report.analyzed, 1);
        assert_eq!(report.skipped, 1);
        let mut failed: Vec<_> = report.failed.iter().map(|(name, _)| name.as_str()).collect();
        failed.sort();
        assert_eq!(failed, vec!["broken", "empty"]);
        assert!(output_path(output_dir.path(), "a").exists());
        assert_eq!(std::fs::read_to_string(output_path(output_dir.path(), "b"))?, "{}");

        let forced = run_batch(&analyzer, input_dir.path(), output_dir.path(), true)?;
        assert_eq!(forced.analyzed, 2);
        assert_eq!(forced.skipped, 0);
        Ok(())
    }
}
