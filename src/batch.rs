use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};
use indicatif::ProgressBar;
use rayon::prelude::*;
use tracing::info;

use crate::parser;
use crate::record::{ExtractionResult, MissingField};

const CHUNK_SIZE: usize = 500;

/// Summary of a batch run.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct BatchCounts {
    pub total: usize,
    pub complete: usize,
    pub missing_type: usize,
    pub missing_price: usize,
}

impl BatchCounts {
    pub fn from_results(results: &[ExtractionResult]) -> Self {
        let mut counts = Self {
            total: results.len(),
            ..Self::default()
        };
        for r in results {
            if r.is_complete() {
                counts.complete += 1;
            }
            if r.is_missing(MissingField::Type) {
                counts.missing_type += 1;
            }
            if r.is_missing(MissingField::Price) {
                counts.missing_price += 1;
            }
        }
        counts
    }

    pub fn print(&self) {
        eprintln!(
            "Extracted {} transcripts: {} complete, {} missing type, {} missing price.",
            self.total, self.complete, self.missing_type, self.missing_price,
        );
    }
}

/// One transcript per non-blank line.
pub fn read_transcripts(path: &Path, limit: Option<usize>) -> Result<Vec<String>> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read transcripts from {}", path.display()))?;
    Ok(parse_transcripts(&content, limit))
}

fn parse_transcripts(content: &str, limit: Option<usize>) -> Vec<String> {
    content
        .lines()
        .filter(|l| !l.trim().is_empty())
        .take(limit.unwrap_or(usize::MAX))
        .map(str::to_string)
        .collect()
}

/// Extracts in parallel chunks; output order matches input order.
pub fn extract_all(transcripts: &[String], pb: Option<&ProgressBar>) -> Vec<ExtractionResult> {
    let mut results = Vec::with_capacity(transcripts.len());
    for chunk in transcripts.chunks(CHUNK_SIZE) {
        let extracted: Vec<_> = chunk.par_iter().map(|t| parser::extract(t)).collect();
        results.extend(extracted);
        if let Some(pb) = pb {
            pb.inc(chunk.len() as u64);
        }
    }
    results
}

/// One JSON object per line.
pub fn write_jsonl<W: Write>(mut out: W, results: &[ExtractionResult]) -> Result<()> {
    for r in results {
        serde_json::to_writer(&mut out, r)?;
        out.write_all(b"\n")?;
    }
    out.flush()?;
    Ok(())
}

/// Read, extract, write. Returns the summary for the caller to report.
pub fn run<W: Write>(input: &Path, limit: Option<usize>, out: W, pb: &ProgressBar) -> Result<BatchCounts> {
    let transcripts = read_transcripts(input, limit)?;
    info!("Loaded {} transcripts from {}", transcripts.len(), input.display());

    pb.set_length(transcripts.len() as u64);
    let results = extract_all(&transcripts, Some(pb));
    pb.finish_and_clear();

    write_jsonl(out, &results).context("Failed to write results")?;

    let counts = BatchCounts::from_results(&results);
    info!(
        total = counts.total,
        complete = counts.complete,
        missing_type = counts.missing_type,
        missing_price = counts.missing_price,
        "batch finished"
    );
    Ok(counts)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::PropertyType;

    fn fixture() -> Vec<String> {
        read_transcripts(Path::new("tests/fixtures/transcripts.txt"), None).unwrap()
    }

    #[test]
    fn skips_blank_lines_and_limits() {
        let t = parse_transcripts("a\n\n  \nb\nc\n", None);
        assert_eq!(t, vec!["a", "b", "c"]);
        assert_eq!(parse_transcripts("a\nb\nc", Some(2)), vec!["a", "b"]);
    }

    #[test]
    fn fixture_counts() {
        let transcripts = fixture();
        assert_eq!(transcripts.len(), 6);
        let results = extract_all(&transcripts, None);
        let counts = BatchCounts::from_results(&results);
        assert_eq!(
            counts,
            BatchCounts {
                total: 6,
                complete: 3,
                missing_type: 2,
                missing_price: 3,
            }
        );
    }

    #[test]
    fn order_preserved() {
        let transcripts = fixture();
        let results = extract_all(&transcripts, None);
        for (t, r) in transcripts.iter().zip(&results) {
            assert_eq!(&r.record.description, t);
        }
        assert_eq!(results[0].record.property_type, Some(PropertyType::Apartment));
        assert_eq!(results[2].record.property_type, Some(PropertyType::House));
    }

    #[test]
    fn large_batch_spans_chunks() {
        let transcripts: Vec<String> = (0..CHUNK_SIZE * 2 + 7)
            .map(|i| format!("{} bed flat for ${}", i % 5, i))
            .collect();
        let results = extract_all(&transcripts, None);
        assert_eq!(results.len(), transcripts.len());
        assert_eq!(results[CHUNK_SIZE + 3].record.price, Some((CHUNK_SIZE + 3) as f64));
    }

    #[test]
    fn jsonl_output() {
        let results = extract_all(&["flat for $10".to_string(), String::new()], None);
        let mut buf = Vec::new();
        write_jsonl(&mut buf, &results).unwrap();
        let text = String::from_utf8(buf).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 2);
        let first: serde_json::Value = serde_json::from_str(lines[0]).unwrap();
        assert_eq!(first["record"]["type"], "Flat");
        assert_eq!(first["record"]["price"], 10.0);
        let second: ExtractionResult = serde_json::from_str(lines[1]).unwrap();
        assert_eq!(second.missing_fields, vec![MissingField::Type, MissingField::Price]);
    }
}
