use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use anyhow::{Context, Result};
use serde::Serialize;
use sport_recommender::features::compare_features;
use sport_recommender::math::Array1;
use sport_recommender::Recommendation;

/// One output line: a ranked recommendation plus, with `--explain`, the
/// features both the user and the sport have.
#[derive(Debug, Serialize)]
pub struct RecommendationRow<'a> {
    pub rank: usize,
    pub sport: &'a str,
    pub match_score: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shared_features: Option<Vec<&'static str>>,
}

pub fn build_rows<'a>(
    recommendations: &'a [Recommendation],
    user: &Array1<f64>,
    explain: bool,
) -> Vec<RecommendationRow<'a>> {
    recommendations
        .iter()
        .enumerate()
        .map(|(i, rec)| RecommendationRow {
            rank: i + 1,
            sport: &rec.sport_name,
            match_score: rec.match_score,
            shared_features: explain.then(|| {
                compare_features(user, &rec.source_record)
                    .into_iter()
                    .filter(|c| c.user > 0.0 && c.sport > 0.0)
                    .map(|c| c.feature)
                    .collect()
            }),
        })
        .collect()
}

/// Write rows as delimited text with a header line.
pub fn write_delimited<W: Write>(rows: &[RecommendationRow], writer: W, delimiter: u8) -> Result<()> {
    let explain = rows.iter().any(|r| r.shared_features.is_some());
    let mut writer = csv::WriterBuilder::new()
        .delimiter(delimiter)
        .from_writer(writer);

    let mut header = vec!["rank", "sport", "match_score"];
    if explain {
        header.push("shared_features");
    }
    writer.write_record(&header)?;

    for row in rows {
        let mut record = vec![
            row.rank.to_string(),
            row.sport.to_string(),
            format!("{:.2}", row.match_score),
        ];
        if explain {
            record.push(row.shared_features.as_deref().unwrap_or_default().join(";"));
        }
        writer.write_record(&record)?;
    }

    writer.flush()?;
    Ok(())
}

/// Write recommendations to a file; format follows the extension
/// (`.json`, `.tsv`, anything else as CSV).
pub fn write_recommendations<P: AsRef<Path>>(
    rows: &[RecommendationRow],
    output_path: P,
) -> Result<()> {
    let path = output_path.as_ref();
    let extension = path.extension().and_then(|ext| ext.to_str()).unwrap_or("csv");

    let file = File::create(path).with_context(|| format!("Failed to create output file: {:?}", path))?;
    let mut writer = BufWriter::new(file);

    match extension {
        "json" => {
            serde_json::to_writer_pretty(&mut writer, rows)
                .with_context(|| format!("Failed to write {:?}", path))?;
            writer.flush()?;
        }
        "tsv" => write_delimited(rows, writer, b'\t')?,
        _ => write_delimited(rows, writer, b',')?,
    }

    log::info!("Wrote {} recommendations to {:?}", rows.len(), path);
    Ok(())
}
