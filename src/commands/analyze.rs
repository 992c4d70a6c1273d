use std::path::Path;

use anyhow::{Context, Result, bail};
use log::debug;

use crate::api::Analyzer;
use crate::http::FileUpload;

/// Uploads a data file for analysis and prints the report as JSON. Extra
/// fields are given as `key=value` pairs.
#[tracing::instrument(skip(analyzer))]
pub async fn analyze(analyzer: &Analyzer, path: &Path, fields: &[String]) -> Result<()> {
    let bytes =
        std::fs::read(path).with_context(|| format!("Failed to read file {:?}", path))?;
    let file_name = path
        .file_name()
        .and_then(|name| name.to_str())
        .unwrap_or("upload.bin")
        .to_string();

    debug!("Uploading {} ({} bytes) for analysis", file_name, bytes.len());

    let pairs = parse_fields(fields)?;
    let pairs_ref: Vec<(&str, &str)> = pairs
        .iter()
        .map(|(name, value)| (name.as_str(), value.as_str()))
        .collect();

    let report = analyzer
        .upload(FileUpload::new(file_name, bytes), &pairs_ref)
        .await?;
    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}

fn parse_fields(fields: &[String]) -> Result<Vec<(String, String)>> {
    fields
        .iter()
        .map(|field| match field.split_once('=') {
            Some((name, value)) => Ok((name.to_string(), value.to_string())),
            None => bail!("Invalid field '{}', expected key=value", field),
        })
        .collect()
}
