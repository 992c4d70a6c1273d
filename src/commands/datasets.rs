use anyhow::Result;
use log::debug;

use crate::api::UserData;

/// Lists the account's stored datasets, optionally a single page.
#[tracing::instrument(skip(user))]
pub async fn list_datasets(user: &impl UserData, page: Option<(u64, u64)>) -> Result<()> {
    let datasets = match page {
        Some((offset, limit)) => user.datasets_page(offset, limit).await?,
        None => user.datasets().await?,
    };

    if datasets.is_empty() {
        println!("No datasets.");
        return Ok(());
    }

    debug!("Found {} dataset(s)", datasets.len());
    for dataset in datasets {
        println!(
            "{} {} ({} rows)",
            dataset.id, dataset.name, dataset.rows
        );
    }
    Ok(())
}

/// Lists past analyses.
#[tracing::instrument(skip(user))]
pub async fn list_analyses(user: &impl UserData, page: Option<(u64, u64)>) -> Result<()> {
    let analyses = match page {
        Some((offset, limit)) => user.analyses_page(offset, limit).await?,
        None => user.analyses().await?,
    };

    if analyses.is_empty() {
        println!("No analyses.");
        return Ok(());
    }

    for analysis in analyses {
        println!(
            "{} {}",
            analysis.id,
            analysis.file_name.as_deref().unwrap_or("(unnamed)")
        );
    }
    Ok(())
}
