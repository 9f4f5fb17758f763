use anyhow::{Context, Result};
use colored::Colorize;
use jam_routes::{count_entries, jam_routes, JamRoutesOptions};
use std::path::PathBuf;

pub async fn execute(options: JamRoutesOptions, out: Option<PathBuf>, pretty: bool) -> Result<()> {
    let routes = jam_routes(&options).await?;

    let json = if pretty {
        serde_json::to_string_pretty(&routes)
    } else {
        serde_json::to_string(&routes)
    }
    .context("Failed to serialize route config")?;

    match out {
        Some(path) => {
            tokio::fs::write(&path, json)
                .await
                .with_context(|| format!("Failed to write route config: {:?}", path))?;
            eprintln!(
                "{} Wrote {} route entries to {}",
                "✓".green(),
                count_entries(&routes),
                path.display()
            );
        }
        None => println!("{}", json),
    }

    Ok(())
}
