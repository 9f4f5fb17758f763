use anyhow::Result;
use colored::Colorize;
use jam_routes::{count_entries, jam_routes, JamRoutesOptions};
use notify::{Event, EventKind, RecursiveMode, Watcher};
use std::path::PathBuf;
use std::time::Duration;
use tokio::sync::mpsc::Receiver;

const DEBOUNCE: Duration = Duration::from_millis(300);

pub async fn execute(options: JamRoutesOptions) -> Result<()> {
    let routes_path = options.routes_path();
    let cache_path = options.layout_cache_path();

    compile(&options).await;

    let (tx, mut rx) = tokio::sync::mpsc::channel::<PathBuf>(100);

    let mut watcher = notify::recommended_watcher(move |res: Result<Event, notify::Error>| {
        if let Ok(event) = res {
            // Renames and deletions change the route tree as much as new files
            if matches!(
                event.kind,
                EventKind::Create(_) | EventKind::Modify(_) | EventKind::Remove(_)
            ) {
                for path in event.paths {
                    if path.starts_with(&cache_path) {
                        continue;
                    }
                    let _ = tx.blocking_send(path);
                }
            }
        }
    })?;

    watcher.watch(&routes_path, RecursiveMode::Recursive)?;
    println!("  {} Watching: {}", "👀".cyan(), routes_path.display());

    while let Some(first) = rx.recv().await {
        let changed = settle(first, &mut rx, DEBOUNCE).await;
        tracing::debug!("Recompiling after {} change events", changed.len());

        if let Some(path) = changed.last() {
            println!("{} Changed: {}", "🔄".yellow(), path.display());
        }
        compile(&options).await;
    }

    Ok(())
}

/// Collect events until none has arrived for `quiet`
///
/// Events that come in while compiling stay queued and start the next batch.
async fn settle(first: PathBuf, rx: &mut Receiver<PathBuf>, quiet: Duration) -> Vec<PathBuf> {
    let mut changed = vec![first];
    while let Ok(Some(path)) = tokio::time::timeout(quiet, rx.recv()).await {
        changed.push(path);
    }
    changed
}

/// Compile once and report; errors are printed so watching continues
async fn compile(options: &JamRoutesOptions) {
    match jam_routes(options).await {
        Ok(routes) => println!(
            "{} Compiled {} route entries",
            "✓".green(),
            count_entries(&routes)
        ),
        Err(e) => eprintln!("{} Failed to compile routes: {:#}", "❌".red(), e),
    }
}
