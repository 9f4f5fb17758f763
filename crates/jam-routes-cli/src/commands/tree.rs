use anyhow::Result;
use colored::Colorize;
use jam_routes::{jam_routes, JamRoutesOptions, RouteConfigEntry};

pub async fn execute(options: JamRoutesOptions) -> Result<()> {
    let routes = jam_routes(&options).await?;

    println!("{}", options.routes_path().display().to_string().bold());
    for route in &routes {
        print_entry(route, 1);
    }

    Ok(())
}

fn print_entry(entry: &RouteConfigEntry, depth: usize) {
    let indent = "  ".repeat(depth);

    let label = match (&entry.path, entry.index) {
        (_, true) => "(index)".green().to_string(),
        (Some(path), false) => path.bold().to_string(),
        (None, false) => "[layout]".cyan().to_string(),
    };
    println!("{}{} {}", indent, label, entry.file.dimmed());

    for child in &entry.children {
        print_entry(child, depth + 1);
    }
}
