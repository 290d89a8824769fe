//! Operator-facing output for the lifecycle hooks

use console::Style;

use super::Summary;
use crate::mutator::RenameOutcome;

pub fn print_step(message: &str) {
    println!("{} {}", Style::new().bold().cyan().apply_to("==>"), message);
}

pub fn print_summary(summary: &Summary) {
    let label = Style::new().bold();

    if let Some(report) = &summary.theme {
        match &report.rename {
            RenameOutcome::Renamed(to) => {
                println!("  {} {}", label.apply_to("Theme:"), to.display());
            }
            other => println!("  {} {}", label.apply_to("Theme:"), other),
        }
        let updated: Vec<&str> = [
            (report.manifest_updated, "package.json"),
            (report.viewer_updated, "config.yml"),
            (report.logging_updated, "logging.yml"),
        ]
        .into_iter()
        .filter_map(|(done, name)| done.then_some(name))
        .collect();
        if !updated.is_empty() {
            println!("  {} {}", label.apply_to("Updated:"), updated.join(", "));
        }
    }

    if summary.readme_removed {
        println!("  {} README.md", label.apply_to("Removed:"));
    }

    if let Some(path) = &summary.vhost {
        println!("  {} {}", label.apply_to("Vhost:"), path.display());
    }

    if let Some(output) = summary.package_manager.as_ref().filter(|o| !o.success) {
        let code = output
            .code
            .map_or_else(|| "a signal".to_string(), |c| c.to_string());
        println!("  {} exited with {code}", label.apply_to("Package manager:"));
    }

    println!("{}", Style::new().bold().green().apply_to("Done."));
}
