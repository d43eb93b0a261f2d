//! Output formatting for the CLI.

use cardhub_commerce::ads::Advertisement;
use cardhub_commerce::search::FacetGroup;
use console::style;

const ROTATION_WIDTHS: [usize; 5] = [4, 8, 8, 14, 40];

/// Output handler for CLI messages.
#[derive(Clone)]
pub struct Output {
    verbose: bool,
    json: bool,
}

impl Output {
    /// Create a new output handler.
    pub fn new(verbose: bool, json: bool) -> Self {
        Self { verbose, json }
    }

    /// Print an info message.
    pub fn info(&self, msg: &str) {
        if self.json {
            return;
        }
        println!("{} {}", style("ℹ").blue(), msg);
    }

    /// Print a success message.
    pub fn success(&self, msg: &str) {
        if self.json {
            return;
        }
        println!("{} {}", style("✓").green(), msg);
    }

    /// Print a warning message.
    pub fn warn(&self, msg: &str) {
        if self.json {
            return;
        }
        eprintln!("{} {}", style("⚠").yellow(), msg);
    }

    /// Print an error message.
    pub fn error(&self, msg: &str) {
        if self.json {
            eprintln!("{}", serde_json::json!({ "error": msg }));
            return;
        }
        eprintln!("{} {}", style("✗").red(), style(msg).red());
    }

    /// Print a header/title.
    pub fn header(&self, msg: &str) {
        if self.json {
            return;
        }
        println!("\n{}", style(msg).bold().underlined());
    }

    /// Print a step in a process.
    pub fn step(&self, num: usize, total: usize, msg: &str) {
        if self.json {
            return;
        }
        println!("{} {}", style(format!("[{}/{}]", num, total)).dim(), msg);
    }

    /// Print JSON output.
    pub fn json<T: serde::Serialize>(&self, value: &T) {
        if let Ok(json) = serde_json::to_string_pretty(value) {
            println!("{}", json);
        }
    }

    /// Print a key-value pair.
    pub fn kv(&self, key: &str, value: &str) {
        if self.json {
            return;
        }
        println!("  {}: {}", style(key).dim(), value);
    }

    /// Print a list item.
    pub fn list_item(&self, item: &str) {
        if self.json {
            return;
        }
        println!("  {} {}", style("•").dim(), item);
    }

    /// Print the ads picked by a rotation, one row per pick.
    pub fn rotation_table(&self, picks: &[Advertisement]) {
        if self.json {
            return;
        }
        let header = table_row(&["#", "AD", "STORE", "POSITION", "TARGET"], &ROTATION_WIDTHS);
        println!("  {}", style(header).dim());
        for (i, ad) in picks.iter().enumerate() {
            let row = table_row(
                &[
                    &(i + 1).to_string(),
                    &ad.id.to_string(),
                    &ad.store_id.to_string(),
                    ad.position.as_str(),
                    &ad.target_url,
                ],
                &ROTATION_WIDTHS,
            );
            println!("  {}", row);
        }
    }

    /// Print a facet group with a checkbox per value.
    pub fn facet_group(&self, group: &FacetGroup) {
        if self.json {
            return;
        }
        println!("  {}", style(&group.name).bold());
        for v in &group.values {
            let mark = if v.selected {
                style("☑").green()
            } else {
                style("☐").dim()
            };
            println!("    {} {} {}", mark, v.label, style(format!("({})", v.count)).dim());
        }
    }

    /// Print a pagination window with the current page bracketed.
    pub fn page_window(&self, pages: &[u32], current: u32) {
        self.kv("pages", &page_window_label(pages, current));
    }

    /// Check if verbose mode is enabled.
    pub fn is_verbose(&self) -> bool {
        self.verbose
    }

    /// Check if JSON mode is enabled.
    pub fn is_json(&self) -> bool {
        self.json
    }
}

fn table_row(cols: &[&str], widths: &[usize]) -> String {
    cols.iter()
        .zip(widths.iter())
        .map(|(col, width)| format!("{:width$}", col, width = width))
        .collect::<Vec<_>>()
        .join("  ")
}

fn page_window_label(pages: &[u32], current: u32) -> String {
    pages
        .iter()
        .map(|p| {
            if *p == current {
                format!("[{}]", p)
            } else {
                p.to_string()
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}
