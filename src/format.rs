//! Human-readable report of a resolver's tables.

use crate::resolver::PathResolver;
use comfy_table::presets::UTF8_BORDERS_ONLY;
use comfy_table::Table;
use owo_colors::OwoColorize;
use std::fmt;

/// Format a section heading with bold/underline.
pub fn format_section_heading(title: &str) -> String {
    format!("{}", title.bold().underline())
}

/// Resolver and alias tables as text. `styled` turns on heading styles.
pub fn format_report(resolver: &PathResolver, styled: bool) -> String {
    let heading = |title: &str| {
        if styled {
            format_section_heading(title)
        } else {
            title.to_string()
        }
    };

    let mut out = String::new();
    out.push_str(&format!("{}\n", heading("Path Resolver")));
    out.push_str(&format!("  Root: {}\n", resolver.root_path().display()));
    out.push_str(&format!(
        "  Resolvers: {}  Aliases: {}\n\n",
        resolver.get_directory_resolver().len(),
        resolver.get_alias_map().len()
    ));

    out.push_str(&format!("{}\n", heading("Resolvers")));
    if resolver.get_directory_resolver().is_empty() {
        out.push_str("  (none)\n\n");
    } else {
        let mut table = Table::new();
        table.load_preset(UTF8_BORDERS_ONLY);
        table.set_header(vec!["Function", "Path"]);
        for (key, r) in resolver.get_directory_resolver().iter() {
            table.add_row(vec![format!("{}()", key), r.base().display().to_string()]);
        }
        out.push_str(&format!("{}\n\n", table));
    }

    out.push_str(&format!("{}\n", heading("Aliases")));
    if resolver.get_alias_map().is_empty() {
        out.push_str("  (none)\n");
    } else {
        let mut table = Table::new();
        table.load_preset(UTF8_BORDERS_ONLY);
        table.set_header(vec!["Alias", "Path"]);
        for (alias, path) in resolver.get_alias_map().iter() {
            table.add_row(vec![alias.to_string(), path.display().to_string()]);
        }
        out.push_str(&format!("{}\n", table));
    }
    out
}

impl fmt::Display for PathResolver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&format_report(self, false))
    }
}

impl PathResolver {
    /// Write the styled report to stdout.
    pub fn print_details(&self) {
        println!("{}", format_report(self, true));
    }
}
