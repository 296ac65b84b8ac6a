//! Plain-text table rendering for run logs and markdown outputs.

/// Render rows as a GitHub-flavored markdown table.
///
/// Returns an empty string when there are no rows, so callers can embed the
/// result directly into templates without a dangling header.
pub fn markdown_table(headers: &[&str], rows: &[Vec<String>]) -> String {
    if rows.is_empty() {
        return String::new();
    }

    let mut markdown = String::from("\n");
    markdown.push_str(&format!("| {} |\n", headers.join(" | ")));
    markdown.push_str(&format!(
        "| {} |\n",
        headers.iter().map(|_| "---").collect::<Vec<_>>().join(" | ")
    ));
    for row in rows {
        markdown.push_str(&format!("| {} |\n", row.join(" | ")));
    }

    markdown
}

/// Render rows as a double-lined box table for console output.
pub fn console_table(headers: &[&str], rows: &[Vec<String>]) -> String {
    let mut widths: Vec<usize> = headers.iter().map(|h| h.len()).collect();
    for row in rows {
        for (i, cell) in row.iter().enumerate() {
            if i < widths.len() {
                widths[i] = widths[i].max(cell.len());
            }
        }
    }

    let border = |left: char, mid: char, right: char, fill: char| -> String {
        let segments: Vec<String> = widths.iter().map(|w| fill.to_string().repeat(w + 2)).collect();
        format!("{left}{}{right}\n", segments.join(&mid.to_string()))
    };

    let render_row = |cells: Vec<&str>| -> String {
        let padded: Vec<String> = cells
            .iter()
            .zip(&widths)
            .map(|(cell, &w)| format!(" {cell:<w$} "))
            .collect();
        format!("║{}║\n", padded.join("│"))
    };

    let mut table = String::from("\n");
    table.push_str(&border('╔', '╤', '╗', '═'));
    table.push_str(&render_row(headers.to_vec()));
    table.push_str(&border('╟', '┼', '╢', '─'));
    for row in rows {
        table.push_str(&render_row(row.iter().map(String::as_str).collect()));
    }
    table.push_str(&border('╚', '╧', '╝', '═'));

    table
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_markdown_table_shape() {
        let table = markdown_table(
            &["TOC File", "Old Version", "New Version"],
            &[vec![
                "MyAddon.toc".to_string(),
                "110200".to_string(),
                "110205".to_string(),
            ]],
        );

        assert!(table.contains("| TOC File | Old Version | New Version |"));
        assert!(table.contains("| --- | --- | --- |"));
        assert!(table.contains("| MyAddon.toc | 110200 | 110205 |"));
    }

    #[test]
    fn test_markdown_table_empty_rows() {
        assert_eq!(markdown_table(&["A", "B"], &[]), "");
    }

    #[test]
    fn test_console_table_pads_columns() {
        let table = console_table(
            &["File", "Version"],
            &[vec!["MyVeryLongAddonName.toc".to_string(), "110200".to_string()]],
        );

        assert!(table.contains("║ File                    │ Version ║"));
        assert!(table.contains("║ MyVeryLongAddonName.toc │ 110200  ║"));
        assert!(table.starts_with("\n╔"));
        assert!(table.trim_end().ends_with('╝'));
    }
}
