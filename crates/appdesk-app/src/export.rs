//! Report export as an HTML document readable by word processors

use std::fmt::Write as _;
use std::path::Path;

use appdesk_core::prelude::*;
use appdesk_core::Application;

/// Document type of the exported file
pub const DOCUMENT_MIME: &str = "application/msword";

const COLUMNS: [&str; 6] = [
    "Name",
    "Theme",
    "Department",
    "Performance",
    "Status",
    "Created",
];

/// Escape text for use inside HTML element content
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Full HTML report for one section's rows
pub fn render_report(page_title: &str, apps: &[&Application]) -> String {
    let mut html = String::new();
    html.push_str("<!DOCTYPE html><html><head><meta charset=\"utf-8\"><title>Results</title></head>\n");
    html.push_str("<body>\n<h1>Applications report</h1>\n");
    let _ = writeln!(html, "<p>Section: {}</p>", escape_html(page_title));
    html.push_str("<table border=\"1\" cellspacing=\"0\" cellpadding=\"6\">\n<tr>");
    for column in COLUMNS {
        let _ = write!(html, "<th>{}</th>", column);
    }
    html.push_str("</tr>\n");

    for app in apps {
        let created = app
            .created_date()
            .map(|d| d.format("%Y-%m-%d").to_string())
            .unwrap_or_default();
        let cells = [
            app.name.as_str(),
            app.theme.as_str(),
            app.department.as_str(),
            app.performance.as_str(),
            app.status.as_str(),
            created.as_str(),
        ];
        html.push_str("<tr>");
        for cell in cells {
            let _ = write!(html, "<td>{}</td>", escape_html(cell));
        }
        html.push_str("</tr>\n");
    }

    html.push_str("</table>\n</body></html>\n");
    html
}

/// Write the report, creating the export directory if needed
pub async fn write_report(path: &Path, html: &str) -> Result<()> {
    if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
        tokio::fs::create_dir_all(dir)
            .await
            .map_err(|e| Error::export(format!("Failed to create {}: {}", dir.display(), e)))?;
    }
    tokio::fs::write(path, html)
        .await
        .map_err(|e| Error::export(format!("Failed to write {}: {}", path.display(), e)))?;
    info!("Exported report ({}) to {}", DOCUMENT_MIME, path.display());
    Ok(())
}
