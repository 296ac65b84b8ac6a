#![allow(dead_code)]

use httpmock::prelude::*;
use std::path::Path;
use tempfile::TempDir;

/// Wiki page fixture matching the live table layout:
/// Game type | Expansion | Version | Number | Date | Interface.
pub const WIKI_FIXTURE: &str = r#"
<table class="wikitable">
<tr><th>Game type</th><th>Expansion</th><th>Version</th><th>Number</th><th>Date</th><th>Interface</th></tr>
<tr><td>Retail</td><td>The War Within</td><td>11.2.5</td><td>58123</td><td>2025-10-21</td><td><code>110205</code></td></tr>
<tr><td>Classic</td><td>Mists of Pandaria</td><td>5.5.0</td><td>57689</td><td>2025-09-09</td><td><code>50500</code></td></tr>
<tr><td>Classic Era</td><td>Vanilla</td><td>1.15.7</td><td>57638</td><td>2025-08-12</td><td><code>11507</code></td></tr>
</table>
"#;

pub fn create_test_dir() -> TempDir {
    TempDir::new().expect("Should create temp directory")
}

/// Write a toc file with the given interface version plus surrounding
/// metadata lines, returning the full contents written.
pub fn write_toc(dir: &Path, name: &str, interface_number: &str) -> String {
    let contents = format!(
        "## Interface: {interface_number}\n\
         ## Title: Test Addon\n\
         ## Version: 1.0.0\n\
         \n\
         Main.lua\n"
    );
    std::fs::write(dir.join(name), &contents).expect("Should write toc file");
    contents
}

/// Serve `body` as the wiki page from a local mock server. Callers keep
/// the returned server alive for the duration of the run and take its URL
/// via `server.url("/")`.
pub async fn spawn_wiki_server(body: &str) -> MockServer {
    let server = MockServer::start_async().await;
    let body = body.to_string();
    server
        .mock_async(move |when, then| {
            when.method(GET).path("/");
            then.status(200)
                .header("content-type", "text/html")
                .body(body);
        })
        .await;
    server
}
