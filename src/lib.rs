pub mod config;
pub mod game_type;
pub mod reconcile;
pub mod report;
pub mod scan;
pub mod template;
pub mod toc;
pub mod wiki;

// Re-export commonly used types
pub use config::RunConfig;
pub use game_type::GameType;
pub use reconcile::{build_update_plan, run, PlannedUpdate, RunError, RunReport, UpdatePlan};
pub use report::{console_table, markdown_table};
pub use scan::{find_toc_files, ScanError};
pub use template::{TemplateEngine, TemplateError, UpdateTemplateContext};
pub use toc::{load_toc_file, propose_update, save_interface_number, TocError, TocFile};
pub use wiki::{extract_interface, fetch_wiki_page, WikiError, DEFAULT_WIKI_URL};
