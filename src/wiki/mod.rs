mod extract;
mod fetch;

pub use extract::extract_interface;
pub use fetch::{fetch_wiki_page, WikiError};

/// The reference page listing the latest interface number per game type.
pub const DEFAULT_WIKI_URL: &str = "https://warcraft.wiki.gg/wiki/Patches_and_versions";
