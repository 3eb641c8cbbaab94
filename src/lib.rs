pub mod browser;
pub mod config;
pub mod formatter;
pub mod interactive_ratatui;
pub mod logging;
pub mod schemas;
pub mod search;

pub use config::Config;
pub use formatter::{format_response, json_lines};
pub use interactive_ratatui::InteractiveSearch;
pub use schemas::{SearchRequest, SearchResponse, SearchStatistics, StudyRecord};
pub use search::{SearchClient, SearchError};
