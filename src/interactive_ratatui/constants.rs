//! Constants for the interactive TUI module
//!
//! Timing, layout and copy shared by the controller and the components.

// Timing constants
/// Message auto-clear delay in milliseconds
pub const MESSAGE_CLEAR_DELAY_MS: u64 = 3000;

/// Event polling interval in milliseconds
pub const EVENT_POLL_INTERVAL_MS: u64 = 50;

/// Double Ctrl+C timeout in seconds
pub const DOUBLE_CTRL_C_TIMEOUT_SECS: u64 = 1;

/// Event-loop ticks per spinner frame
pub const SPINNER_TICKS_PER_FRAME: usize = 2;

pub const SPINNER_FRAMES: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

// UI Layout constants
/// Height of the title header
pub const HEADER_HEIGHT: u16 = 3;

/// Height of the search bar component (including presets row)
pub const SEARCH_BAR_HEIGHT: u16 = 4;

/// Height of one study card, borders included
pub const STUDY_CARD_HEIGHT: u16 = 7;

/// Height of the error alert box
pub const ALERT_HEIGHT: u16 = 5;

/// Share of the width given to the record column in the results layout
pub const RECORDS_COLUMN_PERCENT: u16 = 66;

/// Page size for PageUp/PageDown navigation, in cards
pub const PAGE_SIZE: usize = 3;

// Help dialog dimensions
/// Maximum width for help dialog
pub const HELP_DIALOG_MAX_WIDTH: u16 = 70;

/// Minimum margin around help dialog
pub const HELP_DIALOG_MARGIN: u16 = 4;

// Copy
pub const APP_TITLE: &str = "Genesis";
pub const APP_TAGLINE: &str = "AI-powered search for NASA space biology data";
pub const SEARCH_PLACEHOLDER: &str = "e.g., How does microgravity affect mouse bone density?";
pub const EMPTY_STATE_PROMPT: &str = "Enter a query to explore NASA's biological space data";
pub const EMPTY_STATE_HINT: &str = "Try searching for organisms, missions, or specific experiments";
pub const EXIT_PROMPT: &str = "Press Ctrl+C again to exit";
pub const NO_LINK_MESSAGE: &str = "This study has no source link";
pub const UNSAFE_LINK_MESSAGE: &str = "Only http(s) study links can be opened";

// Status bar hints
pub const RESULTS_STATUS_TEXT: &str =
    "Enter: Search | F1-F3: Presets | ↑/↓: Select study | Ctrl+O: Open in browser | ?: Help | Esc: Quit";
pub const INPUT_STATUS_TEXT: &str = "Enter: Search | F1-F3: Presets | ?: Help | Esc: Quit";
pub const LOADING_STATUS_TEXT: &str = "Waiting for the search service | Ctrl+C (x2): Exit";

/// Quick-fill presets as (label, query).
pub const QUERY_PRESETS: [(&str, &str); 3] = [
    ("Arabidopsis radiation", "Arabidopsis space radiation"),
    ("Mouse microgravity", "mouse microgravity ISS"),
    ("Tissue samples", "tissue samples spaceflight"),
];
