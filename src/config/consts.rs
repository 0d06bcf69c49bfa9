// src/config/consts.rs

// Sources
pub const POSTS_URL: &str = "https://jsonplaceholder.typicode.com/posts";
pub const COMMENTS_URL: &str = "https://jsonplaceholder.typicode.com/comments";

// Net
pub const USER_AGENT: &str = concat!("content_viewer/", env!("CARGO_PKG_VERSION"));

// Table
pub const PAGE_SIZE: usize = 10;

// Local state
pub const STORE_DIR: &str = ".store";
pub const LOG_FILE: &str = "debug.log";
pub const CONFIG_FILE: &str = "config.json";
pub const LOG_ENV: &str = "CONTENT_VIEWER_LOG";
pub const DEFAULT_LOG_FILTER: &str = "info";

// Export
pub const DEFAULT_OUT_DIR: &str = "out";

// UI text
pub const APP_TITLE: &str = "Dynamic Content Manager";
pub const SELECT_PLACEHOLDER: &str = "Select content type";
pub const FETCH_FAILED_MSG: &str = "Something went Wrong!!!";
pub const EMPTY_DEFAULT_MSG: &str = "No data available";
pub const EMPTY_MAIN_MSG: &str = "Oops! There's nothing to show.";
