// src/config/consts.rs

// Search output
pub const NO_MATCH: &str = "No specific rules found for this query.";
pub const RESULT_SEP: &str = "\n\n";

// Local log
pub const STORE_DIR: &str = ".store";
pub const LOG_FILE: &str = "debug.log";

// Window
pub const APP_TITLE: &str = "FPL Rules & Terminology Reference";
pub const WINDOW_W: f32 = 1000.0;
pub const WINDOW_H: f32 = 700.0;

// Tables
pub const ROW_HEIGHT: f32 = 20.0;
pub const HEADER_HEIGHT: f32 = 24.0;
pub const TERM_COL_WIDTH: f32 = 140.0;

// Shown where a section or key is absent from the rules tree
pub const NOT_AVAILABLE: &str = "Information not available";
