//! Application configuration.
//!
//! Centralized configuration for the Fuzzy Columns frontend.
//! The browser has no process environment, so the only override is a
//! build-time one: set `FUZZY_BACKEND_URL` when running `trunk build`.

/// Backend API base URL.
///
/// The fuzzy grouping service that receives the CSV files.
pub const BACKEND_URL: &str = match option_env!("FUZZY_BACKEND_URL") {
    Some(url) => url,
    None => "http://localhost:8000",
};

/// Upload endpoint, receives the staged files as multipart.
pub const GENERATE_PATH: &str = "/generate";

/// Column headers of the generated table.
pub const HEADERS_PATH: &str = "/headers";

/// Grouping result over the generated table.
pub const GROUPS_PATH: &str = "/groups";

/// Multipart field name shared by every uploaded file.
pub const FILES_FIELD: &str = "files";

/// Extension filter for the native file chooser.
pub const ACCEPTED_EXTENSION: &str = ".csv";

/// Application name, used as the document title.
pub const APP_NAME: &str = "Fuzzy Columns";

/// Join a base URL and an endpoint path with exactly one slash between them.
pub fn endpoint(base: &str, path: &str) -> String {
    format!(
        "{}/{}",
        base.trim_end_matches('/'),
        path.trim_start_matches('/')
    )
}
