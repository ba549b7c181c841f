/// Base URL of the REST API.
/// Set at compile time (see build.rs / `.env`):
/// - Development: http://localhost:8000/api (default)
/// - Production: `BACKEND_URL` env var
pub const BACKEND_URL: &str = match option_env!("BACKEND_URL") {
    Some(url) => url,
    None => "http://localhost:8000/api",
};

// localStorage keys
pub const STORAGE_KEY_SESSION: &str = "volunteerAdmin_session";

// Lists
pub const DEFAULT_ITEMS_PER_PAGE: usize = 10;
pub const MAIN_FILTER: &str = "main";
pub const FILTER_ALL: &str = "all";

// Timings (ms)
pub const SEARCH_DEBOUNCE_MS: u32 = 300;
pub const TOAST_DURATION_MS: u32 = 4000;

// Work logs
pub const MAX_HOURS_PER_LOG: f64 = 24.0;
