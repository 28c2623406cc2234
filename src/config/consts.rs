// src/config/consts.rs

// Sites
pub const MAIN_DOC_URL: &str = "https://docs.python.org/3/";
pub const WHATS_NEW_URL: &str = "https://docs.python.org/3/whatsnew/";
pub const DOWNLOADS_URL: &str = "https://docs.python.org/3/download.html";
pub const PEPS_URL: &str = "https://peps.python.org/";
pub const USER_AGENT: &str = concat!("pydocs_scrape/", env!("CARGO_PKG_VERSION"));

// Local directories, relative to the base dir
pub const CACHE_DIR: &str = ".cache/http";
pub const DOWNLOADS_DIR: &str = "downloads";
pub const RESULTS_DIR: &str = "results";
pub const LOG_DIR: &str = "logs";
pub const LOG_FILE: &str = "parser.log";

// Log rotation
pub const LOG_MAX_BYTES: u64 = 1_000_000;
pub const LOG_BACKUPS: usize = 5;
pub const LOG_DEFAULT_FILTER: &str = "info";

// Formats
pub const LOG_DT_FORMAT: &str = "%d.%m.%Y %H:%M:%S";
pub const FILE_DT_FORMAT: &str = "%Y-%m-%d_%H-%M-%S";

// Download mode
pub const ARCHIVE_EXT: &str = ".zip";

// Latest versions mode
pub const ALL_VERSIONS_MARKER: &str = "All versions";
pub const VERSION_PATTERN: &str = r"Python (\d\.\d+) \((.*)\)";

// PEP mode
pub const STATUS_TERM: &str = "Status:";
pub const TOTAL_LABEL: &str = "Все PEP";

/// Status code (from the PEP index abbreviation) → acceptable article statuses.
pub const EXPECTED_STATUS: &[(&str, &[&str])] = &[
    ("A", &["Active", "Accepted"]),
    ("D", &["Deferred"]),
    ("F", &["Final"]),
    ("P", &["Provisional"]),
    ("R", &["Rejected"]),
    ("S", &["Superseded"]),
    ("W", &["Withdrawn"]),
    ("", &["Draft", "Active"]),
];

/// Look up the acceptable statuses for a status code. `None` for codes the
/// index is not expected to use.
pub fn expected_status(code: &str) -> Option<&'static [&'static str]> {
    EXPECTED_STATUS
        .iter()
        .find(|(key, _)| *key == code)
        .map(|(_, statuses)| *statuses)
}

// Result headers
pub const WHATS_NEW_HEADERS: [&str; 3] = ["Ссылка на статью", "Заголовок", "Редактор, Автор"];
pub const LATEST_VERSIONS_HEADERS: [&str; 3] = ["Ссылка на документацию", "Версия", "Статус"];
pub const PEP_HEADERS: [&str; 2] = ["Статус", "Количество"];
