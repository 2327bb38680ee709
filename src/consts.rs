/// Standard date format used throughout the codebase: "2018-12-09"
pub(crate) const DATE_FORMAT: &str = "%Y-%m-%d";

/// Optional first line of a cookie log
pub(crate) const FILE_HEADER: &str = "cookie,timestamp";

/// Path argument that selects standard input instead of a file
pub(crate) const STDIN_PATH: &str = "-";
