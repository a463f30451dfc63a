/// Format used when a post's creation time is shown to readers.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

pub const DEFAULT_ENV: &str = "development";
pub const DEFAULT_HOST: &str = "127.0.0.1";
pub const DEFAULT_MAX_DB_CONNECTIONS: u32 = 5;

/// Upper bound on an urlencoded post submission, in bytes.
pub const MAX_FORM_SIZE: usize = 1024 * 1024;
