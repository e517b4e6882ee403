// Constants shared across the brandfluence crates

/// The default configuration file name for the application.
pub const DEFAULT_CONFIG_FILE_NAME: &str = "brandfluence.toml";

/// Prefix of environment variables overriding configuration values.
pub const ENV_PREFIX: &str = "BF";

pub const BEARER_TOKEN: &str = "Bearer";

pub const DATA_DIR: &str = "./data";
pub const LOG_DIR: &str = "./logs";
pub const LOG_FILE_PREFIX: &str = "brandfluence.log";

/// SQLite path value selecting a private in-memory database.
pub const MEMORY_DB_PATH: &str = ":memory:";

pub const DEFAULT_CURRENCY: &str = "USD";

pub const DEFAULT_PAGE: u32 = 1;
pub const DEFAULT_PAGE_SIZE: u32 = 20;
pub const MAX_PAGE_SIZE: u32 = 100;

pub const MIN_PASSWORD_LEN: u64 = 8;
