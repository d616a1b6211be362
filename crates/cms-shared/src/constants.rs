//! Application-wide constants

pub const DEFAULT_HOST: &str = "127.0.0.1";
pub const DEFAULT_PORT: u16 = 8080;
pub const DEFAULT_UPSTREAM_TIMEOUT_SECS: u64 = 10;
pub const DEFAULT_UPLOAD_DIR: &str = "public/uploads";
pub const DEFAULT_UPLOAD_PUBLIC_PATH: &str = "/uploads";
pub const DEFAULT_UPLOAD_MAX_MB: u64 = 10;
pub const DEFAULT_ADMIN_STATIC_DIR: &str = "static/admin";
pub const ADMIN_REALM: &str = "Admin";
