/// Pending access log lines held before producers are made to wait.
pub const ACCESS_LOG_QUEUE: usize = 64;

/// Value of the `Server` header attached to every response.
pub const SERVER_IDENT: &str = concat!("redirected/", env!("CARGO_PKG_VERSION"));
