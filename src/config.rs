use std::env;

const DEFAULT_LISTEN: &str = "0.0.0.0:3000";

/// Socket address to serve on, from `ARCADE_LISTEN` if set.
pub fn listen_addr() -> String {
    env::var("ARCADE_LISTEN").unwrap_or_else(|_| DEFAULT_LISTEN.to_owned())
}
