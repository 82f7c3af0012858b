use log::Level;

/// Base URL of the Jobly REST API, fixed at build time.
pub const API_BASE_URL: &str = match option_env!("JOBLY_API_URL") {
    Some(url) => url,
    None => "http://localhost:3001",
};

const LOG_LEVEL: Option<&str> = option_env!("JOBLY_LOG_LEVEL");

pub fn log_level() -> Level {
    parse_log_level(LOG_LEVEL)
}

fn parse_log_level(value: Option<&str>) -> Level {
    value
        .and_then(|level| level.trim().parse().ok())
        .unwrap_or(Level::Info)
}
