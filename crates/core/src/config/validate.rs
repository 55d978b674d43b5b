use super::{types::Config, ConfigError};

/// Validate configuration
/// Currently validates:
/// - Server port is not 0
/// - Seed parameters describe a non-empty table and date window
/// - At least one session can be held
pub fn validate_config(config: &Config) -> Result<(), ConfigError> {
    if config.server.port == 0 {
        return Err(ConfigError::ValidationError(
            "server.port cannot be 0".to_string(),
        ));
    }

    if config.seed.ticket_count == 0 {
        return Err(ConfigError::ValidationError(
            "seed.ticket_count cannot be 0".to_string(),
        ));
    }

    if config.seed.first_id == 0 {
        return Err(ConfigError::ValidationError(
            "seed.first_id cannot be 0".to_string(),
        ));
    }

    if config
        .seed
        .first_id
        .checked_add(config.seed.ticket_count)
        .is_none()
    {
        return Err(ConfigError::ValidationError(
            "seed.first_id + seed.ticket_count overflows the ticket number range".to_string(),
        ));
    }

    if config.seed.window_days == 0 {
        return Err(ConfigError::ValidationError(
            "seed.window_days cannot be 0".to_string(),
        ));
    }

    if config.sessions.max_sessions == 0 {
        return Err(ConfigError::ValidationError(
            "sessions.max_sessions cannot be 0".to_string(),
        ));
    }

    Ok(())
}
