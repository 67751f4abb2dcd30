use super::{types::Config, ConfigError};

/// Validate configuration
/// Currently validates:
/// - Conference name is not blank
/// - Conference has at least one ticket to sell
pub fn validate_config(config: &Config) -> Result<(), ConfigError> {
    if config.conference.name.trim().is_empty() {
        return Err(ConfigError::ValidationError(
            "conference.name cannot be empty".to_string(),
        ));
    }

    if config.conference.total_tickets == 0 {
        return Err(ConfigError::ValidationError(
            "conference.total_tickets cannot be 0".to_string(),
        ));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ConferenceConfig;

    #[test]
    fn test_validate_default_config() {
        assert!(validate_config(&Config::default()).is_ok());
    }

    #[test]
    fn test_validate_zero_tickets_fails() {
        let config = Config {
            conference: ConferenceConfig {
                name: "Go Conference".to_string(),
                total_tickets: 0,
            },
            ..Default::default()
        };
        let result = validate_config(&config);
        assert!(matches!(result, Err(ConfigError::ValidationError(_))));
    }

    #[test]
    fn test_validate_blank_name_fails() {
        let config = Config {
            conference: ConferenceConfig {
                name: "   ".to_string(),
                total_tickets: 50,
            },
            ..Default::default()
        };
        let result = validate_config(&config);
        assert!(matches!(result, Err(ConfigError::ValidationError(_))));
    }
}
