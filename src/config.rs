use anyhow::Result;
use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct Config {
    // HTTP
    pub port: u16,

    // Translations
    pub messages_dir: PathBuf,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            // HTTP
            port: std::env::var("PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(8080),

            // Translations
            messages_dir: std::env::var("MESSAGES_DIR")
                .unwrap_or_else(|_| "messages".to_string())
                .into(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    fn clear_env() {
        std::env::remove_var("PORT");
        std::env::remove_var("MESSAGES_DIR");
    }

    #[test]
    #[serial]
    fn test_defaults_when_env_is_unset() {
        clear_env();

        let config = Config::from_env().expect("config");
        assert_eq!(config.port, 8080);
        assert_eq!(config.messages_dir, PathBuf::from("messages"));
    }

    #[test]
    #[serial]
    fn test_port_override() {
        clear_env();
        std::env::set_var("PORT", "3000");

        let config = Config::from_env().expect("config");
        assert_eq!(config.port, 3000);

        clear_env();
    }

    #[test]
    #[serial]
    fn test_invalid_port_falls_back_to_default() {
        clear_env();
        std::env::set_var("PORT", "not-a-port");

        let config = Config::from_env().expect("config");
        assert_eq!(config.port, 8080);

        clear_env();
    }

    #[test]
    #[serial]
    fn test_messages_dir_override() {
        clear_env();
        std::env::set_var("MESSAGES_DIR", "/srv/site/messages");

        let config = Config::from_env().expect("config");
        assert_eq!(config.messages_dir, PathBuf::from("/srv/site/messages"));

        clear_env();
    }

    #[test]
    #[serial]
    fn test_config_clone_and_debug() {
        clear_env();

        let config = Config::from_env().expect("config");
        let cloned = config.clone();
        assert_eq!(config.port, cloned.port);

        let debug_str = format!("{:?}", config);
        assert!(debug_str.contains("Config"));
        assert!(debug_str.contains("messages_dir"));
    }
}
