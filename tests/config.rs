#[cfg(test)]
mod tests {
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};
    use tudo::libs::config::{Config, DisplayConfig};
    use tudo::libs::task::TaskFilter;

    /// Test context to ensure a clean environment for the config test.
    /// It sets up a temporary directory to act as the user's home/appdata
    /// directory.
    struct ConfigTestContext {
        _temp_dir: TempDir,
    }

    impl TestContext for ConfigTestContext {
        fn setup() -> Self {
            let temp_dir = tempfile::tempdir().unwrap();
            // Mock the home/appdata directory for cross-platform compatibility.
            std::env::set_var("HOME", temp_dir.path());
            std::env::set_var("LOCALAPPDATA", temp_dir.path());
            ConfigTestContext { _temp_dir: temp_dir }
        }
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_config_defaults_and_roundtrip(_ctx: &mut ConfigTestContext) {
        // Missing file: defaults, not an error.
        let config = Config::read().unwrap();
        assert!(config.display.is_none());
        assert_eq!(config.default_filter(), TaskFilter::All);

        // Save and reload.
        let config = Config {
            display: Some(DisplayConfig {
                default_filter: TaskFilter::Active,
            }),
        };
        config.save().unwrap();

        let reloaded = Config::read().unwrap();
        assert_eq!(reloaded.display, config.display);
        assert_eq!(reloaded.default_filter(), TaskFilter::Active);

        // Delete returns to defaults.
        Config::delete().unwrap();
        let config = Config::read().unwrap();
        assert!(config.display.is_none());
    }
}
