//! Configuration management for the tudo application.
//!
//! Settings live in a JSON file next to the task list in the platform
//! application data directory. Every section of [`Config`] is optional, so a
//! missing file or a file written by an older version still loads; absent
//! sections fall back to defaults. The `skip_serializing_if` attribute keeps
//! unconfigured sections out of the JSON output.
//!
//! `tudo init` runs the interactive wizard built on top of [`Config::init`].

use crate::libs::data_storage::DataStorage;
use crate::libs::messages::Message;
use crate::libs::task::TaskFilter;
use crate::msg_print;
use anyhow::Result;
use dialoguer::{theme::ColorfulTheme, MultiSelect, Select};
use serde::{Deserialize, Serialize};
use std::fs::{self, File};

pub const CONFIG_FILE_NAME: &str = "config.json";

/// A configurable module presented by the interactive setup wizard.
#[derive(Debug, Clone)]
pub struct ConfigModule {
    pub key: String,
    pub name: String,
}

/// Display preferences for the task list.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct DisplayConfig {
    /// Filter `list` applies when none is given on the command line.
    pub default_filter: TaskFilter,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        DisplayConfig {
            default_filter: TaskFilter::All,
        }
    }
}

/// Main configuration container for the application.
#[derive(Serialize, Deserialize, Clone, Debug, Default)]
pub struct Config {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display: Option<DisplayConfig>,
}

impl Config {
    /// Reads the configuration file, falling back to defaults when no file
    /// exists yet.
    pub fn read() -> Result<Config> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;

        if !config_file_path.exists() {
            return Ok(Config::default());
        }

        let config_str = fs::read_to_string(config_file_path)?;
        let config: Config = serde_json::from_str(&config_str)?;
        Ok(config)
    }

    /// Saves the configuration as pretty-printed JSON.
    pub fn save(&self) -> Result<()> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;

        let config_file = File::create(config_file_path)?;
        serde_json::to_writer_pretty(&config_file, &self)?;
        Ok(())
    }

    /// Removes the configuration file if present.
    pub fn delete() -> Result<()> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;

        if config_file_path.exists() {
            fs::remove_file(config_file_path)?;
        }
        Ok(())
    }

    /// The filter `list` should use when none is given explicitly.
    pub fn default_filter(&self) -> TaskFilter {
        self.display.as_ref().map(|d| d.default_filter).unwrap_or_default()
    }

    /// Runs the interactive configuration wizard.
    ///
    /// Loads the current configuration as defaults, lets the user pick which
    /// modules to configure and prompts for each selected one. The result is
    /// returned for saving.
    pub fn init() -> Result<Self> {
        let mut config = Self::read().unwrap_or_default();

        let node_descriptions = vec![ConfigModule {
            key: "display".to_string(),
            name: "Display".to_string(),
        }];

        let selected_nodes = MultiSelect::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptSelectModules.to_string())
            .items(&node_descriptions.iter().map(|module| &module.name).collect::<Vec<_>>())
            .interact()?;

        for &selection in &selected_nodes {
            match node_descriptions[selection].key.as_str() {
                "display" => {
                    let default = config.display.clone().unwrap_or_default();
                    msg_print!(Message::ConfigModuleDisplay);

                    let filters = [TaskFilter::All, TaskFilter::Active, TaskFilter::Completed];
                    let initial = filters.iter().position(|f| *f == default.default_filter).unwrap_or(0);
                    let choice = Select::with_theme(&ColorfulTheme::default())
                        .with_prompt(Message::PromptDefaultFilter.to_string())
                        .items(&["all", "active", "completed"])
                        .default(initial)
                        .interact()?;

                    config.display = Some(DisplayConfig {
                        default_filter: filters[choice],
                    });
                }
                _ => {}
            }
        }

        Ok(config)
    }
}
