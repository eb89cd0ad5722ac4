//! Configuration management

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::application::errors::ConfigError;
use crate::domain::entities::Region;

/// Bot configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct Config {
    pub bot: BotConfig,
    pub menus: MenuStoreConfig,
    pub filter: FilterConfig,
    pub messaging: MessagingConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct BotConfig {
    pub name: String,
    /// Sender number used by the console dev loop
    pub dev_sender: String,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct MenuStoreConfig {
    pub directory: PathBuf,
}

/// Word lists for the bundled vegetarian classifier
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct FilterConfig {
    pub safe_words: Vec<String>,
    pub danger_words: Vec<String>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct MessagingConfig {
    pub max_message_len: usize,
    pub default_region: Option<RegionConfig>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct RegionConfig {
    pub city: String,
    pub state: String,
}

impl From<RegionConfig> for Region {
    fn from(value: RegionConfig) -> Self {
        Region::new(value.city, value.state)
    }
}

const DEFAULT_SAFE_WORDS: &[&str] = &["vegan", "vegetarian"];

/// Words that disqualify a dish unless a safe word overrides them
const DEFAULT_DANGER_WORDS: &[&str] = &[
    "anchovy", "bacon", "beef", "brisket", "chicken", "chorizo", "clam", "crab",
    "duck", "fish", "ham", "lamb", "lobster", "meatball", "mussel", "oyster",
    "pastrami", "pepperoni", "pork", "prosciutto", "ribs", "salami", "salmon",
    "sausage", "scallop", "shrimp", "steak", "tuna", "turkey", "veal",
];

impl Default for Config {
    fn default() -> Self {
        Self {
            bot: BotConfig {
                name: "veggie-bot".to_string(),
                dev_sender: "+14155551234".to_string(),
            },
            menus: MenuStoreConfig {
                directory: PathBuf::from("./menus"),
            },
            filter: FilterConfig {
                safe_words: DEFAULT_SAFE_WORDS.iter().map(|s| s.to_string()).collect(),
                danger_words: DEFAULT_DANGER_WORDS.iter().map(|s| s.to_string()).collect(),
            },
            messaging: MessagingConfig {
                max_message_len: 1600,
                default_region: None,
            },
        }
    }
}

impl Config {
    pub fn load(path: impl Into<PathBuf>) -> Result<Self, ConfigError> {
        let path = path.into();
        let content = std::fs::read_to_string(&path)
            .map_err(|e| ConfigError::Parse(format!("Failed to read config: {}", e)))?;

        serde_yaml::from_str(&content)
            .map_err(|e| ConfigError::Parse(format!("Failed to parse config: {}", e)))
    }

    pub fn load_env() -> Self {
        // Load from environment variables
        let mut config = Config::default();

        if let Ok(dir) = std::env::var("MENU_DIR") {
            config.menus.directory = PathBuf::from(dir);
        }

        if let Ok(region) = std::env::var("DEFAULT_REGION") {
            if let Some((city, state)) = region.split_once(',') {
                config.messaging.default_region = Some(RegionConfig {
                    city: city.trim().to_string(),
                    state: state.trim().to_string(),
                });
            }
        }

        config
    }
}
