use dotenvy::dotenv;
use std::env;
use tracing::info;

pub struct Config {
    pub word_list_path: String,
    pub dictionary_path: String,
    pub locale: String,
}

/// Load configuration from the environment. Every setting has a default,
/// so this cannot fail.
pub fn load_config() -> Config {
    info!("Loading configuration");

    // Load environment variables
    dotenv().ok();

    let word_list_path =
        env::var("WORD_LIST_PATH").unwrap_or_else(|_| "./data/start.txt".to_string());

    let dictionary_path =
        env::var("DICTIONARY_FILE_PATH").unwrap_or_else(|_| "./data/words.txt".to_string());

    let locale = env::var("GAME_LOCALE").unwrap_or_else(|_| "en_US".to_string());

    Config {
        word_list_path,
        dictionary_path,
        locale,
    }
}
