//! `anon setup`: カスタムアップロード先の保存

use crate::commands::result::{CommandResult, SetupResult};
use crate::config::user::UserConfig;
use crate::presentation::input::ConsolePrompter;
use anyhow::{Context, Result};
use std::io::{BufRead, Write};
use std::path::Path;

/// `url` を `custom_url` として保存する（未指定なら端末で尋ねる）
pub fn execute(url: Option<String>) -> Result<CommandResult> {
    let config_path = UserConfig::config_path()?;
    let mut prompter = ConsolePrompter::stdio();
    setup_at(&config_path, url, &mut prompter)
}

fn setup_at<R: BufRead, W: Write>(
    config_path: &Path,
    url: Option<String>,
    prompter: &mut ConsolePrompter<R, W>,
) -> Result<CommandResult> {
    let mut config = UserConfig::load_from(config_path)
        .context("Failed to load user configuration. Please check your config.toml file.")?;

    let url = match url {
        Some(url) => Some(url),
        None => prompter.ask_custom_url()?,
    };

    let changed = match url {
        Some(url) => {
            config.set_custom_url(url.trim())?;
            config
                .save_to(config_path)
                .context("Failed to save configuration file")?;
            tracing::info!(path = %config_path.display(), "custom_url updated");
            true
        }
        None => false,
    };

    Ok(CommandResult::Setup(SetupResult {
        custom_url: config.custom_url,
        changed,
        config_path: config_path.display().to_string(),
    }))
}
