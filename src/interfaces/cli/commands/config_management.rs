//! Configuration management commands

use std::io::{self, BufRead, Write};
use std::path::Path;

use colored::Colorize;

use crate::interfaces::cli::CliError;
use crate::system::app_config::{AppConfig, get_config};

/// Generate example configuration file
pub fn config_generate(output_path: Option<String>, force: bool) -> Result<(), CliError> {
    let path = output_path.unwrap_or_else(|| "config.example.toml".to_string());

    // 检查文件是否存在,非 --force 模式下交互确认
    if !force && Path::new(&path).exists() {
        print!(
            "{} {} {}",
            "File already exists:".yellow(),
            path.blue(),
            "Overwrite? [y/N] ".yellow()
        );
        io::stdout().flush().map_err(|e| CliError::ConfigError(e.to_string()))?;

        let mut input = String::new();
        io::stdin()
            .lock()
            .read_line(&mut input)
            .map_err(|e| CliError::ConfigError(e.to_string()))?;
        if !input.trim().eq_ignore_ascii_case("y") {
            println!("{}", "Aborted.".red());
            return Ok(());
        }
    }

    println!(
        "{} {}",
        "Generating configuration file...".yellow(),
        path.blue()
    );

    match std::fs::write(&path, AppConfig::generate_sample_config()) {
        Ok(()) => {
            println!(
                "  {} {}",
                "Configuration file generated successfully".green(),
                path.blue()
            );
            println!(
                "  {}",
                "Fill in the relay credentials to enable the contact form".dimmed()
            );
            Ok(())
        }
        Err(e) => {
            println!(
                "  {} {}",
                "Failed to generate configuration file".red(),
                e.to_string().red()
            );
            Err(CliError::ConfigError(format!(
                "unable to write configuration file: {}",
                e
            )))
        }
    }
}

/// Show the effective configuration
///
/// The relay public key is masked; it is not a secret in the strict sense
/// but there is no reason to echo it either.
pub fn config_show() -> Result<(), CliError> {
    let mut config = get_config().clone();
    if !config.relay.public_key.is_empty() {
        config.relay.public_key = "***".to_string();
    }

    let rendered = toml::to_string_pretty(&config)
        .map_err(|e| CliError::ConfigError(e.to_string()))?;

    println!("{}", "Effective configuration:".bold().green());
    println!();
    for line in rendered.lines() {
        if line.starts_with('[') {
            println!("{}", line.cyan().bold());
        } else {
            println!("{}", line);
        }
    }
    Ok(())
}
