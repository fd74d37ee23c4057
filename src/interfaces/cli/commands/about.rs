//! About command
//!
//! Prints the profile to stdout for people who pipe instead of browse.

use colored::Colorize;

use crate::content;
use crate::interfaces::cli::CliError;
use crate::system::app_config::get_config;

pub fn about(portfolio: Option<String>) -> Result<(), CliError> {
    let path = portfolio.unwrap_or_else(|| get_config().content.path.clone());
    let profile =
        content::load_profile(&path).map_err(|e| CliError::ContentError(e.to_string()))?;

    for line in content::banner_art().lines() {
        println!("{}", line.cyan());
    }
    println!();
    println!("{}", profile.name.bold().white());
    println!("{}", profile.headline.cyan());
    if !profile.location.is_empty() {
        println!("{}", profile.location.dimmed());
    }
    println!();

    for paragraph in &profile.about {
        println!("{}", paragraph);
        println!();
    }

    if !profile.stats.is_empty() {
        let rendered: Vec<String> = profile
            .stats
            .iter()
            .map(|s| format!("{}+ {}", s.target.to_string().green().bold(), s.label))
            .collect();
        println!("{}", rendered.join("   ·   "));
        println!();
    }

    if !profile.projects.is_empty() {
        println!("{}", "Projects:".bold().green());
        for project in &profile.projects {
            println!(
                "  {} {} {}",
                "▸".magenta(),
                project.name.cyan().bold(),
                project.description.dimmed()
            );
            if !project.link.is_empty() {
                println!("    {}", project.link.blue().underline());
            }
        }
        println!();
    }

    if !profile.email.is_empty() {
        println!("{} {}", "Say hi:".yellow(), profile.email.blue().underline());
    }
    for social in &profile.socials {
        println!("  {} {}", social.label.white(), social.url.blue());
    }
    println!();
    // The same wink the page hides in its developer console.
    println!(
        "{}",
        "Hey there, curious one. You just found the dev build."
            .dimmed()
            .italic()
    );

    Ok(())
}
