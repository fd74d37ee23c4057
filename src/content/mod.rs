//! Portfolio content model
//!
//! 定义页面各区块的数据结构，内容来自内嵌的默认档案或用户提供的 TOML 文件

use serde::{Deserialize, Serialize};
use strum::EnumIter;

mod loader;

pub use loader::{banner_art, load_default_profile, load_profile, load_profile_from_path};

/// The five navigable sections, in page order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter)]
pub enum SectionId {
    Home,
    About,
    Experience,
    Projects,
    Contact,
}

impl SectionId {
    /// Label shown in the navbar.
    pub fn title(&self) -> &'static str {
        match self {
            SectionId::Home => "Home",
            SectionId::About => "About",
            SectionId::Experience => "Experience",
            SectionId::Projects => "Projects",
            SectionId::Contact => "Contact",
        }
    }

    /// Position in page order, zero-based.
    pub fn index(&self) -> usize {
        match self {
            SectionId::Home => 0,
            SectionId::About => 1,
            SectionId::Experience => 2,
            SectionId::Projects => 3,
            SectionId::Contact => 4,
        }
    }

    /// Section bound to a number key, `'1'` through `'5'`.
    pub fn from_digit(c: char) -> Option<Self> {
        match c {
            '1' => Some(SectionId::Home),
            '2' => Some(SectionId::About),
            '3' => Some(SectionId::Experience),
            '4' => Some(SectionId::Projects),
            '5' => Some(SectionId::Contact),
            _ => None,
        }
    }
}

/// Everything the page renders. Deserialized from `portfolio.toml`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    pub name: String,
    pub headline: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub subtitle_lines: Vec<String>,
    #[serde(default)]
    pub badges: Vec<String>,
    #[serde(default)]
    pub about: Vec<String>,
    #[serde(default)]
    pub stats: Vec<Stat>,
    #[serde(default)]
    pub timeline: Vec<TimelineEntry>,
    #[serde(default)]
    pub projects: Vec<Project>,
    #[serde(default)]
    pub socials: Vec<SocialLink>,
}

/// A number that counts up when it scrolls into view.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Stat {
    pub label: String,
    pub target: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimelineEntry {
    pub period: String,
    pub role: String,
    pub company: String,
    #[serde(default)]
    pub summary: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub tech: Vec<String>,
    #[serde(default)]
    pub link: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SocialLink {
    pub label: String,
    pub url: String,
}
