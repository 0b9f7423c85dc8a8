//! The portfolio document model.
//!
//! A Folio deployment persists exactly one [`Portfolio`] document. The wire
//! shape (camelCase field names) is shared by the persisted JSON, the public
//! read API, and the admin editor, so the types here are the single source
//! of truth for all three.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::SkillLevel;

/// The single persisted aggregate holding all profile and content data.
///
/// Created lazily with [`Portfolio::starter`] content on first read, then
/// replaced wholesale on each admin save. `updated_at` is set on every write.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Portfolio {
    /// Optional contact identifier; empty when unset.
    #[serde(default)]
    pub owner_email: String,
    pub profile: Profile,
    pub settings: SiteSettings,
    pub skills: Vec<Skill>,
    pub projects: Vec<Project>,
    pub education: Vec<Education>,
    pub social_links: Vec<SocialLink>,
    pub updated_at: DateTime<Utc>,
}

/// Profile section: who the site belongs to.
///
/// Every field is defaultable; a partial payload fills the gaps with the
/// stored-document defaults rather than failing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Profile {
    pub full_name: String,
    pub headline: String,
    pub bio: String,
    pub location: String,
    pub avatar_url: String,
    pub resume_url: String,
}

impl Default for Profile {
    fn default() -> Self {
        Self {
            full_name: "Your Name".to_owned(),
            headline: "Professional headline".to_owned(),
            bio: "Add your bio from admin panel.".to_owned(),
            location: String::new(),
            avatar_url: String::new(),
            resume_url: String::new(),
        }
    }
}

/// Site-wide branding settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SiteSettings {
    pub brand_name: String,
    pub tagline: String,
}

impl Default for SiteSettings {
    fn default() -> Self {
        Self {
            brand_name: "Portfolio".to_owned(),
            tagline: "Professional portfolio website".to_owned(),
        }
    }
}

/// A single skill entry. `name` is required; the rest is defaultable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Skill {
    pub name: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub level: SkillLevel,
}

/// A showcased project. `title` is required; the rest is defaultable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub title: String,
    #[serde(default)]
    pub summary: String,
    #[serde(default)]
    pub live_url: String,
    #[serde(default)]
    pub repo_url: String,
    #[serde(default)]
    pub image_url: String,
    #[serde(default)]
    pub tech_stack: Vec<String>,
}

/// An education entry. `institution` and `degree` are required.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Education {
    pub institution: String,
    pub degree: String,
    #[serde(default)]
    pub year: String,
    #[serde(default)]
    pub description: String,
}

/// A social link. Both fields are required.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SocialLink {
    pub platform: String,
    pub url: String,
}

impl Portfolio {
    /// Starter content used to materialize the document on first read.
    ///
    /// A freshly deployed site renders something presentable, and every
    /// field demonstrates where its content shows up in the admin editor.
    #[must_use]
    pub fn starter() -> Self {
        Self {
            owner_email: String::new(),
            profile: Profile {
                full_name: "Your Name".to_owned(),
                headline: "Building clean and useful products".to_owned(),
                bio: "Use admin panel to edit this portfolio content.".to_owned(),
                location: "Your City".to_owned(),
                avatar_url: String::new(),
                resume_url: String::new(),
            },
            settings: SiteSettings::default(),
            skills: vec![
                Skill {
                    name: "React".to_owned(),
                    category: "Frontend".to_owned(),
                    level: SkillLevel::new(85).unwrap_or_default(),
                },
                Skill {
                    name: "Node.js".to_owned(),
                    category: "Backend".to_owned(),
                    level: SkillLevel::new(80).unwrap_or_default(),
                },
            ],
            projects: vec![Project {
                title: "Portfolio Website".to_owned(),
                summary: "Editable portfolio with private admin section.".to_owned(),
                live_url: String::new(),
                repo_url: String::new(),
                image_url: String::new(),
                tech_stack: vec![
                    "React".to_owned(),
                    "Node.js".to_owned(),
                    "PostgreSQL".to_owned(),
                ],
            }],
            education: vec![Education {
                institution: "Your College".to_owned(),
                degree: "Your Degree".to_owned(),
                year: "2024".to_owned(),
                description: String::new(),
            }],
            social_links: vec![
                SocialLink {
                    platform: "GitHub".to_owned(),
                    url: "https://github.com/".to_owned(),
                },
                SocialLink {
                    platform: "LinkedIn".to_owned(),
                    url: "https://linkedin.com/".to_owned(),
                },
            ],
            updated_at: Utc::now(),
        }
    }
}
