//! Core types for Folio.
//!
//! The portfolio document model plus validated wrappers for constrained
//! domain values.

pub mod portfolio;
pub mod skill_level;

pub use portfolio::{
    Education, Portfolio, Profile, Project, SiteSettings, Skill, SocialLink,
};
pub use skill_level::{SkillLevel, SkillLevelError};
