//! Portfolio document read and replace.

use axum::{Json, extract::State, extract::rejection::JsonRejection};
use chrono::Utc;
use serde::Deserialize;

use folio_core::{Education, Portfolio, Profile, Project, SiteSettings, Skill, SocialLink};

use crate::db::PortfolioRepository;
use crate::error::{AppError, Result};
use crate::middleware::RequireAdmin;
use crate::state::AppState;

/// Typed input contract for a full-document replace.
///
/// Every section is defaultable: an omitted list becomes empty (a save
/// wipes what it does not carry - the editor always submits the whole
/// document), an omitted profile or settings object falls back to the
/// stored-document defaults. Fields of the wrong type are a 400, not a
/// silent coercion.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdatePortfolio {
    #[serde(default)]
    owner_email: String,
    #[serde(default)]
    profile: Profile,
    #[serde(default)]
    settings: SiteSettings,
    #[serde(default)]
    skills: Vec<Skill>,
    #[serde(default)]
    projects: Vec<Project>,
    #[serde(default)]
    education: Vec<Education>,
    #[serde(default)]
    social_links: Vec<SocialLink>,
}

impl UpdatePortfolio {
    /// Build the full document to persist. The repository stamps
    /// `updatedAt` at save time.
    fn into_document(self) -> Portfolio {
        Portfolio {
            owner_email: self.owner_email,
            profile: self.profile,
            settings: self.settings,
            skills: self.skills,
            projects: self.projects,
            education: self.education,
            social_links: self.social_links,
            updated_at: Utc::now(),
        }
    }
}

/// `GET /api/portfolio`
///
/// Public read. Materializes the starter document on first request.
pub async fn show(State(state): State<AppState>) -> Result<Json<Portfolio>> {
    let document = PortfolioRepository::new(state.pool())
        .get_or_create()
        .await?;
    Ok(Json(document))
}

/// `GET /api/admin/portfolio`
///
/// Identical read, behind the bearer token; the editor loads its form
/// through the authenticated surface.
pub async fn show_admin(
    _admin: RequireAdmin,
    State(state): State<AppState>,
) -> Result<Json<Portfolio>> {
    let document = PortfolioRepository::new(state.pool())
        .get_or_create()
        .await?;
    Ok(Json(document))
}

/// `PUT /api/admin/portfolio`
///
/// Full-document replace. Returns the document as saved, `updatedAt`
/// included.
pub async fn replace(
    _admin: RequireAdmin,
    State(state): State<AppState>,
    payload: std::result::Result<Json<UpdatePortfolio>, JsonRejection>,
) -> Result<Json<Portfolio>> {
    let Json(update) = payload.map_err(|rejection| AppError::BadRequest(rejection.body_text()))?;

    let saved = PortfolioRepository::new(state.pool())
        .replace(update.into_document())
        .await?;

    Ok(Json(saved))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn omitted_sections_default_to_empty() {
        let update: UpdatePortfolio = serde_json::from_str("{}").unwrap();
        let document = update.into_document();

        assert!(document.owner_email.is_empty());
        assert!(document.skills.is_empty());
        assert!(document.projects.is_empty());
        assert!(document.education.is_empty());
        assert!(document.social_links.is_empty());
        assert_eq!(document.profile, Profile::default());
        assert_eq!(document.settings, SiteSettings::default());
    }

    #[test]
    fn non_array_list_field_is_rejected() {
        // A list field must be an array; wrong types are refused, not
        // coerced to empty.
        let result: std::result::Result<UpdatePortfolio, _> =
            serde_json::from_str(r#"{"skills": 5}"#);
        assert!(result.is_err());
    }

    #[test]
    fn out_of_range_skill_level_is_rejected() {
        let result: std::result::Result<UpdatePortfolio, _> =
            serde_json::from_str(r#"{"skills": [{"name": "Rust", "level": 150}]}"#);
        assert!(result.is_err());
    }

    #[test]
    fn well_formed_body_is_preserved() {
        let update: UpdatePortfolio = serde_json::from_str(
            r#"{
                "ownerEmail": "ada@example.com",
                "profile": {"fullName": "Ada Lovelace", "headline": "Engineer"},
                "settings": {"brandName": "Ada", "tagline": "Notes"},
                "skills": [{"name": "Rust", "category": "Systems", "level": 95}],
                "projects": [{"title": "Engine", "techStack": ["Rust"]}],
                "education": [{"institution": "Analytical U", "degree": "BSc"}],
                "socialLinks": [{"platform": "GitHub", "url": "https://github.com/ada"}]
            }"#,
        )
        .unwrap();

        let document = update.into_document();
        assert_eq!(document.owner_email, "ada@example.com");
        assert_eq!(document.profile.full_name, "Ada Lovelace");
        // Partial profile objects fall back per-field
        assert_eq!(document.profile.bio, Profile::default().bio);
        assert_eq!(document.skills.len(), 1);
        assert_eq!(document.skills[0].level.as_u8(), 95);
        assert_eq!(document.projects[0].tech_stack, vec!["Rust"]);
    }

    #[test]
    fn missing_required_entry_field_is_rejected() {
        let result: std::result::Result<UpdatePortfolio, _> =
            serde_json::from_str(r#"{"education": [{"institution": "Analytical U"}]}"#);
        assert!(result.is_err());
    }
}
