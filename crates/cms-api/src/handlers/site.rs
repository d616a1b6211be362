//! Read-only public endpoints for the home and about pages

use axum::extract::State;

use cms_core::domain::{AboutSection, Branch, Slide, Stat, TeamMember};
use cms_core::services::ContentService;

use crate::response::{ok, ApiResult};

/// GET /api/slides - active slides in display order
pub async fn slides(State(service): State<ContentService<Slide>>) -> ApiResult<Vec<Slide>> {
    let mut slides: Vec<Slide> = service
        .list()
        .await?
        .into_iter()
        .filter(|slide| slide.is_active)
        .collect();
    slides.sort_by_key(|slide| slide.order);
    Ok(ok(slides))
}

/// GET /api/branches
pub async fn branches(State(service): State<ContentService<Branch>>) -> ApiResult<Vec<Branch>> {
    Ok(ok(service.list().await?))
}

/// GET /api/team - active members in display order
pub async fn team(
    State(service): State<ContentService<TeamMember>>,
) -> ApiResult<Vec<TeamMember>> {
    let mut team: Vec<TeamMember> = service
        .list()
        .await?
        .into_iter()
        .filter(|member| member.is_active)
        .collect();
    team.sort_by_key(|member| member.order);
    Ok(ok(team))
}

/// GET /api/stats
pub async fn stats(State(service): State<ContentService<Stat>>) -> ApiResult<Vec<Stat>> {
    let mut stats = service.list().await?;
    stats.sort_by_key(|stat| stat.order);
    Ok(ok(stats))
}

/// GET /api/about
pub async fn about(
    State(service): State<ContentService<AboutSection>>,
) -> ApiResult<Vec<AboutSection>> {
    let mut sections = service.list().await?;
    sections.sort_by_key(|section| section.order);
    Ok(ok(sections))
}
