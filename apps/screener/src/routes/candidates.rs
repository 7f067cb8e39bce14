use std::path::PathBuf;

use anyhow::anyhow;
use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::errors::AppError;
use crate::models::candidate::{CandidateProfile, ParsedCandidate};
use crate::scoring::breakdown::{get_score_breakdown, ScoreBreakdown};
use crate::scoring::calculate_score;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct ParseResumeRequest {
    #[serde(default)]
    pub resume_path: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct ScoreResponse {
    pub score: f64,
}

/// POST /parse-resume
pub async fn handle_parse_resume(
    State(state): State<AppState>,
    Json(req): Json<ParseResumeRequest>,
) -> Result<Json<ParsedCandidate>, AppError> {
    let path = req
        .resume_path
        .filter(|p| !p.trim().is_empty())
        .map(PathBuf::from)
        .ok_or_else(|| AppError::Validation("resume_path is required".to_string()))?;

    if !path.exists() {
        return Err(AppError::NotFound("Resume file not found".to_string()));
    }

    let parser = state.parser.clone();
    let parse_path = path.clone();
    let candidate = tokio::task::spawn_blocking(move || parser.parse(&parse_path))
        .await
        .map_err(|e| AppError::Internal(anyhow!("Resume parse task failed: {e}")))??;

    let score = calculate_score(&candidate.profile());
    info!(path = %path.display(), score, "Scored resume");
    Ok(Json(candidate.with_score(score)))
}

/// POST /score-candidate
pub async fn handle_score_candidate(Json(profile): Json<CandidateProfile>) -> Json<ScoreResponse> {
    Json(ScoreResponse {
        score: calculate_score(&profile),
    })
}

/// POST /score-candidate/breakdown
pub async fn handle_score_breakdown(Json(profile): Json<CandidateProfile>) -> Json<ScoreBreakdown> {
    Json(get_score_breakdown(&profile))
}
