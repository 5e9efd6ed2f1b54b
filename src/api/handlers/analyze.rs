use crate::{
    AppState, research,
    types::{AnalysisResponse, AnalyzeRequest, Result},
};
use axum::{Json, extract::State};

/// Analyze a company against the fixed due-diligence questions
#[utoipa::path(
    post,
    path = "/analyze",
    request_body = AnalyzeRequest,
    responses(
        (status = 200, description = "Analysis completed", body = AnalysisResponse),
        (status = 400, description = "Company name missing or empty")
    ),
    tag = "analyze"
)]
pub async fn analyze(
    State(state): State<AppState>,
    Json(payload): Json<AnalyzeRequest>,
) -> Result<Json<AnalysisResponse>> {
    let company_name = payload.company_name.unwrap_or_default();

    let response = research::analyze_company(&state.config.research, &company_name).await?;

    Ok(Json(response))
}
