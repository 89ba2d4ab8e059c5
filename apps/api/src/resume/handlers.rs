//! Axum route handlers for resume optimization and PDF text extraction.

use axum::extract::{Multipart, State};
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::resume::prompts::{build_resume_prompt, RESUME_MAX_TOKENS};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct OptimizeResumeRequest {
    #[serde(rename = "currentResume", default)]
    pub current_resume: String,
    #[serde(rename = "jobDescription", default)]
    pub job_description: String,
}

#[derive(Debug, Serialize)]
pub struct OptimizeResumeResponse {
    #[serde(rename = "optimizedResume")]
    pub optimized_resume: String,
}

#[derive(Debug, Serialize)]
pub struct ParsePdfResponse {
    pub text: String,
}

/// POST /api/v1/optimize-resume
///
/// Stateless pipeline: validate both fields, one completion call, return the
/// model's text verbatim. Nothing is persisted and there is no retry.
pub async fn handle_optimize_resume(
    State(state): State<AppState>,
    Json(request): Json<OptimizeResumeRequest>,
) -> Result<Json<OptimizeResumeResponse>, AppError> {
    if request.current_resume.trim().is_empty() || request.job_description.trim().is_empty() {
        return Err(AppError::Validation(
            "Missing resume or job description".to_string(),
        ));
    }

    let prompt = build_resume_prompt(&request.current_resume, &request.job_description);

    let optimized_resume = state
        .llm
        .complete(&prompt, RESUME_MAX_TOKENS)
        .await
        .map_err(|e| AppError::Llm(format!("Resume optimization call failed: {e}")))?;

    Ok(Json(OptimizeResumeResponse { optimized_resume }))
}

/// POST /api/v1/parse-pdf
///
/// Multipart upload with a `file` field. PDF uploads (detected by magic
/// bytes) get real text extraction; anything else is treated as UTF-8 text.
pub async fn handle_parse_pdf(
    mut multipart: Multipart,
) -> Result<Json<ParsePdfResponse>, AppError> {
    let mut file: Option<bytes::Bytes> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Validation(format!("Invalid multipart payload: {e}")))?
    {
        if field.name() == Some("file") {
            let data = field
                .bytes()
                .await
                .map_err(|e| AppError::Validation(format!("Failed to read upload: {e}")))?;
            file = Some(data);
        }
    }

    let data = file.ok_or_else(|| AppError::Validation("No file provided".to_string()))?;

    let text = if data.starts_with(b"%PDF") {
        pdf_extract::extract_text_from_mem(&data)
            .map_err(|e| AppError::Internal(anyhow::anyhow!("PDF extraction failed: {e}")))?
    } else {
        String::from_utf8_lossy(&data).into_owned()
    };

    Ok(Json(ParsePdfResponse { text }))
}
