use actix_multipart::form::{tempfile::TempFile, MultipartForm};
use actix_web::{web, HttpResponse};
use serde_json::json;
use sqlx::PgPool;

use crate::errors::ApiError;
use crate::imports::{ImportError, PredictionImporter};
use crate::middleware::auth::Claims;
use crate::models::common::ApiResponse;

#[derive(Debug, MultipartForm)]
pub struct PredictionUploadForm {
    #[multipart(limit = "10MB")]
    pub file: TempFile,
}

/// Ingest a zipped prediction sheet. A batch with any bad cell is rejected
/// as a whole and the report lists every offending cell.
#[tracing::instrument(
    name = "Upload prediction sheet",
    skip(form, pool, claims),
    fields(
        admin_user = %claims.userid,
        file_name = %form.file.file_name.as_deref().unwrap_or("unknown")
    )
)]
pub async fn upload_predictions(
    MultipartForm(form): MultipartForm<PredictionUploadForm>,
    pool: web::Data<PgPool>,
    claims: web::ReqData<Claims>,
) -> Result<HttpResponse, ApiError> {
    let bytes = std::fs::read(form.file.file.path()).map_err(|e| {
        tracing::error!("Failed to read uploaded file: {}", e);
        ApiError::Validation("failed to read uploaded file".to_string())
    })?;

    let importer = PredictionImporter::new(pool.get_ref().clone());
    match importer.import_archive(&bytes).await {
        Ok(outcome) if outcome.accepted() => {
            Ok(HttpResponse::Ok().json(ApiResponse::success("Predictions imported", outcome)))
        }
        Ok(outcome) => Ok(HttpResponse::BadRequest().json(json!({
            "success": false,
            "message": "Prediction import rejected",
            "data": outcome
        }))),
        Err(ImportError::Database(e)) => Err(ApiError::Database(e)),
        Err(e) => {
            tracing::info!("Rejected prediction archive: {}", e);
            Err(ApiError::Validation(e.to_string()))
        }
    }
}
