use actix_web::HttpResponse;
use serde_json::json;

/// Mandatory privacy policy.
pub async fn privacy_policy() -> HttpResponse {
    HttpResponse::Ok().json(json!({
        "success": true,
        "message": "Privacy policy",
        "data": {
            "title": "About | Privacy policy",
            "policy": "This service stores the userid, display name and score \
                predictions of registered participants, solely to compute and \
                publish the prediction league ranking. No data is shared with \
                third parties. Contact the league admin to have your data \
                removed."
        }
    }))
}
