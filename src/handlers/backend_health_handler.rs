use actix_web::HttpResponse;
use chrono::Utc;
use serde_json::json;

pub async fn backend_health_check() -> HttpResponse {
    HttpResponse::Ok().json(json!({
        "status": "OK",
        "message": "Athlete Tracker API is running",
        "timestamp": Utc::now().to_rfc3339(),
    }))
}
