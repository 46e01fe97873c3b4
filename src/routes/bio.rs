use actix_web::{web, HttpResponse, Responder};
use uuid::Uuid;
use validator::Validate;
use crate::models::{BioRequestResponse, BioResponse, ErrorResponse, GenerateBioRequest};
use crate::routes::AppState;
use crate::services::BioRequestState;

/// Configure bio assist routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg
        .route("/bio/generate", web::post().to(generate_bio))
        .route("/bio/requests", web::post().to(start_bio_request))
        .route("/bio/requests/{id}", web::get().to(get_bio_request));
}

fn keywords_missing(errors: validator::ValidationErrors) -> HttpResponse {
    HttpResponse::BadRequest().json(ErrorResponse {
        error: "Validation failed".to_string(),
        message: errors.to_string(),
        status_code: 400,
    })
}

/// Generate a biography and wait for it
///
/// POST /api/v1/bio/generate
///
/// Always answers 200 with text for the bio field, which may be a
/// configuration or failure message instead of a biography.
async fn generate_bio(
    state: web::Data<AppState>,
    req: web::Json<GenerateBioRequest>,
) -> impl Responder {
    if let Err(errors) = req.validate() {
        return keywords_missing(errors);
    }

    let bio = state.bio_assist.generate_bio(&req.keywords).await;
    HttpResponse::Ok().json(BioResponse { bio })
}

/// Start a tracked biography request
///
/// POST /api/v1/bio/requests
///
/// Answers 202 with the request id; poll `GET /api/v1/bio/requests/{id}`.
async fn start_bio_request(
    state: web::Data<AppState>,
    req: web::Json<GenerateBioRequest>,
) -> impl Responder {
    if let Err(errors) = req.validate() {
        return keywords_missing(errors);
    }

    let request_id = state.bio_requests.lock().await.begin();
    let keywords = req.into_inner().keywords;
    let bio_assist = state.bio_assist.clone();
    let bio_requests = state.bio_requests.clone();

    tracing::debug!("Started bio request {}", request_id);

    tokio::spawn(async move {
        let outcome = bio_assist.generate(&keywords).await;
        bio_requests.lock().await.complete(request_id, outcome);
        tracing::debug!("Finished bio request {}", request_id);
    });

    HttpResponse::Accepted().json(BioRequestResponse {
        request_id,
        state: BioRequestState::Pending,
    })
}

/// State of a tracked biography request
///
/// GET /api/v1/bio/requests/{id}
async fn get_bio_request(
    state: web::Data<AppState>,
    path: web::Path<Uuid>,
) -> impl Responder {
    let request_id = path.into_inner();

    match state.bio_requests.lock().await.get(&request_id) {
        Some(request_state) => HttpResponse::Ok().json(BioRequestResponse {
            request_id,
            state: request_state.clone(),
        }),
        None => HttpResponse::NotFound().json(ErrorResponse {
            error: "Not found".to_string(),
            message: format!("Bio request not found: {}", request_id),
            status_code: 404,
        }),
    }
}
