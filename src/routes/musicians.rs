use actix_web::{web, HttpResponse, Responder};
use validator::Validate;
use crate::core::{CatalogError, CatalogStore};
use crate::models::{
    ErrorResponse, FavoriteToggleResponse, FilterRequest, FilterResponse, HealthResponse,
    MusicianView, MusiciansResponse, Profile, ProfileDraft, ProfileForm, ThemeResponse,
};
use crate::routes::AppState;

/// Configure catalog, favorites and theme routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg
        .route("/health", web::get().to(health_check))
        .route("/musicians", web::get().to(list_musicians))
        .route("/musicians", web::post().to(register_musician))
        .route("/musicians/{id}", web::get().to(get_musician))
        .route("/musicians/{id}", web::put().to(edit_musician))
        .route("/musicians/{id}/draft", web::get().to(get_draft))
        .route("/filter", web::get().to(get_filter))
        .route("/filter", web::put().to(set_filter))
        .route("/facets", web::get().to(get_facets))
        .route("/favorites", web::get().to(list_favorites))
        .route("/favorites/{id}/toggle", web::post().to(toggle_favorite))
        .route("/theme", web::get().to(get_theme))
        .route("/theme/toggle", web::post().to(toggle_theme));
}

fn to_views(store: &CatalogStore, profiles: &[Profile]) -> Vec<MusicianView> {
    profiles
        .iter()
        .map(|profile| MusicianView {
            is_favorite: store.is_favorite(&profile.id),
            profile: profile.clone(),
        })
        .collect()
}

fn listing(store: &CatalogStore, profiles: &[Profile]) -> MusiciansResponse {
    let musicians = to_views(store, profiles);
    MusiciansResponse {
        total: musicians.len(),
        musicians,
    }
}

fn filter_response(store: &CatalogStore) -> FilterResponse {
    let musicians = to_views(store, store.filtered());
    FilterResponse {
        filter: store.filter().clone(),
        total: musicians.len(),
        musicians,
    }
}

fn validation_failed(errors: validator::ValidationErrors) -> HttpResponse {
    HttpResponse::BadRequest().json(ErrorResponse {
        error: "Validation failed".to_string(),
        message: errors.to_string(),
        status_code: 400,
    })
}

fn not_found(err: CatalogError) -> HttpResponse {
    HttpResponse::NotFound().json(ErrorResponse {
        error: "Not found".to_string(),
        message: err.to_string(),
        status_code: 404,
    })
}

/// Health check endpoint
async fn health_check() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: chrono::Utc::now(),
    })
}

/// Filtered musician listing
///
/// GET /api/v1/musicians
async fn list_musicians(state: web::Data<AppState>) -> impl Responder {
    let store = state.store.lock().await;
    HttpResponse::Ok().json(listing(&store, store.filtered()))
}

/// Register a musician
///
/// POST /api/v1/musicians
///
/// Request body:
/// ```json
/// {
///   "name": "string",
///   "location": "string",
///   "instruments": "Sax, Clarinet",
///   "genres": "Jazz, Soul",
///   "bio": "string",
///   "email": "string",
///   "portfolio": "https://...",
///   "image": "data:image/png;base64,..."
/// }
/// ```
async fn register_musician(
    state: web::Data<AppState>,
    req: web::Json<ProfileForm>,
) -> impl Responder {
    if let Err(errors) = req.validate() {
        tracing::info!("Validation failed for registration: {}", errors);
        return validation_failed(errors);
    }

    let draft = ProfileDraft::from(req.into_inner());
    let profile = state.store.lock().await.register(draft);

    HttpResponse::Created().json(profile)
}

/// Single musician
///
/// GET /api/v1/musicians/{id}
async fn get_musician(state: web::Data<AppState>, path: web::Path<String>) -> impl Responder {
    let id = path.into_inner();
    let store = state.store.lock().await;

    match store.get(&id) {
        Some(profile) => HttpResponse::Ok().json(MusicianView {
            is_favorite: store.is_favorite(&id),
            profile: profile.clone(),
        }),
        None => not_found(CatalogError::NotFound(id)),
    }
}

/// Edit form contents for a musician
///
/// GET /api/v1/musicians/{id}/draft
async fn get_draft(state: web::Data<AppState>, path: web::Path<String>) -> impl Responder {
    let id = path.into_inner();
    let store = state.store.lock().await;

    match store.get(&id) {
        Some(profile) => HttpResponse::Ok().json(ProfileDraft::from_profile(profile)),
        None => not_found(CatalogError::NotFound(id)),
    }
}

/// Apply an edit form
///
/// PUT /api/v1/musicians/{id}
async fn edit_musician(
    state: web::Data<AppState>,
    path: web::Path<String>,
    req: web::Json<ProfileForm>,
) -> impl Responder {
    if let Err(errors) = req.validate() {
        tracing::info!("Validation failed for edit: {}", errors);
        return validation_failed(errors);
    }

    let id = path.into_inner();
    let draft = ProfileDraft::from(req.into_inner());

    match state.store.lock().await.edit(&id, draft) {
        Ok(profile) => HttpResponse::Ok().json(profile),
        Err(e) => {
            tracing::warn!("Edit rejected: {}", e);
            not_found(e)
        }
    }
}

/// Current filter and its results
///
/// GET /api/v1/filter
async fn get_filter(state: web::Data<AppState>) -> impl Responder {
    let store = state.store.lock().await;
    HttpResponse::Ok().json(filter_response(&store))
}

/// Replace the filter
///
/// PUT /api/v1/filter
///
/// Request body:
/// ```json
/// { "search": "string", "instrument": "string", "genre": "string" }
/// ```
async fn set_filter(
    state: web::Data<AppState>,
    req: web::Json<FilterRequest>,
) -> impl Responder {
    let mut store = state.store.lock().await;
    store.set_filter(req.into_inner().into());

    HttpResponse::Ok().json(filter_response(&store))
}

/// Instrument and genre selector values
///
/// GET /api/v1/facets
async fn get_facets(state: web::Data<AppState>) -> impl Responder {
    let store = state.store.lock().await;
    HttpResponse::Ok().json(store.facets())
}

/// Favorited musicians in catalog order
///
/// GET /api/v1/favorites
async fn list_favorites(state: web::Data<AppState>) -> impl Responder {
    let store = state.store.lock().await;
    HttpResponse::Ok().json(listing(&store, store.favorited()))
}

/// Toggle a favorite
///
/// POST /api/v1/favorites/{id}/toggle
async fn toggle_favorite(state: web::Data<AppState>, path: web::Path<String>) -> impl Responder {
    let id = path.into_inner();
    let is_favorite = state.store.lock().await.toggle_favorite(&id);

    HttpResponse::Ok().json(FavoriteToggleResponse { id, is_favorite })
}

/// Current display theme
///
/// GET /api/v1/theme
async fn get_theme(state: web::Data<AppState>) -> impl Responder {
    let theme = state.store.lock().await.theme();
    HttpResponse::Ok().json(ThemeResponse { theme })
}

/// Flip the display theme
///
/// POST /api/v1/theme/toggle
async fn toggle_theme(state: web::Data<AppState>) -> impl Responder {
    let theme = state.store.lock().await.toggle_theme();
    HttpResponse::Ok().json(ThemeResponse { theme })
}
