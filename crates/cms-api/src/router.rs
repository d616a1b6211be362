// ============================================================================
// CMS API - Router
// File: crates/cms-api/src/router.rs
// ============================================================================

use axum::{
    extract::{DefaultBodyLimit, FromRef},
    http::{header, Method},
    middleware,
    routing::{get, post},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    services::ServeDir,
    trace::{DefaultMakeSpan, TraceLayer},
};

use cms_core::domain::{
    AboutSection, Branch, CalculatorConfig, NewsItem, Record, Slide, Stat, TeamMember,
};
use cms_core::services::ContentService;

use crate::handlers::{calculator, crud, health, menus, news, pages, rates, site, upload};
use crate::middleware::{harden_uploads, require_admin};
use crate::state::AppState;

/// Admin CRUD routes for one `ContentService`-backed resource.
fn crud_routes<E: Record>() -> Router<AppState>
where
    ContentService<E>: FromRef<AppState>,
{
    let collection = format!("/{}", E::RESOURCE);
    let item = format!("/{}/{{id}}", E::RESOURCE);
    Router::new()
        .route(&collection, get(crud::list::<E>).post(crud::create::<E>))
        .route(
            &item,
            get(crud::get_one::<E>)
                .put(crud::update::<E>)
                .delete(crud::delete::<E>),
        )
}

fn public_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health::health_check))
        .route("/api/menu", get(menus::public_tree))
        .route("/api/news", get(news::listing))
        .route("/api/news/home", get(news::spotlight))
        .route("/api/news/{id}", get(news::article))
        .route("/api/pages/{slug}", get(pages::published))
        .route("/api/slides", get(site::slides))
        .route("/api/branches", get(site::branches))
        .route("/api/team", get(site::team))
        .route("/api/stats", get(site::stats))
        .route("/api/about", get(site::about))
        .route("/api/rates", get(rates::ticker))
        .route("/api/calculator", get(calculator::products))
        .route("/api/calculator/estimate", post(calculator::estimate_loan))
}

fn admin_api_routes(state: &AppState) -> Router<AppState> {
    // Multipart framing needs some headroom over the file itself
    let upload_limit = upload::max_bytes(&state.config.uploads) as usize + 64 * 1024;

    Router::new()
        .merge(crud_routes::<Slide>())
        .merge(crud_routes::<NewsItem>())
        .merge(crud_routes::<CalculatorConfig>())
        .merge(crud_routes::<Branch>())
        .merge(crud_routes::<TeamMember>())
        .merge(crud_routes::<Stat>())
        .merge(crud_routes::<AboutSection>())
        .route("/pages", get(pages::list).post(pages::create))
        .route(
            "/pages/{id}",
            get(pages::get_one).put(pages::update).delete(pages::delete),
        )
        .route("/menu", get(menus::list).post(menus::create))
        .route("/menu/tree", get(menus::admin_tree))
        .route(
            "/menu/{id}",
            get(menus::get_one).put(menus::update).delete(menus::delete),
        )
        .route(
            "/upload",
            post(upload::upload_image).layer(DefaultBodyLimit::max(upload_limit)),
        )
}

/// Builds the full application: public site API, uploaded files, and the
/// admin API plus admin assets behind basic authentication.
pub fn build_router(state: AppState) -> Router {
    let upload_dir = state.config.uploads.dir.clone();
    let upload_path = state.config.uploads.public_path.clone();
    let admin_static_dir = state.config.app.admin_static_dir.clone();

    let admin = Router::new()
        .nest("/api/admin", admin_api_routes(&state))
        .nest_service("/admin", ServeDir::new(admin_static_dir))
        // route_layer keeps the gate off the shared 404 fallback
        .route_layer(middleware::from_fn_with_state(state.clone(), require_admin));

    let uploads: Router<AppState> = Router::new()
        .nest_service(&upload_path, ServeDir::new(upload_dir))
        .route_layer(middleware::map_response(harden_uploads));

    Router::new()
        .merge(public_routes())
        .merge(admin)
        .merge(uploads)
        .with_state(state)
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods([
                    Method::GET,
                    Method::POST,
                    Method::PUT,
                    Method::DELETE,
                    Method::OPTIONS,
                ])
                .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION]),
        )
        .layer(TraceLayer::new_for_http().make_span_with(DefaultMakeSpan::default()))
}
