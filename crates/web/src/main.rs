use std::sync::Arc;

use anyhow::Context;
use axum::{Json, Router, routing::get};
use serde_json::{Value, json};
use storage::Database;
use tower_http::cors::CorsLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

mod config;
mod error;
mod features;
mod middleware;
mod payments;
mod qr;
mod state;

use config::Config;
use middleware::auth::AuthKeys;
use payments::MercadoPago;
use state::AppState;

#[derive(OpenApi)]
#[openapi(
    paths(
        features::categories::handlers::list_categories,
        features::categories::handlers::create_category,
        features::categories::handlers::update_category,
        features::categories::handlers::delete_category,
        features::registrations::handlers::calculate_price,
        features::registrations::handlers::create_registration,
        features::registrations::handlers::get_registration,
        features::registrations::handlers::list_registrations,
        features::coupons::handlers::validate_coupon,
        features::coupons::handlers::create_coupon,
        features::coupons::handlers::list_coupons,
        features::payments::handlers::create_preference,
        features::payments::handlers::verify_payment,
        features::attendance::handlers::scan_qr,
        features::attendance::handlers::check_in,
        features::attendance::handlers::attendance_stats,
        features::news::handlers::list_news,
        features::news::handlers::create_news,
        features::settings::handlers::get_settings,
        features::settings::handlers::update_settings,
        features::auth::handlers::login,
        features::auth::handlers::register,
    ),
    components(
        schemas(
            storage::dto::category::CreateCategoryRequest,
            storage::dto::category::UpdateCategoryRequest,
            storage::dto::category::CategoriesResponse,
            storage::dto::pricing::CalculatePriceRequest,
            storage::dto::pricing::PriceBreakdown,
            storage::dto::coupon::CreateCouponRequest,
            storage::dto::coupon::ValidateCouponRequest,
            storage::dto::coupon::CouponValidity,
            storage::dto::coupon::CouponListResponse,
            storage::dto::registration::CreateRegistrationRequest,
            storage::dto::registration::RegistrationCreatedResponse,
            storage::dto::registration::RegistrationListResponse,
            storage::dto::checkin::QrScanRequest,
            storage::dto::checkin::ScanResponse,
            storage::dto::checkin::CheckInRequest,
            storage::dto::checkin::AttendanceStats,
            storage::dto::payment::CreatePreferenceRequest,
            storage::dto::payment::PreferenceResponse,
            storage::dto::news::CreateNewsRequest,
            storage::dto::news::NewsListResponse,
            storage::dto::auth::AdminLoginRequest,
            storage::dto::auth::AdminRegisterRequest,
            storage::dto::auth::TokenResponse,
            storage::models::Category,
            storage::models::Coupon,
            storage::models::News,
            storage::models::PricingPhase,
            storage::models::Registration,
            storage::models::PaymentStatus,
        )
    ),
    tags(
        (name = "categories", description = "Competition categories and the public price table"),
        (name = "registrations", description = "Price quotes and rider registrations"),
        (name = "coupons", description = "Discount code validation and management"),
        (name = "payments", description = "Checkout sessions and payment reconciliation"),
        (name = "attendance", description = "QR scanning and event check-in"),
        (name = "news", description = "Event news"),
        (name = "settings", description = "Site settings document"),
        (name = "auth", description = "Back-office authentication"),
    ),
    modifiers(&SecurityAddon)
)]
struct ApiDoc;

struct SecurityAddon;

impl utoipa::Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                utoipa::openapi::security::SecurityScheme::Http(
                    utoipa::openapi::security::HttpBuilder::new()
                        .scheme(utoipa::openapi::security::HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .build(),
                ),
            )
        }
    }
}

async fn root() -> Json<Value> {
    Json(json!({
        "message": "API Super GP Corona Club XP",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}

fn api_routes() -> Router<AppState> {
    let admin = Router::new()
        .merge(features::auth::routes::routes())
        .merge(features::attendance::routes::admin_routes())
        .nest("/categories", features::categories::routes::admin_routes())
        .nest("/coupons", features::coupons::routes::admin_routes())
        .nest("/news", features::news::routes::admin_routes())
        .nest("/settings", features::settings::routes::admin_routes());

    Router::new()
        .route("/", get(root))
        .nest("/categories", features::categories::routes::public_routes())
        .nest("/registrations", features::registrations::routes::routes())
        .nest("/coupons", features::coupons::routes::public_routes())
        .nest("/payments", features::payments::routes::routes())
        .nest("/qr", features::attendance::routes::scan_routes())
        .nest("/news", features::news::routes::public_routes())
        .nest("/settings", features::settings::routes::public_routes())
        .nest("/admin", admin)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()),
        )
        .with_target(true)
        .with_file(true)
        .with_line_number(true)
        .init();

    tracing::info!("Starting Super GP API");

    let config = Config::from_env().context("Failed to load API configuration")?;
    tracing::info!("Configuration loaded successfully");

    tracing::info!(
        "Connecting to database at: {}",
        config
            .database_url
            .split('@')
            .next_back()
            .unwrap_or("unknown")
    );
    let db = Database::new(&config.database_url)
        .await
        .context("Failed to initialize database")?;
    tracing::info!("Database connection established");

    tracing::info!("Running database migrations");
    db.run_migrations()
        .await
        .context("Failed to run migrations")?;
    tracing::info!("Database migrations completed successfully");

    let state = AppState {
        db,
        auth: AuthKeys::new(&config.jwt_secret),
        payments: Arc::new(MercadoPago::new(
            config.mercadopago_access_token.clone(),
            config.public_base_url.clone(),
        )),
        qr_secret: Arc::from(config.qr_secret.as_str()),
    };

    let app = Router::new()
        .nest("/api", api_routes())
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .layer(CorsLayer::permissive())
        .with_state(state);

    let bind_address = format!("{}:{}", config.host, config.port);
    tracing::info!("Starting server at http://{}", bind_address);
    tracing::info!("Swagger UI available at http://{}/swagger-ui/", bind_address);

    let listener = tokio::net::TcpListener::bind(&bind_address)
        .await
        .context("Failed to bind server address")?;
    axum::serve(listener, app).await?;

    Ok(())
}
