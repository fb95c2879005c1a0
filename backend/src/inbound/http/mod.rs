//! HTTP inbound adapter exposing REST endpoints.

use actix_web::web;

pub mod error;
pub mod health;
pub mod landing;
pub mod schemas;
pub mod state;
pub mod todos;
pub mod validation;

pub use error::ApiResult;

/// Register every HTTP route together with the JSON extractor configuration.
///
/// Callers supply `web::Data<HttpState>` and `web::Data<HealthState>`.
///
/// ```rust,no_run
/// use actix_web::App;
/// use backend::inbound::http::configure;
///
/// let app = App::new().configure(configure);
/// # let _ = app;
/// ```
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(validation::json_config())
        .service(landing::landing)
        .service(health::health)
        .service(health::ready)
        .service(health::live)
        .service(todos::create_todo)
        .service(todos::list_todos)
        .service(todos::get_todo)
        .service(todos::update_todo)
        .service(todos::delete_todo);
}
