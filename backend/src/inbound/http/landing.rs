//! Static landing page served at `/`.

use actix_web::{HttpResponse, get, http::header::ContentType};

const LANDING_PAGE: &str = include_str!("../../../static/index.html");

/// Serve the bundled HTML landing page.
#[utoipa::path(
    get,
    path = "/",
    tags = ["meta"],
    responses((status = 200, description = "HTML landing page", body = String, content_type = "text/html"))
)]
#[get("/")]
pub async fn landing() -> HttpResponse {
    HttpResponse::Ok()
        .content_type(ContentType::html())
        .body(LANDING_PAGE)
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::http::header;
    use actix_web::{App, test as actix_test};
    use rstest::rstest;

    #[rstest]
    #[actix_web::test]
    async fn landing_serves_html() {
        let app = actix_test::init_service(App::new().service(landing)).await;
        let res = actix_test::call_service(&app, actix_test::TestRequest::get().uri("/").to_request())
            .await;

        assert!(res.status().is_success());
        let content_type = res
            .headers()
            .get(header::CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .unwrap_or_default()
            .to_owned();
        assert!(content_type.starts_with("text/html"));
        let body = actix_test::read_body(res).await;
        assert!(std::str::from_utf8(&body).expect("utf-8").contains("<html"));
    }
}
