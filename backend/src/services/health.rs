use actix_web::web::{get, resource};
use actix_web::{HttpResponse, Resource};
use serde_json::json;

const HEALTH_PATH: &str = "/health";

/// `GET /health` answers `{"status":"healthy"}` while the host is up.
pub fn configure_routes() -> Resource {
    resource(HEALTH_PATH).route(get().to(process))
}

async fn process() -> HttpResponse {
    HttpResponse::Ok().json(json!({ "status": "healthy" }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{test, App};
    use serde_json::Value;

    #[actix_web::test]
    async fn reports_healthy() {
        let app = test::init_service(App::new().service(configure_routes())).await;
        let req = test::TestRequest::get().uri("/health").to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body, json!({ "status": "healthy" }));
    }
}
