use actix_web::{get, post, web, HttpResponse, Responder};

use crate::{
    error::Result,
    generate::{self, GenerationClient},
    logger,
    models::{
        ChatRequest, HealthStatus, LogoMetadata, LogoRequest, LogoResponse, MockupRequest,
        ServiceStatus,
    },
    storage::ImageStore,
};

pub const SERVICE_NAME: &str = "Brandgen AI Service";

/// Shared per-worker state: the generation clients and the image store.
pub struct AppState {
    pub client: GenerationClient,
    pub store: ImageStore,
}

#[get("/")]
async fn root() -> impl Responder {
    HttpResponse::Ok().json(ServiceStatus {
        status: "online".to_string(),
        service: SERVICE_NAME.to_string(),
    })
}

#[get("/health")]
async fn health() -> impl Responder {
    HttpResponse::Ok().json(HealthStatus {
        status: "healthy".to_string(),
    })
}

#[post("/generate/logo")]
async fn generate_logo(
    state: web::Data<AppState>,
    request: web::Json<LogoRequest>,
) -> Result<HttpResponse> {
    log::info!(
        "🎨 Generating logo for: {} ({})",
        request.brand_name,
        request.style
    );
    let _timer = logger::timer("logo generation");

    let prompt = generate::build_logo_prompt(&request);

    let bytes = match state.client.image().generate(&prompt).await {
        Ok(bytes) => bytes,
        Err(e) => {
            log::error!("❌ Generation failed: {}", e);
            return Err(e);
        }
    };

    let filename = state.store.save(&bytes)?;
    let url = state.store.url_for(&filename);

    Ok(HttpResponse::Ok().json(LogoResponse {
        url,
        metadata: LogoMetadata::default(),
    }))
}

#[post("/generate/chat")]
async fn generate_chat(
    state: web::Data<AppState>,
    request: web::Json<ChatRequest>,
) -> impl Responder {
    let response = state.client.chat().respond(&request).await;
    HttpResponse::Ok().json(response)
}

#[post("/generate/mockup")]
async fn generate_mockup(
    state: web::Data<AppState>,
    request: web::Json<MockupRequest>,
) -> impl Responder {
    let response = state.client.mockup().generate(&request).await;
    HttpResponse::Ok().json(response)
}

/// Register all routes. The static file mount lives in `main`, where the
/// directory path is known.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(root).service(health).service(
        web::scope("/api/v1")
            .service(generate_logo)
            .service(generate_chat)
            .service(generate_mockup),
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        config::{Config, UpstreamConfig},
        generate::{testutil::spawn_upstream, ChatClient, MockupClient, CHAT_RESPONSES},
    };
    use actix_web::{http::StatusCode, test, App};
    use std::time::Duration;
    use uuid::Uuid;

    fn temp_store() -> ImageStore {
        let dir = std::env::temp_dir().join(format!("brandgen-test-{}", Uuid::new_v4()));
        ImageStore::new(dir, "http://localhost:8000").unwrap()
    }

    fn state_with_upstream(base_url: &str) -> web::Data<AppState> {
        let config = Config::new().with_upstream(UpstreamConfig::new().with_base_url(base_url));
        let client = GenerationClient::new(&config)
            .unwrap()
            .with_chat(ChatClient::with_seed(42).with_delay(Duration::ZERO))
            .with_mockup(MockupClient::new().with_delay(Duration::ZERO));

        web::Data::new(AppState {
            client,
            store: temp_store(),
        })
    }

    macro_rules! service {
        ($state:expr) => {
            test::init_service(App::new().app_data($state).configure(configure)).await
        };
    }

    #[actix_web::test]
    async fn root_reports_online() {
        let app = service!(state_with_upstream("http://127.0.0.1:1"));
        let resp = test::call_service(&app, test::TestRequest::get().uri("/").to_request()).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["status"], "online");
        assert_eq!(body["service"], SERVICE_NAME);
    }

    #[actix_web::test]
    async fn health_reports_healthy() {
        let app = service!(state_with_upstream("http://127.0.0.1:1"));
        let resp =
            test::call_service(&app, test::TestRequest::get().uri("/health").to_request()).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["status"], "healthy");
    }

    #[actix_web::test]
    async fn logo_generation_saves_file_and_returns_url() {
        let base = spawn_upstream("HTTP/1.1 200 OK", b"PNGDATA").await;
        let state = state_with_upstream(&base);
        let store_dir = state.store.dir().to_path_buf();
        let app = service!(state);

        let resp = test::call_service(
            &app,
            test::TestRequest::post()
                .uri("/api/v1/generate/logo")
                .set_json(serde_json::json!({
                    "brand_name": "Acme",
                    "prompt": "a rocket taking off",
                    "style": "minimalist"
                }))
                .to_request(),
        )
        .await;
        assert_eq!(resp.status(), StatusCode::OK);

        let body: serde_json::Value = test::read_body_json(resp).await;
        let url = body["url"].as_str().unwrap();
        assert!(url.starts_with("http://localhost:8000/static/logo_"));
        assert!(url.ends_with(".png"));

        assert_eq!(body["metadata"]["width"], 512);
        assert_eq!(body["metadata"]["height"], 512);
        assert_eq!(body["metadata"]["generated_by"], "stable-diffusion-2-1");
        assert_eq!(body["metadata"]["seed"], 0);

        let filename = url.rsplit('/').next().unwrap();
        let written = std::fs::read(store_dir.join(filename)).unwrap();
        assert_eq!(written, b"PNGDATA");
    }

    #[actix_web::test]
    async fn upstream_failure_surfaces_as_500_with_detail() {
        let base = spawn_upstream("HTTP/1.1 502 Bad Gateway", b"upstream down").await;
        let app = service!(state_with_upstream(&base));

        let resp = test::call_service(
            &app,
            test::TestRequest::post()
                .uri("/api/v1/generate/logo")
                .set_json(serde_json::json!({
                    "brand_name": "Acme",
                    "prompt": "a rocket taking off"
                }))
                .to_request(),
        )
        .await;
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let body: serde_json::Value = test::read_body_json(resp).await;
        let detail = body["detail"].as_str().unwrap();
        assert!(detail.contains("502"));
        assert!(detail.contains("upstream down"));
    }

    #[actix_web::test]
    async fn chat_replies_from_the_canned_set_with_neutral_sentiment() {
        let app = service!(state_with_upstream("http://127.0.0.1:1"));

        let resp = test::call_service(
            &app,
            test::TestRequest::post()
                .uri("/api/v1/generate/chat")
                .set_json(serde_json::json!({ "message": "hello" }))
                .to_request(),
        )
        .await;
        assert_eq!(resp.status(), StatusCode::OK);

        let body: serde_json::Value = test::read_body_json(resp).await;
        let reply = body["response"].as_str().unwrap();
        assert!(CHAT_RESPONSES.contains(&reply));
        assert_eq!(body["sentiment"], "neutral");
    }

    #[actix_web::test]
    async fn mockup_url_embeds_the_template_type() {
        let app = service!(state_with_upstream("http://127.0.0.1:1"));

        let resp = test::call_service(
            &app,
            test::TestRequest::post()
                .uri("/api/v1/generate/mockup")
                .set_json(serde_json::json!({
                    "logo_url": "http://localhost:8000/static/logo_abc.png",
                    "template_type": "business-card"
                }))
                .to_request(),
        )
        .await;
        assert_eq!(resp.status(), StatusCode::OK);

        let body: serde_json::Value = test::read_body_json(resp).await;
        assert!(body["url"].as_str().unwrap().contains("business-card"));
    }

    #[actix_web::test]
    async fn malformed_body_is_rejected_with_400() {
        let app = service!(state_with_upstream("http://127.0.0.1:1"));

        let resp = test::call_service(
            &app,
            test::TestRequest::post()
                .uri("/api/v1/generate/logo")
                .set_json(serde_json::json!({ "prompt": "missing brand name" }))
                .to_request(),
        )
        .await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }
}
