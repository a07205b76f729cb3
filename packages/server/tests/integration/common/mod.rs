use std::io::Cursor;
use std::sync::Arc;

use async_trait::async_trait;
use common::storage::BlobStore;
use common::storage::filesystem::FilesystemBlobStore;
use image::{DynamicImage, ImageFormat, Rgba, RgbaImage};
use reqwest::Client;
use serde_json::Value;
use tempfile::TempDir;

use server::config::{
    AiConfig, AppConfig, AuthConfig, CorsConfig, DatabaseConfig, ServerConfig, StorageConfig,
};
use server::models::brief::Quality;
use server::providers::{ImageProvider, ProviderError, TextProvider};
use server::state::AppState;

pub const ADMIN_KEY: &str = "test-admin-key";

/// The brief every test run gets back from the stubbed text provider.
pub const STUB_BRIEF: &str = r##"{
    "short_title": "Code Warrior",
    "icon_concept": "crossed swords",
    "colors": { "primary": "#1E3A8A", "accent": "#F59E0B", "bg": "#F8FAFC" },
    "image_prompt": "a flat minimal badge with crossed swords"
}"##;

pub mod routes {
    pub const LOGIN: &str = "/api/auth/login";
    pub const LOGOUT: &str = "/api/auth/logout";
    pub const PREVIEW_BRIEF: &str = "/api/admin/preview-brief";
    pub const GENERATE_IMAGE: &str = "/api/admin/generate-image";
    pub const PUBLISH_AWARD: &str = "/api/admin/publish-award";
    pub const ADMIN_AWARDS: &str = "/api/admin/awards";
    pub const MIGRATE: &str = "/api/admin/migrate";
}

struct StubTextProvider;

#[async_trait]
impl TextProvider for StubTextProvider {
    async fn complete(&self, _system: &str, _user: &str) -> Result<String, ProviderError> {
        Ok(STUB_BRIEF.to_string())
    }

    fn model_name(&self) -> &str {
        "stub-text"
    }
}

struct StubImageProvider {
    url: String,
}

#[async_trait]
impl ImageProvider for StubImageProvider {
    async fn generate(&self, _prompt: &str, _quality: Quality) -> Result<String, ProviderError> {
        Ok(self.url.clone())
    }

    fn model_name(&self) -> &str {
        "stub-image"
    }
}

/// Serve one PNG from an ephemeral port so the image fetch step runs against
/// a real HTTP response.
async fn spawn_image_server() -> String {
    let mut png = Vec::new();
    DynamicImage::ImageRgba8(RgbaImage::from_pixel(64, 48, Rgba([180, 40, 40, 255])))
        .write_to(&mut Cursor::new(&mut png), ImageFormat::Png)
        .expect("Failed to encode fixture image");

    let app = axum::Router::new().route(
        "/image.png",
        axum::routing::get(move || {
            let png = png.clone();
            async move {
                (
                    [(axum::http::header::CONTENT_TYPE, "image/png")],
                    png,
                )
            }
        }),
    );

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind image server");
    let addr = listener.local_addr().expect("Failed to read local addr");
    tokio::spawn(async move {
        axum::serve(listener, app)
            .await
            .expect("Image server failed");
    });

    format!("http://{addr}/image.png")
}

pub struct TestResponse {
    pub status: u16,
    pub body: Value,
}

pub struct TestApp {
    pub base_url: String,
    pub client: Client,
    _tmp: TempDir,
}

impl TestApp {
    /// Start a full application instance on an ephemeral port: SQLite
    /// database and filesystem storage in a temp directory, stubbed AI
    /// providers, and a local HTTP server for generated images.
    pub async fn spawn() -> Self {
        let tmp = TempDir::new().expect("Failed to create temp dir");

        let db_path = tmp.path().join("badgery.db");
        let db_url = format!("sqlite://{}?mode=rwc", db_path.display());
        let db = server::database::init_db(&db_url)
            .await
            .expect("Failed to initialize database");

        let storage: Arc<dyn BlobStore> = Arc::new(
            FilesystemBlobStore::new(tmp.path().join("public"), String::new())
                .await
                .expect("Failed to initialize storage"),
        );

        let image_url = spawn_image_server().await;

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind app server");
        let addr = listener.local_addr().expect("Failed to read local addr");
        let base_url = format!("http://{addr}");

        let config = AppConfig {
            server: ServerConfig {
                host: "127.0.0.1".to_string(),
                port: addr.port(),
                public_base_url: base_url.clone(),
                cors: CorsConfig {
                    allow_origins: vec![],
                    max_age: 3600,
                },
            },
            database: DatabaseConfig { url: db_url },
            auth: AuthConfig {
                admin_key: ADMIN_KEY.to_string(),
            },
            ai: AiConfig {
                provider: "openai".to_string(),
                anthropic_api_key: String::new(),
                openai_api_key: String::new(),
                text_model: String::new(),
                image_model: "stub-image".to_string(),
            },
            storage: StorageConfig {
                backend: "filesystem".to_string(),
                root_dir: tmp.path().join("public").display().to_string(),
                public_base: String::new(),
                s3_bucket: String::new(),
                s3_region: String::new(),
                s3_endpoint: String::new(),
                s3_access_key: String::new(),
                s3_secret_key: String::new(),
            },
        };

        let state = AppState {
            config: Arc::new(config),
            db,
            storage,
            text: Arc::new(StubTextProvider),
            image: Arc::new(StubImageProvider { url: image_url }),
            http: reqwest::Client::new(),
        };

        let app = server::build_router(state);
        tokio::spawn(async move {
            axum::serve(listener, app).await.expect("App server failed");
        });

        let client = Client::builder()
            .cookie_store(true)
            .build()
            .expect("Failed to build HTTP client");

        Self {
            base_url,
            client,
            _tmp: tmp,
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    async fn into_response(res: reqwest::Response) -> TestResponse {
        let status = res.status().as_u16();
        let text = res.text().await.unwrap_or_default();
        let body = serde_json::from_str(&text).unwrap_or(Value::Null);
        TestResponse { status, body }
    }

    /// POST with the admin bearer token.
    pub async fn post(&self, path: &str, body: &Value) -> TestResponse {
        let res = self
            .client
            .post(self.url(path))
            .bearer_auth(ADMIN_KEY)
            .json(body)
            .send()
            .await
            .expect("Request failed");
        Self::into_response(res).await
    }

    pub async fn post_without_token(&self, path: &str, body: &Value) -> TestResponse {
        let res = self
            .client
            .post(self.url(path))
            .json(body)
            .send()
            .await
            .expect("Request failed");
        Self::into_response(res).await
    }

    /// GET with the admin bearer token.
    pub async fn get_admin(&self, path: &str) -> TestResponse {
        let res = self
            .client
            .get(self.url(path))
            .bearer_auth(ADMIN_KEY)
            .send()
            .await
            .expect("Request failed");
        Self::into_response(res).await
    }

    /// GET without credentials, parsed as JSON.
    pub async fn get_public(&self, path: &str) -> TestResponse {
        let res = self
            .client
            .get(self.url(path))
            .send()
            .await
            .expect("Request failed");
        Self::into_response(res).await
    }

    /// GET without credentials, returning status, content type, and raw body.
    pub async fn get_raw(&self, path: &str) -> (u16, String, Vec<u8>) {
        let res = self
            .client
            .get(self.url(path))
            .send()
            .await
            .expect("Request failed");
        let status = res.status().as_u16();
        let content_type = res
            .headers()
            .get(reqwest::header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .unwrap_or_default()
            .to_string();
        let bytes = res.bytes().await.expect("Failed to read body").to_vec();
        (status, content_type, bytes)
    }

    pub async fn delete(&self, path: &str) -> u16 {
        self.client
            .delete(self.url(path))
            .bearer_auth(ADMIN_KEY)
            .send()
            .await
            .expect("Request failed")
            .status()
            .as_u16()
    }

    /// Run the preview + generate flow and return the created badge id.
    pub async fn create_badge(&self, name: &str) -> Value {
        let preview = self
            .post(
                routes::PREVIEW_BRIEF,
                &serde_json::json!({
                    "name": name,
                    "description": "shipped something remarkable",
                    "style": "round-medal-minimal",
                }),
            )
            .await;
        assert_eq!(preview.status, 200, "preview failed: {}", preview.body);

        let generated = self
            .post(
                routes::GENERATE_IMAGE,
                &serde_json::json!({
                    "name": name,
                    "style": "round-medal-minimal",
                    "brief": {
                        "short_title": preview.body["short_title"],
                        "icon_concept": preview.body["icon_concept"],
                        "colors": preview.body["colors"],
                        "image_prompt": preview.body["image_prompt"],
                    },
                }),
            )
            .await;
        assert_eq!(generated.status, 201, "generate failed: {}", generated.body);
        generated.body["badge"].clone()
    }
}
