use crate::{
    config::PanelConfig,
    error::{PanelError, Result},
    models::{FormData, GenerateResponse, INLINE_PNG_PREFIX},
    service::GenerationService,
};
use async_trait::async_trait;
use base64::Engine as _;
use reqwest::{Client, Request, Url};

/// Path of the generation endpoint, fixed by the page contract.
const GENERATE_PATH: &str = "/generate";

/// reqwest-backed client for the generation service.
#[derive(Clone)]
pub struct HttpGenerationService {
    http: Client,
    base_url: Url,
}

impl HttpGenerationService {
    pub fn new(config: &PanelConfig) -> Result<Self> {
        let base = config.base_url();
        let base_url = Url::parse(&base)
            .map_err(|e| PanelError::Config(format!("Invalid base URL '{}': {}", base, e)))?;

        Ok(Self {
            http: Client::new(),
            base_url,
        })
    }

    /// Builds the generation request: POST to `/generate` with every form
    /// entry in the query string and no request body.
    pub fn generate_request(&self, form: &FormData) -> Result<Request> {
        let mut url = self
            .base_url
            .join(GENERATE_PATH)
            .map_err(|e| PanelError::Config(e.to_string()))?;
        form.apply_query(&mut url);

        self.http
            .post(url)
            .build()
            .map_err(|e| PanelError::Transport(e.to_string()))
    }

    fn resolve(&self, src: &str) -> Result<Url> {
        // join() handles both absolute URLs and server-relative paths like
        // the `/images/<id>.png` the service returns.
        self.base_url
            .join(src)
            .map_err(|e| PanelError::Transport(format!("Invalid image source '{}': {}", src, e)))
    }
}

#[async_trait]
impl GenerationService for HttpGenerationService {
    async fn generate(&self, form: &FormData) -> Result<GenerateResponse> {
        let request = self.generate_request(form)?;
        log::debug!("POST {}", request.url());

        let response = self
            .http
            .execute(request)
            .await
            .map_err(|e| PanelError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(PanelError::Status(status.as_u16()));
        }

        let body = response
            .text()
            .await
            .map_err(|e| PanelError::Transport(e.to_string()))?;

        serde_json::from_str(&body).map_err(|e| PanelError::MalformedResponse(e.to_string()))
    }

    async fn load_image(&self, src: &str) -> Result<Vec<u8>> {
        if let Some(b64) = src.strip_prefix(INLINE_PNG_PREFIX) {
            return base64::engine::general_purpose::STANDARD
                .decode(b64)
                .map_err(|e| PanelError::ImageLoad(format!("Bad inline payload: {}", e)));
        }

        let url = self.resolve(src)?;
        log::debug!("GET {}", url);

        let response = self
            .http
            .get(url)
            .send()
            .await
            .map_err(|e| PanelError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(PanelError::ImageLoad(format!(
                "Image request returned status {}",
                status.as_u16()
            )));
        }

        let bytes = response
            .bytes()
            .await
            .map_err(|e| PanelError::Transport(e.to_string()))?;
        if bytes.is_empty() {
            return Err(PanelError::ImageLoad("Empty image body".into()));
        }

        Ok(bytes.to_vec())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn service() -> HttpGenerationService {
        let config = PanelConfig::new().with_base_url("http://127.0.0.1:8000");
        HttpGenerationService::new(&config).unwrap()
    }

    #[test]
    fn generate_request_has_query_and_no_body() {
        let mut form = FormData::stable_diffusion();
        form.set("prompt", "cat");

        let request = service().generate_request(&form).unwrap();
        assert_eq!(request.method(), &reqwest::Method::POST);
        assert_eq!(request.url().path(), "/generate");
        assert_eq!(
            request.url().query(),
            Some("prompt=cat&width=1024&height=1024&num_inference_steps=30&guidance_scale=8.0")
        );
        assert!(request.body().is_none());
        assert!(request.headers().is_empty());
    }

    #[test]
    fn resolve_handles_relative_and_absolute_sources() {
        let svc = service();
        assert_eq!(
            svc.resolve("/images/1.png").unwrap().as_str(),
            "http://127.0.0.1:8000/images/1.png"
        );
        assert_eq!(
            svc.resolve("http://cdn.example/img.png").unwrap().as_str(),
            "http://cdn.example/img.png"
        );
    }

    #[tokio::test]
    async fn inline_sources_decode_without_a_request() {
        let bytes = service()
            .load_image("data:image/png;base64,aGVsbG8=")
            .await
            .unwrap();
        assert_eq!(bytes, b"hello");

        let err = service()
            .load_image("data:image/png;base64,not-base64!")
            .await
            .unwrap_err();
        assert!(matches!(err, PanelError::ImageLoad(_)));
    }

    #[test]
    fn bad_base_url_is_a_config_error() {
        let config = PanelConfig::new().with_base_url("not a url");
        assert!(matches!(
            HttpGenerationService::new(&config),
            Err(PanelError::Config(_))
        ));
    }
}
