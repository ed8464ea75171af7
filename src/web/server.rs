use axum::{
    extract::{multipart::MultipartError, DefaultBodyLimit, Multipart, State},
    http::{HeaderName, HeaderValue, StatusCode},
    response::{IntoResponse, Json, Response},
    routing::{get, post},
    Router,
};
use serde::Serialize;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tokio::net::TcpListener;
use tower::limit::ConcurrencyLimitLayer;
use tower::ServiceBuilder;
use tower_governor::{governor::GovernorConfigBuilder, GovernorLayer};
use tower_http::set_header::SetResponseHeaderLayer;
use tower_http::timeout::TimeoutLayer;

use crate::analysis::{analyze_resume_bytes, AnalysisError};
use crate::cli::{load_vocabulary, ServeArgs};
use crate::core::types::MatchMode;
use crate::extraction::{PdfTextExtractor, TextExtractor};
use crate::matching::engine::{MatchingConfig, MatchingEngine};
use crate::utils::validation::ValidationError;
use crate::vocabulary::store::SkillVocabulary;

/// Security configuration constants to prevent `DoS` attacks
pub const MAX_MULTIPART_FIELDS: usize = 10;
pub const MAX_RESUME_FIELD_SIZE: usize = 10 * 1024 * 1024; // 10MB
pub const MAX_TEXT_FIELD_SIZE: usize = 1024 * 1024; // 1MB

/// Largest accepted request body (résumé + job description + multipart overhead)
pub const MAX_REQUEST_BODY_SIZE: usize = 12 * 1024 * 1024;

/// Shared application state
pub struct AppState {
    pub vocabulary: SkillVocabulary,
    /// Defaults applied when a request does not override them
    pub config: MatchingConfig,
    pub extractor: Arc<dyn TextExtractor>,
}

impl AppState {
    /// State backed by the PDF extractor
    #[must_use]
    pub fn new(vocabulary: SkillVocabulary, config: MatchingConfig) -> Self {
        Self {
            vocabulary,
            config,
            extractor: Arc::new(PdfTextExtractor),
        }
    }

    #[must_use]
    pub fn with_extractor(mut self, extractor: Arc<dyn TextExtractor>) -> Self {
        self.extractor = extractor;
        self
    }
}

/// Fields collected from a match request
#[derive(Debug, Default)]
struct MatchRequest {
    filename: Option<String>,
    resume: Option<Vec<u8>>,
    job_description: Option<String>,
    match_mode: Option<MatchMode>,
}

/// Enhanced error response
#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub error_type: String,
    pub details: Option<String>,
}

/// Create a safe error response that prevents information disclosure
/// while logging detailed errors server-side for debugging
pub fn create_safe_error_response(
    error_type: &str,
    user_message: &str,
    internal_error: Option<&str>,
) -> ErrorResponse {
    // Log detailed error server-side for debugging (not exposed to client)
    if let Some(internal_msg) = internal_error {
        tracing::error!("Internal error ({}): {}", error_type, internal_msg);
    }

    ErrorResponse {
        error: user_message.to_string(),
        error_type: error_type.to_string(),
        details: None, // Never expose internal details to prevent information disclosure
    }
}

fn error_response(
    status: StatusCode,
    error_type: &str,
    user_message: &str,
    internal_error: Option<&str>,
) -> Response {
    (
        status,
        Json(create_safe_error_response(
            error_type,
            user_message,
            internal_error,
        )),
    )
        .into_response()
}

/// Run the web server
///
/// # Errors
///
/// Returns an error if the tokio runtime cannot be created, the vocabulary
/// cannot be loaded, or the server fails to start.
pub fn run(args: ServeArgs) -> anyhow::Result<()> {
    // Build tokio runtime
    let rt = tokio::runtime::Runtime::new()?;
    rt.block_on(async move { run_server(args).await })
}

/// The API routes with their state and body limit, without the network-facing
/// middleware (rate limiting needs the peer address).
pub fn api_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/api/match", post(match_handler))
        .route("/api/vocabulary", get(vocabulary_handler))
        .route("/health", get(health_handler))
        .with_state(state)
        .layer(DefaultBodyLimit::max(MAX_REQUEST_BODY_SIZE))
}

/// Create the application router with all routes and middleware configured.
///
/// # Errors
///
/// Returns an error if the rate limiter configuration is rejected.
pub fn create_router(state: Arc<AppState>) -> anyhow::Result<Router> {
    // Configure IP-based rate limiting
    let governor_conf = GovernorConfigBuilder::default()
        .per_second(10) // 10 requests per second per IP
        .burst_size(50) // Allow bursts of 50 requests
        .finish()
        .ok_or_else(|| anyhow::anyhow!("Invalid rate limiter configuration"))?;

    // Build router with comprehensive security layers
    let app = api_router(state).layer(
        ServiceBuilder::new()
            // Security headers for browser protection
            .layer(SetResponseHeaderLayer::if_not_present(
                HeaderName::from_static("x-content-type-options"),
                HeaderValue::from_static("nosniff"),
            ))
            .layer(SetResponseHeaderLayer::if_not_present(
                HeaderName::from_static("x-frame-options"),
                HeaderValue::from_static("DENY"),
            ))
            .layer(SetResponseHeaderLayer::if_not_present(
                HeaderName::from_static("cache-control"),
                HeaderValue::from_static("no-store"),
            ))
            .layer(SetResponseHeaderLayer::if_not_present(
                HeaderName::from_static("strict-transport-security"),
                HeaderValue::from_static("max-age=31536000; includeSubDomains"),
            ))
            .layer(SetResponseHeaderLayer::if_not_present(
                HeaderName::from_static("referrer-policy"),
                HeaderValue::from_static("no-referrer"),
            ))
            // IP-based rate limiting to prevent abuse
            .layer(GovernorLayer {
                config: Arc::new(governor_conf),
            })
            // Request timeout to prevent slow client attacks
            .layer(TimeoutLayer::with_status_code(
                StatusCode::REQUEST_TIMEOUT,
                Duration::from_secs(30),
            ))
            // Limit concurrent requests to prevent DOS
            .layer(ConcurrencyLimitLayer::new(100)),
    );

    Ok(app)
}

async fn run_server(args: ServeArgs) -> anyhow::Result<()> {
    let vocabulary = load_vocabulary(args.vocabulary.as_deref())?;
    let config = MatchingConfig {
        match_mode: args.match_mode,
    };
    tracing::info!(
        "Loaded vocabulary with {} skills ({} matching)",
        vocabulary.len(),
        config.match_mode
    );

    let state = Arc::new(AppState::new(vocabulary, config));
    let app = create_router(state)?;

    let addr = format!("{}:{}", args.address, args.port);
    println!("Starting resume-matcher API at http://{addr}");

    if args.open {
        let _ = open::that(format!("http://{addr}/health"));
    }

    let listener = TcpListener::bind(&addr).await?;
    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .await?;

    Ok(())
}

/// Score an uploaded résumé against a job description
async fn match_handler(State(state): State<Arc<AppState>>, mut multipart: Multipart) -> Response {
    let start_time = std::time::Instant::now();

    let request = match extract_request_data(&mut multipart).await {
        Ok(request) => request,
        Err(response) => return response,
    };

    let match_mode = request.match_mode.unwrap_or(state.config.match_mode);
    let resume_bytes = request.resume.as_ref().map_or(0, Vec::len);

    // Extraction is CPU-bound; keep it off the async workers
    let worker_state = Arc::clone(&state);
    let outcome = tokio::task::spawn_blocking(move || {
        let engine = MatchingEngine::new(&worker_state.vocabulary, MatchingConfig { match_mode });
        analyze_resume_bytes(
            request.filename.as_deref(),
            request.resume.as_deref().unwrap_or_default(),
            request.job_description.as_deref().unwrap_or_default(),
            &engine,
            worker_state.extractor.as_ref(),
        )
    })
    .await;

    let report = match outcome {
        Ok(Ok(report)) => report,
        Ok(Err(e)) => return analysis_error_response(&e),
        Err(e) => {
            return error_response(
                StatusCode::INTERNAL_SERVER_ERROR,
                "internal_error",
                "Failed to process the request",
                Some(&e.to_string()),
            )
        }
    };

    #[allow(clippy::cast_possible_truncation)] // Processing time won't exceed u64
    let processing_time = start_time.elapsed().as_millis() as u64;

    tracing::info!(
        "Scored upload: {}% ({} of {} job skills)",
        report.match_percentage,
        report.matched_skills.len(),
        report.job_skills.len()
    );

    Json(serde_json::json!({
        "match_percentage": report.match_percentage,
        "matched_skills": report.matched_skills,
        "missing_skills": report.missing_skills,
        "explanation": report.explanation,
        "resume_skills": report.resume_skills,
        "job_skills": report.job_skills,
        "processing_info": {
            "match_mode": match_mode,
            "resume_bytes": resume_bytes,
            "processing_time_ms": processing_time,
        }
    }))
    .into_response()
}

async fn extract_request_data(multipart: &mut Multipart) -> Result<MatchRequest, Response> {
    let mut request = MatchRequest::default();
    let mut fields_received = 0usize;

    loop {
        let field = match multipart.next_field().await {
            Ok(Some(field)) => field,
            Ok(None) => break, // No more fields
            Err(e) => return Err(multipart_error_response(&e)),
        };

        // Check field count limit before reading the field body
        fields_received += 1;
        if fields_received > MAX_MULTIPART_FIELDS {
            return Err(error_response(
                StatusCode::BAD_REQUEST,
                "field_limit_exceeded",
                "Too many form fields",
                None,
            ));
        }

        let name = field.name().unwrap_or_default().to_string();

        match name.as_str() {
            "resume" => {
                let filename = field.file_name().map(std::string::ToString::to_string);
                let bytes = field
                    .bytes()
                    .await
                    .map_err(|e| multipart_error_response(&e))?;

                // Validate field size before processing
                if bytes.len() > MAX_RESUME_FIELD_SIZE {
                    return Err(error_response(
                        StatusCode::PAYLOAD_TOO_LARGE,
                        "file_too_large",
                        "File size exceeds limit",
                        None,
                    ));
                }

                request.filename = filename;
                request.resume = Some(bytes.to_vec());
            }
            "job_desc" => {
                let text = field
                    .text()
                    .await
                    .map_err(|e| multipart_error_response(&e))?;

                if text.len() > MAX_TEXT_FIELD_SIZE {
                    return Err(error_response(
                        StatusCode::PAYLOAD_TOO_LARGE,
                        "text_too_large",
                        "Text field size exceeds limit",
                        None,
                    ));
                }

                request.job_description = Some(text);
            }
            "match_mode" => {
                let text = field
                    .text()
                    .await
                    .map_err(|e| multipart_error_response(&e))?;

                let Some(mode) = MatchMode::parse(&text) else {
                    return Err(error_response(
                        StatusCode::BAD_REQUEST,
                        "invalid_match_mode",
                        "Unknown match mode. Use \"substring\" or \"whole-word\".",
                        None,
                    ));
                };
                request.match_mode = Some(mode);
            }
            _ => {} // Ignore unknown fields
        }
    }

    Ok(request)
}

fn multipart_error_response(error: &MultipartError) -> Response {
    if error.status() == StatusCode::PAYLOAD_TOO_LARGE {
        return error_response(
            StatusCode::PAYLOAD_TOO_LARGE,
            "payload_too_large",
            "Request body exceeds limit",
            None,
        );
    }

    error_response(
        StatusCode::BAD_REQUEST,
        "parse_failed",
        "Failed to parse upload. Please check the form data.",
        Some(&error.body_text()),
    )
}

/// Map a pipeline failure onto a status code and a client-safe message
fn analysis_error_response(error: &AnalysisError) -> Response {
    match error {
        AnalysisError::Validation(validation) => validation_error_response(validation),
        AnalysisError::Extraction(e) => error_response(
            StatusCode::UNPROCESSABLE_ENTITY,
            "extraction_failed",
            "Unable to read the PDF. Please ensure it is a text-based PDF.",
            Some(&e.to_string()),
        ),
        AnalysisError::Io(e) => error_response(
            StatusCode::INTERNAL_SERVER_ERROR,
            "internal_error",
            "Failed to process the upload",
            Some(&e.to_string()),
        ),
    }
}

fn validation_error_response(error: &ValidationError) -> Response {
    let (status, error_type, message) = match error {
        ValidationError::MissingResume => (
            StatusCode::BAD_REQUEST,
            "missing_resume",
            "Please upload a resume PDF.",
        ),
        ValidationError::EmptyJobDescription => (
            StatusCode::BAD_REQUEST,
            "missing_job_description",
            "Please enter a job description.",
        ),
        ValidationError::NotPdf => (
            StatusCode::BAD_REQUEST,
            "invalid_file_type",
            "Only PDF files are allowed.",
        ),
        ValidationError::JobDescriptionTooLong => (
            StatusCode::PAYLOAD_TOO_LARGE,
            "text_too_large",
            "Text field size exceeds limit",
        ),
        ValidationError::FilenameTooLong => (
            StatusCode::BAD_REQUEST,
            "filename_too_long",
            "Filename exceeds maximum length limit",
        ),
        ValidationError::InvalidFilename | ValidationError::EmptyFilename => (
            StatusCode::BAD_REQUEST,
            "invalid_filename",
            "Filename contains invalid or dangerous characters",
        ),
        ValidationError::InvalidFileContent => (
            StatusCode::BAD_REQUEST,
            "invalid_content",
            "File content appears malformed or corrupted",
        ),
        ValidationError::FileNotFound(_) => (
            StatusCode::BAD_REQUEST,
            "validation_failed",
            "File validation failed",
        ),
    };

    error_response(status, error_type, message, None)
}

/// API endpoint listing the skill vocabulary
async fn vocabulary_handler(State(state): State<Arc<AppState>>) -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "count": state.vocabulary.len(),
        "skills": state.vocabulary.as_slice(),
    }))
}

async fn health_handler() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}
