//! HTTP API tests
//!
//! Requests are driven through the API router with `tower::ServiceExt::oneshot`.
//! PDF parsing is replaced by stub extractors so each test controls the résumé
//! text exactly.

use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use serde_json::{json, Value};
use tower::ServiceExt;

use resume_matcher::web::server::{api_router, create_router, AppState, MAX_TEXT_FIELD_SIZE};
use resume_matcher::{ExtractionError, MatchingConfig, SkillVocabulary, TextExtractor};

const BOUNDARY: &str = "resume-matcher-test-boundary";
const PDF_STUB: &[u8] = b"%PDF-1.4\n%stub document";
const JOB: &str = "Looking for Python, Docker and Kubernetes experience.";
const RESUME_TEXT: &str = "Experienced in Python and Docker";

struct FixedExtractor(&'static str);

impl TextExtractor for FixedExtractor {
    fn extract_text(&self, _bytes: &[u8]) -> Result<String, ExtractionError> {
        Ok(self.0.to_string())
    }
}

/// Records the staged path so tests can check it was cleaned up
#[derive(Default)]
struct RecordingExtractor {
    seen: Mutex<Option<PathBuf>>,
    fail: bool,
}

impl RecordingExtractor {
    fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }

    fn staged_path(&self) -> PathBuf {
        self.seen.lock().unwrap().clone().unwrap()
    }
}

impl TextExtractor for RecordingExtractor {
    fn extract_text(&self, _bytes: &[u8]) -> Result<String, ExtractionError> {
        if self.fail {
            return Err(ExtractionError::Unreadable("stub failure".to_string()));
        }
        Ok(RESUME_TEXT.to_string())
    }

    fn extract_file(&self, path: &Path) -> Result<String, ExtractionError> {
        *self.seen.lock().unwrap() = Some(path.to_path_buf());
        let bytes = std::fs::read(path)?;
        self.extract_text(&bytes)
    }
}

enum Part<'a> {
    Text(&'a str, &'a str),
    File(&'a str, &'a str, &'a [u8]),
}

fn multipart_body(parts: &[Part<'_>]) -> Vec<u8> {
    let mut body = Vec::new();
    for part in parts {
        body.extend_from_slice(format!("--{BOUNDARY}\r\n").as_bytes());
        match part {
            Part::Text(name, value) => {
                body.extend_from_slice(
                    format!("Content-Disposition: form-data; name=\"{name}\"\r\n\r\n").as_bytes(),
                );
                body.extend_from_slice(value.as_bytes());
            }
            Part::File(name, filename, content) => {
                body.extend_from_slice(
                    format!(
                        "Content-Disposition: form-data; name=\"{name}\"; filename=\"{filename}\"\r\n\
                         Content-Type: application/pdf\r\n\r\n"
                    )
                    .as_bytes(),
                );
                body.extend_from_slice(content);
            }
        }
        body.extend_from_slice(b"\r\n");
    }
    body.extend_from_slice(format!("--{BOUNDARY}--\r\n").as_bytes());
    body
}

fn match_request(parts: &[Part<'_>]) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/api/match")
        .header(
            "content-type",
            format!("multipart/form-data; boundary={BOUNDARY}"),
        )
        .body(Body::from(multipart_body(parts)))
        .unwrap()
}

fn fixture(name: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures").join(name)
}

fn get_request(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

fn router_with(extractor: Arc<dyn TextExtractor>) -> Router {
    let vocabulary = SkillVocabulary::load_embedded().unwrap();
    let state = AppState::new(vocabulary, MatchingConfig::default()).with_extractor(extractor);
    api_router(Arc::new(state))
}

async fn send(router: Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = router.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let body = serde_json::from_slice(&bytes).unwrap();
    (status, body)
}

fn assert_error(body: &Value, error_type: &str) {
    assert_eq!(body["error_type"], error_type, "unexpected body: {body}");
    assert!(body["details"].is_null(), "details must never be exposed");
}

#[tokio::test]
async fn test_health() {
    let router = router_with(Arc::new(FixedExtractor("")));
    let (status, body) = send(router, get_request("/health")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
    assert_eq!(body["version"], env!("CARGO_PKG_VERSION"));
}

#[tokio::test]
async fn test_vocabulary_listing() {
    let router = router_with(Arc::new(FixedExtractor("")));
    let (status, body) = send(router, get_request("/api/vocabulary")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["count"], 66);
    assert_eq!(body["skills"][0], "python");
    assert_eq!(body["skills"].as_array().unwrap().len(), 66);
}

#[tokio::test]
async fn test_match_success() {
    let router = router_with(Arc::new(FixedExtractor(RESUME_TEXT)));
    let request = match_request(&[
        Part::File("resume", "resume.pdf", PDF_STUB),
        Part::Text("job_desc", JOB),
    ]);
    let (status, body) = send(router, request).await;

    assert_eq!(status, StatusCode::OK, "unexpected body: {body}");
    // "r" is found inside "experience" and "experienced"
    assert_eq!(body["matched_skills"], json!(["python", "docker", "r"]));
    assert_eq!(body["missing_skills"], json!(["kubernetes"]));
    assert!((body["match_percentage"].as_f64().unwrap() - 75.0).abs() < f64::EPSILON);
    assert!(body["explanation"]
        .as_str()
        .unwrap()
        .contains("There are 4 skills in the job description. 3 of them match the resume, resulting in a 75.0% match."));
    assert_eq!(body["processing_info"]["match_mode"], "substring");
    assert_eq!(body["processing_info"]["resume_bytes"], PDF_STUB.len());
}

#[tokio::test]
async fn test_match_whole_word_mode() {
    let router = router_with(Arc::new(FixedExtractor(RESUME_TEXT)));
    let request = match_request(&[
        Part::File("resume", "resume.pdf", PDF_STUB),
        Part::Text("job_desc", JOB),
        Part::Text("match_mode", "whole-word"),
    ]);
    let (status, body) = send(router, request).await;

    assert_eq!(status, StatusCode::OK, "unexpected body: {body}");
    assert_eq!(body["matched_skills"], json!(["python", "docker"]));
    assert_eq!(body["missing_skills"], json!(["kubernetes"]));
    assert!((body["match_percentage"].as_f64().unwrap() - 66.67).abs() < 1e-9);
    assert_eq!(body["processing_info"]["match_mode"], "whole-word");
}

#[tokio::test]
async fn test_blank_extraction_scores_zero() {
    let router = router_with(Arc::new(FixedExtractor("   ")));
    let request = match_request(&[
        Part::File("resume", "scan.pdf", PDF_STUB),
        Part::Text("job_desc", "Python and SQL"),
    ]);
    let (status, body) = send(router, request).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["matched_skills"], json!([]));
    assert_eq!(body["missing_skills"], json!(["python", "sql"]));
    assert!(body["match_percentage"].as_f64().unwrap().abs() < f64::EPSILON);
}

#[tokio::test]
async fn test_missing_resume() {
    let router = router_with(Arc::new(FixedExtractor(RESUME_TEXT)));
    let request = match_request(&[Part::Text("job_desc", JOB)]);
    let (status, body) = send(router, request).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_error(&body, "missing_resume");
    assert_eq!(body["error"], "Please upload a resume PDF.");
}

#[tokio::test]
async fn test_missing_job_description() {
    let router = router_with(Arc::new(FixedExtractor(RESUME_TEXT)));
    let request = match_request(&[
        Part::File("resume", "resume.pdf", PDF_STUB),
        Part::Text("job_desc", "  \n  "),
    ]);
    let (status, body) = send(router, request).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_error(&body, "missing_job_description");
    assert_eq!(body["error"], "Please enter a job description.");
}

#[tokio::test]
async fn test_non_pdf_upload() {
    let router = router_with(Arc::new(FixedExtractor(RESUME_TEXT)));
    let request = match_request(&[
        Part::File("resume", "resume.docx", b"PK\x03\x04"),
        Part::Text("job_desc", JOB),
    ]);
    let (status, body) = send(router, request).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_error(&body, "invalid_file_type");
    assert_eq!(body["error"], "Only PDF files are allowed.");
}

#[tokio::test]
async fn test_pdf_name_with_foreign_content() {
    let router = router_with(Arc::new(FixedExtractor(RESUME_TEXT)));
    let request = match_request(&[
        Part::File("resume", "resume.pdf", b"MZ\x90\x00 not a pdf"),
        Part::Text("job_desc", JOB),
    ]);
    let (status, body) = send(router, request).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_error(&body, "invalid_file_type");
}

#[tokio::test]
async fn test_traversal_filename_rejected() {
    let router = router_with(Arc::new(FixedExtractor(RESUME_TEXT)));
    let request = match_request(&[
        Part::File("resume", "../../etc/resume.pdf", PDF_STUB),
        Part::Text("job_desc", JOB),
    ]);
    let (status, body) = send(router, request).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_error(&body, "invalid_filename");
}

#[tokio::test]
async fn test_extraction_failure() {
    let extractor = Arc::new(RecordingExtractor::failing());
    let router = router_with(extractor.clone());
    let request = match_request(&[
        Part::File("resume", "resume.pdf", PDF_STUB),
        Part::Text("job_desc", JOB),
    ]);
    let (status, body) = send(router, request).await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_error(&body, "extraction_failed");
    assert_eq!(
        body["error"],
        "Unable to read the PDF. Please ensure it is a text-based PDF."
    );

    let staged = extractor.staged_path();
    assert!(!staged.exists(), "{} was not removed", staged.display());
}

#[tokio::test]
async fn test_match_with_real_pdf() {
    let vocabulary = SkillVocabulary::load_embedded().unwrap();
    let router = api_router(Arc::new(AppState::new(vocabulary, MatchingConfig::default())));
    let resume = std::fs::read(fixture("resume.pdf")).unwrap();
    let request = match_request(&[
        Part::File("resume", "resume.pdf", &resume),
        Part::Text("job_desc", "Python and Java"),
    ]);
    let (status, body) = send(router, request).await;

    assert_eq!(status, StatusCode::OK);
    assert!((body["match_percentage"].as_f64().unwrap() - 50.0).abs() < f64::EPSILON);
    assert_eq!(body["matched_skills"], json!(["python"]));
    assert_eq!(body["missing_skills"], json!(["java"]));
}

#[tokio::test]
async fn test_staged_upload_removed() {
    let extractor = Arc::new(RecordingExtractor::default());
    let router = router_with(extractor.clone());
    let request = match_request(&[
        Part::File("resume", "resume.pdf", PDF_STUB),
        Part::Text("job_desc", JOB),
    ]);
    let (status, _) = send(router, request).await;
    assert_eq!(status, StatusCode::OK);

    let staged = extractor.staged_path();
    assert!(!staged.exists(), "{} was not removed", staged.display());
}

#[tokio::test]
async fn test_invalid_match_mode() {
    let router = router_with(Arc::new(FixedExtractor(RESUME_TEXT)));
    let request = match_request(&[
        Part::File("resume", "resume.pdf", PDF_STUB),
        Part::Text("job_desc", JOB),
        Part::Text("match_mode", "fuzzy"),
    ]);
    let (status, body) = send(router, request).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_error(&body, "invalid_match_mode");
}

#[tokio::test]
async fn test_too_many_fields() {
    let router = router_with(Arc::new(FixedExtractor(RESUME_TEXT)));
    let names: Vec<String> = (0..11).map(|i| format!("extra_{i}")).collect();
    let parts: Vec<Part<'_>> = names.iter().map(|n| Part::Text(n, "x")).collect();
    let (status, body) = send(router, match_request(&parts)).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_error(&body, "field_limit_exceeded");
}

#[tokio::test]
async fn test_field_limit_allows_exactly_ten() {
    let router = router_with(Arc::new(FixedExtractor(RESUME_TEXT)));
    let names: Vec<String> = (0..8).map(|i| format!("extra_{i}")).collect();
    let mut parts: Vec<Part<'_>> = vec![
        Part::File("resume", "resume.pdf", PDF_STUB),
        Part::Text("job_desc", JOB),
    ];
    parts.extend(names.iter().map(|n| Part::Text(n, "x")));
    assert_eq!(parts.len(), 10);

    let (status, _) = send(router, match_request(&parts)).await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn test_oversized_job_description() {
    let router = router_with(Arc::new(FixedExtractor(RESUME_TEXT)));
    let huge = "python ".repeat(MAX_TEXT_FIELD_SIZE / 7 + 1);
    let request = match_request(&[
        Part::File("resume", "resume.pdf", PDF_STUB),
        Part::Text("job_desc", &huge),
    ]);
    let (status, body) = send(router, request).await;

    assert_eq!(status, StatusCode::PAYLOAD_TOO_LARGE);
    assert_error(&body, "text_too_large");
}

#[test]
fn test_create_router_with_security_layers() {
    let vocabulary = SkillVocabulary::load_embedded().unwrap();
    let state = Arc::new(AppState::new(vocabulary, MatchingConfig::default()));
    assert!(create_router(state).is_ok());
}
