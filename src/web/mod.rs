//! JSON HTTP API for résumé scoring.
//!
//! This module serves the matching pipeline over HTTP using Axum. Résumés are
//! uploaded as multipart form data, staged in a temporary file for extraction,
//! and removed once the request finishes.
//!
//! ## Starting the Server
//!
//! ```text
//! # Start on default port 8080
//! resume-matcher serve
//!
//! # Custom port, whole-word matching by default
//! resume-matcher serve --port 3000 --match-mode whole-word
//!
//! # Bind to all interfaces
//! resume-matcher serve --address 0.0.0.0
//! ```
//!
//! ## API Endpoints
//!
//! - `POST /api/match` - Score a résumé (multipart: `resume`, `job_desc`, optional `match_mode`)
//! - `GET /api/vocabulary` - List the skill vocabulary
//! - `GET /health` - Liveness and version

pub mod server;
