//! Integration tests for the Folio portfolio service.
//!
//! # Running Tests
//!
//! ```bash
//! # Start the database and the server
//! docker compose up -d postgres
//! PORTFOLIO_ADMIN_PASSWORD=... cargo run -p folio-server
//!
//! # Run integration tests against it
//! TEST_ADMIN_PASSWORD=... cargo test -p folio-integration-tests -- --ignored
//! ```
//!
//! # Environment
//!
//! - `PORTFOLIO_BASE_URL` - Server under test (default: `http://localhost:5000`)
//! - `TEST_ADMIN_PASSWORD` - Password the server was started with
//!
//! All tests are `#[ignore]`d so a plain `cargo test` stays green without a
//! running server. The tests mutate the single portfolio document; run them
//! against a disposable database.
