//! Stateful LINDA session.
//!
//! A session walks through three states:
//!
//! ```text
//! Unauthenticated --login--> Authenticated --access_token--> TokenAcquired
//! ```
//!
//! The cookie store of the underlying HTTP client lives as long as the
//! session and is never reset. Every operation takes `&mut self`, so one
//! session only ever has a single request in flight.

use std::sync::OnceLock;
use std::time::Duration;

use regex::Regex;
use tracing::{debug, info, instrument};

use lindagrades_core::extract::{PatternExtractor, RecordExtractor};
use lindagrades_core::{EctsOverrides, ExamRecord, ExtractError};

use crate::endpoints::Endpoints;
use crate::error::SessionError;

/// User agent sent with every request.
pub const USER_AGENT: &str = "Mozilla/5.0 (Windows NT 6.3; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/40.0.2214.111 Safari/537.36";
/// Per-request timeout.
pub const DEFAULT_TIMEOUT_SECS: u64 = 15;
/// Text LINDA shows on every page of a logged-in session.
pub const LOGGED_IN_MARKER: &str = "Sie sind angemeldet als:";

const FIELD_USERNAME: &str = "asdf";
const FIELD_PASSWORD: &str = "fdsa";
const TOKEN_PATTERN: &str = r#"asi=([^"^&]+)"#;

static TOKEN_REGEX: OnceLock<Regex> = OnceLock::new();

fn token_regex() -> &'static Regex {
    TOKEN_REGEX.get_or_init(|| Regex::new(TOKEN_PATTERN).expect("token pattern compiles"))
}

/// Where a session stands in the log-in handshake.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionState {
    Unauthenticated,
    Authenticated,
    TokenAcquired { token: String },
}

/// Builder for [`Session`].
pub struct SessionBuilder {
    endpoints: Endpoints,
    overrides: EctsOverrides,
    extractor: Option<Box<dyn RecordExtractor>>,
    timeout: Duration,
}

impl SessionBuilder {
    fn new() -> Self {
        Self {
            endpoints: Endpoints::default(),
            overrides: EctsOverrides::default(),
            extractor: None,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }

    /// Talk to another host, e.g. a mock server.
    pub fn base_url(mut self, base_url: &str) -> Self {
        self.endpoints = Endpoints::new(base_url);
        self
    }

    pub fn endpoints(mut self, endpoints: Endpoints) -> Self {
        self.endpoints = endpoints;
        self
    }

    /// Credit overrides applied to every fetched record set.
    pub fn overrides(mut self, overrides: EctsOverrides) -> Self {
        self.overrides = overrides;
        self
    }

    /// Use a different grade table layout.
    pub fn extractor(mut self, extractor: Box<dyn RecordExtractor>) -> Self {
        self.extractor = Some(extractor);
        self
    }

    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn build(self) -> Result<Session, SessionError> {
        let client = reqwest::Client::builder()
            .cookie_store(true)
            .user_agent(USER_AGENT)
            .timeout(self.timeout)
            .build()
            .map_err(|e| SessionError::Network(format!("failed to build HTTP client: {e}")))?;

        Ok(Session {
            client,
            endpoints: self.endpoints,
            extractor: self
                .extractor
                .unwrap_or_else(|| Box::new(PatternExtractor::qis_v1())),
            overrides: self.overrides,
            state: SessionState::Unauthenticated,
            timeout_secs: self.timeout.as_secs(),
        })
    }
}

/// An authenticated conversation with LINDA.
pub struct Session {
    client: reqwest::Client,
    endpoints: Endpoints,
    extractor: Box<dyn RecordExtractor>,
    overrides: EctsOverrides,
    state: SessionState,
    timeout_secs: u64,
}

impl Session {
    pub fn builder() -> SessionBuilder {
        SessionBuilder::new()
    }

    /// Session against the public LINDA host with no overrides.
    pub fn new() -> Result<Self, SessionError> {
        Self::builder().build()
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    pub fn is_authenticated(&self) -> bool {
        !matches!(self.state, SessionState::Unauthenticated)
    }

    /// Log in with the portal's form fields.
    ///
    /// A session that already holds a token keeps it.
    #[instrument(skip(self, password))]
    pub async fn login(&mut self, username: &str, password: &str) -> Result<(), SessionError> {
        let form = [(FIELD_USERNAME, username), (FIELD_PASSWORD, password)];
        let body = self.post(&self.endpoints.login, Some(&form[..])).await?;

        if !body.contains(LOGGED_IN_MARKER) {
            self.state = SessionState::Unauthenticated;
            return Err(SessionError::AuthenticationFailed);
        }

        if self.state == SessionState::Unauthenticated {
            self.state = SessionState::Authenticated;
        }
        info!("logged in");
        Ok(())
    }

    /// The session's `asi` token, fetched from the overview page on first use.
    pub async fn access_token(&mut self) -> Result<&str, SessionError> {
        if self.state == SessionState::Unauthenticated {
            return Err(SessionError::NotAuthenticated);
        }

        if self.state == SessionState::Authenticated {
            let body = self.post(&self.endpoints.overview, None).await?;
            let token = token_regex()
                .captures(&body)
                .and_then(|caps| caps.get(1))
                .map(|m| m.as_str().to_string())
                .ok_or(SessionError::TokenNotFound)?;
            info!("acquired session token");
            self.state = SessionState::TokenAcquired { token };
        }

        match &self.state {
            SessionState::TokenAcquired { token } => Ok(token),
            _ => Err(SessionError::NotAuthenticated),
        }
    }

    /// Fetch and extract the grade listing, with overrides applied.
    #[instrument(skip(self), fields(schema = %self.extractor.schema()))]
    pub async fn exam_records(&mut self) -> Result<Vec<ExamRecord>, SessionError> {
        if !self.is_authenticated() {
            return Err(SessionError::NotAuthenticated);
        }

        let token = self.access_token().await?.to_string();
        let url = self.endpoints.grades(&token);
        let body = self.post(&url, None).await?;

        let mut records = match self.extractor.extract(&body) {
            Ok(records) => records,
            Err(ExtractError::NoRecordsFound) if !body.contains(LOGGED_IN_MARKER) => {
                self.state = SessionState::Unauthenticated;
                return Err(SessionError::SessionExpired);
            }
            Err(e) => return Err(e.into()),
        };

        self.overrides.apply(&mut records);
        info!(count = records.len(), "fetched exam records");
        Ok(records)
    }

    /// POST to `url`, form-encoding `form` when given, and return the body.
    async fn post(&self, url: &str, form: Option<&[(&str, &str)]>) -> Result<String, SessionError> {
        let mut request = self.client.post(url);
        if let Some(fields) = form {
            request = request.form(fields);
        }

        let response = request.send().await.map_err(|e| self.transport_error(e))?;

        let status = response.status();
        debug!(url, status = status.as_u16(), "response");
        if !status.is_success() {
            return Err(SessionError::HttpStatus {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        response.text().await.map_err(|e| self.transport_error(e))
    }

    fn transport_error(&self, e: reqwest::Error) -> SessionError {
        if e.is_timeout() {
            SessionError::Timeout(self.timeout_secs)
        } else {
            SessionError::Network(e.to_string())
        }
    }
}
