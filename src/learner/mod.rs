use std::future::{ready, Ready};

use actix_web::{FromRequest, HttpRequest};
use once_cell::sync::Lazy;
use regex::Regex;

use crate::errors::AppError;

pub const LEARNER_ID_HEADER: &str = "X-Learner-Id";

static LEARNER_ID_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z0-9_-]{1,64}$").expect("LEARNER_ID_PATTERN is a valid regex pattern")
});

/// Learner identity as asserted by the upstream gateway. Authentication itself
/// lives outside this service; only the header's shape is checked here.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LearnerId(pub String);

impl LearnerId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromRequest for LearnerId {
    type Error = AppError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut actix_web::dev::Payload) -> Self::Future {
        let learner_id = req
            .headers()
            .get(LEARNER_ID_HEADER)
            .and_then(|h| h.to_str().ok())
            .ok_or_else(|| AppError::Unauthorized("Missing learner identity header".to_string()))
            .and_then(|value| {
                if LEARNER_ID_PATTERN.is_match(value) {
                    Ok(LearnerId(value.to_string()))
                } else {
                    Err(AppError::Unauthorized(
                        "Malformed learner identity header".to_string(),
                    ))
                }
            });

        ready(learner_id)
    }
}
