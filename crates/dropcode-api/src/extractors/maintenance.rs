//! `MaintenanceAuth` extractor: checks the shared cleanup secret.

use axum::RequestPartsExt;
use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use axum_extra::TypedHeader;
use axum_extra::headers::Authorization;
use axum_extra::headers::authorization::Bearer;

use dropcode_core::error::AppError;

use crate::error::ApiError;
use crate::state::AppState;

/// Proof that the request carried `Authorization: Bearer <cleanup secret>`.
#[derive(Debug, Clone, Copy)]
pub struct MaintenanceAuth;

impl FromRequestParts<AppState> for MaintenanceAuth {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let Ok(TypedHeader(Authorization(bearer))) =
            parts.extract::<TypedHeader<Authorization<Bearer>>>().await
        else {
            tracing::warn!("Cleanup request without bearer credential");
            return Err(AppError::unauthorized("Unauthorized").into());
        };

        if !secrets_match(bearer.token(), &state.config.cleanup.secret) {
            tracing::warn!("Cleanup request with wrong credential");
            return Err(AppError::unauthorized("Unauthorized").into());
        }

        Ok(MaintenanceAuth)
    }
}

/// Compare without short-circuiting on the first differing byte.
fn secrets_match(presented: &str, expected: &str) -> bool {
    let (a, b) = (presented.as_bytes(), expected.as_bytes());
    a.len() == b.len() && a.iter().zip(b).fold(0u8, |acc, (x, y)| acc | (x ^ y)) == 0
}
