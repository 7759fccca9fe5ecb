//! Access policy middleware
//!
//! A deliberately thin guard: callers without an `Authorization` header are
//! anonymous and get 401. Deployments plug a real authentication backend in
//! front; this layer only expresses the "anonymous callers are denied" policy
//! that can be attached to individual routes.

use axum::{
    extract::Request,
    http::header,
    middleware::Next,
    response::Response,
};

use crate::utils::AppError;

/// Reject requests that carry no `Authorization` header.
pub async fn deny_anonymous(request: Request, next: Next) -> Result<Response, AppError> {
    if request.headers().get(header::AUTHORIZATION).is_none() {
        return Err(AppError::Unauthorized);
    }
    Ok(next.run(request).await)
}
