//! Request pipelines: prompt, generate, extract, persist.
//!
//! Each pipeline borrows the [`Database`](crate::Database) and a
//! [`TextGenerator`](niramay_llm::TextGenerator) for the length of one request.

mod diet;
mod doctor_match;
mod prescription;

pub use diet::*;
pub use doctor_match::*;
pub use prescription::*;

use crate::{NiramayError, NiramayResult};

/// Users are opaque ids; a blank one means the caller is not signed in.
fn require_user(user_id: &str) -> NiramayResult<&str> {
    let user_id = user_id.trim();
    if user_id.is_empty() {
        return Err(NiramayError::Unauthorized("User not authenticated".into()));
    }
    Ok(user_id)
}

/// Treat a blank reply as the service being unavailable.
fn non_blank_reply(reply: String) -> NiramayResult<String> {
    if reply.trim().is_empty() {
        return Err(NiramayError::UpstreamUnavailable(
            "AI service returned an empty response".into(),
        ));
    }
    Ok(reply)
}
