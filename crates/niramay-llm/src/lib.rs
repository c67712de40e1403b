//! Generative-AI plumbing for Niramay.
//!
//! This crate builds the prompts sent to the AI service, defines the
//! [`TextGenerator`] seam the service sits behind, and turns the service's
//! free-form replies into typed values (doctor recommendation, prescription
//! JSON, diet plan).

pub mod client;
pub mod extraction;
pub mod prompts;

#[cfg(feature = "gemini")]
pub mod gemini;

pub use client::*;
pub use extraction::*;
pub use prompts::*;

#[cfg(feature = "gemini")]
pub use gemini::GeminiClient;
