//! Application state for the contract API

use std::sync::Arc;

use anyhow::Result;

use crate::provider::{provider_from_env, AnalysisProvider};

/// Upload cap enforced before extraction: 50 MB
pub const MAX_UPLOAD_BYTES: usize = 50 * 1024 * 1024;

pub struct AppState {
    pub provider: Arc<dyn AnalysisProvider>,
}

impl AppState {
    pub fn new() -> Result<Self> {
        let provider = provider_from_env()?;
        tracing::info!("Using analysis provider: {}", provider.name());
        Ok(Self { provider })
    }
}
