//! Application Context
//!
//! Shared services provided via Leptos Context API.

use community_core::{ClientConfig, HttpCommunityApi};
use leptos::prelude::*;

/// API client and configuration shared by every page
#[derive(Clone, Debug)]
pub struct AppContext {
    pub api: HttpCommunityApi,
    pub config: ClientConfig,
}

impl AppContext {
    pub fn new(config: ClientConfig) -> Self {
        Self {
            api: HttpCommunityApi::new(config.clone()),
            config,
        }
    }
}

pub fn use_app_context() -> AppContext {
    expect_context::<AppContext>()
}
