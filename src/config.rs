// src/config.rs

use std::time::Duration;

pub const DEFAULT_SOURCE: &str = "questions.json";
pub const SOURCE_ENV: &str = "WEEK_QUIZ_QUESTIONS";
const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Where the question document comes from and how long a remote load may take.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadConfig {
    pub source: String,
    pub timeout: Duration,
}

impl Default for LoadConfig {
    fn default() -> Self {
        Self {
            source: DEFAULT_SOURCE.to_owned(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

impl LoadConfig {
    pub fn is_remote(&self) -> bool {
        is_remote(&self.source)
    }
}

pub fn is_remote(source: &str) -> bool {
    source.starts_with("http://") || source.starts_with("https://")
}

fn normalize_source(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// Finds the raw `questions` value in a `?a=b&questions=...` query string.
pub fn source_from_query(search: &str) -> Option<&str> {
    let query = search.strip_prefix('?').unwrap_or(search);
    query.split('&').find_map(|pair| {
        let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
        (key == "questions").then_some(value)
    })
}

#[cfg(not(target_arch = "wasm32"))]
mod native {
    use super::*;
    use clap::Parser;

    #[derive(Parser, Debug)]
    #[command(name = "week_quiz", version, about = "Weekly multiple-choice quiz")]
    pub struct Cli {
        /// Path or http(s) URL of the question document
        #[arg(long)]
        pub questions: Option<String>,

        /// Seconds to wait for a remote question document
        #[arg(long, default_value_t = DEFAULT_TIMEOUT_SECS, value_parser = clap::value_parser!(u64).range(1..))]
        pub timeout_secs: u64,
    }

    impl Cli {
        /// Flag first, then the environment variable, then the default file.
        pub fn into_config(self, env_source: Option<String>) -> LoadConfig {
            let source = self
                .questions
                .as_deref()
                .and_then(normalize_source)
                .or_else(|| env_source.as_deref().and_then(normalize_source))
                .unwrap_or_else(|| DEFAULT_SOURCE.to_owned());
            LoadConfig {
                source,
                timeout: Duration::from_secs(self.timeout_secs),
            }
        }
    }

    pub fn from_args() -> LoadConfig {
        Cli::parse().into_config(std::env::var(SOURCE_ENV).ok())
    }
}

#[cfg(not(target_arch = "wasm32"))]
pub use native::{Cli, from_args};

#[cfg(target_arch = "wasm32")]
mod web {
    use super::*;

    /// Build-time variable, then `?questions=`, then the page's meta tag.
    pub fn from_page() -> LoadConfig {
        let source = source_from_build_env()
            .or_else(source_from_querystring)
            .or_else(source_from_meta)
            .unwrap_or_else(|| DEFAULT_SOURCE.to_owned());
        LoadConfig {
            source,
            ..LoadConfig::default()
        }
    }

    fn source_from_build_env() -> Option<String> {
        option_env!("WEEK_QUIZ_QUESTIONS").and_then(normalize_source)
    }

    fn source_from_querystring() -> Option<String> {
        let window = web_sys::window()?;
        let search = window.location().search().ok()?;
        let raw = source_from_query(&search)?;
        let decoded = js_sys::decode_uri_component(raw).ok()?;
        normalize_source(&decoded.as_string()?)
    }

    fn source_from_meta() -> Option<String> {
        let document = web_sys::window()?.document()?;
        let meta = document
            .query_selector("meta[name='week-quiz-questions']")
            .ok()??;
        meta.get_attribute("content")
            .as_deref()
            .and_then(normalize_source)
    }
}

#[cfg(target_arch = "wasm32")]
pub use web::from_page;
