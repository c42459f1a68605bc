//! External judge verification
//!
//! Queries LeetCode and Codeforces for a user's submission history and
//! checks whether a given problem has an accepted verdict. All failure
//! modes (timeout, malformed response, upstream error) fail closed to
//! "not solved" so a flaky judge API never breaks a practice flow.

pub mod codeforces;
pub mod leetcode;

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::config::JudgeConfig;
use crate::error::AppResult;

/// External judge platform
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    LeetCode,
    Codeforces,
}

impl std::fmt::Display for Platform {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::LeetCode => write!(f, "leetcode"),
            Self::Codeforces => write!(f, "codeforces"),
        }
    }
}

/// HTTP client for judge APIs, with per-request timeout and a fixed
/// courtesy delay before every call
#[derive(Debug, Clone)]
pub struct JudgeClient {
    client: reqwest::Client,
    request_delay: Duration,
}

impl JudgeClient {
    /// Build a judge client from configuration
    pub fn new(config: &JudgeConfig) -> AppResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_seconds))
            .build()
            .map_err(|e| crate::error::AppError::Configuration(e.to_string()))?;

        Ok(Self {
            client,
            request_delay: Duration::from_millis(config.request_delay_ms),
        })
    }

    /// Check whether `handle` has an accepted submission for `problem`
    /// on the given platform.
    ///
    /// Never returns an error: upstream failures are logged and treated
    /// as "not solved".
    pub async fn verify(&self, platform: Platform, problem: &str, handle: &str) -> bool {
        // Courtesy delay to respect upstream rate limits
        tokio::time::sleep(self.request_delay).await;

        let result = match platform {
            Platform::LeetCode => leetcode::fetch_solved(&self.client, handle, problem).await,
            Platform::Codeforces => codeforces::fetch_solved(&self.client, handle, problem).await,
        };

        match result {
            Ok(solved) => solved,
            Err(e) => {
                tracing::warn!(
                    platform = %platform,
                    handle = %handle,
                    problem = %problem,
                    error = %e,
                    "Judge verification failed, treating as not solved"
                );
                false
            }
        }
    }
}
