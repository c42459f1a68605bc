//! Codeforces submission lookup
//!
//! Uses the public REST API (`user.status`) to fetch a user's
//! submission history and match it against a problem name.

use anyhow::{bail, Context, Result};
use reqwest::Client;
use serde::Deserialize;

const API_URL: &str = "https://codeforces.com/api/user.status";

#[derive(Debug, Deserialize)]
struct UserStatusResponse {
    status: String,
    result: Option<Vec<CfSubmission>>,
}

/// One entry of a user's Codeforces submission history
#[derive(Debug, Deserialize)]
pub struct CfSubmission {
    pub problem: CfProblem,
    pub verdict: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct CfProblem {
    pub name: String,
}

/// Query Codeforces for the user's submission history and check for an
/// OK verdict on a problem matching `problem_name`
pub async fn fetch_solved(client: &Client, handle: &str, problem_name: &str) -> Result<bool> {
    let response = client
        .get(API_URL)
        .query(&[("handle", handle)])
        .send()
        .await
        .context("Codeforces request failed")?
        .error_for_status()
        .context("Codeforces returned an error status")?;

    let parsed: UserStatusResponse = response
        .json()
        .await
        .context("Codeforces response was not valid JSON")?;

    if parsed.status != "OK" {
        bail!("Codeforces API status was {}", parsed.status);
    }

    let submissions = parsed.result.unwrap_or_default();
    Ok(contains_ok_verdict(&submissions, problem_name))
}

/// True iff an entry's problem name matches and its verdict is "OK"
pub fn contains_ok_verdict(submissions: &[CfSubmission], problem_name: &str) -> bool {
    submissions
        .iter()
        .any(|s| s.problem.name == problem_name && s.verdict.as_deref() == Some("OK"))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn submission(name: &str, verdict: Option<&str>) -> CfSubmission {
        CfSubmission {
            problem: CfProblem {
                name: name.to_string(),
            },
            verdict: verdict.map(|v| v.to_string()),
        }
    }

    #[test]
    fn test_contains_ok_verdict() {
        let subs = vec![
            submission("Watermelon", Some("OK")),
            submission("Theatre Square", Some("WRONG_ANSWER")),
            submission("Way Too Long Words", None),
        ];

        assert!(contains_ok_verdict(&subs, "Watermelon"));
        assert!(!contains_ok_verdict(&subs, "Theatre Square"));
        // In-queue submissions have no verdict yet
        assert!(!contains_ok_verdict(&subs, "Way Too Long Words"));
        assert!(!contains_ok_verdict(&subs, "Unknown Problem"));
    }

    #[test]
    fn test_parse_user_status_response() {
        let raw = r#"{
            "status": "OK",
            "result": [
                {"problem": {"name": "Watermelon"}, "verdict": "OK"},
                {"problem": {"name": "Theatre Square"}, "verdict": "TIME_LIMIT_EXCEEDED"}
            ]
        }"#;

        let parsed: UserStatusResponse = serde_json::from_str(raw).unwrap();
        assert_eq!(parsed.status, "OK");
        let subs = parsed.result.unwrap();
        assert!(contains_ok_verdict(&subs, "Watermelon"));
        assert!(!contains_ok_verdict(&subs, "Theatre Square"));
    }

    #[test]
    fn test_parse_failed_status() {
        let raw = r#"{"status": "FAILED", "comment": "handle: User not found"}"#;
        let parsed: UserStatusResponse = serde_json::from_str(raw).unwrap();
        assert_eq!(parsed.status, "FAILED");
        assert!(parsed.result.is_none());
    }
}
