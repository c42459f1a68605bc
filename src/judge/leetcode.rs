//! LeetCode submission lookup
//!
//! Uses the public GraphQL endpoint to fetch a user's recent accepted
//! submissions and match them against a question slug.

use anyhow::{Context, Result};
use reqwest::Client;
use serde::Deserialize;

use crate::constants::LEETCODE_RECENT_SUBMISSION_LIMIT;

const GRAPHQL_URL: &str = "https://leetcode.com/graphql";

const RECENT_AC_QUERY: &str = r#"
query recentAcSubmissions($username: String!, $limit: Int!) {
  recentAcSubmissionList(username: $username, limit: $limit) {
    titleSlug
    statusDisplay
  }
}
"#;

#[derive(Debug, Deserialize)]
struct GraphqlResponse {
    data: Option<RecentAcData>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RecentAcData {
    recent_ac_submission_list: Option<Vec<RecentSubmission>>,
}

/// One entry of a user's recent submission list
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecentSubmission {
    pub title_slug: String,
    pub status_display: Option<String>,
}

/// Query LeetCode for the user's recent submissions and check for an
/// accepted entry matching `slug`
pub async fn fetch_solved(client: &Client, handle: &str, slug: &str) -> Result<bool> {
    let body = serde_json::json!({
        "query": RECENT_AC_QUERY,
        "variables": {
            "username": handle,
            "limit": LEETCODE_RECENT_SUBMISSION_LIMIT,
        },
    });

    let response = client
        .post(GRAPHQL_URL)
        .json(&body)
        .send()
        .await
        .context("LeetCode request failed")?
        .error_for_status()
        .context("LeetCode returned an error status")?;

    let parsed: GraphqlResponse = response
        .json()
        .await
        .context("LeetCode response was not valid JSON")?;

    let submissions = parsed
        .data
        .and_then(|d| d.recent_ac_submission_list)
        .unwrap_or_default();

    Ok(contains_accepted(&submissions, slug))
}

/// True iff an entry matches the slug and its status indicates acceptance.
///
/// The recentAcSubmissionList query already filters to accepted
/// submissions; statusDisplay is still checked when present because
/// other submission-list queries include rejected entries.
pub fn contains_accepted(submissions: &[RecentSubmission], slug: &str) -> bool {
    submissions.iter().any(|s| {
        s.title_slug == slug
            && s.status_display
                .as_deref()
                .map(|status| status == "Accepted")
                .unwrap_or(true)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn submission(slug: &str, status: Option<&str>) -> RecentSubmission {
        RecentSubmission {
            title_slug: slug.to_string(),
            status_display: status.map(|s| s.to_string()),
        }
    }

    #[test]
    fn test_contains_accepted_matches_slug_and_status() {
        let subs = vec![
            submission("two-sum", Some("Accepted")),
            submission("add-two-numbers", Some("Wrong Answer")),
        ];

        assert!(contains_accepted(&subs, "two-sum"));
        assert!(!contains_accepted(&subs, "add-two-numbers"));
        assert!(!contains_accepted(&subs, "three-sum"));
    }

    #[test]
    fn test_contains_accepted_without_status_field() {
        // recentAcSubmissionList omits statusDisplay in some responses;
        // entries from that query are accepted by definition
        let subs = vec![submission("two-sum", None)];
        assert!(contains_accepted(&subs, "two-sum"));
    }

    #[test]
    fn test_parse_graphql_response() {
        let raw = r#"{
            "data": {
                "recentAcSubmissionList": [
                    {"titleSlug": "two-sum", "statusDisplay": "Accepted"}
                ]
            }
        }"#;

        let parsed: GraphqlResponse = serde_json::from_str(raw).unwrap();
        let subs = parsed.data.unwrap().recent_ac_submission_list.unwrap();
        assert_eq!(subs.len(), 1);
        assert!(contains_accepted(&subs, "two-sum"));
    }

    #[test]
    fn test_parse_empty_data() {
        let raw = r#"{"data": null}"#;
        let parsed: GraphqlResponse = serde_json::from_str(raw).unwrap();
        assert!(parsed.data.is_none());
    }
}
