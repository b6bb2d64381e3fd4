// src/aggregate/enrich.rs
// =============================================================================
// Adds language sets to a page of repositories.
//
// How it works:
// 1. Build one language-lookup future per repository
// 2. Run them all at once with try_join_all
// 3. Zip the answers back onto the summaries
//
// try_join_all gives us the two guarantees we need:
// - Output order is input order, whatever order the lookups finish in
// - The first failure ends the whole thing; the other lookups are dropped
//   and nothing partial comes back
//
// Everything runs on the caller's task: the futures interleave at their
// network calls instead of being spawned onto other threads. Each future
// only reads the username and its own repo name, so no locking is needed.
// =============================================================================

use futures::future::try_join_all;
use tracing::{debug, warn};

use crate::error::{Result, ViewerError};
use crate::github::{Gateway, RepositoryDetail, RepositorySummary};

pub async fn enrich<G>(
    gateway: &G,
    username: &str,
    summaries: Vec<RepositorySummary>,
) -> Result<Vec<RepositoryDetail>>
where
    G: Gateway + ?Sized,
{
    debug!(username, count = summaries.len(), "looking up languages");

    let lookups = summaries.iter().map(|summary| async move {
        gateway
            .fetch_languages(username, &summary.name)
            .await
            .map_err(|e| {
                warn!(repo = %summary.name, error = %e, "language lookup failed");
                ViewerError::EnrichmentFailed {
                    repo: summary.name.clone(),
                    reason: e.to_string(),
                }
            })
    });

    let languages = try_join_all(lookups).await?;

    Ok(summaries
        .into_iter()
        .zip(languages)
        .map(|(summary, languages)| RepositoryDetail { summary, languages })
        .collect())
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. Why not tokio::spawn for each lookup?
//    - Spawned tasks must own their data ('static), so we'd clone the
//      gateway and every name
//    - Plain futures can borrow `gateway` and `summaries` directly
//    - They still overlap: while one waits on the network, the next runs
//
// 2. try_join_all vs buffer_unordered:
//    - buffer_unordered yields results as they finish (order is lost)
//    - try_join_all returns them in the order the futures were given,
//      and stops at the first Err
//
// 3. Why zip instead of indexing?
//    - Both vectors have the same length and order, so zip pairs them up
//      without any bounds checks or clones
// -----------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::github::fake::{summary, Call, FakeGateway};
    use std::time::Duration;

    fn names(details: &[RepositoryDetail]) -> Vec<&str> {
        details.iter().map(|d| d.summary.name.as_str()).collect()
    }

    #[tokio::test]
    async fn test_enrich_merges_languages() {
        let gateway = FakeGateway::with_user("octocat", 2);
        let details = enrich(&gateway, "octocat", vec![summary("repo-1"), summary("repo-2")])
            .await
            .unwrap();

        assert_eq!(names(&details), vec!["repo-1", "repo-2"]);
        assert!(details[0].languages.contains("Rust"));
        assert!(details[0].languages.contains("Lang-repo-1"));
        assert!(details[1].languages.contains("Lang-repo-2"));
    }

    #[tokio::test]
    async fn test_enrich_keeps_input_order_when_lookups_finish_out_of_order() {
        // repo-1 finishes last, repo-4 first
        let gateway = FakeGateway::with_user("octocat", 4)
            .delay_languages("repo-1", Duration::from_millis(40))
            .delay_languages("repo-2", Duration::from_millis(10))
            .delay_languages("repo-3", Duration::from_millis(25));

        let input = vec![summary("repo-1"), summary("repo-2"), summary("repo-3"), summary("repo-4")];
        let details = enrich(&gateway, "octocat", input).await.unwrap();

        assert_eq!(names(&details), vec!["repo-1", "repo-2", "repo-3", "repo-4"]);
    }

    #[tokio::test]
    async fn test_enrich_issues_lookups_concurrently() {
        let gateway = FakeGateway::with_user("octocat", 3)
            .delay_languages("repo-1", Duration::from_millis(200))
            .delay_languages("repo-2", Duration::from_millis(200))
            .delay_languages("repo-3", Duration::from_millis(200));

        let started = std::time::Instant::now();
        let input = vec![summary("repo-1"), summary("repo-2"), summary("repo-3")];
        enrich(&gateway, "octocat", input).await.unwrap();

        // Sequential lookups would take at least 600ms
        assert!(started.elapsed() < Duration::from_millis(550));
    }

    #[tokio::test]
    async fn test_enrich_fails_whole_page_on_any_lookup_failure() {
        let gateway = FakeGateway::with_user("octocat", 3).fail_languages("repo-2");
        let input = vec![summary("repo-1"), summary("repo-2"), summary("repo-3")];

        let result = enrich(&gateway, "octocat", input).await;

        match result {
            Err(ViewerError::EnrichmentFailed { repo, .. }) => assert_eq!(repo, "repo-2"),
            other => panic!("expected EnrichmentFailed, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_enrich_failure_does_not_wait_for_slow_lookups() {
        let gateway = FakeGateway::with_user("octocat", 2)
            .delay_languages("repo-1", Duration::from_secs(30))
            .fail_languages("repo-2");

        let input = vec![summary("repo-1"), summary("repo-2")];
        let result = tokio::time::timeout(
            Duration::from_secs(5),
            enrich(&gateway, "octocat", input),
        )
        .await
        .expect("first failure should end enrichment early");

        assert!(matches!(result, Err(ViewerError::EnrichmentFailed { .. })));
    }

    #[tokio::test]
    async fn test_enrich_empty_page_makes_no_calls() {
        let gateway = FakeGateway::with_user("octocat", 0);
        let details = enrich(&gateway, "octocat", Vec::new()).await.unwrap();

        assert!(details.is_empty());
        assert!(!gateway.calls().iter().any(|c| matches!(c, Call::Languages(_))));
    }
}
