//! Integration tests for the phish_sentry analysis pipeline.
//!
//! These tests drive `MessageAnalyzer::analyze` end to end against a mock
//! reputation service. They make no real network requests: the reputation
//! endpoint is pointed at a local `httptest` server.
//!
//! URLs in test messages use RFC 2606 `.invalid` hosts, so extraction finds
//! them, redirect resolution fails fast and falls back to the original URL,
//! and the lookup proceeds against the mock endpoint. Redirect following
//! itself is covered by the resolver's own tests.

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use httptest::{matchers::*, responders::*, Expectation, Server};

    use phish_sentry::initialization::{
        init_reputation_client, init_resolver_client, init_semaphore,
    };
    use phish_sentry::{
        ErrorType, InfoType, KeywordBackend, MessageAnalyzer, ProcessingStats, RedirectResolver,
        ReputationClient, RiskPolicy, TextAnalyzer,
    };

    /// Builds an analyzer whose reputation endpoint is the mock server.
    ///
    /// The resolver gets a short timeout so the `.invalid` hosts in test
    /// messages fail fast.
    fn analyzer_for(server: &Server) -> (MessageAnalyzer, Arc<ProcessingStats>) {
        let resolver_client =
            init_resolver_client(2, "phish_sentry-test/1.0").expect("resolver client should build");
        let lookup_client = init_reputation_client(5).expect("lookup client should build");
        let endpoint = format!("http://{}", server.addr());
        let reputation = ReputationClient::new(lookup_client, "test-key".to_string(), &endpoint);
        let text = TextAnalyzer::new(Some(Arc::new(KeywordBackend::new())), None, "phishing");

        let stats = Arc::new(ProcessingStats::new());
        let analyzer = MessageAnalyzer::new(
            RedirectResolver::new(resolver_client),
            Some(reputation),
            text,
            RiskPolicy::default(),
            init_semaphore(4),
            Arc::clone(&stats),
        );
        (analyzer, stats)
    }

    /// Mocks a scanned report for `url` with the given detection counters.
    fn expect_report(server: &Server, url: &str, malicious: u32, suspicious: u32) {
        server.expect(
            Expectation::matching(request::method_path(
                "GET",
                format!("/urls/{}", ReputationClient::url_id(url)),
            ))
            .respond_with(status_code(200).body(format!(
                r#"{{"data":{{"attributes":{{"last_analysis_stats":{{"malicious":{},"suspicious":{},"harmless":60}}}}}}}}"#,
                malicious, suspicious
            ))),
        );
    }

    #[tokio::test]
    async fn test_detection_counts_grade_the_links() {
        let server = Server::run();
        expect_report(&server, "http://banking-alert.invalid/verify", 5, 2);
        expect_report(&server, "http://oddity.invalid/page", 1, 0);
        expect_report(&server, "http://docs.invalid/guide", 0, 0);

        let (analyzer, _stats) = analyzer_for(&server);
        let report = analyzer
            .analyze(
                "links: http://banking-alert.invalid/verify http://oddity.invalid/page http://docs.invalid/guide",
            )
            .await;

        let lines = report.lines();
        assert_eq!(lines[0], "🔎 Link check:");
        assert!(lines[1].contains("🔴"), "got: {}", lines[1]);
        assert!(lines[1].contains("(5 malicious, 2 suspicious detections)"));
        assert!(lines[2].contains("🟡"), "got: {}", lines[2]);
        assert!(lines[3].contains("✅ looks safe"), "got: {}", lines[3]);
    }

    #[tokio::test]
    async fn test_clean_message_produces_the_expected_report() {
        let server = Server::run();
        expect_report(&server, "http://docs.invalid/guide", 0, 0);

        let (analyzer, _stats) = analyzer_for(&server);
        let report = analyzer
            .analyze("the user guide moved to http://docs.invalid/guide")
            .await;

        assert_eq!(
            report.to_text(),
            "🔎 Link check:\n    - `http://docs.invalid/guide`: ✅ looks safe\n📝 Text analysis:\n✅ The text shows no signs of phishing"
        );
    }

    #[tokio::test]
    async fn test_unknown_url_is_submitted_and_reported_queued() {
        let server = Server::run();
        let url = "http://unseen-link.invalid/x";
        server.expect(
            Expectation::matching(request::method_path(
                "GET",
                format!("/urls/{}", ReputationClient::url_id(url)),
            ))
            .respond_with(status_code(404)),
        );
        server.expect(
            Expectation::matching(all_of![
                request::method_path("POST", "/urls"),
                request::body(url_decoded(contains(("url", url)))),
            ])
            .respond_with(status_code(200).body(r#"{"data":{"type":"analysis"}}"#)),
        );

        let (analyzer, stats) = analyzer_for(&server);
        let report = analyzer
            .analyze("anyone recognize http://unseen-link.invalid/x ?")
            .await;

        let lines = report.lines();
        assert!(lines[1].contains("⏳"), "got: {}", lines[1]);
        assert!(lines[1].contains("ask again in about 30 seconds"));
        assert_eq!(stats.get_info_count(InfoType::UrlQueuedForScan), 1);
    }

    #[tokio::test]
    async fn test_rate_limited_lookup_mentions_rate_limiting() {
        let server = Server::run();
        let url = "http://anything.invalid/a";
        server.expect(
            Expectation::matching(request::method_path(
                "GET",
                format!("/urls/{}", ReputationClient::url_id(url)),
            ))
            .respond_with(status_code(429)),
        );

        let (analyzer, stats) = analyzer_for(&server);
        let report = analyzer.analyze("check http://anything.invalid/a").await;

        let lines = report.lines();
        assert!(lines[1].contains("⚠️"), "got: {}", lines[1]);
        assert!(lines[1].contains("rate limited"), "got: {}", lines[1]);
        assert_eq!(stats.get_error_count(ErrorType::LookupRateLimited), 1);
    }

    #[tokio::test]
    async fn test_service_outage_becomes_an_error_line() {
        let server = Server::run();
        let url = "http://anything.invalid/a";
        server.expect(
            Expectation::matching(request::method_path(
                "GET",
                format!("/urls/{}", ReputationClient::url_id(url)),
            ))
            .respond_with(status_code(503)),
        );

        let (analyzer, stats) = analyzer_for(&server);
        let report = analyzer.analyze("check http://anything.invalid/a").await;

        let lines = report.lines();
        assert!(lines[1].contains("could not be checked"), "got: {}", lines[1]);
        assert!(lines[1].contains("503"), "got: {}", lines[1]);
        assert_eq!(stats.get_error_count(ErrorType::LookupUnexpectedStatus), 1);
        // A failed link check never suppresses the text verdict
        assert!(report.to_text().contains("📝 Text analysis:"));
    }

    #[tokio::test]
    async fn test_lines_follow_message_order() {
        let server = Server::run();
        expect_report(&server, "http://one.invalid/a", 3, 0);
        expect_report(&server, "http://two.invalid/b", 0, 0);
        expect_report(&server, "http://three.invalid/c", 1, 1);

        let (analyzer, _stats) = analyzer_for(&server);
        let report = analyzer
            .analyze("http://one.invalid/a then http://two.invalid/b then http://three.invalid/c")
            .await;

        let lines = report.lines();
        assert!(lines[1].contains("`http://one.invalid/a`") && lines[1].contains("🔴"));
        assert!(lines[2].contains("`http://two.invalid/b`") && lines[2].contains("✅"));
        assert!(lines[3].contains("`http://three.invalid/c`") && lines[3].contains("🟡"));
    }

    #[tokio::test]
    async fn test_repeated_analysis_is_byte_identical() {
        let server = Server::run();
        let url = "http://stable.invalid/page";
        server.expect(
            Expectation::matching(request::method_path(
                "GET",
                format!("/urls/{}", ReputationClient::url_id(url)),
            ))
            .times(2)
            .respond_with(status_code(200).body(
                r#"{"data":{"attributes":{"last_analysis_stats":{"malicious":2,"suspicious":0,"harmless":60}}}}"#,
            )),
        );

        let (analyzer, _stats) = analyzer_for(&server);
        let message = "is http://stable.invalid/page safe to open?";
        let first = analyzer.analyze(message).await;
        let second = analyzer.analyze(message).await;

        assert_eq!(first.to_text(), second.to_text());
    }

    #[tokio::test]
    async fn test_russian_phishing_message_end_to_end() {
        let server = Server::run();
        expect_report(&server, "http://bank-card.invalid/verify", 7, 1);

        let (analyzer, _stats) = analyzer_for(&server);
        let report = analyzer
            .analyze("Срочно подтвердите пароль на http://bank-card.invalid/verify")
            .await;

        let text = report.to_text();
        assert!(text.contains("🔴"), "got: {text}");
        assert!(
            text.contains("The text looks like phishing (confidence 95%)"),
            "got: {text}"
        );
    }

    #[tokio::test]
    async fn test_message_without_links_reports_text_only() {
        let server = Server::run();

        let (analyzer, stats) = analyzer_for(&server);
        let report = analyzer.analyze("lunch at noon?").await;

        assert_eq!(
            report.to_text(),
            "ℹ️ No links found in the message\n📝 Text analysis:\n✅ The text shows no signs of phishing"
        );
        assert_eq!(stats.get_info_count(InfoType::UrlExtracted), 0);
    }
}
