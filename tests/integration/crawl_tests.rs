//! Integration tests for the crawler
//!
//! These tests use wiremock to serve browse and term pages over HTTP, plus an
//! in-memory fetcher for checking the page loop policy without a network.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Mutex;
use urban_scrape::config::Config;
use urban_scrape::crawler::{CrawlController, HttpFetcher, PageFetcher};
use urban_scrape::model::{CrawlResult, Definition, Letter};
use urban_scrape::output::write_entries;
use urban_scrape::FetchError;
use url::Url;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Creates a test configuration for the given base URL and letter range
fn create_test_config(base_url: &str, first: char, last: char, max_pages: u32) -> Config {
    let mut config = Config::default();
    config.site.base_url = base_url.to_string();
    config.crawler.first_letter = first;
    config.crawler.last_letter = last;
    config.crawler.max_pages_per_letter = max_pages;
    config.crawler.request_timeout_secs = 5;
    config.crawler.connect_timeout_secs = 2;
    config
}

/// Renders a browse page listing `words` the way the site does
fn browse_page(words: &[&str]) -> String {
    let mut lines = vec![
        "<html><head><title>Browse</title></head><body>".to_string(),
        "<div id='columnist'>".to_string(),
        "<ul>".to_string(),
    ];
    for word in words {
        lines.push(format!(
            r#"<li class=""><a href="/define.php?term={}">{}</a></li>"#,
            word, word
        ));
    }
    lines.push("</ul>".to_string());
    lines.push("</div>".to_string());
    lines.push("</body></html>".to_string());
    lines.join("\n")
}

/// Renders a term page listing `definitions`
fn term_page(definitions: &[&str]) -> String {
    let mut lines = vec![
        "<html><body>".to_string(),
        "<div class='definitions'>".to_string(),
        "<ol>".to_string(),
    ];
    for definition in definitions {
        lines.push(format!("<li>{}</li>", definition));
    }
    lines.push("</ol>".to_string());
    lines.push("</div>".to_string());
    lines.push("</body></html>".to_string());
    lines.join("\n")
}

async fn mount_browse(server: &MockServer, letter: &str, page: &str, status: u16, body: String) {
    Mock::given(method("GET"))
        .and(path("/browse.php"))
        .and(query_param("character", letter))
        .and(query_param("page", page))
        .respond_with(ResponseTemplate::new(status).set_body_string(body))
        .mount(server)
        .await;
}

fn http_controller(config: &Config) -> CrawlController<HttpFetcher> {
    let fetcher = HttpFetcher::from_config(&config.user_agent, &config.crawler)
        .expect("Failed to build HTTP fetcher");
    CrawlController::new(config, fetcher).expect("Failed to create controller")
}

fn titles(result: &CrawlResult) -> Vec<String> {
    result
        .entries
        .iter()
        .map(|e| e.title.as_str().to_string())
        .collect()
}

#[tokio::test]
async fn test_letter_stops_at_first_empty_page() {
    let mock_server = MockServer::start().await;

    mount_browse(&mock_server, "A", "1", 200, browse_page(&["Aarhus", "aarping"])).await;
    mount_browse(&mock_server, "A", "2", 200, browse_page(&[])).await;

    // Pages past the empty one must never be requested
    Mock::given(method("GET"))
        .and(path("/browse.php"))
        .and(query_param("page", "3"))
        .respond_with(ResponseTemplate::new(200).set_body_string(browse_page(&["Nope"])))
        .expect(0)
        .mount(&mock_server)
        .await;

    let config = create_test_config(&mock_server.uri(), 'A', 'A', 10);
    let result = http_controller(&config).crawl(false).await;

    assert_eq!(titles(&result), vec!["Aarhus", "aarping"]);
    assert_eq!(result.letters.len(), 1);
    assert_eq!(result.letters[0].pages_scraped, 1);
    assert_eq!(result.letters[0].pages_failed, 0);
    assert_eq!(result.letters[0].entries_added, 2);
    assert!(!result.definitions_requested);
    assert!(result.entries.iter().all(|e| e.definitions.is_empty()));
}

#[tokio::test]
async fn test_failing_letter_exhausts_budget_and_crawl_continues() {
    let mock_server = MockServer::start().await;

    // Every page of A fails
    Mock::given(method("GET"))
        .and(path("/browse.php"))
        .and(query_param("character", "A"))
        .respond_with(ResponseTemplate::new(500))
        .expect(3)
        .mount(&mock_server)
        .await;

    mount_browse(&mock_server, "B", "1", 200, browse_page(&["Bae"])).await;
    mount_browse(&mock_server, "B", "2", 200, browse_page(&[])).await;

    let config = create_test_config(&mock_server.uri(), 'A', 'B', 3);
    let result = http_controller(&config).crawl(false).await;

    assert_eq!(result.letters[0].letter, Letter::new('A').unwrap());
    assert_eq!(result.letters[0].pages_failed, 3);
    assert_eq!(result.letters[0].pages_scraped, 0);
    assert_eq!(result.letters[0].entries_added, 0);

    assert_eq!(result.letters[1].letter, Letter::new('B').unwrap());
    assert_eq!(result.letters[1].pages_failed, 0);
    assert_eq!(titles(&result), vec!["Bae"]);
    assert_eq!(result.total_pages_failed(), 3);
}

#[tokio::test]
async fn test_failed_page_does_not_end_letter() {
    let mock_server = MockServer::start().await;

    mount_browse(&mock_server, "C", "1", 200, browse_page(&["Cap"])).await;
    mount_browse(&mock_server, "C", "2", 503, String::new()).await;
    mount_browse(&mock_server, "C", "3", 200, browse_page(&["Chad", "Cheugy"])).await;
    mount_browse(&mock_server, "C", "4", 200, browse_page(&[])).await;

    let config = create_test_config(&mock_server.uri(), 'C', 'C', 10);
    let result = http_controller(&config).crawl(false).await;

    assert_eq!(titles(&result), vec!["Cap", "Chad", "Cheugy"]);
    assert_eq!(result.letters[0].pages_scraped, 2);
    assert_eq!(result.letters[0].pages_failed, 1);
}

#[tokio::test]
async fn test_malformed_page_counts_as_failure() {
    let mock_server = MockServer::start().await;

    let malformed = [
        "<div id='columnist'>",
        r#"<li><a href="/define.php?term=ok">ok</a></li>"#,
        "<li>broken entry</li>",
        "</div>",
    ]
    .join("\n");

    mount_browse(&mock_server, "D", "1", 200, malformed).await;
    mount_browse(&mock_server, "D", "2", 200, browse_page(&["Dank"])).await;
    mount_browse(&mock_server, "D", "3", 200, browse_page(&[])).await;

    let config = create_test_config(&mock_server.uri(), 'D', 'D', 10);
    let result = http_controller(&config).crawl(false).await;

    // The malformed page contributes nothing, not even its good line
    assert_eq!(titles(&result), vec!["Dank"]);
    assert_eq!(result.letters[0].pages_failed, 1);
    assert_eq!(result.letters[0].pages_scraped, 1);
}

#[tokio::test]
async fn test_page_without_list_ends_letter() {
    let mock_server = MockServer::start().await;

    mount_browse(
        &mock_server,
        "E",
        "1",
        200,
        "<html><body>Nothing here</body></html>".to_string(),
    )
    .await;

    let config = create_test_config(&mock_server.uri(), 'E', 'E', 10);
    let result = http_controller(&config).crawl(false).await;

    assert!(result.entries.is_empty());
    assert_eq!(result.letters[0].pages_scraped, 0);
    assert_eq!(result.letters[0].pages_failed, 0);
}

#[tokio::test]
async fn test_entities_are_decoded() {
    let mock_server = MockServer::start().await;

    mount_browse(
        &mock_server,
        "R",
        "1",
        200,
        browse_page(&["R&amp;B", "&lt;3"]),
    )
    .await;
    mount_browse(&mock_server, "R", "2", 200, browse_page(&[])).await;

    let config = create_test_config(&mock_server.uri(), 'R', 'R', 5);
    let result = http_controller(&config).crawl(false).await;

    assert_eq!(titles(&result), vec!["R&B", "<3"]);
}

#[tokio::test]
async fn test_crawl_with_definitions() {
    let mock_server = MockServer::start().await;

    mount_browse(&mock_server, "Y", "1", 200, browse_page(&["yeet", "yikes"])).await;
    mount_browse(&mock_server, "Y", "2", 200, browse_page(&[])).await;

    Mock::given(method("GET"))
        .and(path("/define.php"))
        .and(query_param("term", "yeet"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string(term_page(&["to throw", "an exclamation &amp; more"])),
        )
        .expect(1)
        .mount(&mock_server)
        .await;

    // Definition lookup failure leaves the entry without definitions
    Mock::given(method("GET"))
        .and(path("/define.php"))
        .and(query_param("term", "yikes"))
        .respond_with(ResponseTemplate::new(500))
        .expect(1)
        .mount(&mock_server)
        .await;

    let config = create_test_config(&mock_server.uri(), 'Y', 'Y', 5);
    let result = http_controller(&config).crawl(true).await;

    assert!(result.definitions_requested);
    assert_eq!(titles(&result), vec!["yeet", "yikes"]);
    assert_eq!(
        result.entries[0].definitions,
        vec![
            Definition::new("to throw"),
            Definition::new("an exclamation & more")
        ]
    );
    assert!(result.entries[1].definitions.is_empty());
    // A definition failure is not a page failure
    assert_eq!(result.letters[0].pages_failed, 0);
    assert_eq!(result.letters[0].pages_scraped, 1);

    let mut output = Vec::new();
    write_entries(&mut output, &result).unwrap();
    assert_eq!(
        String::from_utf8(output).unwrap(),
        "yeet:::to throw:::an exclamation & more\nyikes\n"
    );
}

#[tokio::test]
async fn test_definitions_not_requested_skips_term_pages() {
    let mock_server = MockServer::start().await;

    mount_browse(&mock_server, "Y", "1", 200, browse_page(&["yeet"])).await;
    mount_browse(&mock_server, "Y", "2", 200, browse_page(&[])).await;

    Mock::given(method("GET"))
        .and(path("/define.php"))
        .respond_with(ResponseTemplate::new(200).set_body_string(term_page(&["unused"])))
        .expect(0)
        .mount(&mock_server)
        .await;

    let config = create_test_config(&mock_server.uri(), 'Y', 'Y', 5);
    let result = http_controller(&config).crawl(false).await;

    assert_eq!(titles(&result), vec!["yeet"]);
}

/// In-memory fetcher serving fixed pages keyed by URL
///
/// URLs without a fixture fail with a transport error. Every request is
/// recorded so tests can check what the crawler asked for.
struct FixtureFetcher {
    pages: HashMap<String, Vec<String>>,
    requests: Mutex<Vec<String>>,
}

impl FixtureFetcher {
    fn new() -> Self {
        Self {
            pages: HashMap::new(),
            requests: Mutex::new(Vec::new()),
        }
    }

    fn with_browse_page(mut self, letter: char, page: u32, words: &[&str]) -> Self {
        let url = format!(
            "http://dict.test/browse.php?character={}&page={}",
            letter, page
        );
        let lines = browse_page(words).lines().map(str::to_string).collect();
        self.pages.insert(url, lines);
        self
    }

    fn requests(&self) -> Vec<String> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl PageFetcher for FixtureFetcher {
    async fn fetch_lines(&self, url: &Url) -> Result<Vec<String>, FetchError> {
        self.requests.lock().unwrap().push(url.to_string());
        self.pages
            .get(url.as_str())
            .cloned()
            .ok_or_else(|| FetchError::Transport {
                url: url.to_string(),
                message: "no fixture".to_string(),
            })
    }
}

fn fixtures() -> FixtureFetcher {
    FixtureFetcher::new()
        .with_browse_page('A', 1, &["a1", "a2"])
        .with_browse_page('A', 2, &["a3"])
        .with_browse_page('A', 3, &[])
        .with_browse_page('B', 1, &["b1"])
        .with_browse_page('B', 2, &[])
        .with_browse_page('C', 1, &[])
}

#[tokio::test]
async fn test_results_follow_letter_then_page_order() {
    let config = create_test_config("http://dict.test", 'A', 'C', 50);
    let controller = CrawlController::new(&config, fixtures()).unwrap();

    let result = controller.crawl(false).await;

    assert_eq!(titles(&result), vec!["a1", "a2", "a3", "b1"]);
    let letters: Vec<char> = result.letters.iter().map(|s| s.letter.as_char()).collect();
    assert_eq!(letters, vec!['A', 'B', 'C']);
    assert_eq!(result.total_pages_scraped(), 3);
    assert_eq!(result.total_pages_failed(), 0);
}

#[tokio::test]
async fn test_requests_are_sequential_and_bounded() {
    let config = create_test_config("http://dict.test", 'A', 'C', 50);
    let fetcher = fixtures();
    let controller = CrawlController::new(&config, &fetcher).unwrap();

    controller.crawl(false).await;

    assert_eq!(
        fetcher.requests(),
        vec![
            "http://dict.test/browse.php?character=A&page=1",
            "http://dict.test/browse.php?character=A&page=2",
            "http://dict.test/browse.php?character=A&page=3",
            "http://dict.test/browse.php?character=B&page=1",
            "http://dict.test/browse.php?character=B&page=2",
            "http://dict.test/browse.php?character=C&page=1",
        ]
    );
}

#[tokio::test]
async fn test_every_page_failing_counts_max_pages() {
    // No fixtures at all: every fetch is a transport error
    let config = create_test_config("http://dict.test", 'Q', 'Q', 7);
    let fetcher = FixtureFetcher::new();
    let controller = CrawlController::new(&config, &fetcher).unwrap();

    let result = controller.crawl(false).await;

    assert!(result.entries.is_empty());
    assert_eq!(result.letters[0].pages_failed, 7);
    assert_eq!(result.letters[0].pages_scraped, 0);
    assert_eq!(fetcher.requests().len(), 7);
}

#[tokio::test]
async fn test_crawl_is_repeatable() {
    let config = create_test_config("http://dict.test", 'A', 'C', 50);
    let controller = CrawlController::new(&config, fixtures()).unwrap();

    let first = controller.crawl(false).await;
    let second = controller.crawl(false).await;

    assert_eq!(first.entries, second.entries);
    assert_eq!(titles(&first), titles(&second));
    assert_eq!(first.total_pages_scraped(), second.total_pages_scraped());
}
