//! Integration tests for the crawler
//!
//! These tests use wiremock to serve a miniature catalog site and run the
//! full line → model → spec traversal against it.

use motospec::config::{
    default_line_panels, Config, ManufacturerConfig, OutputConfig, PacingConfig, ScrapingConfig,
};
use motospec::crawler::{crawl, discover};
use motospec::output::{self, OutputPaths};
use motospec::ScrapeError;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Creates a test configuration pointing at the mock server, with no delays
fn create_test_config(base_url: &str, output_dir: &str) -> Config {
    Config {
        scraping: ScrapingConfig {
            base_url: base_url.to_string(),
            catalog_path: "/motorcycles".to_string(),
            user_agent: "TestCrawler/1.0".to_string(),
            request_delay_seconds: 0.0,
            max_retries: 2,
            timeout_seconds: 5,
        },
        pacing: PacingConfig {
            variant_delay_seconds: 0.0,
            line_delay_seconds: 0.0,
        },
        output: OutputConfig {
            output_directory: output_dir.to_string(),
        },
        manufacturer: ManufacturerConfig {
            name: "Kawasaki".to_string(),
            line_panels: default_line_panels(),
        },
    }
}

fn catalog_page(lines: &[&str]) -> String {
    let entries: String = lines
        .iter()
        .map(|l| {
            format!(
                r##"<li class="list-inline-item" data-item="subcat"><a class="nav-link" href="#">{}</a></li>"##,
                l
            )
        })
        .collect();
    format!(
        r#"<html><body><div data-nav-sub-cat-id="1"><ul>{}</ul></div></body></html>"#,
        entries
    )
}

fn line_page(panel_id: &str, products: &[(&str, &str)]) -> String {
    let containers: String = products
        .iter()
        .map(|(name, href)| {
            format!(
                r#"<div class="productRepeat"><a href="{}" data-content="['Navigation Motorcycle', '{}']">{}</a></div>"#,
                href, name, name
            )
        })
        .collect();
    format!(
        r#"<html><body><div id="{}">{}</div></body></html>"#,
        panel_id, containers
    )
}

fn model_page(spec_hrefs: &[&str]) -> String {
    let links: String = spec_hrefs
        .iter()
        .map(|h| {
            format!(
                r#"<a class="blackBtn" aria-label="VIEW SPECS & DETAILS" href="{}">Specs</a>"#,
                h
            )
        })
        .collect();
    format!("<html><body>{}</body></html>", links)
}

const NINJA_400_SPECS: &str = r#"<html><body>
    <div class="collapse specAccordion" data-accordion="Engine">
        <table class="specTable">
            <tr><th class="first">Displacement</th><td>399cc</td></tr>
            <tr><th class="first">Bore x Stroke</th><td>70.0 x 51.8mm</td></tr>
        </table>
    </div>
    <div class="collapse specAccordion" data-accordion="Dimensions">
        <table class="specTable">
            <tr><th class="first">Curb Weight</th><td>363.8 lb</td></tr>
        </table>
    </div>
</body></html>"#;

async fn mount_page(server: &MockServer, route: &str, body: String) {
    Mock::given(method("GET"))
        .and(path(route))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string(body)
                .insert_header("content-type", "text/html"),
        )
        .mount(server)
        .await;
}

/// Ninja has one model with one spec page; Z has an empty panel
async fn mount_ninja_and_z(server: &MockServer) {
    mount_page(server, "/motorcycles", catalog_page(&["Ninja®", "Z"])).await;
    mount_line_pages(server).await;
}

async fn mount_line_pages(server: &MockServer) {
    mount_page(
        server,
        "/motorcycles/Ninja",
        line_page("nav-tab-content-1", &[("Ninja 400", "/ninja-400")]),
    )
    .await;
    mount_page(server, "/motorcycles/Z", line_page("nav-tab-content-16", &[])).await;
    mount_page(
        server,
        "/ninja-400",
        model_page(&["/motorcycles/ninja/sport/ninja-400/2024"]),
    )
    .await;
    mount_page(
        server,
        "/motorcycles/ninja/sport/ninja-400/2024",
        NINJA_400_SPECS.to_string(),
    )
    .await;
}

#[tokio::test]
async fn test_full_crawl_ninja_and_z() {
    let mock_server = MockServer::start().await;
    mount_ninja_and_z(&mock_server).await;

    let config = create_test_config(&mock_server.uri(), "unused");
    let (catalog, result) = crawl(&config).await.expect("Crawl failed");

    // Z had no models and is left out of the catalog
    assert_eq!(catalog.lines().len(), 1);
    let ninja = &catalog.lines()[0];
    assert_eq!(ninja.name, "Ninja");
    assert_eq!(ninja.models.len(), 1);

    let variant = &ninja.models[0];
    assert_eq!(variant.name, "Ninja 400 2024");
    assert_eq!(variant.base_model, "Ninja 400");
    assert_eq!(variant.year, "2024");
    assert_eq!(variant.edition, "base");
    assert_eq!(variant.full_path, "/motorcycles/ninja/sport/ninja-400/2024");

    assert_eq!(result.total, 1);
    assert_eq!(result.successes, 1);
    assert_eq!(result.failures, 0);
    assert_eq!(result.successes + result.failures, result.total);

    let record = &result.records[0];
    assert_eq!(record.get("make"), Some("Kawasaki"));
    assert_eq!(record.get("line"), Some("ninja"));
    assert_eq!(record.get("style"), Some("sport"));
    assert_eq!(record.get("model"), Some("ninja-400"));
    assert_eq!(record.get("year"), Some("2024"));
    assert_eq!(record.get("edition"), Some("base"));
    assert_eq!(record.get("engine_displacement"), Some("399cc"));
    assert_eq!(record.get("engine_bore_x_stroke"), Some("70.0 x 51.8mm"));
    assert_eq!(record.get("dimensions_curb_weight"), Some("363.8 lb"));
}

#[tokio::test]
async fn test_repeated_runs_are_identical() {
    let mock_server = MockServer::start().await;
    mount_ninja_and_z(&mock_server).await;

    let config = create_test_config(&mock_server.uri(), "unused");
    let (first_catalog, first) = crawl(&config).await.expect("First crawl failed");
    let (second_catalog, second) = crawl(&config).await.expect("Second crawl failed");

    assert_eq!(first_catalog, second_catalog);
    assert_eq!(first.records, second.records);
    assert_eq!(first.total, second.total);
}

#[tokio::test]
async fn test_no_lines_is_fatal() {
    let mock_server = MockServer::start().await;
    mount_page(
        &mock_server,
        "/motorcycles",
        "<html><body><p>Maintenance</p></body></html>".to_string(),
    )
    .await;

    let config = create_test_config(&mock_server.uri(), "unused");
    let result = crawl(&config).await;

    assert!(matches!(result, Err(ScrapeError::NoLinesFound { .. })));
}

#[tokio::test]
async fn test_unreachable_catalog_is_fatal() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/motorcycles"))
        .respond_with(ResponseTemplate::new(503))
        .expect(2)
        .mount(&mock_server)
        .await;

    let config = create_test_config(&mock_server.uri(), "unused");
    let result = crawl(&config).await;

    assert!(matches!(result, Err(ScrapeError::NoLinesFound { .. })));
}

#[tokio::test]
async fn test_unmapped_line_makes_no_request() {
    let mock_server = MockServer::start().await;
    mount_page(&mock_server, "/motorcycles", catalog_page(&["Concours", "Ninja"])).await;
    mount_line_pages(&mock_server).await;

    Mock::given(method("GET"))
        .and(path("/motorcycles/Concours"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&mock_server)
        .await;

    let config = create_test_config(&mock_server.uri(), "unused");
    let (catalog, result) = crawl(&config).await.expect("Crawl failed");

    assert_eq!(catalog.lines().len(), 1);
    assert_eq!(catalog.lines()[0].name, "Ninja");
    assert_eq!(result.successes, 1);
}

#[tokio::test]
async fn test_failing_spec_page_is_counted() {
    let mock_server = MockServer::start().await;
    mount_page(&mock_server, "/motorcycles", catalog_page(&["KLX"])).await;
    mount_page(
        &mock_server,
        "/motorcycles/KLX",
        line_page(
            "nav-tab-content-22",
            &[("KLX300", "/klx300"), ("KLX230", "/klx230")],
        ),
    )
    .await;
    mount_page(
        &mock_server,
        "/klx300",
        model_page(&["/motorcycles/klx/dual-purpose/klx300/2025"]),
    )
    .await;
    mount_page(
        &mock_server,
        "/klx230",
        model_page(&["/motorcycles/klx/dual-purpose/klx230/2025-s"]),
    )
    .await;
    mount_page(
        &mock_server,
        "/motorcycles/klx/dual-purpose/klx300/2025",
        NINJA_400_SPECS.to_string(),
    )
    .await;

    // Every attempt fails for the second variant
    Mock::given(method("GET"))
        .and(path("/motorcycles/klx/dual-purpose/klx230/2025-s"))
        .respond_with(ResponseTemplate::new(500))
        .expect(2)
        .mount(&mock_server)
        .await;

    let config = create_test_config(&mock_server.uri(), "unused");
    let (catalog, result) = crawl(&config).await.expect("Crawl failed");

    assert_eq!(catalog.total_variants(), 2);
    assert_eq!(catalog.lines()[0].models[1].edition, "s");
    assert_eq!(result.total, 2);
    assert_eq!(result.successes, 1);
    assert_eq!(result.failures, 1);
    assert_eq!(result.records.len(), 1);
    assert_eq!(result.records[0].get("model"), Some("klx300"));
}

#[tokio::test]
async fn test_duplicate_spec_links_are_collapsed() {
    let mock_server = MockServer::start().await;
    mount_page(&mock_server, "/motorcycles", catalog_page(&["Versys"])).await;
    mount_page(
        &mock_server,
        "/motorcycles/Versys",
        line_page(
            "nav-tab-content-4",
            &[
                ("Versys 650", "/versys-650"),
                ("Versys 650 LT", "/versys-650-lt"),
                ("Versys 650", "/versys-650"),
            ],
        ),
    )
    .await;

    Mock::given(method("GET"))
        .and(path("/versys-650"))
        .respond_with(ResponseTemplate::new(200).set_body_string(model_page(&[
            "/motorcycles/versys/touring/versys-650/2025",
            "/motorcycles/versys/touring/versys-650/2025",
        ])))
        .expect(1)
        .mount(&mock_server)
        .await;
    mount_page(
        &mock_server,
        "/versys-650-lt",
        model_page(&[
            "/motorcycles/versys/touring/versys-650/2025",
            "/motorcycles/versys/touring/versys-650/2025-lt",
        ]),
    )
    .await;

    let config = create_test_config(&mock_server.uri(), "unused");
    let catalog = discover(&config).await.expect("Discovery failed");

    let paths: Vec<&str> = catalog
        .lines()[0]
        .models
        .iter()
        .map(|m| m.full_path.as_str())
        .collect();
    assert_eq!(
        paths,
        vec![
            "/motorcycles/versys/touring/versys-650/2025",
            "/motorcycles/versys/touring/versys-650/2025-lt"
        ]
    );
    assert_eq!(catalog.lines()[0].models[0].base_model, "Versys 650");
    assert_eq!(catalog.lines()[0].models[1].base_model, "Versys 650 LT");
}

#[tokio::test]
async fn test_crawl_results_written_to_disk() {
    let mock_server = MockServer::start().await;
    mount_ninja_and_z(&mock_server).await;

    let out_dir = tempfile::tempdir().unwrap();
    let config = create_test_config(
        &mock_server.uri(),
        out_dir.path().to_str().unwrap(),
    );

    let (catalog, result) = crawl(&config).await.expect("Crawl failed");
    let paths = OutputPaths::new(out_dir.path(), &config.manufacturer.name);
    let summary = output::write_run(&paths, "Kawasaki", "abc123", &catalog, &result)
        .expect("Failed to write results");

    assert_eq!(summary.success_rate(), 100.0);

    let csv = std::fs::read_to_string(&paths.specs_csv).unwrap();
    let mut rows = csv.lines();
    assert_eq!(
        rows.next(),
        Some("make,line,style,model,year,edition,dimensions_curb_weight,engine_bore_x_stroke,engine_displacement")
    );
    assert_eq!(
        rows.next(),
        Some("Kawasaki,ninja,sport,ninja-400,2024,base,363.8 lb,70.0 x 51.8mm,399cc")
    );

    let catalog_json: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&paths.catalog_json).unwrap()).unwrap();
    assert_eq!(catalog_json["Ninja"][0]["base_model"], "Ninja 400");
    assert!(catalog_json.get("Z").is_none());

    let markdown = std::fs::read_to_string(&paths.summary_md).unwrap();
    assert!(markdown.contains("abc123"));
}

#[tokio::test]
async fn test_pause_follows_every_product_container() {
    let mock_server = MockServer::start().await;
    mount_page(&mock_server, "/motorcycles", catalog_page(&["Ninja"])).await;
    mount_page(
        &mock_server,
        "/motorcycles/Ninja",
        line_page(
            "nav-tab-content-1",
            &[("Ninja 400", "/ninja-400"), ("Ninja 650", "/ninja-650")],
        ),
    )
    .await;
    mount_page(
        &mock_server,
        "/ninja-400",
        model_page(&["/motorcycles/ninja/sport/ninja-400/2024"]),
    )
    .await;
    mount_page(
        &mock_server,
        "/ninja-650",
        model_page(&["/motorcycles/ninja/sport/ninja-650/2024"]),
    )
    .await;

    let mut config = create_test_config(&mock_server.uri(), "unused");
    config.scraping.request_delay_seconds = 0.1;

    let started = std::time::Instant::now();
    let catalog = discover(&config).await.expect("Discovery failed");

    assert_eq!(catalog.lines()[0].models.len(), 2);
    // Four fetches and two container pauses, 0.1s each
    assert!(started.elapsed() >= std::time::Duration::from_millis(600));
}
