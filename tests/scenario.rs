// tests/scenario.rs
//
// Select Posts → 100 records → page to the end → download.

use std::fs;
use std::sync::Arc;
use std::thread;
use std::time::{Duration, Instant};

use content_viewer::config::{options::AppOptions, state::AppState};
use content_viewer::fetch::ViewKind;
use content_viewer::gui::{actions, app::App};
use content_viewer::net::{Fetcher, HttpFetcher};
use content_viewer::source::Source;
use eframe::egui;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn hundred_posts() -> String {
    let items: Vec<String> = (1..=100)
        .map(|i| format!(r#"{{"userId":{},"id":{i},"title":"title {i}","body":"body {i}"}}"#, (i - 1) / 10 + 1))
        .collect();
    format!("[{}]", items.join(","))
}

#[tokio::test]
async fn browse_posts_and_download() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/posts"))
        .respond_with(ResponseTemplate::new(200).set_body_string(hundred_posts()))
        .expect(1)
        .mount(&server)
        .await;

    let base = server.uri();
    let tmp = tempfile::tempdir().unwrap();
    let out_dir = tmp.path().join("downloads");
    let config_path = tmp.path().join("config.json");

    let (csv_path, last_page_ids) = tokio::task::spawn_blocking(move || {
        let ctx = egui::Context::default();
        let fetcher: Arc<dyn Fetcher> = Arc::new(HttpFetcher::new().unwrap().with_base_url(base));
        let mut app = App::new(AppState::new(AppOptions::default()), fetcher, config_path);
        app.state.gui.out_dir_text = out_dir.to_string_lossy().into_owned();

        actions::fetch(&mut app, Source::Posts, &ctx);
        assert_eq!(app.fetch.view(), ViewKind::Loading);
        let deadline = Instant::now() + Duration::from_secs(10);
        while app.fetch.in_flight() > 0 {
            assert!(Instant::now() < deadline, "fetch never completed");
            app.sync_fetches();
            thread::sleep(Duration::from_millis(5));
        }

        assert_eq!(app.fetch.view(), ViewKind::Table);
        let pager = &mut app.state.gui.pager;
        assert_eq!(pager.total_pages(), 10);

        for _ in 0..9 {
            assert!(pager.next());
        }
        assert_eq!(pager.current(), 10);
        assert!(!pager.has_next());
        assert!(pager.has_prev());

        let ids: Vec<u64> = pager.visible(app.fetch.records()).iter().map(|r| r.id).collect();

        actions::export(&mut app);
        assert!(app.status.starts_with("Saved "), "status: {}", app.status);
        (out_dir.join("Posts.csv"), ids)
    })
    .await
    .unwrap();

    assert_eq!(last_page_ids, (91..=100).collect::<Vec<_>>());

    assert_eq!(csv_path.file_name().unwrap(), "Posts.csv");
    let text = fs::read_to_string(&csv_path).unwrap();
    let lines: Vec<&str> = text.split('\n').collect();
    assert_eq!(lines.len(), 101);
    assert_eq!(lines[0], "ID,Title");
    assert_eq!(lines[1], "1,title 1");
    assert_eq!(lines[100], "100,title 100");
    for (i, line) in lines[1..].iter().enumerate() {
        assert!(line.starts_with(&format!("{},", i + 1)));
    }
}
