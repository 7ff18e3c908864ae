use std::time::Duration;

use axum::http::StatusCode;
use maud::html;

use super::common::*;
use crate::config::CareersConfig;
use crate::routing::{Location, PageId};

fn escaped(text: &str) -> String {
    html! { (text) }.into_string()
}

#[tokio::test]
async fn every_concrete_route_renders_its_page() {
    let site = build_site(&Recorder::replying(200, "OK"), CareersConfig::default());

    for page in PageId::ALL {
        let Some(path) = page.path() else { continue };
        let rendered = site.render(Location::parse(path)).await;
        assert_eq!(rendered.page, page, "{path}");
        assert_eq!(rendered.status, StatusCode::OK, "{path}");
        assert!(rendered.into_string().contains(&escaped(page.heading())), "{path}");
    }
}

#[tokio::test]
async fn unknown_path_renders_not_found_with_attempted_path() {
    let site = build_site(&Recorder::replying(200, "OK"), CareersConfig::default());

    let rendered = site.render(Location::parse("/products/vornhr-typo")).await;
    assert_eq!(rendered.page, PageId::NotFound);
    assert_eq!(rendered.status, StatusCode::NOT_FOUND);

    let html = rendered.into_string();
    assert!(html.contains("Page Not Found"));
    assert!(html.contains("/products/vornhr-typo"));
}

#[tokio::test]
async fn nested_product_route_is_not_shadowed() {
    let site = build_site(&Recorder::replying(200, "OK"), CareersConfig::default());
    let rendered = site.render(Location::parse("/products/vorqard/")).await;
    assert_eq!(rendered.page, PageId::VorQard);
}

#[tokio::test]
async fn fragment_becomes_anchor_directive() {
    let site = build_site(&Recorder::replying(200, "OK"), CareersConfig::default());

    let html = site.render(Location::parse("/services#custom")).await.into_string();
    assert!(html.contains(r#"data-anchor="custom""#));
    assert!(html.contains(r#"id="custom""#));

    let html = site.render(Location::parse("/services")).await.into_string();
    assert!(!html.contains("data-anchor="));
}

#[tokio::test]
async fn failed_page_load_shows_boundary_then_recovers() {
    let recorder = Recorder::replying(200, "OK");
    let site = build_site_with(
        &recorder,
        Some("pk_test"),
        CareersConfig::default(),
        FlakyPages::default(),
    );

    let first = site.render(Location::parse("/about")).await;
    assert_eq!(first.status, StatusCode::SERVICE_UNAVAILABLE);
    let html = first.into_string();
    assert!(html.contains("data-retry"));
    assert!(html.contains("chunk fetch failed"));

    let second = site.render(Location::parse("/about")).await;
    assert_eq!(second.status, StatusCode::OK);
    assert!(second
        .into_string()
        .contains(&escaped(PageId::About.heading())));
}

#[tokio::test(start_paused = true)]
async fn slow_first_load_serves_placeholder_until_module_arrives() {
    let site = build_site_with(
        &Recorder::replying(200, "OK"),
        Some("pk_test"),
        CareersConfig::default(),
        SlowPages {
            delay: Duration::from_secs(5),
        },
    );

    let first = site.render(Location::parse("/about")).await;
    assert_eq!(first.status, StatusCode::OK);
    let html = first.into_string();
    assert!(html.contains(r#"class="loader""#));
    assert!(html.contains("data-reload-ms"));
    assert!(!html.contains(&escaped(PageId::About.heading())));

    tokio::time::sleep(Duration::from_secs(5)).await;

    let second = site.render(Location::parse("/about")).await;
    assert_eq!(second.status, StatusCode::OK);
    let html = second.into_string();
    assert!(html.contains(&escaped(PageId::About.heading())));
    assert!(!html.contains(r#"class="loader""#));
}
