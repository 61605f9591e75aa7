use actix_web::{get, web, HttpResponse, Responder};
use serde_json::json;

use crate::models::{FormField, PageView};
use crate::slots::Slot;
use crate::stats::StatsService;

#[get("/dashboard/ads/{id}")]
pub async fn ads_detail(path: web::Path<String>) -> impl Responder {
    // id is echoed verbatim; the ad store it will address is not wired up yet
    let id = path.into_inner();
    HttpResponse::Ok().json(PageView {
        title: "Ad Management".to_string(),
        description: format!("Manage advertisement {}", id),
        fields: vec![],
    })
}

#[get("/dashboard/article/new")]
pub async fn article_new() -> impl Responder {
    HttpResponse::Ok().json(PageView {
        title: "Create Article".to_string(),
        description: "Draft a new article for the platform".to_string(),
        fields: vec![
            FormField::new("title", "Title"),
            FormField::new("content", "Content"),
            FormField::new("cover_url", "Cover image"),
        ],
    })
}

#[get("/dashboard/news/new")]
pub async fn news_new() -> impl Responder {
    HttpResponse::Ok().json(PageView {
        title: "Create News".to_string(),
        description: "Publish a news item to the platform".to_string(),
        fields: vec![
            FormField::new("title", "Title"),
            FormField::new("content", "Content"),
            FormField::new("source", "Source"),
        ],
    })
}

/// Overview page composed of two independent slots. Each slot owns its fetch
/// and result; resolution order between them is unspecified.
#[get("/dashboard/overview")]
pub async fn overview(stats: web::Data<StatsService>) -> impl Responder {
    let area = {
        let svc = stats.get_ref().clone();
        Slot::spawn("area-stats", async move { svc.platform_growth_stats().await })
    };
    let bars = {
        let svc = stats.get_ref().clone();
        Slot::spawn("bar-stats", async move { svc.platform_analytics().await })
    };

    let (area, bars) = futures_util::join!(area.resolve(), bars.resolve());

    HttpResponse::Ok().json(json!({
        "title": "Platform Overview",
        "area_stats": area,
        "bar_stats": bars,
    }))
}

#[get("/dashboard/overview/area-stats")]
pub async fn overview_area_stats(stats: web::Data<StatsService>) -> impl Responder {
    HttpResponse::Ok().json(stats.platform_growth_stats().await)
}

#[get("/dashboard/overview/bar-stats")]
pub async fn overview_bar_stats(stats: web::Data<StatsService>) -> impl Responder {
    HttpResponse::Ok().json(stats.platform_analytics().await)
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{test, App};
    use serde_json::Value;
    use std::time::{Duration, Instant};

    use crate::models::{AnalyticsSnapshot, DailyAggregate};
    use crate::stats::{ANALYTICS_DAYS, GROWTH_SAMPLE_COUNT};

    fn instant_stats() -> web::Data<StatsService> {
        web::Data::new(StatsService::instant())
    }

    #[actix_web::test]
    async fn ads_page_echoes_the_requested_id() {
        let app = test::init_service(App::new().service(ads_detail)).await;
        let req = test::TestRequest::get()
            .uri("/dashboard/ads/42")
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;

        assert_eq!(body["title"], "Ad Management");
        assert!(body["description"].as_str().unwrap().contains("42"));
    }

    #[actix_web::test]
    async fn create_pages_render_their_distinct_titles() {
        let app = test::init_service(App::new().service(article_new).service(news_new)).await;

        let req = test::TestRequest::get()
            .uri("/dashboard/article/new")
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["title"], "Create Article");

        let req = test::TestRequest::get()
            .uri("/dashboard/news/new")
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["title"], "Create News");
    }

    #[actix_web::test]
    async fn overview_renders_both_regions() {
        let app = test::init_service(
            App::new()
                .app_data(instant_stats())
                .service(overview),
        )
        .await;
        let req = test::TestRequest::get()
            .uri("/dashboard/overview")
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;

        assert_eq!(body["area_stats"]["status"], "resolved");
        assert_eq!(body["bar_stats"]["status"], "resolved");
        assert_eq!(
            body["area_stats"]["data"]["samples"]
                .as_array()
                .unwrap()
                .len(),
            GROWTH_SAMPLE_COUNT
        );
        assert_eq!(
            body["bar_stats"]["data"].as_array().unwrap().len(),
            ANALYTICS_DAYS.len()
        );
    }

    #[actix_web::test]
    async fn slow_analytics_does_not_delay_the_area_region() {
        // bar-stats is configured far slower than area-stats; with both
        // regions requested concurrently the area sub-route must still
        // answer on its own schedule
        let stats = web::Data::new(StatsService::new(
            Duration::from_millis(10),
            Duration::from_millis(400),
        ));
        let app = test::init_service(
            App::new()
                .app_data(stats)
                .service(overview_area_stats)
                .service(overview_bar_stats),
        )
        .await;

        let start = Instant::now();
        let area = async {
            let req = test::TestRequest::get()
                .uri("/dashboard/overview/area-stats")
                .to_request();
            let snapshot: AnalyticsSnapshot = test::call_and_read_body_json(&app, req).await;
            (snapshot, start.elapsed())
        };
        let bars = async {
            let req = test::TestRequest::get()
                .uri("/dashboard/overview/bar-stats")
                .to_request();
            let aggregates: Vec<DailyAggregate> =
                test::call_and_read_body_json(&app, req).await;
            (aggregates, start.elapsed())
        };
        let ((snapshot, area_elapsed), (aggregates, bars_elapsed)) =
            futures_util::join!(area, bars);

        assert!(area_elapsed < Duration::from_millis(300));
        assert!(bars_elapsed >= Duration::from_millis(400));
        assert_eq!(snapshot.samples.len(), GROWTH_SAMPLE_COUNT);
        assert_eq!(aggregates.len(), ANALYTICS_DAYS.len());
    }
}
