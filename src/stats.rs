use std::env;
use std::time::Duration;

use chrono::{Duration as TimeStep, Utc};
use rand::Rng;
use tracing::info;

use crate::models::{AnalyticsSnapshot, DailyAggregate, GrowthSample};

/// Day labels the analytics bars are keyed by, in render order.
pub const ANALYTICS_DAYS: [&str; 7] = ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"];

/// Number of monthly samples in a growth snapshot.
pub const GROWTH_SAMPLE_COUNT: usize = 12;

const DEFAULT_GROWTH_DELAY_MS: u64 = 1000;
const DEFAULT_ANALYTICS_DELAY_MS: u64 = 3000;

/// Suspends the caller for at least `duration`. Timer suspension only, no
/// other side effects.
pub async fn delay(duration: Duration) {
    tokio::time::sleep(duration).await;
}

/// Mock statistics backend. Resolves after an artificial delay with
/// well-formed pseudo-random payloads; this is the seam where a real
/// aggregation pipeline would attach later. Never fails.
#[derive(Clone)]
pub struct StatsService {
    growth_delay: Duration,
    analytics_delay: Duration,
}

impl StatsService {
    pub fn new(growth_delay: Duration, analytics_delay: Duration) -> Self {
        Self {
            growth_delay,
            analytics_delay,
        }
    }

    /// Delays come from STATS_GROWTH_DELAY_MS / STATS_ANALYTICS_DELAY_MS when
    /// set, otherwise the defaults that approximate backend latency.
    pub fn from_env() -> Self {
        Self::new(
            Duration::from_millis(env_delay_ms(
                "STATS_GROWTH_DELAY_MS",
                DEFAULT_GROWTH_DELAY_MS,
            )),
            Duration::from_millis(env_delay_ms(
                "STATS_ANALYTICS_DELAY_MS",
                DEFAULT_ANALYTICS_DELAY_MS,
            )),
        )
    }

    /// Zero-delay service for tests.
    pub fn instant() -> Self {
        Self::new(Duration::ZERO, Duration::ZERO)
    }

    /// Monthly platform growth over the past year: strictly increasing
    /// timestamps, cumulative non-decreasing values.
    pub async fn platform_growth_stats(&self) -> AnalyticsSnapshot {
        delay(self.growth_delay).await;

        let mut rng = rand::thread_rng();
        let now = Utc::now();
        let mut value: i64 = rng.gen_range(200..400);
        let mut samples = Vec::with_capacity(GROWTH_SAMPLE_COUNT);

        for months_ago in (0..GROWTH_SAMPLE_COUNT).rev() {
            value += rng.gen_range(10..120);
            samples.push(GrowthSample {
                timestamp: now - TimeStep::days(30 * months_ago as i64),
                value,
            });
        }

        info!("serving platform growth snapshot ({} samples)", samples.len());
        AnalyticsSnapshot { samples }
    }

    /// Daily content activity for the current week, one aggregate per day.
    pub async fn platform_analytics(&self) -> Vec<DailyAggregate> {
        delay(self.analytics_delay).await;

        let mut rng = rand::thread_rng();
        let aggregates: Vec<DailyAggregate> = ANALYTICS_DAYS
            .iter()
            .map(|day| DailyAggregate {
                day: day.to_string(),
                articles: rng.gen_range(0..40),
                news: rng.gen_range(0..25),
                ads: rng.gen_range(0..15),
            })
            .collect();

        info!("serving platform analytics ({} days)", aggregates.len());
        aggregates
    }
}

fn env_delay_ms(key: &str, default: u64) -> u64 {
    env::var(key)
        .ok()
        .and_then(|raw| raw.parse().ok())
        .unwrap_or(default)
}
