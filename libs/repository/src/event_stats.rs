use async_trait::async_trait;
use catalog::{CatalogResult, EventStatsStore};
use chrono::NaiveDate;
use redis::AsyncCommands;
use tracing::debug;

use crate::response::IntoCatalogResult;
use entity::prelude::*;

/// View and share counters kept in redis. Totals live under
/// `event:{id}:{counter}`, daily counts under `event:{id}:{counter}:{date}`.
#[derive(Clone, Debug)]
pub struct EventStatsRepository {
    pub redis: redis::Client,
}

impl EventStatsRepository {
    pub fn new(redis: redis::Client) -> Self {
        Self { redis }
    }
}

fn counter_key(event_id: i64, counter: Counter, date: Option<NaiveDate>) -> String {
    match date {
        Some(date) => {
            format!("event:{}:{}:{}", event_id, counter, date.format("%Y-%m-%d"))
        }
        None => format!("event:{}:{}", event_id, counter),
    }
}

impl EventStatsRepository {
    async fn read_pair(
        &self,
        event_id: i64,
        date: Option<NaiveDate>,
    ) -> CatalogResult<(i64, i64)> {
        let mut con = self
            .redis
            .get_multiplexed_async_connection()
            .await
            .into_catalog("connect redis")?;

        let (views, shares): (Option<i64>, Option<i64>) = redis::pipe()
            .get(counter_key(event_id, Counter::View, date))
            .get(counter_key(event_id, Counter::Share, date))
            .query_async(&mut con)
            .await
            .into_catalog("read event counters")?;

        Ok((views.unwrap_or_default(), shares.unwrap_or_default()))
    }

    async fn incr(&self, key: String) -> CatalogResult<i64> {
        let mut con = self
            .redis
            .get_multiplexed_async_connection()
            .await
            .into_catalog("connect redis")?;

        let count: i64 =
            con.incr(&key, 1).await.into_catalog("increment event counter")?;
        debug!(task = "increment", key = %key, count);

        Ok(count)
    }
}

#[async_trait]
impl EventStatsStore for EventStatsRepository {
    async fn get_stats(&self, event_id: i64) -> CatalogResult<EventStatsEntity> {
        let (views, shares) = self.read_pair(event_id, None).await?;

        Ok(EventStatsEntity {
            event_id,
            views,
            shares,
        })
    }

    async fn get_daily_stats(
        &self,
        event_id: i64,
        date: NaiveDate,
    ) -> CatalogResult<EventDailyStatsEntity> {
        let (views, shares) = self.read_pair(event_id, Some(date)).await?;

        Ok(EventDailyStatsEntity {
            event_id,
            date,
            views,
            shares,
        })
    }

    async fn increment(
        &self,
        event_id: i64,
        counter: Counter,
    ) -> CatalogResult<i64> {
        self.incr(counter_key(event_id, counter, None)).await
    }

    async fn increment_daily(
        &self,
        event_id: i64,
        counter: Counter,
        date: NaiveDate,
    ) -> CatalogResult<i64> {
        self.incr(counter_key(event_id, counter, Some(date))).await
    }
}
