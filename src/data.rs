use crate::error::Result;
use async_trait::async_trait;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::PgPool;

/// One row of the read-only `crypto_data` table: a single trading pair on a
/// single calendar day.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct PriceRecord {
    pub date: NaiveDate,
    pub pair: String,
    pub price: f64,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub volume: f64,
    pub change_percent: f64,
}

/// Inclusive date range, optionally narrowed to one pair. Built fresh from
/// UI state on every interaction and never stored.
#[derive(Debug, Clone, PartialEq)]
pub struct QueryWindow {
    pub start: NaiveDate,
    pub end: NaiveDate,
    pub pair: Option<String>,
}

impl QueryWindow {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Self {
        QueryWindow {
            start,
            end,
            pair: None,
        }
    }

    pub fn for_pair(mut self, pair: &str) -> Self {
        self.pair = Some(pair.to_string());
        self
    }

    /// Both bounds are inclusive; an inverted window contains nothing,
    /// matching SQL BETWEEN.
    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.start && date <= self.end
    }
}

/// Seam between the interaction handlers and the price store.
#[async_trait]
pub trait PriceSource: Send + Sync {
    async fn fetch(&self, window: &QueryWindow) -> Result<Vec<PriceRecord>>;
}

const SELECT_RANGE: &str = "SELECT date, pair, price, open, high, low, volume, change_percent \
     FROM crypto_data WHERE date BETWEEN $1 AND $2 ORDER BY date, pair";

const SELECT_RANGE_FOR_PAIR: &str =
    "SELECT date, pair, price, open, high, low, volume, change_percent \
     FROM crypto_data WHERE date BETWEEN $1 AND $2 AND pair = $3 ORDER BY date";

/// Postgres-backed source. All user-supplied values go through `bind`,
/// never into the query text.
pub struct PgPriceSource {
    pool: PgPool,
}

impl PgPriceSource {
    pub fn new(pool: PgPool) -> Self {
        PgPriceSource { pool }
    }
}

#[async_trait]
impl PriceSource for PgPriceSource {
    async fn fetch(&self, window: &QueryWindow) -> Result<Vec<PriceRecord>> {
        let rows = match &window.pair {
            Some(pair) => {
                sqlx::query_as::<_, PriceRecord>(SELECT_RANGE_FOR_PAIR)
                    .bind(window.start)
                    .bind(window.end)
                    .bind(pair)
                    .fetch_all(&self.pool)
                    .await?
            }
            None => {
                sqlx::query_as::<_, PriceRecord>(SELECT_RANGE)
                    .bind(window.start)
                    .bind(window.end)
                    .fetch_all(&self.pool)
                    .await?
            }
        };

        Ok(rows)
    }
}
