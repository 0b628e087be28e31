use crate::data::PriceRecord;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

pub const PAGE_SIZE: usize = 10;

/// The eight display columns of the detail table, in column order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DetailRow {
    pub date: NaiveDate,
    pub pair: String,
    pub price: f64,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub volume: f64,
    pub change_percent: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortKey {
    Date,
    Pair,
    Price,
    Open,
    High,
    Low,
    Volume,
    ChangePercent,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortOrder {
    Ascending,
    Descending,
}

pub fn to_rows(records: &[PriceRecord]) -> Vec<DetailRow> {
    records
        .iter()
        .map(|record| DetailRow {
            date: record.date,
            pair: record.pair.clone(),
            price: record.price,
            open: record.open,
            high: record.high,
            low: record.low,
            volume: record.volume,
            change_percent: record.change_percent,
        })
        .collect()
}

/// Stable sort on any column. Floats order by `total_cmp` so rows never
/// drop out of the ordering.
pub fn sort_rows(rows: &mut [DetailRow], key: SortKey, order: SortOrder) {
    rows.sort_by(|a, b| {
        let ordering = compare(a, b, key);
        match order {
            SortOrder::Ascending => ordering,
            SortOrder::Descending => ordering.reverse(),
        }
    });
}

fn compare(a: &DetailRow, b: &DetailRow, key: SortKey) -> Ordering {
    match key {
        SortKey::Date => a.date.cmp(&b.date),
        SortKey::Pair => a.pair.cmp(&b.pair),
        SortKey::Price => a.price.total_cmp(&b.price),
        SortKey::Open => a.open.total_cmp(&b.open),
        SortKey::High => a.high.total_cmp(&b.high),
        SortKey::Low => a.low.total_cmp(&b.low),
        SortKey::Volume => a.volume.total_cmp(&b.volume),
        SortKey::ChangePercent => a.change_percent.total_cmp(&b.change_percent),
    }
}

pub fn page_count(total_rows: usize) -> usize {
    total_rows.div_ceil(PAGE_SIZE)
}

/// The rows of one fixed-size page; out-of-range indexes are empty.
pub fn page(rows: &[DetailRow], index: usize) -> &[DetailRow] {
    let Some(start) = index.checked_mul(PAGE_SIZE) else {
        return &[];
    };
    if start >= rows.len() {
        return &[];
    }
    let end = (start + PAGE_SIZE).min(rows.len());
    &rows[start..end]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(date: &str, pair: &str, price: f64) -> DetailRow {
        DetailRow {
            date: NaiveDate::parse_from_str(date, "%Y-%m-%d").expect("Invalid date"),
            pair: pair.to_string(),
            price,
            open: price - 1.0,
            high: price + 2.0,
            low: price - 2.0,
            volume: 1000.0,
            change_percent: 0.5,
        }
    }

    fn numbered_rows(count: usize) -> Vec<DetailRow> {
        (0..count)
            .map(|i| row("2020-01-01", "BTC/USD", i as f64))
            .collect()
    }

    #[test]
    fn to_rows_preserves_order_and_columns() {
        let records = vec![
            PriceRecord {
                date: NaiveDate::parse_from_str("2020-01-01", "%Y-%m-%d").unwrap(),
                pair: "BTC/USD".to_string(),
                price: 100.0,
                open: 90.0,
                high: 110.0,
                low: 80.0,
                volume: 1234.0,
                change_percent: 11.1,
            },
            PriceRecord {
                date: NaiveDate::parse_from_str("2020-01-02", "%Y-%m-%d").unwrap(),
                pair: "BTC/USD".to_string(),
                price: 105.0,
                open: 100.0,
                high: 108.0,
                low: 95.0,
                volume: 2345.0,
                change_percent: 5.0,
            },
        ];

        let rows = to_rows(&records);

        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].volume, 1234.0);
        assert_eq!(rows[0].change_percent, 11.1);
        assert_eq!(rows[1].date, records[1].date);
    }

    #[test]
    fn sorts_by_price_descending() {
        let mut rows = vec![
            row("2020-01-01", "BTC/USD", 100.0),
            row("2020-01-02", "BTC/USD", 300.0),
            row("2020-01-03", "BTC/USD", 200.0),
        ];

        sort_rows(&mut rows, SortKey::Price, SortOrder::Descending);

        let prices: Vec<f64> = rows.iter().map(|r| r.price).collect();
        assert_eq!(prices, vec![300.0, 200.0, 100.0]);
    }

    #[test]
    fn sorts_by_date_ascending() {
        let mut rows = vec![
            row("2020-01-03", "BTC/USD", 1.0),
            row("2020-01-01", "BTC/USD", 2.0),
            row("2020-01-02", "BTC/USD", 3.0),
        ];

        sort_rows(&mut rows, SortKey::Date, SortOrder::Ascending);

        assert!(rows.windows(2).all(|w| w[0].date <= w[1].date));
    }

    #[test]
    fn pages_are_fixed_size_with_a_short_tail() {
        let rows = numbered_rows(23);

        assert_eq!(page_count(rows.len()), 3);
        assert_eq!(page(&rows, 0).len(), 10);
        assert_eq!(page(&rows, 1).len(), 10);
        assert_eq!(page(&rows, 2).len(), 3);
        assert!(page(&rows, 3).is_empty());

        assert_eq!(page(&rows, 1)[0].price, 10.0);
    }

    #[test]
    fn empty_table_has_no_pages() {
        let rows: Vec<DetailRow> = Vec::new();

        assert_eq!(page_count(0), 0);
        assert!(page(&rows, 0).is_empty());
    }
}
