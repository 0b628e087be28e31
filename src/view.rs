use crate::controller::ModalEvent;
use crate::data::PriceRecord;
use crate::stats::{self, PairStats};
use chrono::NaiveDate;
use serde::Serialize;
use std::collections::BTreeMap;

pub const NO_DATA_MESSAGE: &str = "No data available for the selected date range.";
pub const CHART_TITLE: &str = "Price Line Chart for each Pair";

/// One summary card. `action` is the exact payload the page posts back when
/// the card is clicked, so the selected pair travels as data and is never
/// reconstructed from an identifier string.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Card {
    pub pair: String,
    pub avg_abs_diff: f64,
    pub min_low: f64,
    pub max_high: f64,
    pub action: ModalEvent,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Summary {
    NoData {
        message: String,
    },
    Cards {
        cards: Vec<Card>,
        max_diff_pair: String,
    },
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartPoint {
    pub date: NaiveDate,
    pub price: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartSeries {
    pub pair: String,
    pub points: Vec<ChartPoint>,
}

/// `Empty` is the explicit no-data sentinel; the page must never receive a
/// chart with zero series pretending to be valid.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ChartSpec {
    Empty,
    Lines {
        title: String,
        series: Vec<ChartSeries>,
    },
}

/// One card per pair, in pair order, plus the pair with the largest average
/// open/close difference.
pub fn build_cards(stats: &BTreeMap<String, PairStats>) -> Summary {
    let max_diff_pair = match stats::pair_with_max_avg_diff(stats) {
        Some(pair) => pair.to_string(),
        None => {
            return Summary::NoData {
                message: NO_DATA_MESSAGE.to_string(),
            }
        }
    };

    let cards = stats
        .iter()
        .map(|(pair, pair_stats)| Card {
            pair: pair.clone(),
            avg_abs_diff: pair_stats.avg_abs_diff,
            min_low: pair_stats.min_low,
            max_high: pair_stats.max_high,
            action: ModalEvent::CardSelected { pair: pair.clone() },
        })
        .collect();

    Summary::Cards {
        cards,
        max_diff_pair,
    }
}

/// One line series per pair, points sorted by date.
pub fn build_chart(rows: &[PriceRecord]) -> ChartSpec {
    if rows.is_empty() {
        return ChartSpec::Empty;
    }

    let mut by_pair: BTreeMap<&str, Vec<ChartPoint>> = BTreeMap::new();
    for row in rows {
        by_pair.entry(&row.pair).or_default().push(ChartPoint {
            date: row.date,
            price: row.price,
        });
    }

    let series = by_pair
        .into_iter()
        .map(|(pair, mut points)| {
            points.sort_by_key(|point| point.date);
            ChartSeries {
                pair: pair.to_string(),
                points,
            }
        })
        .collect();

    ChartSpec::Lines {
        title: CHART_TITLE.to_string(),
        series,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stats::aggregate;

    fn record(date: &str, pair: &str, price: f64, open: f64, high: f64, low: f64) -> PriceRecord {
        PriceRecord {
            date: NaiveDate::parse_from_str(date, "%Y-%m-%d").expect("Invalid date"),
            pair: pair.to_string(),
            price,
            open,
            high,
            low,
            volume: 1000.0,
            change_percent: 0.0,
        }
    }

    #[test]
    fn empty_stats_become_the_no_data_state() {
        let summary = build_cards(&BTreeMap::new());

        assert_eq!(
            summary,
            Summary::NoData {
                message: NO_DATA_MESSAGE.to_string()
            }
        );
        assert_eq!(build_chart(&[]), ChartSpec::Empty);
    }

    #[test]
    fn one_card_per_pair_with_an_injective_action() {
        let rows = vec![
            record("2020-01-01", "ETH/USD", 10.0, 12.0, 13.0, 9.0),
            record("2020-01-01", "BTC/USD", 100.0, 90.0, 110.0, 80.0),
        ];

        let summary = build_cards(&aggregate(&rows));

        let Summary::Cards {
            cards,
            max_diff_pair,
        } = summary
        else {
            panic!("Expected cards");
        };

        assert_eq!(cards.len(), 2);
        assert_eq!(cards[0].pair, "BTC/USD");
        assert_eq!(cards[1].pair, "ETH/USD");
        assert_eq!(max_diff_pair, "BTC/USD");

        for card in &cards {
            assert_eq!(
                card.action,
                ModalEvent::CardSelected {
                    pair: card.pair.clone()
                }
            );
        }
        assert_ne!(cards[0].action, cards[1].action);
    }

    #[test]
    fn chart_has_one_series_per_pair_sorted_by_date() {
        let rows = vec![
            record("2020-01-02", "BTC/USD", 105.0, 100.0, 108.0, 95.0),
            record("2020-01-01", "ETH/USD", 10.0, 12.0, 13.0, 9.0),
            record("2020-01-01", "BTC/USD", 100.0, 90.0, 110.0, 80.0),
        ];

        let ChartSpec::Lines { title, series } = build_chart(&rows) else {
            panic!("Expected a line chart");
        };

        assert_eq!(title, CHART_TITLE);
        assert_eq!(series.len(), 2);
        assert_eq!(series[0].pair, "BTC/USD");
        assert_eq!(series[0].points.len(), 2);
        assert!(series[0].points[0].date < series[0].points[1].date);
        assert_eq!(series[0].points[0].price, 100.0);
        assert_eq!(series[1].pair, "ETH/USD");
    }
}
