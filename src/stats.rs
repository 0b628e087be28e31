use crate::data::PriceRecord;
use serde::Serialize;
use std::collections::BTreeMap;

/// Summary statistics for one trading pair over the selected range.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PairStats {
    /// Mean of |open - close| over the pair's rows.
    pub avg_abs_diff: f64,
    pub min_low: f64,
    pub max_high: f64,
}

struct Accumulator {
    diff_sum: f64,
    count: u32,
    min_low: f64,
    max_high: f64,
}

/// Group rows by pair and reduce each group to its [`PairStats`].
///
/// The result is keyed in pair order, which fixes the card order and the
/// tie-break in [`pair_with_max_avg_diff`]. Zero input rows produce an
/// empty map; a present key always has at least one row behind it, so no
/// statistic can come out NaN.
pub fn aggregate(rows: &[PriceRecord]) -> BTreeMap<String, PairStats> {
    let mut groups: BTreeMap<String, Accumulator> = BTreeMap::new();

    for row in rows {
        let group = groups.entry(row.pair.clone()).or_insert(Accumulator {
            diff_sum: 0.0,
            count: 0,
            min_low: f64::INFINITY,
            max_high: f64::NEG_INFINITY,
        });

        group.diff_sum += (row.open - row.price).abs();
        group.count += 1;
        group.min_low = group.min_low.min(row.low);
        group.max_high = group.max_high.max(row.high);
    }

    groups
        .into_iter()
        .map(|(pair, group)| {
            (
                pair,
                PairStats {
                    avg_abs_diff: group.diff_sum / group.count as f64,
                    min_low: group.min_low,
                    max_high: group.max_high,
                },
            )
        })
        .collect()
}

/// The pair with the largest average open/close difference. Exact ties go
/// to the lexicographically first pair, so the winner never varies between
/// runs on identical input.
pub fn pair_with_max_avg_diff(stats: &BTreeMap<String, PairStats>) -> Option<&str> {
    let mut best: Option<(&str, f64)> = None;

    for (pair, pair_stats) in stats {
        let better = match best {
            Some((_, top)) => pair_stats.avg_abs_diff > top,
            None => true,
        };
        if better {
            best = Some((pair.as_str(), pair_stats.avg_abs_diff));
        }
    }

    best.map(|(pair, _)| pair)
}
