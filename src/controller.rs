use crate::data::{PriceSource, QueryWindow};
use crate::error::Result;
use crate::stats;
use crate::table::{self, DetailRow, SortKey, SortOrder};
use crate::view::{self, ChartSpec, Summary};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Structured click payload from the page. The selected pair is carried
/// directly in the event, so resolving it is a field access rather than
/// parsing an identifier string.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ModalEvent {
    CardSelected { pair: String },
    Close,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RangeUpdate {
    pub summary: Summary,
    pub chart: ChartSpec,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ModalUpdate {
    pub modal_open: bool,
    pub rows: Vec<DetailRow>,
}

/// Date-range change: refetch the full range, aggregate, rebuild cards and
/// chart. Modal state is untouched by this trigger.
pub async fn on_range_change(
    source: &dyn PriceSource,
    start: NaiveDate,
    end: NaiveDate,
) -> Result<RangeUpdate> {
    let rows = source.fetch(&QueryWindow::new(start, end)).await?;
    tracing::info!("Fetched {} rows for {} to {}", rows.len(), start, end);

    let stats = stats::aggregate(&rows);

    Ok(RangeUpdate {
        summary: view::build_cards(&stats),
        chart: view::build_chart(&rows),
    })
}

/// Card click or close: the only trigger that moves `modal_open`.
///
/// A selection for a pair with no rows in the current range is not in the
/// current results; the event is ignored and the modal state is left alone.
pub async fn on_card_or_close(
    source: &dyn PriceSource,
    event: Option<ModalEvent>,
    modal_open: bool,
    start: NaiveDate,
    end: NaiveDate,
) -> Result<ModalUpdate> {
    let pair = match event {
        // Initial render, nothing fired yet.
        None => {
            return Ok(ModalUpdate {
                modal_open: false,
                rows: Vec::new(),
            })
        }
        Some(ModalEvent::Close) => {
            return Ok(ModalUpdate {
                modal_open: false,
                rows: Vec::new(),
            })
        }
        Some(ModalEvent::CardSelected { pair }) => pair,
    };

    let window = QueryWindow::new(start, end).for_pair(&pair);
    let records = source.fetch(&window).await?;

    if records.is_empty() {
        tracing::warn!("Ignoring selection of pair {} outside current results", pair);
        return Ok(ModalUpdate {
            modal_open,
            rows: Vec::new(),
        });
    }

    // Initial presentation order is by date; the page re-sorts from there.
    let mut rows = table::to_rows(&records);
    table::sort_rows(&mut rows, SortKey::Date, SortOrder::Ascending);

    Ok(ModalUpdate {
        modal_open: true,
        rows,
    })
}
