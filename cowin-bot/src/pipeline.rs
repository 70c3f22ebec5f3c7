//! Generic fetch → validate → project → render pipeline shared by every data command.

use std::sync::Arc;

use cowin_client::{DataProvider, Endpoint};
use serde_json::Value;
use telegram_bot::{BotError, Reply, Result};
use tracing::{info, instrument};

use crate::command::{Command, Pincode, SlotDate};
use crate::help::help_text;
use crate::pager::{page_count, page_window, pager_controls};
use crate::table::{
    Column, Table, DISTRICT_COLUMNS, SLOT_COLUMNS, STATE_COLUMNS, TEXT_CHUNK_LIMIT,
};

/// One provider query: endpoint, projected columns and whether an empty list is an error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Query {
    pub endpoint: Endpoint,
    pub columns: &'static [Column],
    pub require_records: bool,
}

impl Query {
    pub fn states() -> Self {
        Self {
            endpoint: Endpoint::States,
            columns: STATE_COLUMNS,
            require_records: false,
        }
    }

    pub fn districts(state_id: u32) -> Self {
        Self {
            endpoint: Endpoint::Districts { state_id },
            columns: DISTRICT_COLUMNS,
            require_records: false,
        }
    }

    pub fn sessions_by_pin(date: &SlotDate, pincode: &Pincode) -> Self {
        Self {
            endpoint: Endpoint::SessionsByPin {
                pincode: pincode.to_string(),
                date: date.to_string(),
            },
            columns: SLOT_COLUMNS,
            require_records: true,
        }
    }

    pub fn sessions_by_district(district_id: u32, date: &SlotDate) -> Self {
        Self {
            endpoint: Endpoint::SessionsByDistrict {
                district_id,
                date: date.to_string(),
            },
            columns: SLOT_COLUMNS,
            require_records: true,
        }
    }

    /// Unpaged query behind a data command; `None` for help and pager presses.
    pub fn for_command(command: &Command) -> Option<Self> {
        match command {
            Command::States => Some(Self::states()),
            Command::Districts { state_id } => Some(Self::districts(*state_id)),
            Command::FindByPin { date, pincode } => Some(Self::sessions_by_pin(date, pincode)),
            Command::FindByDistrict { date, district_id } => {
                Some(Self::sessions_by_district(*district_id, date))
            }
            Command::Help | Command::Page { .. } => None,
        }
    }
}

/// Pulls the record list out of a provider body.
///
/// The list key must hold an array (else the payload is malformed); an empty array is an error
/// only when `require_records` is set.
pub fn extract_records(body: Value, key: &str, require_records: bool) -> Result<Vec<Value>> {
    let records = match body {
        Value::Object(mut map) => match map.remove(key) {
            Some(Value::Array(items)) => items,
            _ => {
                return Err(BotError::Provider(format!(
                    "malformed payload: `{}` is not a list",
                    key
                )))
            }
        },
        _ => {
            return Err(BotError::Provider(
                "malformed payload: expected a JSON object".to_string(),
            ))
        }
    };
    if require_records && records.is_empty() {
        return Err(BotError::EmptyResult(format!("provider returned no {}", key)));
    }
    Ok(records)
}

/// Runs queries against a [`DataProvider`] and renders replies.
#[derive(Clone)]
pub struct Pipeline {
    provider: Arc<dyn DataProvider>,
}

impl Pipeline {
    pub fn new(provider: Arc<dyn DataProvider>) -> Self {
        Self { provider }
    }

    /// One provider call plus response validation.
    #[instrument(skip(self, query), fields(endpoint = %query.endpoint.path()))]
    pub async fn fetch_records(&self, query: &Query) -> Result<Vec<Value>> {
        let body = self
            .provider
            .fetch(&query.endpoint)
            .await
            .map_err(|e| BotError::Provider(e.to_string()))?;
        let records = extract_records(body, query.endpoint.list_key(), query.require_records)?;
        info!(records = records.len(), "step: provider records validated");
        Ok(records)
    }

    /// Every record of the query as one table.
    pub async fn table(&self, query: &Query) -> Result<Table> {
        let records = self.fetch_records(query).await?;
        Ok(Table::project(query.columns, &records))
    }

    /// Replies for a non-pager command, in delivery order. Tables longer than one Telegram
    /// message are split on whole rows. `find_by_district_id` yields its first page.
    pub async fn replies_for(&self, command: &Command) -> Result<Vec<Reply>> {
        match command {
            Command::Help => Ok(vec![Reply::plain(help_text())]),
            Command::FindByDistrict { date, district_id } => {
                Ok(vec![self.district_page(*district_id, date, 0, true).await?])
            }
            Command::Page { .. } => Err(BotError::Validation(
                "page buttons only work on a find_by_district_id result".to_string(),
            )),
            other => {
                let query = Query::for_command(other).ok_or_else(|| {
                    BotError::Validation(format!("{} has no data query", other.name()))
                })?;
                let table = self.table(&query).await?;
                let chunks = table.to_html_chunks(TEXT_CHUNK_LIMIT);
                if chunks.len() > 1 {
                    info!(rows = table.row_count(), parts = chunks.len(), "step: reply split");
                }
                Ok(chunks.into_iter().map(Reply::html).collect())
            }
        }
    }

    /// Page `page` of a district slot listing with its pager controls.
    ///
    /// The first page requires at least one session; a later page re-queries and renders an
    /// empty table when nothing comes back.
    #[instrument(skip(self, date), fields(date = %date))]
    pub async fn district_page(
        &self,
        district_id: u32,
        date: &SlotDate,
        page: usize,
        require_records: bool,
    ) -> Result<Reply> {
        let query = Query {
            require_records,
            ..Query::sessions_by_district(district_id, date)
        };
        let records = self.fetch_records(&query).await?;
        let total = records.len();
        let window = page_window(total, page);
        let table = Table::project(query.columns, &records[window]);
        let text = format!(
            "{}\nPage {} of {}",
            table.to_html(),
            page.saturating_add(1),
            page_count(total)
        );
        Ok(Reply::html(text).with_controls(pager_controls(total, page)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_extract_records_missing_key_is_malformed() {
        let err = extract_records(json!({"error": "x"}), "states", false).unwrap_err();
        assert!(matches!(err, BotError::Provider(_)));
    }

    #[test]
    fn test_extract_records_non_array_is_malformed() {
        let err = extract_records(json!({"sessions": {}}), "sessions", true).unwrap_err();
        assert!(matches!(err, BotError::Provider(_)));
        let err = extract_records(json!([1, 2]), "sessions", true).unwrap_err();
        assert!(matches!(err, BotError::Provider(_)));
    }

    #[test]
    fn test_extract_records_empty_required() {
        let err = extract_records(json!({"sessions": []}), "sessions", true).unwrap_err();
        assert!(matches!(err, BotError::EmptyResult(_)));
        assert!(extract_records(json!({"states": []}), "states", false)
            .unwrap()
            .is_empty());
    }

    #[test]
    fn test_query_for_command_keeps_values_verbatim() {
        let command = Command::parse_text("find_by_pin 21-06-2021 011001")
            .unwrap()
            .unwrap();
        let query = Query::for_command(&command).unwrap();
        assert_eq!(
            query.endpoint,
            Endpoint::SessionsByPin {
                pincode: "011001".to_string(),
                date: "21-06-2021".to_string()
            }
        );
        assert!(query.require_records);
        assert!(Query::for_command(&Command::Help).is_none());
    }
}
