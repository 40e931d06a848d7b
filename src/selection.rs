use serde::Deserialize;

use crate::catalog::{Catalog, ElementRecord};
use crate::error::SelectionError;

/// Elements a user has picked, in click order. Duplicates are kept.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionState {
    selected: Vec<ElementRecord>,
}

/// Body of a palette click.
#[derive(Debug, Deserialize)]
struct SelectRequest {
    symbol: String,
}

impl SelectionState {
    pub fn new() -> Self {
        SelectionState::default()
    }

    pub fn select(&mut self, element: ElementRecord) {
        self.selected.push(element);
    }

    pub fn clear(&mut self) {
        self.selected.clear();
    }

    /// Resolve a raw click payload against the catalog and append the element.
    /// A payload that is not `{"symbol": <catalog symbol>}` leaves the state untouched.
    pub fn select_payload(
        &mut self,
        catalog: &Catalog,
        payload: &[u8],
    ) -> Result<&ElementRecord, SelectionError> {
        let request: SelectRequest = serde_json::from_slice(payload)
            .map_err(|e| SelectionError::InvalidSelectionInput(e.to_string()))?;
        self.select_symbol(catalog, &request.symbol)
    }

    pub fn select_symbol(
        &mut self,
        catalog: &Catalog,
        symbol: &str,
    ) -> Result<&ElementRecord, SelectionError> {
        let element = catalog.get(symbol).ok_or_else(|| {
            SelectionError::InvalidSelectionInput(format!("unknown element `{symbol}`"))
        })?;
        self.select(element.clone());
        Ok(&self.selected[self.selected.len() - 1])
    }

    pub fn selected(&self) -> &[ElementRecord] {
        &self.selected
    }

    pub fn len(&self) -> usize {
        self.selected.len()
    }

    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }
}
