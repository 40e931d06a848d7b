use serde::Serialize;

use crate::geometry::{render_geometry, PointCloud};
use crate::selection::SelectionState;
use crate::shells::{render_shells, ShellModel};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WorkspaceItem {
    pub symbol: String,
    pub color: String,
    pub points: PointCloud,
    pub shells: ShellModel,
}

/// What the page draws: one plot per selected element, in selection order.
/// `empty` tells the page to show the dashed placeholder instead.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WorkspaceView {
    pub empty: bool,
    pub items: Vec<WorkspaceItem>,
}

impl WorkspaceView {
    pub fn from_selection(selection: &SelectionState) -> Self {
        let items: Vec<WorkspaceItem> = selection
            .selected()
            .iter()
            .map(|el| WorkspaceItem {
                symbol: el.symbol.clone(),
                color: el.color.clone(),
                points: render_geometry(el),
                shells: render_shells(el),
            })
            .collect();

        WorkspaceView {
            empty: items.is_empty(),
            items,
        }
    }
}
