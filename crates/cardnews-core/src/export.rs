//! The page description handed to the exporter.

use crate::category::Category;
use crate::element::{Element, paint_order};
use serde::Serialize;

/// One page ready for rasterising: background style plus elements back to
/// front.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExportRequest {
    pub category: Category,
    /// CSS background value of the page.
    pub background: String,
    /// Elements in paint order.
    pub elements: Vec<Element>,
}

impl ExportRequest {
    pub fn new(category: Category, background: impl Into<String>, elements: &[Element]) -> Self {
        Self {
            category,
            background: background.into(),
            elements: paint_order(elements).into_iter().cloned().collect(),
        }
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}
