//! Renderers for scan reports

mod json;
mod plain;
mod table;

pub(crate) use json::render_json;
pub(crate) use plain::render_plain;
pub(crate) use table::render_table;
