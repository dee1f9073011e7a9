//! PDF rendering for generated reports.
//!
//! `document` builds gridded single-table documents; `report` maps
//! work record rows into the three report layouts.

mod document;
mod report;

pub use document::TableDocument;
pub use report::{render_company_report, render_personal_report};
