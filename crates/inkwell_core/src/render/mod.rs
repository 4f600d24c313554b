//! Stroke rendering contract.
//!
//! # Responsibility
//! - Turn stroke point lists into path data and parse path data back.
//! - Scale note geometry for thumbnails.
//! - Export notes as SVG documents.

pub mod path;
pub mod svg;
pub mod thumbnail;
