//! sheetsnap - Pure-Rust spreadsheet sheet extractor for LLM prompts
//!
//! This crate reads one sheet of a spreadsheet file (XLSX, XLSM or legacy
//! XLS) and produces a structured, text-normalized snapshot of it: Excel
//! style column labels, per-row records, a de-duplicated flat text list and
//! a fixed-width Markdown table. The snapshot is designed to be embedded
//! into a text-generation prompt or persisted as `.md`/JSON.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use sheetsnap::ExtractorBuilder;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     // Create an extractor with default settings
//!     let extractor = ExtractorBuilder::new().build()?;
//!
//!     // Extract one sheet into a snapshot
//!     let snapshot = extractor.extract("example.xlsx", "Sheet1")?;
//!
//!     println!("{}", snapshot.markdown);
//!     for text in &snapshot.flat_text {
//!         println!("- {}", text);
//!     }
//!
//!     Ok(())
//! }
//! ```
//!
//! # Custom Configuration
//!
//! ```rust,no_run
//! use sheetsnap::{DateFormat, ExtractorBuilder, FileFormat};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     // Force the legacy XLS backend and a custom date format
//!     let extractor = ExtractorBuilder::new()
//!         .with_file_format(FileFormat::Xls)
//!         .with_date_format(DateFormat::Custom("%Y/%m/%d".to_string()))
//!         .build()?;
//!
//!     let snapshot = extractor.extract("legacy.xls", "Data")?;
//!     snapshot.write_markdown("output/data.md")?;
//!
//!     Ok(())
//! }
//! ```
//!
//! # Rendering an In-Memory Grid
//!
//! The Markdown renderer is a pure function over a [`Grid`], usable without
//! any file I/O:
//!
//! ```rust
//! use sheetsnap::{CellScalar, Grid};
//!
//! let grid = Grid::from_rows(vec![
//!     vec![CellScalar::Text("Hello".to_string()), CellScalar::Number(10.0)],
//!     vec![CellScalar::Empty, CellScalar::Number(20.5)],
//! ]);
//!
//! let markdown = grid.to_markdown();
//! assert_eq!(markdown.lines().count(), 4); // header + separator + 2 rows
//! ```

mod api;
mod builder;
mod error;
mod formatter;
mod grid;
mod parser;
mod security;
mod snapshot;
mod types;

pub use api::{DateFormat, FileFormat};
pub use builder::{Extractor, ExtractorBuilder};
pub use error::ExtractError;
pub use grid::Grid;
pub use snapshot::{RowRecord, SheetSnapshot};
pub use types::{column_label, CellScalar};
