mod format;
mod parse;
mod processor;
mod row;

pub use format::{format_raw_row, format_row, render};
pub use parse::parse_table;
pub use processor::{CityDataProcessor, compute_max_density};
pub use row::{AnnotatedRow, RawRow, Rows};
