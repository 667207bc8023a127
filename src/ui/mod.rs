//! Terminal output for the CLI: colours, icons and tables.

pub mod icons;
pub mod output;
pub mod table;
pub mod theme;

pub use icons::Icons;
pub use output::{error, header, info, section, success, verse_line, warn};
pub use table::{languages_table, summary_table, surahs_table};
pub use theme::{theme, Theme};
