//! Loading and saving option tables.
//!
//! Option tables can live outside the program in YAML or JSON table files,
//! described by [`TableFile`]. The format follows the file extension
//! (`.yaml`/`.yml` or `.json`).
//!
//! # Quick start
//!
//! ```no_run
//! use optbind_config::TableFile;
//! use optbind_parser::parse;
//!
//! let table = TableFile::load_validated("options.yaml").unwrap().into_table();
//! let outcome = parse(["-v", "input.txt"], &table);
//! outcome.errors().print(&mut std::io::stderr()).unwrap();
//! ```

mod error;
mod table_file;

pub use error::{ConfigError, Result};
pub use table_file::{TABLE_FILE_VERSION, TableFile, TableFormat};
