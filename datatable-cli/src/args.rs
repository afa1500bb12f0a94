//! Command-line arguments.

use std::path::PathBuf;

use clap::Parser;

/// Filter, sort and page through a JSON array of records.
#[derive(Debug, Parser)]
#[command(name = "datatable")]
#[command(version)]
#[command(about = "Browse a JSON dataset as a paged table", long_about = None)]
pub struct Args {
    /// JSON file holding an array of objects
    pub data: PathBuf,

    /// Table configuration file (defaults to config.json in the config directory)
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Free-text filter query
    #[arg(long, short = 'f', value_name = "QUERY")]
    pub filter: Option<String>,

    /// Column id to sort by
    #[arg(long, short = 's', value_name = "COLUMN")]
    pub sort: Option<String>,

    /// Sort descending
    #[arg(long, requires = "sort")]
    pub desc: bool,

    /// Page to show, starting at 1
    #[arg(long, short = 'p', default_value_t = 1)]
    pub page: usize,

    /// Rows per page (0 uses the configured default)
    #[arg(long, value_name = "N")]
    pub page_size: Option<usize>,

    /// Select a row by id (repeatable)
    #[arg(long = "select", value_name = "ID")]
    pub select: Vec<String>,

    /// Comma-separated accessor paths to show (defaults to the first record's keys)
    #[arg(long, value_delimiter = ',', value_name = "PATHS")]
    pub columns: Vec<String>,

    /// Hide a column by id (repeatable)
    #[arg(long = "hide", value_name = "COLUMN")]
    pub hide: Vec<String>,

    /// Log at debug level
    #[arg(long, short = 'v')]
    pub verbose: bool,
}

impl Args {
    /// Zero-based page index.
    pub fn page_index(&self) -> usize {
        self.page.saturating_sub(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_full() {
        let args = Args::try_parse_from([
            "datatable",
            "--filter",
            "john",
            "--sort",
            "name",
            "--desc",
            "--page",
            "2",
            "--page-size",
            "5",
            "--select",
            "1",
            "--select",
            "3",
            "--columns",
            "name,email",
            "--hide",
            "email",
            "people.json",
        ])
        .unwrap();

        assert_eq!(args.data, PathBuf::from("people.json"));
        assert_eq!(args.filter.as_deref(), Some("john"));
        assert_eq!(args.sort.as_deref(), Some("name"));
        assert!(args.desc);
        assert_eq!(args.page_index(), 1);
        assert_eq!(args.page_size, Some(5));
        assert_eq!(args.select, vec!["1", "3"]);
        assert_eq!(args.columns, vec!["name", "email"]);
        assert_eq!(args.hide, vec!["email"]);
    }

    #[test]
    fn test_defaults() {
        let args = Args::try_parse_from(["datatable", "data.json"]).unwrap();
        assert_eq!(args.page_index(), 0);
        assert!(args.columns.is_empty());
        assert!(args.config.is_none());
    }

    #[test]
    fn test_desc_requires_sort() {
        assert!(Args::try_parse_from(["datatable", "--desc", "data.json"]).is_err());
    }

    #[test]
    fn test_page_zero_is_first_page() {
        let args = Args::try_parse_from(["datatable", "--page", "0", "data.json"]).unwrap();
        assert_eq!(args.page_index(), 0);
    }
}
