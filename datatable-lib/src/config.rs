//! Table configuration

use serde::Deserialize;
use serde::Serialize;

use crate::error::ConfigError;
use crate::selection::SelectionMode;

/// Default number of rows per page.
pub const DEFAULT_PAGE_SIZE: usize = 10;

/// Default row key path.
pub const DEFAULT_ROW_KEY: &str = "id";

/// Default message shown when there are no rows.
pub const DEFAULT_EMPTY_MESSAGE: &str = "No data available";

/// Row density of the rendered table.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TableVariant {
    #[default]
    Default,
    /// Compact rows, adds the `table-dense` class.
    Dense,
}

/// Configuration for a [`DataTable`](crate::table::DataTable).
///
/// Controls which features are enabled and their defaults. Missing fields
/// fall back to their defaults when deserialized.
///
/// # Example
///
/// ```
/// use datatable_lib::config::TableConfig;
/// use datatable_lib::selection::SelectionMode;
///
/// let config = TableConfig::default()
///     .with_page_size(25)
///     .with_row_key("user.id")
///     .with_selection_mode(SelectionMode::Single);
///
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TableConfig {
    /// Rows per page, also used when a caller asks for a page size of zero.
    ///
    /// Default: 10
    pub page_size: usize,

    /// Accessor path of the field that identifies a row.
    ///
    /// Default: `"id"`
    pub row_key: String,

    /// How rows may be selected.
    ///
    /// Default: [`SelectionMode::Multiple`]
    pub selection_mode: SelectionMode,

    /// Whether header clicks may sort columns.
    pub enable_sorting: bool,

    /// Whether the free-text filter is applied.
    pub enable_filtering: bool,

    /// Whether rows are split into pages. When disabled every row is on a
    /// single page.
    pub enable_pagination: bool,

    /// Message reported when there are no rows to show.
    pub empty_message: String,

    /// Row density.
    pub variant: TableVariant,

    /// Keep the header row in place while the body scrolls.
    pub sticky_header: bool,

    /// Extra class appended to the table's class list.
    pub class_name: Option<String>,

    /// Accessible name of the table.
    pub aria_label: Option<String>,

    /// Id of the element describing the table.
    pub aria_describedby: Option<String>,
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            page_size: DEFAULT_PAGE_SIZE,
            row_key: DEFAULT_ROW_KEY.to_string(),
            selection_mode: SelectionMode::default(),
            enable_sorting: true,
            enable_filtering: true,
            enable_pagination: true,
            empty_message: DEFAULT_EMPTY_MESSAGE.to_string(),
            variant: TableVariant::Default,
            sticky_header: false,
            class_name: None,
            aria_label: None,
            aria_describedby: None,
        }
    }
}

impl TableConfig {
    /// Creates a new config with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the default page size.
    pub fn with_page_size(mut self, page_size: usize) -> Self {
        self.page_size = page_size;
        self
    }

    /// Sets the row key path.
    pub fn with_row_key(mut self, row_key: impl Into<String>) -> Self {
        self.row_key = row_key.into();
        self
    }

    /// Sets the selection mode.
    pub fn with_selection_mode(mut self, mode: SelectionMode) -> Self {
        self.selection_mode = mode;
        self
    }

    /// Enables or disables sorting.
    pub fn with_sorting(mut self, enabled: bool) -> Self {
        self.enable_sorting = enabled;
        self
    }

    /// Enables or disables filtering.
    pub fn with_filtering(mut self, enabled: bool) -> Self {
        self.enable_filtering = enabled;
        self
    }

    /// Enables or disables pagination.
    pub fn with_pagination(mut self, enabled: bool) -> Self {
        self.enable_pagination = enabled;
        self
    }

    /// Sets the empty-state message.
    pub fn with_empty_message(mut self, message: impl Into<String>) -> Self {
        self.empty_message = message.into();
        self
    }

    /// Sets the row density.
    pub fn with_variant(mut self, variant: TableVariant) -> Self {
        self.variant = variant;
        self
    }

    pub fn with_sticky_header(mut self, sticky: bool) -> Self {
        self.sticky_header = sticky;
        self
    }

    pub fn with_class_name(mut self, class_name: impl Into<String>) -> Self {
        self.class_name = Some(class_name.into());
        self
    }

    pub fn with_aria_label(mut self, label: impl Into<String>) -> Self {
        self.aria_label = Some(label.into());
        self
    }

    pub fn with_aria_describedby(mut self, id: impl Into<String>) -> Self {
        self.aria_describedby = Some(id.into());
        self
    }

    /// Checks that the configuration is usable.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.page_size == 0 {
            return Err(ConfigError::ZeroPageSize);
        }
        if self.row_key.split('.').any(str::is_empty) {
            return Err(ConfigError::InvalidRowKey(self.row_key.clone()));
        }
        Ok(())
    }
}
