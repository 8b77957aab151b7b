use std::fs;
use std::path::Path;

use log::debug;
use serde::{Deserialize, Serialize};

use crate::element_list::{ElementList, ListDisplay};
use crate::error::{Result, TemplateError};

/// Settings applied when an [`ElementList`](crate::ElementList) is built
/// through [`ElementList::from_config`](crate::ElementList::from_config).
///
/// ```toml
/// initial_capacity = 16
/// separator = ", "
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ListConfig {
    /// Storage reserved up front. Does not limit the list's length.
    pub initial_capacity: usize,
    /// Placed between elements by [`ListConfig::display`].
    pub separator: String,
}

impl Default for ListConfig {
    fn default() -> Self {
        ListConfig {
            initial_capacity: 0,
            separator: " ".to_string(),
        }
    }
}

impl ListConfig {
    pub fn from_toml_str(input: &str) -> Result<Self> {
        let config: ListConfig = toml::from_str(input)?;
        Ok(config)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        debug!("loading list config from {}", path.display());

        let contents = fs::read_to_string(path).map_err(|e| TemplateError::config_io(path, e))?;
        Self::from_toml_str(&contents)
    }

    pub fn display<'a, T>(&'a self, list: &'a ElementList<T>) -> ListDisplay<'a, T> {
        list.display_with(&self.separator)
    }
}
