use std::borrow::Borrow;
use std::fmt;

use indexmap::IndexSet;
use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};

/// Identifier of one plotted series (e.g. `portfolio`, `sp500`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SeriesId(String);

impl SeriesId {
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for SeriesId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl From<&str> for SeriesId {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for SeriesId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl fmt::Display for SeriesId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SeriesStyle {
    Line,
    Area,
    Dashed,
}

/// Display metadata handed through to the rendering layer untouched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeriesDescriptor {
    pub id: SeriesId,
    pub label: String,
    pub color: String,
    pub style: SeriesStyle,
}

impl SeriesDescriptor {
    #[must_use]
    pub fn new(
        id: impl Into<SeriesId>,
        label: impl Into<String>,
        color: impl Into<String>,
        style: SeriesStyle,
    ) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            color: color.into(),
            style,
        }
    }
}

/// Ordered set of visible series that can never become empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct SeriesVisibility {
    ids: IndexSet<SeriesId>,
}

impl SeriesVisibility {
    pub fn new<I>(ids: I) -> ChartResult<Self>
    where
        I: IntoIterator<Item = SeriesId>,
    {
        let ids: IndexSet<SeriesId> = ids.into_iter().collect();
        if ids.is_empty() {
            return Err(ChartError::InvalidConfig(
                "at least one series must be visible".to_owned(),
            ));
        }
        Ok(Self { ids })
    }

    #[must_use]
    pub fn contains(&self, id: &str) -> bool {
        self.ids.contains(id)
    }

    /// Number of visible series; always at least one.
    #[must_use]
    pub fn count(&self) -> usize {
        self.ids.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &SeriesId> {
        self.ids.iter()
    }

    /// Hides `id` when it is visible and not the last one, shows it otherwise.
    ///
    /// Returns `true` when the set changed.
    pub fn toggle(&mut self, id: &SeriesId) -> bool {
        if self.ids.contains(id) {
            if self.ids.len() == 1 {
                return false;
            }
            return self.ids.shift_remove(id);
        }
        self.ids.insert(id.clone())
    }
}

impl<'a> IntoIterator for &'a SeriesVisibility {
    type Item = &'a SeriesId;
    type IntoIter = indexmap::set::Iter<'a, SeriesId>;

    fn into_iter(self) -> Self::IntoIter {
        self.ids.iter()
    }
}
