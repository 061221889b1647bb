use crate::model::Amount;
use serde::{Deserialize, Serialize};

/// Spend attributed to one category label within a single project.
///
/// `title` is an opaque label and is not assumed unique within a project's raw list. A project
/// may report the same category more than once; duplicate titles are summed during
/// normalization, never overwritten.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct CategorySpend {
    title: String,
    spent: Amount,
}

impl CategorySpend {
    pub fn new(title: impl Into<String>, spent: Amount) -> Self {
        Self {
            title: title.into(),
            spent,
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn spent(&self) -> Amount {
        self.spent
    }
}

/// One project's raw spending records.
///
/// `title` is the project's display name. It is assumed unique enough for chart labeling but is
/// not enforced unique; two projects with the same title each produce their own chart record.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct Project {
    title: String,
    categories: Vec<CategorySpend>,
}

impl Project {
    pub fn new(title: impl Into<String>, categories: Vec<CategorySpend>) -> Self {
        Self {
            title: title.into(),
            categories,
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn categories(&self) -> &[CategorySpend] {
        &self.categories
    }
}
