//! Publish item data model, filters, and aggregate views.

mod loader;

pub use loader::parse_publish_file;

use std::path::Path;

use serde::Deserialize;

/// Work item status. Labels match the source data files.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub enum Status {
    #[serde(rename = "완료")]
    Done,
    #[serde(rename = "진행중")]
    InProgress,
    #[serde(rename = "대기")]
    Waiting,
}

impl Status {
    pub fn label(self) -> &'static str {
        match self {
            Self::Done => "완료",
            Self::InProgress => "진행중",
            Self::Waiting => "대기",
        }
    }
}

/// Source category. One data file per category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Main,
    Auth,
    Other,
}

impl Category {
    pub const ALL: [Self; 3] = [Self::Main, Self::Auth, Self::Other];

    pub fn file_name(self) -> &'static str {
        match self {
            Self::Main => "publish-main.json",
            Self::Auth => "publish-auth.json",
            Self::Other => "publish-other.json",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Main => "main",
            Self::Auth => "auth",
            Self::Other => "other",
        }
    }
}

/// One publish work item. The category is injected by the loader from the
/// file the record came from; everything else is read as-is.
#[derive(Debug, Clone)]
pub struct PublishItem {
    pub id: u64,
    pub category: Category,
    pub depth1: String,
    pub depth2: String,
    pub depth3: String,
    pub kind: String,
    pub folder: String,
    pub file: String,
    pub status: Status,
    pub start_date: String,
    pub end_date: String,
    pub modified_date: String,
    pub dev_start_date: String,
    pub has_design: bool,
    pub history: Vec<String>,
}

/// Three-way design-asset filter.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DesignFilter {
    #[default]
    All,
    With,
    Without,
}

/// Current filter selection. `None` / empty string = match everything.
#[derive(Debug, Clone, Default)]
pub struct Filters {
    pub keyword: String,
    pub status: Option<Status>,
    pub depth1: Option<String>,
    pub category: Option<Category>,
    pub start_date: String,
    pub dev_start_date: String,
    pub has_design: DesignFilter,
}

impl Filters {
    /// Conjunction of the individual predicates.
    pub fn matches(&self, item: &PublishItem) -> bool {
        let keyword = self.keyword.trim().to_lowercase();
        let match_keyword = keyword.is_empty()
            || item.depth1.to_lowercase().contains(&keyword)
            || item.depth2.to_lowercase().contains(&keyword)
            || item.depth3.to_lowercase().contains(&keyword);
        let match_status = self.status.is_none_or(|status| item.status == status);
        let match_depth1 = self
            .depth1
            .as_deref()
            .is_none_or(|depth1| item.depth1 == depth1);
        let match_category = self
            .category
            .is_none_or(|category| item.category == category);
        let match_start = self.start_date.is_empty() || item.start_date == self.start_date;
        let match_dev_start =
            self.dev_start_date.is_empty() || item.dev_start_date == self.dev_start_date;
        let match_design = match self.has_design {
            DesignFilter::All => true,
            DesignFilter::With => item.has_design,
            DesignFilter::Without => !item.has_design,
        };

        match_keyword
            && match_status
            && match_depth1
            && match_category
            && match_start
            && match_dev_start
            && match_design
    }
}

/// In-memory list of publish items plus the active filter selection.
///
/// The length of [`filtered`](Self::filtered) is the reactive row-count
/// source for the virtual list.
#[derive(Default)]
pub struct PublishStore {
    items: Vec<PublishItem>,
    pub filters: Filters,
}

impl PublishStore {
    pub fn new() -> Self {
        Self::default()
    }

    #[cfg(test)]
    fn from_items(items: Vec<PublishItem>) -> Self {
        Self {
            items,
            filters: Filters::default(),
        }
    }

    /// Replace the item list from the data files under `dir`. Filters are
    /// kept as they are.
    pub fn load(&mut self, dir: &Path) {
        self.items = loader::load_dir(dir);
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Items passing the current filter selection, in file order.
    pub fn filtered(&self) -> Vec<&PublishItem> {
        self.items
            .iter()
            .filter(|item| self.filters.matches(item))
            .collect()
    }

    /// Filtered items grouped by `depth1`, in first-appearance order.
    pub fn grouped_by_depth1(&self) -> Vec<(String, Vec<&PublishItem>)> {
        let mut groups: Vec<(String, Vec<&PublishItem>)> = Vec::new();
        for item in self.filtered() {
            match groups.iter_mut().find(|(depth1, _)| *depth1 == item.depth1) {
                Some((_, bucket)) => bucket.push(item),
                None => groups.push((item.depth1.clone(), vec![item])),
            }
        }
        groups
    }

    /// Distinct depth1 values over the whole list, in first-appearance
    /// order; these are the options for cycling the depth1 filter.
    pub fn depth1_values(&self) -> Vec<String> {
        let mut values: Vec<String> = Vec::new();
        for item in &self.items {
            if !values.contains(&item.depth1) {
                values.push(item.depth1.clone());
            }
        }
        values
    }

    pub fn total_count(&self) -> usize {
        self.filtered().len()
    }

    pub fn done_count(&self) -> usize {
        self.count_status(Status::Done)
    }

    pub fn progress_count(&self) -> usize {
        self.count_status(Status::InProgress)
    }

    pub fn wait_count(&self) -> usize {
        self.count_status(Status::Waiting)
    }

    fn count_status(&self, status: Status) -> usize {
        self.filtered()
            .iter()
            .filter(|item| item.status == status)
            .count()
    }

    /// Completion rate over the filtered list, formatted like "62.5%".
    /// An empty selection reads "0%".
    pub fn done_rate(&self) -> String {
        let filtered = self.filtered();
        let total = filtered.len();
        if total == 0 {
            return "0%".to_owned();
        }
        let done = filtered
            .iter()
            .filter(|item| item.status == Status::Done)
            .count();
        format!("{:.1}%", done as f32 / total as f32 * 100.0)
    }
}

#[cfg(test)]
mod tests;
