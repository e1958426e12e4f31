use serde::Serialize;

/// One clickable line of the nearby-parking result list
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResultEntry {
    pub label: String,
    /// Index of the feature in the highlighted group
    pub feature: usize,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct ResultList {
    entries: Vec<ResultEntry>,
}

impl ResultList {
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn push(&mut self, label: impl Into<String>, feature: usize) {
        self.entries.push(ResultEntry {
            label: label.into(),
            feature,
        });
    }

    pub fn entries(&self) -> &[ResultEntry] {
        &self.entries
    }

    pub fn get(&self, index: usize) -> Option<&ResultEntry> {
        self.entries.get(index)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
