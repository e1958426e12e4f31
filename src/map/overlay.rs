use super::Feature;
use crate::geometry::Bounds;

/// Named set of features drawn together on the map.
///
/// Contents are replaced wholesale on each load; there is no diffing.
#[derive(Debug, Clone)]
pub struct OverlayGroup {
    name: &'static str,
    features: Vec<Feature>,
}

impl OverlayGroup {
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            features: Vec::new(),
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn clear(&mut self) {
        self.features.clear();
    }

    /// Add a feature and return its index within the group
    pub fn add(&mut self, feature: Feature) -> usize {
        self.features.push(feature);
        self.features.len() - 1
    }

    pub fn len(&self) -> usize {
        self.features.len()
    }

    pub fn is_empty(&self) -> bool {
        self.features.is_empty()
    }

    pub fn features(&self) -> &[Feature] {
        &self.features
    }

    pub fn get(&self, index: usize) -> Option<&Feature> {
        self.features.get(index)
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut Feature> {
        self.features.get_mut(index)
    }

    pub fn close_popups(&mut self) {
        for feature in &mut self.features {
            feature.popup_open = false;
        }
    }

    /// Combined bounds of every feature, `None` when empty
    pub fn bounds(&self) -> Option<Bounds> {
        Bounds::union_all(self.features.iter().map(|f| &f.bounds))
    }
}
