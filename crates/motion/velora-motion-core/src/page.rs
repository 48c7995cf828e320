//! Page composition: the explicit declaration of what the hosted page
//! contains, replacing DOM probing as a control-flow mechanism.
//!
//! The adapter builds one [`PageComposition`] per page from the expanded
//! markup: named regions, and per-selector lists of measured elements. A unit
//! whose anchor region or selector is absent is simply not registered; the
//! same sequencing plan serves every page type.

use hashbrown::HashMap;
use serde::{Deserialize, Serialize};

/// One concrete element matched by a selector, with the measurements the
/// sequencer needs (widths for marquee sets, heights for accordion answers,
/// text for headings and stats).
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Element {
    /// Stable handle the adapter maps back to the real element.
    pub handle: String,
    #[serde(default)]
    pub width: f32,
    #[serde(default)]
    pub height: f32,
    #[serde(default)]
    pub text: Option<String>,
}

impl Element {
    pub fn new(handle: impl Into<String>) -> Self {
        Self {
            handle: handle.into(),
            ..Self::default()
        }
    }

    pub fn with_width(mut self, width: f32) -> Self {
        self.width = width;
        self
    }

    pub fn with_height(mut self, height: f32) -> Self {
        self.height = height;
        self
    }

    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }
}

/// A named optional page region and the elements declared inside it.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Region {
    pub name: String,
    /// Selector -> matched elements, in document order.
    #[serde(default)]
    pub elements: HashMap<String, Vec<Element>>,
}

impl Region {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            elements: HashMap::new(),
        }
    }

    pub fn with_elements(mut self, selector: impl Into<String>, elements: Vec<Element>) -> Self {
        self.elements.insert(selector.into(), elements);
        self
    }
}

/// Everything the sequencer may target on the current page.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct PageComposition {
    pub name: String,
    #[serde(default)]
    pub regions: Vec<Region>,
}

impl PageComposition {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            regions: Vec::new(),
        }
    }

    pub fn with_region(mut self, region: Region) -> Self {
        self.regions.push(region);
        self
    }

    pub fn has_region(&self, name: &str) -> bool {
        self.regions.iter().any(|r| r.name == name)
    }

    pub fn region(&self, name: &str) -> Option<&Region> {
        self.regions.iter().find(|r| r.name == name)
    }

    /// All elements matched by a selector, across regions, in declared order.
    /// Absent selectors yield an empty slice, never an error.
    pub fn elements(&self, selector: &str) -> &[Element] {
        for region in &self.regions {
            if let Some(list) = region.elements.get(selector) {
                return list.as_slice();
            }
        }
        &[]
    }

    pub fn first(&self, selector: &str) -> Option<&Element> {
        self.elements(selector).first()
    }
}
