//! Target-layer tags: Process / Tool / People
//!
//! Orthogonal to `Voice` — an utterance may populate zero, one, two, or all
//! three layers independently.

use serde::{Deserialize, Serialize};

/// One of the three target layers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Layer {
    Process,
    Tool,
    People,
}

impl Layer {
    pub const ALL: [Layer; 3] = [Layer::Process, Layer::Tool, Layer::People];

    pub fn as_str(&self) -> &'static str {
        match self {
            Layer::Process => "process",
            Layer::Tool => "tool",
            Layer::People => "people",
        }
    }
}

/// The (process?, tool?, people?) bundle extracted from one utterance.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TargetLayers {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub process: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tool: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub people: Option<String>,
}

impl TargetLayers {
    pub fn is_empty(&self) -> bool {
        self.process.is_none() && self.tool.is_none() && self.people.is_none()
    }

    pub fn get(&self, layer: Layer) -> Option<&str> {
        match layer {
            Layer::Process => self.process.as_deref(),
            Layer::Tool => self.tool.as_deref(),
            Layer::People => self.people.as_deref(),
        }
    }

    pub fn set(&mut self, layer: Layer, value: String) {
        match layer {
            Layer::Process => self.process = Some(value),
            Layer::Tool => self.tool = Some(value),
            Layer::People => self.people = Some(value),
        }
    }

    /// Layers actually populated, in `Layer::ALL` order.
    pub fn populated(&self) -> Vec<Layer> {
        Layer::ALL
            .into_iter()
            .filter(|l| self.get(*l).is_some())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn layers_are_independent() {
        let mut layers = TargetLayers::default();
        assert!(layers.is_empty());

        layers.set(Layer::Process, "工程管理".to_string());
        assert!(!layers.is_empty());
        assert_eq!(layers.populated(), vec![Layer::Process]);

        layers.set(Layer::Tool, "ツール".to_string());
        layers.set(Layer::People, "担当者".to_string());
        assert_eq!(
            layers.populated(),
            vec![Layer::Process, Layer::Tool, Layer::People]
        );
    }
}
