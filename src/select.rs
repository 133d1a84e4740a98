//! Selection of the classes worth documenting

use tracing::trace;

use crate::config::DocConfig;
use crate::schema::ClassDoc;

/// Keeps classes whose ancestors include one of the interesting base types
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectionFilter {
    interesting: Vec<String>,
}

impl SelectionFilter {
    pub fn new<I, S>(interesting: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut types: Vec<String> = Vec::new();
        for name in interesting {
            let name = name.into();
            if !types.contains(&name) {
                types.push(name);
            }
        }
        Self { interesting: types }
    }

    pub fn from_config(config: &DocConfig) -> Self {
        Self::new(config.interesting_base_types.iter().cloned())
    }

    pub fn interesting_types(&self) -> &[String] {
        &self.interesting
    }

    pub fn is_interesting(&self, class: &ClassDoc) -> bool {
        class.extends_any(self.interesting.iter().map(String::as_str))
    }

    /// Drop the classes that are not interesting, keeping the order
    pub fn apply(&self, classes: Vec<ClassDoc>) -> Vec<ClassDoc> {
        classes
            .into_iter()
            .filter(|class| {
                let keep = self.is_interesting(class);
                if !keep {
                    trace!(class = %class.qualified_name, "not interesting, skipped");
                }
                keep
            })
            .collect()
    }
}

impl Default for SelectionFilter {
    fn default() -> Self {
        Self::from_config(&DocConfig::default())
    }
}
