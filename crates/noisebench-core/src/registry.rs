//! Ordered scenario registry.
//!
//! A [`Registry`] holds `(label, workload)` pairs in declaration order.
//! The engine measures them in that order and the report renders them in
//! that order; nothing ever sorts them.

use indexmap::IndexMap;

use crate::error::RegistryError;
use crate::workload::Workload;

/// A labelled workload.
pub struct Scenario {
    /// Human-readable label, unique within a registry.
    pub label: String,
    /// The unit of work measured for this scenario.
    pub workload: Box<dyn Workload>,
}

impl Scenario {
    /// Bind a label to a workload.
    pub fn new(label: impl Into<String>, workload: impl Workload + 'static) -> Self {
        Self {
            label: label.into(),
            workload: Box::new(workload),
        }
    }
}

impl std::fmt::Debug for Scenario {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Scenario")
            .field("label", &self.label)
            .finish_non_exhaustive()
    }
}

/// Scenarios in declaration order, keyed by label.
#[derive(Default)]
pub struct Registry {
    scenarios: IndexMap<String, Box<dyn Workload>>,
}

impl Registry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a scenario built from `label` and `workload`.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::DuplicateLabel`] if the label is taken and
    /// [`RegistryError::EmptyLabel`] if it is blank. The registry is left
    /// unchanged on error.
    pub fn register(
        &mut self,
        label: impl Into<String>,
        workload: impl Workload + 'static,
    ) -> Result<&mut Self, RegistryError> {
        self.push(Scenario::new(label, workload))
    }

    /// Append an already-built [`Scenario`].
    ///
    /// # Errors
    ///
    /// Same as [`register`](Self::register).
    pub fn push(&mut self, scenario: Scenario) -> Result<&mut Self, RegistryError> {
        let Scenario { label, workload } = scenario;
        if label.trim().is_empty() {
            return Err(RegistryError::EmptyLabel);
        }
        if self.scenarios.contains_key(&label) {
            return Err(RegistryError::DuplicateLabel { label });
        }
        tracing::debug!(scenario = %label, position = self.scenarios.len(), "registered scenario");
        self.scenarios.insert(label, workload);
        Ok(self)
    }

    /// Number of registered scenarios.
    pub fn len(&self) -> usize {
        self.scenarios.len()
    }

    /// `true` if no scenario is registered.
    pub fn is_empty(&self) -> bool {
        self.scenarios.is_empty()
    }

    /// Labels in declaration order.
    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.scenarios.keys().map(String::as_str)
    }

    /// Iterate `(label, workload)` pairs in declaration order.
    pub fn iter_mut(&mut self) -> impl Iterator<Item = (&str, &mut (dyn Workload + 'static))> {
        self.scenarios
            .iter_mut()
            .map(|(label, w)| (label.as_str(), w.as_mut()))
    }

    /// Keep only scenarios whose label satisfies `keep`.
    ///
    /// Relative order of the survivors is preserved.
    pub fn retain(&mut self, mut keep: impl FnMut(&str) -> bool) {
        self.scenarios.retain(|label, _| keep(label));
    }
}

impl IntoIterator for Registry {
    type Item = Scenario;
    type IntoIter = std::iter::Map<
        indexmap::map::IntoIter<String, Box<dyn Workload>>,
        fn((String, Box<dyn Workload>)) -> Scenario,
    >;

    fn into_iter(self) -> Self::IntoIter {
        self.scenarios
            .into_iter()
            .map(into_scenario as fn((String, Box<dyn Workload>)) -> Scenario)
    }
}

fn into_scenario((label, workload): (String, Box<dyn Workload>)) -> Scenario {
    Scenario { label, workload }
}

impl std::fmt::Debug for Registry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.labels()).finish()
    }
}
