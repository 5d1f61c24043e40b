// Export Registry
//
// Names exported by the generated bindings, split by category.

use std::collections::BTreeMap;

/// One exported identifier and the module that defines it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportRecord {
    pub name: String,
    /// Import specifier relative to the alias file's directory.
    pub defining_path: String,
}

/// Category of an exported identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportKind {
    Hook,
    Type,
    Function,
}

/// All exports collected in one run.
///
/// The three maps are disjoint: the first category to claim a name keeps it.
/// Within a category the last recorded defining path wins.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExportRegistry {
    pub hooks: BTreeMap<String, ExportRecord>,
    pub types: BTreeMap<String, ExportRecord>,
    pub functions: BTreeMap<String, ExportRecord>,
}

impl ExportRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `name` under `kind`, unless another category already owns it.
    /// Returns whether the name was recorded.
    pub fn record(&mut self, kind: ExportKind, name: &str, defining_path: &str) -> bool {
        if let Some(existing) = self.kind_of(name) {
            if existing != kind {
                return false;
            }
        }
        self.map_mut(kind).insert(
            name.to_string(),
            ExportRecord {
                name: name.to_string(),
                defining_path: defining_path.to_string(),
            },
        );
        true
    }

    pub fn kind_of(&self, name: &str) -> Option<ExportKind> {
        if self.hooks.contains_key(name) {
            Some(ExportKind::Hook)
        } else if self.types.contains_key(name) {
            Some(ExportKind::Type)
        } else if self.functions.contains_key(name) {
            Some(ExportKind::Function)
        } else {
            None
        }
    }

    /// Whether `name` is exported in any category.
    pub fn contains(&self, name: &str) -> bool {
        self.kind_of(name).is_some()
    }

    pub fn get(&self, name: &str) -> Option<&ExportRecord> {
        self.hooks
            .get(name)
            .or_else(|| self.types.get(name))
            .or_else(|| self.functions.get(name))
    }

    fn map_mut(&mut self, kind: ExportKind) -> &mut BTreeMap<String, ExportRecord> {
        match kind {
            ExportKind::Hook => &mut self.hooks,
            ExportKind::Type => &mut self.types,
            ExportKind::Function => &mut self.functions,
        }
    }

    pub fn len(&self) -> usize {
        self.hooks.len() + self.types.len() + self.functions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
