//! Export index: names already visible outside the module
//!
//! Built in one pass over the top-level items before any audit decision is
//! made. Only additive while building, read-only afterwards.

use std::collections::HashSet;

use crate::models::module_item::ModuleItem;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExportIndex {
    names: HashSet<String>,
}

impl ExportIndex {
    /// Build the index from the module's direct children
    pub fn build(items: &[ModuleItem]) -> Self {
        let mut index = Self::default();
        for item in items {
            index.collect(item);
        }
        index
    }

    fn collect(&mut self, item: &ModuleItem) {
        match item {
            ModuleItem::NamedExport {
                declared,
                specifiers,
                ..
            } => {
                self.names.extend(declared.iter().cloned());
                // `export { a as b }` marks the local binding `a`: the
                // auditor matches local declarations, not external aliases
                self.names
                    .extend(specifiers.iter().filter_map(|spec| spec.local.clone()));
            }
            ModuleItem::DefaultExport {
                name: Some(name), ..
            } => {
                self.names.insert(name.clone());
            }
            ModuleItem::DefaultExport { name: None, .. }
            | ModuleItem::Declaration(_)
            | ModuleItem::Other { .. } => {}
        }
    }

    pub fn contains(&self, name: &str) -> bool {
        self.names.contains(name)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Exported names in sorted order
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.names.iter().map(String::as_str).collect();
        names.sort_unstable();
        names
    }
}
