//! Declaration auditor: decides which top-level declarations must be exported

use tracing::trace;

use super::export_index::ExportIndex;
use super::privacy::PrivacyPredicate;
use crate::models::module_item::{DeclarationSite, ModuleItem};
use crate::models::options::RuleOptions;

/// A declaration that failed the export check
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Violation<'a> {
    pub site: &'a DeclarationSite,
    /// First bound name requiring action
    pub name: &'a str,
}

/// Outcome of checking one bound name
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    KindDisabled,
    Private,
    AlreadyExported,
    MustExport,
}

pub struct DeclarationAuditor<'r> {
    options: &'r RuleOptions,
    privacy: &'r dyn PrivacyPredicate,
    index: &'r ExportIndex,
}

impl<'r> DeclarationAuditor<'r> {
    /// The index must be fully built before the auditor is created
    pub fn new(
        options: &'r RuleOptions,
        privacy: &'r dyn PrivacyPredicate,
        index: &'r ExportIndex,
    ) -> Self {
        Self {
            options,
            privacy,
            index,
        }
    }

    /// Audit every declaration among `items`, in source order
    pub fn audit<'a>(&self, items: &'a [ModuleItem]) -> Vec<Violation<'a>> {
        items
            .iter()
            .filter_map(ModuleItem::as_declaration)
            .filter_map(|site| self.audit_site(site))
            .collect()
    }

    /// Audit one declaration statement
    ///
    /// Each bound name is checked on its own, but a statement yields at most
    /// one violation since the statement is the unit of rewrite.
    pub fn audit_site<'a>(&self, site: &'a DeclarationSite) -> Option<Violation<'a>> {
        if !self.options.is_enabled(site.kind) {
            return None;
        }

        site.names
            .iter()
            .find(|name| self.verdict(site, name) == Verdict::MustExport)
            .map(|name| Violation {
                site,
                name: name.as_str(),
            })
    }

    pub fn verdict(&self, site: &DeclarationSite, name: &str) -> Verdict {
        let verdict = if !self.options.is_enabled(site.kind) {
            Verdict::KindDisabled
        } else if self.options.ignore_private && self.privacy.is_private(name) {
            Verdict::Private
        } else if self.index.contains(name) {
            Verdict::AlreadyExported
        } else {
            Verdict::MustExport
        };

        trace!(kind = %site.kind, name, ?verdict, "audited declaration");
        verdict
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::privacy::NamePrefix;
    use crate::models::module_item::{DeclarationKind, ExportSpecifier, SourceSpan};

    fn var(names: &[&str]) -> ModuleItem {
        ModuleItem::Declaration(DeclarationSite::new(
            DeclarationKind::Variable,
            names.iter().map(|n| n.to_string()).collect(),
            SourceSpan::new(0, 1),
        ))
    }

    fn export_clause(names: &[&str]) -> ModuleItem {
        ModuleItem::NamedExport {
            declared: vec![],
            specifiers: names.iter().map(|n| ExportSpecifier::new(*n, *n)).collect(),
            source: None,
            span: SourceSpan::new(0, 1),
        }
    }

    #[test]
    fn test_first_unexported_name_is_reported_once() {
        let items = vec![var(&["_a", "b", "c"]), export_clause(&["b"])];
        let index = ExportIndex::build(&items);
        let options = RuleOptions::default();
        let privacy = NamePrefix::default();
        let auditor = DeclarationAuditor::new(&options, &privacy, &index);

        let violations = auditor.audit(&items);
        assert_eq!(violations.len(), 1);
        assert_eq!(violations[0].name, "c");
    }

    #[test]
    fn test_all_names_satisfied() {
        let items = vec![var(&["_a", "b"]), export_clause(&["b"])];
        let index = ExportIndex::build(&items);
        let options = RuleOptions::default();
        let privacy = NamePrefix::default();

        assert!(DeclarationAuditor::new(&options, &privacy, &index)
            .audit(&items)
            .is_empty());
    }

    #[test]
    fn test_verdicts() {
        let items = vec![var(&["x"])];
        let index = ExportIndex::build(&[export_clause(&["done"])]);
        let options = RuleOptions::default().with_kind(DeclarationKind::Class, false);
        let privacy = NamePrefix::default();
        let auditor = DeclarationAuditor::new(&options, &privacy, &index);
        let site = items[0].as_declaration().unwrap();
        let class = DeclarationSite::single(DeclarationKind::Class, "C", SourceSpan::new(0, 1));

        assert_eq!(auditor.verdict(site, "x"), Verdict::MustExport);
        assert_eq!(auditor.verdict(site, "_x"), Verdict::Private);
        assert_eq!(auditor.verdict(site, "done"), Verdict::AlreadyExported);
        assert_eq!(auditor.verdict(&class, "C"), Verdict::KindDisabled);
    }

    #[test]
    fn test_private_names_audited_when_not_ignored() {
        let items = vec![var(&["_internal"])];
        let index = ExportIndex::build(&items);
        let options = RuleOptions::default().with_ignore_private(false);
        let privacy = NamePrefix::default();

        let violations = DeclarationAuditor::new(&options, &privacy, &index).audit(&items);
        assert_eq!(violations.len(), 1);
        assert_eq!(violations[0].name, "_internal");
    }
}
