//! Private-by-convention name matching

/// Decides whether a name is intentionally internal
pub trait PrivacyPredicate: Send + Sync {
    fn is_private(&self, name: &str) -> bool;
}

/// Names starting with a fixed prefix are private
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NamePrefix(String);

impl NamePrefix {
    pub fn new(prefix: impl Into<String>) -> Self {
        Self(prefix.into())
    }

    pub fn prefix(&self) -> &str {
        &self.0
    }
}

/// The default convention: a leading underscore
impl Default for NamePrefix {
    fn default() -> Self {
        Self::new("_")
    }
}

impl PrivacyPredicate for NamePrefix {
    fn is_private(&self, name: &str) -> bool {
        !self.0.is_empty() && name.starts_with(self.0.as_str())
    }
}

impl<F> PrivacyPredicate for F
where
    F: Fn(&str) -> bool + Send + Sync,
{
    fn is_private(&self, name: &str) -> bool {
        self(name)
    }
}
