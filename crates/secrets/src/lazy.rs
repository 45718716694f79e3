use crate::resolver::SecretResolver;
use once_cell::unsync::OnceCell;
use shopkeys_core::{Secret, SecretName};

/// A secret that is resolved on first access and then kept for the rest of
/// the invocation
pub struct LazySecret<'r> {
    resolver: &'r SecretResolver,
    name: SecretName,
    cell: OnceCell<Secret>,
}

impl<'r> LazySecret<'r> {
    #[must_use]
    pub fn new(resolver: &'r SecretResolver, name: SecretName) -> Self {
        Self {
            resolver,
            name,
            cell: OnceCell::new(),
        }
    }

    #[must_use]
    pub fn name(&self) -> &SecretName {
        &self.name
    }

    /// Resolve on first call; later calls return the same secret
    pub fn get(&self) -> &Secret {
        self.cell.get_or_init(|| self.resolver.resolve(&self.name))
    }

    /// Plaintext of the resolved value
    pub fn value(&self) -> &str {
        self.get().value().expose()
    }

    /// Whether resolution has already happened
    #[must_use]
    pub fn is_resolved(&self) -> bool {
        self.cell.get().is_some()
    }
}
