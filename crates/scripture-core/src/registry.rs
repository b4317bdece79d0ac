//! Name-keyed set of translations, assembled once at startup and handed to
//! request handlers explicitly.

use std::collections::BTreeMap;
use std::sync::Arc;

use crate::error::{Error, Result};
use crate::traits::VersionProvider;

#[derive(Clone, Default)]
pub struct VersionRegistry {
    versions: BTreeMap<String, Arc<dyn VersionProvider>>,
}

impl VersionRegistry {
    pub fn builder() -> VersionRegistryBuilder {
        VersionRegistryBuilder::default()
    }

    pub fn get(&self, name: &str) -> Result<&dyn VersionProvider> {
        self.versions
            .get(name)
            .map(|p| p.as_ref())
            .ok_or_else(|| Error::NotFound(format!("version '{name}'")))
    }

    pub fn shared(&self, name: &str) -> Result<Arc<dyn VersionProvider>> {
        self.versions
            .get(name)
            .cloned()
            .ok_or_else(|| Error::NotFound(format!("version '{name}'")))
    }

    pub fn contains(&self, name: &str) -> bool {
        self.versions.contains_key(name)
    }

    /// Version names in sorted order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.versions.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.versions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.versions.is_empty()
    }
}

impl std::fmt::Debug for VersionRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("VersionRegistry").field("versions", &self.versions.keys().collect::<Vec<_>>()).finish()
    }
}

#[derive(Default)]
pub struct VersionRegistryBuilder {
    versions: BTreeMap<String, Arc<dyn VersionProvider>>,
}

impl VersionRegistryBuilder {
    pub fn register<P: VersionProvider + 'static>(self, provider: P) -> Result<Self> {
        self.register_shared(Arc::new(provider))
    }

    pub fn register_shared(mut self, provider: Arc<dyn VersionProvider>) -> Result<Self> {
        let name = provider.name().to_string();
        if self.versions.contains_key(&name) {
            return Err(Error::InvalidConfig(format!("version '{name}' registered twice")));
        }
        tracing::debug!(version = %name, "registered version");
        self.versions.insert(name, provider);
        Ok(self)
    }

    pub fn build(self) -> VersionRegistry {
        VersionRegistry { versions: self.versions }
    }
}
