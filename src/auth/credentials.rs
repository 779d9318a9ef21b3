//! Registered application credentials.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use subtle::ConstantTimeEq;

/// A registered application and its shared secret.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ApplicationCredential {
    /// Unique application identifier.
    pub id: u8,

    /// Display name, not used for authentication.
    pub name: String,

    /// Shared secret.
    pub key: String,
}

/// Read-only lookup table of application credentials keyed by id.
///
/// Built once from configuration. When the same id appears more than once,
/// the last entry wins.
#[derive(Debug, Clone, Default)]
pub struct CredentialTable {
    applications: HashMap<u8, ApplicationCredential>,
}

impl CredentialTable {
    /// Build the table from a configuration list.
    pub fn new(applications: impl IntoIterator<Item = ApplicationCredential>) -> Self {
        let mut table = HashMap::new();
        for app in applications {
            if let Some(previous) = table.insert(app.id, app) {
                tracing::debug!(
                    app_id = previous.id,
                    replaced = %previous.name,
                    "Duplicate application id, later entry wins"
                );
            }
        }
        Self { applications: table }
    }

    /// Returns true if `id` is registered and `secret` matches its key exactly.
    pub fn verify_secret(&self, id: u8, secret: &[u8]) -> bool {
        match self.applications.get(&id) {
            Some(app) => app.key.as_bytes().ct_eq(secret).into(),
            None => false,
        }
    }

    pub fn len(&self) -> usize {
        self.applications.len()
    }

    pub fn is_empty(&self) -> bool {
        self.applications.is_empty()
    }
}
