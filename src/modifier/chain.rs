//! Ordered modifier chain applied to inbound requests.

use axum::body::Body;
use axum::http::Request;

use crate::config::ModifierConfig;
use crate::modifier::{ModifierError, ModifierRegistry, ParsedModifier, Scope};

/// Immutable, ordered list of configured modifiers.
#[derive(Debug, Clone, Default)]
pub struct ModifierChain {
    modifiers: Vec<ParsedModifier>,
}

impl ModifierChain {
    pub fn new(modifiers: Vec<ParsedModifier>) -> Self {
        Self { modifiers }
    }

    /// Build every configured modifier through `registry`, in order.
    ///
    /// Fails on the first unknown name or invalid payload.
    pub fn from_config(
        registry: &ModifierRegistry,
        configs: &[ModifierConfig],
    ) -> Result<Self, ModifierError> {
        let modifiers = configs
            .iter()
            .map(|c| registry.build(&c.name, c.config.clone()))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self::new(modifiers))
    }

    /// Run every request-scoped modifier against `req`, stopping at the first error.
    pub fn apply_request(&self, req: &mut Request<Body>) -> Result<(), ModifierError> {
        for parsed in self.modifiers.iter().filter(|m| m.applies_to(Scope::Request)) {
            parsed.modifier.modify_request(req)?;
        }
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.modifiers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.modifiers.is_empty()
    }
}
