//! Command registry built once at process start.

use std::collections::HashMap;
use tracing::{info, warn};

use crate::command::domain::{CommandDefinition, CommandMetadata, CommandModule};

/// Immutable mapping from command name to its definition.
///
/// Built from the plugin-registration list at startup with a skip-and-warn
/// policy: a module missing metadata or a handler, or carrying metadata
/// outside the platform limits, is logged and omitted. Degraded-but-running
/// is the policy; loading never fails.
#[derive(Debug, Default)]
pub struct CommandRegistry {
    commands: HashMap<String, CommandDefinition>,
}

impl CommandRegistry {
    /// Loads a registry from the plugin-registration list.
    ///
    /// Later modules replace earlier ones registered under the same name,
    /// with a warning.
    #[must_use]
    pub fn load(modules: impl IntoIterator<Item = CommandModule>) -> Self {
        let mut commands = HashMap::new();
        for module in modules {
            let Some(metadata) = module.metadata else {
                warn!(module = %module.source, "skipping command module without metadata");
                continue;
            };
            let Some(handler) = module.handler else {
                warn!(module = %module.source, "skipping command module without a handler");
                continue;
            };
            if let Err(error) = metadata.validate() {
                warn!(module = %module.source, %error, "skipping command module with invalid metadata");
                continue;
            }
            let name = metadata.name.clone();
            if commands
                .insert(name.clone(), CommandDefinition::new(metadata, handler))
                .is_some()
            {
                warn!(command = %name, module = %module.source, "replacing previously registered command");
            }
            info!(command = %name, "loaded command");
        }
        Self { commands }
    }

    /// Looks up a command definition by name.
    ///
    /// Returns `None` for unknown names; the dispatcher treats this as a
    /// silent no-op, not an error.
    #[must_use]
    pub fn lookup(&self, name: &str) -> Option<&CommandDefinition> {
        self.commands.get(name)
    }

    /// Returns the metadata of all loaded commands, ordered by name.
    #[must_use]
    pub fn metadata(&self) -> Vec<CommandMetadata> {
        let mut metadata: Vec<_> = self
            .commands
            .values()
            .map(|definition| definition.metadata().clone())
            .collect();
        metadata.sort_by(|left, right| left.name.cmp(&right.name));
        metadata
    }

    /// Returns the number of loaded commands.
    #[must_use]
    pub fn len(&self) -> usize {
        self.commands.len()
    }

    /// Whether the registry holds no commands.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }
}
