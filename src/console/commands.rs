//! Console command registry.
//!
//! Commands are plain callbacks keyed by name, invoked from the UI thread
//! when the user submits a command line. Matching is case-insensitive; the
//! first whitespace-separated word selects the command, the rest become its
//! arguments.

use std::collections::HashMap;
use tracing::warn;

#[cfg(test)]
#[path = "commands_tests.rs"]
mod tests;

/// Handler invoked with the whitespace-split arguments after the command
/// word.
pub type CommandFn = Box<dyn Fn(&[String]) + Send>;

/// Named console commands with callback handlers.
#[derive(Default)]
pub struct CommandRegistry {
    commands: HashMap<String, CommandFn>,
}

impl CommandRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a command under `name`.
    ///
    /// Returns `false` (and warns) when a command with that name already
    /// exists; the existing handler is kept.
    pub fn register(
        &mut self,
        name: impl Into<String>,
        handler: impl Fn(&[String]) + Send + 'static,
    ) -> bool {
        let name = name.into().to_lowercase();
        if self.commands.contains_key(&name) {
            warn!(command = %name, "console command already registered");
            return false;
        }
        self.commands.insert(name, Box::new(handler));
        true
    }

    /// Parse and execute a raw command line.
    ///
    /// Returns `true` when a registered command ran. Unknown non-empty
    /// commands log a warning and return `false`.
    pub fn run(&self, line: &str) -> bool {
        let mut words = line.split_whitespace().map(str::to_string);
        let Some(name) = words.next() else {
            return false;
        };
        let args: Vec<String> = words.collect();
        self.run_args(&name, &args)
    }

    /// Execute a command by name with pre-split arguments.
    pub fn run_args(&self, name: &str, args: &[String]) -> bool {
        match self.commands.get(&name.to_lowercase()) {
            Some(handler) => {
                handler(args);
                true
            }
            None => {
                if !name.is_empty() {
                    warn!(command = %name, "console command not found");
                }
                false
            }
        }
    }

    /// Registered command names, unordered.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.commands.keys().map(String::as_str)
    }
}

impl std::fmt::Debug for CommandRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CommandRegistry")
            .field("commands", &self.commands.keys().collect::<Vec<_>>())
            .finish()
    }
}
