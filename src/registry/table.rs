/// Command registry
///
/// Builds the lookup table from declarations. Aliases are resolved here,
/// once, so dispatch is a single map lookup.

use crate::error::{PortfolioError, Result};
use crate::registry::content::DECLARATIONS;
use crate::registry::markup::MarkupParser;
use crate::registry::models::{CommandEntry, Declaration};
use std::collections::HashMap;

/// Resolved command table
#[derive(Debug, Clone)]
pub struct Registry {
    commands: Vec<CommandEntry>,
    index: HashMap<String, usize>,
    names: Vec<&'static str>,
}

impl Registry {
    /// Build the registry for the built-in vocabulary
    pub fn builtin() -> Result<Self> {
        Self::build(DECLARATIONS)
    }

    /// Build a registry from declarations
    ///
    /// # Returns
    /// * `Ok(Registry)` - Every name resolves to a canonical command
    /// * `Err(PortfolioError)` - Duplicate names, dangling or cyclic aliases,
    ///   or malformed content markup
    pub fn build(declarations: &[Declaration]) -> Result<Self> {
        let parser = MarkupParser::new()?;

        let mut declared: HashMap<String, Declaration> = HashMap::new();
        let mut names = Vec::with_capacity(declarations.len());
        for decl in declarations {
            let key = decl.name().to_lowercase();
            if declared.insert(key, *decl).is_some() {
                return Err(PortfolioError::DuplicateCommand(decl.name().to_string()));
            }
            names.push(decl.name());
        }

        let mut commands = Vec::new();
        let mut index = HashMap::new();

        for decl in declarations {
            if let Declaration::Command {
                name,
                summary,
                body,
                effect,
            } = *decl
            {
                let lines = body
                    .iter()
                    .map(|source| parser.parse_strict(source))
                    .collect::<Result<Vec<_>>>()?;

                index.insert(name.to_lowercase(), commands.len());
                commands.push(CommandEntry {
                    name,
                    summary,
                    aliases: Vec::new(),
                    lines,
                    effect,
                });
            }
        }

        for decl in declarations {
            if let Declaration::Alias { name, .. } = *decl {
                let slot = Self::resolve_alias(name, &declared, &index)?;
                index.insert(name.to_lowercase(), slot);
                commands[slot].aliases.push(name);
            }
        }

        Ok(Self {
            commands,
            index,
            names,
        })
    }

    /// Follow an alias chain to its canonical command
    fn resolve_alias(
        alias: &'static str,
        declared: &HashMap<String, Declaration>,
        index: &HashMap<String, usize>,
    ) -> Result<usize> {
        let mut chain = vec![alias];
        let mut current = alias;

        loop {
            match declared.get(&current.to_lowercase()) {
                Some(Declaration::Alias { target, .. }) => {
                    let target = *target;
                    if chain.iter().any(|seen| seen.eq_ignore_ascii_case(target)) {
                        chain.push(target);
                        return Err(PortfolioError::AliasCycle(chain.join(" -> ")));
                    }
                    if !declared.contains_key(&target.to_lowercase()) {
                        return Err(PortfolioError::UnknownAliasTarget {
                            alias: current.to_string(),
                            target: target.to_string(),
                        });
                    }
                    chain.push(target);
                    current = target;
                }
                Some(Declaration::Command { name, .. }) => {
                    return index.get(&name.to_lowercase()).copied().ok_or_else(|| {
                        PortfolioError::Generic(format!("command '{}' was not indexed", name))
                    });
                }
                None => {
                    return Err(PortfolioError::UnknownAliasTarget {
                        alias: alias.to_string(),
                        target: current.to_string(),
                    });
                }
            }
        }
    }

    /// Look up an already normalized name (trimmed, lowercase)
    pub fn lookup(&self, name: &str) -> Option<&CommandEntry> {
        self.index.get(name).map(|&slot| &self.commands[slot])
    }

    /// Every name, aliases included, in declaration order
    pub fn names(&self) -> &[&'static str] {
        &self.names
    }

    /// Canonical commands in declaration order
    pub fn commands(&self) -> &[CommandEntry] {
        &self.commands
    }
}
