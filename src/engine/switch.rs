//! # Factory Switch
//!
//! Picks the `WidgetFactory` at run time from an environment variable, so
//! the concrete type behind the trait object is unknown at compile time.
//!
//! Variable unset or empty: a `DirectFactory` is handed out.
//! Variable set to anything else: no factory, and callers have to cope
//! with `None` (or `Error::FactoryDisabled` from the checked form).

use std::env;

use tracing::debug;

use crate::adapters::factory::DirectFactory;
use crate::error::{Error, Result};
use crate::ports::WidgetFactory;

/// Variable read by [`FactorySwitch::from_env`] unless overridden
pub const DEFAULT_SWITCH_VAR: &str = "BUG";

/// Configuration for factory selection
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FactorySwitch {
    /// Name of the environment variable that was (or will be) read
    pub var: String,

    /// Whether a working factory should be produced
    pub enabled: bool,
}

impl Default for FactorySwitch {
    fn default() -> Self {
        Self {
            var: DEFAULT_SWITCH_VAR.to_string(),
            enabled: true,
        }
    }
}

impl FactorySwitch {
    /// Enabled switch watching the default variable
    pub fn new() -> Self {
        Self::default()
    }

    /// Watch a different variable
    pub fn with_var(mut self, var: impl Into<String>) -> Self {
        self.var = var.into();
        self
    }

    /// Force the switch on or off
    pub fn with_enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    /// Read the default variable from the process environment
    pub fn from_env() -> Self {
        Self::from_env_var(DEFAULT_SWITCH_VAR)
    }

    /// Read `var` from the process environment
    pub fn from_env_var(var: &str) -> Self {
        match env::var_os(var) {
            Some(value) => Self::from_value(var, Some(&*value.to_string_lossy())),
            None => Self::from_value(var, None),
        }
    }

    /// Build from an already-read value
    ///
    /// Only a non-empty value disables the factory.
    pub fn from_value(var: &str, value: Option<&str>) -> Self {
        let enabled = value.map_or(true, str::is_empty);
        Self {
            var: var.to_string(),
            enabled,
        }
    }

    /// Produce the factory this switch selects
    pub fn factory(&self) -> Option<Box<dyn WidgetFactory>> {
        if !self.enabled {
            debug!(var = %self.var, "widget factory disabled");
            return None;
        }

        let factory: Box<dyn WidgetFactory> = Box::new(DirectFactory::new());
        debug!(var = %self.var, factory = factory.name(), "widget factory selected");
        Some(factory)
    }

    /// Like [`FactorySwitch::factory`], but a disabled switch is an error
    pub fn require(&self) -> Result<Box<dyn WidgetFactory>> {
        self.factory().ok_or_else(|| Error::FactoryDisabled {
            var: self.var.clone(),
        })
    }
}

/// Factory selected by the process environment, if any
pub fn new_factory() -> Option<Box<dyn WidgetFactory>> {
    FactorySwitch::from_env().factory()
}

/// Factory selected by the process environment, or an error naming the
/// variable that disabled it
pub fn require_factory() -> Result<Box<dyn WidgetFactory>> {
    FactorySwitch::from_env().require()
}
