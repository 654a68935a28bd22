//! # Widget Configuration
//!
//! The plain-record alternative to functional options. Fields are inspected
//! once by [`Widget::from_config`](super::Widget::from_config) instead of
//! invoking callables.

use super::options::{with_bool_option, with_int_option, WidgetOption};

/// Configuration record for building a widget
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WidgetConfig {
    /// Counts when `true`
    pub bool_option: bool,

    /// Counts when strictly positive
    pub int_option: i64,
}

impl WidgetConfig {
    /// All options off
    pub fn new() -> Self {
        Self::default()
    }

    /// Turn the boolean option on
    pub fn with_bool_option(mut self) -> Self {
        self.bool_option = true;
        self
    }

    /// Set the integer option
    pub fn with_int_option(mut self, x: i64) -> Self {
        self.int_option = x;
        self
    }

    /// The functional options that build the same widget as this record
    ///
    /// An unset boolean and a zero integer produce no option at all.
    pub fn into_options(self) -> Vec<WidgetOption> {
        let mut options = Vec::with_capacity(2);
        if self.bool_option {
            options.push(with_bool_option());
        }
        if self.int_option != 0 {
            options.push(with_int_option(self.int_option));
        }
        options
    }
}
