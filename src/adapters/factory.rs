//! # Direct Factory Adapter
//!
//! Forwards straight to the core constructors. Its only job is to sit behind
//! a `dyn WidgetFactory` so callers pay for dynamic dispatch.

use crate::core::config::WidgetConfig;
use crate::core::options::WidgetOption;
use crate::core::Widget;
use crate::ports::WidgetFactory;

/// Factory that wraps [`Widget::new`] and [`Widget::from_config`]
#[derive(Debug, Clone, Copy, Default)]
pub struct DirectFactory;

impl DirectFactory {
    /// Create the factory
    pub fn new() -> Self {
        Self
    }
}

impl WidgetFactory for DirectFactory {
    fn new_widget(&self, options: &[WidgetOption]) -> Widget {
        Widget::new(options)
    }

    fn new_widget_from_config(&self, config: WidgetConfig) -> Widget {
        Widget::from_config(config)
    }

    fn name(&self) -> &'static str {
        "direct"
    }
}
