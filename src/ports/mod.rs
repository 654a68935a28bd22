//! # Ports
//!
//! Trait contracts that adapters implement.
//!
//! There is a single port here: `WidgetFactory`, the capability set for
//! building widgets. Code that holds a `&dyn WidgetFactory` cannot know which
//! implementation it has, so every call goes through the vtable and nothing
//! is inlined across it.

use crate::core::config::WidgetConfig;
use crate::core::options::WidgetOption;
use crate::core::Widget;

/// Builds widgets through dynamic dispatch
///
/// Must stay object safe: the engine hands it out as `Box<dyn WidgetFactory>`.
pub trait WidgetFactory: Send + Sync {
    /// Build from functional options
    fn new_widget(&self, options: &[WidgetOption]) -> Widget;

    /// Build from a configuration record
    fn new_widget_from_config(&self, config: WidgetConfig) -> Widget;

    /// Name of the implementation, for logs
    fn name(&self) -> &'static str;
}
