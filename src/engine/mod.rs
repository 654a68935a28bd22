//! # Engine
//!
//! The orchestration layer that wires everything together.
//!
//! This is where:
//! - The factory switch is read from the environment
//! - A `WidgetFactory` adapter is chosen (or withheld)
//! - The call shapes measured by the benches are defined

mod shapes;
mod switch;

pub use shapes::{
    call_new_widget, call_new_widget_dyn, call_new_widget_from_config,
    call_new_widget_from_config_dyn, call_new_widget_from_config_no_inline,
};
pub use switch::{new_factory, require_factory, FactorySwitch, DEFAULT_SWITCH_VAR};
