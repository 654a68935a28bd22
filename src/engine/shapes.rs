//! # Call Shapes
//!
//! Each function builds the same widget (boolean option on, integer option
//! 42, count 2) through a different call shape. The benches time them side
//! by side and count what they allocate.

use crate::core::config::WidgetConfig;
use crate::core::options::{with_bool_option, with_int_option};
use crate::core::Widget;
use crate::ports::WidgetFactory;

const INT_OPTION: i64 = 42;

fn two_option_config() -> WidgetConfig {
    WidgetConfig::new()
        .with_bool_option()
        .with_int_option(INT_OPTION)
}

/// Functional options, statically dispatched
pub fn call_new_widget() -> Widget {
    Widget::new(&[with_bool_option(), with_int_option(INT_OPTION)])
}

/// Configuration record, free to inline
pub fn call_new_widget_from_config() -> Widget {
    Widget::from_config(two_option_config())
}

/// Configuration record behind a call that is never inlined
pub fn call_new_widget_from_config_no_inline() -> Widget {
    Widget::from_config_no_inline(two_option_config())
}

/// Functional options through the factory trait object
pub fn call_new_widget_dyn(factory: &dyn WidgetFactory) -> Widget {
    factory.new_widget(&[with_bool_option(), with_int_option(INT_OPTION)])
}

/// Configuration record through the factory trait object
pub fn call_new_widget_from_config_dyn(factory: &dyn WidgetFactory) -> Widget {
    factory.new_widget_from_config(two_option_config())
}
