//! # Functional Options
//!
//! Options passed to [`Widget::new`] as callables that mutate the widget
//! under construction.
//!
//! An option that captures nothing is a zero-sized closure, so boxing it does
//! not allocate. An option that captures an argument (the integer option)
//! costs one heap allocation per call.

use super::Widget;

/// A callable effect applied to a widget during construction
pub type WidgetOption = Box<dyn Fn(&mut Widget) + Send + Sync>;

/// Option that always counts
pub fn with_bool_option() -> WidgetOption {
    Box::new(|widget: &mut Widget| widget.bump())
}

/// Option that counts only when `x` is strictly positive
pub fn with_int_option(x: i64) -> WidgetOption {
    Box::new(move |widget: &mut Widget| {
        if x > 0 {
            widget.bump();
        }
    })
}
