//! # Core Domain
//!
//! Pure construction logic. No I/O, no environment, no logging.
//!
//! Contains:
//! - `Widget`: the value under construction
//! - `options`: functional options applied as callables
//! - `config`: the plain configuration record inspected once

pub mod config;
pub mod options;

use self::config::WidgetConfig;
use self::options::WidgetOption;

/// A value that counts how many configuration effects were applied to it
///
/// Created fresh by every constructor and only mutated while it is being
/// built.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Widget {
    option_count: usize,
}

impl Widget {
    /// Build a widget by applying each option, in order
    pub fn new(options: &[WidgetOption]) -> Self {
        let mut widget = Self::default();
        for option in options {
            option(&mut widget);
        }
        widget
    }

    /// Build a widget from a configuration record
    ///
    /// Each field that satisfies its predicate adds one to the count.
    pub fn from_config(config: WidgetConfig) -> Self {
        let mut widget = Self::default();
        if config.bool_option {
            widget.option_count += 1;
        }
        if config.int_option > 0 {
            widget.option_count += 1;
        }
        widget
    }

    /// Same as [`Widget::from_config`], but never inlined
    ///
    /// Gives the record variant the same call overhead as the dispatched
    /// variants.
    #[inline(never)]
    pub fn from_config_no_inline(config: WidgetConfig) -> Self {
        Self::from_config(config)
    }

    /// Number of options that took effect
    pub fn option_count(&self) -> usize {
        self.option_count
    }

    pub(crate) fn bump(&mut self) {
        self.option_count += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::options::{with_bool_option, with_int_option};

    #[test]
    fn test_widget_no_options() {
        assert_eq!(Widget::new(&[]).option_count(), 0);
        assert_eq!(Widget::from_config(WidgetConfig::default()).option_count(), 0);
    }

    #[test]
    fn test_widget_bool_option() {
        assert_eq!(Widget::new(&[with_bool_option()]).option_count(), 1);

        let config = WidgetConfig::new().with_bool_option();
        assert_eq!(Widget::from_config(config).option_count(), 1);
    }

    #[test]
    fn test_widget_int_option() {
        assert_eq!(Widget::new(&[with_int_option(7)]).option_count(), 1);

        let config = WidgetConfig::new().with_int_option(7);
        assert_eq!(Widget::from_config(config).option_count(), 1);
    }

    #[test]
    fn test_widget_both_options() {
        let widget = Widget::new(&[with_bool_option(), with_int_option(42)]);
        assert_eq!(widget.option_count(), 2);

        let config = WidgetConfig::new().with_bool_option().with_int_option(42);
        assert_eq!(Widget::from_config(config).option_count(), 2);
        assert_eq!(Widget::from_config_no_inline(config).option_count(), 2);
    }

    #[test]
    fn test_widget_non_positive_int_never_counts() {
        for x in [0, -1, i64::MIN] {
            assert_eq!(Widget::new(&[with_int_option(x)]).option_count(), 0);

            let config = WidgetConfig::new().with_int_option(x);
            assert_eq!(Widget::from_config(config).option_count(), 0);
        }
    }

    #[test]
    fn test_widget_options_are_applied_in_order() {
        // Repeats are not deduplicated: every effect runs once
        let options = [with_bool_option(), with_bool_option(), with_int_option(1)];
        assert_eq!(Widget::new(&options).option_count(), 3);
    }

    #[test]
    fn test_widget_record_matches_options() {
        for bool_option in [false, true] {
            for int_option in [-5, 0, 1, 42] {
                let config = WidgetConfig {
                    bool_option,
                    int_option,
                };

                let from_options = Widget::new(&config.into_options());
                let from_record = Widget::from_config(config);

                assert_eq!(from_options, from_record, "config = {:?}", config);
            }
        }
    }
}
