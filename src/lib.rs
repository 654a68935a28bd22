//! # callshape - Call Shape Micro-Benchmarks
//!
//! > "Same value, three ways to build it"
//!
//! callshape builds one trivial value, a [`Widget`] that counts the options
//! applied to it, through three different call shapes, so the benches can
//! show what each shape costs in time and in heap allocations.
//!
//! ## Philosophy
//!
//! - **The value is boring on purpose** - Only the call shape differs
//! - **Every shape agrees** - Same inputs, same count, checked on every iteration
//! - **Dispatch is chosen at run time** - The compiler cannot see through the factory
//! - **Pure core, swappable adapters** - Hexagonal architecture
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                       CALLSHAPE                              │
//! ├─────────────────────────────────────────────────────────────┤
//! │                                                              │
//! │  CORE (pure construction, no I/O)                           │
//! │    Widget, WidgetOption, WidgetConfig                       │
//! │                                                              │
//! │  PORTS (trait contracts)                                     │
//! │    WidgetFactory                                            │
//! │                                                              │
//! │  ADAPTERS (swappable implementations)                       │
//! │    Factory: DirectFactory                                   │
//! │    SDK examples: DynamoDB get-item, tracing span            │
//! │                                                              │
//! │  ENGINE (orchestration)                                      │
//! │    FactorySwitch, new_factory, call_* shapes                │
//! │                                                              │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Quick Start
//!
//! ```rust
//! use callshape::{with_bool_option, with_int_option, Widget, WidgetConfig};
//!
//! // Functional options
//! let widget = Widget::new(&[with_bool_option(), with_int_option(42)]);
//! assert_eq!(widget.option_count(), 2);
//!
//! // Configuration record
//! let config = WidgetConfig::new().with_bool_option().with_int_option(42);
//! assert_eq!(Widget::from_config(config).option_count(), 2);
//! ```

// ============================================================================
// MODULES
// ============================================================================

/// Core domain - pure construction, no I/O
/// Contains: Widget, WidgetOption, WidgetConfig
pub mod core;

/// Port definitions - trait contracts for adapters
/// Contains: WidgetFactory trait
pub mod ports;

/// Adapter implementations - swappable components
/// Contains: factory, dynamo, span submodules
pub mod adapters;

/// Engine - orchestration layer
/// Contains: factory selection and the call shapes the benches measure
pub mod engine;

/// Crate error type
pub mod error;

/// Process-wide tracing subscriber
pub mod telemetry;

// ============================================================================
// RE-EXPORTS (public API)
// ============================================================================

// Core types
pub use crate::core::Widget;
pub use crate::core::config::WidgetConfig;
pub use crate::core::options::{with_bool_option, with_int_option, WidgetOption};

// Port traits
pub use crate::ports::WidgetFactory;

// Adapters
pub use crate::adapters::factory::DirectFactory;

// Engine
pub use crate::engine::{new_factory, require_factory, FactorySwitch};

// Errors
pub use crate::error::{Error, Result};
