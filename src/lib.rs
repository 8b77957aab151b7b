//! # Generic Templates
//!
//! A generic append-only list and a generic "maximum of two" function,
//! plus a tagged variant that replaces untyped pointer casts.
//!
//! ## Modules
//!
//! 1. **ElementList** - append-only list over any element type
//! 2. **maximum** - greater of two `PartialOrd` values, first argument on ties
//! 3. **Value** - int / float / text in one slot, with checked access
//! 4. **SharedElementList** - mutex-guarded list for use across threads
//! 5. **ListConfig** - TOML settings for building lists
//!
//! ```
//! use generic_templates::{maximum, ElementList};
//!
//! let mut list = ElementList::new();
//! list.append(3);
//! list.append(11);
//! list.append(27);
//!
//! assert_eq!(list.last_element().unwrap(), 27);
//! assert_eq!(*maximum(&5, &5), 5);
//! ```
//!
//! ## Key Dependencies
//!
//! - `thiserror` - error enum
//! - `serde` / `toml` - config loading and list serialization
//! - `itertools` - separator-joined display
//! - `log` - trace/debug events; install a logger such as `env_logger` to see them

pub mod config;
pub mod element_list;
pub mod error;
pub mod maximum;
pub mod shared;
pub mod value;

pub use config::ListConfig;
pub use element_list::{ElementList, ListDisplay};
pub use error::{Result, TemplateError};
pub use maximum::{maximum, maximum_by, maximum_by_key, maximum_of};
pub use shared::SharedElementList;
pub use value::{Value, ValueKind};
