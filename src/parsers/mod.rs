//! Source parsing front end
//!
//! Parses JavaScript/TypeScript with OXC and lowers the program's top level
//! into the host-neutral items the rule consumes.

pub mod module_items;
pub mod source_parser;

pub use module_items::lower_program;
pub use source_parser::{is_checkable_source, AllocatorPool, SourceParser, SOURCE_EXTENSIONS};
