//! Source front end using OXC

use oxc_allocator::Allocator;
use oxc_diagnostics::OxcDiagnostic;
use oxc_parser::{ParseOptions, Parser};
use oxc_span::SourceType;
use parking_lot::Mutex;
use std::path::Path;
use std::sync::Arc;
use tracing::debug;

use super::module_items::lower_program;
use crate::error::{Result, RuleError};
use crate::models::module_item::ModuleItem;

/// Extensions the front end accepts
pub const SOURCE_EXTENSIONS: &[&str] = &["js", "mjs", "cjs", "jsx", "ts", "mts", "cts", "tsx"];

/// Thread-safe allocator pool for reuse across parses
///
/// Allocators are `Send` but not `Sync`, so the pool sits behind a mutex.
pub struct AllocatorPool {
    allocators: Arc<Mutex<Vec<Allocator>>>,
}

impl AllocatorPool {
    /// Create a new allocator pool
    pub fn new(size: usize) -> Self {
        let allocators = (0..size).map(|_| Allocator::default()).collect();
        Self {
            allocators: Arc::new(Mutex::new(allocators)),
        }
    }

    /// Take an allocator from the pool
    pub fn take(&self) -> Option<Allocator> {
        self.allocators.lock().pop()
    }

    /// Return an allocator to the pool, emptied for the next parse
    pub fn return_allocator(&self, mut allocator: Allocator) {
        allocator.reset();
        self.allocators.lock().push(allocator);
    }

    pub fn available(&self) -> usize {
        self.allocators.lock().len()
    }
}

/// Parses JavaScript/TypeScript and lowers the program into module items
pub struct SourceParser {
    parse_options: ParseOptions,
    allocator_pool: AllocatorPool,
}

impl SourceParser {
    /// Create a new parser with one pooled allocator per CPU
    pub fn new() -> Self {
        Self {
            parse_options: ParseOptions::default(),
            allocator_pool: AllocatorPool::new(num_cpus::get()),
        }
    }

    /// Source type for a path, from its extension
    pub fn source_type_for(path: &Path) -> Result<SourceType> {
        SourceType::from_path(path).map_err(|_| RuleError::UnsupportedSourceType {
            path: path.to_path_buf(),
        })
    }

    /// Parse `source_text` and return its top-level items
    ///
    /// The AST is lowered while the allocator is alive, so the returned items
    /// own their data and outlive the parse.
    pub fn parse_items(
        &self,
        source_text: &str,
        source_type: SourceType,
        path: &Path,
    ) -> Result<Vec<ModuleItem>> {
        let allocator = self.allocator_pool.take().unwrap_or_default();

        let outcome = {
            let ret = Parser::new(&allocator, source_text, source_type)
                .with_options(self.parse_options.clone())
                .parse();

            if ret.panicked || !ret.errors.is_empty() {
                Err(render_diagnostics(&ret.errors))
            } else {
                Ok(lower_program(&ret.program))
            }
        };

        self.allocator_pool.return_allocator(allocator);

        match outcome {
            Ok(items) => {
                debug!(path = %path.display(), items = items.len(), "parsed module");
                Ok(items)
            }
            Err(errors) => Err(RuleError::Parse {
                path: path.to_path_buf(),
                errors,
            }),
        }
    }
}

/// One line per diagnostic; a parser that gave up silently still yields one
fn render_diagnostics(errors: &[OxcDiagnostic]) -> Vec<String> {
    if errors.is_empty() {
        return vec!["parser aborted".to_string()];
    }
    errors.iter().map(|diagnostic| diagnostic.to_string()).collect()
}

impl Default for SourceParser {
    fn default() -> Self {
        Self::new()
    }
}

/// Whether `path` looks like a source file the rule can check
///
/// Declaration files (`.d.ts` and friends) hold only ambient declarations and
/// are skipped.
pub fn is_checkable_source(path: &Path) -> bool {
    let Some(file_name) = path.file_name().and_then(|name| name.to_str()) else {
        return false;
    };
    if file_name.ends_with(".d.ts") || file_name.ends_with(".d.mts") || file_name.ends_with(".d.cts") {
        return false;
    }

    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| SOURCE_EXTENSIONS.contains(&ext))
        .unwrap_or(false)
}
