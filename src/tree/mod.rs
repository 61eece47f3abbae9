//! Directory tree rendering
//!
//! `TreeRenderer` walks a directory depth-first and renders each non-excluded
//! entry as a line with `├── ` / `└── ` connectors, nesting children under
//! `│   ` / `    ` prefix units.

mod config;
mod renderer;
mod traversal;

// Re-export public types
pub use config::{DEFAULT_EXCLUDES, RenderConfig};
pub use renderer::TreeRenderer;
pub use traversal::{
    BRANCH, Entry, LAST_BRANCH, PIPE_INDENT, SPACE_INDENT, Traversal, child_prefix, connector,
    display_name,
};
