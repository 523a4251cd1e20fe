//! Tools domain module.
//!
//! The three MCP tools the server exposes, plus the catalog and router that
//! advertise and dispatch them.
//!
//! ## Architecture
//!
//! - `definitions/` - Individual tool implementations (one file per tool)
//! - `registry.rs` - Fixed tool catalog (names and descriptors)
//! - `router.rs` - ToolRouter builder wiring each tool to the epoch client
//!
//! ## Adding a New Tool
//!
//! 1. Create a new file in `definitions/` (e.g., `my_tool.rs`)
//! 2. Define params, execute(), to_tool() and create_route()
//! 3. Export in `definitions/mod.rs`
//! 4. Add route in `router.rs` using `with_route()`
//! 5. List it in `registry.rs`

pub mod definitions;
mod registry;
pub mod router;

pub use registry::ToolRegistry;
pub use router::build_tool_router;
