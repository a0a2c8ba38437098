//! Crash reports and per-thread context tracking.
//!
//! Install the panic hook at startup:
//!
//! ```ignore
//! use testgen::observability::install_panic_hook;
//!
//! fn main() {
//!     install_panic_hook();
//! }
//! ```
//!
//! Stage workers record what they are doing:
//!
//! ```ignore
//! let _phase = set_phase(GenerationPhase::Read);
//! let _file = set_current_file(&path);
//! // a panic here reports stage `read` and the file
//! ```

pub mod context;
pub mod panic_hook;

pub use context::{
    add_classes_found, get_current_context, get_progress, increment_written, set_current_class,
    set_current_file, set_phase, ContextGuard, GenerationContext, GenerationPhase,
};
pub use panic_hook::{install_panic_hook, panic_message};
