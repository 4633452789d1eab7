//! A small in-memory QIR module model.
//!
//! [`Module`] is a shared handle: clones refer to the same module, which is
//! how a visitor keeps emitting into the handle owned by a circuit module.
//! Handles are `Rc`-based and therefore confined to one thread; convert
//! circuits in parallel by giving each thread its own [`Context`].
//!
//! [`Module::ir`] renders LLVM textual IR with typed pointers, matching what
//! QIR base-profile tooling expects.

pub mod builder;
pub mod context;
pub mod error;
pub mod module;
mod render;
pub mod types;

pub use builder::Builder;
pub use context::Context;
pub use error::{IrError, Result};
pub use module::{Attribute, FlagValue, Module, ModuleFlag};
pub use types::{Type, Value};
