//! Composable C source generation.
//!
//! Build C programs as trees of typed values and statements, then render
//! them to compact single-expression-per-line C text. The node model lives
//! in `cquill-ast` and is re-exported here in full; this crate adds
//! translation-unit assembly ([`Program`]), pre-declared libc signatures
//! ([`bindings`]), and compile-command construction ([`CompileOptions`]).
//!
//! ```
//! use cquill::{Program, Val, bindings::stdio};
//!
//! let text = Program::new()
//!     .include(stdio::HEADER)
//!     .stat(stdio::puts().call([Val::str("hello, world")]))
//!     .build();
//! assert_eq!(
//!     text,
//!     "#include <stdio.h>\nint main(void)\n{\nputs(\"hello, world\");\n}"
//! );
//! ```

pub mod bindings;
mod cc;
mod error;
mod program;

pub use cc::CompileOptions;
pub use cquill_ast::*;
pub use error::{Error, Result};
pub use program::{Include, Program};
