//! C syntax tree builders for cquill.
//!
//! This crate is the core of the cquill source generator: a set of
//! immutable, composable node types that represent a practical subset of
//! C syntax, plus the rendering rules that turn a node tree into
//! syntactically correct C text.
//!
//! # Module Organization
//!
//! - [`ty`] - C type descriptors and declarator composition ([`CType`])
//! - [`val`] - Expression nodes and operator constructors ([`Val`])
//! - [`stat`] - Statement nodes, chunking and block formatting ([`Stat`])
//! - [`render`] - The [`Render`] trait and the `chunk`/`block` joiners
//! - [`structs`], [`unions`], [`enums`], [`fns`], [`vars`] - Declaration
//!   wrappers composing types and expressions into named declarations
//!
//! # Example
//!
//! ```
//! use cquill_ast::{CType, FuncDecl, Render, Stat, Val};
//!
//! let add = FuncDecl::new("add", CType::int())
//!     .param("a", CType::int())
//!     .param("b", CType::int());
//!
//! let def = add.define(|params| vec![Stat::ret(params[0].add(&params[1]))]);
//! assert_eq!(def.render(), "int add(int a,int b)\n{\nreturn a+b;\n}");
//! ```
//!
//! Every node is immutable once constructed: chaining operations return
//! new nodes, so subtrees can be shared and reused across statements, and
//! rendering the same tree twice always yields identical text.

pub mod enums;
pub mod fns;
pub mod render;
pub mod stat;
pub mod structs;
pub mod ty;
pub mod unions;
pub mod val;
pub mod vars;

pub use enums::EnumDecl;
pub use fns::{FuncDecl, FuncDef};
pub use render::{Render, block, chunk};
pub use stat::{IntoStat, Stat, Switch, SwitchArm};
pub use structs::StructDecl;
pub use ty::{CType, Qualifier};
pub use unions::UnionDecl;
pub use val::{BinOp, IntoVal, MemberKind, MemoryOp, UnaryOp, Val};
pub use vars::Var;
