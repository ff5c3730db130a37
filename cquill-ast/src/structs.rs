//! Struct declaration builder.

use indexmap::IndexMap;

use crate::render::{Render, enclose};
use crate::stat::Stat;
use crate::ty::CType;
use crate::val::{IntoVal, Val};
use crate::vars::Var;

/// Builder for a C struct definition.
///
/// Members keep insertion order in the rendered member block; the table
/// is never sorted.
///
/// ```
/// use cquill_ast::{CType, StructDecl};
///
/// let point = StructDecl::new("point")
///     .member("x", CType::float())
///     .member("y", CType::float());
/// assert_eq!(point.declare(), "struct point\n{\nfloat x;\nfloat y;\n};");
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct StructDecl {
    name: String,
    members: IndexMap<String, CType>,
}

impl StructDecl {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            members: IndexMap::new(),
        }
    }

    /// Append a member. Declaration order is preserved.
    pub fn member(mut self, name: impl Into<String>, ty: CType) -> Self {
        self.members.insert(name.into(), ty);
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn members(&self) -> &IndexMap<String, CType> {
        &self.members
    }

    /// The reference type for this struct (`struct name`).
    pub fn ty(&self) -> CType {
        CType::struct_ref(&self.name)
    }

    /// The full definition statement, terminal semicolon included.
    pub fn declare(&self) -> String {
        format!("struct {}{};", self.name, enclose(&member_block(&self.members)))
    }

    /// A variable of this struct type whose `dot`/`arrow` helpers infer
    /// member types from this member table.
    pub fn var(&self, name: impl Into<String>) -> Var {
        Var::with_members(name, self.ty(), self.members.clone())
    }

    /// Declare and initialize a variable with a compound literal:
    /// `struct point p={1,2};`.
    pub fn init(
        &self,
        name: impl Into<String>,
        values: impl IntoIterator<Item = impl IntoVal>,
    ) -> Stat {
        Stat::var_init(name, self.ty(), Val::init_list(values, self.ty()))
    }

    /// Declare and initialize with a designated initializer:
    /// `struct point p={.x=1,.y=2};`. String member values must be
    /// passed as [`Val::str`] so they render quoted.
    pub fn init_designated(
        &self,
        name: impl Into<String>,
        fields: impl IntoIterator<Item = (impl Into<String>, impl IntoVal)>,
    ) -> Stat {
        Stat::var_init(name, self.ty(), Val::designated(fields, self.ty()))
    }
}

impl Render for StructDecl {
    fn render(&self) -> String {
        self.declare()
    }
}

/// Render a member table as `;`-terminated declarators, one per line.
pub(crate) fn member_block(members: &IndexMap<String, CType>) -> String {
    members
        .iter()
        .map(|(name, ty)| format!("{};", ty.declare(Some(name))))
        .collect::<Vec<_>>()
        .join("\n")
}
