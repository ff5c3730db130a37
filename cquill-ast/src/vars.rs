//! Variable builder with member-aware access helpers.

use indexmap::IndexMap;

use crate::render::Render;
use crate::stat::Stat;
use crate::ty::CType;
use crate::val::{IntoVal, Val};

/// A named variable of a known type.
///
/// When created through a struct/union wrapper the variable carries the
/// member table, so `dot`/`arrow` tag the produced node with the
/// member's own declared type for chained operations. The table is
/// advisory; an unknown member still renders, tagged with the
/// placeholder type.
#[derive(Debug, Clone, PartialEq)]
pub struct Var {
    name: String,
    ty: CType,
    members: IndexMap<String, CType>,
}

impl Var {
    pub fn new(name: impl Into<String>, ty: CType) -> Self {
        Self {
            name: name.into(),
            ty,
            members: IndexMap::new(),
        }
    }

    pub(crate) fn with_members(
        name: impl Into<String>,
        ty: CType,
        members: IndexMap<String, CType>,
    ) -> Self {
        Self {
            name: name.into(),
            ty,
            members,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn ty(&self) -> &CType {
        &self.ty
    }

    /// This variable as a name-reference expression.
    pub fn val(&self) -> Val {
        Val::name(&self.name, self.ty.clone())
    }

    /// The bare declaration statement text: `int x;`.
    pub fn declare(&self) -> String {
        format!("{};", self.ty.declare(Some(&self.name)))
    }

    /// Declaration plus initializer: `int x=5;`.
    pub fn init(&self, value: impl IntoVal) -> Stat {
        Stat::var_init(&self.name, self.ty.clone(), value)
    }

    fn member_ty(&self, field: &str) -> CType {
        self.members.get(field).cloned().unwrap_or_else(CType::any)
    }

    /// `name.field`, tagged with the member's declared type.
    pub fn dot(&self, field: impl Into<String>) -> Val {
        let field = field.into();
        let ty = self.member_ty(&field);
        Val::Member {
            object: Box::new(self.val()),
            kind: crate::val::MemberKind::Dot(field),
            ty,
        }
    }

    /// `name->field`, tagged with the member's declared type.
    pub fn arrow(&self, field: impl Into<String>) -> Val {
        let field = field.into();
        let ty = self.member_ty(&field);
        Val::Member {
            object: Box::new(self.val()),
            kind: crate::val::MemberKind::Arrow(field),
            ty,
        }
    }

    /// `name[index]`, tagged with the element type when known.
    pub fn index(&self, index: impl IntoVal) -> Val {
        self.val().index(index)
    }
}

impl Render for Var {
    fn render(&self) -> String {
        self.declare()
    }
}
