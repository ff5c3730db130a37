//! Union declaration builder.

use indexmap::IndexMap;

use crate::render::{Render, enclose};
use crate::stat::Stat;
use crate::structs::member_block;
use crate::ty::CType;
use crate::val::{IntoVal, Val};
use crate::vars::Var;

/// Builder for a C union definition. Anonymous unions render their
/// member block inline wherever the type is used.
#[derive(Debug, Clone, PartialEq)]
pub struct UnionDecl {
    name: Option<String>,
    members: IndexMap<String, CType>,
}

impl UnionDecl {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            members: IndexMap::new(),
        }
    }

    pub fn anonymous() -> Self {
        Self {
            name: None,
            members: IndexMap::new(),
        }
    }

    /// Append a member. Declaration order is preserved.
    pub fn member(mut self, name: impl Into<String>, ty: CType) -> Self {
        self.members.insert(name.into(), ty);
        self
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn members(&self) -> &IndexMap<String, CType> {
        &self.members
    }

    /// The reference type for this union. Anonymous unions carry their
    /// members so the inline member block can render.
    pub fn ty(&self) -> CType {
        CType::Union {
            name: self.name.clone(),
            members: self.members.clone(),
            qualifiers: Vec::new(),
        }
    }

    /// The full definition statement, terminal semicolon included.
    pub fn declare(&self) -> String {
        let keyword = match &self.name {
            Some(n) => format!("union {n}"),
            None => "union".to_string(),
        };
        format!("{keyword}{};", enclose(&member_block(&self.members)))
    }

    /// A variable of this union type with member-type inference.
    pub fn var(&self, name: impl Into<String>) -> Var {
        Var::with_members(name, self.ty(), self.members.clone())
    }

    /// Declare and initialize the first member with a compound literal.
    pub fn init(
        &self,
        name: impl Into<String>,
        values: impl IntoIterator<Item = impl IntoVal>,
    ) -> Stat {
        Stat::var_init(name, self.ty(), Val::init_list(values, self.ty()))
    }

    /// Declare and initialize a chosen member by designator.
    pub fn init_designated(
        &self,
        name: impl Into<String>,
        fields: impl IntoIterator<Item = (impl Into<String>, impl IntoVal)>,
    ) -> Stat {
        Stat::var_init(name, self.ty(), Val::designated(fields, self.ty()))
    }
}

impl Render for UnionDecl {
    fn render(&self) -> String {
        self.declare()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn value() -> UnionDecl {
        UnionDecl::new("value")
            .member("i", CType::int())
            .member("f", CType::float())
    }

    #[test]
    fn test_named_union_declare() {
        assert_eq!(value().declare(), "union value\n{\nint i;\nfloat f;\n};");
    }

    #[test]
    fn test_anonymous_union_type_renders_inline() {
        let u = UnionDecl::anonymous()
            .member("i", CType::int())
            .member("f", CType::float());
        assert_eq!(u.ty().declare(Some("u")), "union {int i;float f;} u");
    }

    #[test]
    fn test_designated_init_selects_member() {
        let s = value().init_designated("v", [("f", Val::float(1.5))]);
        assert_eq!(s.render(), "union value v={.f=1.5F};");
    }

    #[test]
    fn test_var_member_type_inference() {
        let v = value().var("v");
        assert_eq!(v.dot("f").ty(), CType::float());
        assert_eq!(v.dot("f").render(), "v.f");
    }
}
