//! Enum declaration builder.

use crate::render::{Render, enclose};
use crate::ty::CType;
use crate::val::Val;
use crate::vars::Var;

/// Builder for a C enum definition.
///
/// ```
/// use cquill_ast::EnumDecl;
///
/// let color = EnumDecl::new("color")
///     .variant("RED")
///     .variant_value("GREEN", 2)
///     .variant("BLUE");
/// assert_eq!(color.declare(), "enum color\n{\nRED,\nGREEN=2,\nBLUE\n};");
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct EnumDecl {
    name: String,
    variants: Vec<(String, Option<i64>)>,
}

impl EnumDecl {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            variants: Vec::new(),
        }
    }

    /// Append a variant with an implicit value.
    pub fn variant(mut self, name: impl Into<String>) -> Self {
        self.variants.push((name.into(), None));
        self
    }

    /// Append a variant with an explicit value (`NAME=value`).
    pub fn variant_value(mut self, name: impl Into<String>, value: i64) -> Self {
        self.variants.push((name.into(), Some(value)));
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// The reference type for this enum (`enum name`).
    pub fn ty(&self) -> CType {
        CType::enum_ref(&self.name)
    }

    /// The full definition statement, terminal semicolon included.
    pub fn declare(&self) -> String {
        let body = self
            .variants
            .iter()
            .map(|(name, value)| match value {
                Some(v) => format!("{name}={v}"),
                None => name.clone(),
            })
            .collect::<Vec<_>>()
            .join(",\n");
        format!("enum {}{};", self.name, enclose(&body))
    }

    /// A variable of this enum type.
    pub fn var(&self, name: impl Into<String>) -> Var {
        Var::new(name, self.ty())
    }

    /// A reference to one of the declared constants, tagged with this
    /// enum's type.
    pub fn val(&self, variant: impl Into<String>) -> Val {
        Val::name(variant, self.ty())
    }
}

impl Render for EnumDecl {
    fn render(&self) -> String {
        self.declare()
    }
}
