//! Function declaration and definition builders.

use indexmap::IndexMap;

use crate::render::{Render, block};
use crate::stat::Stat;
use crate::ty::CType;
use crate::val::{IntoVal, Val};

/// Builder for a C function signature.
///
/// Parameters keep declaration order. [`FuncDecl::call`] produces a
/// call-expression node tagged with the declared return type, and
/// [`FuncDecl::define`] produces the full definition, handing the body
/// callback one [`Val`] per declared parameter.
///
/// ```
/// use cquill_ast::{CType, FuncDecl, Render, Stat};
///
/// let add = FuncDecl::new("add", CType::int())
///     .param("a", CType::int())
///     .param("b", CType::int());
/// assert_eq!(add.declare(), "int add(int a,int b);");
///
/// let def = add.define(|p| vec![Stat::ret(p[0].add(&p[1]))]);
/// assert_eq!(def.render(), "int add(int a,int b)\n{\nreturn a+b;\n}");
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct FuncDecl {
    name: String,
    ret: CType,
    params: IndexMap<String, CType>,
    variadic: bool,
}

impl FuncDecl {
    pub fn new(name: impl Into<String>, ret: CType) -> Self {
        Self {
            name: name.into(),
            ret,
            params: IndexMap::new(),
            variadic: false,
        }
    }

    /// Append a parameter. Declaration order is preserved.
    pub fn param(mut self, name: impl Into<String>, ty: CType) -> Self {
        self.params.insert(name.into(), ty);
        self
    }

    /// Mark the signature variadic (`,...` after the last parameter).
    pub fn variadic(mut self) -> Self {
        self.variadic = true;
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn ret(&self) -> &CType {
        &self.ret
    }

    /// The function type descriptor for this signature.
    pub fn fn_ty(&self) -> CType {
        let params = self
            .params
            .iter()
            .map(|(name, ty)| (ty.clone(), name.clone()))
            .collect::<Vec<_>>();
        if self.variadic {
            CType::func_variadic(self.ret.clone(), params)
        } else {
            CType::func(self.ret.clone(), params)
        }
    }

    /// The prototype without its terminator: `int add(int a,int b)`.
    pub fn proto(&self) -> String {
        self.fn_ty().declare(Some(&self.name))
    }

    /// The prototype statement: `int add(int a,int b);`.
    pub fn declare(&self) -> String {
        format!("{};", self.proto())
    }

    /// A call expression, tagged with the declared return type. The
    /// argument count is not validated against the signature.
    pub fn call(&self, args: impl IntoIterator<Item = impl IntoVal>) -> Val {
        Val::call(&self.name, args, self.ret.clone())
    }

    /// The declared parameters as typed name references, in order.
    pub fn param_vals(&self) -> Vec<Val> {
        self.params
            .iter()
            .map(|(name, ty)| Val::name(name, ty.clone()))
            .collect()
    }

    /// Build the full definition. The callback receives one bound
    /// expression per declared parameter and returns the body.
    pub fn define(&self, body: impl FnOnce(&[Val]) -> Vec<Stat>) -> FuncDef {
        let params = self.param_vals();
        FuncDef {
            decl: self.clone(),
            body: body(&params),
        }
    }
}

impl Render for FuncDecl {
    fn render(&self) -> String {
        self.declare()
    }
}

/// A function definition: a signature plus its body statements.
#[derive(Debug, Clone, PartialEq)]
pub struct FuncDef {
    decl: FuncDecl,
    body: Vec<Stat>,
}

impl FuncDef {
    pub fn decl(&self) -> &FuncDecl {
        &self.decl
    }

    pub fn body(&self) -> &[Stat] {
        &self.body
    }
}

impl Render for FuncDef {
    fn render(&self) -> String {
        format!("{}{}", self.decl.proto(), block(&self.body))
    }
}
