//! C statement nodes, chunking and block formatting.
//!
//! Each statement kind fully determines its own terminator: expression,
//! return, declaration, and init statements append `;`; loops,
//! conditionals, and definitions end with a closing-brace block.
//! [`chunk`](crate::render::chunk) joins statement renderings with
//! newlines and [`block`](crate::render::block) wraps a chunk in braces
//! on their own lines.
//!
//! `if`/`else if`/`else` are three independent statement nodes joined by
//! `chunk` in whatever order the caller assembles them. An `else`
//! emitted without a preceding `if` is a caller error and is not
//! detected.

use crate::enums::EnumDecl;
use crate::fns::{FuncDecl, FuncDef};
use crate::render::{Render, block, enclose};
use crate::structs::StructDecl;
use crate::ty::CType;
use crate::unions::UnionDecl;
use crate::val::{IntoVal, Val};
use crate::vars::Var;

/// A C statement node.
#[derive(Debug, Clone, PartialEq)]
pub enum Stat {
    /// `value;`
    Expr(Val),
    /// `return;` / `return value;`
    Return(Option<Val>),
    /// `int x;`
    VarDecl { name: String, ty: CType },
    /// `int x=5;`
    VarInit {
        name: String,
        ty: CType,
        value: Val,
    },
    While {
        cond: Val,
        body: Vec<Stat>,
    },
    DoWhile {
        body: Vec<Stat>,
        cond: Val,
    },
    For {
        init: Option<Box<Stat>>,
        cond: Option<Val>,
        step: Option<Val>,
        body: Vec<Stat>,
    },
    If {
        cond: Val,
        body: Vec<Stat>,
    },
    ElseIf {
        cond: Val,
        body: Vec<Stat>,
    },
    Else {
        body: Vec<Stat>,
    },
    Switch {
        value: Val,
        arms: Vec<SwitchArm>,
    },
    Break,
    Continue,
    /// A full function definition.
    FuncDef(Box<FuncDef>),
    StructDef(StructDecl),
    UnionDef(UnionDecl),
    EnumDef(EnumDecl),
    /// Pre-rendered declaration text carried verbatim.
    Verbatim(String),
}

impl Stat {
    pub fn expr(v: impl IntoVal) -> Self {
        Self::Expr(v.into_val())
    }

    pub fn ret(v: impl IntoVal) -> Self {
        Self::Return(Some(v.into_val()))
    }

    pub fn ret_void() -> Self {
        Self::Return(None)
    }

    pub fn var_decl(name: impl Into<String>, ty: CType) -> Self {
        Self::VarDecl {
            name: name.into(),
            ty,
        }
    }

    pub fn var_init(name: impl Into<String>, ty: CType, value: impl IntoVal) -> Self {
        Self::VarInit {
            name: name.into(),
            ty,
            value: value.into_val(),
        }
    }

    pub fn while_(cond: impl IntoVal, body: Vec<Stat>) -> Self {
        Self::While {
            cond: cond.into_val(),
            body,
        }
    }

    pub fn do_while(body: Vec<Stat>, cond: impl IntoVal) -> Self {
        Self::DoWhile {
            body,
            cond: cond.into_val(),
        }
    }

    pub fn for_(
        init: Option<Stat>,
        cond: Option<Val>,
        step: Option<Val>,
        body: Vec<Stat>,
    ) -> Self {
        Self::For {
            init: init.map(Box::new),
            cond,
            step,
            body,
        }
    }

    pub fn if_(cond: impl IntoVal, body: Vec<Stat>) -> Self {
        Self::If {
            cond: cond.into_val(),
            body,
        }
    }

    pub fn else_if(cond: impl IntoVal, body: Vec<Stat>) -> Self {
        Self::ElseIf {
            cond: cond.into_val(),
            body,
        }
    }

    pub fn else_(body: Vec<Stat>) -> Self {
        Self::Else { body }
    }

    pub fn break_() -> Self {
        Self::Break
    }

    pub fn continue_() -> Self {
        Self::Continue
    }

    pub fn verbatim(text: impl Into<String>) -> Self {
        Self::Verbatim(text.into())
    }
}

impl Render for Stat {
    fn render(&self) -> String {
        match self {
            Self::Expr(v) => format!("{};", v.render()),
            Self::Return(None) => "return;".to_string(),
            Self::Return(Some(v)) => format!("return {};", v.render()),
            Self::VarDecl { name, ty } => format!("{};", ty.declare(Some(name))),
            Self::VarInit { name, ty, value } => {
                format!("{}={};", ty.declare(Some(name)), value.render())
            }
            Self::While { cond, body } => {
                format!("while({}){}", cond.render(), block(body))
            }
            Self::DoWhile { body, cond } => {
                format!("do{}\nwhile({});", block(body), cond.render())
            }
            Self::For {
                init,
                cond,
                step,
                body,
            } => {
                let init = match init {
                    Some(s) => s.render(),
                    None => ";".to_string(),
                };
                let cond = cond.as_ref().map(Render::render).unwrap_or_default();
                let step = step.as_ref().map(Render::render).unwrap_or_default();
                format!("for({init}{cond};{step}){}", block(body))
            }
            Self::If { cond, body } => format!("if({}){}", cond.render(), block(body)),
            Self::ElseIf { cond, body } => {
                format!("else if({}){}", cond.render(), block(body))
            }
            Self::Else { body } => format!("else{}", block(body)),
            Self::Switch { value, arms } => {
                let body = arms
                    .iter()
                    .map(SwitchArm::render_arm)
                    .collect::<Vec<_>>()
                    .join("\n");
                format!("switch({}){}", value.render(), enclose(&body))
            }
            Self::Break => "break;".to_string(),
            Self::Continue => "continue;".to_string(),
            Self::FuncDef(def) => def.render(),
            Self::StructDef(decl) => decl.declare(),
            Self::UnionDef(decl) => decl.declare(),
            Self::EnumDef(decl) => decl.declare(),
            Self::Verbatim(text) => text.clone(),
        }
    }
}

/// One arm of a switch statement.
#[derive(Debug, Clone, PartialEq)]
pub enum SwitchArm {
    Case(Val, Vec<Stat>),
    Default(Vec<Stat>),
}

impl SwitchArm {
    fn render_arm(&self) -> String {
        let (label, body) = match self {
            Self::Case(v, body) => (format!("case {}:", v.render()), body),
            Self::Default(body) => ("default:".to_string(), body),
        };
        if body.is_empty() {
            label
        } else {
            format!("{label}\n{}", crate::render::chunk(body))
        }
    }
}

/// Fluent builder for switch statements. Arms accumulate in call order.
///
/// ```
/// use cquill_ast::{CType, Render, Stat, Switch, Val};
///
/// let s = Switch::new(Val::name("c", CType::int()))
///     .case(1, vec![Stat::break_()])
///     .default(vec![Stat::ret(0)])
///     .finish();
/// assert_eq!(
///     s.render(),
///     "switch(c)\n{\ncase 1:\nbreak;\ndefault:\nreturn 0;\n}"
/// );
/// ```
#[derive(Debug, Clone)]
pub struct Switch {
    value: Val,
    arms: Vec<SwitchArm>,
}

impl Switch {
    pub fn new(value: impl IntoVal) -> Self {
        Self {
            value: value.into_val(),
            arms: Vec::new(),
        }
    }

    pub fn case(mut self, value: impl IntoVal, body: Vec<Stat>) -> Self {
        self.arms.push(SwitchArm::Case(value.into_val(), body));
        self
    }

    pub fn default(mut self, body: Vec<Stat>) -> Self {
        self.arms.push(SwitchArm::Default(body));
        self
    }

    pub fn finish(self) -> Stat {
        Stat::Switch {
            value: self.value,
            arms: self.arms,
        }
    }
}

/// Normalizing conversion from raw arguments into statements.
///
/// Expressions and host primitives become expression statements;
/// declaration-bearing builders become their declaration or definition
/// text.
pub trait IntoStat {
    fn into_stat(self) -> Stat;
}

impl IntoStat for Stat {
    fn into_stat(self) -> Stat {
        self
    }
}

impl IntoStat for Val {
    fn into_stat(self) -> Stat {
        Stat::Expr(self)
    }
}

impl IntoStat for &Val {
    fn into_stat(self) -> Stat {
        Stat::Expr(self.clone())
    }
}

impl IntoStat for i32 {
    fn into_stat(self) -> Stat {
        Stat::Expr(self.into_val())
    }
}

impl IntoStat for i64 {
    fn into_stat(self) -> Stat {
        Stat::Expr(self.into_val())
    }
}

impl IntoStat for f64 {
    fn into_stat(self) -> Stat {
        Stat::Expr(self.into_val())
    }
}

impl IntoStat for bool {
    fn into_stat(self) -> Stat {
        Stat::Expr(self.into_val())
    }
}

impl IntoStat for &str {
    fn into_stat(self) -> Stat {
        Stat::Expr(self.into_val())
    }
}

/// A defined function becomes its full definition, not a call reference.
impl IntoStat for FuncDef {
    fn into_stat(self) -> Stat {
        Stat::FuncDef(Box::new(self))
    }
}

/// An undefined function becomes its prototype.
impl IntoStat for &FuncDecl {
    fn into_stat(self) -> Stat {
        Stat::Verbatim(self.declare())
    }
}

impl IntoStat for StructDecl {
    fn into_stat(self) -> Stat {
        Stat::StructDef(self)
    }
}

impl IntoStat for UnionDecl {
    fn into_stat(self) -> Stat {
        Stat::UnionDef(self)
    }
}

impl IntoStat for EnumDecl {
    fn into_stat(self) -> Stat {
        Stat::EnumDef(self)
    }
}

impl IntoStat for &Var {
    fn into_stat(self) -> Stat {
        Stat::VarDecl {
            name: self.name().to_string(),
            ty: self.ty().clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::chunk;

    fn cond(a: &str, b: &str) -> Val {
        Val::name(a, CType::int()).gt(Val::name(b, CType::int()))
    }

    #[test]
    fn test_expression_statement_terminator() {
        let s = Stat::expr(Val::call("puts", [Val::str("abc")], CType::int()));
        assert_eq!(s.render(), "puts(\"abc\");");
    }

    #[test]
    fn test_return_always_ends_in_semicolon() {
        assert_eq!(Stat::ret_void().render(), "return;");
        assert_eq!(Stat::ret(0).render(), "return 0;");
    }

    #[test]
    fn test_var_decl_and_init() {
        assert_eq!(Stat::var_decl("x", CType::int()).render(), "int x;");
        assert_eq!(Stat::var_init("x", CType::int(), 5).render(), "int x=5;");
    }

    #[test]
    fn test_while_has_no_trailing_semicolon() {
        let s = Stat::while_(cond("a", "b"), vec![Stat::ret(0)]);
        assert_eq!(s.render(), "while(a>b)\n{\nreturn 0;\n}");
    }

    #[test]
    fn test_do_while() {
        let s = Stat::do_while(vec![Stat::expr(Val::name("x", CType::int()).post_inc())], cond("a", "b"));
        assert_eq!(s.render(), "do\n{\nx++;\n}\nwhile(a>b);");
    }

    #[test]
    fn test_for_loop() {
        let i = Val::name("i", CType::int());
        let s = Stat::for_(
            Some(Stat::var_init("i", CType::int(), 0)),
            Some(i.lt(10)),
            Some(i.post_inc()),
            vec![Stat::break_()],
        );
        assert_eq!(s.render(), "for(int i=0;i<10;i++)\n{\nbreak;\n}");
    }

    #[test]
    fn test_for_loop_empty_clauses() {
        let s = Stat::for_(None, None, None, vec![Stat::continue_()]);
        assert_eq!(s.render(), "for(;;)\n{\ncontinue;\n}");
    }

    #[test]
    fn test_conditional_chain_is_concatenation_of_parts() {
        let a = Val::name("a", CType::int());
        let b = Val::name("b", CType::int());
        let first = Stat::if_(a.gt(&b), vec![Stat::ret(Val::bool_(false))]);
        let second = Stat::else_if(b.gt(&a), vec![Stat::ret(Val::bool_(true))]);
        let third = Stat::else_(vec![Stat::ret(Val::name("NULL", CType::any()))]);

        let joined = chunk(&[first.clone(), second.clone(), third.clone()]);
        let expected = format!("{}\n{}\n{}", first.render(), second.render(), third.render());
        assert_eq!(joined, expected);
        assert_eq!(
            joined,
            "if(a>b)\n{\nreturn false;\n}\nelse if(b>a)\n{\nreturn true;\n}\nelse\n{\nreturn NULL;\n}"
        );
    }

    #[test]
    fn test_switch_arms_render_in_order() {
        let s = Switch::new(Val::name("c", CType::int()))
            .case(1, vec![Stat::ret(1)])
            .case(2, vec![Stat::ret(2)])
            .default(vec![Stat::ret(0)])
            .finish();
        assert_eq!(
            s.render(),
            "switch(c)\n{\ncase 1:\nreturn 1;\ncase 2:\nreturn 2;\ndefault:\nreturn 0;\n}"
        );
    }

    #[test]
    fn test_primitive_normalization() {
        assert_eq!(5.into_stat().render(), "5;");
        assert_eq!("23L".into_stat().render(), "23L;");
    }

    #[test]
    fn test_nested_block_starts_on_own_line() {
        let inner = Stat::if_(cond("a", "b"), vec![Stat::ret(1)]);
        let outer = Stat::while_(Val::bool_(true), vec![inner]);
        assert_eq!(
            outer.render(),
            "while(true)\n{\nif(a>b)\n{\nreturn 1;\n}\n}"
        );
    }
}
