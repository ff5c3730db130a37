//! Translation-unit assembly.
//!
//! [`Program`] collects include directives, embedded declarations, and a
//! `main` body, and concatenates their renderings with the same `chunk`
//! joiner the statement model uses. It owns no formatting rules of its
//! own beyond the include templates.

use cquill_ast::{CType, FuncDecl, IntoStat, Render, Stat, chunk};

/// An include directive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Include {
    /// `#include <name>`
    System(String),
    /// `#include "name"`
    Local(String),
}

impl Render for Include {
    fn render(&self) -> String {
        match self {
            Self::System(name) => format!("#include <{name}>"),
            Self::Local(name) => format!("#include \"{name}\""),
        }
    }
}

/// Builder for a complete translation unit.
///
/// ```
/// use cquill::{CType, FuncDecl, Program, Val};
///
/// let puts = FuncDecl::new("puts", CType::int())
///     .param("s", CType::pointer(CType::char_()));
/// let text = Program::new()
///     .include("stdio.h")
///     .stat(puts.call([Val::str("abc")]))
///     .build();
/// assert_eq!(text, "#include <stdio.h>\nint main(void)\n{\nputs(\"abc\");\n}");
/// ```
#[derive(Debug, Clone, Default)]
pub struct Program {
    includes: Vec<Include>,
    embeds: Vec<String>,
    main_body: Vec<Stat>,
}

impl Program {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a system include (`#include <name>`). Duplicates are dropped,
    /// first occurrence wins the position.
    pub fn include(self, name: impl Into<String>) -> Self {
        self.push_include(Include::System(name.into()))
    }

    /// Add a local include (`#include "name"`).
    pub fn include_local(self, name: impl Into<String>) -> Self {
        self.push_include(Include::Local(name.into()))
    }

    fn push_include(mut self, include: Include) -> Self {
        if !self.includes.contains(&include) {
            self.includes.push(include);
        }
        self
    }

    /// Embed a rendered declaration or definition before `main`.
    pub fn embed(mut self, decl: impl Render) -> Self {
        self.embeds.push(decl.render());
        self
    }

    /// Append a statement to the `main` body.
    pub fn stat(mut self, stat: impl IntoStat) -> Self {
        self.main_body.push(stat.into_stat());
        self
    }

    /// Replace the `main` body wholesale.
    pub fn main(mut self, body: Vec<Stat>) -> Self {
        self.main_body = body;
        self
    }

    /// Render the complete translation unit.
    pub fn build(&self) -> String {
        let main = FuncDecl::new("main", CType::int());
        let body = self.main_body.clone();
        let main_text = main.define(move |_| body).render();

        let mut parts: Vec<String> = self.includes.iter().map(Render::render).collect();
        parts.extend(self.embeds.iter().cloned());
        parts.push(main_text);
        chunk(&parts)
    }
}
