//! Pre-declared signatures for a small libc subset.
//!
//! Each module covers one header and exposes its include name as
//! `HEADER` plus one constructor per function. The constructors return
//! plain [`FuncDecl`](cquill_ast::FuncDecl) values, so calls built from
//! them carry the correct return type.
//!
//! ```
//! use cquill::{Program, Val, bindings::stdio};
//!
//! let out = Program::new()
//!     .include(stdio::HEADER)
//!     .stat(stdio::puts().call([Val::str("hello")]))
//!     .build();
//! assert_eq!(out, "#include <stdio.h>\nint main(void)\n{\nputs(\"hello\");\n}");
//! ```

pub mod stdio;
pub mod stdlib;
pub mod string;

use cquill_ast::FuncDecl;

use crate::error::{Error, Result};

/// Look up a binding by function name across every module.
pub fn lookup(name: &str) -> Result<FuncDecl> {
    let decl = match name {
        "puts" => stdio::puts(),
        "putchar" => stdio::putchar(),
        "printf" => stdio::printf(),
        "scanf" => stdio::scanf(),
        "getchar" => stdio::getchar(),
        "malloc" => stdlib::malloc(),
        "calloc" => stdlib::calloc(),
        "realloc" => stdlib::realloc(),
        "free" => stdlib::free(),
        "exit" => stdlib::exit(),
        "strlen" => string::strlen(),
        "strcpy" => string::strcpy(),
        "strncpy" => string::strncpy(),
        "strcmp" => string::strcmp(),
        "strcat" => string::strcat(),
        "memcpy" => string::memcpy(),
        "memset" => string::memset(),
        "memmove" => string::memmove(),
        other => return Err(Error::UnknownBinding(other.to_string())),
    };
    Ok(decl)
}

/// The header a binding lives in, if the name is known.
pub fn header_of(name: &str) -> Result<&'static str> {
    let header = match name {
        "puts" | "putchar" | "printf" | "scanf" | "getchar" => stdio::HEADER,
        "malloc" | "calloc" | "realloc" | "free" | "exit" => stdlib::HEADER,
        "strlen" | "strcpy" | "strncpy" | "strcmp" | "strcat" | "memcpy" | "memset"
        | "memmove" => string::HEADER,
        other => return Err(Error::UnknownBinding(other.to_string())),
    };
    Ok(header)
}

pub(crate) fn const_char_ptr() -> cquill_ast::CType {
    use cquill_ast::{CType, Qualifier};
    CType::pointer(CType::qualified("char", [Qualifier::Const]))
}

pub(crate) fn const_void_ptr() -> cquill_ast::CType {
    use cquill_ast::{CType, Qualifier};
    CType::pointer(CType::qualified("void", [Qualifier::Const]))
}
