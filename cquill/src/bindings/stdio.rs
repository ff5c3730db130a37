//! Bindings for `<stdio.h>`.

use cquill_ast::{CType, FuncDecl};

use super::const_char_ptr;

pub const HEADER: &str = "stdio.h";

/// `int puts(const char* s)`
pub fn puts() -> FuncDecl {
    FuncDecl::new("puts", CType::int()).param("s", const_char_ptr())
}

/// `int putchar(int c)`
pub fn putchar() -> FuncDecl {
    FuncDecl::new("putchar", CType::int()).param("c", CType::int())
}

/// `int printf(const char* format,...)`
pub fn printf() -> FuncDecl {
    FuncDecl::new("printf", CType::int())
        .param("format", const_char_ptr())
        .variadic()
}

/// `int scanf(const char* format,...)`
pub fn scanf() -> FuncDecl {
    FuncDecl::new("scanf", CType::int())
        .param("format", const_char_ptr())
        .variadic()
}

/// `int getchar(void)`
pub fn getchar() -> FuncDecl {
    FuncDecl::new("getchar", CType::int())
}
