//! Bindings for `<stdlib.h>`.

use cquill_ast::{CType, FuncDecl};

pub const HEADER: &str = "stdlib.h";

/// `void* malloc(size_t size)`
pub fn malloc() -> FuncDecl {
    FuncDecl::new("malloc", CType::pointer(CType::void())).param("size", CType::size_t())
}

/// `void* calloc(size_t count,size_t size)`
pub fn calloc() -> FuncDecl {
    FuncDecl::new("calloc", CType::pointer(CType::void()))
        .param("count", CType::size_t())
        .param("size", CType::size_t())
}

/// `void* realloc(void* ptr,size_t size)`
pub fn realloc() -> FuncDecl {
    FuncDecl::new("realloc", CType::pointer(CType::void()))
        .param("ptr", CType::pointer(CType::void()))
        .param("size", CType::size_t())
}

/// `void free(void* ptr)`
pub fn free() -> FuncDecl {
    FuncDecl::new("free", CType::void()).param("ptr", CType::pointer(CType::void()))
}

/// `void exit(int status)`
pub fn exit() -> FuncDecl {
    FuncDecl::new("exit", CType::void()).param("status", CType::int())
}
