//! Bindings for `<string.h>`.

use cquill_ast::{CType, FuncDecl};

use super::{const_char_ptr, const_void_ptr};

pub const HEADER: &str = "string.h";

/// `size_t strlen(const char* s)`
pub fn strlen() -> FuncDecl {
    FuncDecl::new("strlen", CType::size_t()).param("s", const_char_ptr())
}

/// `char* strcpy(char* dest,const char* src)`
pub fn strcpy() -> FuncDecl {
    FuncDecl::new("strcpy", CType::pointer(CType::char_()))
        .param("dest", CType::pointer(CType::char_()))
        .param("src", const_char_ptr())
}

/// `char* strncpy(char* dest,const char* src,size_t n)`
pub fn strncpy() -> FuncDecl {
    FuncDecl::new("strncpy", CType::pointer(CType::char_()))
        .param("dest", CType::pointer(CType::char_()))
        .param("src", const_char_ptr())
        .param("n", CType::size_t())
}

/// `int strcmp(const char* a,const char* b)`
pub fn strcmp() -> FuncDecl {
    FuncDecl::new("strcmp", CType::int())
        .param("a", const_char_ptr())
        .param("b", const_char_ptr())
}

/// `char* strcat(char* dest,const char* src)`
pub fn strcat() -> FuncDecl {
    FuncDecl::new("strcat", CType::pointer(CType::char_()))
        .param("dest", CType::pointer(CType::char_()))
        .param("src", const_char_ptr())
}

/// `void* memcpy(void* dest,const void* src,size_t n)`
pub fn memcpy() -> FuncDecl {
    FuncDecl::new("memcpy", CType::pointer(CType::void()))
        .param("dest", CType::pointer(CType::void()))
        .param("src", const_void_ptr())
        .param("n", CType::size_t())
}

/// `void* memset(void* s,int c,size_t n)`
pub fn memset() -> FuncDecl {
    FuncDecl::new("memset", CType::pointer(CType::void()))
        .param("s", CType::pointer(CType::void()))
        .param("c", CType::int())
        .param("n", CType::size_t())
}

/// `void* memmove(void* dest,const void* src,size_t n)`
pub fn memmove() -> FuncDecl {
    FuncDecl::new("memmove", CType::pointer(CType::void()))
        .param("dest", CType::pointer(CType::void()))
        .param("src", const_void_ptr())
        .param("n", CType::size_t())
}
