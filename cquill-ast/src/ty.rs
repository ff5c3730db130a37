//! C type descriptors and declarator composition.
//!
//! [`CType`] is a closed sum over the type kinds the generator supports.
//! [`CType::declare`] produces the C declarator for a type, optionally
//! binding a name, by structural recursion: each kind decides where the
//! name and star tokens attach, which reproduces C's right-to-left
//! declarator binding (`int (*p)[3]`, `void (**)(char,int)`) without any
//! re-parsing of previously rendered text.

use std::fmt::Write;

use indexmap::IndexMap;

use crate::render::Render;

/// A type or pointer qualifier keyword.
///
/// Qualifiers render in declaration order and are never re-sorted, so
/// `const volatile` stays `const volatile`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Qualifier {
    Const,
    Volatile,
    Restrict,
    Static,
}

impl Qualifier {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Const => "const",
            Self::Volatile => "volatile",
            Self::Restrict => "restrict",
            Self::Static => "static",
        }
    }
}

/// A C type descriptor.
///
/// Nodes are immutable once constructed; every wrapping constructor
/// returns a new value and rendering is a pure function of the tree.
#[derive(Debug, Clone, PartialEq)]
pub enum CType {
    /// A base or typedef'd type named by its specifier: `int`, `size_t`.
    Simple {
        specifier: String,
        qualifiers: Vec<Qualifier>,
    },
    /// A pointer. Qualifiers apply to the pointer itself, not the pointee.
    Pointer {
        pointee: Box<CType>,
        qualifiers: Vec<Qualifier>,
    },
    /// An array with one entry per dimension; `None` renders `[]`.
    Array {
        element: Box<CType>,
        dims: Vec<Option<u64>>,
    },
    /// A function type. An empty param name renders a bare abstract
    /// declarator, as in `void (*)(char,int)`.
    Func {
        ret: Box<CType>,
        params: Vec<(CType, String)>,
        variadic: bool,
    },
    /// A reference to a struct tag: `struct point`.
    Struct {
        name: String,
        qualifiers: Vec<Qualifier>,
    },
    /// A union reference. Anonymous unions carry their members and render
    /// the full member block inline instead of a name.
    Union {
        name: Option<String>,
        members: IndexMap<String, CType>,
        qualifiers: Vec<Qualifier>,
    },
    /// A reference to an enum tag: `enum color`.
    Enum {
        name: String,
        qualifiers: Vec<Qualifier>,
    },
}

impl CType {
    /// Create a base type from its specifier.
    pub fn simple(specifier: impl Into<String>) -> Self {
        Self::Simple {
            specifier: specifier.into(),
            qualifiers: Vec::new(),
        }
    }

    /// Create a qualified base type. Qualifier order is preserved.
    pub fn qualified(
        specifier: impl Into<String>,
        qualifiers: impl IntoIterator<Item = Qualifier>,
    ) -> Self {
        Self::Simple {
            specifier: specifier.into(),
            qualifiers: qualifiers.into_iter().collect(),
        }
    }

    pub fn void() -> Self {
        Self::simple("void")
    }

    pub fn bool_() -> Self {
        Self::simple("bool")
    }

    pub fn char_() -> Self {
        Self::simple("char")
    }

    pub fn int() -> Self {
        Self::simple("int")
    }

    pub fn long() -> Self {
        Self::simple("long")
    }

    pub fn float() -> Self {
        Self::simple("float")
    }

    pub fn double() -> Self {
        Self::simple("double")
    }

    pub fn size_t() -> Self {
        Self::simple("size_t")
    }

    /// The placeholder type carried by nodes whose result type cannot be
    /// inferred. Advisory metadata only; it is never a correct specifier
    /// to render into output.
    pub fn any() -> Self {
        Self::simple("any")
    }

    /// Wrap a type in a pointer.
    pub fn pointer(pointee: CType) -> Self {
        Self::Pointer {
            pointee: Box::new(pointee),
            qualifiers: Vec::new(),
        }
    }

    /// Wrap a type in a qualified pointer (`int* const`).
    pub fn pointer_qualified(
        pointee: CType,
        qualifiers: impl IntoIterator<Item = Qualifier>,
    ) -> Self {
        Self::Pointer {
            pointee: Box::new(pointee),
            qualifiers: qualifiers.into_iter().collect(),
        }
    }

    /// Wrap a type in a sized array.
    pub fn array(element: CType, len: u64) -> Self {
        Self::Array {
            element: Box::new(element),
            dims: vec![Some(len)],
        }
    }

    /// Wrap a type in an unsized array (`[]`).
    pub fn array_unsized(element: CType) -> Self {
        Self::Array {
            element: Box::new(element),
            dims: vec![None],
        }
    }

    /// Wrap a type in a multi-dimensional array.
    pub fn array_dims(element: CType, dims: impl IntoIterator<Item = u64>) -> Self {
        Self::Array {
            element: Box::new(element),
            dims: dims.into_iter().map(Some).collect(),
        }
    }

    /// Create a function type. Parameter names may be empty for abstract
    /// declarators.
    pub fn func(
        ret: CType,
        params: impl IntoIterator<Item = (CType, impl Into<String>)>,
    ) -> Self {
        Self::Func {
            ret: Box::new(ret),
            params: params
                .into_iter()
                .map(|(ty, name)| (ty, name.into()))
                .collect(),
            variadic: false,
        }
    }

    /// Create a variadic function type (`,...` appended to the params).
    pub fn func_variadic(
        ret: CType,
        params: impl IntoIterator<Item = (CType, impl Into<String>)>,
    ) -> Self {
        match Self::func(ret, params) {
            Self::Func { ret, params, .. } => Self::Func {
                ret,
                params,
                variadic: true,
            },
            _ => unreachable!(),
        }
    }

    /// Create a struct tag reference (`struct name`).
    pub fn struct_ref(name: impl Into<String>) -> Self {
        Self::Struct {
            name: name.into(),
            qualifiers: Vec::new(),
        }
    }

    /// Create a union tag reference (`union name`).
    pub fn union_ref(name: impl Into<String>) -> Self {
        Self::Union {
            name: Some(name.into()),
            members: IndexMap::new(),
            qualifiers: Vec::new(),
        }
    }

    /// Create an anonymous union type; the member block renders inline.
    pub fn union_anon(
        members: impl IntoIterator<Item = (impl Into<String>, CType)>,
    ) -> Self {
        Self::Union {
            name: None,
            members: members
                .into_iter()
                .map(|(name, ty)| (name.into(), ty))
                .collect(),
            qualifiers: Vec::new(),
        }
    }

    /// Create an enum tag reference (`enum name`).
    pub fn enum_ref(name: impl Into<String>) -> Self {
        Self::Enum {
            name: name.into(),
            qualifiers: Vec::new(),
        }
    }

    /// Append a qualifier to this type, preserving declaration order.
    pub fn with_qualifier(mut self, q: Qualifier) -> Self {
        match &mut self {
            Self::Simple { qualifiers, .. }
            | Self::Pointer { qualifiers, .. }
            | Self::Struct { qualifiers, .. }
            | Self::Union { qualifiers, .. }
            | Self::Enum { qualifiers, .. } => qualifiers.push(q),
            Self::Array { .. } | Self::Func { .. } => {}
        }
        self
    }

    pub fn is_pointer(&self) -> bool {
        matches!(self, Self::Pointer { .. })
    }

    /// The pointee of a pointer, or the array element type. `None` for
    /// every other kind.
    pub fn target(&self) -> Option<&CType> {
        match self {
            Self::Pointer { pointee, .. } => Some(pointee),
            Self::Array { element, .. } => Some(element),
            _ => None,
        }
    }

    /// Render the declarator for this type, optionally binding `name`.
    ///
    /// ```
    /// use cquill_ast::CType;
    ///
    /// let pa = CType::pointer(CType::array(CType::int(), 3));
    /// assert_eq!(pa.declare(None), "int (*)[3]");
    /// assert_eq!(pa.declare(Some("p")), "int (* p)[3]");
    /// ```
    pub fn declare(&self, name: Option<&str>) -> String {
        self.wrap(name.unwrap_or("").to_string())
    }

    /// Structural declarator composition. `decl` is the declarator built
    /// so far, innermost (the bound name, possibly empty) first.
    fn wrap(&self, decl: String) -> String {
        match self {
            Self::Simple {
                specifier,
                qualifiers,
            } => join_specifier(&prefixed(qualifiers, specifier), &decl),
            Self::Struct { name, qualifiers } => {
                join_specifier(&prefixed(qualifiers, &format!("struct {name}")), &decl)
            }
            Self::Enum { name, qualifiers } => {
                join_specifier(&prefixed(qualifiers, &format!("enum {name}")), &decl)
            }
            Self::Union {
                name,
                members,
                qualifiers,
            } => {
                let specifier = match name {
                    Some(n) => format!("union {n}"),
                    None => format!("union {}", inline_members(members)),
                };
                join_specifier(&prefixed(qualifiers, &specifier), &decl)
            }
            Self::Pointer { pointee, qualifiers } => {
                let mut stars = String::from("*");
                for q in qualifiers {
                    stars.push(' ');
                    stars.push_str(q.as_str());
                }
                let inner = if decl.is_empty() {
                    stars
                } else if decl.starts_with('*') {
                    // Multi-level pointers collapse: `**`, `** const p`.
                    stars + &decl
                } else {
                    format!("{stars} {decl}")
                };
                // The star binds tighter than array/function suffixes, so
                // those pointees force the parenthesized form.
                let inner = if matches!(**pointee, Self::Array { .. } | Self::Func { .. }) {
                    format!("({inner})")
                } else {
                    inner
                };
                pointee.wrap(inner)
            }
            Self::Array { element, dims } => {
                let mut inner = decl;
                for dim in dims {
                    match dim {
                        Some(n) => {
                            let _ = write!(inner, "[{n}]");
                        }
                        None => inner.push_str("[]"),
                    }
                }
                element.wrap(inner)
            }
            Self::Func {
                ret,
                params,
                variadic,
            } => {
                let list = if params.is_empty() && !*variadic {
                    "void".to_string()
                } else {
                    let mut list = params
                        .iter()
                        .map(|(ty, name)| {
                            ty.declare(if name.is_empty() {
                                None
                            } else {
                                Some(name)
                            })
                        })
                        .collect::<Vec<_>>()
                        .join(",");
                    if *variadic {
                        list.push_str(",...");
                    }
                    list
                };
                ret.wrap(format!("{decl}({list})"))
            }
        }
    }
}

impl Render for CType {
    fn render(&self) -> String {
        self.declare(None)
    }
}

fn prefixed(qualifiers: &[Qualifier], specifier: &str) -> String {
    let mut out = String::new();
    for q in qualifiers {
        out.push_str(q.as_str());
        out.push(' ');
    }
    out.push_str(specifier);
    out
}

/// Join a rendered specifier with the declarator built so far. The star
/// of a pointer declarator hugs the specifier (`int* p`), as do bare
/// array brackets (`int[3]`); everything else is space-separated.
fn join_specifier(specifier: &str, decl: &str) -> String {
    if decl.is_empty() {
        specifier.to_string()
    } else if decl.starts_with('*') || decl.starts_with('[') {
        format!("{specifier}{decl}")
    } else {
        format!("{specifier} {decl}")
    }
}

fn inline_members(members: &IndexMap<String, CType>) -> String {
    let mut out = String::from("{");
    for (name, ty) in members {
        out.push_str(&ty.declare(Some(name)));
        out.push(';');
    }
    out.push('}');
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_simple_declare() {
        assert_eq!(CType::int().declare(None), "int");
        assert_eq!(CType::int().declare(Some("x")), "int x");
    }

    #[test]
    fn test_qualifiers_stay_in_declaration_order() {
        let ty = CType::qualified("int", [Qualifier::Const, Qualifier::Volatile]);
        assert_eq!(ty.declare(Some("x")), "const volatile int x");
        let rev = CType::qualified("int", [Qualifier::Volatile, Qualifier::Const]);
        assert_eq!(rev.declare(Some("x")), "volatile const int x");
    }

    #[test]
    fn test_pointer_star_hugs_specifier() {
        let p = CType::pointer(CType::int());
        assert_eq!(p.declare(None), "int*");
        assert_eq!(p.declare(Some("p")), "int* p");
    }

    #[test]
    fn test_qualified_pointer_to_qualified_name() {
        let p = CType::pointer_qualified(
            CType::qualified("abc", [Qualifier::Const]),
            [Qualifier::Const],
        );
        assert_eq!(p.declare(None), "const abc* const");
        assert_eq!(p.declare(Some("p")), "const abc* const p");
    }

    #[test]
    fn test_pointer_to_struct() {
        let p = CType::pointer(CType::struct_ref("point"));
        assert_eq!(p.declare(Some("p")), "struct point* p");
    }

    #[test]
    fn test_pointer_to_pointer() {
        let pp = CType::pointer(CType::pointer(CType::int()));
        assert_eq!(pp.declare(None), "int**");
        assert_eq!(pp.declare(Some("p")), "int** p");
    }

    #[test]
    fn test_pointer_to_array() {
        let pa = CType::pointer(CType::array(CType::int(), 3));
        assert_eq!(pa.declare(None), "int (*)[3]");
        assert_eq!(pa.declare(Some("p")), "int (* p)[3]");
    }

    #[test]
    fn test_double_pointer_to_array() {
        let ppa = CType::pointer(CType::pointer(CType::array(CType::int(), 3)));
        assert_eq!(ppa.declare(None), "int (**)[3]");
    }

    #[test]
    fn test_double_pointer_to_func() {
        let f = CType::func(CType::void(), [(CType::char_(), ""), (CType::int(), "")]);
        let ppf = CType::pointer(CType::pointer(f));
        assert_eq!(ppf.declare(None), "void (**)(char,int)");
    }

    #[test]
    fn test_pointer_to_func_with_name() {
        let f = CType::func(CType::int(), [(CType::int(), "x")]);
        let pf = CType::pointer(f);
        assert_eq!(pf.declare(Some("cb")), "int (* cb)(int x)");
    }

    #[test]
    fn test_array_declarators() {
        assert_eq!(CType::array(CType::int(), 3).declare(Some("a")), "int a[3]");
        assert_eq!(CType::array(CType::int(), 3).declare(None), "int[3]");
        assert_eq!(CType::array_unsized(CType::char_()).declare(Some("s")), "char s[]");
        assert_eq!(
            CType::array_dims(CType::int(), [2, 3]).declare(Some("m")),
            "int m[2][3]"
        );
    }

    #[test]
    fn test_func_zero_params_renders_void() {
        let f = CType::func(CType::int(), Vec::<(CType, String)>::new());
        assert_eq!(f.declare(Some("main")), "int main(void)");
        assert_eq!(f.declare(None), "int (void)");
    }

    #[test]
    fn test_variadic_func() {
        let f = CType::func_variadic(
            CType::int(),
            [(CType::pointer(CType::qualified("char", [Qualifier::Const])), "fmt")],
        );
        assert_eq!(f.declare(Some("printf")), "int printf(const char* fmt,...)");
    }

    #[test]
    fn test_anonymous_union_renders_member_block_inline() {
        let u = CType::union_anon([("i", CType::int()), ("f", CType::float())]);
        assert_eq!(u.declare(Some("u")), "union {int i;float f;} u");
    }

    #[test]
    fn test_declare_is_pure() {
        let pa = CType::pointer(CType::array(CType::int(), 3));
        assert_eq!(pa.declare(Some("p")), pa.declare(Some("p")));
    }
}
