//! C expression nodes and operator constructors.
//!
//! [`Val`] is a closed sum over expression kinds. Rendering concatenates
//! pre-rendered children with fixed templates and never re-parenthesizes
//! them, with one asymmetric exception: a cast wraps its operand in
//! parens when the operand is a binary or ternary expression, so
//! `(int)(a+b)` comes out instead of `(int)a+b`. Everything else is the
//! caller's responsibility via [`Val::parens`].
//!
//! Every node carries an inferred [`CType`] tag used by chained builder
//! calls. The tag is advisory: wrong usage produces syntactically valid
//! but semantically wrong C, which is not detected.

use crate::render::Render;
use crate::ty::CType;

/// A binary operator, bound to the symbol it renders.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinOp {
    Add,
    Sub,
    Mul,
    Div,
    Mod,
    Eq,
    Ne,
    Gt,
    Lt,
    Ge,
    Le,
    And,
    Or,
    BitAnd,
    BitOr,
    BitXor,
    Shl,
    Shr,
    Assign,
    AddAssign,
    SubAssign,
    MulAssign,
    DivAssign,
    ModAssign,
    BitAndAssign,
    BitOrAssign,
    BitXorAssign,
    ShlAssign,
    ShrAssign,
}

impl BinOp {
    pub fn symbol(&self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Div => "/",
            Self::Mod => "%",
            Self::Eq => "==",
            Self::Ne => "!=",
            Self::Gt => ">",
            Self::Lt => "<",
            Self::Ge => ">=",
            Self::Le => "<=",
            Self::And => "&&",
            Self::Or => "||",
            Self::BitAnd => "&",
            Self::BitOr => "|",
            Self::BitXor => "^",
            Self::Shl => "<<",
            Self::Shr => ">>",
            Self::Assign => "=",
            Self::AddAssign => "+=",
            Self::SubAssign => "-=",
            Self::MulAssign => "*=",
            Self::DivAssign => "/=",
            Self::ModAssign => "%=",
            Self::BitAndAssign => "&=",
            Self::BitOrAssign => "|=",
            Self::BitXorAssign => "^=",
            Self::ShlAssign => "<<=",
            Self::ShrAssign => ">>=",
        }
    }

    /// Comparison and logical operators produce a bool-tagged node;
    /// everything else keeps the left operand's own type tag.
    fn is_boolean(&self) -> bool {
        matches!(
            self,
            Self::Eq
                | Self::Ne
                | Self::Gt
                | Self::Lt
                | Self::Ge
                | Self::Le
                | Self::And
                | Self::Or
        )
    }
}

/// A unary operator. Increment/decrement come in prefix and postfix form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnaryOp {
    Neg,
    Not,
    BitNot,
    AddrOf,
    Deref,
    PreInc,
    PreDec,
    PostInc,
    PostDec,
}

impl UnaryOp {
    pub fn symbol(&self) -> &'static str {
        match self {
            Self::Neg => "-",
            Self::Not => "!",
            Self::BitNot => "~",
            Self::AddrOf => "&",
            Self::Deref => "*",
            Self::PreInc | Self::PostInc => "++",
            Self::PreDec | Self::PostDec => "--",
        }
    }

    pub fn is_postfix(&self) -> bool {
        matches!(self, Self::PostInc | Self::PostDec)
    }
}

/// Member access form.
#[derive(Debug, Clone, PartialEq)]
pub enum MemberKind {
    /// `object.field`
    Dot(String),
    /// `object->field`
    Arrow(String),
    /// `object[index]`
    Index(Box<Val>),
}

/// A memory query operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MemoryOp {
    SizeOf,
    AlignOf,
}

impl MemoryOp {
    pub fn keyword(&self) -> &'static str {
        match self {
            Self::SizeOf => "sizeof",
            Self::AlignOf => "alignof",
        }
    }
}

/// A C expression node.
///
/// Nodes are immutable; every chaining method returns a new node, so
/// expression trees can be shared and reused across statements.
#[derive(Debug, Clone, PartialEq)]
pub enum Val {
    /// A literal, stored as its rendered text.
    Literal { text: String, ty: CType },
    /// A name reference.
    Name { name: String, ty: CType },
    /// A unary prefix or postfix operation.
    Unary { op: UnaryOp, operand: Box<Val>, ty: CType },
    /// A binary operation, rendered `lhs<op>rhs` with no spaces.
    Binary {
        op: BinOp,
        lhs: Box<Val>,
        rhs: Box<Val>,
        ty: CType,
    },
    /// Member access: `.`, `->`, or `[]`.
    Member {
        object: Box<Val>,
        kind: MemberKind,
        ty: CType,
    },
    /// A call, always rendered with parens: `name(args)`, `name()`.
    Call {
        name: String,
        args: Vec<Val>,
        ty: CType,
    },
    /// A cast: `(type)value`.
    Cast { target: CType, operand: Box<Val> },
    /// A ternary: `cond?exp1:exp2`.
    Ternary {
        cond: Box<Val>,
        exp1: Box<Val>,
        exp2: Box<Val>,
        ty: CType,
    },
    /// `sizeof(value)` / `alignof(value)`.
    Memory { op: MemoryOp, operand: Box<Val> },
    /// A compound initializer list: `{1,2,3}`.
    InitList { items: Vec<Val>, ty: CType },
    /// A designated initializer: `{.a=1,.b=2}`.
    Designated {
        fields: Vec<(String, Val)>,
        ty: CType,
    },
    /// An explicit parenthesized wrapper: `(value)`.
    Parens(Box<Val>),
}

impl Val {
    /// An int literal.
    pub fn int(v: i64) -> Self {
        Self::Literal {
            text: v.to_string(),
            ty: CType::int(),
        }
    }

    /// A float literal; the `F` suffix is appended explicitly.
    pub fn float(v: f64) -> Self {
        Self::Literal {
            text: format!("{v}F"),
            ty: CType::float(),
        }
    }

    /// A double literal, rendered without a suffix.
    pub fn double(v: f64) -> Self {
        Self::Literal {
            text: v.to_string(),
            ty: CType::double(),
        }
    }

    /// A long-double literal from pre-suffixed text (`23L`).
    pub fn long_double(text: impl Into<String>) -> Self {
        Self::Literal {
            text: text.into(),
            ty: CType::simple("long double"),
        }
    }

    /// A quoted string literal, typed `char*`.
    pub fn str(s: impl AsRef<str>) -> Self {
        Self::Literal {
            text: format!("\"{}\"", s.as_ref()),
            ty: CType::pointer(CType::char_()),
        }
    }

    /// A character literal.
    pub fn char_lit(c: char) -> Self {
        Self::Literal {
            text: format!("'{c}'"),
            ty: CType::char_(),
        }
    }

    /// A bool literal.
    pub fn bool_(v: bool) -> Self {
        Self::Literal {
            text: v.to_string(),
            ty: CType::bool_(),
        }
    }

    /// A typed name reference.
    pub fn name(name: impl Into<String>, ty: CType) -> Self {
        Self::Name {
            name: name.into(),
            ty,
        }
    }

    /// A call expression. Mostly produced through
    /// [`FuncDecl::call`](crate::fns::FuncDecl::call), which tags the
    /// result with the declared return type.
    pub fn call(
        name: impl Into<String>,
        args: impl IntoIterator<Item = impl IntoVal>,
        ty: CType,
    ) -> Self {
        Self::Call {
            name: name.into(),
            args: args.into_iter().map(IntoVal::into_val).collect(),
            ty,
        }
    }

    /// A compound initializer list (`{1,2,3}`), tagged with the
    /// aggregate type it initializes.
    pub fn init_list(items: impl IntoIterator<Item = impl IntoVal>, ty: CType) -> Self {
        Self::InitList {
            items: items.into_iter().map(IntoVal::into_val).collect(),
            ty,
        }
    }

    /// A designated initializer (`{.a=1,.b=2}`).
    pub fn designated(
        fields: impl IntoIterator<Item = (impl Into<String>, impl IntoVal)>,
        ty: CType,
    ) -> Self {
        Self::Designated {
            fields: fields
                .into_iter()
                .map(|(name, v)| (name.into(), v.into_val()))
                .collect(),
            ty,
        }
    }

    /// `sizeof(value)`, typed `size_t`.
    pub fn size_of(v: impl IntoVal) -> Self {
        Self::Memory {
            op: MemoryOp::SizeOf,
            operand: Box::new(v.into_val()),
        }
    }

    /// `sizeof(type)`, typed `size_t`.
    pub fn size_of_ty(ty: CType) -> Self {
        Self::Memory {
            op: MemoryOp::SizeOf,
            operand: Box::new(Self::Literal {
                text: ty.declare(None),
                ty: CType::size_t(),
            }),
        }
    }

    /// `alignof(value)`, typed `size_t`.
    pub fn align_of(v: impl IntoVal) -> Self {
        Self::Memory {
            op: MemoryOp::AlignOf,
            operand: Box::new(v.into_val()),
        }
    }

    /// The inferred type tag of this node. Advisory metadata for chained
    /// builders, not enforced typing.
    pub fn ty(&self) -> CType {
        match self {
            Self::Literal { ty, .. }
            | Self::Name { ty, .. }
            | Self::Unary { ty, .. }
            | Self::Binary { ty, .. }
            | Self::Member { ty, .. }
            | Self::Call { ty, .. }
            | Self::Ternary { ty, .. }
            | Self::InitList { ty, .. }
            | Self::Designated { ty, .. } => ty.clone(),
            Self::Cast { target, .. } => target.clone(),
            Self::Memory { .. } => CType::size_t(),
            Self::Parens(inner) => inner.ty(),
        }
    }

    fn binary(&self, op: BinOp, rhs: impl IntoVal) -> Val {
        let ty = if op.is_boolean() {
            CType::bool_()
        } else {
            self.ty()
        };
        Val::Binary {
            op,
            lhs: Box::new(self.clone()),
            rhs: Box::new(rhs.into_val()),
            ty,
        }
    }

    pub fn add(&self, rhs: impl IntoVal) -> Val {
        self.binary(BinOp::Add, rhs)
    }

    pub fn sub(&self, rhs: impl IntoVal) -> Val {
        self.binary(BinOp::Sub, rhs)
    }

    pub fn mul(&self, rhs: impl IntoVal) -> Val {
        self.binary(BinOp::Mul, rhs)
    }

    pub fn div(&self, rhs: impl IntoVal) -> Val {
        self.binary(BinOp::Div, rhs)
    }

    pub fn rem(&self, rhs: impl IntoVal) -> Val {
        self.binary(BinOp::Mod, rhs)
    }

    pub fn eq(&self, rhs: impl IntoVal) -> Val {
        self.binary(BinOp::Eq, rhs)
    }

    pub fn ne(&self, rhs: impl IntoVal) -> Val {
        self.binary(BinOp::Ne, rhs)
    }

    pub fn gt(&self, rhs: impl IntoVal) -> Val {
        self.binary(BinOp::Gt, rhs)
    }

    pub fn lt(&self, rhs: impl IntoVal) -> Val {
        self.binary(BinOp::Lt, rhs)
    }

    pub fn ge(&self, rhs: impl IntoVal) -> Val {
        self.binary(BinOp::Ge, rhs)
    }

    pub fn le(&self, rhs: impl IntoVal) -> Val {
        self.binary(BinOp::Le, rhs)
    }

    pub fn and(&self, rhs: impl IntoVal) -> Val {
        self.binary(BinOp::And, rhs)
    }

    pub fn or(&self, rhs: impl IntoVal) -> Val {
        self.binary(BinOp::Or, rhs)
    }

    pub fn bit_and(&self, rhs: impl IntoVal) -> Val {
        self.binary(BinOp::BitAnd, rhs)
    }

    pub fn bit_or(&self, rhs: impl IntoVal) -> Val {
        self.binary(BinOp::BitOr, rhs)
    }

    pub fn bit_xor(&self, rhs: impl IntoVal) -> Val {
        self.binary(BinOp::BitXor, rhs)
    }

    pub fn shl(&self, rhs: impl IntoVal) -> Val {
        self.binary(BinOp::Shl, rhs)
    }

    pub fn shr(&self, rhs: impl IntoVal) -> Val {
        self.binary(BinOp::Shr, rhs)
    }

    pub fn assign(&self, rhs: impl IntoVal) -> Val {
        self.binary(BinOp::Assign, rhs)
    }

    pub fn add_assign(&self, rhs: impl IntoVal) -> Val {
        self.binary(BinOp::AddAssign, rhs)
    }

    pub fn sub_assign(&self, rhs: impl IntoVal) -> Val {
        self.binary(BinOp::SubAssign, rhs)
    }

    pub fn mul_assign(&self, rhs: impl IntoVal) -> Val {
        self.binary(BinOp::MulAssign, rhs)
    }

    pub fn div_assign(&self, rhs: impl IntoVal) -> Val {
        self.binary(BinOp::DivAssign, rhs)
    }

    pub fn mod_assign(&self, rhs: impl IntoVal) -> Val {
        self.binary(BinOp::ModAssign, rhs)
    }

    pub fn bit_and_assign(&self, rhs: impl IntoVal) -> Val {
        self.binary(BinOp::BitAndAssign, rhs)
    }

    pub fn bit_or_assign(&self, rhs: impl IntoVal) -> Val {
        self.binary(BinOp::BitOrAssign, rhs)
    }

    pub fn bit_xor_assign(&self, rhs: impl IntoVal) -> Val {
        self.binary(BinOp::BitXorAssign, rhs)
    }

    pub fn shl_assign(&self, rhs: impl IntoVal) -> Val {
        self.binary(BinOp::ShlAssign, rhs)
    }

    pub fn shr_assign(&self, rhs: impl IntoVal) -> Val {
        self.binary(BinOp::ShrAssign, rhs)
    }

    fn unary(&self, op: UnaryOp, ty: CType) -> Val {
        Val::Unary {
            op,
            operand: Box::new(self.clone()),
            ty,
        }
    }

    pub fn neg(&self) -> Val {
        self.unary(UnaryOp::Neg, self.ty())
    }

    pub fn not(&self) -> Val {
        self.unary(UnaryOp::Not, CType::bool_())
    }

    pub fn bit_not(&self) -> Val {
        self.unary(UnaryOp::BitNot, self.ty())
    }

    /// `&value`, tagged as a pointer to this node's type.
    pub fn addr(&self) -> Val {
        self.unary(UnaryOp::AddrOf, CType::pointer(self.ty()))
    }

    /// `*value`, tagged with the pointee type when this node carries a
    /// pointer tag, the placeholder type otherwise.
    pub fn deref(&self) -> Val {
        let ty = self.ty().target().cloned().unwrap_or_else(CType::any);
        self.unary(UnaryOp::Deref, ty)
    }

    pub fn pre_inc(&self) -> Val {
        self.unary(UnaryOp::PreInc, self.ty())
    }

    pub fn pre_dec(&self) -> Val {
        self.unary(UnaryOp::PreDec, self.ty())
    }

    pub fn post_inc(&self) -> Val {
        self.unary(UnaryOp::PostInc, self.ty())
    }

    pub fn post_dec(&self) -> Val {
        self.unary(UnaryOp::PostDec, self.ty())
    }

    fn member(&self, kind: MemberKind, ty: CType) -> Val {
        Val::Member {
            object: Box::new(self.clone()),
            kind,
            ty,
        }
    }

    /// `object.field`. Member type inference happens on [`Var`]
    /// (which carries the member table); here the tag is the placeholder.
    ///
    /// [`Var`]: crate::vars::Var
    pub fn dot(&self, field: impl Into<String>) -> Val {
        self.member(MemberKind::Dot(field.into()), CType::any())
    }

    /// `object->field`.
    pub fn arrow(&self, field: impl Into<String>) -> Val {
        self.member(MemberKind::Arrow(field.into()), CType::any())
    }

    /// `object[index]`, tagged with the element type when known.
    pub fn index(&self, index: impl IntoVal) -> Val {
        let ty = self.ty().target().cloned().unwrap_or_else(CType::any);
        self.member(MemberKind::Index(Box::new(index.into_val())), ty)
    }

    /// `(target)value`. The operand is parenthesized iff it is a binary
    /// or ternary expression.
    pub fn cast(&self, target: CType) -> Val {
        Val::Cast {
            target,
            operand: Box::new(self.clone()),
        }
    }

    /// `cond?exp1:exp2`, tagged with the placeholder type.
    pub fn ternary(&self, exp1: impl IntoVal, exp2: impl IntoVal) -> Val {
        Val::Ternary {
            cond: Box::new(self.clone()),
            exp1: Box::new(exp1.into_val()),
            exp2: Box::new(exp2.into_val()),
            ty: CType::any(),
        }
    }

    /// Explicit parenthesized wrapper; the one opt-in escape hatch from
    /// minimal parenthesization.
    pub fn parens(&self) -> Val {
        Val::Parens(Box::new(self.clone()))
    }
}

impl Render for Val {
    fn render(&self) -> String {
        match self {
            Self::Literal { text, .. } => text.clone(),
            Self::Name { name, .. } => name.clone(),
            Self::Unary { op, operand, .. } => {
                if op.is_postfix() {
                    format!("{}{}", operand.render(), op.symbol())
                } else {
                    format!("{}{}", op.symbol(), operand.render())
                }
            }
            Self::Binary { op, lhs, rhs, .. } => {
                format!("{}{}{}", lhs.render(), op.symbol(), rhs.render())
            }
            Self::Member { object, kind, .. } => match kind {
                MemberKind::Dot(f) => format!("{}.{f}", object.render()),
                MemberKind::Arrow(f) => format!("{}->{f}", object.render()),
                MemberKind::Index(i) => format!("{}[{}]", object.render(), i.render()),
            },
            Self::Call { name, args, .. } => {
                let args = args
                    .iter()
                    .map(Render::render)
                    .collect::<Vec<_>>()
                    .join(",");
                format!("{name}({args})")
            }
            Self::Cast { target, operand } => {
                let rendered = operand.render();
                // The one asymmetric special case: binary and ternary
                // operands would bind looser than the cast.
                if matches!(**operand, Self::Binary { .. } | Self::Ternary { .. }) {
                    format!("({})({rendered})", target.declare(None))
                } else {
                    format!("({}){rendered}", target.declare(None))
                }
            }
            Self::Ternary {
                cond, exp1, exp2, ..
            } => format!("{}?{}:{}", cond.render(), exp1.render(), exp2.render()),
            Self::Memory { op, operand } => {
                format!("{}({})", op.keyword(), operand.render())
            }
            Self::InitList { items, .. } => {
                let items = items
                    .iter()
                    .map(Render::render)
                    .collect::<Vec<_>>()
                    .join(",");
                format!("{{{items}}}")
            }
            Self::Designated { fields, .. } => {
                let fields = fields
                    .iter()
                    .map(|(name, v)| format!(".{name}={}", v.render()))
                    .collect::<Vec<_>>()
                    .join(",");
                format!("{{{fields}}}")
            }
            Self::Parens(inner) => format!("({})", inner.render()),
        }
    }
}

/// Normalizing conversion from host values into expression nodes.
///
/// Numbers become int literals unless they have a fractional part
/// (double literal). String shorthand sniffs one trailing character:
/// `f`/`F` makes a float literal, `l`/`L` a long-double literal, and
/// anything else an int literal.
pub trait IntoVal {
    fn into_val(self) -> Val;
}

impl IntoVal for Val {
    fn into_val(self) -> Val {
        self
    }
}

impl IntoVal for &Val {
    fn into_val(self) -> Val {
        self.clone()
    }
}

impl IntoVal for i32 {
    fn into_val(self) -> Val {
        Val::int(i64::from(self))
    }
}

impl IntoVal for i64 {
    fn into_val(self) -> Val {
        Val::int(self)
    }
}

impl IntoVal for u64 {
    fn into_val(self) -> Val {
        Val::Literal {
            text: self.to_string(),
            ty: CType::int(),
        }
    }
}

impl IntoVal for f64 {
    fn into_val(self) -> Val {
        if self.fract() == 0.0 {
            Val::int(self as i64)
        } else {
            Val::double(self)
        }
    }
}

impl IntoVal for bool {
    fn into_val(self) -> Val {
        Val::bool_(self)
    }
}

impl IntoVal for &str {
    fn into_val(self) -> Val {
        let ty = match self.chars().last() {
            Some('f' | 'F') => CType::float(),
            Some('l' | 'L') => CType::simple("long double"),
            _ => CType::int(),
        };
        Val::Literal {
            text: self.to_string(),
            ty,
        }
    }
}

impl IntoVal for String {
    fn into_val(self) -> Val {
        self.as_str().into_val()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn n(name: &str) -> Val {
        Val::name(name, CType::int())
    }

    #[test]
    fn test_binary_renders_without_spaces() {
        assert_eq!(n("a").add(n("b")).render(), "a+b");
        assert_eq!(n("x").assign(5).render(), "x=5");
        assert_eq!(n("x").shl_assign(2).render(), "x<<=2");
    }

    #[test]
    fn test_comparison_tagged_bool() {
        let cmp = n("a").gt(n("b"));
        assert_eq!(cmp.render(), "a>b");
        assert_eq!(cmp.ty(), CType::bool_());
    }

    #[test]
    fn test_arithmetic_keeps_operand_type() {
        let sum = Val::name("a", CType::double()).add(1);
        assert_eq!(sum.ty(), CType::double());
    }

    #[test]
    fn test_no_automatic_parenthesization() {
        // a+b*c renders as written; precedence is the caller's problem.
        let e = n("a").add(n("b")).mul(n("c"));
        assert_eq!(e.render(), "a+b*c");
        let explicit = n("a").add(n("b")).parens().mul(n("c"));
        assert_eq!(explicit.render(), "(a+b)*c");
    }

    #[test]
    fn test_cast_plain_operand() {
        assert_eq!(n("abc").cast(CType::char_()).render(), "(char)abc");
    }

    #[test]
    fn test_cast_parenthesizes_binary_operand() {
        let e = n("a").add(n("b")).cast(CType::int());
        assert_eq!(e.render(), "(int)(a+b)");
    }

    #[test]
    fn test_cast_parenthesizes_ternary_operand() {
        let e = n("c").ternary(1, 2).cast(CType::long());
        assert_eq!(e.render(), "(long)(c?1:2)");
    }

    #[test]
    fn test_unary_prefix_and_postfix() {
        assert_eq!(n("x").neg().render(), "-x");
        assert_eq!(n("x").pre_inc().render(), "++x");
        assert_eq!(n("x").post_inc().render(), "x++");
        assert_eq!(n("x").post_dec().render(), "x--");
    }

    #[test]
    fn test_addr_and_deref_type_tags() {
        let p = n("x").addr();
        assert_eq!(p.render(), "&x");
        assert_eq!(p.ty(), CType::pointer(CType::int()));
        assert_eq!(p.deref().ty(), CType::int());
        assert_eq!(p.deref().render(), "*&x");
    }

    #[test]
    fn test_member_access_templates() {
        let s = Val::name("p", CType::struct_ref("point"));
        assert_eq!(s.dot("x").render(), "p.x");
        assert_eq!(s.arrow("x").render(), "p->x");
        assert_eq!(s.index(2).render(), "p[2]");
    }

    #[test]
    fn test_call_always_renders_parens() {
        assert_eq!(Val::call("getchar", Vec::<Val>::new(), CType::int()).render(), "getchar()");
        assert_eq!(
            Val::call("puts", [Val::str("abc")], CType::int()).render(),
            "puts(\"abc\")"
        );
    }

    #[test]
    fn test_memory_ops() {
        assert_eq!(Val::size_of(n("x")).render(), "sizeof(x)");
        assert_eq!(Val::size_of_ty(CType::pointer(CType::char_())).render(), "sizeof(char*)");
        assert_eq!(Val::align_of(n("x")).render(), "alignof(x)");
        assert_eq!(Val::size_of(n("x")).ty(), CType::size_t());
    }

    #[test]
    fn test_float_literal_appends_suffix() {
        assert_eq!(Val::float(23.45).render(), "23.45F");
    }

    #[test]
    fn test_numeric_conversion() {
        assert_eq!(23.45.into_val().render(), "23.45");
        assert_eq!(23.45.into_val().ty(), CType::double());
        assert_eq!(23.0.into_val().render(), "23");
        assert_eq!(23.0.into_val().ty(), CType::int());
    }

    #[test]
    fn test_string_suffix_sniffing() {
        assert_eq!("23L".into_val().ty(), CType::simple("long double"));
        assert_eq!("23L".into_val().render(), "23L");
        assert_eq!("1.5f".into_val().ty(), CType::float());
        assert_eq!("42".into_val().ty(), CType::int());
    }

    #[test]
    fn test_rendering_is_pure() {
        let tree = n("a").add(n("b")).mul(n("c")).cast(CType::int());
        assert_eq!(tree.render(), tree.render());
    }

    #[test]
    fn test_shared_subtree_reuse() {
        let shared = n("a").add(n("b"));
        let left = shared.mul(2);
        let right = shared.div(2);
        assert_eq!(left.render(), "a+b*2");
        assert_eq!(right.render(), "a+b/2");
        // The shared subtree is untouched by either chain.
        assert_eq!(shared.render(), "a+b");
    }
}
