//! The [`Render`] trait and the statement joiners.
//!
//! Rendering is a pure function of the node tree: no node mutates state
//! while rendering, and no node re-parenthesizes or re-indents its
//! children. `chunk` and `block` are the only two ways statement text is
//! combined anywhere in the crate.

/// Trait for nodes that render to a fragment of C source text.
pub trait Render {
    /// Render this node to its C source text.
    fn render(&self) -> String;
}

/// Blanket implementation for references.
impl<T: Render + ?Sized> Render for &T {
    fn render(&self) -> String {
        (**self).render()
    }
}

/// Blanket implementation for Box.
impl<T: Render + ?Sized> Render for Box<T> {
    fn render(&self) -> String {
        self.as_ref().render()
    }
}

/// Pre-rendered text passes through unchanged.
impl Render for String {
    fn render(&self) -> String {
        self.clone()
    }
}

impl Render for str {
    fn render(&self) -> String {
        self.to_string()
    }
}

/// Join a sequence of renderings with newlines.
///
/// Each statement's own render determines its terminator, so `chunk`
/// never appends semicolons or braces of its own.
pub fn chunk<R: Render>(items: &[R]) -> String {
    items
        .iter()
        .map(Render::render)
        .collect::<Vec<_>>()
        .join("\n")
}

/// Wrap a chunk in `{` `}`, preceded by a newline so nested blocks
/// always start on their own line.
pub fn block<R: Render>(items: &[R]) -> String {
    enclose(&chunk(items))
}

/// Brace a pre-rendered body. Shared by `block`, switch bodies, and the
/// member blocks of struct/union/enum definitions.
pub(crate) fn enclose(body: &str) -> String {
    if body.is_empty() {
        "\n{\n}".to_string()
    } else {
        format!("\n{{\n{body}\n}}")
    }
}
