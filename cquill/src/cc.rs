//! Build-command assembly for generated sources.
//!
//! [`CompileOptions`] describes how to hand a rendered program to a C
//! compiler. It can be populated in code or parsed from a TOML table,
//! and produces the shell command line without executing it.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

fn default_compiler() -> String {
    "cc".to_string()
}

/// Options for compiling generated C sources.
///
/// ```
/// use cquill::CompileOptions;
///
/// let opts = CompileOptions::new()
///     .source("main.c")
///     .output("main")
///     .define("NDEBUG");
/// assert_eq!(opts.command().unwrap(), "cc -DNDEBUG -o main main.c");
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompileOptions {
    /// Compiler executable name.
    #[serde(default = "default_compiler")]
    pub compiler: String,

    /// Source files, in command-line order.
    #[serde(default)]
    pub sources: Vec<String>,

    /// Output path passed to `-o`.
    #[serde(default)]
    pub output: Option<String>,

    /// Header search paths passed as `-I`.
    #[serde(default)]
    pub include_dirs: Vec<String>,

    /// Preprocessor definitions passed as `-D`.
    #[serde(default)]
    pub defines: Vec<String>,

    /// Extra flags, appended verbatim before the sources.
    #[serde(default)]
    pub flags: Vec<String>,
}

impl Default for CompileOptions {
    fn default() -> Self {
        Self {
            compiler: default_compiler(),
            sources: Vec::new(),
            output: None,
            include_dirs: Vec::new(),
            defines: Vec::new(),
            flags: Vec::new(),
        }
    }
}

impl CompileOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse options from a TOML table.
    pub fn from_toml(input: &str) -> Result<Self> {
        Ok(toml::from_str(input)?)
    }

    pub fn compiler(mut self, compiler: impl Into<String>) -> Self {
        self.compiler = compiler.into();
        self
    }

    pub fn source(mut self, path: impl Into<String>) -> Self {
        self.sources.push(path.into());
        self
    }

    pub fn output(mut self, path: impl Into<String>) -> Self {
        self.output = Some(path.into());
        self
    }

    pub fn include_dir(mut self, path: impl Into<String>) -> Self {
        self.include_dirs.push(path.into());
        self
    }

    pub fn define(mut self, name: impl Into<String>) -> Self {
        self.defines.push(name.into());
        self
    }

    pub fn flag(mut self, flag: impl Into<String>) -> Self {
        self.flags.push(flag.into());
        self
    }

    /// The full command line: compiler, include dirs, defines, extra
    /// flags, output, then sources.
    pub fn command(&self) -> Result<String> {
        if self.sources.is_empty() {
            return Err(Error::NoSources);
        }
        let mut parts = vec![self.compiler.clone()];
        for dir in &self.include_dirs {
            parts.push(format!("-I{dir}"));
        }
        for def in &self.defines {
            parts.push(format!("-D{def}"));
        }
        parts.extend(self.flags.iter().cloned());
        if let Some(output) = &self.output {
            parts.push("-o".to_string());
            parts.push(output.clone());
        }
        parts.extend(self.sources.iter().cloned());
        Ok(parts.join(" "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_minimal_command() {
        let opts = CompileOptions::new().source("out.c");
        assert_eq!(opts.command().unwrap(), "cc out.c");
    }

    #[test]
    fn test_full_command_ordering() {
        let opts = CompileOptions::new()
            .compiler("clang")
            .include_dir("include")
            .define("NDEBUG")
            .flag("-O2")
            .output("app")
            .source("main.c")
            .source("util.c");
        assert_eq!(
            opts.command().unwrap(),
            "clang -Iinclude -DNDEBUG -O2 -o app main.c util.c"
        );
    }

    #[test]
    fn test_no_sources_is_an_error() {
        let err = CompileOptions::new().command().unwrap_err();
        assert!(matches!(err, Error::NoSources));
    }

    #[test]
    fn test_from_toml() {
        let opts = CompileOptions::from_toml(
            r#"
            compiler = "gcc"
            sources = ["main.c"]
            output = "main"
            flags = ["-Wall"]
            "#,
        )
        .unwrap();
        assert_eq!(opts.command().unwrap(), "gcc -Wall -o main main.c");
    }

    #[test]
    fn test_from_toml_defaults() {
        let opts = CompileOptions::from_toml(r#"sources = ["a.c"]"#).unwrap();
        assert_eq!(opts.compiler, "cc");
        assert_eq!(opts.command().unwrap(), "cc a.c");
    }

    #[test]
    fn test_from_toml_rejects_bad_input() {
        let err = CompileOptions::from_toml("sources = 3").unwrap_err();
        assert!(matches!(err, Error::Toml(_)));
    }
}
