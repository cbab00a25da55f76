use std::path::{Path, PathBuf};

/// Answers whether an imported module exists.
///
/// The parser consults a resolver for every `import` statement and only uses
/// the yes/no answer; it never reads module contents.
///
/// Any `Fn(&str) -> bool` closure is a resolver, which keeps tests free of the
/// filesystem:
///
/// ```
/// use luna::interpreter::module::ModuleResolver;
///
/// let only_math = |name: &str| name == "math";
///
/// assert!(only_math.module_exists("math"));
/// assert!(!only_math.module_exists("net"));
/// ```
pub trait ModuleResolver {
    /// Returns `true` if a module called `name` can be imported.
    fn module_exists(&self, name: &str) -> bool;
}

impl<F> ModuleResolver for F where F: Fn(&str) -> bool
{
    fn module_exists(&self, name: &str) -> bool {
        self(name)
    }
}

/// Resolves modules as directories under a root folder.
///
/// `import net` succeeds when `<root>/net` exists and is a directory.
#[derive(Debug, Clone)]
pub struct DirectoryResolver {
    root: PathBuf,
}

impl DirectoryResolver {
    /// Creates a resolver that probes for module directories under `root`.
    #[must_use]
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// The folder module directories are looked up in.
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }
}

impl ModuleResolver for DirectoryResolver {
    fn module_exists(&self, name: &str) -> bool {
        self.root.join(name).is_dir()
    }
}
