use std::path::PathBuf;

/// Directory probed for module folders when none is configured.
pub const DEFAULT_MODULES_ROOT: &str = "lina_modules";

/// Call depth allowed when none is configured.
pub const DEFAULT_MAX_CALL_DEPTH: usize = 200;

/// Statement nesting allowed when none is configured.
pub const DEFAULT_MAX_NESTING_DEPTH: usize = 128;

/// Options that shape a single run.
///
/// # Example
/// ```
/// use luna::settings::Settings;
///
/// let settings = Settings { max_call_depth: 16,
///                           ..Settings::default() };
///
/// assert_eq!(settings.modules_root.to_str(), Some("lina_modules"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// Folder in which `import <name>` looks for a `<name>` directory.
    pub modules_root:      PathBuf,
    /// How many function calls may be nested before the run fails.
    pub max_call_depth:    usize,
    /// How deeply statements may be nested inside `if`, `while`, `loop` and
    /// `func` bodies before parsing fails.
    pub max_nesting_depth: usize,
}

impl Default for Settings {
    fn default() -> Self {
        Self { modules_root:      PathBuf::from(DEFAULT_MODULES_ROOT),
               max_call_depth:    DEFAULT_MAX_CALL_DEPTH,
               max_nesting_depth: DEFAULT_MAX_NESTING_DEPTH, }
    }
}
