//! Canonical Claude Code locations and path classification.

use super::record::Scope;
use std::path::{Component, MAIN_SEPARATOR, Path, PathBuf};
use tracing::warn;

/// Name of the user-level configuration directory under the home directory.
pub const CONFIG_DIR_NAME: &str = ".claude";

/// Directory name that roots command namespaces.
pub const COMMANDS_DIR_NAME: &str = "commands";

/// Directory name holding sub-agent definitions.
pub const AGENTS_DIR_NAME: &str = "agents";

/// Resolves locations relative to a home directory.
///
/// Constructed once (usually with [`ClaudePaths::detect`]) and handed to every
/// scanner, so tests can point it at a temporary home.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClaudePaths {
    home: PathBuf,
}

impl ClaudePaths {
    pub fn new(home: impl Into<PathBuf>) -> Self {
        Self { home: home.into() }
    }

    /// Uses the current user's home directory. Falls back to `/` when the
    /// platform reports none, which leaves the user probes empty.
    pub fn detect() -> Self {
        match dirs::home_dir() {
            Some(home) => Self::new(home),
            None => {
                warn!("Could not determine home directory, using /");
                Self::new("/")
            }
        }
    }

    pub fn home_directory(&self) -> &Path {
        &self.home
    }

    /// `~/.claude`
    pub fn config_root(&self) -> PathBuf {
        self.home.join(CONFIG_DIR_NAME)
    }

    /// `~/.claude/commands`
    pub fn user_commands_dir(&self) -> PathBuf {
        self.config_root().join(COMMANDS_DIR_NAME)
    }

    /// `~/.claude/agents`
    pub fn user_agents_dir(&self) -> PathBuf {
        self.config_root().join(AGENTS_DIR_NAME)
    }

    /// `~/CLAUDE.md`, which predates `~/.claude/` and is still user scoped.
    pub fn legacy_memory_file(&self) -> PathBuf {
        self.home.join("CLAUDE.md")
    }

    /// `~/.claude.json`
    pub fn user_config_file(&self) -> PathBuf {
        self.home.join(".claude.json")
    }

    pub fn is_user_scoped(&self, path: &Path) -> bool {
        path.starts_with(self.config_root()) || path == self.legacy_memory_file()
    }

    pub fn scope_of(&self, path: &Path) -> Scope {
        if self.is_user_scoped(path) {
            Scope::User
        } else {
            Scope::Project
        }
    }

    /// The directory a command's namespace is measured from: the user
    /// commands directory for files inside it, otherwise the nearest ancestor
    /// named `commands`.
    pub fn commands_root_for(&self, path: &Path) -> Option<PathBuf> {
        let user_commands = self.user_commands_dir();
        if path.starts_with(&user_commands) {
            return Some(user_commands);
        }

        path.ancestors()
            .skip(1)
            .find(|dir| dir.file_name().is_some_and(|name| name == COMMANDS_DIR_NAME))
            .map(Path::to_path_buf)
    }

    /// Display form of `path`: the home prefix becomes `~` and paths longer
    /// than `max_len` keep only their first and last two segments.
    pub fn shorten_path(&self, path: &Path, max_len: usize) -> String {
        let display = match path.strip_prefix(&self.home) {
            Ok(rest) if rest.as_os_str().is_empty() => "~".to_string(),
            Ok(rest) => format!("~{}{}", MAIN_SEPARATOR, rest.display()),
            Err(_) => path.display().to_string(),
        };

        if display.chars().count() <= max_len {
            return display;
        }

        let parts: Vec<&str> = display.split(MAIN_SEPARATOR).collect();
        if parts.len() <= 3 {
            return display;
        }

        let sep = MAIN_SEPARATOR.to_string();
        format!(
            "{}{sep}...{sep}{}",
            parts[0],
            parts[parts.len() - 2..].join(&sep)
        )
    }
}

impl Default for ClaudePaths {
    fn default() -> Self {
        Self::detect()
    }
}

/// Relative directory of `path` under `commands_root`, joined with `/`.
///
/// Returns `None` when the file sits directly in the root or outside it.
pub fn derive_namespace(path: &Path, commands_root: &Path) -> Option<String> {
    let relative = path.strip_prefix(commands_root).ok()?;
    let dir = relative.parent()?;
    if dir.as_os_str().is_empty() {
        return None;
    }

    let segments: Vec<String> = dir
        .components()
        .map(|c| c.as_os_str().to_string_lossy().into_owned())
        .collect();
    Some(segments.join("/"))
}

/// File name with the `.md` extension removed.
pub fn derive_command_name(path: &Path) -> String {
    let file_name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();

    match file_name.strip_suffix(".md") {
        Some(stem) => stem.to_string(),
        None => file_name,
    }
}

/// Resolve `.` and `..` components without touching the filesystem.
///
/// `..` above the root is dropped; leading `..` of a relative path is kept.
pub fn normalize_path(path: &Path) -> PathBuf {
    let mut normalized = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                let last = normalized.components().next_back();
                let pop = matches!(last, Some(Component::Normal(_)));
                let at_root = matches!(last, Some(Component::RootDir | Component::Prefix(_)));
                if pop {
                    normalized.pop();
                } else if !at_root {
                    normalized.push("..");
                }
            }
            other => normalized.push(other.as_os_str()),
        }
    }
    normalized
}

/// True for `CLAUDE.local.md`, `settings.local.json` and friends.
pub fn is_local_variant(path: &Path) -> bool {
    path.file_name()
        .and_then(|n| n.to_str())
        .is_some_and(|name| name.contains(".local."))
}
