#[cfg(test)]
pub mod fixtures {
    use crate::aggregator::ScanResult;
    use crate::types::{
        ArtifactKind, ArtifactRecord, ClaudePaths, CommandRecord, FileStat, Scope,
        SettingsRecord, SubAgentRecord,
    };
    use chrono::DateTime;
    use std::fs::{self, File};
    use std::path::{Path, PathBuf};
    use std::time::{Duration, SystemTime};
    use tempfile::TempDir;

    /// A scratch home directory plus a separate project directory.
    pub struct Workspace {
        pub home: TempDir,
        pub project: TempDir,
    }

    impl Workspace {
        pub fn new() -> Self {
            Self {
                home: TempDir::new().unwrap(),
                project: TempDir::new().unwrap(),
            }
        }

        pub fn paths(&self) -> ClaudePaths {
            ClaudePaths::new(self.home.path())
        }

        pub fn project_root(&self) -> &Path {
            self.project.path()
        }

        pub fn write_project(&self, relative: &str, content: &str) -> PathBuf {
            write_file(&self.project.path().join(relative), content)
        }

        pub fn write_user(&self, relative: &str, content: &str) -> PathBuf {
            write_file(&self.home.path().join(relative), content)
        }
    }

    pub fn write_file(path: &Path, content: &str) -> PathBuf {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(path, content).unwrap();
        path.to_path_buf()
    }

    /// Set a file's mtime to `secs` after the Unix epoch.
    pub fn set_mtime(path: &Path, secs: u64) {
        let file = File::options().write(true).open(path).unwrap();
        file.set_modified(SystemTime::UNIX_EPOCH + Duration::from_secs(secs))
            .unwrap();
    }

    pub fn sample_paths() -> ClaudePaths {
        ClaudePaths::new("/home/alice")
    }

    fn base(path: &str, kind: ArtifactKind, scope: Scope, secs: i64) -> ArtifactRecord {
        let stat = FileStat {
            size: 128,
            modified_at: DateTime::from_timestamp(secs, 0).unwrap(),
        };
        ArtifactRecord::new(path, kind, stat, scope)
    }

    /// Seven records across all kinds: four project, three user, one invalid
    /// settings file.
    pub fn sample_result() -> ScanResult {
        ScanResult {
            memory_files: vec![
                base("/work/app/CLAUDE.md", ArtifactKind::ProjectMemory, Scope::Project, 1_769_342_400),
                base(
                    "/home/alice/.claude/CLAUDE.local.md",
                    ArtifactKind::UserMemoryLocal,
                    Scope::User,
                    1_769_000_000,
                ),
            ],
            commands: vec![
                CommandRecord {
                    base: base(
                        "/work/app/.claude/commands/utils/foo.md",
                        ArtifactKind::ProjectCommand,
                        Scope::Project,
                        1_769_342_400,
                    ),
                    command_name: "foo".to_string(),
                    namespace: Some("utils".to_string()),
                    description: Some("Foo helper".to_string()),
                    has_args: true,
                },
                CommandRecord {
                    base: base(
                        "/home/alice/.claude/commands/deploy.md",
                        ArtifactKind::UserCommand,
                        Scope::User,
                        1_769_000_000,
                    ),
                    command_name: "deploy".to_string(),
                    namespace: None,
                    description: Some("Deploy".to_string()),
                    has_args: false,
                },
            ],
            settings: vec![
                SettingsRecord {
                    base: base(
                        "/work/app/.claude/settings.json",
                        ArtifactKind::ProjectSettings,
                        Scope::Project,
                        1_769_342_400,
                    ),
                    is_valid: true,
                },
                SettingsRecord {
                    base: base("/home/alice/.claude.json", ArtifactKind::UserConfig, Scope::User, 1_769_000_000),
                    is_valid: false,
                },
            ],
            subagents: vec![SubAgentRecord {
                base: base(
                    "/work/app/.claude/agents/reviewer.md",
                    ArtifactKind::ProjectSubagent,
                    Scope::Project,
                    1_769_342_400,
                ),
                agent_name: "reviewer".to_string(),
                description: Some("Reviews code".to_string()),
                tools: Some(vec!["Read".to_string(), "Grep".to_string()]),
            }],
        }
    }
}
