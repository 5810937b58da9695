//! External command execution.
//!
//! Commands are always spawned from an explicit argument vector. Nothing
//! goes through a shell, so filenames and messages are passed verbatim.

use std::ffi::OsStr;
use std::path::Path;
use std::process::{Command, Stdio};

/// Outcome of one external process invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandResult {
    /// True iff the process ran and exited with status zero.
    pub success: bool,
    /// Exit code, if the process ran to completion.
    pub code: Option<i32>,
    /// Captured standard output.
    pub stdout: String,
    /// Captured standard error, or the spawn error when the process never ran.
    pub stderr: String,
}

impl CommandResult {
    fn spawn_failure(program: &OsStr, err: std::io::Error) -> Self {
        Self {
            success: false,
            code: None,
            stdout: String::new(),
            stderr: format!("Failed to run {}: {err}", program.to_string_lossy()),
        }
    }

    /// Trimmed stdout.
    pub fn stdout_trimmed(&self) -> &str {
        self.stdout.trim()
    }

    /// The most useful diagnostic text for a failed command.
    pub fn error_text(&self) -> String {
        let stderr = self.stderr.trim();
        if !stderr.is_empty() {
            return stderr.to_string();
        }
        let stdout = self.stdout.trim();
        if !stdout.is_empty() {
            return stdout.to_string();
        }
        match self.code {
            Some(code) => format!("exited with status {code}"),
            None => "terminated by signal".to_string(),
        }
    }
}

/// Runs `program` with `args` in `dir` and waits for it to finish.
///
/// `envs` are added to the child's environment only. Never fails: a
/// process that cannot be spawned yields an unsuccessful result carrying
/// the OS error text.
pub fn run_command<S: AsRef<OsStr>>(
    program: impl AsRef<OsStr>,
    args: &[S],
    dir: &Path,
    envs: &[(String, String)],
) -> CommandResult {
    let program = program.as_ref();
    let mut cmd = Command::new(program);
    cmd.args(args)
        .current_dir(dir)
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped());

    for (k, v) in envs {
        cmd.env(k, v);
    }

    match cmd.output() {
        Ok(output) => CommandResult {
            success: output.status.success(),
            code: output.status.code(),
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        },
        Err(e) => CommandResult::spawn_failure(program, e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_missing_program_is_failure_not_error() {
        let dir = tempdir().unwrap();
        let result = run_command("definitely-not-a-real-binary-xyz", &["--version"], dir.path(), &[]);
        assert!(!result.success);
        assert_eq!(result.code, None);
        assert!(result.stderr.contains("definitely-not-a-real-binary-xyz"));
    }

    #[cfg(unix)]
    #[test]
    fn test_exit_status_drives_success() {
        let dir = tempdir().unwrap();
        assert!(run_command("sh", &["-c", "exit 0"], dir.path(), &[]).success);

        let failed = run_command("sh", &["-c", "echo boom >&2; exit 3"], dir.path(), &[]);
        assert!(!failed.success);
        assert_eq!(failed.code, Some(3));
        assert_eq!(failed.error_text(), "boom");
    }

    #[cfg(unix)]
    #[test]
    fn test_arguments_are_not_shell_interpreted() {
        let dir = tempdir().unwrap();
        let result = run_command("echo", &["$HOME; rm -rf /"], dir.path(), &[]);
        assert!(result.success);
        assert_eq!(result.stdout_trimmed(), "$HOME; rm -rf /");
    }

    #[cfg(unix)]
    #[test]
    fn test_env_is_scoped_to_child() {
        let dir = tempdir().unwrap();
        let envs = vec![("PUSHER_TEST_VALUE".to_string(), "scoped".to_string())];
        let result = run_command("sh", &["-c", "printf %s \"$PUSHER_TEST_VALUE\""], dir.path(), &envs);
        assert_eq!(result.stdout, "scoped");
        assert!(std::env::var("PUSHER_TEST_VALUE").is_err());
    }

    #[test]
    fn test_error_text_falls_back_to_status() {
        let result = CommandResult {
            success: false,
            code: Some(128),
            stdout: String::new(),
            stderr: "  \n".to_string(),
        };
        assert_eq!(result.error_text(), "exited with status 128");
    }
}
