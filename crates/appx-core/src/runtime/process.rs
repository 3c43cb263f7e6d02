//! External command execution
//!
//! Everything the scaffolder launches (git, the package manager, the shadcn
//! initializer) goes through a `CommandRunner`, so tests can record the
//! invocations instead of spawning processes.

use crate::error::ScaffoldError;
use anyhow::{Context, Result};
use colored::Colorize;
use std::path::{Path, PathBuf};
use std::process::{ExitStatus, Stdio};
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::process::Command as TokioCommand;

/// A command line and the directory it runs in
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    pub program: String,
    pub args: Vec<String>,
    pub cwd: PathBuf,
    /// Hand the terminal to the child instead of streaming its output
    pub interactive: bool,
}

impl Invocation {
    pub fn new(program: &str, args: &[&str], cwd: &Path) -> Self {
        Self {
            program: program.to_string(),
            args: args.iter().map(|a| a.to_string()).collect(),
            cwd: cwd.to_path_buf(),
            interactive: false,
        }
    }

    pub fn interactive(mut self) -> Self {
        self.interactive = true;
        self
    }

    /// The command as a user would type it
    pub fn command_line(&self) -> String {
        std::iter::once(self.program.as_str())
            .chain(self.args.iter().map(String::as_str))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// Runs external commands to completion.
///
/// Implementations block the pipeline until the command exits and report a
/// non-zero exit as an error; there is no retry and no timeout.
#[allow(async_fn_in_trait)]
pub trait CommandRunner {
    async fn run(&self, invocation: &Invocation) -> Result<()>;
}

/// Spawns real processes, streaming their output to the terminal
#[derive(Debug, Default, Clone)]
pub struct SystemRunner;

impl SystemRunner {
    fn command(invocation: &Invocation) -> TokioCommand {
        // npm, yarn and friends are .cmd shims on Windows
        let mut command = if cfg!(windows) {
            let mut c = TokioCommand::new("cmd");
            c.arg("/C").arg(&invocation.program);
            c
        } else {
            TokioCommand::new(&invocation.program)
        };
        command.args(&invocation.args).current_dir(&invocation.cwd);
        command
    }

    async fn run_streaming(invocation: &Invocation) -> Result<ExitStatus> {
        let mut child = Self::command(invocation)
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .with_context(|| format!("Failed to start `{}`", invocation.command_line()))?;

        let stdout = child.stdout.take().context("Failed to capture stdout")?;
        let stderr = child.stderr.take().context("Failed to capture stderr")?;

        let mut stdout_reader = BufReader::new(stdout).lines();
        let mut stderr_reader = BufReader::new(stderr).lines();
        let mut stdout_done = false;
        let mut stderr_done = false;

        while !(stdout_done && stderr_done) {
            tokio::select! {
                line = stdout_reader.next_line(), if !stdout_done => {
                    match line {
                        Ok(Some(line)) => println!("  {}", line),
                        Ok(None) => stdout_done = true,
                        Err(e) => {
                            eprintln!("{} {}", "Error reading stdout:".red(), e);
                            stdout_done = true;
                        }
                    }
                }
                line = stderr_reader.next_line(), if !stderr_done => {
                    match line {
                        Ok(Some(line)) => eprintln!("  {}", line.yellow()),
                        Ok(None) => stderr_done = true,
                        Err(e) => {
                            eprintln!("{} {}", "Error reading stderr:".red(), e);
                            stderr_done = true;
                        }
                    }
                }
            }
        }

        child
            .wait()
            .await
            .with_context(|| format!("Failed to wait for `{}`", invocation.command_line()))
    }
}

impl CommandRunner for SystemRunner {
    async fn run(&self, invocation: &Invocation) -> Result<()> {
        let cmd = invocation.command_line();
        println!();
        println!("{} {}", "Running:".dimmed(), cmd.yellow());

        let status = if invocation.interactive {
            Self::command(invocation)
                .status()
                .await
                .with_context(|| format!("Failed to start `{}`", cmd))?
        } else {
            Self::run_streaming(invocation).await?
        };
        println!();

        if status.success() {
            Ok(())
        } else {
            Err(ScaffoldError::CommandFailed {
                command: cmd,
                status: describe(status),
            }
            .into())
        }
    }
}

fn describe(status: ExitStatus) -> String {
    match status.code() {
        Some(code) => format!("exit code {}", code),
        None => "terminated by signal".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_command_line_joins_program_and_args() {
        let inv = Invocation::new("git", &["init", "-b", "main"], Path::new("demo"));
        assert_eq!(inv.command_line(), "git init -b main");
        assert!(!inv.interactive);
        assert!(Invocation::new("yarn", &[], Path::new(".")).interactive().interactive);
        assert_eq!(Invocation::new("yarn", &[], Path::new(".")).command_line(), "yarn");
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_system_runner_reports_failure() {
        let tmp = tempfile::TempDir::new().unwrap();
        let inv = Invocation::new("sh", &["-c", "echo out; echo err >&2; exit 3"], tmp.path());

        let err = SystemRunner.run(&inv).await.unwrap_err();
        match err.downcast_ref::<ScaffoldError>() {
            Some(ScaffoldError::CommandFailed { status, .. }) => {
                assert_eq!(status, "exit code 3")
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_system_runner_runs_in_cwd() {
        let tmp = tempfile::TempDir::new().unwrap();
        let inv = Invocation::new("sh", &["-c", "touch marker"], tmp.path());

        SystemRunner.run(&inv).await.unwrap();
        assert!(tmp.path().join("marker").exists());
    }
}
