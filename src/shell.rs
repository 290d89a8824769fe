//! Running the front-end package manager

use std::io::{self, Write};
use std::path::Path;
use std::process::Command;

use crate::error::{Result, SetupError};

/// Exit status of a finished command
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShellOutput {
    pub success: bool,
    pub code: Option<i32>,
}

pub trait ShellRunner {
    /// Run `program` with `args` in `cwd` and wait for it to finish
    fn run(&mut self, program: &str, args: &[String], cwd: &Path) -> Result<ShellOutput>;
}

/// Runs commands with `std::process::Command` and echoes stdout, then
/// stderr, to `out`
#[derive(Debug)]
pub struct SystemShell<W = io::Stdout> {
    out: W,
}

impl SystemShell {
    pub fn stdout() -> Self {
        Self { out: io::stdout() }
    }
}

impl<W: Write> SystemShell<W> {
    #[cfg(test)]
    pub fn with_output(out: W) -> Self {
        Self { out }
    }

    #[cfg(test)]
    pub fn into_output(self) -> W {
        self.out
    }
}

impl<W: Write> ShellRunner for SystemShell<W> {
    fn run(&mut self, program: &str, args: &[String], cwd: &Path) -> Result<ShellOutput> {
        let command_line = std::iter::once(program)
            .chain(args.iter().map(String::as_str))
            .collect::<Vec<_>>()
            .join(" ");
        log::debug!("running {command_line} in {}", cwd.display());

        let output = Command::new(program)
            .args(args)
            .current_dir(cwd)
            .output()
            .map_err(|e| SetupError::ShellExecutionFailed {
                command: command_line.clone(),
                reason: e.to_string(),
            })?;

        self.out.write_all(&output.stdout)?;
        self.out.write_all(&output.stderr)?;
        self.out.flush()?;

        if !output.status.success() {
            log::debug!("{command_line} exited with {}", output.status);
        }

        Ok(ShellOutput {
            success: output.status.success(),
            code: output.status.code(),
        })
    }
}

/// Records invocations instead of running anything
#[cfg(test)]
#[derive(Debug, Default)]
pub struct RecordingShell {
    pub calls: Vec<(String, Vec<String>, std::path::PathBuf)>,
}

#[cfg(test)]
impl ShellRunner for RecordingShell {
    fn run(&mut self, program: &str, args: &[String], cwd: &Path) -> Result<ShellOutput> {
        self.calls
            .push((program.to_string(), args.to_vec(), cwd.to_path_buf()));
        Ok(ShellOutput {
            success: true,
            code: Some(0),
        })
    }
}
