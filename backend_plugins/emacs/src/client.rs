use serde::Deserialize;
use std::process::Command;

pub const DEFAULT_PROGRAM: &str = "emacsclient";

/// How to reach the running Emacs server.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    /// Client program to invoke.
    pub program: String,
    /// Server socket name, passed as `-s <socket>` when set.
    pub socket: Option<String>,
    /// Extra arguments inserted before the evaluation flag.
    pub extra_args: Vec<String>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            program: DEFAULT_PROGRAM.to_string(),
            socket: None,
            extra_args: Vec::new(),
        }
    }
}

impl ClientConfig {
    /// Defaults, with the program taken from `EMACSCLIENT` when set.
    pub fn from_env() -> Self {
        let mut config = Self::default();
        if let Ok(program) = std::env::var("EMACSCLIENT") {
            if !program.trim().is_empty() {
                config.program = program;
            }
        }
        config
    }
}

#[derive(thiserror::Error, Debug)]
pub enum ClientError {
    #[error("failed to spawn {program}: {source}")]
    Spawn {
        program: String,
        source: std::io::Error,
    },
    #[error("{program} exited with {status}: {stderr}")]
    NonZeroExit {
        program: String,
        status: std::process::ExitStatus,
        stderr: String,
    },
}

/// Seam for sending expressions to the editor. The production
/// implementation is [`EmacsClient`]; tests substitute recording stubs.
pub trait EvalClient {
    fn eval(&self, expressions: &[String]);
}

#[derive(Debug, Clone, Default)]
pub struct EmacsClient {
    config: ClientConfig,
}

impl EmacsClient {
    pub fn new(config: ClientConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Arguments passed to the client program, in order. The single `-e`
    /// flag makes the client evaluate every following argument as an
    /// expression, so the supplied list rides along unmodified.
    pub fn argv(&self, expressions: &[String]) -> Vec<String> {
        let mut argv = Vec::with_capacity(expressions.len() + self.config.extra_args.len() + 3);
        if let Some(socket) = &self.config.socket {
            argv.push("-s".to_string());
            argv.push(socket.clone());
        }
        argv.extend(self.config.extra_args.iter().cloned());
        argv.push("-e".to_string());
        argv.extend(expressions.iter().cloned());
        argv
    }

    fn run(&self, expressions: &[String]) -> Result<(), ClientError> {
        let argv = self.argv(expressions);
        log::debug!("running {} {argv:?}", self.config.program);
        let output = Command::new(&self.config.program)
            .args(&argv)
            .output()
            .map_err(|source| ClientError::Spawn {
                program: self.config.program.clone(),
                source,
            })?;
        if output.status.success() {
            Ok(())
        } else {
            Err(ClientError::NonZeroExit {
                program: self.config.program.clone(),
                status: output.status,
                stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
            })
        }
    }
}

impl EvalClient for EmacsClient {
    /// Evaluate the given expressions in the Emacs server. Best effort: a
    /// failed or missing client is logged and otherwise ignored so a
    /// plotting call never fails because the display side channel is down.
    fn eval(&self, expressions: &[String]) {
        if let Err(err) = self.run(expressions) {
            log::error!(
                "failed to run emacs command {} {expressions:?}: {err}",
                self.config.program
            );
        }
    }
}
