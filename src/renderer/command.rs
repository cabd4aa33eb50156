//! Subprocess invocation of the rendering collaborator

use std::io::Write;
use std::process::{Command, Stdio};
use std::thread;

use log::debug;

use crate::config::Profile;
use crate::RenderError;

/// Renders markup by piping it through an external program.
///
/// One subprocess is spawned per invocation; nothing is cached between
/// calls. All process handles are closed when the invocation returns,
/// on the failure paths included.
#[derive(Debug, Clone)]
pub struct CommandRenderer {
    program: String,
    args: Vec<String>,
    format: Option<String>,
}

impl CommandRenderer {
    /// Create a renderer invoking `program` with no extra arguments
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
            format: None,
        }
    }

    /// Create a renderer from a loaded profile
    pub fn from_profile(profile: &Profile) -> Self {
        Self {
            program: profile.command.clone(),
            args: profile.args.clone(),
            format: profile.format.clone(),
        }
    }

    /// Set fixed arguments passed before the format selector
    pub fn with_args(mut self, args: Vec<String>) -> Self {
        self.args = args;
        self
    }

    /// Set the format selector, passed as the final argument
    pub fn with_format(mut self, format: impl Into<String>) -> Self {
        self.format = Some(format.into());
        self
    }

    /// Get the program name
    pub fn program(&self) -> &str {
        &self.program
    }

    /// Render one piece of markup through the collaborator.
    ///
    /// Markup goes to the child's stdin; the rendered fragment is read
    /// from its stdout. A non-zero exit maps to
    /// [`RenderError::ExternalFailure`] carrying the markup and the
    /// child's stderr (or its stdout when stderr is empty, as some tools
    /// log errors there). Spawn and pipe failures map to
    /// [`RenderError::Io`].
    pub fn invoke(&self, markup: &str) -> Result<String, RenderError> {
        let mut cmd = Command::new(&self.program);
        cmd.args(&self.args);
        if let Some(format) = &self.format {
            cmd.arg(format);
        }
        cmd.stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped());

        debug!("invoking renderer: {} {:?}", self.program, self.args);
        let mut child = cmd.spawn()?;

        // Feed stdin from a separate thread so a renderer that streams
        // output while reading cannot fill both pipes and wedge. The
        // collaborator may also exit before draining its input; the exit
        // status decides the outcome, not a broken pipe here.
        let writer = child.stdin.take().map(|mut stdin| {
            let markup = markup.to_string();
            thread::spawn(move || {
                let _ = stdin.write_all(markup.as_bytes());
            })
        });

        let output = child.wait_with_output()?;
        if let Some(writer) = writer {
            let _ = writer.join();
        }
        let stdout = String::from_utf8_lossy(&output.stdout);

        if output.status.success() {
            Ok(stdout.into_owned())
        } else {
            let stderr = String::from_utf8_lossy(&output.stderr);
            let diagnostic = if stderr.trim().is_empty() {
                stdout.trim().to_string()
            } else {
                stderr.trim().to_string()
            };
            debug!(
                "renderer exited with {:?}: {}",
                output.status.code(),
                diagnostic
            );
            Err(RenderError::ExternalFailure {
                placeholder: markup.to_string(),
                diagnostic,
            })
        }
    }
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;

    #[test]
    fn test_invoke_pipes_markup_through_stdout() {
        let renderer = CommandRenderer::new("cat");
        let fragment = renderer.invoke("\\LaTeX").unwrap();
        assert_eq!(fragment, "\\LaTeX");
    }

    #[test]
    fn test_invoke_streams_markup_larger_than_pipe_buffers() {
        // A filter that echoes while reading must not wedge on markup
        // bigger than the OS pipe buffers
        let markup = "x".repeat(1 << 20);
        let renderer = CommandRenderer::new("cat");
        let fragment = renderer.invoke(&markup).unwrap();
        assert_eq!(fragment, markup);
    }

    #[test]
    fn test_invoke_passes_format_as_final_argument() {
        let renderer = CommandRenderer::new("sh")
            .with_args(vec!["-c".to_string(), "echo \"$1\"".to_string(), "sh".to_string()])
            .with_format("html");
        let fragment = renderer.invoke("ignored").unwrap();
        assert_eq!(fragment, "html\n");
    }

    #[test]
    fn test_invoke_failure_carries_stderr_diagnostic() {
        let renderer = CommandRenderer::new("sh").with_args(vec![
            "-c".to_string(),
            "echo 'undefined control sequence' >&2; exit 1".to_string(),
        ]);
        let err = renderer.invoke("\\badmacro").unwrap_err();
        match err {
            RenderError::ExternalFailure {
                placeholder,
                diagnostic,
            } => {
                assert_eq!(placeholder, "\\badmacro");
                assert_eq!(diagnostic, "undefined control sequence");
            }
            other => panic!("expected ExternalFailure, got {other:?}"),
        }
    }

    #[test]
    fn test_invoke_failure_falls_back_to_stdout_diagnostic() {
        // pdflatex-style tools report errors on stdout
        let renderer = CommandRenderer::new("sh").with_args(vec![
            "-c".to_string(),
            "echo '! Undefined control sequence.'; exit 1".to_string(),
        ]);
        let err = renderer.invoke("x").unwrap_err();
        match err {
            RenderError::ExternalFailure { diagnostic, .. } => {
                assert_eq!(diagnostic, "! Undefined control sequence.");
            }
            other => panic!("expected ExternalFailure, got {other:?}"),
        }
    }

    #[test]
    fn test_invoke_missing_program_is_io_error() {
        let renderer = CommandRenderer::new("texweave-no-such-renderer");
        let err = renderer.invoke("x").unwrap_err();
        assert!(matches!(err, RenderError::Io(_)));
    }
}
