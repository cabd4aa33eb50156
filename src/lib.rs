//! texweave - render embedded markup fragments into a text template
//!
//! A template mixes literal text with `{{ ... }}` placeholders. Each
//! placeholder is forwarded verbatim to an external rendering collaborator
//! (one subprocess per placeholder) and replaced by the collaborator's
//! output; literal text is copied through unchanged. The pipeline is
//! fail-fast: the first renderer or I/O failure aborts the whole run with
//! no partial document produced.
//!
//! # Example
//!
//! ```rust
//! use texweave::{parse, substitute, RenderError, WrapMode};
//!
//! let template = parse("# {{\\LaTeX}}clippings").unwrap();
//! let doc = substitute(
//!     &template,
//!     |tex| Ok::<_, RenderError>(format!("<b>{tex}</b>")),
//!     WrapMode::Raw,
//! )
//! .unwrap();
//! assert_eq!(doc, "# <b>\\LaTeX</b>clippings");
//! ```

pub mod config;
pub mod error;
pub mod renderer;
pub mod template;

pub use config::{ConfigError, Profile};
pub use error::TemplateError;
pub use renderer::{CommandRenderer, WrapMode};
pub use template::{parse, Placeholder, Segment, Template};

use std::ffi::OsString;
use std::fs;
use std::io;
use std::path::Path;

use log::debug;
use thiserror::Error;

/// Errors that can occur during the render pipeline
#[derive(Debug, Error)]
pub enum RenderError {
    /// The template could not be parsed
    #[error("template error: {0}")]
    Template(#[from] TemplateError),

    /// The rendering collaborator reported failure for one placeholder
    #[error("renderer failed for `{placeholder}`: {diagnostic}")]
    ExternalFailure {
        placeholder: String,
        diagnostic: String,
    },

    /// The collaborator could not be spawned, or a sink could not be
    /// written
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
}

/// Configuration for the complete render pipeline
#[derive(Debug, Clone)]
pub struct RenderConfig {
    /// External renderer invocation
    pub renderer: CommandRenderer,
    /// Fragment substitution mode
    pub wrap: WrapMode,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self::from_profile(&Profile::default())
    }
}

impl RenderConfig {
    /// Create a new configuration with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a configuration from a loaded profile
    pub fn from_profile(profile: &Profile) -> Self {
        Self {
            renderer: CommandRenderer::from_profile(profile),
            wrap: profile.wrap,
        }
    }

    /// Set the renderer invocation
    pub fn with_renderer(mut self, renderer: CommandRenderer) -> Self {
        self.renderer = renderer;
        self
    }

    /// Set the fragment substitution mode
    pub fn with_wrap(mut self, wrap: WrapMode) -> Self {
        self.wrap = wrap;
        self
    }
}

/// Substitute every placeholder in `template` using the `invoke`
/// capability, in document order.
///
/// `invoke` maps placeholder markup to a rendered fragment. Each
/// occurrence is rendered independently; there is no caching across
/// placeholders. The first failure propagates immediately, so later
/// placeholders are never invoked and no partial output escapes.
pub fn substitute<F>(
    template: &Template,
    mut invoke: F,
    wrap: WrapMode,
) -> Result<String, RenderError>
where
    F: FnMut(&str) -> Result<String, RenderError>,
{
    let mut out = String::new();
    for segment in &template.segments {
        match segment {
            Segment::Literal(text) => out.push_str(text),
            Segment::Placeholder(placeholder) => {
                debug!("rendering placeholder at {:?}", placeholder.span);
                let fragment = invoke(&placeholder.text)?;
                match wrap {
                    WrapMode::Raw => out.push_str(&fragment),
                    WrapMode::Image => {
                        out.push_str(&renderer::inline_image(&placeholder.text, &fragment))
                    }
                }
            }
        }
    }
    Ok(out)
}

/// Render template source to a document with default configuration
///
/// Parses the source, pipes each placeholder through the configured
/// external renderer, and returns the substituted document. Writing the
/// document to its sink is the caller's step, taken only on success.
pub fn render(source: &str) -> Result<String, RenderError> {
    render_with_config(source, &RenderConfig::default())
}

/// Write the rendered document to its file sink.
///
/// The contents are staged in a hidden `.<name>.tmp` sibling and renamed
/// over the target, so the target always holds either its previous
/// contents or the complete new document, never a truncated mix.
pub fn write_document(path: &Path, document: &str) -> io::Result<()> {
    let file_name = path.file_name().ok_or_else(|| {
        io::Error::new(io::ErrorKind::InvalidInput, "output path has no file name")
    })?;
    let mut tmp_name = OsString::from(".");
    tmp_name.push(file_name);
    tmp_name.push(".tmp");
    let tmp = path.with_file_name(tmp_name);

    if let Err(e) = fs::write(&tmp, document) {
        let _ = fs::remove_file(&tmp);
        return Err(e);
    }
    if let Err(e) = fs::rename(&tmp, path) {
        let _ = fs::remove_file(&tmp);
        return Err(e);
    }
    Ok(())
}

/// Render template source to a document with custom configuration
pub fn render_with_config(source: &str, config: &RenderConfig) -> Result<String, RenderError> {
    let template = parse(source)?;
    debug!(
        "parsed template: {} segments, {} placeholders",
        template.segments.len(),
        template.placeholders().count()
    );
    substitute(&template, |markup| config.renderer.invoke(markup), config.wrap)
}
