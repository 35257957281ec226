// Copyright (c) SocialNet Team
// SPDX-License-Identifier: Apache-2.0

mod dot;

pub use dot::to_dot;

use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

use thiserror::Error;
use tracing::{debug, info};

use crate::registry::{RegistryError, SchemaRegistry};

/// Graphviz filter used when no other renderer is configured.
pub const DEFAULT_RENDERER: &str = "dot";

/// Everything that can go wrong between a registry and a PNG on disk.
#[derive(Debug, Error)]
pub enum DiagramError {
    #[error("schema registry is not self-consistent")]
    InvalidSchema(#[from] RegistryError),

    #[error("graphviz binary `{command}` was not found on PATH")]
    RendererNotFound { command: String },

    #[error("i/o failure while rendering the diagram")]
    Io(#[from] std::io::Error),

    #[error("graphviz exited with {status}: {stderr}")]
    RendererFailed {
        status: std::process::ExitStatus,
        stderr: String,
    },

    #[error("renderer produced an empty file at {}", path.display())]
    EmptyOutput { path: PathBuf },
}

/// Proof of a completed render: where the diagram landed and how big it is.
#[derive(Debug)]
pub struct RenderedDiagram {
    pub path: PathBuf,
    pub size_bytes: u64,
}

/// Render the registry as an ER diagram PNG using the default renderer.
pub fn render_er(
    registry: &SchemaRegistry,
    output: &Path,
) -> Result<RenderedDiagram, DiagramError> {
    render_with(DEFAULT_RENDERER, registry, output)
}

/// Render the registry as an ER diagram PNG at `output`.
///
/// The registry is validated first, so a malformed schema fails before any
/// process is spawned. The DOT source is streamed to the renderer on stdin;
/// the renderer writes the PNG itself. A zero-byte output file counts as a
/// failure, never a quiet success.
pub fn render_with(
    renderer: &str,
    registry: &SchemaRegistry,
    output: &Path,
) -> Result<RenderedDiagram, DiagramError> {
    registry.validate()?;

    let dot_source = to_dot(registry);
    debug!(
        entities = registry.len(),
        relationships = registry.relationships().len(),
        "generated DOT source"
    );

    let mut child = Command::new(renderer)
        .arg("-Tpng")
        .arg("-o")
        .arg(output)
        .stdin(Stdio::piped())
        .stdout(Stdio::null())
        .stderr(Stdio::piped())
        .spawn()
        .map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                DiagramError::RendererNotFound {
                    command: renderer.to_string(),
                }
            } else {
                DiagramError::Io(e)
            }
        })?;

    if let Some(mut stdin) = child.stdin.take() {
        stdin.write_all(dot_source.as_bytes())?;
    }

    let rendered = child.wait_with_output()?;
    if !rendered.status.success() {
        return Err(DiagramError::RendererFailed {
            status: rendered.status,
            stderr: String::from_utf8_lossy(&rendered.stderr).trim().to_string(),
        });
    }

    let size_bytes = std::fs::metadata(output)?.len();
    if size_bytes == 0 {
        return Err(DiagramError::EmptyOutput {
            path: output.to_path_buf(),
        });
    }

    info!(path = %output.display(), size_bytes, "rendered ER diagram");
    Ok(RenderedDiagram {
        path: output.to_path_buf(),
        size_bytes,
    })
}

/// Probe for a usable graphviz install.
pub fn renderer_available(renderer: &str) -> bool {
    Command::new(renderer)
        .arg("-V")
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .status()
        .map(|status| status.success())
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::{RelationshipDef, SchemaRegistry};

    fn skip_without_graphviz() -> bool {
        if renderer_available(DEFAULT_RENDERER) {
            false
        } else {
            eprintln!("graphviz not installed, skipping render test");
            true
        }
    }

    #[test]
    fn missing_renderer_is_reported_as_such() {
        let dir = tempfile::tempdir().unwrap();
        let output = dir.path().join("diagram.png");
        let err = render_with(
            "graphviz-binary-that-does-not-exist",
            &SchemaRegistry::social_media(),
            &output,
        )
        .unwrap_err();
        assert!(matches!(err, DiagramError::RendererNotFound { .. }));
    }

    #[test]
    fn malformed_schema_fails_before_rendering() {
        let mut registry = SchemaRegistry::social_media();
        registry.declare_relationship(RelationshipDef::many_to_one(
            "posts",
            "user_id",
            "accounts",
        ));
        let dir = tempfile::tempdir().unwrap();
        let output = dir.path().join("diagram.png");
        // The renderer name is bogus on purpose: validation has to reject
        // the schema before the binary is ever looked up.
        let err = render_with("graphviz-binary-that-does-not-exist", &registry, &output)
            .unwrap_err();
        assert!(matches!(err, DiagramError::InvalidSchema(_)));
        assert!(!output.exists());
    }

    #[test]
    fn full_schema_renders_to_a_nonempty_png() {
        if skip_without_graphviz() {
            return;
        }
        let dir = tempfile::tempdir().unwrap();
        let output = dir.path().join("diagram.png");
        let rendered = render_er(&SchemaRegistry::social_media(), &output).unwrap();
        assert_eq!(rendered.path, output);
        assert!(rendered.size_bytes > 0);
        let bytes = std::fs::read(&output).unwrap();
        assert!(bytes.starts_with(b"\x89PNG\r\n\x1a\n"));
    }

    #[test]
    fn rendering_twice_produces_identical_output() {
        if skip_without_graphviz() {
            return;
        }
        let dir = tempfile::tempdir().unwrap();
        let first = dir.path().join("first.png");
        let second = dir.path().join("second.png");
        let registry = SchemaRegistry::social_media();
        render_er(&registry, &first).unwrap();
        render_er(&registry, &second).unwrap();
        assert_eq!(
            std::fs::read(&first).unwrap(),
            std::fs::read(&second).unwrap()
        );
    }

    #[test]
    fn empty_registry_never_no_ops_silently() {
        if skip_without_graphviz() {
            return;
        }
        let dir = tempfile::tempdir().unwrap();
        let output = dir.path().join("diagram.png");
        match render_er(&SchemaRegistry::new(), &output) {
            Ok(rendered) => assert!(rendered.size_bytes > 0),
            Err(err) => assert!(matches!(
                err,
                DiagramError::RendererFailed { .. } | DiagramError::EmptyOutput { .. }
            )),
        }
    }
}
