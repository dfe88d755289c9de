use thiserror::Error;

use vellum_doc::DocError;
use vellum_render::RenderError;
use vellum_source::SourceError;

/// A comprehensive error type for the whole content rendering pipeline.
#[derive(Error, Debug)]
pub enum PipelineError {
    #[error("document decoding failed: {0}")]
    Doc(#[from] DocError),

    #[error("rendering failed: {0}")]
    Render(#[from] RenderError),

    #[error("content source failed: {0}")]
    Source(#[from] SourceError),
}
