use thiserror::Error;

/// Errors produced while rendering a document.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RenderError {
    /// An embedded asset had no bound file. Raised only under
    /// [`AssetPolicy::Fail`](crate::AssetPolicy::Fail); the skip policy logs
    /// and drops the node instead.
    #[error("embedded asset '{title}' has no bound file")]
    MissingAssetFile { title: String },
}
