use thiserror::Error;

/// Errors surfaced while setting up or running a render.
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("cannot build a BVH over an empty scene")]
    EmptyScene,

    #[error("render requested before any geometry was saved to the scene")]
    MissingWorld,

    #[error("invalid render configuration: {0}")]
    InvalidConfig(String),

    #[error("failed to build the worker thread pool")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),

    #[error("I/O error")]
    Io(#[from] std::io::Error),

    #[error("failed to encode image")]
    Image(#[from] image::ImageError),
}
