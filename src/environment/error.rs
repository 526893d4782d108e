/// Errors that may occur while probing a snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error("no window-like global is present in the ambient scope")]
    MissingWindow,
    #[error("cross-origin access to the top-level window reference was denied by the host")]
    FrameAccessDenied,
}

pub type Result<T> = std::result::Result<T, Error>;
