use thiserror::Error;

/// Fatal startup failures. Once the main loop is running nothing can fail,
/// the only way out is the machine reaching [`RunState::Quit`].
///
/// [`RunState::Quit`]: crate::RunState::Quit
#[derive(Debug, Error, PartialEq)]
pub enum Error {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Unable to initialize platform: {0}")]
    PlatformInit(String),

    #[error("Could not create window: {0}")]
    WindowCreate(String),

    #[error("Could not create renderer: {0}")]
    RendererCreate(String),
}
