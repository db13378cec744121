// One error type for the host side. Rendering itself never fails.
// Every variant states *where* things went wrong.

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("Window init error: {0}")]
    WindowInit(String), // Creating the window failed

    #[error("Window update error: {0}")]
    WindowUpdate(String), // Pushing the frame to the window failed

    #[error("Snapshot error: {0}")]
    Snapshot(#[from] image::ImageError), // Encoding a PNG failed

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_prefixes_are_stable() {
        assert!(Error::WindowInit("x".into()).to_string().starts_with("Window init error:"));
        assert!(Error::WindowUpdate("x".into()).to_string().starts_with("Window update error:"));
        assert!(Error::InvalidArgument("x".into()).to_string().starts_with("Invalid argument:"));
    }

    #[test]
    fn io_preserves_source() {
        let err: Error = std::io::Error::other("boom").into();
        assert!(err.to_string().contains("boom"));
    }
}
