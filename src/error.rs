use std::fmt::{Debug, Display};

/// Which half of the single load-then-save pass failed.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum ErrorKind {
    /// The input could not be opened or decoded.
    Read,
    /// The output could not be encoded or written.
    Write,
}

pub struct NoiseError {
    pub kind: ErrorKind,
    pub message: String,
}

impl NoiseError {
    pub fn new(kind: ErrorKind, message: String) -> Self {
        NoiseError { kind, message }
    }

    pub fn kind(&self) -> ErrorKind {
        self.kind
    }
}

impl Display for NoiseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.message)
    }
}

impl Debug for NoiseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NoiseError")
            .field("kind", &self.kind)
            .field("message", &self.message)
            .finish()
    }
}

impl std::error::Error for NoiseError {}

#[macro_export]
macro_rules! sp_err {
    ($kind:expr, $($msg:tt)+) => {
        $crate::error::NoiseError::new(
            $kind,
            format!(
                "saltpepper: {} @ {}:{}:{}",
                format_args!($($msg)+),
                file!(),
                line!(),
                column!()
            ),
        )
    };
}

#[macro_export]
macro_rules! sp_try {
    ($kind:expr, $expr:expr $(,)?) => {
        match $expr {
            std::result::Result::Ok(val) => val,
            std::result::Result::Err(err) => {
                return std::result::Result::Err($crate::sp_err!($kind, "{}", err));
            }
        }
    };
}
