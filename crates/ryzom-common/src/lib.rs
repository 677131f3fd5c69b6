pub mod errors;
pub mod types;

pub use errors::{CodeError, ConfigError, RyzomError};
pub use types::{ColorToken, Message, MessageKind, RangePolicy, Rgba, Segment};

pub type Result<T> = std::result::Result<T, RyzomError>;
