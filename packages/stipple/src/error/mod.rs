pub mod types;

pub use types::{StippleError, StippleErrorSeverity, StippleResult};
