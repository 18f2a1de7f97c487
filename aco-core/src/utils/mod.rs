//! This module contains helper functionality.

mod comparison;
pub use self::comparison::*;

mod environment;
pub use self::environment::*;

mod error;
pub use self::error::*;

mod history;
pub use self::history::*;

mod random;
pub use self::random::*;

mod selection;
pub use self::selection::*;

mod timing;
pub use self::timing::*;

mod types;
pub use self::types::*;
