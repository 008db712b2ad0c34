//! Browser-independent core of the custom Hexo theme's behavior layer.
//!
//! The `frontend` crate binds these pieces to the DOM. Everything here runs
//! natively, which keeps the decisions unit-testable.

pub mod config;
pub mod copy;
pub mod error;
pub mod generation;
pub mod guard;
pub mod lazy;
pub mod preference;
pub mod scroll;
pub mod search;
pub mod throttle;

pub use config::{Selectors, ThemeConfig, Timings};
pub use copy::CopyFeedback;
pub use error::{Result, ThemeError};
pub use generation::Generation;
pub use guard::InitGuard;
pub use lazy::LoadStrategy;
pub use preference::{ClassTarget, Mode, ModeToggle, PreferenceStore};
pub use search::{PlaceholderSearch, QueryAction, SearchBackend, SearchHit};
pub use throttle::Throttle;
