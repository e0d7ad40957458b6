//! db-ui playground
//!
//! A demo screen exercising every component and token table. The screen
//! owns its state the way a host application would and wires every
//! component in controlled mode.
//!
//! # Example
//!
//! ```rust
//! use playground::{Playground, PlaygroundConfig};
//!
//! let app = Playground::new(PlaygroundConfig::default());
//! let tree = app.render();
//! let path = tree.path_of("open-modal").unwrap();
//! assert!(tree.press(&path));
//! assert!(app.state().modal_visible);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod config;
pub mod error;
pub mod screen;

pub use config::{PlaygroundConfig, CONFIG_ENV};
pub use error::{PlaygroundError, Result};
pub use screen::{Playground, PlaygroundState};
