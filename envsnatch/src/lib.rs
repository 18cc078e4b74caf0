//! Bind environment variables, or a `.env` file, onto typed configuration
//! structs.
//!
//! ```no_run
//! use envsnatch::{Bind, Binder};
//!
//! #[derive(Bind, Default)]
//! pub struct Config {
//!     #[env("DATABASE_URL")]
//!     database_url: String,
//!     #[env("PORT,optional")]
//!     port: u16,
//! }
//!
//! let mut config = Config { port: 8080, ..Default::default() };
//! let mut binder = Binder::new();
//!
//! if let Err(errors) = binder.bind(&mut config) {
//!     eprintln!("{errors}");
//! }
//! ```
mod binder;
mod coerce;
mod error;
mod schema;
mod source;

#[doc(hidden)]
#[path = "private.rs"]
pub mod __private;

pub use binder::Binder;
pub use coerce::{Kind, Primitive};
pub use envsnatch_derive::Bind;
pub use error::{BindErrors, BindingError, Reason};
pub use schema::{Bind, FieldSpec, Schema};
