//! Items used by the derive macro.
//!
//! These are not meant to be used directly by users of the library. Generated
//! code goes through this module so that the public paths can move without
//! breaking already-expanded derives.
pub use crate::schema::{Bind, Schema};
