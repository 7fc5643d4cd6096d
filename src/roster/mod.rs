//! Employee roster and data sources.
//!
//! The calculation module only ever sees `&[Employee]`. This module is where
//! those records come from ([`EmployeeSource`]), where they live for the
//! session ([`Roster`]), and where leave usage is appended to them.

mod query;
mod rng;
mod source;
mod store;
mod synthetic;

pub use query::{DEFAULT_PER_PAGE, EmployeeQuery, MAX_PER_PAGE, Page};
pub use rng::DemoRng;
pub use source::{EmployeeSource, FileSource};
pub use store::Roster;
pub use synthetic::{DEPARTMENTS, SyntheticSource};
