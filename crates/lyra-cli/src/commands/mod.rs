//! Command implementations.

pub mod check;
pub mod list;

pub use self::check::execute_check;
pub use self::list::execute_list;
