pub mod activity;
pub mod goal;
pub mod macros;

pub use activity::*;
pub use goal::*;
