mod activity;
mod presence;

pub use activity::*;
pub use presence::*;
