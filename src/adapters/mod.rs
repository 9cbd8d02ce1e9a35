pub mod cancel;
pub mod provider;
pub mod ui;

pub use cancel::*;
pub use provider::*;
pub use ui::*;
