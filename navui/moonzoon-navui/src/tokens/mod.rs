// Design tokens shared by the navigation components

pub mod focus;
pub mod spacing;
pub mod theme;
pub mod typography;
pub use focus::*;
pub use spacing::*;
pub use theme::*;
pub use typography::*;
