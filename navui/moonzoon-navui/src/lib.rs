//! # MoonZoon NavUI
//!
//! Documentation navigation components for MoonZoon applications.
//!
//! - **SearchInput**: text field that reports every value change
//! - **SideNav**: collapsible route tree with live, case-sensitive label search
//!
//! ## Quick Start
//!
//! ```rust
//! use moonzoon_navui::*;
//! use shared::{Route, RouteTreeItem};
//! use zoon::*;
//!
//! fn docs_nav() -> impl Element {
//!     side_nav()
//!         .routes(vec![Route::new("/a", "Alpha"), Route::new("/b", "Beta")])
//!         .route_tree(vec![RouteTreeItem::group("Letters", vec![
//!             RouteTreeItem::item(0),
//!             RouteTreeItem::item(1),
//!         ])])
//!         .searchable(true)
//!         .build()
//! }
//! ```

pub mod components;
pub mod tokens;

pub use components::*;
pub use tokens::*;

pub use zoon;
