//! # peaceconnect
//!
//! Host-side models behind the PeaceConnect site scripts: the back-office
//! dashboard (tables, detail modal, charts, settings) and the public front office
//! (carousel, goal grid, newsletter, notifications, scroll reveal).
//!
//! Nothing here touches the DOM. The browser crate (`peaceconnect_web`) wires these
//! models to the page; keeping them apart lets every rule run under `cargo test`.
//!
//! ## Quick Start
//!
//! ```
//! use peaceconnect::prelude::*;
//!
//! // Render the projects table into any row container.
//! let mut body: Vec<TableRow> = Vec::new();
//! Table::Projects.load(&mut body, 50);
//! assert_eq!(body.len(), 4);
//!
//! // Walk the testimonial carousel.
//! let mut carousel = Carousel::new(3).unwrap();
//! assert_eq!(carousel.prev(), 2);
//!
//! assert!(newsletter::validate("a@b.co"));
//! ```
//!
//! ## Modules
//!
//! - [`table`], [`detail`], [`actions`], [`navigation`], [`charts`], [`settings`]:
//!   back office
//! - [`carousel`], [`goals`], [`newsletter`], [`notification`], [`reveal`],
//!   [`scroll`]: front office
//! - [`bootstrap`], [`config`], [`backend`], [`error`]: shared plumbing

pub mod actions;
pub mod backend;
pub mod bootstrap;
pub mod carousel;
pub mod charts;
pub mod config;
pub mod dataset;
pub mod detail;
pub mod entity;
pub mod error;
pub mod goals;
pub mod navigation;
pub mod newsletter;
pub mod notification;
pub mod records;
pub mod reveal;
pub mod scroll;
pub mod settings;
pub mod table;

pub use error::{Error, Result};

/// Prelude module for convenient imports.
///
/// ```
/// use peaceconnect::prelude::*;
/// ```
pub mod prelude {
    pub use crate::actions::{Dialogs, ModalHost};
    pub use crate::backend::{Backend, InertBackend};
    pub use crate::bootstrap::{Surface, Wired};
    pub use crate::carousel::Carousel;
    pub use crate::config::SiteConfig;
    pub use crate::entity::EntityKind;
    pub use crate::newsletter;
    pub use crate::table::{RowSink, Table, TableRow};
}
