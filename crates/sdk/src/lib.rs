//! Sagoma SDK
//!
//! Fluent builders for declaring custom content types and taxonomies to a
//! host content-management platform. A builder validates its slug against
//! the host's reserved names and length limit at construction, accumulates
//! optional settings into a typed configuration record, and hands the
//! finished record to the host through the [`Registrar`] trait.
//!
//! ```
//! use sagoma_sdk::prelude::*;
//!
//! # fn declare(registrar: &mut dyn Registrar) -> anyhow::Result<()> {
//! let labels = Labels::new()
//!     .name("Books")
//!     .singular_name("Book")
//!     .description("Books catalog");
//!
//! ContentType::new("book", &labels)?
//!     .labels(&labels)
//!     .has_archive(true)
//!     .rewrite(&Rewrite::new().slug("books"))
//!     .register(registrar)?;
//!
//! Taxonomy::new("genre", &["book"], &labels)?
//!     .hierarchical(true)
//!     .register(registrar)?;
//! # Ok(())
//! # }
//! ```

pub mod content_type;
pub mod error;
pub mod labels;
pub mod locale;
pub mod registrar;
pub mod reserved;
pub mod rewrite;
pub mod taxonomy;

pub use content_type::{ContentType, ContentTypeArgs, ShowInMenu};
pub use error::{BuilderError, EntityKind};
pub use labels::Labels;
pub use registrar::Registrar;
pub use rewrite::Rewrite;
pub use taxonomy::{DefaultTerm, HostCallback, Taxonomy, TaxonomyArgs};

pub mod prelude {
    pub use crate::content_type::{ContentType, ContentTypeArgs, ShowInMenu};
    pub use crate::error::{BuilderError, EntityKind};
    pub use crate::labels::Labels;
    pub use crate::locale::{Passthrough, Translator};
    pub use crate::registrar::Registrar;
    pub use crate::reserved::{RESERVED_CONTENT_TYPES, RESERVED_TAXONOMIES};
    pub use crate::rewrite::Rewrite;
    pub use crate::taxonomy::{DefaultTerm, HostCallback, Taxonomy, TaxonomyArgs};
}
