//! # Catalog Module
//!
//! Keyword/regex tables that drive every classification step.
//!
//! Three independent catalogs exist:
//!
//! - **Location**: project, area, resource, archive. Scored by match count.
//! - **Subject**: code, nutrition, business, ... Used for the location
//!   subfolder. Presence only.
//! - **Tag**: type and subject tags. Presence only.
//!
//! ## Module layout
//!
//! - `builtin`: static pattern tables
//! - `store`: compiled `PatternCatalog`
//!
//! ## Example
//!
//! ```rust
//! use para_sort_core::catalog::{LOCATION_CATALOG, TAG_CATALOG};
//!
//! assert_eq!(
//!     LOCATION_CATALOG.names(),
//!     vec!["project", "area", "resource", "archive"]
//! );
//!
//! let found = TAG_CATALOG.present_categories("weekly meeting about the api");
//! assert!(found.contains(&"meeting".to_string()));
//! assert!(found.contains(&"code".to_string()));
//! ```

mod builtin;
mod store;

pub use builtin::{BuiltinCategory, LOCATION_CATEGORIES, SUBJECT_CATEGORIES, TAG_CATEGORIES};
pub use store::{
    CategoryDef, CategoryRules, CustomCategoriesConfig, CustomCategoryEntry, PatternCatalog,
    LOCATION_CATALOG, SUBJECT_CATALOG, TAG_CATALOG,
};
