// Components module - UI building blocks
//
// Shell components are plain render functions over the App:
// - Header: app name, tagline, in-flight spinner
// - Status bar: key hints and the latest log line
//
// Panels own their local UI state (text, cursors) and implement Interactive:
// - Search bar: address input
// - Property filter: property type list
// - Property table: search results and shortlist
//
// Toasts are drawn last, over everything else.

pub mod header;
pub mod property_filter;
pub mod property_table;
pub mod search_bar;
pub mod status_bar;
pub mod toast;

pub use property_filter::{FilterAction, PropertyFilter};
pub use property_table::{PropertyTable, TableAction, TableKind};
pub use search_bar::{SearchBar, SearchBarAction};
pub use toast::ToastStack;
