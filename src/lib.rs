//! Trigger-based mention autocomplete over JSON suggestion trees.
//!
//! Given text and a caret, [`mention::scan`] finds the trigger being typed
//! (`@user.na`, `{{order.`), [`mention::filter`] lists the matching keys of
//! the node addressed so far, and [`mention::accept`] splices a chosen key
//! back into the text. [`template::evaluate`] renders `{{path}}`
//! placeholders against the same tree.
//!
//! ```
//! use mentions::mention::{accept, filter, scan};
//! use serde_json::json;
//!
//! let tree = json!({"users": {"name": "Alice"}});
//! let text = "Hello @us World";
//!
//! let span = scan(text, 9, "@", None).unwrap();
//! let result = filter(&span.raw_content, &tree, false);
//! assert_eq!(result.candidates, ["users"]);
//!
//! let edit = accept(text, &span, "@", &result.parent_path, "users");
//! assert_eq!(edit.text, "Hello @users World");
//! assert_eq!(edit.caret_offset, 12);
//! ```

pub mod config;
pub mod error;
pub mod input;
pub mod mention;
pub mod template;

pub use error::MentionError;
