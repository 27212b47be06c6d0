//! Path expressions for the SQL JSON functions.
//!
//! A [`PathExpression`] is an already-parsed list of [`PathLeg`]s. Legs are
//! member access (`.key`, `.*`), element access (`[N]`, `[*]`) or the
//! recursive descent marker `**`.
//!
//! # Example
//!
//! ```
//! use json_sql_path::{PathExpression, PathLeg};
//!
//! let path = PathExpression::new(vec![PathLeg::key("a"), PathLeg::any_index()]);
//! assert!(path.contains_any_asterisk());
//! assert_eq!(path.to_string(), "$.a[*]");
//!
//! let (first, rest) = path.pop_one_leg().unwrap();
//! assert_eq!(first, &PathLeg::key("a"));
//! assert_eq!(rest.len(), 1);
//! assert_eq!(path.len(), 2);
//! ```

mod types;
pub use types::*;

mod util;
pub use util::path_expression_to_string;
