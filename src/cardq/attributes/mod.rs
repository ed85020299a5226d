//! # Attribute System
//!
//! Every queryable card field is described once, in a static registry, and
//! read through a single accessor. The rest of the engine never branches on
//! attribute names.
//!
//! - **Specifications**: name, [`Attribute`] tag and [`ValueKind`] of each field
//! - **Values**: [`AttrValue`], the comparable runtime form of a field
//! - **Filtering**: clauses, per-attribute OR filters and the AND predicate
//!
//! ## Value Kinds
//!
//! | Kind | Examples | Operators |
//! |------|----------|-----------|
//! | `Numeric` | `cmc`, `usd`, `amount` | `=` `!=` `<` `<=` `>` `>=` |
//! | `Text` | `name`, `type`, `set` | `=` `!=` `?` `!?` |
//! | `Flag` | `foil`, `modern` | `=` `!=` `?` `!?` |
//!
//! ## Usage
//!
//! ```ignore
//! let spec = get_spec("cmc").unwrap();
//! let value = card.get_attr(spec.attribute);
//!
//! let filter = AttrFilter::new(Attribute::Cmc, vec![Clause::number(FilterOp::Lt, 2.0)]);
//! if filter.matches(&value) { ... }
//! ```

mod filter;
mod spec;
mod value;

pub use filter::{AttrFilter, Clause, ClauseValue, FilterOp, Predicate};
pub use spec::{get_spec, match_prefix, Attribute, AttributeSpec, ValueKind, ATTRIBUTES};
pub use value::AttrValue;
