pub mod category;
pub mod category_set;
pub mod dispatch_error;

pub use category::Category;
pub use category_set::CategorySet;
pub use dispatch_error::DispatchError;

/// Name of the hierarchy root. Every other category has it as an ancestor.
pub const ROOT_CATEGORY: &str = "root";

/// Derives the parent name by stripping the trailing dot-separated segment.
///
/// `"a.b.c"` -> `"a.b"`, a dotless name -> `"root"`, the root itself has no
/// parent.
#[must_use]
pub fn parent_name(name: &str) -> Option<&str> {
    if name == ROOT_CATEGORY {
        return None;
    }
    match name.rfind('.') {
        Some(pos) => Some(&name[..pos]),
        None => Some(ROOT_CATEGORY),
    }
}
