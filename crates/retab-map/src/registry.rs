//! Read-only template lookup.

use retab_model::Template;

/// Finds a template by name: exact, case-sensitive, first match in
/// declaration order. Absence is a plain `None`, never an error; callers
/// decide the fallback behavior.
pub fn find_template<'a>(templates: &'a [Template], name: &str) -> Option<&'a Template> {
    templates.iter().find(|template| template.name == name)
}
