//! Heading id assignment.

use crate::{html::Node, slug::Slugifier};

/// Sets an `id` property on every `h1`..`h6` element, in document order.
///
/// Ids are slugs of the heading's text content, deduplicated within the tree. Since the
/// TOC is built from the same headings in the same order with the same rule, the ids match
/// the TOC entry for entry. Returns the number of headings visited.
pub fn assign_heading_ids(root: &mut Node) -> usize {
    let mut slugifier = Slugifier::new();
    let mut count = 0;
    root.visit_elements_mut(&mut |element| {
        if element.heading_level().is_some() {
            let id = slugifier.slugify(&element.text_content());
            element.set_property("id", id);
            count += 1;
        }
    });
    count
}
