use crate::element::{Content, Element};

/// Whether the element with `id` is `root` itself or one of its descendants.
pub fn contains(root: &Element, id: &str) -> bool {
    crate::element::find_element(root, id).is_some()
}

/// The chain of elements from `root` down to the element with `id`,
/// inclusive on both ends. Empty if `id` is not in the tree.
pub fn ancestors<'a>(root: &'a Element, id: &str) -> Vec<&'a Element> {
    let mut path = Vec::new();
    if collect_path(root, id, &mut path) {
        path
    } else {
        Vec::new()
    }
}

fn collect_path<'a>(element: &'a Element, id: &str, path: &mut Vec<&'a Element>) -> bool {
    path.push(element);

    if element.id == id {
        return true;
    }

    if let Content::Children(children) = &element.content {
        for child in children {
            if collect_path(child, id, path) {
                return true;
            }
        }
    }

    path.pop();
    false
}
