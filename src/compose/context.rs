//! Shared state threaded through document composition.

use crate::style_map::StyleMap;

/// A hyperlink relationship to be registered in the document part.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingLink {
    /// Relationship identifier (`rIdN`).
    pub id: String,
    /// Target URL.
    pub target: String,
}

/// Context passed through composition for style lookup and relationship
/// allocation.
pub struct ComposeContext<'s> {
    styles: &'s StyleMap,
    next_rel_index: usize,
    pending_links: Vec<PendingLink>,
}

impl<'s> ComposeContext<'s> {
    /// Creates a context; `next_rel_index` is the first free `rIdN` index in
    /// the target document.
    pub fn new(styles: &'s StyleMap, next_rel_index: usize) -> Self {
        Self {
            styles,
            next_rel_index,
            pending_links: Vec::new(),
        }
    }

    /// The style mapping being applied.
    pub fn styles(&self) -> &StyleMap {
        self.styles
    }

    /// Allocates a relationship identifier for an external hyperlink.
    pub fn register_hyperlink(&mut self, url: &str) -> String {
        let id = format!("rId{}", self.next_rel_index);
        self.next_rel_index += 1;
        self.pending_links.push(PendingLink {
            id: id.clone(),
            target: url.to_string(),
        });
        id
    }

    /// Hyperlink relationships registered so far.
    pub fn pending_links(&self) -> &[PendingLink] {
        &self.pending_links
    }

    /// Consumes the context, yielding the registered hyperlink relationships.
    pub fn into_links(self) -> Vec<PendingLink> {
        self.pending_links
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_relationship_ids_are_sequential_from_the_start_index() {
        let styles = StyleMap::default();
        let mut context = ComposeContext::new(&styles, 7);

        assert_eq!(context.register_hyperlink("https://a.example"), "rId7");
        assert_eq!(context.register_hyperlink("https://b.example"), "rId8");

        let links = context.into_links();
        assert_eq!(links.len(), 2);
        assert_eq!(links[1].target, "https://b.example");
    }
}
