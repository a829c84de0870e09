use crate::sets::frontier::{Frontier, FrontierEntry};

/// Last-in-first-out frontier, expanding the most recent path first.
#[derive(Debug, Default)]
pub struct LifoFrontier {
    stack: Vec<FrontierEntry>,
}

impl LifoFrontier {
    pub fn new() -> Self {
        LifoFrontier { stack: Vec::new() }
    }
}

impl Frontier for LifoFrontier {
    fn push(&mut self, entry: FrontierEntry) {
        self.stack.push(entry);
    }

    fn pop(&mut self) -> Option<FrontierEntry> {
        self.stack.pop()
    }

    fn len(&self) -> usize {
        self.stack.len()
    }

    /// Pushes siblings in reverse so the smallest identifier sits on top.
    fn push_children(&mut self, children: Vec<FrontierEntry>) {
        self.stack.extend(children.into_iter().rev());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn smallest_sibling_is_popped_first() {
        let root = FrontierEntry::root("A".into());
        let mut frontier = LifoFrontier::new();
        frontier.push_children(vec![
            root.extend(&"B".into(), 1.0),
            root.extend(&"C".into(), 1.0),
            root.extend(&"D".into(), 1.0),
        ]);

        assert_eq!(frontier.len(), 3);
        assert_eq!(frontier.pop().unwrap().node().as_str(), "B");

        frontier.push(root.extend(&"E".into(), 1.0));
        assert_eq!(frontier.pop().unwrap().node().as_str(), "E");
        assert_eq!(frontier.pop().unwrap().node().as_str(), "C");
        assert_eq!(frontier.pop().unwrap().node().as_str(), "D");
        assert!(frontier.pop().is_none());
    }
}
