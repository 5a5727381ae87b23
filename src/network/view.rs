use std::fmt::Write;

use super::{Network, NodeId};

impl Network {
    /// Draws the bus/load skeleton around `id` as indented text.
    ///
    /// The first line names the topmost node (`==grid`), then the buses and
    /// loads above `id` are listed root-first, then every bus and load in the
    /// subtree of `id`. Protections and conductors are skipped; they only
    /// link items together.
    ///
    /// ```text
    /// ==grid
    ///     ┣━ TS5
    ///     ┃   ┣━ TSS8
    /// ```
    pub fn render_tree(&self, id: NodeId) -> String {
        let mut out = String::new();
        let top = self.ancestors(id).last().unwrap_or(id);
        let _ = writeln!(out, "=={}", self.node(top).name());

        let mut above: Vec<NodeId> = self
            .ancestors(id)
            .skip(1)
            .filter(|&a| self.node(a).kind().is_item())
            .collect();
        above.reverse();
        for (level, &a) in above.iter().enumerate() {
            push_line(&mut out, level, self.node(a).name());
        }

        let mut stack = vec![(id, above.len())];
        while let Some((current, level)) = stack.pop() {
            let node = self.node(current);
            let next_level = if node.kind().is_item() {
                push_line(&mut out, level, node.name());
                level + 1
            } else {
                level
            };
            for &child in node.children().iter().rev() {
                stack.push((child, next_level));
            }
        }
        out
    }
}

fn push_line(out: &mut String, level: usize, name: &str) {
    let _ = writeln!(out, "    {}┣━ {name}", "┃   ".repeat(level));
}

#[cfg(test)]
mod tests {
    use crate::network::reference::ReferenceNetwork;

    #[test]
    fn whole_tree_from_root() {
        let r = ReferenceNetwork::build();
        let text = r.network.render_tree(r.network.root());
        let expected = "==grid\n\
                        \x20   ┣━ TS5\n\
                        \x20   ┃   ┣━ TSS8\n\
                        \x20   ┃   ┃   ┣━ CAS 5.12\n\
                        \x20   ┃   ┃   ┃   ┣━ Load\n";
        assert_eq!(text, expected);
    }

    #[test]
    fn subtree_keeps_ancestor_indentation() {
        let r = ReferenceNetwork::build();
        let text = r.network.render_tree(r.buses[1]);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "==grid");
        assert_eq!(lines[1], "    ┣━ TS5");
        assert_eq!(lines[2], "    ┃   ┣━ TSS8");
        assert_eq!(lines.len(), 5);
    }
}
