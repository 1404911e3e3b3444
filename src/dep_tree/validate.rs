use super::DepTree;
use crate::{DepError, DepResult};

impl DepTree {
    /// Check every structural invariant of the primary tree.
    ///
    /// - each dependent's head points back at the node listing it, and every
    ///   attached node is listed by its head
    /// - dependents are strictly sorted by `id`
    /// - each dependent's sibling index is its position in that list
    /// - following heads from any node ends at a rootless node
    ///
    /// Head assignment keeps the first three by construction; the last is the
    /// caller's responsibility and is what recursive queries rely on.
    pub fn validate(&self) -> DepResult<()> {
        for node in &self.nodes {
            for (i, &dep) in node.dependents.iter().enumerate() {
                let d = &self.nodes[dep.0];
                if d.head.map(|h| self.nodes[h.0].id) != Some(node.id) {
                    return Err(self.inconsistent(node.id, format!("dependent {} has a different head", d.id)));
                }
                if d.sibling_index != i {
                    return Err(self.inconsistent(
                        d.id,
                        format!("sibling index {} but position {}", d.sibling_index, i),
                    ));
                }
            }

            if node
                .dependents
                .windows(2)
                .any(|w| self.nodes[w[0].0].id >= self.nodes[w[1].0].id)
            {
                return Err(self.inconsistent(node.id, "dependents are not sorted by id".to_string()));
            }

            if let Some(head) = node.head {
                let listed = self.nodes[head.0]
                    .dependents
                    .iter()
                    .any(|d| self.nodes[d.0].id == node.id);
                if !listed {
                    return Err(self.inconsistent(node.id, "missing from its head's dependents".to_string()));
                }
            }
        }

        for node in &self.nodes {
            let mut steps = 0;
            let mut current = node.head;
            while let Some(head) = current {
                steps += 1;
                if steps > self.nodes.len() {
                    tracing::warn!(node = node.id, "primary heads form a cycle");
                    return Err(DepError::Cycle { node: node.id });
                }
                current = self.nodes[head.0].head;
            }
        }

        Ok(())
    }

    fn inconsistent(&self, node: i32, message: String) -> DepError {
        tracing::warn!(node, %message, "dependency tree failed validation");
        DepError::Inconsistent { node, message }
    }
}
