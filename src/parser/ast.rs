// AST (Abstract Syntax Tree) definitions for the statement language

use std::fmt;

/// Indentation applied by a sequence to each line of its members
const INDENT: &str = "  ";

/// A member of a [`Node::Sequence`]: either a raw step or a nested node
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Item {
    Text(String),
    Node(Node),
}

/// AST node
///
/// Nodes are built bottom-up by the parser and never mutated afterwards. Each
/// node owns its children outright.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    /// A block, a top-level list of steps, or a single step wrapped in a list of one
    Sequence(Vec<Item>),
    /// Two-way branch; `when_false` is an empty sequence when there was no `else`
    Condition {
        guard: String,
        when_true: Box<Node>,
        when_false: Box<Node>,
    },
    /// Condition-guarded loop
    Iteration { guard: String, body: Box<Node> },
}

impl Node {
    pub fn sequence(items: Vec<Item>) -> Self {
        Node::Sequence(items)
    }

    pub fn empty() -> Self {
        Node::Sequence(Vec::new())
    }

    /// A single step, stored as a sequence of one raw text item
    pub fn step(text: impl Into<String>) -> Self {
        Node::Sequence(vec![Item::Text(text.into())])
    }

    pub fn condition(guard: impl Into<String>, when_true: Node, when_false: Node) -> Self {
        Node::Condition {
            guard: guard.into(),
            when_true: Box::new(when_true),
            when_false: Box::new(when_false),
        }
    }

    pub fn iteration(guard: impl Into<String>, body: Node) -> Self {
        Node::Iteration {
            guard: guard.into(),
            body: Box::new(body),
        }
    }

    /// Desugar `for (init; guard; step) body` into `init` followed by a loop
    /// running `body` then `step`.
    pub fn counted_loop(
        initializer: impl Into<String>,
        guard: impl Into<String>,
        increment: impl Into<String>,
        body: Node,
    ) -> Self {
        Node::Sequence(vec![
            Item::Text(initializer.into()),
            Item::Node(Node::iteration(
                guard,
                Node::Sequence(vec![Item::Node(body), Item::Text(increment.into())]),
            )),
        ])
    }

    /// Depth of the deepest nested node, counting this one as 1
    pub fn depth(&self) -> usize {
        match self {
            Node::Sequence(items) => {
                1 + items
                    .iter()
                    .map(|item| match item {
                        Item::Text(_) => 0,
                        Item::Node(node) => node.depth(),
                    })
                    .max()
                    .unwrap_or(0)
            }
            Node::Condition {
                when_true,
                when_false,
                ..
            } => 1 + when_true.depth().max(when_false.depth()),
            Node::Iteration { body, .. } => 1 + body.depth(),
        }
    }
}

impl From<Node> for Item {
    fn from(node: Node) -> Self {
        Item::Node(node)
    }
}

impl From<String> for Item {
    fn from(text: String) -> Self {
        Item::Text(text)
    }
}

impl From<&str> for Item {
    fn from(text: &str) -> Self {
        Item::Text(text.to_string())
    }
}

impl fmt::Display for Item {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Item::Text(text) => write!(f, "{}", text),
            Item::Node(node) => write!(f, "{}", node),
        }
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Node::Sequence(items) => {
                // Members are joined first, so an empty sequence still gets one
                // indented (blank) line between its braces.
                let body = items
                    .iter()
                    .map(Item::to_string)
                    .collect::<Vec<_>>()
                    .join("\n");
                writeln!(f, "{{")?;
                for line in body.split('\n') {
                    writeln!(f, "{}{}", INDENT, line)?;
                }
                write!(f, "}}")
            }
            Node::Condition {
                guard,
                when_true,
                when_false,
            } => write!(f, "IF {}\n{}\nELSE\n{}", guard, when_true, when_false),
            Node::Iteration { guard, body } => write!(f, "WHILE {}\n{}", guard, body),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_step() {
        assert_eq!(Node::step("a").to_string(), "{\n  a\n}");
    }

    #[test]
    fn test_render_empty_sequence() {
        assert_eq!(Node::empty().to_string(), "{\n  \n}");
    }

    #[test]
    fn test_render_condition() {
        let node = Node::condition("x", Node::step("a"), Node::empty());
        assert_eq!(node.to_string(), "IF x\n{\n  a\n}\nELSE\n{\n  \n}");
    }

    #[test]
    fn test_render_nested_indentation() {
        let node = Node::sequence(vec![
            Item::from("start"),
            Item::from(Node::iteration("hungry", Node::step("eat"))),
        ]);
        assert_eq!(
            node.to_string(),
            "{\n  start\n  WHILE hungry\n  {\n    eat\n  }\n}"
        );
    }

    #[test]
    fn test_counted_loop_runs_increment_after_body() {
        let node = Node::counted_loop("i", "i<9", "i++", Node::step("a"));
        match &node {
            Node::Sequence(items) => match &items[1] {
                Item::Node(Node::Iteration { body, .. }) => {
                    assert_eq!(
                        **body,
                        Node::sequence(vec![Item::from(Node::step("a")), Item::from("i++")])
                    );
                }
                other => panic!("Expected iteration, got {:?}", other),
            },
            _ => panic!("Expected sequence"),
        }
    }

    #[test]
    fn test_depth() {
        assert_eq!(Node::empty().depth(), 1);
        assert_eq!(Node::iteration("x", Node::step("a")).depth(), 2);
    }
}
