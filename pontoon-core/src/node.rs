/// View fragment produced by an application's `view` function.
///
/// A node is pure data: a control carries the message its activation emits,
/// never a callback, so a frame can be inspected, rendered, or compared
/// without running anything.
#[derive(Clone, Debug, PartialEq)]
pub enum Node<Msg> {
    /// A run of display text.
    Text(String),
    /// An activatable control. Activating it feeds `on_activate` back into
    /// the update loop.
    Control { label: String, on_activate: Msg },
    /// An ordered group of child nodes.
    Fragment(Vec<Node<Msg>>),
}

impl<Msg> Node<Msg> {
    pub fn text(text: impl Into<String>) -> Self {
        Node::Text(text.into())
    }

    pub fn control(label: impl Into<String>, on_activate: Msg) -> Self {
        Node::Control {
            label: label.into(),
            on_activate,
        }
    }

    pub fn fragment(children: Vec<Node<Msg>>) -> Self {
        Node::Fragment(children)
    }

    /// Message emitted by the first control with the given label, if any.
    pub fn find_control(&self, label: &str) -> Option<&Msg> {
        match self {
            Node::Text(_) => None,
            Node::Control {
                label: name,
                on_activate,
            } if name.as_str() == label => Some(on_activate),
            Node::Control { .. } => None,
            Node::Fragment(children) => {
                children.iter().find_map(|child| child.find_control(label))
            }
        }
    }

    /// Whether any text node contains `needle`.
    pub fn contains_text(&self, needle: &str) -> bool {
        match self {
            Node::Text(text) => text.contains(needle),
            Node::Control { .. } => false,
            Node::Fragment(children) => children.iter().any(|child| child.contains_text(needle)),
        }
    }

    /// Plain-text rendering: one line per text node, controls as `[label]`.
    pub fn render(&self) -> String {
        let mut out = String::new();
        self.render_into(&mut out);
        out
    }

    fn render_into(&self, out: &mut String) {
        match self {
            Node::Text(text) => {
                out.push_str(text);
                out.push('\n');
            }
            Node::Control { label, .. } => {
                out.push('[');
                out.push_str(label);
                out.push_str("]\n");
            }
            Node::Fragment(children) => {
                for child in children {
                    child.render_into(out);
                }
            }
        }
    }
}
