use pontoon_core::Node;

/// Stateless counter fragment: a count readout and the two controls.
///
/// Displays whatever count it is given and emits the supplied activation
/// messages; it owns no state of its own.
pub fn view<Msg>(count: i64, on_increment: Msg, on_decrement: Msg) -> Node<Msg> {
    Node::fragment(vec![
        Node::text(format!("Count: {count}")),
        Node::control("Increment", on_increment),
        Node::control("Decrement", on_decrement),
    ])
}
