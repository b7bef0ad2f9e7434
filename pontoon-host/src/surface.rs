//! Target surfaces the host can render frames onto.

use std::cell::RefCell;
use std::rc::Rc;

use pontoon_core::{CoreManager, Node, SendToManager};

use crate::app::Msg;

/// Print each frame to stdout with a separator, terminal-demo style.
pub fn stdout_surface() -> impl FnMut(&Node<Msg>, &SendToManager<CoreManager, ()>) {
    |frame: &Node<Msg>, _sender: &SendToManager<CoreManager, ()>| {
        println!("----------------------------");
        print!("{}", frame.render());
    }
}

/// Record rendered frames for later inspection; used by tests to watch the
/// session move through its states.
pub fn recording_surface(
    frames: Rc<RefCell<Vec<String>>>,
) -> impl FnMut(&Node<Msg>, &SendToManager<CoreManager, ()>) {
    move |frame: &Node<Msg>, _sender: &SendToManager<CoreManager, ()>| {
        frames.borrow_mut().push(frame.render());
    }
}
