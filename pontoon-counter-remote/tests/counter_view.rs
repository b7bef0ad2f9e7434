use pontoon_counter_remote::{counter, scope, CounterView, COUNTER_REF};
use pontoon_remote_manager::RemoteRegistry;

#[derive(Clone, Debug, PartialEq)]
enum Msg {
    Up,
    Down,
}

#[test]
fn renders_count_and_both_controls() {
    let frame = counter::view(0, Msg::Up, Msg::Down);

    assert!(frame.contains_text("Count: 0"));
    assert_eq!(frame.find_control("Increment"), Some(&Msg::Up));
    assert_eq!(frame.find_control("Decrement"), Some(&Msg::Down));
}

#[test]
fn interpolates_any_count_verbatim() {
    assert!(counter::view(-7, Msg::Up, Msg::Down).contains_text("Count: -7"));
    assert!(counter::view(1_000_000, Msg::Up, Msg::Down).contains_text("Count: 1000000"));
}

#[test]
fn exposure_satisfies_the_counter_contract() {
    let registry = RemoteRegistry::new().install(scope::<Msg>());

    let export = registry.lookup(COUNTER_REF).expect("Counter is exposed");
    let render = *export
        .downcast::<CounterView<Msg>>()
        .expect("export satisfies the contract type");

    let frame = render(2, Msg::Up, Msg::Down);
    assert!(frame.contains_text("Count: 2"));
    assert!(frame.find_control("Increment").is_some());
    assert!(frame.find_control("Decrement").is_some());
}
