use super::*;

#[test]
fn defaults_match_the_observed_ux_delays() {
    let delays = DelayConfig::default();
    assert_eq!(delays.load, Duration::from_millis(800));
    assert_eq!(delays.mutate, Duration::from_millis(500));
    assert_eq!(delays.reorder, Duration::ZERO);
}

#[test]
fn zero_disables_every_delay() {
    let delays = DelayConfig::zero();
    assert_eq!(delays.load, Duration::ZERO);
    assert_eq!(delays.mutate, Duration::ZERO);
    assert_eq!(delays.reorder, Duration::ZERO);
}

#[test]
fn env_parse_falls_back_on_unset_or_garbage() {
    assert_eq!(env_parse("MENUBOARD_TEST_UNSET_KNOB", 42_u64), 42);

    // Unparseable values fall back rather than panic.
    unsafe { std::env::set_var("MENUBOARD_TEST_GARBAGE_KNOB", "not-a-number") };
    assert_eq!(env_parse("MENUBOARD_TEST_GARBAGE_KNOB", 7_u64), 7);
    unsafe { std::env::remove_var("MENUBOARD_TEST_GARBAGE_KNOB") };
}
