use cyra_beauty::components::booking::format_hms;
use cyra_beauty::{Cycler, CyclerConfig, Direction};

fn ticks(cycler: &mut Cycler, n: u32) {
    for _ in 0..n {
        cycler.tick();
    }
}

#[test]
fn appointment_counter_climbs_and_settles_at_its_cap() {
    let mut counter = Cycler::new(CyclerConfig::count_up(10, 3000)).unwrap();

    ticks(&mut counter, 9);
    assert_eq!(counter.value(), 9);

    counter.tick();
    assert_eq!(counter.value(), 10);

    ticks(&mut counter, 5);
    assert_eq!(counter.value(), 10, "counter must hold at the cap");
    assert!(counter.is_running(), "reaching the cap does not stop the clock");
}

#[test]
fn offer_countdown_burns_down_second_by_second() {
    let mut countdown = Cycler::new(CyclerConfig::count_down(86_400, 1000)).unwrap();

    assert_eq!(format_hms(countdown.value()), "24h 0m 0s");

    ticks(&mut countdown, 3);
    assert_eq!(countdown.value(), 86_397);
    assert_eq!(format_hms(countdown.value()), "23h 59m 57s");
}

#[test]
fn expired_countdown_pins_at_zero() {
    let mut countdown = Cycler::new(CyclerConfig::count_down(2, 1000)).unwrap();

    ticks(&mut countdown, 5);
    assert_eq!(countdown.value(), 0);
    assert_eq!(format_hms(countdown.value()), "0h 0m 0s");
}

#[test]
fn carousel_survives_a_browsing_session() {
    let mut carousel = Cycler::new(CyclerConfig::looping(6, 5000)).unwrap();

    // Visitor hovers the section, then pages through with the arrows.
    carousel.pause();
    carousel.step(Direction::Forward);
    carousel.step(Direction::Forward);
    carousel.step(Direction::Forward);
    assert_eq!(carousel.value(), 3);
    assert!(!carousel.is_running());

    // Jumps straight to the last dot.
    carousel.jump(5).unwrap();
    assert_eq!(carousel.value(), 5);

    // Mouse leaves, autoplay picks up from the last slot and wraps.
    carousel.resume();
    carousel.tick();
    assert_eq!(carousel.value(), 0);

    // One backward step from the first slide lands on the last.
    carousel.step(Direction::Backward);
    assert_eq!(carousel.value(), 5);
}
