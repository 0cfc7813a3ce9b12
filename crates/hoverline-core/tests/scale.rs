// File: crates/hoverline-core/tests/scale.rs
// Purpose: Scale mapping, tick generation and tick label formatting.

use chrono::{TimeZone, Utc};
use hoverline_core::axis::{format_number, format_time};
use hoverline_core::scale::{linear_ticks, ContinuousScale, PointScale, TimeScale, TimeStep};
use indexmap::IndexSet;

fn close(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

#[test]
fn linear_ticks_are_nice() {
    assert_eq!(linear_ticks(0.0, 10.0, 5), vec![0.0, 2.0, 4.0, 6.0, 8.0, 10.0]);
    let small = linear_ticks(0.0, 1.0, 5);
    let want = [0.0, 0.2, 0.4, 0.6, 0.8, 1.0];
    assert_eq!(small.len(), want.len());
    assert!(small.iter().zip(want).all(|(a, b)| close(*a, b)), "{small:?}");
    assert_eq!(linear_ticks(3.0, 3.0, 5), vec![3.0]);
    assert!(linear_ticks(0.0, f64::NAN, 5).is_empty());
}

#[test]
fn linear_scale_maps_and_inverts_range() {
    let s = ContinuousScale::new_linear((0.0, 10.0), (70.0, 30.0));
    assert_eq!(s.map(0.0), Some(70.0));
    assert_eq!(s.map(10.0), Some(30.0));
    assert_eq!(s.map(5.0), Some(50.0));
    assert_eq!(s.map(f64::INFINITY), None);
}

#[test]
fn degenerate_domain_maps_to_middle() {
    let s = ContinuousScale::new_linear((4.0, 4.0), (0.0, 100.0));
    assert!(s.is_degenerate());
    assert_eq!(s.map(4.0), Some(50.0));
    assert_eq!(s.map(123.0), Some(50.0));
    assert_eq!(s.tick_values(5), vec![4.0]);
}

#[test]
fn narrow_domain_still_spreads_values() {
    let s = ContinuousScale::new_linear((0.0, 1e-13), (0.0, 100.0));
    assert!(!s.is_degenerate());
    assert_eq!(s.map(0.0), Some(0.0));
    assert!((s.map(1e-13).unwrap() - 100.0).abs() < 1e-3);
    assert!((s.map(5e-14).unwrap() - 50.0).abs() < 1e-3);

    let s = ContinuousScale::new_linear((1e9, 1e9 + 1e-6), (0.0, 100.0));
    assert!(!s.is_degenerate());
    assert!(s.map(1e9).unwrap().abs() < 1e-3);
}

#[test]
fn log_scale_ticks_on_powers_of_ten() {
    let s = ContinuousScale::new_log10((1.0, 1000.0), (0.0, 300.0));
    assert_eq!(s.tick_values(5), vec![1.0, 10.0, 100.0, 1000.0]);
    let p = s.map(100.0).unwrap();
    assert!((p - 200.0).abs() < 1e-3);
    assert_eq!(s.map(0.0), None);
    assert_eq!(s.map(-3.0), None);
    let labels: Vec<String> = s.ticks(5).into_iter().map(|t| t.label).collect();
    assert_eq!(labels, vec!["1", "10", "100", "1k"]);
}

#[test]
fn number_labels_use_si_prefixes() {
    assert_eq!(format_number(1500.0, 500.0), "1.5k");
    assert_eq!(format_number(2_000_000.0, 1_000_000.0), "2M");
    assert_eq!(format_number(0.2, 0.2), "0.2");
    assert_eq!(format_number(100.0, 20.0), "100");
    assert_eq!(format_number(-0.0, 1.0), "0");
    assert_eq!(format_number(-2500.0, 500.0), "-2.5k");
}

#[test]
fn time_ticks_pick_hours_for_two_days() {
    let lo = Utc.with_ymd_and_hms(2024, 3, 1, 0, 0, 0).unwrap().timestamp_millis();
    let hi = Utc.with_ymd_and_hms(2024, 3, 3, 0, 0, 0).unwrap().timestamp_millis();
    let s = TimeScale::new((lo as f64, hi as f64), (0.0, 400.0));
    assert_eq!(s.step_for(5), TimeStep::Fixed(12 * 3_600_000));
    let ticks = s.ticks(5);
    let labels: Vec<&str> = ticks.iter().map(|t| t.label.as_str()).collect();
    assert_eq!(labels, vec!["00:00", "12:00", "00:00", "12:00", "00:00"]);
    assert_eq!(ticks[0].position, 0.0);
    assert_eq!(ticks[4].position, 400.0);
}

#[test]
fn time_ticks_pick_quarters_for_a_year() {
    let lo = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap().timestamp_millis();
    let hi = Utc.with_ymd_and_hms(2024, 12, 31, 0, 0, 0).unwrap().timestamp_millis();
    let s = TimeScale::new((lo as f64, hi as f64), (0.0, 400.0));
    assert_eq!(s.step_for(5), TimeStep::Months(3));
    let labels: Vec<String> = s.ticks(5).into_iter().map(|t| t.label).collect();
    assert_eq!(labels, vec!["Jan 2024", "Apr 2024", "Jul 2024", "Oct 2024"]);
}

#[test]
fn time_labels_follow_step() {
    let t = Utc.with_ymd_and_hms(2023, 7, 4, 9, 30, 15).unwrap().timestamp_millis();
    assert_eq!(format_time(t, TimeStep::Fixed(1_000)), "09:30:15");
    assert_eq!(format_time(t, TimeStep::Fixed(3_600_000)), "09:30");
    assert_eq!(format_time(t, TimeStep::Fixed(86_400_000)), "Jul 04");
    assert_eq!(format_time(t, TimeStep::Months(1)), "Jul 2023");
    assert_eq!(format_time(t, TimeStep::Years(1)), "2023");
}

#[test]
fn point_scale_spreads_keys() {
    let keys: IndexSet<String> = ["mon", "tue", "wed"].into_iter().map(String::from).collect();
    let s = PointScale::new(keys, (0.0, 100.0));
    assert_eq!(s.map_key("mon"), Some(0.0));
    assert_eq!(s.map_key("tue"), Some(50.0));
    assert_eq!(s.map_key("wed"), Some(100.0));
    assert_eq!(s.map_key("sun"), None);
    assert_eq!(s.ticks(5).len(), 3);

    let one: IndexSet<String> = std::iter::once("only".to_string()).collect();
    assert_eq!(PointScale::new(one, (0.0, 100.0)).map_key("only"), Some(50.0));
}
