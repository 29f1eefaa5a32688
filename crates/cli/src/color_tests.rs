#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use super::*;
use termcolor::Color;

#[test]
fn no_color_takes_priority_over_always() {
    assert_eq!(
        resolve_color(ColorMode::Always, true, true),
        ColorChoice::Never
    );
}

#[test]
fn always_forces_color_without_a_tty() {
    assert_eq!(
        resolve_color(ColorMode::Always, false, false),
        ColorChoice::Always
    );
}

#[test]
fn auto_disables_color_when_piped() {
    assert_eq!(
        resolve_color(ColorMode::Auto, false, false),
        ColorChoice::Never
    );
}

#[test]
fn auto_enables_color_on_a_tty() {
    assert_eq!(
        resolve_color(ColorMode::Auto, false, true),
        ColorChoice::Auto
    );
}

#[test]
fn scheme_critical_is_red_bold() {
    let spec = scheme::severity(Severity::Critical);
    assert_eq!(spec.fg(), Some(&Color::Red));
    assert!(spec.bold());
}

#[test]
fn scheme_warning_is_yellow() {
    let spec = scheme::severity(Severity::Warning);
    assert_eq!(spec.fg(), Some(&Color::Yellow));
    assert!(!spec.bold());
}

#[test]
fn scheme_info_has_no_color() {
    let spec = scheme::severity(Severity::Info);
    assert!(spec.fg().is_none());
}

#[test]
fn scheme_path_is_cyan() {
    assert_eq!(scheme::path().fg(), Some(&Color::Cyan));
}

#[test]
fn scheme_line_number_is_yellow() {
    assert_eq!(scheme::line_number().fg(), Some(&Color::Yellow));
}

#[test]
fn scheme_idea_has_no_color() {
    let spec = scheme::idea();
    assert!(spec.fg().is_none());
    assert!(!spec.bold());
}
