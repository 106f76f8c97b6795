//! Scalar tests: numbers, units, strings, booleans, null, undefined.

use crate::convert::{ConvertOptions, to_sass_outcome};
use crate::host::HostValue;
use crate::sass::SassValue;

use super::common::{host, render, render_with, roundtrip};

#[test]
fn number() {
    assert_eq!(render(15), "15");
    assert_eq!(render(0.5), "0.5");
    assert_eq!(render(-2), "-2");
}

#[test]
fn number_with_unit() {
    let options = ConvertOptions::new().unit("px");
    assert_eq!(render_with(15, &options), "15px");
}

#[test]
fn string() {
    assert_eq!(render("abc"), "abc");
    assert_eq!(render(""), "");
    assert_eq!(render("你好 🌍"), "你好 🌍");
}

#[test]
fn boolean() {
    assert_eq!(render(true), "true");
    assert_eq!(render(false), "false");
}

#[test]
fn null_and_undefined() {
    assert_eq!(render(HostValue::Null), "null");
    assert_eq!(render(HostValue::Undefined), "null");

    let outcome = to_sass_outcome(&HostValue::Undefined, &ConvertOptions::default()).unwrap();
    assert!(!outcome.is_mapped());
}

#[test]
fn roundtrip_primitives() {
    assert_eq!(roundtrip(15).as_f64(), Some(15.0));
    assert_eq!(roundtrip("abc"), HostValue::from("abc"));
    assert_eq!(roundtrip(true), HostValue::Bool(true));
    assert_eq!(roundtrip(false), HostValue::Bool(false));
    assert_eq!(roundtrip(HostValue::Null), HostValue::Null);
}

#[test]
fn sass_scalars_to_host() {
    assert_eq!(host(&SassValue::NULL), HostValue::Null);
    assert_eq!(host(&SassValue::boolean(true)), HostValue::Bool(true));
    assert_eq!(host(&SassValue::string("abc")), HostValue::from("abc"));
}

#[test]
fn classification_is_idempotent() {
    let values = [
        HostValue::from(1),
        HostValue::from("s"),
        HostValue::Null,
        HostValue::from(vec![HostValue::from(1)]),
    ];
    for value in &values {
        assert_eq!(value.type_of(), value.type_of());
    }

    let sass = SassValue::number(1.0, "px");
    assert_eq!(sass.type_of(), sass.type_of());
}
