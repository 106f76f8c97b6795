//! Lists, maps and records, including nesting.

use crate::convert::ConvertOptions;
use crate::host::{HostList, HostMap, HostObject, HostValue};
use crate::sass::{SassList, SassMap, SassValue};

use super::common::{host, map, numbers, render, render_with, roundtrip};

#[test]
fn array_defaults_to_comma() {
    assert_eq!(render(numbers(4)), "(1, 2, 3, 4)");
}

#[test]
fn array_with_space_marker() {
    assert_eq!(render(HostList::space(numbers(4))), "(1 2 3 4)");
}

#[test]
fn array_with_separator_option() {
    let options = ConvertOptions::new().separator(false);
    assert_eq!(render_with(numbers(4), &options), "(1 2 3 4)");
}

#[test]
fn empty_array() {
    assert_eq!(render(HostList::default()), "()");
}

#[test]
fn object_to_map() {
    let obj = HostObject::new().with("a", 1).with("b", 2);
    assert_eq!(render(obj), "(a: 1, b: 2)");
}

#[test]
fn nested_objects() {
    let inner = HostObject::new().with("c", 3).with("d", 4);
    let obj = HostObject::new().with("a", 1).with("b", inner);
    assert_eq!(render(obj), "(a: 1, b: (c: 3, d: 4))");
}

#[test]
fn host_map_to_map() {
    assert_eq!(render(map([("a", 1), ("b", 2)])), "(a: 1, b: 2)");
}

#[test]
fn nested_host_maps() {
    let inner = map([("c", 3), ("d", 4)]);
    let mut outer = HostMap::new();
    outer.set("a", 1);
    outer.set("b", inner);
    assert_eq!(render(outer), "(a: 1, b: (c: 3, d: 4))");
}

#[test]
fn nested_and_mixed_types() {
    let inner = map([("a", numbers(4))]);
    let obj = HostObject::new()
        .with("a", 1)
        .with("b", false)
        .with("c", HostValue::Null)
        .with("map", inner.clone());
    let test = HostList::space(vec![obj.into(), "example".into(), inner.into()]);

    assert_eq!(
        render(test),
        "((a: 1, b: false, c: null, map: (a: (1, 2, 3, 4))) example (a: (1, 2, 3, 4)))"
    );
}

#[test]
fn exclude_null() {
    let obj = HostObject::new()
        .with("a", 1)
        .with("b", HostValue::Null)
        .with("c", HostValue::Undefined);

    assert_eq!(render(obj.clone()), "(a: 1, b: null, c: null)");

    let options = ConvertOptions::new().exclude_null(true);
    assert_eq!(render_with(obj, &options), "(a: 1, c: null)");

    let mut host_map = HostMap::new();
    host_map.set("x", HostValue::Null);
    host_map.set("y", 2);
    assert_eq!(render_with(host_map, &options), "(y: 2)");
}

#[test]
fn sass_list_to_host() {
    let sass_list = SassList::from_values(
        vec![SassValue::number(1.0, "px"), SassValue::string("a")],
        false,
    );
    let value = host(&sass_list.into());
    let list = value.as_list().unwrap();

    assert_eq!(list.separator(), Some(false));
    assert_eq!(list.get(0).unwrap().as_dimension().unwrap().unit(), "px");
    assert_eq!(list.get(1), Some(&HostValue::from("a")));
}

#[test]
fn sass_map_to_host() {
    let sass_map = SassMap::from_entries(vec![
        (SassValue::string("a"), SassValue::number(1.0, "")),
        (SassValue::string("b"), SassValue::number(2.0, "")),
    ]);
    let value = host(&sass_map.into());
    let result = value.as_map().unwrap();

    assert_eq!(result.get_str("a").and_then(HostValue::as_f64), Some(1.0));
    assert_eq!(result.get_str("b").and_then(HostValue::as_f64), Some(2.0));
    let keys: Vec<_> = result.keys().filter_map(HostValue::as_str).collect();
    assert_eq!(keys, ["a", "b"]);
}

#[test]
fn nested_map_roundtrip() {
    let inner = map([("c", 3), ("d", 4)]);
    let mut outer = HostMap::new();
    outer.set("a", 1);
    outer.set("b", inner);

    let value = roundtrip(outer);
    let result = value.as_map().unwrap();
    let nested = result.get_str("b").and_then(HostValue::as_map).unwrap();
    assert_eq!(result.get_str("a").and_then(HostValue::as_f64), Some(1.0));
    assert_eq!(nested.get_str("c").and_then(HostValue::as_f64), Some(3.0));
    assert_eq!(nested.get_str("d").and_then(HostValue::as_f64), Some(4.0));
}

#[test]
fn separator_survives_roundtrip() {
    let value = roundtrip(HostList::space(numbers(2)));
    assert_eq!(value.as_list().unwrap().separator(), Some(false));
    assert_eq!(render(value), "(1 2)");
}

#[test]
fn shallow_map_keeps_values_but_converts_keys() {
    let sass_map = SassMap::from_entries(vec![(
        SassValue::string("k"),
        SassValue::number(5.0, "em"),
    )]);
    let options = ConvertOptions::new().shallow(true);
    let value = crate::convert::to_host(&sass_map.into(), &options).unwrap();
    let result = value.as_map().unwrap();

    let (key, item) = result.iter().next().unwrap();
    assert_eq!(key, &HostValue::from("k"));
    assert_eq!(item.as_sass(), Some(&SassValue::number(5.0, "em")));
}
