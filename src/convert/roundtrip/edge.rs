//! Edge cases: forced types, depth limit, fallbacks, map keys, option reuse.

use std::time::{Duration, Instant};

use crate::convert::{
    ConvertError, ConvertOptions, Outcome, to_host, to_host_as, to_host_outcome, to_sass,
    to_sass_as,
};
use crate::host::{HostList, HostMap, HostObject, HostType, HostValue};
use crate::sass::{SassList, SassMapAdapter, SassNumber, SassType, SassValue};
use crate::wrapper::Dimension;

use super::common::render;

fn nest(depth: usize) -> HostValue {
    (0..depth).fold(HostValue::from(1), |inner, _| HostValue::from(vec![inner]))
}

#[test]
fn depth_limit() {
    let options = ConvertOptions::new().max_depth(2);
    assert!(to_sass(&nest(2), &options).is_ok());
    assert!(matches!(
        to_sass(&nest(3), &options),
        Err(ConvertError::DepthExceeded { limit: 2 })
    ));
}

#[test]
fn cyclic_list_hits_depth_limit() {
    let sass_list = SassList::new(1, true);
    sass_list
        .set_value(0, SassValue::List(sass_list.clone()))
        .unwrap();

    let options = ConvertOptions::new().max_depth(16);
    assert!(matches!(
        to_host(&sass_list.into(), &options),
        Err(ConvertError::DepthExceeded { limit: 16 })
    ));
}

#[test]
fn forced_type_by_name() {
    let tag: HostType = "object".parse().unwrap();
    let value = HostValue::from(HostMap::from_iter([("a", 1)]));
    let result = to_sass_as(&value, tag, &ConvertOptions::default()).unwrap();
    assert_eq!(result.to_string(), "(a: 1)");

    assert!(matches!(
        "widget".parse::<HostType>(),
        Err(ConvertError::UnknownTypeTag(_))
    ));
}

#[test]
fn forced_type_mismatch_fails_loudly() {
    let options = ConvertOptions::default();
    let obj = HostValue::from(HostObject::new().with("a", 1));
    assert!(matches!(
        to_sass_as(&obj, HostType::Map, &options),
        Err(ConvertError::TypeMismatch { expected: "map", found: "object" })
    ));
    assert!(matches!(
        to_host_as(&SassValue::string("x"), SassType::Number, &options),
        Err(ConvertError::TypeMismatch { expected: "number", found: "string" })
    ));
}

#[test]
fn forced_fallback_tags() {
    let options = ConvertOptions::default();
    let result = to_sass_as(&HostValue::from(3), HostType::Undefined, &options).unwrap();
    assert!(result.is_null());

    let value = SassValue::number(3.0, "");
    let result = to_host_as(&value, SassType::Error, &options).unwrap();
    assert!(result.as_sass().unwrap().same_handle(&value));
}

#[test]
fn sass_error_is_unmapped() {
    let error = SassValue::error("nope");
    match to_host_outcome(&error, &ConvertOptions::default()).unwrap() {
        Outcome::Unmapped(HostValue::Sass(v)) => assert!(v.same_handle(&error)),
        other => panic!("expected unmapped passthrough, got {other:?}"),
    }
}

#[test]
fn sass_values_inside_host_structures() {
    let already = SassValue::number(2.0, "em");
    let list = HostList::new(vec![already.clone().into(), 3.into()]);
    let result = to_sass(&list.into(), &ConvertOptions::default()).unwrap();
    let SassValue::List(sass_list) = result else {
        panic!("expected a list");
    };
    assert!(sass_list.value(0).unwrap().same_handle(&already));
    assert_eq!(sass_list.to_string(), "(2em, 3)");
}

#[test]
fn map_adapter_source() {
    let mut adapter = SassMapAdapter::new();
    adapter.set(SassValue::string("k"), SassValue::NULL);
    let options = ConvertOptions::new().exclude_null(true);
    let result = to_sass(&adapter.into(), &options).unwrap();
    assert_eq!(result.to_string(), "(k: null)");
}

#[test]
fn non_string_map_keys() {
    let mut host_map = HostMap::new();
    host_map.set(1, "one");
    host_map.set(true, "yes");
    assert_eq!(render(host_map), "(1: one, true: yes)");
}

#[test]
fn host_keys_colliding_in_sass() {
    let mut host_map = HostMap::new();
    host_map.set(1, "number");
    host_map.set(Dimension::bind(&SassNumber::new(1.0, "")), "dimension");
    host_map.set("x", "string");
    assert_eq!(host_map.len(), 3);
    assert_eq!(render(host_map), "(1: dimension, x: string)");
}

#[test]
fn large_maps_convert_in_linear_time() {
    const KEYS: usize = 20_000;
    let obj: HostObject = (0..KEYS).map(|i| (format!("key{i}"), i as f64)).collect();
    let options = ConvertOptions::default();

    let started = Instant::now();
    let sass_map = to_sass(&obj.into(), &options).unwrap();
    let back = to_host(&sass_map, &options).unwrap();
    let elapsed = started.elapsed();

    let SassValue::Map(inner) = &sass_map else {
        panic!("expected a map");
    };
    assert_eq!(inner.len(), KEYS);
    assert_eq!(inner.key(KEYS - 1), Some(SassValue::string("key19999")));

    let host_map = back.as_map().unwrap();
    assert_eq!(host_map.len(), KEYS);
    let value = host_map.get_str("key12345").and_then(HostValue::as_f64);
    assert_eq!(value, Some(12345.0));

    // Quadratic key scans took seconds at this size even in release builds.
    assert!(elapsed < Duration::from_secs(5), "took {elapsed:?}");
}

#[test]
fn options_are_reusable() {
    let options = ConvertOptions::new().unit("px").separator(false);
    let before = options.clone();

    let _ = to_sass_as(&HostValue::from(1), HostType::Number, &options).unwrap();
    let list = HostValue::from(vec![HostValue::from(1), HostValue::from(2)]);
    assert_eq!(to_sass(&list, &options).unwrap().to_string(), "(1px 2px)");
    assert_eq!(options, before);
}
