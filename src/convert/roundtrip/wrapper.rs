//! Dimension and Rgba wrappers across the bridge.

use crate::convert::{ConvertOptions, to_host};
use crate::host::HostValue;
use crate::sass::{SassColor, SassList, SassNumber, SassValue};
use crate::wrapper::{Dimension, FieldAccess, Rgba};

use super::common::{host, render, sass};

#[test]
fn sass_number_to_dimension() {
    let value = host(&SassValue::number(15.0, ""));
    let d = value.as_dimension().unwrap();
    assert_eq!(d.value(), 15.0);
    assert_eq!(d.unit(), "");
}

#[test]
fn sass_number_with_unit_to_dimension() {
    let value = host(&SassValue::number(15.0, "px"));
    let d = value.as_dimension().unwrap();
    assert_eq!(d.value(), 15.0);
    assert_eq!(d.unit(), "px");
    assert_eq!(d.to_string(), "15px");
}

#[test]
fn sass_color_to_rgba() {
    let value = host(&SassValue::color(255.0, 128.0, 0.0, 0.5));
    let c = value.as_rgba().unwrap();
    assert_eq!((c.r(), c.g(), c.b(), c.a()), (255, 128, 0, 0.5));
    assert_eq!(c.to_string(), "rgba(255, 128, 0, 0.5)");
}

#[test]
fn wrappers_back_to_sass() {
    let d = Dimension::bind(&SassNumber::new(2.5, "rem"));
    assert_eq!(render(d), "2.5rem");

    let c = Rgba::bind(&SassColor::new(1, 2, 3, 1.0));
    assert_eq!(render(c), "rgba(1, 2, 3, 1)");
}

#[test]
fn wrapper_to_sass_builds_new_value() {
    let number = SassNumber::new(1.0, "px");
    let converted = sass(Dimension::bind(&number));
    assert!(!converted.same_handle(&SassValue::Number(number)));
}

#[test]
fn mutation_propagates_to_sass_list() {
    let sass_list = SassList::from_values(vec![SassValue::number(10.0, "px")], true);
    let value = host(&sass_list.clone().into());

    let d = value.as_list().unwrap().get(0).unwrap().as_dimension().unwrap();
    d.set_value(20.0);
    d.set_unit("em");

    assert_eq!(sass_list.to_string(), "(20em)");
}

#[test]
fn mutation_through_field_access() {
    let color = SassColor::new(0, 0, 0, 1.0);
    let value = host(&color.clone().into());
    let rgba = value.as_rgba().unwrap();

    assert!(rgba.set_field("b", &HostValue::Number(255.0)));
    assert!(!rgba.set_field("alpha", &HostValue::Number(0.0)));
    assert_eq!(color.b(), 255);
}

#[test]
fn accessor_functions_follow_options() {
    let number = SassValue::number(4.0, "px");

    let value = host(&number);
    let plain = value.as_dimension().unwrap();
    assert!(!plain.has_accessor_functions());
    assert!(plain.call("getValue", &[]).is_err());

    let options = ConvertOptions::new().accessor_functions(true);
    let value = to_host(&number, &options).unwrap();
    let d = value.as_dimension().unwrap();
    assert!(d.has_accessor_functions());
    assert_eq!(d.call("getValue", &[]).unwrap(), Some(HostValue::Number(4.0)));
    assert_eq!(d.call("toString", &[]).unwrap(), Some(HostValue::from("4px")));
}
