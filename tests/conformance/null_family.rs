//! Null Family Tests
//!
//! Null is a first-class state: `null` JSON, empty text and driver NULL all
//! decode as invalid, and a valid zero is never confused with it.

use crate::{init_tracing, time_value1, time_value2, TIME_MILLIS};
use nullable::null::{
    Bool, Bytes, Float32, Float64, Int16, Int32, Int64, Int8, Str, Timestamp, Uint64,
};
use nullable::{
    DriverValue, Error, MarshalJson, MarshalText, Scan, UnmarshalJson, UnmarshalText, Valuer,
};

// ============================================================================
// JSON
// ============================================================================

#[test]
fn null_json_decodes_invalid_for_every_type() {
    init_tracing();

    fn check<T, V>(name: &str)
    where
        T: UnmarshalJson + MarshalJson + Default + std::ops::Deref<Target = nullable::Nullable<V>>,
    {
        let mut t = T::default();
        t.unmarshal_json(b"null").unwrap();
        assert!(!t.valid, "{} decoded null as valid", name);
        assert_eq!(t.marshal_json().unwrap(), b"null", "{} did not encode null", name);
    }

    check::<Int8, _>("Int8");
    check::<Int16, _>("Int16");
    check::<Int32, _>("Int32");
    check::<Int64, _>("Int64");
    check::<Uint64, _>("Uint64");
    check::<Float32, _>("Float32");
    check::<Float64, _>("Float64");
    check::<Bool, _>("Bool");
    check::<Str, _>("Str");
    check::<Bytes, _>("Bytes");
    check::<Timestamp, _>("Timestamp");
}

#[test]
fn valid_zero_stays_valid() {
    let mut i = Int64::default();
    i.unmarshal_json(b"0").unwrap();
    assert!(i.valid);
    assert_eq!(i.marshal_json().unwrap(), b"0");

    let mut s = Str::default();
    s.unmarshal_json(br#""""#).unwrap();
    assert!(s.valid);
    assert_eq!(s.marshal_json().unwrap(), br#""""#);

    let mut b = Bool::default();
    b.unmarshal_json(b"false").unwrap();
    assert!(b.valid);

    assert!(Int64::from(0).valid);
    assert!(Str::from(String::new()).valid);
}

#[test]
fn integer_json_forms() {
    let mut i = Int32::default();
    i.unmarshal_json(b"12345").unwrap();
    assert_eq!((i.value, i.valid), (12345, true));

    i.unmarshal_json(br#""12345""#).unwrap();
    assert_eq!((i.value, i.valid), (12345, true));

    assert!(i.unmarshal_json(br#"{"Int32":12345,"Valid":true}"#).is_err());
    assert!(!i.valid);

    assert!(i.unmarshal_json(br#""""#).is_err());
    assert!(i.unmarshal_json(b"1.5").is_err());
}

#[test]
fn integer_overflow_is_reported() {
    let mut i = Int8::default();
    assert!(i.unmarshal_json(b"128").unwrap_err().is_overflow());
    assert!(i.unmarshal_json(b"-129").unwrap_err().is_overflow());
    i.unmarshal_json(b"-128").unwrap();
    assert_eq!(i.value, -128);

    let mut u = Uint64::default();
    u.unmarshal_json(b"18446744073709551615").unwrap();
    assert_eq!(u.value, u64::MAX);
    assert!(u.unmarshal_json(b"-1").unwrap_err().is_overflow());
}

#[test]
fn malformed_json_is_a_syntax_error() {
    let mut i = Int64::from(9);
    let err = i.unmarshal_json(b":)").unwrap_err();
    assert!(matches!(err, Error::Syntax(_)));
    assert!(!i.valid);
    assert_eq!(i.value, 0);
}

#[test]
fn float_json() {
    let mut f = Float64::default();
    f.unmarshal_json(b"1.2345").unwrap();
    assert_eq!(f.value, 1.2345);

    f.unmarshal_json(b"-0.5").unwrap();
    assert_eq!(f.value, -0.5);

    let mut g = Float32::default();
    assert!(g.unmarshal_json(b"1e300").unwrap_err().is_overflow());

    assert!(Float64::from(f64::INFINITY).marshal_json().is_err());
}

#[test]
fn timestamp_json_is_milliseconds() {
    let t = Timestamp::from(time_value1());
    assert_eq!(t.marshal_json().unwrap(), TIME_MILLIS.to_string().as_bytes());

    let mut back = Timestamp::default();
    back.unmarshal_json(TIME_MILLIS.to_string().as_bytes()).unwrap();
    assert!(back.exact_equal(&t));

    back.unmarshal_json(br#""null""#).unwrap();
    assert!(back.valid);
    assert_eq!(back.value, nullable::epoch());
    assert_eq!(back.marshal_json().unwrap(), b"0");

    let mut token = Timestamp::from(time_value1());
    token.unmarshal_json(b"null").unwrap();
    assert!(!token.valid);
    assert_ne!(back, token);
}

#[test]
fn float32_extremes_round_trip() {
    for v in [f32::MAX, f32::MIN] {
        let f = Float32::from(v);

        let mut from_json = Float32::default();
        from_json.unmarshal_json(&f.marshal_json().unwrap()).unwrap();
        assert_eq!(from_json, f);

        let mut from_text = Float32::default();
        from_text.unmarshal_text(&f.marshal_text().unwrap()).unwrap();
        assert_eq!(from_text, f);
    }
}

// ============================================================================
// Text
// ============================================================================

#[test]
fn text_round_trip() {
    let mut i = Int32::default();
    i.unmarshal_text(b"12345").unwrap();
    assert_eq!(i.marshal_text().unwrap(), b"12345");

    i.unmarshal_text(b"").unwrap();
    assert!(!i.valid);
    assert_eq!(i.marshal_text().unwrap(), b"");

    i.unmarshal_text(b"null").unwrap();
    assert!(!i.valid);

    let mut b = Bytes::default();
    b.unmarshal_text(b"null").unwrap();
    assert!(b.valid);
    assert_eq!(b.value, b"null");
}

#[test]
fn bool_text_is_strict() {
    let mut b = Bool::default();
    b.unmarshal_text(b"true").unwrap();
    assert!(b.value);
    assert!(b.unmarshal_text(b"1").is_err());
    assert!(b.unmarshal_text(b"TRUE").is_err());
    assert!(!b.valid);
}

// ============================================================================
// Driver binding
// ============================================================================

#[test]
fn scan_and_value() {
    let mut i = Int16::default();
    i.scan(DriverValue::Int64(300)).unwrap();
    assert_eq!((i.value, i.valid), (300, true));
    assert_eq!(i.driver_value().unwrap(), DriverValue::Int64(300));

    assert!(matches!(
        i.scan(DriverValue::Int64(70_000)),
        Err(Error::Overflow { .. })
    ));
    assert!(!i.valid);

    i.scan(DriverValue::Null).unwrap();
    assert_eq!(i.driver_value().unwrap(), DriverValue::Null);

    assert_eq!(Int16::from(0).driver_value().unwrap(), DriverValue::Int64(0));
}

#[test]
fn unbindable_values_are_errors() {
    assert!(Uint64::from(u64::MAX).driver_value().is_err());
    assert_eq!(
        Uint64::from(i64::MAX as u64).driver_value().unwrap(),
        DriverValue::Int64(i64::MAX)
    );
}

#[test]
fn string_scan_accepts_bytes() {
    let mut s = Str::default();
    s.scan(DriverValue::Bytes(b"abc".to_vec())).unwrap();
    assert_eq!(s.value, "abc");

    assert!(s.scan(DriverValue::Bytes(vec![0xff, 0xfe])).is_err());
    assert!(!s.valid);
}

// ============================================================================
// Equality
// ============================================================================

#[test]
fn equality() {
    assert_eq!(Int32::null(), Int32::new(7, false));
    assert_ne!(Int32::null(), Int32::from(0));
    assert_eq!(Int32::from(7), Int32::from(7));

    let a = Timestamp::from(time_value1());
    let b = Timestamp::from(time_value2());
    assert!(a.equal(&b));
    assert!(!a.exact_equal(&b));
}

#[test]
fn option_conversions() {
    assert_eq!(Int64::from_option(Some(5)).ptr(), Some(&5));
    assert_eq!(Int64::from_option(None).ptr(), None);
    assert_eq!(Int64::from_ptr(Some(&0)).ptr(), Some(&0));
}
