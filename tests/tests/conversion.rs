use castr_common::endpoint::IpPort;
use castr_common::error::FormatError;
use castr_common::locale::Locale;
use castr_core::convert::{Converter, IntegerToText, TextToInteger};
use castr_core::registry::{ConversionRegistry, RegistryError};
use castr_core::value::{Kind, Value};

/*************************************************************
                 Reference conversion vectors
**************************************************************/

#[test]
fn string_to_integer() {
    let result = TextToInteger.convert(&Value::from("10")).unwrap();
    assert_eq!(result, Value::Integer(10));
}

#[test]
fn integer_to_string() {
    let result = IntegerToText.convert(&Value::from(10)).unwrap();
    assert_eq!(result, Value::Text("10".into()));
}

#[test]
fn ip_port_to_string() {
    let source = IpPort::new("127.0.0.1", 8080);
    assert_eq!(source.to_string(), "127.0.0.1:8080");
}

#[test]
fn string_to_ip_port() {
    let result: IpPort = "127.0.0.1:8080".parse().unwrap();
    assert_eq!(result, IpPort::new("127.0.0.1", 8080));
}

#[test]
fn ip_port_value_equality() {
    assert_eq!(IpPort::new("127.0.0.1", 8080), IpPort::new("127.0.0.1", 8080));
    assert_ne!(IpPort::new("127.0.0.1", 8080), IpPort::new("127.0.0.1", 8081));
}

/*************************************************************
              End-to-end registry dispatch
**************************************************************/

#[test]
fn registry_converts_all_default_pairs() {
    let registry = ConversionRegistry::with_defaults(Locale::EnUs);

    assert_eq!(
        registry.convert(&Value::from("10"), Kind::Integer).unwrap(),
        Value::Integer(10)
    );
    assert_eq!(
        registry.convert(&Value::from(10), Kind::Text).unwrap(),
        Value::Text("10".into())
    );
    assert_eq!(
        registry
            .convert(&Value::from("127.0.0.1:8080"), Kind::Endpoint)
            .unwrap(),
        Value::Endpoint(IpPort::new("127.0.0.1", 8080))
    );
    assert_eq!(
        registry
            .convert(&Value::from(IpPort::new("127.0.0.1", 8080)), Kind::Text)
            .unwrap(),
        Value::Text("127.0.0.1:8080".into())
    );
    assert_eq!(
        registry.convert(&Value::from("1,000"), Kind::Number).unwrap(),
        Value::Number(1000.0)
    );
    assert_eq!(
        registry.convert(&Value::from(1000.0), Kind::Text).unwrap(),
        Value::Text("1,000".into())
    );
}

#[test]
fn registry_round_trips_an_endpoint_through_text() {
    let registry = ConversionRegistry::with_defaults(Locale::EnUs);
    let original = Value::Endpoint(IpPort::new("db.internal", 5432));

    let as_text = registry.convert(&original, Kind::Text).unwrap();
    let back = registry.convert(&as_text, Kind::Endpoint).unwrap();

    assert_eq!(back, original);
}

#[test]
fn registry_rejects_malformed_input() {
    let registry = ConversionRegistry::with_defaults(Locale::EnUs);

    let err = registry
        .convert(&Value::from("abc"), Kind::Integer)
        .unwrap_err();
    assert!(matches!(
        err,
        RegistryError::Format(FormatError::InvalidInteger { .. })
    ));

    let err = registry
        .convert(&Value::from("noport"), Kind::Endpoint)
        .unwrap_err();
    assert!(matches!(
        err,
        RegistryError::Format(FormatError::MissingPortDelimiter { .. })
    ));
}

#[test]
fn registry_reports_unregistered_pairs() {
    let registry = ConversionRegistry::with_defaults(Locale::EnUs);

    let err = registry
        .convert(&Value::from(IpPort::new("h", 1)), Kind::Integer)
        .unwrap_err();
    assert!(matches!(
        err,
        RegistryError::NoConverter {
            from: Kind::Endpoint,
            to: Kind::Integer
        }
    ));
}

/*************************************************************
                  Locale-dependent behavior
**************************************************************/

#[test]
fn registry_formatter_follows_its_locale() {
    let registry = ConversionRegistry::with_defaults(Locale::DeDe);

    assert_eq!(
        registry.convert(&Value::from(1234.5), Kind::Text).unwrap(),
        Value::Text("1.234,5".into())
    );
    assert_eq!(
        registry.convert(&Value::from("1.234,5"), Kind::Number).unwrap(),
        Value::Number(1234.5)
    );
}

#[test]
fn grouped_values_round_trip_per_locale() {
    for locale in [Locale::EnUs, Locale::KoKr, Locale::DeDe, Locale::FrFr] {
        let registry = ConversionRegistry::with_defaults(locale);

        for &x in &[1000.0, 1234.5, -9876543.25] {
            let text = registry.convert(&Value::from(x), Kind::Text).unwrap();
            let back = registry.convert(&text, Kind::Number).unwrap();
            assert_eq!(back, Value::Number(x), "{locale}: {x} did not round trip");
        }
    }
}
