use anyhow::Result;
use chrono::TimeDelta;
use serde_json::json;
use tidy_fields::{
    capostrophe, frac, hms, nullify_json, Capostrophe, FracExt, HmsExt, TidyConfig, TidyError,
};

#[test]
fn test_documented_examples() -> Result<()> {
    assert_eq!(hms(0.0, 0)?, "00:00:00");
    assert_eq!(hms(3661.0, 0)?, "01:01:01");
    assert_eq!(hms(1234.5612, 2)?, "00:20:34.56");
    assert_eq!(hms(59.999, 0)?, "00:01:00");

    assert!((frac(9234.5612, 8)? - 0.5612).abs() < 1e-4);
    assert!((frac(-1.3, 8)? - 0.7).abs() < 1e-9);

    assert_eq!(capostrophe("O'reilly").as_deref(), Some("O'Reilly"));
    assert_eq!(capostrophe("it's"), None);
    assert_eq!(
        capostrophe("Shaquille O'neal").as_deref(),
        Some("Shaquille O'Neal")
    );

    Ok(())
}

#[test]
fn test_extension_traits() -> Result<()> {
    let lap = TimeDelta::minutes(83) + TimeDelta::milliseconds(1_500);
    assert_eq!(lap.hms(1)?, "01:23:01.5");
    assert_eq!(90.0_f64.hms(0)?, "00:01:30");
    assert_eq!(2.5_f64.frac(1)?, 0.5);
    assert_eq!("d'angelo".capostrophe().as_deref(), Some("D'Angelo"));

    Ok(())
}

#[test]
fn test_out_of_domain_numbers_are_rejected() {
    assert!(matches!(
        hms(-0.5, 0),
        Err(TidyError::InvalidDuration { .. })
    ));
    assert!(matches!(
        frac(f64::NAN, 8),
        Err(TidyError::NonFiniteNumber { .. })
    ));
}

#[test]
fn test_config_drives_decimals() -> Result<()> {
    let config = TidyConfig::from_toml_str(
        r#"
[duration]
decimals = 3

[fraction]
decimals = 2
"#,
    )?;

    assert_eq!(hms(61.23456, config.duration_decimals())?, "00:01:01.235");
    assert_eq!(frac(7.129, config.fraction_decimals())?, 0.13);

    Ok(())
}

#[test]
fn test_nullify_json_batch_of_records() {
    let batch = json!([
        {"name": "O'neal", "team": ""},
        {"name": "Bird", "team": "Celtics"}
    ]);

    assert_eq!(
        nullify_json(batch),
        json!([
            {"name": "O'neal", "team": null},
            {"name": "Bird", "team": "Celtics"}
        ])
    );
}
