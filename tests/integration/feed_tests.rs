//! Feed documents as the service sees them.

use pufflux::feed::{Alert, UpstreamError, parse_response};
use pufflux::vtec::{Phenomenon, Significance};

#[test]
fn realistic_multi_alert_document() {
    let body = r#"{
        "response": {
            "version": "0.1",
            "termsofService": "http://www.wunderground.com/weather/api/d/terms.html",
            "features": {"alerts": 1}
        },
        "query_zone": "031",
        "alerts": [
            {
                "type": "WIN",
                "description": "Winter Storm Warning",
                "date": "9:00 PM EST on January 5, 2014",
                "date_epoch": "1388973600",
                "expires": "6:00 PM EST on January 6, 2014",
                "message": "...WINTER STORM WARNING REMAINS IN EFFECT...",
                "phenomena": "WS",
                "significance": "W",
                "ZONES": [{"state": "MI", "ZONE": "075"}],
                "StormBased": {}
            },
            {
                "type": "WND",
                "description": "Wind Chill Advisory",
                "phenomena": "WC",
                "significance": "Y"
            }
        ]
    }"#;

    let snap = parse_response(body).unwrap();
    assert!(snap.error.is_none());
    assert_eq!(snap.alerts.len(), 2);
    assert_eq!(snap.alerts[0].phenomenon(), Some(Phenomenon::WinterStorm));
    assert_eq!(snap.alerts[0].significance(), Some(Significance::Warning));
    assert_eq!(snap.alerts[1].significance(), Some(Significance::Advisory));
}

#[test]
fn error_document_has_no_alerts() {
    let body = r#"{"response": {"version": "0.1",
        "error": {"type": "querynotfound", "description": "No cities match your search query"}}}"#;
    let snap = parse_response(body).unwrap();
    assert!(snap.alerts.is_empty());
    assert_eq!(
        snap.error,
        Some(UpstreamError::new(
            "querynotfound",
            "No cities match your search query"
        ))
    );
}

#[test]
fn null_codes_stay_absent() {
    let body = r#"{"alerts": [{"phenomena": null, "significance": "W"}, {}]}"#;
    let snap = parse_response(body).unwrap();
    assert_eq!(snap.alerts.len(), 2);
    assert_eq!(snap.alerts[0].phenomenon_code, None);
    assert_eq!(snap.alerts[1], Alert::default());
}

#[test]
fn non_object_documents_are_rejected() {
    for body in ["", "null", "42", "{\"alerts\": 3}"] {
        assert!(parse_response(body).is_err(), "{body:?}");
    }
}
