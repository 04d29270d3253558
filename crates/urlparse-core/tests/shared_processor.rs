//! One processor instance serving events on several threads.

use serde_json::json;
use urlparse_core::{Event, UrlParse, UrlParseConfig};

fn assert_send_sync<T: Send + Sync>() {}

#[test]
fn processor_is_send_and_sync() {
    assert_send_sync::<UrlParse>();
}

#[test]
fn concurrent_runs_on_distinct_events() {
    let cfg = UrlParseConfig::from_toml_str(
        r#"
        [[fields]]
        from = "url.original"
        to = "url.parts"
    "#,
    )
    .unwrap();
    let p = UrlParse::new(cfg).unwrap();

    let results: Vec<Event> = std::thread::scope(|s| {
        let handles: Vec<_> = (0..8)
            .map(|i| {
                let p = &p;
                s.spawn(move || {
                    let mut e = Event::from_value(json!({
                        "url": { "original": format!("https://host{i}.example:{}/p", 8000 + i) }
                    }))
                    .unwrap();
                    p.run(&mut e).unwrap();
                    e
                })
            })
            .collect();
        handles.into_iter().map(|h| h.join().unwrap()).collect()
    });

    for (i, e) in results.iter().enumerate() {
        assert_eq!(
            e.get_value("url.parts.hostname").unwrap(),
            &json!(format!("host{i}.example"))
        );
        assert_eq!(
            e.get_value("url.parts.port").unwrap(),
            &json!((8000 + i).to_string())
        );
    }
}
