use tests::{assert_err, assert_ok, Fixture};

#[test]
fn base_and_abstract_models_are_skipped() {
    let fixture = Fixture::new()
        .model("application_record.toml", "name = \"ApplicationRecord\"")
        .model("concerns/base.toml", "name = \"Base\"\nabstract = true")
        .model("tag.toml", "name = \"Tag\"");

    let report = assert_ok!(fixture.writer().write());
    assert_eq!(
        report.created,
        [
            fixture.out_path("tag/schema.json"),
            fixture.out_path("tag/ui_schema.json"),
        ]
    );
}

#[test]
fn namespaced_models_nest() {
    let fixture = Fixture::new()
        .model("admin/report.toml", "name = \"Admin::Report\"")
        .routes(
            r#"
            [[routes]]
            verb = "GET"
            path = "/reports(.:format)"
            requirements = { controller = "admin/reports", action = "index" }
            "#,
        );

    assert_ok!(fixture.writer().write());

    let schema = fixture.read_json("admin/report/schema.json");
    assert_eq!(schema["title"], "Report");
    // `admin` controllers never publish links
    assert_eq!(schema["links"], serde_json::json!([]));
}

#[test]
fn load_failure_writes_nothing() {
    let fixture = Fixture::new()
        .model("article.toml", "name = \"Article\"")
        .model("broken.toml", "name = \"Broken\"\n[[columns]]\nname = 1");

    let err = assert_err!(fixture.writer().write());
    assert!(err.is_model_load());
    assert!(!fixture.out_path("article").exists());
}

#[test]
fn custom_model_path() {
    let fixture = Fixture::new().file("schema/models/tag.toml", "name = \"Tag\"");

    let writer = schema_builder::Writer::new(fixture.config().model_path("schema/models/*.toml"));
    let report = assert_ok!(writer.write());
    assert_eq!(report.created.len(), 2);
}
