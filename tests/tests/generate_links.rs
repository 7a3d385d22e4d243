use pretty_assertions::assert_eq;
use serde_json::json;
use tests::Fixture;

const ROUTES: &str = r#"
[[routes]]
verb = "^GET$"
path = "/people(.:format)"
requirements = { controller = "people", action = "index" }

[[routes]]
verb = "^POST$"
path = "/people(.:format)"
requirements = { controller = "people", action = "create" }

[[routes]]
verb = "^GET$"
path = "/people/new(.:format)"
requirements = { controller = "people", action = "new" }

[[routes]]
verb = "^GET$"
path = "/people/:id/edit(.:format)"
requirements = { controller = "people", action = { pattern = "edit" } }

[[routes]]
verb = "^PATCH$"
path = "/people/:id(.:format)"
requirements = { controller = "people", action = "update" }

[[routes]]
verb = "^PUT$"
path = "/people/:id(.:format)"
requirements = { controller = "people", action = "update" }

[[routes]]
verb = "^DELETE$"
path = "/sessions/:id(.:format)"
requirements = { controller = "sessions", action = "destroy" }

[[routes]]
verb = "GET"
path = "/up"
"#;

#[test]
fn links_are_filtered_and_deduplicated() {
    let fixture = Fixture::new()
        .model("person.toml", "name = \"Person\"")
        .model("session.toml", "name = \"Session\"")
        .routes(ROUTES);

    fixture.writer().write().unwrap();

    assert_eq!(
        fixture.read_json("person/schema.json")["links"],
        json!([
            { "rel": "index", "method": "GET", "href": "/people" },
            { "rel": "create", "method": "POST", "href": "/people" },
            { "rel": "update", "method": "PATCH", "href": "/people/{id}" }
        ])
    );
    assert_eq!(fixture.read_json("session/schema.json")["links"], json!([]));
}

#[test]
fn irregular_plural_override() {
    let fixture = Fixture::new()
        .model("person.toml", "name = \"Person\"")
        .routes(&ROUTES.replace("people", "persons"));

    let writer = schema_builder::Writer::new(fixture.config().plural("person", "persons"));
    writer.write().unwrap();

    let links = &fixture.read_json("person/schema.json")["links"];
    assert_eq!(links.as_array().unwrap().len(), 3);
}

#[test]
fn invalid_route_pattern_aborts() {
    let fixture = Fixture::new().model("person.toml", "name = \"Person\"").routes(
        r#"
        [[routes]]
        verb = "GET"
        path = "/people"
        requirements = { controller = "people", action = { pattern = "[" } }
        "#,
    );

    let err = fixture.writer().write().unwrap_err();
    assert!(err.to_string().contains("invalid route `GET /people`"));
    assert!(!fixture.out_path("person").exists());
}
