use pretty_assertions::assert_eq;
use serde_json::json;
use tests::Fixture;

const ARTICLE: &str = r#"
name = "Article"

[[columns]]
name = "id"
type = "integer"
null = false

[[columns]]
name = "title"
type = "string"
null = false
limit = 255

[[columns]]
name = "body"
type = "text"
null = true

[[columns]]
name = "created_at"
type = "datetime"
null = false
"#;

const ROUTES: &str = r#"
[[routes]]
verb = "GET"
path = "/articles/:id(.:format)"
requirements = { controller = "articles", action = "show" }
"#;

#[test]
fn article_schema_and_ui_schema() {
    let fixture = Fixture::new().model("article.toml", ARTICLE).routes(ROUTES);

    let report = fixture.writer().write().unwrap();
    assert_eq!(
        report.created,
        [
            fixture.out_path("article/schema.json"),
            fixture.out_path("article/ui_schema.json"),
        ]
    );
    assert!(report.skipped.is_empty());

    let schema = fixture.read_json("article/schema.json");
    assert_eq!(
        schema,
        json!({
            "type": "object",
            "title": "Article",
            "description": "Article",
            "properties": {
                "id": { "type": "integer" },
                "title": { "type": "string", "maxlength": 255 },
                "body": { "type": "string" },
                "created_at": { "type": "string", "format": "date-time" }
            },
            "required": ["title"],
            "links": [
                { "rel": "show", "method": "GET", "href": "/articles/{id}" }
            ]
        })
    );

    let ui_schema = fixture.read_json("article/ui_schema.json");
    assert_eq!(
        ui_schema,
        json!({
            "id": { "ui:readonly": true },
            "title": {},
            "body": {},
            "created_at": { "ui:readonly": true }
        })
    );
}

#[test]
fn schema_file_layout_is_stable() {
    let fixture = Fixture::new().model("article.toml", ARTICLE).routes(ROUTES);
    fixture.writer().write().unwrap();

    let schema = fixture.read("article/schema.json");
    let keys: Vec<_> = schema
        .lines()
        .filter(|line| line.starts_with("  \"") && !line.starts_with("    "))
        .map(|line| line.trim().split('"').nth(1).unwrap().to_string())
        .collect();

    assert_eq!(
        keys,
        ["type", "title", "description", "properties", "required", "links"]
    );
    assert!(!schema.ends_with('\n'));
}

#[test]
fn model_without_routes_gets_empty_links() {
    let fixture = Fixture::new().model("article.toml", ARTICLE);
    fixture.writer().write().unwrap();

    let schema = fixture.read_json("article/schema.json");
    assert_eq!(schema["links"], json!([]));
}
