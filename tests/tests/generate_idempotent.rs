use pretty_assertions::assert_eq;
use std::fs;
use tests::Fixture;

fn fixture() -> Fixture {
    Fixture::new()
        .model(
            "article.toml",
            "name = \"Article\"\n[[columns]]\nname = \"id\"\ntype = \"integer\"\nnull = false\n",
        )
        .model(
            "comment.toml",
            "name = \"Comment\"\n[[columns]]\nname = \"body\"\ntype = \"text\"\n",
        )
}

#[test]
fn second_run_reports_everything_as_existing() {
    let fixture = fixture();

    let first = fixture.writer().write().unwrap();
    assert_eq!(first.created.len(), 4);
    assert!(first.skipped.is_empty());

    let second = fixture.writer().write().unwrap();
    assert!(second.created.is_empty());
    assert_eq!(second.skipped, first.created);
}

#[test]
fn runs_on_clean_directories_produce_identical_files() {
    let a = fixture();
    let b = fixture();
    a.writer().write().unwrap();
    b.writer().write().unwrap();

    for file in [
        "article/schema.json",
        "article/ui_schema.json",
        "comment/schema.json",
        "comment/ui_schema.json",
    ] {
        assert_eq!(a.read(file), b.read(file), "{file}");
    }
}

#[test]
fn existing_files_are_not_overwritten() {
    let fixture = fixture();
    let path = fixture.out_path("article/schema.json");
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(&path, "{}").unwrap();

    let report = fixture.writer().write().unwrap();
    assert_eq!(report.skipped, [path.clone()]);
    assert_eq!(report.created.len(), 3);
    assert_eq!(fs::read_to_string(&path).unwrap(), "{}");
}
