use article_layout::element::{Block, ComponentKind, FieldUpdate, factory};
use article_layout::{Element, FileStore, MemoryStore, TemplateError, TemplateStore, export_html};

fn memory_store() -> TemplateStore {
    TemplateStore::empty(Box::new(MemoryStore::new()), "templates")
}

fn sample_elements() -> Vec<Element> {
    vec![
        factory::create_element(ComponentKind::Title, "element_1", 10.0, 10.0),
        factory::create_element(ComponentKind::BookLayout, "element_2", 0.0, 100.0),
    ]
}

const ORIGINAL_STYLE: &str = r##"{
  "name": "Imported",
  "elements": [
    {
      "id": "title_1",
      "type": "title",
      "x": 50,
      "y": 50,
      "width": 500,
      "height": 60,
      "text": "Beautiful image layout",
      "fontSize": 28,
      "color": "#222222",
      "fontWeight": "bold",
      "textAlign": "center"
    },
    {
      "id": "img_1",
      "type": "image",
      "x": 50,
      "y": 130,
      "width": 600,
      "height": 400,
      "src": "https://via.placeholder.com/600x400.png"
    }
  ],
  "createdAt": "2024-03-01T08:30:00.000Z"
}"##;

#[test]
fn test_save_then_load_round_trips() {
    let mut store = memory_store();
    let elements = sample_elements();

    store.save("Weekly", &elements).unwrap();

    assert_eq!(store.load("Weekly").unwrap(), elements);
}

#[test]
fn test_loaded_copy_does_not_alias_stored_template() {
    let mut store = memory_store();
    store.save("Weekly", &sample_elements()).unwrap();

    let mut loaded = store.load("Weekly").unwrap();
    if let Element::Block(block) = &mut loaded[0] {
        assert!(block.apply(FieldUpdate::Text("changed".into())));
    }

    let again = store.load("Weekly").unwrap();
    assert_ne!(again, loaded);
    assert_eq!(again, sample_elements());
}

#[test]
fn test_saving_does_not_alias_source_elements() {
    let mut store = memory_store();
    let mut elements = sample_elements();
    store.save("Weekly", &elements).unwrap();

    elements.clear();

    assert_eq!(store.load("Weekly").unwrap().len(), 2);
}

#[test]
fn test_names_in_insertion_order() {
    let mut store = memory_store();
    store.save("b", &[]).unwrap();
    store.save("a", &[]).unwrap();
    store.save("c", &[]).unwrap();

    assert_eq!(store.names(), vec!["b", "a", "c"]);
}

#[test]
fn test_name_collision_overwrites_in_place() {
    let mut store = memory_store();
    store.save("first", &[]).unwrap();
    store.save("second", &[]).unwrap();
    store.save("first", &sample_elements()).unwrap();

    assert_eq!(store.names(), vec!["first", "second"]);
    assert_eq!(store.load("first").unwrap().len(), 2);
}

#[test]
fn test_remove() {
    let mut store = memory_store();
    store.save("a", &[]).unwrap();
    store.save("b", &[]).unwrap();

    store.remove("a").unwrap();
    assert_eq!(store.names(), vec!["b"]);

    assert!(matches!(store.remove("a"), Err(TemplateError::NotFound(name)) if name == "a"));
    assert_eq!(store.names(), vec!["b"]);
}

#[test]
fn test_load_missing_is_not_found() {
    let store = memory_store();
    assert!(matches!(store.load("nope"), Err(TemplateError::NotFound(_))));
    assert!(matches!(store.export("nope"), Err(TemplateError::NotFound(_))));
}

#[test]
fn test_export_is_pretty_and_reimportable() {
    let mut store = memory_store();
    store.save("Weekly", &sample_elements()).unwrap();

    let json = store.export("Weekly").unwrap();
    assert!(json.contains("\n  \"name\": \"Weekly\""));
    assert!(json.contains("\"createdAt\""));
    assert!(json.contains("\"type\": \"group\""));

    let mut other = memory_store();
    assert_eq!(other.import(&json).unwrap(), "Weekly");
    assert_eq!(other.get("Weekly"), store.get("Weekly"));
}

#[test]
fn test_import_original_style_payload() {
    let mut store = memory_store();
    let name = store.import(ORIGINAL_STYLE).unwrap();

    assert_eq!(name, "Imported");
    let template = store.get("Imported").unwrap();
    assert_eq!(template.created_at.to_rfc3339(), "2024-03-01T08:30:00+00:00");

    let elements = store.load("Imported").unwrap();
    assert_eq!(elements.len(), 2);
    match &elements[0] {
        Element::Block(Block::Title(t)) => {
            assert_eq!(t.text, "Beautiful image layout");
            assert_eq!(t.font_size, 28);
        }
        other => panic!("expected a title, got {other:?}"),
    }
    assert!(export_html(&elements).contains("<h2 style=\"font-size:28px;"));
}

#[test]
fn test_import_without_created_at_is_stamped() {
    let mut store = memory_store();
    store.import(r#"{"name": "bare", "elements": []}"#).unwrap();
    assert!(store.get("bare").is_some());
}

#[test]
fn test_import_garbage_leaves_store_untouched() {
    let mut store = memory_store();
    store.save("keep", &[]).unwrap();

    for bad in [
        "not json",
        r#"{"elements": []}"#,
        r#"{"name": "x"}"#,
        r#"{"name": "x", "elements": [{"id": "a", "type": "sparkle", "x": 0, "y": 0}]}"#,
    ] {
        assert!(
            matches!(store.import(bad), Err(TemplateError::Parse(_))),
            "accepted {bad}"
        );
        assert_eq!(store.names(), vec!["keep"]);
    }
}

#[test]
fn test_nested_group_is_rejected() {
    let nested = r#"{
        "name": "nested",
        "elements": [
            {"id": "g", "type": "group", "elements": [
                {"id": "h", "type": "group", "elements": []}
            ]}
        ]
    }"#;

    let mut store = memory_store();
    assert!(matches!(store.import(nested), Err(TemplateError::Parse(_))));
    assert!(store.is_empty());
}

#[test]
fn test_file_store_persists_across_reopen() {
    let dir = tempfile::tempdir().unwrap();

    {
        let mut store = TemplateStore::open(Box::new(FileStore::new(dir.path())), "templates").unwrap();
        assert!(store.is_empty());
        store.save("b", &sample_elements()).unwrap();
        store.save("a", &[]).unwrap();
    }

    let store = TemplateStore::open(Box::new(FileStore::new(dir.path())), "templates").unwrap();
    assert_eq!(store.names(), vec!["b", "a"]);
    assert_eq!(store.load("b").unwrap(), sample_elements());
}

#[test]
fn test_corrupted_store_is_parse_error() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("templates.json"), "{ broken").unwrap();

    let result = TemplateStore::open(Box::new(FileStore::new(dir.path())), "templates");
    assert!(matches!(result, Err(TemplateError::Parse(_))));
}
