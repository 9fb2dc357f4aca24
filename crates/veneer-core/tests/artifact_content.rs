//! End-to-end artifact content checks through the public renderer API:
//! header layout, first-writer-wins idempotence, and sentinel handling.

use chrono::{TimeZone, Utc};
use serde_json::json;
use std::fs;
use std::path::Path;
use tempfile::TempDir;
use uuid::Uuid;
use veneer_core::{
    EntityRef, ObjectRenderer, TemplateParameter, TypeDescriptor, AUTOGENERATED_TAG, PADDING_NOTE,
};

fn invoice(millis: i64, guid: Uuid) -> EntityRef {
    EntityRef::new("Invoice", 42, guid)
        .with_last_modified(Utc.timestamp_millis_opt(millis).unwrap())
}

fn title_param() -> Vec<TemplateParameter> {
    vec![TemplateParameter::new("title", TypeDescriptor::Text).with_value(json!("March"))]
}

#[test]
fn fresh_artifact_has_header_sentinel_then_body() {
    let tmp = TempDir::new().unwrap();
    let renderer = ObjectRenderer::new(tmp.path());
    let guid = Uuid::new_v4();

    let info = renderer
        .generate(&invoice(1000, guid), &title_param(), "<h1>{{ title }}</h1>")
        .unwrap();

    let contents = fs::read_to_string(&info.absolute_path).unwrap();
    let expected = format!(
        "{PADDING_NOTE}\n\
         {{# model: (String title, Value PlaceHolder1) #}}\n\
         {AUTOGENERATED_TAG}\n\
         {{# source: {guid} #}}\n\n\n\
         <h1>{{{{ title }}}}</h1>"
    );
    assert_eq!(contents, expected);
}

#[test]
fn repeated_generation_never_alters_the_artifact() {
    let tmp = TempDir::new().unwrap();
    let renderer = ObjectRenderer::new(tmp.path());
    let guid = Uuid::new_v4();

    let first = renderer
        .generate(&invoice(1000, guid), &title_param(), "first body")
        .unwrap();
    let original = fs::read_to_string(&first.absolute_path).unwrap();

    let second = renderer
        .generate(&invoice(1000, guid), &[], "completely different body")
        .unwrap();

    assert_eq!(first.absolute_path, second.absolute_path);
    assert_eq!(
        fs::read_to_string(&second.absolute_path).unwrap(),
        original
    );
}

#[test]
fn timestamp_bump_generates_a_sibling_artifact() {
    let tmp = TempDir::new().unwrap();
    let renderer = ObjectRenderer::new(tmp.path());
    let guid = Uuid::new_v4();

    let v1 = renderer
        .generate(&invoice(1000, guid), &title_param(), "v1")
        .unwrap();
    let v2 = renderer
        .generate(&invoice(2000, guid), &title_param(), "v2")
        .unwrap();

    assert_ne!(v1.absolute_path, v2.absolute_path);
    assert!(v1.absolute_path.exists());
    assert!(v2.absolute_path.exists());
}

#[test]
fn pre_wrapped_body_is_written_verbatim() {
    let tmp = TempDir::new().unwrap();
    let renderer = ObjectRenderer::new(tmp.path());

    let body = format!("{AUTOGENERATED_TAG}\n{{# source: reimported #}}\n\nbody");
    let info = renderer
        .generate(&invoice(1000, Uuid::new_v4()), &title_param(), &body)
        .unwrap();

    assert_eq!(fs::read_to_string(&info.absolute_path).unwrap(), body);
}

#[test]
fn field_scoped_artifacts_get_their_own_segment() {
    let tmp = TempDir::new().unwrap();
    let renderer = ObjectRenderer::new(tmp.path());
    let guid = Uuid::new_v4();

    let summary = renderer
        .generate_for_field(&invoice(1000, guid), &title_param(), "summary", "Summary")
        .unwrap();
    let plain = renderer
        .generate(&invoice(1000, guid), &title_param(), "plain")
        .unwrap();

    assert_eq!(
        summary.relative_path,
        Path::new("Client/Views/Cache/Invoice/42/Summary/1000.tera")
    );
    assert_ne!(summary.absolute_path, plain.absolute_path);
    assert!(summary.absolute_path.exists());
    assert!(plain.absolute_path.exists());
}

#[test]
fn model_context_reflects_supplied_values() {
    let tmp = TempDir::new().unwrap();
    let renderer = ObjectRenderer::new(tmp.path());

    let params = vec![
        TemplateParameter::new("title", TypeDescriptor::Text).with_value(json!("March")),
        TemplateParameter::new("total", TypeDescriptor::Float).with_value(json!(12.5)),
    ];
    let info = renderer
        .generate(&invoice(1000, Uuid::new_v4()), &params, "body")
        .unwrap();

    let context = info.model.to_context();
    assert_eq!(context["title"], json!("March"));
    assert_eq!(context["total"], json!(12.5));
}
