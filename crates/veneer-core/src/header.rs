//! The machine-owned header block prepended to generated artifacts.
//!
//! The header is an authoring aid for humans who open a generated file; the
//! only machine-read portion is the [`AUTOGENERATED_TAG`] sentinel, whose
//! presence in a body tells the writer not to wrap it again.

use uuid::Uuid;

use crate::model::ModelSlot;

/// Sentinel marking the end of the machine-owned region. Checked verbatim.
pub const AUTOGENERATED_TAG: &str =
    "{# Everything above this line is autogenerated. If you change it, you will lose your changes. #}";

/// Explains the minimum-arity padding rule to template authors.
pub const PADDING_NOTE: &str =
    "{# View models always carry at least two slots so every template has a model; placeholder slots pad shorter parameter lists and can be ignored. #}";

/// Builds the header lines for an artifact, in order: padding note, model
/// declaration, sentinel, provenance. `source` is the entity's permanent
/// identifier, not its mutable primary key.
pub fn header_block(slots: &[ModelSlot], source: &Uuid) -> Vec<String> {
    let declaration = slots
        .iter()
        .map(|slot| format!("{} {}", slot.ty.declaration(), slot.name))
        .collect::<Vec<_>>()
        .join(", ");

    vec![
        PADDING_NOTE.to_string(),
        format!("{{# model: ({declaration}) #}}"),
        AUTOGENERATED_TAG.to_string(),
        format!("{{# source: {source} #}}"),
    ]
}

/// Joins header and body: header lines separated by newlines, then two blank
/// lines, then the body verbatim.
pub fn wrap_body(header: &[String], body: &str) -> String {
    format!("{}\n\n\n{}", header.join("\n"), body)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{build_model, TemplateParameter, TypeDescriptor};
    use serde_json::json;

    #[test]
    fn header_lines_are_note_declaration_sentinel_provenance() {
        let model = build_model(&[
            TemplateParameter::new("title", TypeDescriptor::Text).with_value(json!("a"))
        ])
        .unwrap();
        let guid = Uuid::nil();
        let header = header_block(model.slots(), &guid);

        assert_eq!(header.len(), 4);
        assert_eq!(header[0], PADDING_NOTE);
        assert_eq!(header[1], "{# model: (String title, Value PlaceHolder1) #}");
        assert_eq!(header[2], AUTOGENERATED_TAG);
        assert_eq!(
            header[3],
            "{# source: 00000000-0000-0000-0000-000000000000 #}"
        );
    }

    #[test]
    fn wrapped_body_separates_header_with_two_blank_lines() {
        let header = vec!["one".to_string(), "two".to_string()];
        assert_eq!(wrap_body(&header, "body"), "one\ntwo\n\n\nbody");
    }
}
