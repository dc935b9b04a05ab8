//! Form descriptions read by `sitekit check`.

use std::path::Path;

use pagedom::{Element, Tree};
use serde::Deserialize;
use sitekit::{Error, Result};

#[derive(Debug, Clone, Deserialize)]
pub struct FormSpec {
    #[serde(default = "default_form_id")]
    pub id: String,
    pub fields: Vec<FieldSpec>,
}

fn default_form_id() -> String {
    "form".to_string()
}

#[derive(Debug, Clone, Deserialize)]
pub struct FieldSpec {
    pub id: String,
    #[serde(rename = "type", default = "default_field_type")]
    pub field_type: String,
    #[serde(default)]
    pub required: bool,
    #[serde(default)]
    pub value: String,
}

fn default_field_type() -> String {
    "text".to_string()
}

impl FormSpec {
    pub fn load(path: &Path) -> Result<Self> {
        let json = std::fs::read_to_string(path).map_err(|source| Error::Io {
            path: path.display().to_string(),
            source,
        })?;
        Ok(serde_json::from_str(&json)?)
    }

    /// `body > div#container > form > div.form-group > field`, with a submit
    /// button closing the form.
    pub fn to_tree(&self) -> Tree {
        let groups = self.fields.iter().map(|field| {
            Element::div()
                .id(format!("{}-group", field.id))
                .class("form-group")
                .child(field.element())
        });
        let form = Element::form()
            .id(&self.id)
            .children(groups)
            .child(
                Element::button("Send")
                    .id(format!("{}-submit", self.id))
                    .attr("type", "submit"),
            );
        Tree::with_body([Element::div().id("container").child(form)])
    }
}

impl FieldSpec {
    fn element(&self) -> Element {
        let el = match self.field_type.as_str() {
            "textarea" => Element::textarea(),
            other => Element::input(other),
        };
        let el = el.id(&self.id).value(&self.value);
        if self.required { el.required() } else { el }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pagedom::Document;

    const CONTACT: &str = r#"{
        "id": "contact",
        "fields": [
            { "id": "name", "required": true, "value": "Ada" },
            { "id": "email", "type": "email", "required": true },
            { "id": "message", "type": "textarea" }
        ]
    }"#;

    #[test]
    fn test_parse_defaults() {
        let spec: FormSpec = serde_json::from_str(CONTACT).unwrap();
        assert_eq!(spec.fields[0].field_type, "text");
        assert!(!spec.fields[2].required);
        assert_eq!(spec.fields[1].value, "");

        let bare: FormSpec = serde_json::from_str(r#"{ "fields": [] }"#).unwrap();
        assert_eq!(bare.id, "form");
    }

    #[test]
    fn test_tree_layout() {
        let spec: FormSpec = serde_json::from_str(CONTACT).unwrap();
        let tree = spec.to_tree();

        assert_eq!(tree.parent_of("contact").map(|p| p.id.as_str()), Some("container"));
        assert_eq!(tree.parent_of("email").map(|p| p.id.as_str()), Some("email-group"));
        assert!(tree.element("email-group").unwrap().has_class("form-group"));

        let email = tree.element("email").unwrap();
        assert_eq!(email.input_type().as_deref(), Some("email"));
        assert!(email.has_attr("required"));
        assert_eq!(tree.element("message").unwrap().tag, "textarea");
        assert_eq!(
            tree.element("contact-submit").unwrap().get_attr("type"),
            Some("submit")
        );
    }
}
