use rmcp::model::JsonObject;
use rmcp::schemars::{self, JsonSchema, generate::SchemaSettings};
use std::sync::Arc;

/// Generate an inline JSON schema for MCP tools
///
/// Unlike rmcp's default `schema_for_type()`, this function sets `inline_subschemas = true`
/// to generate inline definitions instead of $ref patterns.
pub fn inline_schema_for_type<T: JsonSchema>() -> Arc<JsonObject> {
    let mut settings = SchemaSettings::draft07();
    settings.transforms = vec![Box::new(schemars::transform::AddNullable::default())];
    settings.inline_subschemas = true;

    let generator = settings.into_generator();
    let schema = generator.into_root_schema_for::<T>();
    let object = serde_json::to_value(schema).expect("failed to serialize schema");

    let json_object = match object {
        serde_json::Value::Object(object) => object,
        _ => panic!("Schema serialization produced non-object value"),
    };

    Arc::new(json_object)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tools::{GetSectionRequest, SearchDocsRequest};

    #[test]
    fn request_schemas_list_their_fields() {
        let schema = inline_schema_for_type::<GetSectionRequest>();
        let properties = schema["properties"].as_object().unwrap();
        assert!(properties.contains_key("framework"));
        assert!(properties.contains_key("section"));

        let schema = inline_schema_for_type::<SearchDocsRequest>();
        assert!(schema["properties"].as_object().unwrap().contains_key("query"));
    }
}
