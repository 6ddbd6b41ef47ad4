//! Entity descriptors.
//!
//! An [`EntityDescriptor`] is everything needed to render one model: names,
//! schema metadata and the ordered field specs. Building one performs all
//! naming decisions up front so rendering cannot fail on a bad name.

use modelgen_define::{ModelGroup, SchemaDocument};
use tracing::debug;

use crate::errors::GeneratorError;
use crate::fields::{FieldSpec, build_field_specs};
use crate::naming::{
    class_name_to_file_name, module_ident, parse_ident, schema_name_to_entity_name, table_name,
};

/// Names exported by every group index besides the entities themselves.
pub const BASE_EXPORTS: &[&str] = &["BaseModel", "ModelError", "ValidationError"];

/// Module names taken by the group's own files.
pub const RESERVED_MODULES: &[&str] = &["base", "mod"];

/// One generated model, ready for rendering.
#[derive(Debug, Clone, PartialEq)]
pub struct EntityDescriptor {
    /// Class-style type name, e.g. `WidgetHeader`.
    pub class_name: String,
    /// Snake-case module name, e.g. `widget_header`.
    pub file_name: String,
    /// Schema name the entity was generated from.
    pub schema_name: String,
    /// Stable schema identifier, if the document has one.
    pub schema_id: Option<String>,
    /// Storage table name.
    pub table_name: String,
    /// Fields in document order.
    pub fields: Vec<FieldSpec>,
}

impl EntityDescriptor {
    /// Whether any field identifier breaks snake case.
    pub fn has_non_snake_case_fields(&self) -> bool {
        self.fields
            .iter()
            .any(|f| f.identifier.chars().any(char::is_uppercase))
    }
}

/// Builds the descriptor for one schema document.
///
/// ## Errors
///
/// Returns [`GeneratorError::InvalidEntityName`] when the schema name does not
/// produce a usable type name or module name, including names that would
/// shadow the group's shared exports or files.
///
/// ## Examples
///
/// ```
/// use modelgen_define::{ModelGroup, SchemaDocument};
/// use modelgen_gen::entity::build_entity_descriptor;
/// use serde_json::json;
///
/// let doc = SchemaDocument::from_value(
///     "OpenWorksCommonModel.RefCurrency",
///     &json!({ "properties": { "currency_code": { "type": "string" } } }),
/// )
/// .unwrap();
///
/// let entity = build_entity_descriptor(&doc, &ModelGroup::common()).unwrap();
/// assert_eq!(entity.class_name, "RefCurrency");
/// assert_eq!(entity.file_name, "ref_currency");
/// assert_eq!(entity.table_name, "OpenWorksCommonModel_RefCurrency");
/// ```
pub fn build_entity_descriptor(
    document: &SchemaDocument,
    group: &ModelGroup,
) -> Result<EntityDescriptor, GeneratorError> {
    let class_name = schema_name_to_entity_name(&document.name, group);
    check_class_name(&document.name, &class_name)?;

    let file_name = class_name_to_file_name(&class_name);
    check_file_name(&document.name, &file_name)?;

    let fields = build_field_specs(document);
    debug!(
        schema = %document.name,
        class = %class_name,
        file = %file_name,
        fields = fields.len(),
        "Built entity descriptor"
    );

    Ok(EntityDescriptor {
        class_name,
        file_name,
        schema_name: document.name.clone(),
        schema_id: document.id.clone(),
        table_name: table_name(&document.name),
        fields,
    })
}

fn check_class_name(schema: &str, class_name: &str) -> Result<(), GeneratorError> {
    let invalid = |reason: &str| GeneratorError::InvalidEntityName {
        schema: schema.to_string(),
        name: class_name.to_string(),
        reason: reason.to_string(),
    };

    match class_name.chars().next() {
        None => Err(invalid("name is empty")),
        Some(first) if !first.is_uppercase() => Err(invalid("must start with an uppercase letter")),
        Some(_) if parse_ident(class_name).is_none() => Err(invalid("not a valid Rust type name")),
        Some(_) if BASE_EXPORTS.contains(&class_name) => {
            Err(invalid("clashes with a shared base export"))
        }
        Some(_) => Ok(()),
    }
}

fn check_file_name(schema: &str, file_name: &str) -> Result<(), GeneratorError> {
    let invalid = |reason: &str| GeneratorError::InvalidEntityName {
        schema: schema.to_string(),
        name: file_name.to_string(),
        reason: reason.to_string(),
    };

    if RESERVED_MODULES.contains(&file_name) {
        return Err(invalid("clashes with a group module file"));
    }
    if module_ident(file_name).is_none() {
        return Err(invalid("not a valid Rust module name"));
    }
    Ok(())
}
