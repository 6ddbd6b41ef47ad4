//! Rust type rendering for semantic types.

use proc_macro2::TokenStream;
use quote::quote;

use crate::fields::FieldSpec;
use crate::mapping::SemanticType;

/// Returns the Rust type used for a semantic type.
///
/// ## Examples
///
/// ```
/// use modelgen_gen::codegen::rust_type;
/// use modelgen_gen::mapping::SemanticType;
///
/// assert_eq!(rust_type(SemanticType::Date).to_string(), "chrono :: NaiveDate");
/// assert_eq!(rust_type(SemanticType::Integer).to_string(), "i64");
/// ```
pub fn rust_type(semantic: SemanticType) -> TokenStream {
    match semantic {
        SemanticType::Date => quote! { chrono::NaiveDate },
        SemanticType::Timestamp => quote! { chrono::NaiveDateTime },
        SemanticType::Bytes => quote! { Vec<u8> },
        SemanticType::Text => quote! { String },
        SemanticType::Float => quote! { f64 },
        SemanticType::Decimal => quote! { rust_decimal::Decimal },
        SemanticType::Integer => quote! { i64 },
        SemanticType::Boolean => quote! { bool },
        SemanticType::Sequence => quote! { Vec<serde_json::Value> },
        SemanticType::Mapping => quote! { serde_json::Map<String, serde_json::Value> },
        SemanticType::Any => quote! { serde_json::Value },
    }
}

/// Returns the declared type of a field, wrapped in `Option` when nullable.
pub fn field_type(field: &FieldSpec) -> TokenStream {
    let inner = rust_type(field.semantic);
    if field.nullable {
        quote! { Option<#inner> }
    } else {
        inner
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn field(semantic: SemanticType, nullable: bool) -> FieldSpec {
        FieldSpec {
            identifier: "value".to_string(),
            alias: None,
            semantic,
            nullable,
            constraints: vec![],
        }
    }

    fn render(tokens: TokenStream) -> String {
        let ty: syn::Type = syn::parse2(tokens).unwrap();
        quote!(#ty).to_string().replace(' ', "")
    }

    #[test]
    fn every_semantic_type_is_a_valid_type() {
        let expected = [
            (SemanticType::Date, "chrono::NaiveDate"),
            (SemanticType::Timestamp, "chrono::NaiveDateTime"),
            (SemanticType::Bytes, "Vec<u8>"),
            (SemanticType::Text, "String"),
            (SemanticType::Float, "f64"),
            (SemanticType::Decimal, "rust_decimal::Decimal"),
            (SemanticType::Integer, "i64"),
            (SemanticType::Boolean, "bool"),
            (SemanticType::Sequence, "Vec<serde_json::Value>"),
            (SemanticType::Mapping, "serde_json::Map<String,serde_json::Value>"),
            (SemanticType::Any, "serde_json::Value"),
        ];
        for (semantic, ty) in expected {
            assert_eq!(render(rust_type(semantic)), ty, "{semantic:?}");
        }
    }

    #[test]
    fn nullable_fields_are_optional() {
        assert_eq!(render(field_type(&field(SemanticType::Text, true))), "Option<String>");
        assert_eq!(render(field_type(&field(SemanticType::Text, false))), "String");
    }
}
