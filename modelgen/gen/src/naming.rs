//! Identifier normalization.
//!
//! Pure string transforms used to name generated code:
//!
//! - schema name → class-style entity name ([`schema_name_to_entity_name`])
//! - class-style name → snake-case module/file name ([`class_name_to_file_name`])
//! - property name → field identifier safe from Rust keywords ([`field_name_to_identifier`])
//! - schema name → storage table name ([`table_name`])
//!
//! ## Examples
//!
//! ```
//! use modelgen_define::ModelGroup;
//! use modelgen_gen::naming::*;
//!
//! let group = ModelGroup::common();
//! let class = schema_name_to_entity_name("OpenWorksCommonModel.Seismic2DListDetail", &group);
//! assert_eq!(class, "Seismic2DListDetail");
//! assert_eq!(class_name_to_file_name(&class), "seismic_2d_list_detail");
//! assert_eq!(field_name_to_identifier("type"), "type_field");
//! assert_eq!(table_name("OpenWorksCommonModel.Basin"), "OpenWorksCommonModel_Basin");
//! ```

use lazy_static::lazy_static;
use modelgen_define::ModelGroup;
use regex::Regex;
use syn::Ident;

/// Suffix appended to property names that collide with reserved words.
pub const RESERVED_SUFFIX: &str = "_field";

/// Rust strict and reserved keywords, the weak keywords `macro_rules` and
/// `union`, plus `_`.
///
/// `raw` and `safe` are left out: they are only keywords in front of `&` and
/// inside `extern` blocks, and stay plain identifiers in field position.
///
/// Sorted so membership is a binary search.
pub const RESERVED_WORDS: &[&str] = &[
    "Self", "_", "abstract", "as", "async", "await", "become", "box", "break", "const", "continue",
    "crate", "do", "dyn", "else", "enum", "extern", "false", "final", "fn", "for", "gen", "if",
    "impl", "in", "let", "loop", "macro", "macro_rules", "match", "mod", "move", "mut", "override",
    "priv", "pub", "ref", "return", "self", "static", "struct", "super", "trait", "true", "try",
    "type", "typeof", "union", "unsafe", "unsized", "use", "virtual", "where", "while", "yield",
];

lazy_static! {
    /// Any character followed by a capitalized word: `HeaderList` -> `Header_List`.
    static ref WORD_BOUNDARY: Regex = Regex::new(r"(.)([A-Z][a-z]+)").unwrap();
    /// Lowercase letter or digit followed by an uppercase letter: `r2D` -> `r2_D`.
    static ref CASE_BOUNDARY: Regex = Regex::new(r"([a-z0-9])([A-Z])").unwrap();
    /// Split dimension marker such as `2_d_` or `3d_`.
    static ref DIMENSION: Regex = Regex::new(r"(\d)_?d_").unwrap();
}

/// True when `word` is in [`RESERVED_WORDS`].
pub fn is_reserved(word: &str) -> bool {
    RESERVED_WORDS.binary_search(&word).is_ok()
}

/// Converts a schema name into a class-style entity name.
///
/// ## Rules
///
/// 1. Dotted names keep only their last segment (`SYS.GEOGRAPHY_COLUMNS` -> `GEOGRAPHY_COLUMNS`).
/// 2. Undotted names lose the group's prefixes (`OpenWorksCommonModel_Basin` -> `Basin`).
/// 3. Names containing underscores are split on them and each segment is
///    capitalized (first letter upper, rest lower), then joined.
/// 4. A leading lowercase letter is upper-cased.
///
/// Applying the function to its own output returns the output unchanged,
/// provided every group prefix ends with `_` (true for the presets).
pub fn schema_name_to_entity_name(schema_name: &str, group: &ModelGroup) -> String {
    let base = match schema_name.rsplit_once('.') {
        Some((_, last)) => last,
        None => group.strip_prefixes(schema_name),
    };

    let name = if base.contains('_') {
        base.split('_').map(capitalize).collect()
    } else {
        base.to_string()
    };

    let mut chars = name.chars();
    match chars.next() {
        Some(first) if first.is_lowercase() => first.to_uppercase().chain(chars).collect(),
        _ => name,
    }
}

/// Upper-cases the first character and lower-cases the rest.
fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}

/// Converts a class-style name into a snake-case module/file name.
///
/// Dimension markers keep their digit attached: `Seismic2DListDetail` becomes
/// `seismic_2d_list_detail`, not `seismic2_d_list_detail`. The marker is only
/// rewritten when another word follows it, so a trailing `2D` stays split
/// (`HorizonAttributeHeader2D` -> `horizon_attribute_header2_d`), and a leading
/// one gains a separator in front (`3DSurvey` -> `_3d_survey`).
pub fn class_name_to_file_name(class_name: &str) -> String {
    let words = WORD_BOUNDARY.replace_all(class_name, "${1}_${2}");
    let snake = CASE_BOUNDARY.replace_all(&words, "${1}_${2}").to_lowercase();
    DIMENSION.replace_all(&snake, "_${1}d_").into_owned()
}

/// Makes a property name safe to use as a field identifier.
///
/// Reserved words get [`RESERVED_SUFFIX`] appended; anything else is returned
/// unchanged. The result is not checked for identifier syntax; see
/// [`parse_ident`].
pub fn field_name_to_identifier(field_name: &str) -> String {
    if is_reserved(field_name) {
        format!("{field_name}{RESERVED_SUFFIX}")
    } else {
        field_name.to_string()
    }
}

/// Derives the storage table name from a schema name.
pub fn table_name(schema_name: &str) -> String {
    schema_name.replace('.', "_")
}

/// Parses `name` as a plain (non-keyword) Rust identifier.
pub fn parse_ident(name: &str) -> Option<Ident> {
    syn::parse_str::<Ident>(name).ok()
}

/// Parses `name` as a module identifier, using a raw identifier (`r#type`)
/// for reserved words that allow it.
pub fn module_ident(name: &str) -> Option<Ident> {
    if is_reserved(name) {
        syn::parse_str::<Ident>(&format!("r#{name}")).ok()
    } else {
        parse_ident(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn common() -> ModelGroup {
        ModelGroup::common()
    }

    // === schema_name_to_entity_name ===

    #[test]
    fn dotted_names_keep_last_segment() {
        assert_eq!(
            schema_name_to_entity_name("OpenWorksCommonModel.RefBoreholeType", &common()),
            "RefBoreholeType"
        );
        assert_eq!(
            schema_name_to_entity_name("OW5000.EmCrossSectionSurfaceAll", &ModelGroup::native()),
            "EmCrossSectionSurfaceAll"
        );
    }

    #[test]
    fn dotted_upper_snake_names_are_capitalized() {
        let native = ModelGroup::native();
        assert_eq!(
            schema_name_to_entity_name("SYS.GEOGRAPHY_COLUMNS", &native),
            "GeographyColumns"
        );
        assert_eq!(schema_name_to_entity_name("SYSADMIN.SESSIONS", &native), "SESSIONS");
    }

    #[test]
    fn lowercase_entity_is_upper_cased() {
        assert_eq!(
            schema_name_to_entity_name("OpenWorksCommonModel.wellplanlocation", &common()),
            "Wellplanlocation"
        );
    }

    #[test]
    fn group_prefix_is_stripped() {
        assert_eq!(
            schema_name_to_entity_name("OpenWorksCommonModel_ref_currency", &common()),
            "RefCurrency"
        );
        assert_eq!(
            schema_name_to_entity_name("NativeModel_well_test", &ModelGroup::native()),
            "WellTest"
        );
    }

    #[test]
    fn other_group_prefix_is_not_stripped() {
        assert_eq!(
            schema_name_to_entity_name("NativeModel_Well", &common()),
            "NativemodelWell"
        );
    }

    #[test]
    fn capitalize_lowers_the_tail() {
        assert_eq!(capitalize("hORIZON"), "Horizon");
        assert_eq!(capitalize("2d"), "2d");
        assert_eq!(capitalize(""), "");
    }

    #[test]
    fn entity_name_is_idempotent_on_observed_names() {
        for name in [
            "Seismic2DListDetail",
            "HorizonAttributeHeader2D",
            "SESSIONS",
            "ISetDynamicQuery",
            "GgxKeyTblLookUp",
        ] {
            assert_eq!(schema_name_to_entity_name(name, &common()), name);
            assert_eq!(schema_name_to_entity_name(name, &ModelGroup::native()), name);
        }
    }

    // === class_name_to_file_name ===

    #[test]
    fn file_names_for_observed_classes() {
        let cases = [
            ("RefBoreholeType", "ref_borehole_type"),
            ("RefCurrency", "ref_currency"),
            ("DataSource", "data_source"),
            ("Wellplanlocation", "wellplanlocation"),
            ("SESSIONS", "sessions"),
            ("REQUESTS", "requests"),
            ("GeographyColumns", "geography_columns"),
            ("EmCrossSectionSurfaceAll", "em_cross_section_surface_all"),
            ("GgxKeyTblLookUp", "ggx_key_tbl_look_up"),
            ("RSeismicGeometry", "r_seismic_geometry"),
            ("ISetDynamicQuery", "i_set_dynamic_query"),
            ("DrillersEstimatorPtAll", "drillers_estimator_pt_all"),
            ("LogSampleBlockInfo", "log_sample_block_info"),
        ];
        for (class, file) in cases {
            assert_eq!(class_name_to_file_name(class), file, "class {class}");
        }
    }

    #[test]
    fn dimension_marker_mid_name() {
        assert_eq!(
            class_name_to_file_name("Seismic2DListDetail"),
            "seismic_2d_list_detail"
        );
        assert_eq!(class_name_to_file_name("Survey3DBin"), "survey_3d_bin");
    }

    #[test]
    fn dimension_marker_at_end_stays_split() {
        assert_eq!(
            class_name_to_file_name("HorizonAttributeHeader2D"),
            "horizon_attribute_header2_d"
        );
    }

    #[test]
    fn dimension_marker_at_start() {
        assert_eq!(class_name_to_file_name("3DSurvey"), "_3d_survey");
        assert_eq!(class_name_to_file_name("2DLine"), "_2d_line");
    }

    #[test]
    fn acronym_runs_split_before_last_capital() {
        assert_eq!(class_name_to_file_name("VDBName"), "vdb_name");
        assert_eq!(class_name_to_file_name("IPAddress"), "ip_address");
    }

    // === field_name_to_identifier ===

    #[test]
    fn reserved_words_get_suffix() {
        assert_eq!(field_name_to_identifier("type"), "type_field");
        assert_eq!(field_name_to_identifier("self"), "self_field");
        assert_eq!(field_name_to_identifier("Self"), "Self_field");
        assert_eq!(field_name_to_identifier("_"), "__field");
    }

    #[test]
    fn ordinary_names_pass_through() {
        assert_eq!(field_name_to_identifier("basin_name"), "basin_name");
        assert_eq!(field_name_to_identifier("Type"), "Type");
        assert_eq!(field_name_to_identifier("VDBName"), "VDBName");
    }

    #[test]
    fn contextual_keywords_stay_plain_identifiers() {
        for word in ["raw", "safe"] {
            assert!(!is_reserved(word), "{word}");
            assert_eq!(field_name_to_identifier(word), word);
            assert!(parse_ident(word).is_some(), "{word} should parse");
        }
    }

    #[test]
    fn reserved_words_are_sorted_and_unique() {
        assert!(RESERVED_WORDS.windows(2).all(|pair| pair[0] < pair[1]));
    }

    #[test]
    fn every_suffixed_reserved_word_is_an_identifier() {
        for word in RESERVED_WORDS {
            let ident = field_name_to_identifier(word);
            assert!(parse_ident(&ident).is_some(), "{ident} should parse");
        }
    }

    // === identifiers ===

    #[test]
    fn parse_ident_rejects_non_identifiers() {
        assert!(parse_ident("basin_name").is_some());
        assert!(parse_ident("type").is_none());
        assert!(parse_ident("two words").is_none());
        assert!(parse_ident("2nd").is_none());
        assert!(parse_ident("dash-ed").is_none());
        assert!(parse_ident("").is_none());
    }

    #[test]
    fn module_ident_falls_back_to_raw() {
        assert_eq!(module_ident("widget").unwrap().to_string(), "widget");
        assert_eq!(module_ident("type").unwrap().to_string(), "r#type");
        assert_eq!(module_ident("gen").unwrap().to_string(), "r#gen");
        assert!(module_ident("self").is_none());
        assert!(module_ident("super").is_none());
    }

    #[test]
    fn table_name_replaces_dots() {
        assert_eq!(table_name("OW5000.CountryBasin"), "OW5000_CountryBasin");
        assert_eq!(table_name("Plain"), "Plain");
        assert_eq!(table_name("a.b.c"), "a_b_c");
    }

    mod property_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn prop_entity_name_is_idempotent(name in "[A-Za-z][A-Za-z0-9_.]{0,40}") {
                let group = ModelGroup::common();
                let once = schema_name_to_entity_name(&name, &group);
                let twice = schema_name_to_entity_name(&once, &group);
                prop_assert_eq!(once, twice);
            }

            #[test]
            fn prop_class_style_input_is_fixed_point(name in "[A-Z][A-Za-z0-9]{0,30}") {
                for group in ModelGroup::presets() {
                    prop_assert_eq!(schema_name_to_entity_name(&name, &group), name.clone());
                }
            }

            #[test]
            fn prop_file_names_are_lowercase_single_separated(
                name in "[A-Za-z][A-Za-z0-9_]{0,40}",
            ) {
                let class = schema_name_to_entity_name(&name, &ModelGroup::common());
                let file = class_name_to_file_name(&class);
                prop_assert!(!file.contains("__"), "{} -> {}", class, file);
                prop_assert!(!file.chars().any(char::is_uppercase), "{} -> {}", class, file);
            }

            #[test]
            fn prop_suffixed_identifiers_never_reserved(name in "[a-z_]{1,12}") {
                let ident = field_name_to_identifier(&name);
                prop_assert!(!is_reserved(&ident));
            }
        }
    }
}
