//! QName utilities
//!
//! Type references in the source schema are written as prefixed QNames
//! (`tns:CustomObject`, `xsd:string`). The index keys definitions by local
//! name, so references are prefix-stripped before lookup, and references to
//! XSD built-in primitives are filtered out entirely.

/// Split a QName into prefix and local name
pub fn split_qname(qname: &str) -> (Option<&str>, &str) {
    if let Some((prefix, local)) = qname.split_once(':') {
        (Some(prefix), local)
    } else {
        (None, qname)
    }
}

/// Get the local part of a possibly-prefixed name
pub fn local_name(qname: &str) -> &str {
    split_qname(qname).1
}

/// Check whether a local name is an XSD built-in type.
///
/// Built-ins have no definition in the source schema and must never be
/// treated as unresolved references.
pub fn is_builtin(local_name: &str) -> bool {
    matches!(
        local_name,
        "string"
            | "normalizedString"
            | "token"
            | "language"
            | "Name"
            | "NCName"
            | "ID"
            | "IDREF"
            | "IDREFS"
            | "ENTITY"
            | "ENTITIES"
            | "NMTOKEN"
            | "NMTOKENS"
            | "boolean"
            | "decimal"
            | "integer"
            | "long"
            | "int"
            | "short"
            | "byte"
            | "nonNegativeInteger"
            | "positiveInteger"
            | "unsignedLong"
            | "unsignedInt"
            | "unsignedShort"
            | "unsignedByte"
            | "nonPositiveInteger"
            | "negativeInteger"
            | "float"
            | "double"
            | "duration"
            | "dateTime"
            | "time"
            | "date"
            | "gYearMonth"
            | "gYear"
            | "gMonthDay"
            | "gDay"
            | "gMonth"
            | "hexBinary"
            | "base64Binary"
            | "anyURI"
            | "QName"
            | "NOTATION"
            | "anyType"
            | "anySimpleType"
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_qname() {
        assert_eq!(split_qname("CustomObject"), (None, "CustomObject"));
        assert_eq!(split_qname("tns:CustomObject"), (Some("tns"), "CustomObject"));
        assert_eq!(split_qname("xsd:string"), (Some("xsd"), "string"));
    }

    #[test]
    fn test_local_name() {
        assert_eq!(local_name("tns:DeployOptions"), "DeployOptions");
        assert_eq!(local_name("DeployOptions"), "DeployOptions");
    }

    #[test]
    fn test_is_builtin() {
        assert!(is_builtin("string"));
        assert!(is_builtin("int"));
        assert!(is_builtin("boolean"));
        assert!(is_builtin("dateTime"));
        assert!(is_builtin("base64Binary"));

        assert!(!is_builtin("CustomObject"));
        assert!(!is_builtin("String")); // case-sensitive
        assert!(!is_builtin(""));
    }
}
