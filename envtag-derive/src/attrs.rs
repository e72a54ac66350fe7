//! Attribute parsing for `#[env(...)]` annotations.
//!
//! Fields carry the raw tag string, `#[env("KEY,default=value")]`, which is
//! parsed at run time. Structs accept `#[env(prefix = "...")]`.

use syn::{Attribute, Field, LitStr};

/// Parsed `#[env("...")]` attribute from a struct field.
#[derive(Debug, Default)]
pub struct FieldAttrs {
    /// Raw tag string. `None` when the field has no tag or an empty one.
    pub tag: Option<String>,
}

impl FieldAttrs {
    /// Extract the tag from a struct field.
    ///
    /// Attributes other than `env` are left for other macros.
    pub fn from_field(field: &Field) -> syn::Result<Self> {
        let mut attrs = Self::default();

        for attr in env_attrs(&field.attrs) {
            if attrs.tag.is_some() {
                return Err(syn::Error::new_spanned(attr, "duplicate env tag"));
            }
            let tag: LitStr = attr.parse_args().map_err(|e| {
                syn::Error::new(
                    e.span(),
                    "expected a tag string, e.g. #[env(\"KEY,default=value\")]",
                )
            })?;
            attrs.tag = Some(tag.value());
        }

        // An empty tag is the same as no tag
        attrs.tag = attrs.tag.filter(|tag| !tag.is_empty());

        Ok(attrs)
    }
}

/// Parsed `#[env(...)]` attributes from the struct itself.
#[derive(Debug, Default)]
pub struct StructAttrs {
    /// Prefix prepended to every looked-up key.
    pub prefix: String,
}

impl StructAttrs {
    pub fn from_attrs(attrs: &[Attribute]) -> syn::Result<Self> {
        let mut parsed = Self::default();

        for attr in env_attrs(attrs) {
            attr.parse_nested_meta(|meta| {
                // prefix = "..."
                if meta.path.is_ident("prefix") {
                    let value: LitStr = meta.value()?.parse()?;
                    parsed.prefix = value.value();
                    return Ok(());
                }

                Err(meta.error("unsupported struct-level env attribute"))
            })?;
        }

        Ok(parsed)
    }
}

fn env_attrs(attrs: &[Attribute]) -> impl Iterator<Item = &Attribute> {
    attrs.iter().filter(|attr| attr.path().is_ident("env"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use syn::{parse_quote, DeriveInput};

    #[test]
    fn test_parse_tag() {
        let field: Field = parse_quote! {
            #[env("HOME")]
            pub home: String
        };

        let attrs = FieldAttrs::from_field(&field).unwrap();
        assert_eq!(attrs.tag, Some("HOME".to_string()));
    }

    #[test]
    fn test_parse_tag_with_default() {
        let field: Field = parse_quote! {
            #[env("MISSING_KVSTRING,default=key=value")]
            pub value: String
        };

        let attrs = FieldAttrs::from_field(&field).unwrap();
        assert_eq!(attrs.tag, Some("MISSING_KVSTRING,default=key=value".to_string()));
    }

    #[test]
    fn test_untagged_field() {
        let field: Field = parse_quote! {
            #[doc = "not a tag"]
            pub extra: String
        };

        let attrs = FieldAttrs::from_field(&field).unwrap();
        assert_eq!(attrs.tag, None);
    }

    #[test]
    fn test_empty_tag_is_no_tag() {
        let field: Field = parse_quote! {
            #[env("")]
            pub extra: String
        };

        let attrs = FieldAttrs::from_field(&field).unwrap();
        assert_eq!(attrs.tag, None);
    }

    #[test]
    fn test_non_string_tag_is_error() {
        let field: Field = parse_quote! {
            #[env(name = "HOME")]
            pub home: String
        };

        assert!(FieldAttrs::from_field(&field).is_err());
    }

    #[test]
    fn test_duplicate_tag_is_error() {
        let field: Field = parse_quote! {
            #[env("A")]
            #[env("B")]
            pub value: String
        };

        assert!(FieldAttrs::from_field(&field).is_err());
    }

    #[test]
    fn test_parse_prefix() {
        let input: DeriveInput = parse_quote! {
            #[env(prefix = "APP_")]
            struct Config {}
        };

        let attrs = StructAttrs::from_attrs(&input.attrs).unwrap();
        assert_eq!(attrs.prefix, "APP_");
    }

    #[test]
    fn test_unknown_struct_attribute_is_error() {
        let input: DeriveInput = parse_quote! {
            #[env(rename_all = "UPPERCASE")]
            struct Config {}
        };

        assert!(StructAttrs::from_attrs(&input.attrs).is_err());
    }
}
