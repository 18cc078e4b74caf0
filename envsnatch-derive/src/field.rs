use syn::{
    Attribute, Field, Ident, LitStr, Meta, PathArguments, Type, parse::ParseStream,
    spanned::Spanned,
};

pub struct FieldRepr {
    pub ident: Ident,
    pub ty: Type,
    pub env_attr: EnvAttribute,
}

pub enum EnvAttribute {
    /// #[env("KEY")] OR #[env("KEY,optional")]
    Tag(LitStr),
    /// #[env(skip)]
    Skip,
    /// No env attr, bound with an empty tag.
    None,
}

impl FieldRepr {
    pub fn parse(field: &Field) -> syn::Result<FieldRepr> {
        let ident = field.ident.clone().ok_or_else(|| {
            syn::Error::new_spanned(field, "Bind derive only supports structs with named fields")
        })?;

        let mut env_attr = EnvAttribute::None;

        for attr in field.attrs.iter().filter(|attr| attr.path().is_ident("env")) {
            if !matches!(env_attr, EnvAttribute::None) {
                return Err(syn::Error::new(
                    attr.path().span(),
                    "only one `env` attribute is allowed per field",
                ));
            }

            env_attr = parse_env_attr(attr)?;
        }

        if !matches!(env_attr, EnvAttribute::Skip) && !maybe_primitive(&field.ty) {
            return Err(syn::Error::new(
                ident.span(),
                "unsupported field type, expected `String`, an integer, a float or `bool`",
            ));
        }

        Ok(FieldRepr {
            ident,
            ty: field.ty.clone(),
            env_attr,
        })
    }
}

fn parse_env_attr(attr: &Attribute) -> syn::Result<EnvAttribute> {
    if let Meta::List(list) = &attr.meta {
        if list.tokens.is_empty() {
            return Err(syn::Error::new(
                attr.path().span(),
                "expected a tag such as `\"KEY\"` or `\"KEY,optional\"`, or `skip`",
            ));
        }
    }

    attr.parse_args_with(|input: ParseStream| {
        if input.peek(LitStr) {
            return Ok(EnvAttribute::Tag(input.parse()?));
        }

        let word: Ident = input.parse()?;
        if word == "skip" {
            Ok(EnvAttribute::Skip)
        } else {
            Err(syn::Error::new(
                word.span(),
                format!("unsupported env attribute: {word}"),
            ))
        }
    })
}

/// Every `Primitive` is a plain path type, so anything with generic arguments,
/// a reference, a tuple or an array can be rejected here with a readable error.
/// Other paths, aliases included, are left to the trait bound.
fn maybe_primitive(ty: &Type) -> bool {
    match ty {
        Type::Path(type_path) if type_path.qself.is_none() => type_path
            .path
            .segments
            .iter()
            .all(|segment| matches!(segment.arguments, PathArguments::None)),
        Type::Group(group) => maybe_primitive(&group.elem),
        Type::Paren(paren) => maybe_primitive(&paren.elem),
        _ => false,
    }
}
