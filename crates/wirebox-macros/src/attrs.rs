use syn::ext::IdentExt;
use syn::{Attribute, Lit, LitStr, Path, Result, Token};

/// Container-level `#[reflect(...)]` arguments
#[derive(Default)]
pub struct ContainerArgs {
    pub krate: Option<Path>,
    pub error: bool,
}

impl ContainerArgs {
    pub fn from_attrs(attrs: &[Attribute]) -> Result<Self> {
        let mut args = ContainerArgs::default();

        for attr in attrs {
            if !attr.path().is_ident("reflect") {
                continue;
            }
            attr.parse_nested_meta(|meta| {
                if meta.path.is_ident("crate") {
                    let value: LitStr = meta.value()?.parse()?;
                    args.krate = Some(value.parse()?);
                    Ok(())
                } else if meta.path.is_ident("error") {
                    args.error = true;
                    Ok(())
                } else {
                    Err(meta.error("unknown reflect attribute, expected `crate` or `error`"))
                }
            })?;
        }

        Ok(args)
    }
}

/// Field-level `#[wire(...)]` arguments
#[derive(Default)]
pub struct FieldArgs {
    pub skip: bool,
    pub tags: Vec<(String, String)>,
    pub present: bool,
}

impl FieldArgs {
    pub fn from_attrs(attrs: &[Attribute]) -> Result<Self> {
        let mut args = FieldArgs::default();

        for attr in attrs {
            if !attr.path().is_ident("wire") {
                continue;
            }
            args.present = true;
            attr.parse_nested_meta(|meta| {
                let name = match meta.path.get_ident() {
                    Some(ident) => ident.unraw().to_string(),
                    None => return Err(meta.error("expected a tag name")),
                };

                if name == "skip" {
                    if meta.input.peek(Token![=]) {
                        return Err(meta.error("`skip` takes no value"));
                    }
                    args.skip = true;
                    return Ok(());
                }

                let value = if meta.input.peek(Token![=]) {
                    match meta.value()?.parse::<Lit>()? {
                        Lit::Str(s) => s.value(),
                        Lit::Bool(b) => b.value.to_string(),
                        other => {
                            return Err(syn::Error::new(
                                other.span(),
                                "expected string literal or bool literal",
                            ));
                        }
                    }
                } else if name == "optional" {
                    "true".to_string()
                } else {
                    return Err(meta.error(format!("tag `{name}` requires a value")));
                };

                if args.tags.iter().any(|(existing, _)| *existing == name) {
                    return Err(meta.error(format!("duplicate tag `{name}`")));
                }
                args.tags.push((name, value));
                Ok(())
            })?;
        }

        Ok(args)
    }
}
