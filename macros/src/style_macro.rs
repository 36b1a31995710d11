//! `style!` macro: check style declarations at compile time and generate a
//! `css_taffy::translate` call.

use proc_macro2::{Span, TokenStream};
use quote::quote;
use syn::parse::{Parse, ParseStream};
use syn::{Error, Ident, LitFloat, LitInt, LitStr, Result, Token};

// ---------------------------------------------------------------------------
// AST types
// ---------------------------------------------------------------------------

/// A declaration value: the literal the author wrote.
#[derive(Debug, Clone)]
pub(crate) enum StyleLiteral {
    /// A string literal like `"50%"`.
    Str(String, Span),
    /// A numeric literal, sign included.
    Number(f64, Span),
}

impl StyleLiteral {
    fn span(&self) -> Span {
        match self {
            StyleLiteral::Str(_, s) | StyleLiteral::Number(_, s) => *s,
        }
    }
}

/// A single declaration: `propertyName: value`.
#[derive(Debug, Clone)]
pub(crate) struct StyleDeclaration {
    /// The camelCase property name.
    pub name: String,
    /// The span of the property name, for error reporting.
    pub name_span: Span,
    pub value: StyleLiteral,
}

/// The top-level input to the style! macro.
#[derive(Debug)]
struct StyleInput {
    declarations: Vec<StyleDeclaration>,
}

// ---------------------------------------------------------------------------
// Parsing
// ---------------------------------------------------------------------------

impl Parse for StyleInput {
    fn parse(input: ParseStream) -> Result<Self> {
        let mut declarations = Vec::new();
        while !input.is_empty() {
            declarations.push(parse_declaration(input)?);
            if input.is_empty() {
                break;
            }
            input.parse::<Token![,]>()?;
        }
        Ok(StyleInput { declarations })
    }
}

/// Parse `name: value`.
pub(crate) fn parse_declaration(input: ParseStream) -> Result<StyleDeclaration> {
    let name: Ident = input.parse()?;
    input.parse::<Token![:]>()?;
    let value = parse_literal(input)?;
    Ok(StyleDeclaration {
        name: name.to_string(),
        name_span: name.span(),
        value,
    })
}

/// Parse a string or (optionally negative) number literal.
pub(crate) fn parse_literal(input: ParseStream) -> Result<StyleLiteral> {
    if input.peek(LitStr) {
        let lit: LitStr = input.parse()?;
        return Ok(StyleLiteral::Str(lit.value(), lit.span()));
    }

    let negative = input.peek(Token![-]);
    if negative {
        input.parse::<Token![-]>()?;
    }
    let sign = if negative { -1.0 } else { 1.0 };

    if input.peek(LitFloat) {
        let lit: LitFloat = input.parse()?;
        return Ok(StyleLiteral::Number(sign * lit.base10_parse::<f64>()?, lit.span()));
    }
    if input.peek(LitInt) {
        let lit: LitInt = input.parse()?;
        if !lit.suffix().is_empty() {
            return Err(Error::new(
                lit.span(),
                format!("units go inside a string: write \"{}{}\"", lit.base10_digits(), lit.suffix()),
            ));
        }
        return Ok(StyleLiteral::Number(sign * lit.base10_parse::<f64>()?, lit.span()));
    }

    Err(input.error("expected a string or number literal"))
}

// ---------------------------------------------------------------------------
// Validation
// ---------------------------------------------------------------------------

/// Which literal kinds a property accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Accepts {
    Number,
    String,
    Either,
}

/// All known property names and the literal kinds they take.
const KNOWN_PROPERTIES: &[(&str, Accepts)] = &[
    ("display", Accepts::String),
    ("boxSizing", Accepts::String),
    ("overflow", Accepts::String),
    ("overflowX", Accepts::String),
    ("overflowY", Accepts::String),
    ("scrollbarWidth", Accepts::Number),
    ("position", Accepts::String),
    ("inset", Accepts::Either),
    ("top", Accepts::Either),
    ("right", Accepts::Either),
    ("bottom", Accepts::Either),
    ("left", Accepts::Either),
    ("width", Accepts::Either),
    ("height", Accepts::Either),
    ("minWidth", Accepts::Either),
    ("minHeight", Accepts::Either),
    ("maxWidth", Accepts::Either),
    ("maxHeight", Accepts::Either),
    ("aspectRatio", Accepts::Either),
    ("margin", Accepts::Either),
    ("padding", Accepts::Either),
    ("border", Accepts::Either),
    ("alignItems", Accepts::String),
    ("alignSelf", Accepts::String),
    ("justifyItems", Accepts::String),
    ("justifySelf", Accepts::String),
    ("alignContent", Accepts::String),
    ("justifyContent", Accepts::String),
    ("gap", Accepts::Either),
    ("columnGap", Accepts::Either),
    ("rowGap", Accepts::Either),
    ("textAlign", Accepts::String),
    ("flexDirection", Accepts::String),
    ("flexWrap", Accepts::String),
    ("flexBasis", Accepts::Either),
    ("flexGrow", Accepts::Number),
    ("flexShrink", Accepts::Number),
    ("gridTemplateRows", Accepts::String),
    ("gridTemplateColumns", Accepts::String),
    ("gridAutoRows", Accepts::String),
    ("gridAutoColumns", Accepts::String),
    ("gridAutoFlow", Accepts::String),
    ("gridRow", Accepts::Either),
    ("gridColumn", Accepts::Either),
];

fn validate(decl: &StyleDeclaration) -> Result<()> {
    let accepts = KNOWN_PROPERTIES
        .iter()
        .find(|(name, _)| *name == decl.name)
        .map(|(_, accepts)| *accepts)
        .ok_or_else(|| Error::new(decl.name_span, format!("unknown style property `{}`", decl.name)))?;

    match (accepts, &decl.value) {
        (Accepts::Number, StyleLiteral::Str(..)) => Err(Error::new(
            decl.value.span(),
            format!("`{}` expects a number", decl.name),
        )),
        (Accepts::String, StyleLiteral::Number(..)) => Err(Error::new(
            decl.value.span(),
            format!("`{}` expects a string", decl.name),
        )),
        _ => Ok(()),
    }
}

// ---------------------------------------------------------------------------
// Code generation
// ---------------------------------------------------------------------------

fn generate_value(value: &StyleLiteral) -> TokenStream {
    match value {
        StyleLiteral::Str(s, _) => quote! {
            ::css_taffy::StyleValue::String(::std::string::String::from(#s))
        },
        StyleLiteral::Number(n, _) if *n < 0.0 => {
            let magnitude = -n;
            quote! { ::css_taffy::StyleValue::Number(-(#magnitude as f32)) }
        }
        StyleLiteral::Number(n, _) => quote! {
            ::css_taffy::StyleValue::Number(#n as f32)
        },
    }
}

/// Entry point for the style! macro.
pub fn style_impl(input: TokenStream) -> Result<TokenStream> {
    let parsed: StyleInput = syn::parse2(input)?;

    let mut seen: Vec<&str> = Vec::new();
    let mut entries = Vec::new();
    for decl in &parsed.declarations {
        validate(decl)?;
        if seen.contains(&decl.name.as_str()) {
            return Err(Error::new(
                decl.name_span,
                format!("duplicate style property `{}`", decl.name),
            ));
        }
        seen.push(&decl.name);

        let name = &decl.name;
        let value = generate_value(&decl.value);
        entries.push(quote! { (#name, #value) });
    }

    let len = entries.len();
    Ok(quote! {
        {
            let __declarations: [(&'static str, ::css_taffy::StyleValue); #len] = [#(#entries),*];
            ::css_taffy::translate(__declarations)
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use quote::quote;

    // Helper: parse a style input.
    fn parse_style(tokens: TokenStream) -> Result<StyleInput> {
        syn::parse2(tokens)
    }

    // -----------------------------------------------------------------------
    // Parsing tests
    // -----------------------------------------------------------------------

    #[test]
    fn parse_string_and_number() {
        let input = parse_style(quote! { width: "50%", flexGrow: 1 }).unwrap();
        assert_eq!(input.declarations.len(), 2);
        assert_eq!(input.declarations[0].name, "width");
        match &input.declarations[0].value {
            StyleLiteral::Str(s, _) => assert_eq!(s, "50%"),
            other => panic!("expected Str, got {other:?}"),
        }
        match &input.declarations[1].value {
            StyleLiteral::Number(n, _) => assert_eq!(*n, 1.0),
            other => panic!("expected Number, got {other:?}"),
        }
    }

    #[test]
    fn parse_negative_and_float() {
        let input = parse_style(quote! { top: -4, aspectRatio: 1.5, }).unwrap();
        match &input.declarations[0].value {
            StyleLiteral::Number(n, _) => assert_eq!(*n, -4.0),
            other => panic!("expected Number, got {other:?}"),
        }
        match &input.declarations[1].value {
            StyleLiteral::Number(n, _) => assert_eq!(*n, 1.5),
            other => panic!("expected Number, got {other:?}"),
        }
    }

    #[test]
    fn parse_empty() {
        assert!(parse_style(quote! {}).unwrap().declarations.is_empty());
    }

    #[test]
    fn parse_rejects_suffixed_int() {
        assert!(parse_style(quote! { width: 10px }).is_err());
    }

    #[test]
    fn parse_rejects_missing_comma() {
        assert!(parse_style(quote! { width: "1px" height: "2px" }).is_err());
    }

    // -----------------------------------------------------------------------
    // Generation tests
    // -----------------------------------------------------------------------

    #[test]
    fn generates_translate_call() {
        let out = style_impl(quote! { display: "flex", flexGrow: 2 }).unwrap().to_string();
        assert!(out.contains(":: css_taffy :: translate"));
        assert!(out.contains("\"display\""));
        assert!(out.contains("\"flex\""));
        assert!(out.contains("StyleValue :: Number"));
    }

    #[test]
    fn unknown_property_is_error() {
        let err = style_impl(quote! { color: "red" }).unwrap_err();
        assert!(err.to_string().contains("unknown style property `color`"));
    }

    #[test]
    fn kebab_case_is_unknown() {
        assert!(style_impl(quote! { flex_grow: 1 }).is_err());
    }

    #[test]
    fn wrong_literal_kind_is_error() {
        let err = style_impl(quote! { flexGrow: "1" }).unwrap_err();
        assert!(err.to_string().contains("expects a number"));
        let err = style_impl(quote! { display: 1 }).unwrap_err();
        assert!(err.to_string().contains("expects a string"));
    }

    #[test]
    fn duplicate_is_error() {
        let err = style_impl(quote! { width: 1, width: 2 }).unwrap_err();
        assert!(err.to_string().contains("duplicate"));
    }
}
