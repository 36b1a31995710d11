//! Proc macros for css-taffy: the `style!` declaration literal.
//!
//! This crate is not meant to be used directly. Enable the `macros` feature on `css-taffy`.

use proc_macro::TokenStream;

mod style_macro;

/// Compile-time checked style declarations.
///
/// Checks every property name against the recognized vocabulary and the
/// literal kind (number or string) each property accepts, then expands to a
/// `css_taffy::translate` call returning
/// `Result<StyleRecord, TranslateError>`. Value syntax inside strings is
/// still parsed at run time.
///
/// # Syntax
///
/// ```ignore
/// let record = style! {
///     display: "grid",
///     width: "50%",
///     margin: "10px 20px",
///     gridTemplateColumns: "repeat(2, minmax(auto, 1fr))",
///     flexGrow: 1,
/// }?;
/// ```
#[proc_macro]
pub fn style(input: TokenStream) -> TokenStream {
    style_macro::style_impl(input.into())
        .unwrap_or_else(|err| err.to_compile_error())
        .into()
}
