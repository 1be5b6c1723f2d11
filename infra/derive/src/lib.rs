#![allow(unreachable_pub)]
#![allow(clippy::needless_pass_by_value)]

//! # Macros
//!
//! Procedural macros shared across the workspace crates.
//!
//! The only macro currently exported is [`macro@ghub_error`], which turns a plain enum into
//! the error shape every library crate uses: `thiserror` display strings, an optional
//! human-readable context on each variant, and a `.context(..)` extension on `Result`.

mod macros;

use proc_macro::TokenStream;
use syn::{DeriveInput, parse_macro_input};

/// Attribute macro for defining crate-level error enums.
///
/// # Injected Behaviors
///
/// * **Derives**: adds `#[derive(Debug, thiserror::Error)]` unless already present.
/// * **Context**: generates a companion `<Name>Ext` trait whose `.context(..)` attaches a
///   message to `Result<T, Name>` and to `Result<T, Source>` for every wrapped source type.
/// * **Conversions**: `From<Source>` for variants holding a `source` field (or a field marked
///   `#[source]`/`#[from]`), so `?` works on upstream errors.
/// * **Internal fallback**: `From<&'static str>` and `From<String>` when an `Internal`
///   variant exists.
/// * **Formatting helper**: a module-private `format_context` used in `#[error(..)]` strings.
///
/// # Requirements
///
/// 1. Applied to an **enum** with named-field variants only.
/// 2. A variant wrapping a source must also declare `context: Option<Cow<'static, str>>`.
/// 3. One annotated enum per module (the helper function is emitted at module level).
///
/// # Example
///
/// ```rust,ignore
/// use ghub_derive::ghub_error;
/// use std::borrow::Cow;
///
/// #[ghub_error]
/// pub enum StoreError {
///     #[error("I/O failure{}: {source}", format_context(.context))]
///     Io { source: std::io::Error, context: Option<Cow<'static, str>> },
///
///     #[error("Internal store error{}: {message}", format_context(.context))]
///     Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
/// }
///
/// fn read(path: &std::path::Path) -> Result<String, StoreError> {
///     std::fs::read_to_string(path).context("Reading module configuration")
/// }
/// ```
#[proc_macro_attribute]
pub fn ghub_error(_args: TokenStream, item: TokenStream) -> TokenStream {
    let input = parse_macro_input!(item as DeriveInput);
    macros::error::expand(input).into()
}
