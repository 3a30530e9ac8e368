//! Derive macro wiring advent puzzles into the catalog

use proc_macro::TokenStream;
use proc_macro2::Literal;
use quote::quote;
use syn::{DeriveInput, LitInt, LitStr, parse_macro_input};

/// Derives `advent_core::Puzzle` and registers the type with the catalog.
///
/// The derive does two things:
///
/// 1. Implements `Puzzle` with `PARTS` taken from the attribute and a
///    `solve_part` that matches part numbers onto the type's `Part<N>`
///    impls. A declared part without a matching `Part<N>` impl is a compile
///    error; part numbers beyond the declared count fall through to
///    `SolveError::NotImplemented`.
/// 2. Submits a `PuzzleEntry` through `inventory`, so the type shows up in
///    `CatalogBuilder::with_registered()`.
///
/// # Attribute
///
/// `#[puzzle(year = ..., day = ..., parts = ..., tags = [...])]`
///
/// - `year`: required, the Advent of Code year
/// - `day`: required, 1-25
/// - `parts`: required, how many `Part<N>` impls the type provides
/// - `tags`: optional, string literals for catalog filtering
///
/// # Example
///
/// ```ignore
/// use advent_core::{Day, ParseError, Part, Puzzle, SolveError};
///
/// #[derive(Puzzle)]
/// #[puzzle(year = 2022, day = 1, parts = 2, tags = ["calories"])]
/// pub struct Calories;
///
/// impl Day for Calories { /* ... */ }
/// impl Part<1> for Calories { /* ... */ }
/// impl Part<2> for Calories { /* ... */ }
/// ```
#[proc_macro_derive(Puzzle, attributes(puzzle))]
pub fn derive_puzzle(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    expand(&input)
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}

struct PuzzleAttr {
    year: u16,
    day: u8,
    parts: u8,
    tags: Vec<String>,
}

fn expand(input: &DeriveInput) -> syn::Result<proc_macro2::TokenStream> {
    let name = &input.ident;
    let attr = parse_puzzle_attr(input)?;

    let year = Literal::u16_unsuffixed(attr.year);
    let day = Literal::u8_unsuffixed(attr.day);
    let parts = Literal::u8_unsuffixed(attr.parts);
    let part_numbers: Vec<Literal> = (1..=attr.parts).map(Literal::u8_suffixed).collect();
    let tags = attr.tags.iter().map(|tag| LitStr::new(tag, name.span()));

    Ok(quote! {
        impl ::advent_core::Puzzle for #name {
            const PARTS: u8 = #parts;

            fn solve_part(
                data: &mut <Self as ::advent_core::Day>::Data<'_>,
                part: u8,
            ) -> ::core::result::Result<::std::string::String, ::advent_core::SolveError> {
                match part {
                    #(#part_numbers => <Self as ::advent_core::Part<#part_numbers>>::solve(data),)*
                    other => ::core::result::Result::Err(
                        ::advent_core::SolveError::NotImplemented(other),
                    ),
                }
            }
        }

        ::advent_core::inventory::submit! {
            ::advent_core::PuzzleEntry {
                year: #year,
                day: #day,
                puzzle: &#name,
                tags: &[#(#tags),*],
            }
        }
    })
}

fn parse_puzzle_attr(input: &DeriveInput) -> syn::Result<PuzzleAttr> {
    let attr = input
        .attrs
        .iter()
        .find(|attr| attr.path().is_ident("puzzle"))
        .ok_or_else(|| {
            syn::Error::new_spanned(
                &input.ident,
                "#[derive(Puzzle)] requires a #[puzzle(year = ..., day = ..., parts = ...)] attribute",
            )
        })?;

    let mut year: Option<u16> = None;
    let mut day: Option<u8> = None;
    let mut parts: Option<u8> = None;
    let mut tags: Vec<String> = Vec::new();

    attr.parse_nested_meta(|meta| {
        if meta.path.is_ident("year") {
            let lit: LitInt = meta.value()?.parse()?;
            year = Some(lit.base10_parse()?);
        } else if meta.path.is_ident("day") {
            let lit: LitInt = meta.value()?.parse()?;
            let value: u8 = lit.base10_parse()?;
            if !(1..=25).contains(&value) {
                return Err(meta.error("day must be in 1..=25"));
            }
            day = Some(value);
        } else if meta.path.is_ident("parts") {
            let lit: LitInt = meta.value()?.parse()?;
            parts = Some(lit.base10_parse()?);
        } else if meta.path.is_ident("tags") {
            // tags = ["a", "b"]
            let _ = meta.value()?;
            let content;
            syn::bracketed!(content in meta.input);
            while !content.is_empty() {
                let lit: LitStr = content.parse()?;
                tags.push(lit.value());
                if content.peek(syn::Token![,]) {
                    let _: syn::Token![,] = content.parse()?;
                }
            }
        } else {
            return Err(meta.error("expected `year`, `day`, `parts`, or `tags`"));
        }
        Ok(())
    })?;

    let missing = |what| syn::Error::new_spanned(attr, format!("missing `{what}` in #[puzzle(...)]"));
    Ok(PuzzleAttr {
        year: year.ok_or_else(|| missing("year"))?,
        day: day.ok_or_else(|| missing("day"))?,
        parts: parts.ok_or_else(|| missing("parts"))?,
        tags,
    })
}
