//! Procedural macros for the `aoc-harness` crate.

use proc_macro::TokenStream;
use quote::quote;
use syn::meta::ParseNestedMeta;
use syn::{Error, Expr, Item, Type, parse_macro_input};

/// The properties collected from a `#[solution_runner(...)]` attribute.
#[derive(Default)]
struct RunnerProperties {
    name: Option<Expr>,
    parsed: Option<Type>,
    part_one: Option<Type>,
    part_two: Option<Type>,
}

/// Parse a `key = value` property into its slot, rejecting duplicates.
fn assign_property<T: syn::parse::Parse>(
    slot: &mut Option<T>,
    meta: &ParseNestedMeta<'_>,
    key: &str,
) -> syn::Result<()> {
    if slot.is_some() {
        return Err(meta.error(format!("duplicate '{key}' property")));
    }
    *slot = Some(meta.value()?.parse()?);
    Ok(())
}

fn missing_property_error(key: &str) -> TokenStream {
    Error::new(
        proc_macro2::Span::call_site(),
        format!("missing required property: '{key}'"),
    )
    .to_compile_error()
    .into()
}

/// Procedural macro attribute that generates a `SolutionRunner`
/// implementation.
///
/// The macro routes to the matching solve entry point in
/// `aoc_harness::runner`, chosen by which solution types are provided.
///
/// # Properties
///
/// - `name` (required): an expression evaluating to `&str`, the solution's
///   display name. A string literal or a constant both work.
///
/// - `part_one` (required): the type implementing `Solution<PartOne>`.
///
/// - `part_two` (optional): the type implementing `Solution<PartTwo>`.
///   When omitted, only part one is solved.
///
/// - `parsed` (optional): a type implementing `ParseData` used to parse
///   input before solving. When omitted, solvers receive the raw input
///   string.
///
/// # Errors
///
/// Emits a compile error if:
/// - applied to anything other than a struct or impl block
/// - a required property (`name`, `part_one`) is missing
/// - any property appears more than once
/// - an unsupported property is given
///
/// # Examples
///
/// With a struct `Day01` implementing `Solution<PartOne>`:
///
/// ```ignore
/// #[solution_runner(name = "Day 1", part_one = Day01)]
/// struct Day01Runner;
/// ```
///
/// With a parse type and both parts, applied to an impl block of a
/// dispatching structure `Solutions<const DAY: u8>`:
///
/// ```ignore
/// #[solution_runner(name = "Day 2", parsed = Day02Data, part_one = Day02, part_two = Day02)]
/// impl Solutions<2> {}
/// ```
#[proc_macro_attribute]
pub fn solution_runner(args: TokenStream, input: TokenStream) -> TokenStream {
    let mut properties = RunnerProperties::default();

    let property_parser = syn::meta::parser(|meta| {
        if meta.path.is_ident("name") {
            assign_property(&mut properties.name, &meta, "name")
        } else if meta.path.is_ident("parsed") {
            assign_property(&mut properties.parsed, &meta, "parsed")
        } else if meta.path.is_ident("part_one") {
            assign_property(&mut properties.part_one, &meta, "part_one")
        } else if meta.path.is_ident("part_two") {
            assign_property(&mut properties.part_two, &meta, "part_two")
        } else {
            Err(meta.error("unsupported solution runner property"))
        }
    });
    parse_macro_input!(args with property_parser);

    let Some(name) = properties.name else {
        return missing_property_error("name");
    };
    let Some(part_one) = properties.part_one else {
        return missing_property_error("part_one");
    };

    let solve_call = match (properties.parsed, properties.part_two) {
        (None, None) => quote! {
            aoc_harness::runner::solve_half_solution::<#part_one>(
                #name, input, handler, timed
            )
        },
        (None, Some(part_two)) => quote! {
            aoc_harness::runner::solve_full_solution::<#part_one, #part_two>(
                #name, input, handler, timed
            )
        },
        (Some(parsed), None) => quote! {
            aoc_harness::runner::solve_parsed_half_solution::<#parsed, #part_one>(
                #name, input, handler, timed
            )
        },
        (Some(parsed), Some(part_two)) => quote! {
            aoc_harness::runner::solve_parsed_full_solution::<#parsed, #part_one, #part_two>(
                #name, input, handler, timed
            )
        },
    };

    let annotated_item = proc_macro2::TokenStream::from(input.clone());

    // the implementing type: a struct's name, or an impl block's self type
    let item = parse_macro_input!(input as Item);
    let self_ty = match item {
        Item::Struct(item_struct) => {
            let ident = item_struct.ident;
            quote! { #ident }
        }
        Item::Impl(item_impl) => {
            let ty = item_impl.self_ty;
            quote! { #ty }
        }
        _ => {
            return Error::new(
                proc_macro2::Span::call_site(),
                "the #[solution_runner] macro can only be applied to a struct or an impl block",
            )
            .to_compile_error()
            .into();
        }
    };

    TokenStream::from(quote! {
        #annotated_item

        impl aoc_harness::runner::SolutionRunner for #self_ty {
            fn run(
                input: &str,
                handler: &mut dyn aoc_harness::runner::OutputHandler,
                timed: bool,
            ) -> aoc_harness::DynamicResult<()> {
                #solve_call
            }
        }
    })
}
