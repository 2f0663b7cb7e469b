//! Derive macro for fieldwire
//!
//! `#[derive(Inject)]` generates the `fieldwire::Inject` registration table
//! for a struct: one entry per field marked `#[inject]`, plus the entries
//! of every embedded component marked `#[inject(flatten)]`.
//!
//! # Example
//!
//! ```rust,ignore
//! use fieldwire::{Container, Inject, Slot};
//! use std::sync::Arc;
//!
//! struct Database {
//!     url: String,
//! }
//!
//! trait Cache: Send + Sync {}
//!
//! #[derive(Default, Inject)]
//! struct Repository {
//!     #[inject]
//!     db: Slot<Database>,
//!     #[inject]
//!     cache: Slot<dyn Cache>,
//! }
//!
//! #[derive(Default, Inject)]
//! struct UserService {
//!     #[inject(flatten)]
//!     repository: Repository,
//!     // Unmarked fields are left alone
//!     request_count: u64,
//! }
//!
//! let container = Container::new();
//! container.bind(Arc::new(Database { url: "postgres://localhost".into() }));
//!
//! let service = UserService::default();
//! container.inject_fields(&service)?;
//! ```

use proc_macro::TokenStream;
use quote::quote;
use syn::{Attribute, Data, DeriveInput, Fields, Type, parse_macro_input};

/// Derive macro for `fieldwire::Inject`.
///
/// # Attributes
///
/// - `#[inject]` - Mark a field for injection. The field type must be `Slot<T>`;
///   it is resolved by `T`.
/// - `#[inject(flatten)]` - Embed the injectable fields of a field whose type
///   itself implements `Inject`.
///
/// Fields without an attribute are ignored.
///
/// # Generated Code
///
/// ```rust,ignore
/// impl ::fieldwire::Inject for Repository {
///     fn injectable_fields() -> Vec<::fieldwire::InjectableField> {
///         let mut fields = Vec::new();
///         fields.push(::fieldwire::InjectableField::new::<Self, Database>(
///             "db",
///             |this: &Self| &this.db,
///         ));
///         fields
///     }
/// }
/// ```
#[proc_macro_derive(Inject, attributes(inject))]
pub fn derive_inject(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    let name = &input.ident;
    let generics = &input.generics;
    let (impl_generics, ty_generics, where_clause) = generics.split_for_impl();

    // Only support structs with named fields
    let fields = match &input.data {
        Data::Struct(data) => match &data.fields {
            Fields::Named(fields) => &fields.named,
            Fields::Unit => {
                return expand(name, &impl_generics, &ty_generics, where_clause, Vec::new());
            }
            Fields::Unnamed(_) => {
                return syn::Error::new_spanned(
                    &input,
                    "Inject can only be derived for structs with named fields",
                )
                .to_compile_error()
                .into();
            }
        },
        _ => {
            return syn::Error::new_spanned(&input, "Inject can only be derived for structs")
                .to_compile_error()
                .into();
        }
    };

    let mut registrations = Vec::new();

    for field in fields.iter() {
        let Some(field_name) = field.ident.as_ref() else {
            continue;
        };
        let field_type = &field.ty;

        let inject_attr = match find_inject_attr(&field.attrs) {
            Ok(attr) => attr,
            Err(err) => return err.to_compile_error().into(),
        };

        match inject_attr {
            Some(InjectAttr::Slot) => {
                let Some(dependency) = extract_slot_inner_type(field_type) else {
                    return syn::Error::new_spanned(
                        field_type,
                        "Fields marked with #[inject] must have type Slot<T>",
                    )
                    .to_compile_error()
                    .into();
                };
                let label = field_name.to_string();
                registrations.push(quote! {
                    fields.push(::fieldwire::InjectableField::new::<Self, #dependency>(
                        #label,
                        |this: &Self| &this.#field_name,
                    ));
                });
            }
            Some(InjectAttr::Flatten) => {
                registrations.push(quote! {
                    fields.extend(::fieldwire::InjectableField::flatten::<Self, #field_type>(
                        |this: &Self| &this.#field_name,
                    ));
                });
            }
            None => {}
        }
    }

    expand(name, &impl_generics, &ty_generics, where_clause, registrations)
}

fn expand(
    name: &syn::Ident,
    impl_generics: &syn::ImplGenerics<'_>,
    ty_generics: &syn::TypeGenerics<'_>,
    where_clause: Option<&syn::WhereClause>,
    registrations: Vec<proc_macro2::TokenStream>,
) -> TokenStream {
    let binding = if registrations.is_empty() {
        quote! { let fields = ::std::vec::Vec::new(); }
    } else {
        quote! { let mut fields = ::std::vec::Vec::new(); }
    };

    let expanded = quote! {
        impl #impl_generics ::fieldwire::Inject for #name #ty_generics #where_clause {
            fn injectable_fields() -> ::std::vec::Vec<::fieldwire::InjectableField> {
                #binding
                #(#registrations)*
                fields
            }
        }
    };

    TokenStream::from(expanded)
}

/// Kinds of inject attributes
enum InjectAttr {
    Slot,
    Flatten,
}

/// Find and parse the #[inject] attribute
fn find_inject_attr(attrs: &[Attribute]) -> syn::Result<Option<InjectAttr>> {
    for attr in attrs {
        if !attr.path().is_ident("inject") {
            continue;
        }

        if attr.meta.require_path_only().is_ok() {
            return Ok(Some(InjectAttr::Slot));
        }

        let nested = attr.parse_args::<syn::Ident>()?;
        if nested == "flatten" {
            return Ok(Some(InjectAttr::Flatten));
        }

        return Err(syn::Error::new_spanned(
            nested,
            "expected #[inject] or #[inject(flatten)]",
        ));
    }
    Ok(None)
}

/// Extract T from Slot<T>
fn extract_slot_inner_type(ty: &Type) -> Option<&Type> {
    if let Type::Path(type_path) = ty {
        let segment = type_path.path.segments.last()?;
        if segment.ident == "Slot" {
            if let syn::PathArguments::AngleBracketed(args) = &segment.arguments {
                if let Some(syn::GenericArgument::Type(inner)) = args.args.first() {
                    return Some(inner);
                }
            }
        }
    }
    None
}
