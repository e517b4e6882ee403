mod active_value;
mod initializer;
mod timestamps;

use proc_macro::TokenStream;
use syn::{parse_macro_input, DeriveInput};

/// Derives the `TableInitializer` trait for a `DeriveIden` table enum.
///
/// ```ignore
/// #[derive(DeriveIden, TableInitializer)]
/// #[table(meta(order = super::INIT_USER_ORDER, create_table = create_user_table))]
/// pub enum User { Table, Id, Email }
/// ```
#[proc_macro_derive(TableInitializer, attributes(table))]
pub fn derive_table_initializer(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    match initializer::expand_derive_table_initializer(input) {
        Ok(ts) => ts.into(),
        Err(e) => e.to_compile_error().into(),
    }
}

/// Derives `IntoActiveValue` so JSON wrapper types can be used in
/// `DeriveIntoActiveModel` payloads.
#[proc_macro_derive(IntoActiveValue)]
pub fn derive_into_active_value(input: TokenStream) -> TokenStream {
    active_value::derive_into_active_value(input)
}

/// Implements `ActiveModelBehavior` for the entity's `ActiveModel`, stamping
/// `created_at` on insert and `updated_at` on every save when the model
/// declares those fields.
#[proc_macro_derive(AutoTimestamps)]
pub fn auto_timestamps(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    match timestamps::expand_auto_timestamps(input) {
        Ok(ts) => ts.into(),
        Err(e) => e.to_compile_error().into(),
    }
}
