use proc_macro2::TokenStream;
use quote::quote;
use syn::{Data, DeriveInput, Error, Fields, Result};

/// Expands to an `ActiveModelBehavior` impl for the sibling `ActiveModel`.
///
/// Only the timestamp columns the model actually declares are touched, so the
/// same derive serves append-only tables that carry `created_at` alone.
pub(crate) fn expand_auto_timestamps(input: DeriveInput) -> Result<TokenStream> {
    let fields = match &input.data {
        Data::Struct(data) => match &data.fields {
            Fields::Named(named) => &named.named,
            _ => {
                return Err(Error::new_spanned(
                    &input,
                    "AutoTimestamps requires a struct with named fields",
                ))
            }
        },
        _ => {
            return Err(Error::new_spanned(
                &input,
                "AutoTimestamps can only be derived for entity models",
            ))
        }
    };

    let has_field = |name: &str| {
        fields
            .iter()
            .any(|f| f.ident.as_ref().is_some_and(|i| i == name))
    };

    let created = if has_field("created_at") {
        quote! {
            if insert && self.created_at.is_not_set() {
                self.created_at = sea_orm::ActiveValue::Set(now);
            }
        }
    } else {
        TokenStream::new()
    };

    let updated = if has_field("updated_at") {
        quote! {
            self.updated_at = sea_orm::ActiveValue::Set(now);
        }
    } else {
        TokenStream::new()
    };

    Ok(quote! {
        #[async_trait::async_trait]
        impl sea_orm::ActiveModelBehavior for ActiveModel {
            async fn before_save<C>(mut self, _db: &C, insert: bool) -> Result<Self, sea_orm::DbErr>
            where
                C: sea_orm::ConnectionTrait,
            {
                let now = chrono::Utc::now();
                #created
                #updated
                let _ = (insert, now);
                Ok(self)
            }
        }
    })
}
