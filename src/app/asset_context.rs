//! Asset resolver context.
//!
//! The resolver is built once from the site config at the app root and read
//! by every page that embeds an image, video or download.

use dioxus::prelude::*;

use crate::assets::AssetResolver;

/// Initialize asset context provider - call once at app root
pub fn use_asset_provider(resolver: AssetResolver) -> AssetResolver {
    use_context_provider(move || resolver)
}

/// Get the asset resolver - use in any component
pub fn use_assets() -> AssetResolver {
    use_context::<AssetResolver>()
}
