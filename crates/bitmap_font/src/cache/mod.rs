//! Shared font resources
//!
//! Reference-counted ownership of decoded fonts and atlas materials, shared
//! by every text renderer that uses the same font.

pub mod loaders;
pub mod resource_cache;

pub use loaders::{find_asset, DataLoader, Loaders, ShaderLoader, TextureLoader};
pub use resource_cache::{
    CacheError, CacheItem, CacheResult, FontDataHandle, Handle, MaterialHandle, ResourceCache,
};
