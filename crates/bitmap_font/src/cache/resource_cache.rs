//! Resource cache - shared ownership of fonts and atlas materials
//!
//! **SEPARATION OF CONCERNS**:
//! - ResourceCache: name → decoded font / material, reference counts, eviction
//! - Loaders: where bytes, textures and shaders actually come from
//! - TextRenderer: holds one handle of each kind for its lifetime
//!
//! Every successful `load_*` adds one reference and returns a [`Handle`].
//! The reference is given back exactly once, either by [`Handle::release`]
//! or when the handle is dropped. When a name's count reaches zero its entry
//! is evicted and the decoded data is freed once the last `Arc` goes away.
//!
//! **Ownership**: `ResourceCache` is a cheap, cloneable handle over shared
//! state behind `Arc<Mutex<..>>`. Independent caches can coexist, which keeps
//! tests isolated. Loaders run while the lock is held, so a loader must not
//! call back into the cache that invoked it.

use std::collections::hash_map::Entry;
use std::collections::HashMap;
use std::fmt;
use std::ops::Deref;
use std::path::PathBuf;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use thiserror::Error;

use super::loaders::{Loaders, ShaderLoader};
use crate::font::{FontData, FontError};
use crate::text::material::{Material, ShaderHandle, TEXT_SHADER_NAME};

/// Result type for cache operations
pub type CacheResult<T> = Result<T, CacheError>;

/// Resource cache errors
#[derive(Debug, Error)]
pub enum CacheError {
    /// The data loader produced no bytes for this name
    #[error("font data not found: {0}")]
    DataNotFound(String),

    /// The texture loader produced no texture for this name
    #[error("texture not found: {0}")]
    TextureNotFound(String),

    /// The shader loader did not know this shader
    #[error("shader not found: {0}")]
    ShaderNotFound(String),

    /// The loaded bytes were not a valid font asset
    #[error("failed to decode font '{name}': {source}")]
    Decode {
        /// Font asset name
        name: String,
        /// Underlying decode failure
        #[source]
        source: FontError,
    },
}

/// A cached resource and its reference count
#[derive(Debug)]
pub struct CacheItem<T> {
    entity: Arc<T>,
    ref_count: usize,
}

impl<T> CacheItem<T> {
    /// Wrap a freshly loaded resource with no references yet
    pub fn new(entity: T) -> Self {
        Self {
            entity: Arc::new(entity),
            ref_count: 0,
        }
    }

    /// Add a reference, returning the new count
    pub fn add_ref(&mut self) -> usize {
        self.ref_count += 1;
        self.ref_count
    }

    /// Drop a reference, returning the new count
    pub fn release_ref(&mut self) -> usize {
        self.ref_count = self.ref_count.saturating_sub(1);
        self.ref_count
    }

    /// Current reference count
    pub const fn ref_count(&self) -> usize {
        self.ref_count
    }

    /// The shared resource
    pub const fn entity(&self) -> &Arc<T> {
        &self.entity
    }
}

/// Which cache table a handle belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ResourceKind {
    Data,
    Texture,
}

struct CacheState {
    loaders: Loaders,
    data: HashMap<String, CacheItem<FontData>>,
    textures: HashMap<String, CacheItem<Material>>,
    // Never evicted except by unload_all
    shaders: HashMap<String, ShaderHandle>,
}

/// Reference-counted cache of decoded fonts, atlas materials, and shaders
#[derive(Clone)]
pub struct ResourceCache {
    state: Arc<Mutex<CacheState>>,
}

impl ResourceCache {
    /// Create an empty cache drawing from `loaders`
    pub fn new(loaders: Loaders) -> Self {
        Self {
            state: Arc::new(Mutex::new(CacheState {
                loaders,
                data: HashMap::new(),
                textures: HashMap::new(),
                shaders: HashMap::new(),
            })),
        }
    }

    /// Create a cache reading assets from a directory
    ///
    /// See [`Loaders::filesystem`] for the lookup rules.
    pub fn with_asset_root(root: impl Into<PathBuf>) -> Self {
        Self::new(Loaders::filesystem(root))
    }

    fn lock(&self) -> MutexGuard<'_, CacheState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Acquire the decoded font `name`, loading it on first use
    ///
    /// Repeated loads share one decoded instance. Nothing is cached when
    /// loading or decoding fails.
    pub fn load_data(&self, name: &str) -> CacheResult<FontDataHandle> {
        let mut guard = self.lock();
        let state = &mut *guard;

        let item = match state.data.entry(name.to_owned()) {
            Entry::Occupied(entry) => entry.into_mut(),
            Entry::Vacant(entry) => {
                log::debug!("Font data cache miss: {}", name);
                let bytes = (state.loaders.data)(name).ok_or_else(|| {
                    log::warn!("Data loader returned nothing for '{}'", name);
                    CacheError::DataNotFound(name.to_owned())
                })?;
                let data = FontData::decode(&bytes).map_err(|source| CacheError::Decode {
                    name: name.to_owned(),
                    source,
                })?;
                log::info!("Loaded font '{}' ({} glyphs)", name, data.metrics.len());
                entry.insert(CacheItem::new(data))
            }
        };

        let count = item.add_ref();
        let entity = Arc::clone(item.entity());
        log::trace!("Font data '{}' refs: {}", name, count);
        drop(guard);

        Ok(Handle::new(self.clone(), ResourceKind::Data, name, entity))
    }

    /// Release one reference to the font `name`
    ///
    /// The entry is evicted when its count reaches zero. Unknown names are
    /// ignored.
    pub fn unload_data(&self, name: &str) {
        let mut state = self.lock();
        release_entry(&mut state.data, name, "font data");
    }

    /// Acquire the atlas material for texture `name`, creating it on first use
    ///
    /// A new material binds the built-in text shader to the loaded texture
    /// with an opaque white tint.
    pub fn load_texture(&self, name: &str) -> CacheResult<MaterialHandle> {
        let mut guard = self.lock();
        let state = &mut *guard;

        let item = match state.textures.entry(name.to_owned()) {
            Entry::Occupied(entry) => entry.into_mut(),
            Entry::Vacant(entry) => {
                log::debug!("Texture cache miss: {}", name);
                let shader = resolve_shader(
                    &mut state.shaders,
                    &mut state.loaders.shader,
                    TEXT_SHADER_NAME,
                )?;
                let texture = (state.loaders.texture)(name).ok_or_else(|| {
                    log::warn!("Texture loader returned nothing for '{}'", name);
                    CacheError::TextureNotFound(name.to_owned())
                })?;
                log::info!("Created text material for '{}' ({:?})", name, texture);
                entry.insert(CacheItem::new(Material::new(shader, texture)))
            }
        };

        let count = item.add_ref();
        let entity = Arc::clone(item.entity());
        log::trace!("Texture '{}' refs: {}", name, count);
        drop(guard);

        Ok(Handle::new(self.clone(), ResourceKind::Texture, name, entity))
    }

    /// Release one reference to the texture `name`
    ///
    /// The entry is evicted when its count reaches zero. Unknown names are
    /// ignored.
    pub fn unload_texture(&self, name: &str) {
        let mut state = self.lock();
        release_entry(&mut state.textures, name, "texture");
    }

    /// Look up a shader by name, caching the result
    pub fn shader(&self, name: &str) -> CacheResult<ShaderHandle> {
        let mut guard = self.lock();
        let state = &mut *guard;
        resolve_shader(&mut state.shaders, &mut state.loaders.shader, name)
    }

    /// Drop every cached font, material, and shader
    ///
    /// # Hazard
    ///
    /// This is a hard reset, not a drain: reference counts are ignored.
    /// Handles that are still alive keep their `Arc` and stay readable, but
    /// their eventual release targets an entry that no longer exists, or,
    /// if the same name has been loaded again since, decrements the new
    /// entry's count and can evict it while its real owners still hold it.
    /// Release or drop all handles before calling this.
    pub fn unload_all(&self) {
        let mut state = self.lock();
        log::info!(
            "Unloading all font resources ({} fonts, {} textures, {} shaders)",
            state.data.len(),
            state.textures.len(),
            state.shaders.len()
        );
        state.data.clear();
        state.textures.clear();
        state.shaders.clear();
    }

    /// Reference count of a cached font, if present
    pub fn data_ref_count(&self, name: &str) -> Option<usize> {
        self.lock().data.get(name).map(CacheItem::ref_count)
    }

    /// Reference count of a cached texture material, if present
    pub fn texture_ref_count(&self, name: &str) -> Option<usize> {
        self.lock().textures.get(name).map(CacheItem::ref_count)
    }

    /// Number of cached fonts
    pub fn cached_data_count(&self) -> usize {
        self.lock().data.len()
    }

    /// Number of cached texture materials
    pub fn cached_texture_count(&self) -> usize {
        self.lock().textures.len()
    }

    /// Number of cached shaders
    pub fn cached_shader_count(&self) -> usize {
        self.lock().shaders.len()
    }

    fn release(&self, kind: ResourceKind, name: &str) {
        match kind {
            ResourceKind::Data => self.unload_data(name),
            ResourceKind::Texture => self.unload_texture(name),
        }
    }
}

impl fmt::Debug for ResourceCache {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = self.lock();
        f.debug_struct("ResourceCache")
            .field("data", &state.data.keys().collect::<Vec<_>>())
            .field("textures", &state.textures.keys().collect::<Vec<_>>())
            .field("shaders", &state.shaders.len())
            .finish()
    }
}

fn resolve_shader(
    shaders: &mut HashMap<String, ShaderHandle>,
    loader: &mut ShaderLoader,
    name: &str,
) -> CacheResult<ShaderHandle> {
    if let Some(&shader) = shaders.get(name) {
        return Ok(shader);
    }

    let shader = loader(name).ok_or_else(|| {
        log::warn!("Shader '{}' not found", name);
        CacheError::ShaderNotFound(name.to_owned())
    })?;
    shaders.insert(name.to_owned(), shader);
    Ok(shader)
}

fn release_entry<T>(table: &mut HashMap<String, CacheItem<T>>, name: &str, what: &str) {
    let Some(item) = table.get_mut(name) else {
        log::debug!("Release of unknown {} '{}' ignored", what, name);
        return;
    };

    if item.release_ref() == 0 {
        table.remove(name);
        log::debug!("Evicted {} '{}'", what, name);
    }
}

/// One counted reference to a cached resource
///
/// Derefs to the resource. The reference goes back to the cache exactly
/// once: through [`release`](Handle::release), or on drop.
pub struct Handle<T> {
    cache: Option<ResourceCache>,
    kind: ResourceKind,
    name: String,
    entity: Arc<T>,
}

/// Counted reference to a decoded font
pub type FontDataHandle = Handle<FontData>;

/// Counted reference to an atlas material
pub type MaterialHandle = Handle<Material>;

impl<T> Handle<T> {
    fn new(cache: ResourceCache, kind: ResourceKind, name: &str, entity: Arc<T>) -> Self {
        Self {
            cache: Some(cache),
            kind,
            name: name.to_owned(),
            entity,
        }
    }

    /// Cache key this handle was acquired under
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The shared resource, for identity checks or uncounted sharing
    pub fn shared(&self) -> &Arc<T> {
        &self.entity
    }

    /// Give the reference back to the cache now
    pub fn release(mut self) {
        self.release_once();
    }

    fn release_once(&mut self) {
        if let Some(cache) = self.cache.take() {
            cache.release(self.kind, &self.name);
        }
    }
}

impl<T> Deref for Handle<T> {
    type Target = T;

    fn deref(&self) -> &T {
        &self.entity
    }
}

impl<T> Drop for Handle<T> {
    fn drop(&mut self) {
        self.release_once();
    }
}

impl<T: fmt::Debug> fmt::Debug for Handle<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Handle")
            .field("kind", &self.kind)
            .field("name", &self.name)
            .field("released", &self.cache.is_none())
            .field("entity", &self.entity)
            .finish()
    }
}
