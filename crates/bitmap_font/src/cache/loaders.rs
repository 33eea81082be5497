//! Loader callbacks used by the resource cache
//!
//! The cache never touches storage or the GPU directly. Font bytes, atlas
//! textures, and shaders come from injectable closures, so hosts can read
//! from archives, bundles, or an engine's own texture manager.

use std::path::{Path, PathBuf};

use crate::text::material::{ShaderHandle, TextureHandle, TEXT_SHADER_NAME};

/// Loads the raw bytes of a font asset by name
pub type DataLoader = Box<dyn FnMut(&str) -> Option<Vec<u8>> + Send>;

/// Loads an atlas texture by name, returning the host's handle for it
pub type TextureLoader = Box<dyn FnMut(&str) -> Option<TextureHandle> + Send>;

/// Resolves a shader program by name
pub type ShaderLoader = Box<dyn FnMut(&str) -> Option<ShaderHandle> + Send>;

/// Handle the filesystem loaders give the built-in text shader
pub const BUILTIN_TEXT_SHADER: ShaderHandle = ShaderHandle(1);

/// The set of loader callbacks a cache draws from
pub struct Loaders {
    /// Font asset bytes
    pub data: DataLoader,
    /// Atlas textures
    pub texture: TextureLoader,
    /// Shader programs
    pub shader: ShaderLoader,
}

impl Loaders {
    /// Bundle three loader closures
    pub fn new(
        data: impl FnMut(&str) -> Option<Vec<u8>> + Send + 'static,
        texture: impl FnMut(&str) -> Option<TextureHandle> + Send + 'static,
        shader: impl FnMut(&str) -> Option<ShaderHandle> + Send + 'static,
    ) -> Self {
        Self {
            data: Box::new(data),
            texture: Box::new(texture),
            shader: Box::new(shader),
        }
    }

    /// Loaders reading assets from a directory
    ///
    /// - font `name` is read from `root/name`, falling back to `root/name.bytes`
    /// - atlas `name` is read from `root/name`, falling back to `root/name.png`;
    ///   the image header is validated and each atlas gets a fresh handle
    /// - only the built-in text shader resolves
    pub fn filesystem(root: impl Into<PathBuf>) -> Self {
        let root = root.into();
        let data_root = root.clone();
        let mut next_texture = 1u32;

        Self::new(
            move |name| {
                let path = find_asset(&data_root, name, "bytes")?;
                match std::fs::read(&path) {
                    Ok(bytes) => {
                        log::debug!("Read font asset {} ({} bytes)", path.display(), bytes.len());
                        Some(bytes)
                    }
                    Err(e) => {
                        log::warn!("Failed to read font asset {}: {}", path.display(), e);
                        None
                    }
                }
            },
            move |name| {
                let path = find_asset(&root, name, "png")?;
                match image::image_dimensions(&path) {
                    Ok((width, height)) => {
                        let handle = TextureHandle(next_texture);
                        next_texture += 1;
                        log::debug!(
                            "Loaded atlas {} ({}x{}) as {:?}",
                            path.display(),
                            width,
                            height,
                            handle
                        );
                        Some(handle)
                    }
                    Err(e) => {
                        log::warn!("Failed to load atlas {}: {}", path.display(), e);
                        None
                    }
                }
            },
            |name| (name == TEXT_SHADER_NAME).then_some(BUILTIN_TEXT_SHADER),
        )
    }
}

/// `root/name` if it exists, otherwise `root/name.fallback_ext`
///
/// The extension is appended, never substituted, so `hud.v2` falls back to
/// `hud.v2.bytes`.
pub fn find_asset(root: &Path, name: &str, fallback_ext: &str) -> Option<PathBuf> {
    let exact = root.join(name);
    if exact.is_file() {
        return Some(exact);
    }

    let with_ext = root.join(format!("{name}.{fallback_ext}"));
    if with_ext.is_file() {
        Some(with_ext)
    } else {
        log::warn!("Asset '{}' not found under {}", name, root.display());
        None
    }
}
