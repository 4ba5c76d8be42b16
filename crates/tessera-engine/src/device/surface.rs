use crate::coords::ScreenSize;

use super::SurfaceErrorAction;

/// Picks a surface format, honoring the sRGB preference when the surface offers
/// a matching format and otherwise taking the surface's first choice.
pub(crate) fn choose_surface_format(
    caps: &wgpu::SurfaceCapabilities,
    prefer_srgb: bool,
) -> Option<wgpu::TextureFormat> {
    if let Some(format) = caps.formats.iter().copied().find(|f| f.is_srgb() == prefer_srgb) {
        return Some(format);
    }

    let fallback = caps.formats.first().copied()?;
    log::info!(
        "surface offers no {} format; falling back to {fallback:?}",
        if prefer_srgb { "sRGB" } else { "linear" }
    );
    Some(fallback)
}

pub(crate) fn choose_alpha_mode(
    caps: &wgpu::SurfaceCapabilities,
    requested: Option<wgpu::CompositeAlphaMode>,
) -> wgpu::CompositeAlphaMode {
    requested
        .filter(|m| caps.alpha_modes.contains(m))
        .or_else(|| caps.alpha_modes.first().copied())
        .unwrap_or(wgpu::CompositeAlphaMode::Auto)
}

/// Format features the device validates pipelines against.
///
/// Without `TEXTURE_ADAPTER_SPECIFIC_FORMAT_FEATURES` wgpu only accepts the
/// format's guaranteed features, whatever the adapter reports.
pub(crate) fn device_format_flags(
    format: wgpu::TextureFormat,
    device_features: wgpu::Features,
    adapter_flags: wgpu::TextureFormatFeatureFlags,
) -> wgpu::TextureFormatFeatureFlags {
    if device_features.contains(wgpu::Features::TEXTURE_ADAPTER_SPECIFIC_FORMAT_FEATURES) {
        adapter_flags
    } else {
        format.guaranteed_format_features(device_features).flags
    }
}

/// Highest multisample count `<= requested` that the format can both render
/// and resolve. Falls back to `1` (no MSAA).
pub(crate) fn choose_sample_count(requested: u32, flags: wgpu::TextureFormatFeatureFlags) -> u32 {
    if !flags.contains(wgpu::TextureFormatFeatureFlags::MULTISAMPLE_RESOLVE) {
        return 1;
    }

    [16, 8, 4, 2]
        .into_iter()
        .filter(|&count| count <= requested)
        .find(|&count| flags.sample_count_supported(count))
        .unwrap_or(1)
}

pub(crate) fn apply_resize(
    surface: &wgpu::Surface,
    device: &wgpu::Device,
    config: &mut wgpu::SurfaceConfiguration,
    size: &mut ScreenSize,
    new_size: ScreenSize,
) {
    *size = new_size;

    // wgpu rejects 0x0 surfaces (minimized windows); defer until a real size arrives.
    if new_size.is_empty() {
        return;
    }

    config.width = new_size.width;
    config.height = new_size.height;
    surface.configure(device, config);

    log::debug!("surface reconfigured to {}x{}", new_size.width, new_size.height);
}

pub(crate) fn map_surface_error(
    surface: &wgpu::Surface,
    device: &wgpu::Device,
    config: &wgpu::SurfaceConfiguration,
    size: ScreenSize,
    err: wgpu::SurfaceError,
) -> SurfaceErrorAction {
    match err {
        wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated => {
            if !size.is_empty() {
                surface.configure(device, config);
            }
            SurfaceErrorAction::Reconfigured
        }
        wgpu::SurfaceError::OutOfMemory => SurfaceErrorAction::Fatal,
        wgpu::SurfaceError::Timeout => SurfaceErrorAction::SkipFrame,
        wgpu::SurfaceError::Other => SurfaceErrorAction::SkipFrame,
    }
}
