//! Aspect-preserving image sizing.

use crate::geometry::PixelSize;

/// Fits an image of `natural` size into `container_width`.
///
/// Scales down when the container is narrower, never scales up. Returns
/// `None` for an image without a usable natural size or a container that
/// has no width (e.g. still hidden).
pub fn fit_to_width(natural: PixelSize, container_width: f64) -> Option<PixelSize> {
    if !natural.is_usable() || !container_width.is_finite() || container_width <= 0.0 {
        return None;
    }

    if container_width < natural.width {
        let ratio = natural.height / natural.width;
        Some(PixelSize::new(container_width, container_width * ratio))
    } else {
        Some(natural)
    }
}

/// Image sizing gated on the image load event.
///
/// Before `on_load` there is no natural size, so layout requests are no-ops.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ImageScale {
    natural: Option<PixelSize>,
}

impl ImageScale {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records the intrinsic size reported by the loaded image.
    pub fn on_load(&mut self, natural: PixelSize) {
        if natural.is_usable() {
            self.natural = Some(natural);
        } else {
            tracing::warn!(?natural, "Background image reported no usable size");
            self.natural = None;
        }
    }

    pub fn is_loaded(&self) -> bool {
        self.natural.is_some()
    }

    pub fn natural(&self) -> Option<PixelSize> {
        self.natural
    }

    /// Rendered image size, which is also the clickable wrapper size.
    pub fn resolve(&self, container_width: f64) -> Option<PixelSize> {
        fit_to_width(self.natural?, container_width)
    }
}
