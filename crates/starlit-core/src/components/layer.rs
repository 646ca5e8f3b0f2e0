/// Render layer — controls draw order for entities.
///
/// Layers are drawn back-to-front: Backdrop first, Overlay last.
/// Within a layer, entities are grouped by blend mode for batching.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[repr(u8)]
pub enum RenderLayer {
    /// Full-bleed scene background (starfield, glitch static, video).
    Backdrop = 0,
    /// Decorative mid-ground (memory tokens, floating hearts, sun glow).
    Scenery = 1,
    /// Primary interactive content (cards, panels).
    #[default]
    Content = 2,
    /// Above-content accents (hints, stamps).
    Foreground = 3,
    /// Particles (confetti, falling stars).
    Vfx = 4,
    /// Full-screen overlays (collapse interstitial, zoom wash).
    Overlay = 5,
}

impl RenderLayer {
    /// Total number of render layers.
    pub const COUNT: usize = 6;

    /// Convert from a u8 value. Returns None if out of range.
    pub fn from_u8(value: u8) -> Option<Self> {
        match value {
            0 => Some(Self::Backdrop),
            1 => Some(Self::Scenery),
            2 => Some(Self::Content),
            3 => Some(Self::Foreground),
            4 => Some(Self::Vfx),
            5 => Some(Self::Overlay),
            _ => None,
        }
    }

    /// Convert to u8 for protocol serialization.
    pub fn as_u8(self) -> u8 {
        self as u8
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_content() {
        assert_eq!(RenderLayer::default(), RenderLayer::Content);
    }

    #[test]
    fn ordering_is_back_to_front() {
        assert!(RenderLayer::Backdrop < RenderLayer::Scenery);
        assert!(RenderLayer::Scenery < RenderLayer::Content);
        assert!(RenderLayer::Content < RenderLayer::Foreground);
        assert!(RenderLayer::Foreground < RenderLayer::Vfx);
        assert!(RenderLayer::Vfx < RenderLayer::Overlay);
    }

    #[test]
    fn round_trip_u8() {
        for val in 0..RenderLayer::COUNT as u8 {
            let layer = RenderLayer::from_u8(val).unwrap();
            assert_eq!(layer.as_u8(), val);
        }
        assert!(RenderLayer::from_u8(6).is_none());
    }
}
