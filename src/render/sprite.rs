//! Bucket sprite selection
//!
//! Pure: picks a variant from tilt, topple state and pixel density. The
//! blit itself lives in the scene.

use super::AssetProvider;

/// Pixel density tier for the upright sprite
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResolutionTier {
    X1,
    X2,
    X3,
}

impl ResolutionTier {
    pub fn from_dpr(dpr: f32) -> Self {
        if dpr > 2.0 {
            ResolutionTier::X3
        } else if dpr > 1.0 {
            ResolutionTier::X2
        } else {
            ResolutionTier::X1
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BucketSprite {
    Upright(ResolutionTier),
    TiltLeft,
    TiltRight,
    Toppled,
}

impl BucketSprite {
    pub const ALL: [BucketSprite; 6] = [
        BucketSprite::Upright(ResolutionTier::X1),
        BucketSprite::Upright(ResolutionTier::X2),
        BucketSprite::Upright(ResolutionTier::X3),
        BucketSprite::TiltLeft,
        BucketSprite::TiltRight,
        BucketSprite::Toppled,
    ];

    /// Toppled wins; otherwise lean past `threshold` degrees picks a side
    pub fn select(tilt: f32, toppled: bool, dpr: f32, threshold: f32) -> Self {
        if toppled {
            BucketSprite::Toppled
        } else if tilt > threshold {
            BucketSprite::TiltRight
        } else if tilt < -threshold {
            BucketSprite::TiltLeft
        } else {
            BucketSprite::Upright(ResolutionTier::from_dpr(dpr))
        }
    }

    pub fn asset_key(&self) -> &'static str {
        match self {
            BucketSprite::Upright(ResolutionTier::X1) => "upright_1x",
            BucketSprite::Upright(ResolutionTier::X2) => "upright_2x",
            BucketSprite::Upright(ResolutionTier::X3) => "upright_3x",
            BucketSprite::TiltLeft => "tilt_left",
            BucketSprite::TiltRight => "tilt_right",
            BucketSprite::Toppled => "toppled",
        }
    }
}

/// Warn about every bucket sprite the provider cannot supply
///
/// Returns the missing keys. Missing art only switches the bucket to its
/// procedural fallback.
pub fn missing_sprites<A: AssetProvider>(assets: &A) -> Vec<&'static str> {
    let missing: Vec<_> = BucketSprite::ALL
        .iter()
        .map(BucketSprite::asset_key)
        .filter(|key| assets.get(key).is_none())
        .collect();
    for key in &missing {
        log::warn!("Bucket sprite '{}' unavailable, using fallback shape", key);
    }
    missing
}
