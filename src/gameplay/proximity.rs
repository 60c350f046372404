use bevy::math::Vec3;

/// Strict distance check: a point exactly `radius` away is not near.
pub fn is_near(a: Vec3, b: Vec3, radius: f32) -> bool {
    a.distance(b) < radius
}

/// Look of an on-ground marker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MarkerTone {
    #[default]
    Idle,
    /// Player is close enough to interact.
    Ready,
    Hidden,
}

/// One-line hint shown in the HUD status field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StatusLine {
    #[default]
    FindPackage,
    CarryToTarget,
    DeliverAtTarget,
    PackageRetired,
}

impl StatusLine {
    pub fn text(self) -> &'static str {
        match self {
            StatusLine::FindPackage => "Find the package",
            StatusLine::CarryToTarget => "Carry the package to the ship",
            StatusLine::DeliverAtTarget => "Deliver the package at the ship!",
            StatusLine::PackageRetired => "Package delivered",
        }
    }
}

/// Presentation state derived from carry state and proximity.
///
/// Has no effect on the game itself; the scene reads it to toggle prompts
/// and recolor markers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Indicators {
    pub package_prompt: bool,
    pub package_marker: MarkerTone,
    pub target_prompt: bool,
    pub target_marker: MarkerTone,
    pub status: StatusLine,
}

impl Indicators {
    pub fn for_loose_package(near_package: bool) -> Self {
        Self {
            package_prompt: near_package,
            package_marker: if near_package {
                MarkerTone::Ready
            } else {
                MarkerTone::Idle
            },
            target_prompt: false,
            target_marker: MarkerTone::Idle,
            status: StatusLine::FindPackage,
        }
    }

    pub fn for_carried_package(near_target: bool) -> Self {
        Self {
            package_prompt: false,
            package_marker: MarkerTone::Hidden,
            target_prompt: near_target,
            target_marker: if near_target {
                MarkerTone::Ready
            } else {
                MarkerTone::Idle
            },
            status: if near_target {
                StatusLine::DeliverAtTarget
            } else {
                StatusLine::CarryToTarget
            },
        }
    }

    pub fn for_retired_package() -> Self {
        Self {
            package_prompt: false,
            package_marker: MarkerTone::Hidden,
            target_prompt: false,
            target_marker: MarkerTone::Idle,
            status: StatusLine::PackageRetired,
        }
    }
}
