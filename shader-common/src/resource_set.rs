//! Resource-set (bind group) numbers shared by host and shader code
//!
//! Every shader compiled against the preamble declares its resources in one of
//! five sets. The host must create its pipeline layouts with the same numbering;
//! a mismatch only shows up as a validation error or corrupted rendering, so
//! the numbers live here and nowhere else.

use crate::error::LayoutError;

/// Set 0: per-frame [`GlobalConstants`](crate::GlobalConstants)
pub const GLOBAL_CONSTANTS_RESOURCE_SET: u32 = 0;
/// Set 1: per-pass constants
pub const PASS_CONSTANTS_RESOURCE_SET: u32 = 1;
/// Set 2: material constants and textures
pub const MATERIAL_CONSTANTS_RESOURCE_SET: u32 = 2;
/// Set 3: per-render-item constants (world matrix etc.)
pub const RENDER_ITEM_CONSTANTS_RESOURCE_SET: u32 = 3;
/// Set 4: water animation constants
pub const WATER_ANIMATION_CONSTANTS_RESOURCE_SET: u32 = 4;

/// Logical resource set a shader resource belongs to
#[repr(u32)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ResourceSet {
    Global = GLOBAL_CONSTANTS_RESOURCE_SET,
    Pass = PASS_CONSTANTS_RESOURCE_SET,
    Material = MATERIAL_CONSTANTS_RESOURCE_SET,
    RenderItem = RENDER_ITEM_CONSTANTS_RESOURCE_SET,
    WaterAnimation = WATER_ANIMATION_CONSTANTS_RESOURCE_SET,
}

impl ResourceSet {
    /// Number of resource sets
    pub const COUNT: u32 = 5;

    /// All resource sets in index order
    pub const ALL: [ResourceSet; Self::COUNT as usize] = [
        ResourceSet::Global,
        ResourceSet::Pass,
        ResourceSet::Material,
        ResourceSet::RenderItem,
        ResourceSet::WaterAnimation,
    ];

    /// Bind group / descriptor set number
    #[inline]
    pub const fn index(self) -> u32 {
        self as u32
    }

    /// Look up a resource set by its bind group number
    ///
    /// # Errors
    ///
    /// Returns `LayoutError::UnknownResourceSet` if `index` is not 0-4.
    pub fn from_index(index: u32) -> Result<Self, LayoutError> {
        Self::ALL
            .get(index as usize)
            .copied()
            .ok_or(LayoutError::UnknownResourceSet(index))
    }

    /// Name of the constant that carries this set's number in shader source
    pub const fn define_name(self) -> &'static str {
        match self {
            ResourceSet::Global => "GLOBAL_CONSTANTS_RESOURCE_SET",
            ResourceSet::Pass => "PASS_CONSTANTS_RESOURCE_SET",
            ResourceSet::Material => "MATERIAL_CONSTANTS_RESOURCE_SET",
            ResourceSet::RenderItem => "RENDER_ITEM_CONSTANTS_RESOURCE_SET",
            ResourceSet::WaterAnimation => "WATER_ANIMATION_CONSTANTS_RESOURCE_SET",
        }
    }
}

/// Arrange per-set items (bind group layouts, bind groups, ...) in pipeline
/// layout order.
///
/// Each of the five sets must be supplied exactly once so that position `i`
/// in the result is bound at set `i`.
///
/// # Errors
///
/// Returns `LayoutError::DuplicateResourceSet` if a set appears twice and
/// `LayoutError::MissingResourceSet` for the first set with no entry.
pub fn order_by_resource_set<T>(
    entries: impl IntoIterator<Item = (ResourceSet, T)>,
) -> Result<Vec<T>, LayoutError> {
    let mut slots: [Option<T>; ResourceSet::COUNT as usize] = Default::default();

    for (set, item) in entries {
        let slot = &mut slots[set.index() as usize];
        if slot.is_some() {
            return Err(LayoutError::DuplicateResourceSet(set));
        }
        *slot = Some(item);
    }

    ResourceSet::ALL
        .into_iter()
        .zip(slots)
        .map(|(set, item)| item.ok_or(LayoutError::MissingResourceSet(set)))
        .collect()
}
