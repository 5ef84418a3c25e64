use num_traits::{One, PrimInt};
use serde::{Deserialize, Serialize};

/// The default primitive storage for collision masks.
pub type MaskBits = u32;

/// Trait implemented by user-defined collision layer enums.
///
/// The enum's discriminant (via `#[repr(u8)]`) typically determines the bit index.
/// You choose the backing integer type via the associated `Storage`.
pub trait CollisionLayer {
    type Storage: PrimInt;

    fn bit_index(&self) -> u8;

    fn mask(&self) -> Self::Storage {
        // NOTE: Ensure your `bit_index()` is < number of bits in `Storage`.
        Self::Storage::one() << (self.bit_index() as usize)
    }
}

/// Set of collision layers a ray query is allowed to hit.
///
/// Scenes tag each static shape with its own layers; a shape blocks a ray iff the
/// two masks share at least one bit.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CollisionMask<T: PrimInt = MaskBits> {
    pub bits: T,
}

impl CollisionMask<MaskBits> {
    /// Every layer.
    pub const ALL: Self = Self { bits: MaskBits::MAX };
    /// No layer; queries with this mask never hit.
    pub const NONE: Self = Self { bits: 0 };
}

impl<T: PrimInt> Default for CollisionMask<T> {
    fn default() -> Self {
        Self {
            bits: T::max_value(),
        }
    }
}

impl<T: PrimInt> CollisionMask<T> {
    pub fn new(bits: T) -> Self {
        Self { bits }
    }

    /// Mask containing exactly the given layers.
    pub fn from_layers<U: CollisionLayer<Storage = T>>(layers: &[U]) -> Self {
        Self::new(layers.iter().fold(T::zero(), |acc, l| acc | l.mask()))
    }

    pub fn has<U: CollisionLayer<Storage = T>>(&self, layer: U) -> bool {
        (self.bits & layer.mask()) != T::zero()
    }

    /// True if the two masks share at least one layer.
    pub fn intersects(&self, other: Self) -> bool {
        (self.bits & other.bits) != T::zero()
    }
}

/// Declare a layer enum and implement `CollisionLayer` for it.
///
/// Example:
/// ```rust
/// controller2d::define_collision_layers!(Layer, u32, {
///     Ground,
///     OneWay,
///     Hazard,
/// });
/// let mask = controller2d::CollisionMask::from_layers(&[Layer::Ground, Layer::Hazard]);
/// assert!(mask.has(Layer::Ground));
/// assert!(!mask.has(Layer::OneWay));
/// ```
#[macro_export]
macro_rules! define_collision_layers {
    ($name:ident, $storage:ty, { $($variant:ident),* $(,)? }) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq)]
        #[repr(u8)]
        pub enum $name {
            $($variant),*
        }

        impl $crate::mask::CollisionLayer for $name {
            type Storage = $storage;

            fn bit_index(&self) -> u8 {
                *self as u8
            }
        }
    };
}
