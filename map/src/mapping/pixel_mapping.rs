use crate::pixel_map::*;

///
/// A pixel map together with the region of input pixels where it may be used
///
pub struct PixelMapping<'a, TPixelMap>
where
    TPixelMap: ?Sized + PixelMap,
{
    /// Output-frame positions of the input pixel centers
    pub (super) pixel_map: &'a TPixelMap,

    /// The input pixels that can be mapped
    pub (super) valid_region: ValidRegion,
}

impl<'a, TPixelMap> Clone for PixelMapping<'a, TPixelMap>
where
    TPixelMap: ?Sized + PixelMap,
{
    #[inline]
    fn clone(&self) -> Self {
        PixelMapping {
            pixel_map:      self.pixel_map,
            valid_region:   self.valid_region,
        }
    }
}

impl<'a, TPixelMap> PixelMapping<'a, TPixelMap>
where
    TPixelMap: ?Sized + PixelMap,
{
    ///
    /// Creates a mapping that uses the specified region of a pixel map
    ///
    #[inline]
    pub fn new(pixel_map: &'a TPixelMap, valid_region: ValidRegion) -> Self {
        PixelMapping { pixel_map, valid_region }
    }

    ///
    /// Creates a mapping that can use every cell of a pixel map
    ///
    #[inline]
    pub fn for_pixel_map(pixel_map: &'a TPixelMap) -> Self {
        PixelMapping {
            pixel_map:      pixel_map,
            valid_region:   ValidRegion::for_pixel_map(pixel_map),
        }
    }

    #[inline]
    pub fn pixel_map(&self) -> &'a TPixelMap {
        self.pixel_map
    }

    #[inline]
    pub fn valid_region(&self) -> ValidRegion {
        self.valid_region
    }

    ///
    /// Returns a copy of this mapping restricted to the part of the pixel map that holds defined values
    ///
    /// Returns `None` if there are too few defined values to use (see `ValidRegion::shrink_to_defined()`)
    ///
    pub fn shrink_to_defined(&self) -> Option<Self> {
        let valid_region = self.valid_region.shrink_to_defined(self.pixel_map)?;

        Some(PixelMapping {
            pixel_map:      self.pixel_map,
            valid_region:   valid_region,
        })
    }
}
