use serde_derive::{Deserialize, Serialize};

use crate::bbox::{BBox, Ltwh};

/// Contains (x,y) of the left top corner and (width,height) of bbox
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Detection {
    pub x: f64,
    pub y: f64,
    pub w: f64,
    pub h: f64,
    #[serde(rename = "p")]
    pub score: f64,
    #[serde(rename = "c")]
    pub label: String,
}

impl Detection {
    #[inline(always)]
    pub fn bbox(&self) -> BBox<Ltwh> {
        BBox::ltwh(self.x, self.y, self.w, self.h)
    }

    /// False for boxes the matcher cannot score: non-finite
    /// coordinates or negative size.
    #[inline]
    pub fn is_well_formed(&self) -> bool {
        self.x.is_finite()
            && self.y.is_finite()
            && self.w.is_finite()
            && self.h.is_finite()
            && self.w >= 0.0
            && self.h >= 0.0
    }
}
