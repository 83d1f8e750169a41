use serde::{Deserialize, Serialize};
use serde_derive::{Deserialize, Serialize};
use std::marker::PhantomData;

pub trait BBoxFormat: std::fmt::Debug {}

/// Left-top-width-height format, contains left top corner and width-height
#[derive(Serialize, Deserialize, Debug, Copy, Clone, PartialEq)]
pub struct Ltwh;
impl BBoxFormat for Ltwh {}

/// Left-top-right-bottom format, contains left top and right bottom corners
#[derive(Serialize, Deserialize, Debug, Copy, Clone, PartialEq)]
pub struct Ltrb;
impl BBoxFormat for Ltrb {}

/// X-y-width-height format, contains coordinates of the center of bbox and width-height
#[derive(Serialize, Deserialize, Debug, Copy, Clone, PartialEq)]
pub struct Xywh;
impl BBoxFormat for Xywh {}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct BBox<F: BBoxFormat + Serialize + Deserialize<'static> + PartialEq>(
    [f64; 4],
    PhantomData<F>,
);

impl<F: BBoxFormat + Serialize + Deserialize<'static> + PartialEq> From<BBox<F>> for [f64; 4] {
    fn from(bbox: BBox<F>) -> Self {
        bbox.0
    }
}

impl<F: BBoxFormat + Serialize + Deserialize<'static> + PartialEq> BBox<F> {
    #[inline]
    pub fn as_slice(&self) -> &[f64; 4] {
        &self.0
    }
}

impl BBox<Ltwh> {
    #[inline]
    pub fn ltwh(x1: f64, x2: f64, x3: f64, x4: f64) -> Self {
        BBox([x1, x2, x3, x4], Default::default())
    }

    #[inline(always)]
    pub fn left(&self) -> f64 {
        self.0[0]
    }

    #[inline(always)]
    pub fn top(&self) -> f64 {
        self.0[1]
    }

    #[inline(always)]
    pub fn width(&self) -> f64 {
        self.0[2]
    }

    #[inline(always)]
    pub fn height(&self) -> f64 {
        self.0[3]
    }

    #[inline(always)]
    pub fn cx(&self) -> f64 {
        self.0[0] + self.0[2] / 2.0
    }

    #[inline(always)]
    pub fn cy(&self) -> f64 {
        self.0[1] + self.0[3] / 2.0
    }

    #[inline]
    pub fn area(&self) -> f64 {
        self.0[2] * self.0[3]
    }

    /// Same box moved by (dx, dy), size unchanged.
    #[inline]
    pub fn translated(&self, dx: f64, dy: f64) -> Self {
        BBox(
            [self.0[0] + dx, self.0[1] + dy, self.0[2], self.0[3]],
            Default::default(),
        )
    }

    /// Intersection area over union area, in [0, 1].
    ///
    /// Touching or disjoint boxes give 0, as does any box with
    /// non-positive width or height.
    pub fn iou(&self, other: &Self) -> f64 {
        let ix = (self.right().min(other.right()) - self.left().max(other.left())).max(0.0);
        let iy = (self.bottom().min(other.bottom()) - self.top().max(other.top())).max(0.0);

        let intersection = ix * iy;
        if intersection <= 0.0 {
            return 0.0;
        }

        intersection / (self.area() + other.area() - intersection)
    }

    #[inline(always)]
    fn right(&self) -> f64 {
        self.0[0] + self.0[2]
    }

    #[inline(always)]
    fn bottom(&self) -> f64 {
        self.0[1] + self.0[3]
    }

    #[inline]
    pub fn as_ltrb(&self) -> BBox<Ltrb> {
        self.into()
    }

    #[inline]
    pub fn as_xywh(&self) -> BBox<Xywh> {
        self.into()
    }
}

impl BBox<Ltrb> {
    #[inline]
    pub fn ltrb(x1: f64, x2: f64, x3: f64, x4: f64) -> Self {
        BBox([x1, x2, x3, x4], Default::default())
    }

    #[inline]
    pub fn as_ltwh(&self) -> BBox<Ltwh> {
        self.into()
    }

    #[inline(always)]
    pub fn left(&self) -> f64 {
        self.0[0]
    }

    #[inline(always)]
    pub fn top(&self) -> f64 {
        self.0[1]
    }

    #[inline(always)]
    pub fn right(&self) -> f64 {
        self.0[2]
    }

    #[inline(always)]
    pub fn bottom(&self) -> f64 {
        self.0[3]
    }
}

impl BBox<Xywh> {
    #[inline]
    pub fn xywh(x1: f64, x2: f64, x3: f64, x4: f64) -> Self {
        BBox([x1, x2, x3, x4], Default::default())
    }

    #[inline]
    pub fn as_ltwh(&self) -> BBox<Ltwh> {
        self.into()
    }

    #[inline(always)]
    pub fn cx(&self) -> f64 {
        self.0[0]
    }

    #[inline(always)]
    pub fn cy(&self) -> f64 {
        self.0[1]
    }

    #[inline(always)]
    pub fn width(&self) -> f64 {
        self.0[2]
    }

    #[inline(always)]
    pub fn height(&self) -> f64 {
        self.0[3]
    }
}

impl<'a> From<&'a BBox<Ltwh>> for BBox<Ltrb> {
    #[inline]
    fn from(v: &'a BBox<Ltwh>) -> Self {
        Self(
            [v.0[0], v.0[1], v.0[2] + v.0[0], v.0[3] + v.0[1]],
            Default::default(),
        )
    }
}

impl<'a> From<&'a BBox<Ltrb>> for BBox<Ltwh> {
    #[inline]
    fn from(v: &'a BBox<Ltrb>) -> Self {
        Self(
            [v.0[0], v.0[1], v.0[2] - v.0[0], v.0[3] - v.0[1]],
            Default::default(),
        )
    }
}

impl<'a> From<&'a BBox<Ltwh>> for BBox<Xywh> {
    #[inline]
    fn from(v: &'a BBox<Ltwh>) -> Self {
        Self(
            [
                v.0[0] + v.0[2] / 2.0,
                v.0[1] + v.0[3] / 2.0,
                v.0[2],
                v.0[3],
            ],
            Default::default(),
        )
    }
}

impl<'a> From<&'a BBox<Xywh>> for BBox<Ltwh> {
    #[inline]
    fn from(v: &'a BBox<Xywh>) -> Self {
        Self(
            [v.0[0] - v.0[2] / 2.0, v.0[1] - v.0[3] / 2.0, v.0[2], v.0[3]],
            Default::default(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn iou_of_identical_boxes_is_one() {
        let a = BBox::ltwh(10.0, 10.0, 20.0, 20.0);
        assert_relative_eq!(a.iou(&a), 1.0);
    }

    #[test]
    fn iou_of_disjoint_boxes_is_zero() {
        let a = BBox::ltwh(0.0, 0.0, 10.0, 10.0);
        let b = BBox::ltwh(100.0, 100.0, 10.0, 10.0);
        assert_eq!(a.iou(&b), 0.0);
    }

    #[test]
    fn iou_of_touching_boxes_is_zero() {
        let a = BBox::ltwh(0.0, 0.0, 10.0, 10.0);
        let b = BBox::ltwh(10.0, 0.0, 10.0, 10.0);
        assert_eq!(a.iou(&b), 0.0);
    }

    #[test]
    fn iou_of_half_overlap() {
        // overlap 10x10 = 100, union 200 + 200 - 100 = 300
        let a = BBox::ltwh(0.0, 0.0, 20.0, 10.0);
        let b = BBox::ltwh(10.0, 0.0, 20.0, 10.0);
        assert_relative_eq!(a.iou(&b), 100.0 / 300.0);
        assert_relative_eq!(b.iou(&a), a.iou(&b));
    }

    #[test]
    fn iou_of_contained_box() {
        let outer = BBox::ltwh(0.0, 0.0, 20.0, 20.0);
        let inner = BBox::ltwh(5.0, 5.0, 10.0, 10.0);
        assert_relative_eq!(outer.iou(&inner), 100.0 / 400.0);
    }

    #[test]
    fn iou_of_degenerate_box_is_zero() {
        let line = BBox::ltwh(10.0, 10.0, 0.0, 20.0);
        let b = BBox::ltwh(5.0, 5.0, 20.0, 20.0);
        assert_eq!(line.iou(&b), 0.0);
        assert_eq!(line.iou(&line), 0.0);
    }

    #[test]
    fn ltwh_ltrb_roundtrip() {
        let a = BBox::ltwh(10.0, 20.0, 30.0, 40.0);
        let c = a.as_ltrb();
        assert_eq!(c.right(), 40.0);
        assert_eq!(c.bottom(), 60.0);
        assert_eq!(c.as_ltwh(), a);

        let raw: [f64; 4] = c.into();
        assert_eq!(raw, [10.0, 20.0, 40.0, 60.0]);
    }

    #[test]
    fn xywh_is_centered() {
        let a = BBox::xywh(50.0, 50.0, 20.0, 10.0);
        let l = a.as_ltwh();
        assert_eq!(l.left(), 40.0);
        assert_eq!(l.top(), 45.0);
        assert_eq!(l.cx(), 50.0);
        assert_eq!(l.cy(), 50.0);
        assert_eq!(l.as_xywh(), a);
    }

    #[test]
    fn translated_keeps_size() {
        let a = BBox::ltwh(10.0, 10.0, 20.0, 20.0).translated(2.5, -1.0);
        assert_eq!(a.as_slice(), &[12.5, 9.0, 20.0, 20.0]);
    }
}
