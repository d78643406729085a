use std::{
    fmt::Display,
    iter::Sum,
    ops::{Add, AddAssign, Mul, Neg, Sub, SubAssign},
};

use super::lerp;

/// A tapered score: a middlegame half and an endgame half that are
/// combined independently and only blended by game phase at the very end.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Default)]
pub struct S(pub i32, pub i32);

impl Add for S {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        Self(self.0 + rhs.0, self.1 + rhs.1)
    }
}

impl Sub for S {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self {
        Self(self.0 - rhs.0, self.1 - rhs.1)
    }
}

impl AddAssign for S {
    fn add_assign(&mut self, rhs: Self) {
        self.0 += rhs.0;
        self.1 += rhs.1;
    }
}

impl SubAssign for S {
    fn sub_assign(&mut self, rhs: Self) {
        self.0 -= rhs.0;
        self.1 -= rhs.1;
    }
}

impl Neg for S {
    type Output = Self;

    fn neg(self) -> Self {
        Self(-self.0, -self.1)
    }
}

impl Mul<i32> for S {
    type Output = Self;

    fn mul(self, rhs: i32) -> Self {
        Self(self.0 * rhs, self.1 * rhs)
    }
}

impl Sum for S {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self(0, 0), |acc, x| acc + x)
    }
}

impl Display for S {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "S({}, {})", self.0, self.1)
    }
}

impl S {
    pub const NULL: Self = Self(0, 0);

    pub const fn mg(self) -> i32 {
        self.0
    }

    pub const fn eg(self) -> i32 {
        self.1
    }

    pub fn value(self, phase: i32) -> i32 {
        lerp(self.0, self.1, phase)
    }

    /// The larger of the absolute values of the two halves.
    pub const fn magnitude(self) -> u32 {
        max!(self.0.unsigned_abs(), self.1.unsigned_abs())
    }

    pub const fn fits_i16(self) -> bool {
        self.0 >= i16::MIN as i32
            && self.0 <= i16::MAX as i32
            && self.1 >= i16::MIN as i32
            && self.1 <= i16::MAX as i32
    }

    /// Packs the score into a single 32-bit word, if both halves fit in 16 bits.
    #[allow(clippy::cast_possible_truncation)]
    pub const fn try_pack(self) -> Option<PackedS> {
        if self.fits_i16() { Some(PackedS::new(self.0 as i16, self.1 as i16)) } else { None }
    }
}

/// Both halves of a tapered score in one `i32`, laid out as `(eg << 16) + mg`.
///
/// Addition, subtraction and negation on the packed word act on each half
/// independently, provided every intermediate half stays within `i16`.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Default)]
pub struct PackedS(i32);

impl PackedS {
    pub const NULL: Self = Self(0);

    #[allow(clippy::cast_sign_loss, clippy::cast_possible_wrap)]
    pub const fn new(mg: i16, eg: i16) -> Self {
        Self((((eg as u32) << 16) as i32).wrapping_add(mg as i32))
    }

    #[allow(clippy::cast_possible_truncation)]
    pub const fn mg(self) -> i16 {
        self.0 as i16
    }

    /// The endgame half. Adding `0x8000` first absorbs the borrow that a
    /// negative middlegame half leaves in the upper word.
    #[allow(clippy::cast_possible_truncation)]
    pub const fn eg(self) -> i16 {
        (self.0.wrapping_add(0x8000) >> 16) as i16
    }

    pub const fn unpack(self) -> S {
        S(self.mg() as i32, self.eg() as i32)
    }

    pub const fn inner(self) -> i32 {
        self.0
    }
}

impl Add for PackedS {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        Self(self.0.wrapping_add(rhs.0))
    }
}

impl Sub for PackedS {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self {
        Self(self.0.wrapping_sub(rhs.0))
    }
}

impl Neg for PackedS {
    type Output = Self;
    fn neg(self) -> Self {
        Self(self.0.wrapping_neg())
    }
}

impl AddAssign for PackedS {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl SubAssign for PackedS {
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

impl Display for PackedS {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.unpack())
    }
}
