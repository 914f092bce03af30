use bytemuck::{Pod, Zeroable};
use std::ops::{Index, IndexMut, Mul};

use crate::errors::{MathError, Result};
use crate::vector::Vec3;

/// A 4x4 matrix of `f32`s stored in column-major order.
///
/// Field `mRC` is the element at row `R` and column `C`, so the fields are declared column by
/// column: `m11, m21, m31, m41` make up the first column, `m12, m22, m32, m42` the second, and so on.
/// This is the layout graphics APIs expect when uploading a 4x4 matrix uniform.
#[repr(C)]
#[derive(Copy, Clone, Debug, Default, PartialEq, Pod, Zeroable)]
pub struct Mat4 {
    pub m11: f32,
    pub m21: f32,
    pub m31: f32,
    pub m41: f32,

    pub m12: f32,
    pub m22: f32,
    pub m32: f32,
    pub m42: f32,

    pub m13: f32,
    pub m23: f32,
    pub m33: f32,
    pub m43: f32,

    pub m14: f32,
    pub m24: f32,
    pub m34: f32,
    pub m44: f32,
}

impl Mat4 {
    /// All sixteen elements set to zero
    pub const ZERO: Self = Self::from_scalar(0.0);

    pub const IDENTITY: Self = Self::from_scalar(1.0);

    /// Creates a matrix with `i` on the main diagonal and zero everywhere else.
    pub const fn from_scalar(i: f32) -> Self {
        Self::from_cols_array([
            i, 0.0, 0.0, 0.0, //
            0.0, i, 0.0, 0.0, //
            0.0, 0.0, i, 0.0, //
            0.0, 0.0, 0.0, i,
        ])
    }

    pub const fn from_cols_array(m: [f32; 16]) -> Self {
        Mat4 {
            m11: m[0],
            m21: m[1],
            m31: m[2],
            m41: m[3],
            m12: m[4],
            m22: m[5],
            m32: m[6],
            m42: m[7],
            m13: m[8],
            m23: m[9],
            m33: m[10],
            m43: m[11],
            m14: m[12],
            m24: m[13],
            m34: m[14],
            m44: m[15],
        }
    }

    /// Resets this matrix to the identity in place.
    pub fn set_identity(&mut self) {
        *self = Self::IDENTITY;
    }

    /// Returns the sixteen elements in column-major order.
    pub fn to_cols_array(&self) -> [f32; 16] {
        *self.as_cols_array()
    }

    /// Borrows the sixteen elements in column-major order, ready to be handed to a uniform upload.
    pub fn as_cols_array(&self) -> &[f32; 16] {
        bytemuck::cast_ref(self)
    }

    /// Raw bytes of the column-major elements
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::bytes_of(self)
    }

    /// Transforms a point, treating it as a column vector with an implicit `w` of 1.
    pub fn transform_point3(&self, point: Vec3) -> Vec3 {
        Vec3::new(
            self.m11 * point.x + self.m12 * point.y + self.m13 * point.z + self.m14,
            self.m21 * point.x + self.m22 * point.y + self.m23 * point.z + self.m24,
            self.m31 * point.x + self.m32 * point.y + self.m33 * point.z + self.m34,
        )
    }

    fn as_cols(&self) -> &[[f32; 4]; 4] {
        bytemuck::cast_ref(self)
    }

    fn as_cols_mut(&mut self) -> &mut [[f32; 4]; 4] {
        bytemuck::cast_mut(self)
    }
}

impl Mul for Mat4 {
    type Output = Self;

    // result[col][row] = sum over k of self[k][row] * rhs[col][k]
    fn mul(self, rhs: Self) -> Self::Output {
        let a = self.as_cols();
        let b = rhs.as_cols();

        let mut result = Mat4::ZERO;
        let out = result.as_cols_mut();

        for (col, out_col) in out.iter_mut().enumerate() {
            for (row, value) in out_col.iter_mut().enumerate() {
                *value = (0..4).map(|k| a[k][row] * b[col][k]).sum();
            }
        }

        result
    }
}

/// Indexes the matrix with a `(column, row)` pair, both zero based.
impl Index<(usize, usize)> for Mat4 {
    type Output = f32;

    fn index(&self, (col, row): (usize, usize)) -> &Self::Output {
        &self.as_cols()[col][row]
    }
}

impl IndexMut<(usize, usize)> for Mat4 {
    fn index_mut(&mut self, (col, row): (usize, usize)) -> &mut Self::Output {
        &mut self.as_cols_mut()[col][row]
    }
}

impl From<[f32; 16]> for Mat4 {
    fn from(value: [f32; 16]) -> Self {
        Mat4::from_cols_array(value)
    }
}

impl From<Mat4> for [f32; 16] {
    fn from(value: Mat4) -> Self {
        value.to_cols_array()
    }
}

impl TryFrom<&[f32]> for Mat4 {
    type Error = MathError;

    fn try_from(value: &[f32]) -> Result<Self> {
        let cols: [f32; 16] = value.try_into().map_err(|_| MathError::InvalidLength {
            expected: 16,
            actual: value.len(),
        })?;

        Ok(Mat4::from_cols_array(cols))
    }
}

#[cfg(test)]
mod test {
    use approx::assert_relative_eq;
    use rand::{rngs::StdRng, Rng, SeedableRng};

    use super::Mat4;
    use crate::errors::MathError;
    use crate::vector::Vec3;

    fn random_mat4(rng: &mut StdRng) -> Mat4 {
        Mat4::from_cols_array(std::array::from_fn(|_| rng.random_range(-2.0..2.0)))
    }

    fn sequential() -> Mat4 {
        Mat4::from_cols_array(std::array::from_fn(|i| i as f32 + 1.0))
    }

    #[test]
    fn default_is_all_zero() {
        assert_eq!(Mat4::default().to_cols_array(), [0.0; 16]);
        assert_eq!(Mat4::default(), Mat4::ZERO);
    }

    #[test]
    fn scalar_constructor_fills_diagonal_only() {
        let m = Mat4::from_scalar(2.0);

        for col in 0..4 {
            for row in 0..4 {
                let expected = if col == row { 2.0 } else { 0.0 };
                assert_eq!(m[(col, row)], expected, "element at column {col}, row {row}");
            }
        }

        assert_eq!([m.m11, m.m22, m.m33, m.m44], [2.0; 4]);
    }

    #[test]
    fn set_identity_overwrites_everything() {
        let mut m = sequential();
        m.set_identity();

        assert_eq!(m, Mat4::IDENTITY);
        assert_eq!(Mat4::from_scalar(1.0), Mat4::IDENTITY);
    }

    #[test]
    fn fields_are_laid_out_column_major() {
        let m = sequential();

        assert_eq!([m.m11, m.m21, m.m31, m.m41], [1.0, 2.0, 3.0, 4.0]);
        assert_eq!([m.m12, m.m22, m.m32, m.m42], [5.0, 6.0, 7.0, 8.0]);
        assert_eq!([m.m14, m.m24, m.m34, m.m44], [13.0, 14.0, 15.0, 16.0]);

        assert_eq!(m[(2, 3)], m.m43);
        assert_eq!(m[(3, 0)], m.m14);
        assert_eq!(m.as_bytes().len(), 16 * std::mem::size_of::<f32>());
    }

    #[test]
    #[should_panic]
    fn index_out_of_range_panics() {
        let m = Mat4::IDENTITY;
        let _value = m[(4, 0)];
    }

    #[test]
    fn identity_is_neutral() {
        let mut rng = StdRng::seed_from_u64(3);

        for _ in 0..32 {
            let m = random_mat4(&mut rng);

            assert_eq!(Mat4::IDENTITY * m, m);
            assert_eq!(m * Mat4::IDENTITY, m);
        }
    }

    #[test]
    fn multiplication_matches_known_product() {
        let a = sequential();
        let b = Mat4::from_scalar(2.0);

        assert_eq!((a * b).to_cols_array(), a.to_cols_array().map(|v| v * 2.0));

        // Translation followed by translation adds the offsets
        let t1 = Mat4::from_translation(Vec3::new(1.0, 2.0, 3.0));
        let t2 = Mat4::from_translation(Vec3::new(-4.0, 0.5, 1.0));
        let t = t1 * t2;

        assert_eq!([t.m14, t.m24, t.m34], [-3.0, 2.5, 4.0]);
    }

    #[test]
    fn multiplication_follows_row_times_column() {
        let a = sequential();
        let b = Mat4::from_cols_array(std::array::from_fn(|i| 16.0 - i as f32));
        let product = a * b;

        for col in 0..4 {
            for row in 0..4 {
                let expected: f32 = (0..4).map(|k| a[(k, row)] * b[(col, k)]).sum();
                assert_eq!(product[(col, row)], expected);
            }
        }
    }

    #[test]
    fn multiplication_does_not_touch_operands() {
        let a = sequential();
        let b = Mat4::from_scalar(3.0);
        let _ = a * b;

        assert_eq!(a, sequential());
        assert_eq!(b, Mat4::from_scalar(3.0));
    }

    #[test]
    fn multiplication_is_associative() {
        let mut rng = StdRng::seed_from_u64(4);

        for _ in 0..64 {
            let a = random_mat4(&mut rng);
            let b = random_mat4(&mut rng);
            let c = random_mat4(&mut rng);

            let left = ((a * b) * c).to_cols_array();
            let right = (a * (b * c)).to_cols_array();

            for (l, r) in left.iter().zip(right.iter()) {
                assert_relative_eq!(*l, *r, epsilon = 1e-3);
            }
        }
    }

    #[test]
    fn transform_point_applies_translation_column() {
        let m = Mat4::from_translation(Vec3::new(1.0, -2.0, 0.5));

        assert_eq!(m.transform_point3(Vec3::ZERO), Vec3::new(1.0, -2.0, 0.5));
        assert_eq!(Mat4::IDENTITY.transform_point3(Vec3::X), Vec3::X);
    }

    #[test]
    fn try_from_slice_requires_sixteen_elements() {
        let values = sequential().to_cols_array();

        assert_eq!(Mat4::try_from(&values[..]).ok(), Some(sequential()));

        let error = Mat4::try_from(&values[..9]).unwrap_err();
        assert!(matches!(
            error,
            MathError::InvalidLength {
                expected: 16,
                actual: 9
            }
        ));
    }
}
