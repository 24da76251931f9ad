use std::ops::Index;
use std::ops::IndexMut;

/// Dense N-dimensional array over one contiguous buffer.
///
/// Row-major: the last axis is contiguous. Every access is bounds
/// checked per axis, so a bad coordinate panics instead of
/// silently aliasing into a neighbouring row.
#[derive(Debug, Clone, PartialEq)]
pub struct Tensor<T, const N: usize> {
    shape: [usize; N],
    strides: [usize; N],
    data: Vec<T>,
}

impl<T, const N: usize> Tensor<T, N>
where
    T: Copy + Default,
{
    /// allocate once, filled with `T::default()`
    pub fn zeros(shape: [usize; N]) -> Self {
        let size = shape
            .iter()
            .try_fold(1usize, |size, &axis| size.checked_mul(axis))
            .unwrap_or_else(|| panic!("tensor of shape {:?} overflows usize", shape));
        let mut strides = [1; N];
        for axis in (0..N.saturating_sub(1)).rev() {
            strides[axis] = strides[axis + 1] * shape[axis + 1];
        }
        Self {
            shape,
            strides,
            data: vec![T::default(); size],
        }
    }

    pub fn shape(&self) -> [usize; N] {
        self.shape
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    fn offset(&self, index: [usize; N]) -> usize {
        let mut offset = 0;
        for axis in 0..N {
            assert!(
                index[axis] < self.shape[axis],
                "index {:?} out of bounds for shape {:?}",
                index,
                self.shape
            );
            offset += index[axis] * self.strides[axis];
        }
        offset
    }
}

impl<T, const N: usize> Index<[usize; N]> for Tensor<T, N>
where
    T: Copy + Default,
{
    type Output = T;
    fn index(&self, index: [usize; N]) -> &Self::Output {
        &self.data[self.offset(index)]
    }
}

impl<T, const N: usize> IndexMut<[usize; N]> for Tensor<T, N>
where
    T: Copy + Default,
{
    fn index_mut(&mut self, index: [usize; N]) -> &mut Self::Output {
        let offset = self.offset(index);
        &mut self.data[offset]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_initialized() {
        let tensor = Tensor::<f64, 3>::zeros([2, 3, 4]);
        assert!(tensor.len() == 24);
        assert!(tensor.as_slice().iter().all(|x| *x == 0.));
    }

    #[test]
    fn row_major_layout() {
        let mut tensor = Tensor::<usize, 3>::zeros([2, 3, 4]);
        tensor[[1, 2, 3]] = 7;
        tensor[[0, 0, 1]] = 1;
        assert!(tensor.as_slice()[23] == 7);
        assert!(tensor.as_slice()[1] == 1);
        assert!(tensor[[1, 2, 3]] == 7);
    }

    #[test]
    fn four_axes() {
        let mut tensor = Tensor::<bool, 4>::zeros([2, 2, 2, 7]);
        tensor[[1, 0, 1, 6]] = true;
        assert!(tensor.as_slice().iter().filter(|b| **b).count() == 1);
        assert!(tensor[[1, 0, 1, 6]]);
        assert!(!tensor[[1, 0, 1, 5]]);
    }

    #[test]
    #[should_panic(expected = "out of bounds")]
    fn rejects_overflowing_axis() {
        // would alias into [1, 0, 0] without the per-axis check
        let tensor = Tensor::<f64, 3>::zeros([2, 3, 4]);
        let _ = tensor[[0, 3, 0]];
    }

    #[test]
    #[should_panic(expected = "overflows usize")]
    fn rejects_oversized_shape() {
        let _ = Tensor::<u8, 3>::zeros([usize::MAX, 2, 2]);
    }
}
