//! Multi-index argmax over dense score tensors.

use ndarray::{ArrayBase, Data, Dimension};

use crate::error::CodecError;

/// Coordinate of the first maximum element in row-major order.
///
/// The flat index of the maximum is decomposed axis by axis, dividing by
/// the product of the remaining axis sizes. Ties keep the earliest
/// row-major position. Zero-size tensors are rejected with `EmptyInput`.
pub fn argmax_coordinate<A, S, D>(tensor: &ArrayBase<S, D>) -> Result<Vec<usize>, CodecError>
where
    A: PartialOrd + Copy,
    S: Data<Elem = A>,
    D: Dimension,
{
    let mut iter = tensor.iter();
    let mut best_value = *iter.next().ok_or(CodecError::EmptyInput)?;
    let mut best_flat = 0;
    for (offset, &value) in iter.enumerate() {
        if value > best_value {
            best_value = value;
            best_flat = offset + 1;
        }
    }

    let shape = tensor.shape();
    let mut remaining: usize = shape.iter().product();
    let mut flat = best_flat;
    let mut coordinate = Vec::with_capacity(shape.len());
    for &dim in shape {
        remaining /= dim;
        coordinate.push(flat / remaining);
        flat %= remaining;
    }
    Ok(coordinate)
}

#[cfg(test)]
mod tests {
    use ndarray::{arr1, arr2, Array3, ArrayD, IxDyn};

    use super::*;

    #[test]
    fn flat_argmax() {
        let arr = arr1(&[1.0, 2.0, 3.0, 2.0, 1.0]);
        assert_eq!(argmax_coordinate(&arr).unwrap(), vec![2]);
    }

    #[test]
    fn multi_axis_argmax() {
        let mut arr = Array3::<f32>::zeros((2, 2, 3));
        arr[[1, 1, 2]] = 5.0;
        assert_eq!(argmax_coordinate(&arr).unwrap(), vec![1, 1, 2]);
    }

    #[test]
    fn ties_keep_first_row_major_position() {
        let mut arr = Array3::<f32>::zeros((2, 2, 3));
        arr[[0, 1, 0]] = 7.0;
        arr[[1, 0, 2]] = 7.0;
        assert_eq!(argmax_coordinate(&arr).unwrap(), vec![0, 1, 0]);
    }

    #[test]
    fn empty_tensor_is_rejected() {
        let arr = ArrayD::<f32>::zeros(IxDyn(&[0, 4]));
        assert!(matches!(
            argmax_coordinate(&arr),
            Err(CodecError::EmptyInput)
        ));
    }

    #[test]
    fn integer_elements() {
        let arr = arr2(&[[1, 9], [3, 9]]);
        assert_eq!(argmax_coordinate(&arr).unwrap(), vec![0, 1]);
    }

    #[test]
    fn dynamic_rank_views() {
        let mut arr = ArrayD::<f32>::zeros(IxDyn(&[8, 8, 8, 8, 6]));
        arr[IxDyn(&[6, 4, 4, 4, 0])] = 0.9;
        assert_eq!(
            argmax_coordinate(&arr.view()).unwrap(),
            vec![6, 4, 4, 4, 0]
        );
    }
}
