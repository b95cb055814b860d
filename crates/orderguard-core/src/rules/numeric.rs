use arrow_array::{ArrowNumericType, PrimitiveArray};
use num_traits::Zero;

/// Counts strictly negative values.
///
/// Missing values are neither negative nor positive and never trigger
/// the check.
pub struct NegativeCheck;

impl NegativeCheck {
    pub fn validate<T>(&self, array: &PrimitiveArray<T>) -> usize
    where
        T: ArrowNumericType,
        T::Native: Zero + PartialOrd,
    {
        let zero = T::Native::zero();
        array.iter().flatten().filter(|value| *value < zero).count()
    }
}

#[cfg(test)]
mod tests {
    use arrow::array::{Float64Array, Int64Array};

    use super::*;

    #[test]
    fn test_negative_integers() {
        let array = Int64Array::from(vec![Some(1), Some(-2), Some(0), Some(-5), None]);
        assert_eq!(NegativeCheck.validate(&array), 2);
    }

    #[test]
    fn test_all_non_negative() {
        let array = Int64Array::from(vec![Some(0), Some(1), Some(7)]);
        assert_eq!(NegativeCheck.validate(&array), 0);
    }

    #[test]
    fn test_negative_floats() {
        let array = Float64Array::from(vec![Some(10.5), Some(-0.01), None]);
        assert_eq!(NegativeCheck.validate(&array), 1);
    }

    #[test]
    fn test_nulls_do_not_trigger() {
        let array = Int64Array::from(vec![None, None]);
        assert_eq!(NegativeCheck.validate(&array), 0);
    }
}
