//! Integration tests for `ConstantLengthArray<T>`.

#![cfg(feature = "collections")]

use fpqueues::DataStructureError;
use fpqueues::collections::ConstantLengthArray;
use rstest::rstest;

#[rstest]
fn builder_requires_a_fill_source() {
    let error = ConstantLengthArray::<i32>::builder()
        .length(3)
        .build()
        .err();
    assert_eq!(
        error.map(|error| error.to_string()),
        Some("invalid configuration: a fill iterator or a fill value is required".to_string())
    );
}

#[rstest]
fn fill_source_is_required_even_without_padding() {
    let result = ConstantLengthArray::builder()
        .data([Some(1), Some(2)])
        .build();
    assert!(result.is_err());
}

#[rstest]
fn infinite_fill_iterator() {
    let array = ConstantLengthArray::builder()
        .data([Some(100)])
        .length(4)
        .fill_iterator(1..)
        .build();
    assert_eq!(
        array.map(|array| array.iter().copied().collect::<Vec<_>>()),
        Ok(vec![100, 1, 2, 3])
    );
}

#[rstest]
fn fill_iterator_then_fill_value_on_the_left() {
    let array = ConstantLengthArray::builder()
        .data([Some('z')])
        .length(-4)
        .fill_iterator(['a'])
        .fill_value('-')
        .build();
    assert_eq!(
        array.map(|array| array.to_string()),
        Ok("[|-, -, a, z|]".to_string())
    );
}

#[rstest]
fn length_stays_constant_through_set() -> Result<(), DataStructureError> {
    let mut array = ConstantLengthArray::builder()
        .length(3)
        .fill_value(0)
        .build()?;
    array.set(0, 5)?;
    array[2] = 7;
    assert_eq!(array.len(), 3);
    assert_eq!(array.iter().copied().collect::<Vec<_>>(), vec![5, 0, 7]);
    assert_eq!(
        array.get(3),
        Err(DataStructureError::IndexOutOfBounds {
            index: 3,
            length: 3
        })
    );
    Ok(())
}

#[rstest]
fn try_add_requires_equal_lengths() {
    let left: ConstantLengthArray<i32> = (1..=3).collect();
    let right: ConstantLengthArray<i32> = (1..=2).collect();
    assert_eq!(
        left.try_add(right).err(),
        Some(DataStructureError::SizeMismatch { left: 3, right: 2 })
    );
}

#[rstest]
fn try_add_combines_element_wise() -> Result<(), DataStructureError> {
    let left: ConstantLengthArray<String> = ["a", "b"].into_iter().map(String::from).collect();
    let right: ConstantLengthArray<&str> = ["1", "2"].into_iter().collect();
    let sum = left.try_add(right)?;
    assert_eq!(sum.to_string(), "[|a1, b2|]");
    Ok(())
}

#[rstest]
fn equality_is_by_elements() {
    let built = ConstantLengthArray::builder()
        .data([Some(1), Some(2)])
        .fill_value(0)
        .build();
    let collected: ConstantLengthArray<i32> = (1..=2).collect();
    assert_eq!(built, Ok(collected));
}
